use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::auth::session::SessionUser;
use crate::navigation::Header;
use crate::state::AppState;

/// The session user, if anyone is logged in.
pub struct MaybeUser(pub Option<SessionUser>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.session.lock().await;
        Ok(MaybeUser(session.current().cloned()))
    }
}

/// Header model for the page being rendered.
pub struct PageHeader(pub Header);

impl FromRequestParts<AppState> for PageHeader {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let dark = state.theme.lock().await.is_dark();
        let session = state.session.lock().await;
        Ok(PageHeader(Header::build(
            parts.uri.path(),
            session.current(),
            dark,
        )))
    }
}

/// Same-site location to send the browser back to after a command,
/// taken from the `Referer` header. Defaults to `/`.
pub struct ReturnTo(pub String);

impl<S: Send + Sync> FromRequestParts<S> for ReturnTo {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let target = parts
            .headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .and_then(local_path)
            .unwrap_or("/");
        Ok(ReturnTo(target.to_string()))
    }
}

/// Path and query of a referer, dropping scheme and authority.
fn local_path(referer: &str) -> Option<&str> {
    let path = if referer.starts_with('/') {
        referer
    } else {
        let (_, rest) = referer.split_once("://")?;
        &rest[rest.find('/')?..]
    };
    // A second slash or backslash would make browsers treat it as a host.
    if path.starts_with("//") || path.starts_with("/\\") {
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_path_strips_origin() {
        assert_eq!(
            local_path("http://localhost:3000/?filter=images"),
            Some("/?filter=images")
        );
        assert_eq!(local_path("https://gallery.example/media/3"), Some("/media/3"));
    }

    #[test]
    fn local_path_keeps_relative_paths() {
        assert_eq!(local_path("/admin?tab=manage"), Some("/admin?tab=manage"));
    }

    #[test]
    fn local_path_rejects_protocol_relative_and_bare_hosts() {
        assert_eq!(local_path("//evil.example/"), None);
        assert_eq!(local_path("http://localhost:3000"), None);
        assert_eq!(local_path("garbage"), None);
        assert_eq!(local_path("/\\evil.example/"), None);
        assert_eq!(
            local_path("http://evil.example//evil.example/phish"),
            None
        );
        assert_eq!(local_path("https://localhost:3000/\\evil.example"), None);
    }
}
