use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::auth::session::AuthError;
use crate::error::AppResult;
use crate::extractors::{MaybeUser, PageHeader};
use crate::navigation::{resolve, Header, Resolution, Route};
use crate::routes::home::Html;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "pages/login.html")]
pub struct LoginTemplate {
    pub header: Header,
    pub email: String,
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /login: render the form, or bounce to the dashboard when logged in
pub async fn login_page(
    PageHeader(header): PageHeader,
    MaybeUser(user): MaybeUser,
) -> Response {
    match resolve(Route::Login, user.as_ref()) {
        Resolution::Redirect(to) => Redirect::to(to.path()).into_response(),
        Resolution::Render(_) => Html(LoginTemplate {
            header,
            email: String::new(),
            error: None,
        })
        .into_response(),
    }
}

/// POST /login: check the credential pair
pub async fn login(
    State(state): State<AppState>,
    PageHeader(header): PageHeader,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let mut session = state.session.lock().await;

    if let Resolution::Redirect(to) = resolve(Route::Login, session.current()) {
        return Ok(Redirect::to(to.path()).into_response());
    }

    match session.login(&form.email, &form.password) {
        Ok(_) => Ok(Redirect::to(Route::Admin.path()).into_response()),
        Err(AuthError::InvalidCredentials) => Ok((
            StatusCode::UNAUTHORIZED,
            Html(LoginTemplate {
                header,
                email: form.email,
                error: Some(AuthError::InvalidCredentials.to_string()),
            }),
        )
            .into_response()),
        Err(AuthError::Store(e)) => Err(e),
    }
}

/// POST /logout: always ends the session
pub async fn logout(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.logout();
    Redirect::to(Route::Gallery.path())
}
