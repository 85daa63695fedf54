use crate::auth::session::SessionUser;

/// The three screens of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Gallery,
    Admin,
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Gallery => "/",
            Route::Admin => "/admin",
            Route::Login => "/login",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

/// Decide whether a route renders for the given session or sends the
/// browser elsewhere.
pub fn resolve(route: Route, session: Option<&SessionUser>) -> Resolution {
    match (route, session) {
        (Route::Admin, None) => Resolution::Redirect(Route::Login),
        (Route::Login, Some(_)) => Resolution::Redirect(Route::Admin),
        (route, _) => Resolution::Render(route),
    }
}

/// One entry of the header navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Header model shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub links: Vec<NavLink>,
    pub user_label: Option<String>,
    pub dark: bool,
}

impl Header {
    pub fn build(path: &str, session: Option<&SessionUser>, dark: bool) -> Self {
        let on_admin = path.starts_with(Route::Admin.path());

        let mut links = vec![NavLink {
            label: "Gallery",
            href: Route::Gallery.path(),
            active: !on_admin,
        }];
        if session.is_some() {
            links.push(NavLink {
                label: "Admin",
                href: Route::Admin.path(),
                active: on_admin,
            });
        }

        Self {
            links,
            user_label: session.map(|user| user.label().to_string()),
            dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> SessionUser {
        SessionUser {
            id: "1".into(),
            email: "earl@example.com".into(),
            display_name: Some("Earl".into()),
        }
    }

    #[test]
    fn admin_without_session_redirects_to_login() {
        assert_eq!(
            resolve(Route::Admin, None),
            Resolution::Redirect(Route::Login)
        );
    }

    #[test]
    fn admin_with_session_renders() {
        let user = admin();
        assert_eq!(
            resolve(Route::Admin, Some(&user)),
            Resolution::Render(Route::Admin)
        );
    }

    #[test]
    fn login_with_session_redirects_to_admin() {
        let user = admin();
        assert_eq!(
            resolve(Route::Login, Some(&user)),
            Resolution::Redirect(Route::Admin)
        );
    }

    #[test]
    fn login_without_session_renders() {
        assert_eq!(resolve(Route::Login, None), Resolution::Render(Route::Login));
    }

    #[test]
    fn gallery_always_renders() {
        let user = admin();
        assert_eq!(
            resolve(Route::Gallery, None),
            Resolution::Render(Route::Gallery)
        );
        assert_eq!(
            resolve(Route::Gallery, Some(&user)),
            Resolution::Render(Route::Gallery)
        );
    }

    #[test]
    fn header_hides_admin_link_when_logged_out() {
        let header = Header::build("/", None, false);
        let labels: Vec<&str> = header.links.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Gallery"]);
        assert!(header.user_label.is_none());
    }

    #[test]
    fn header_marks_admin_active_under_admin_paths() {
        let user = admin();
        let header = Header::build("/admin?tab=stats", Some(&user), true);
        assert_eq!(header.links.len(), 2);
        assert!(!header.links[0].active);
        assert!(header.links[1].active);
        assert_eq!(header.user_label.as_deref(), Some("Earl"));
        assert!(header.dark);
    }
}
