use yew_router::prelude::*;

use crate::types::StoredSession;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized! Admins only.";

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/user")]
    User,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Where unauthenticated visitors and logouts land.
    pub const ENTRY: Route = Route::Login;
}

/// Proof that a username is stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSession {
    username: String,
}

impl ActiveSession {
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Proof that the stored role is `admin`. Client-side only; the backend
/// does not check it.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminSession(());

impl StoredSession {
    pub fn require_user(&self) -> Option<ActiveSession> {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| ActiveSession {
                username: name.to_string(),
            })
    }

    pub fn require_admin(&self) -> Option<AdminSession> {
        (self.role.as_deref() == Some("admin")).then_some(AdminSession(()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageEntry {
    /// Login, signup and unknown pages; nothing runs until a button is pressed.
    Public,
    User(ActiveSession),
    Admin(AdminSession),
    Redirect {
        alert: Option<&'static str>,
        to: Route,
    },
}

pub fn guard(route: Route, session: &StoredSession) -> PageEntry {
    match route {
        Route::User => match session.require_user() {
            Some(active) => PageEntry::User(active),
            None => PageEntry::Redirect {
                alert: None,
                to: Route::ENTRY,
            },
        },
        Route::Admin => match session.require_admin() {
            Some(admin) => PageEntry::Admin(admin),
            None => PageEntry::Redirect {
                alert: Some(UNAUTHORIZED_MESSAGE),
                to: Route::ENTRY,
            },
        },
        Route::Login | Route::Signup | Route::NotFound => PageEntry::Public,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(username: Option<&str>, role: Option<&str>) -> StoredSession {
        StoredSession {
            username: username.map(str::to_string),
            role: role.map(str::to_string),
        }
    }

    #[test]
    fn test_user_page_requires_username() {
        assert_eq!(
            guard(Route::User, &session(None, Some("user"))),
            PageEntry::Redirect { alert: None, to: Route::Login }
        );
        assert_eq!(
            guard(Route::User, &session(Some(""), Some("user"))),
            PageEntry::Redirect { alert: None, to: Route::Login }
        );
        match guard(Route::User, &session(Some("alice"), Some("user"))) {
            PageEntry::User(active) => assert_eq!(active.username(), "alice"),
            other => panic!("unexpected entry: {:?}", other),
        }
    }

    #[test]
    fn test_admin_page_requires_exact_admin_role() {
        for role in [None, Some("user"), Some("Admin"), Some("admin ")] {
            assert_eq!(
                guard(Route::Admin, &session(Some("root"), role)),
                PageEntry::Redirect {
                    alert: Some(UNAUTHORIZED_MESSAGE),
                    to: Route::Login
                }
            );
        }
        assert!(matches!(
            guard(Route::Admin, &session(None, Some("admin"))),
            PageEntry::Admin(_)
        ));
    }

    #[test]
    fn test_entry_pages_run_nothing() {
        let empty = StoredSession::default();
        assert_eq!(guard(Route::Login, &empty), PageEntry::Public);
        assert_eq!(guard(Route::Signup, &empty), PageEntry::Public);
        assert_eq!(guard(Route::NotFound, &empty), PageEntry::Public);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::ENTRY.to_path(), "/");
        assert_eq!(Route::User.to_path(), "/user");
        assert_eq!(Route::Admin.to_path(), "/admin");
    }
}
