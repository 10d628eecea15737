//! Path resolution on top of the route table and guard.
//!
//! [`Router::resolve`] makes one decision for one requested path.
//! [`Router::navigate`] keeps resolving redirect targets the way the
//! browser does after a hash replacement, until a view is reached.

use crate::config::MAX_REDIRECTS;
use crate::core::error::RouterError;
use crate::core::guard::{self, GuardDecision};
use crate::models::{ROOT_PATH, RootPolicy, RouteTable, Session, View, normalize_path, to_hash};

/// Why a navigation was redirected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// The bare root path is always redirected.
    Root,
    /// Destination needs a session and none is active.
    Unauthenticated,
}

/// Navigation directive handed back to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Commit the destination and render `view`.
    Proceed { path: String, view: View },
    /// Replace the in-flight target with `to`.
    Redirect {
        from: String,
        to: String,
        reason: RedirectReason,
    },
    /// No route matches; the host renders its not-found view.
    NotFound { path: String },
}

impl Navigation {
    /// Path the browser should end up showing.
    pub fn target(&self) -> &str {
        match self {
            Self::Proceed { path, .. } | Self::NotFound { path } => path,
            Self::Redirect { to, .. } => to,
        }
    }

    /// URL hash for [`Navigation::target`].
    pub fn to_hash(&self) -> String {
        to_hash(self.target())
    }

    pub fn view(&self) -> Option<View> {
        match self {
            Self::Proceed { view, .. } => Some(*view),
            _ => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

/// Route table plus root handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Router {
    table: RouteTable,
    root_policy: RootPolicy,
}

impl Router {
    pub fn new(table: RouteTable, root_policy: RootPolicy) -> Self {
        Self { table, root_policy }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn root_policy(&self) -> RootPolicy {
        self.root_policy
    }

    /// Path of the login route.
    pub fn login_path(&self) -> &'static str {
        self.table.login_entry().path
    }

    /// Path of the home route, or login when the table has none.
    pub fn home_path(&self) -> &'static str {
        self.table
            .path_of(View::Home)
            .unwrap_or_else(|| self.login_path())
    }

    /// Where the bare root path redirects to.
    pub fn root_target(&self) -> &'static str {
        match self.root_policy {
            RootPolicy::RedirectToLogin => self.login_path(),
            RootPolicy::RedirectToHome => self.home_path(),
        }
    }

    /// Make a single navigation decision for `path`.
    pub fn resolve(&self, path: &str, session: &Session) -> Navigation {
        let path = normalize_path(path);

        if path == ROOT_PATH {
            return Navigation::Redirect {
                from: path,
                to: self.root_target().to_string(),
                reason: RedirectReason::Root,
            };
        }

        let Some(entry) = self.table.lookup(&path) else {
            return Navigation::NotFound { path };
        };

        match guard::check(entry, session) {
            GuardDecision::Allow => Navigation::Proceed {
                path,
                view: entry.view,
            },
            GuardDecision::RedirectToLogin => Navigation::Redirect {
                from: path,
                to: self.login_path().to_string(),
                reason: RedirectReason::Unauthenticated,
            },
        }
    }

    /// Resolve `path`, following redirects until a view or not-found.
    ///
    /// A validated table settles within two redirects (root to home, home
    /// to login) because its login entry is always public. The bound only
    /// trips for tables built without validation.
    pub fn navigate(&self, path: &str, session: &Session) -> Result<Navigation, RouterError> {
        let mut current = path.to_string();
        for _ in 0..=MAX_REDIRECTS {
            match self.resolve(&current, session) {
                Navigation::Redirect { to, .. } => current = to,
                settled => return Ok(settled),
            }
        }
        Err(RouterError::RedirectLoop {
            path: normalize_path(path),
            hops: MAX_REDIRECTS,
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouteTable::default_routes(), crate::config::ROOT_POLICY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteEntry;

    fn router(policy: RootPolicy) -> Router {
        Router::new(RouteTable::default_routes(), policy)
    }

    fn redirect(from: &str, to: &str, reason: RedirectReason) -> Navigation {
        Navigation::Redirect {
            from: from.to_string(),
            to: to.to_string(),
            reason,
        }
    }

    #[test]
    fn test_anonymous_home_redirects_to_login() {
        let r = router(RootPolicy::RedirectToLogin);
        assert_eq!(
            r.resolve("/home", &Session::anonymous()),
            redirect("/home", "/login", RedirectReason::Unauthenticated)
        );
    }

    #[test]
    fn test_authenticated_home_proceeds() {
        let r = router(RootPolicy::RedirectToLogin);
        let nav = r.resolve("/home", &Session::with_token("abc123"));
        assert_eq!(
            nav,
            Navigation::Proceed {
                path: "/home".to_string(),
                view: View::Home,
            }
        );
        assert_eq!(nav.view(), Some(View::Home));
    }

    #[test]
    fn test_login_always_reachable() {
        let r = router(RootPolicy::RedirectToLogin);
        for session in [Session::anonymous(), Session::with_token("abc123")] {
            assert_eq!(r.resolve("/login", &session).view(), Some(View::Login));
        }
    }

    #[test]
    fn test_root_redirects_per_policy() {
        let session = Session::with_token("abc123");

        let to_login = router(RootPolicy::RedirectToLogin);
        assert_eq!(
            to_login.resolve("/", &session),
            redirect("/", "/login", RedirectReason::Root)
        );

        let to_home = router(RootPolicy::RedirectToHome);
        assert_eq!(
            to_home.resolve("", &session),
            redirect("/", "/home", RedirectReason::Root)
        );
    }

    #[test]
    fn test_root_redirects_even_without_session() {
        let r = router(RootPolicy::RedirectToLogin);
        assert_eq!(
            r.resolve("#/", &Session::anonymous()),
            redirect("/", "/login", RedirectReason::Root)
        );
    }

    #[test]
    fn test_cleared_token_is_not_cached() {
        let r = router(RootPolicy::RedirectToLogin);
        let active = Session::with_token("abc123");
        assert!(!r.resolve("/profile", &active).is_redirect());

        let cleared = Session::anonymous();
        assert_eq!(
            r.resolve("/profile", &cleared),
            redirect("/profile", "/login", RedirectReason::Unauthenticated)
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let r = router(RootPolicy::RedirectToHome);
        for session in [Session::anonymous(), Session::with_token("abc123")] {
            for path in ["/", "/login", "/home", "/profile", "/search", "/missing"] {
                assert_eq!(r.resolve(path, &session), r.resolve(path, &session));
            }
        }
    }

    #[test]
    fn test_unmatched_path_is_not_found() {
        let r = router(RootPolicy::RedirectToLogin);
        assert_eq!(
            r.resolve("#/settings/", &Session::with_token("abc123")),
            Navigation::NotFound {
                path: "/settings".to_string(),
            }
        );
    }

    #[test]
    fn test_navigate_follows_redirects() {
        let r = router(RootPolicy::RedirectToHome);

        let anonymous = r.navigate("/", &Session::anonymous()).unwrap();
        assert_eq!(anonymous.view(), Some(View::Login));
        assert_eq!(anonymous.to_hash(), "#/login");

        let active = r.navigate("/", &Session::with_token("abc123")).unwrap();
        assert_eq!(active.view(), Some(View::Home));
        assert_eq!(active.to_hash(), "#/home");
    }

    #[test]
    fn test_root_to_home_falls_back_to_login() {
        let table = RouteTable::new(vec![
            RouteEntry::public("/login", View::Login),
            RouteEntry::protected("/search", View::Search),
        ])
        .unwrap();
        let r = Router::new(table, RootPolicy::RedirectToHome);
        assert_eq!(r.root_target(), "/login");
        assert_eq!(r.home_path(), "/login");
    }

    #[test]
    fn test_unvalidated_login_loop_is_bounded() {
        // Login entry that itself requires a session redirects to itself
        let table = RouteTable::new_unchecked(vec![RouteEntry::protected("/login", View::Login)], 0);
        let r = Router::new(table, RootPolicy::RedirectToLogin);

        assert_eq!(
            r.navigate("#/login/", &Session::anonymous()),
            Err(RouterError::RedirectLoop {
                path: "/login".to_string(),
                hops: MAX_REDIRECTS,
            })
        );
        assert_eq!(
            r.navigate("/login", &Session::with_token("abc123"))
                .unwrap()
                .view(),
            Some(View::Login)
        );
    }

    #[test]
    fn test_default_router_uses_config() {
        let r = Router::default();
        assert_eq!(r.root_policy(), crate::config::ROOT_POLICY);
        assert_eq!(r.login_path(), "/login");
    }
}
