//! Route table and authentication guard.
//!
//! The table mirrors the application's pages: home, the service and
//! bootstrap demos, user lookup, login, the protected page, the post
//! editor/list/detail pages, and search. One route (`/protected`) is
//! flagged as requiring authentication.
//!
//! `resolve` is the navigation guard: a pure synchronous check against
//! session state, no suspension and no network. Unauthenticated access
//! to a protected route redirects to the login route; unknown paths
//! redirect home.

use crate::auth::Session;

/// Path of the login page, the redirect target for guarded routes.
pub const LOGIN_PATH: &str = "/login";

/// Path of the home page, the redirect target for unknown paths.
pub const HOME_PATH: &str = "/";

/// A navigable route. Pattern segments of the form `{id}` match any
/// non-empty path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

/// The application's route table.
pub const ROUTES: &[Route] = &[
    Route { path: "/", name: "Home", requires_auth: false },
    Route { path: "/callservice", name: "Service", requires_auth: false },
    Route { path: "/bootstrap", name: "Bootstrap", requires_auth: false },
    Route { path: "/user", name: "User", requires_auth: false },
    Route { path: "/login", name: "Login", requires_auth: false },
    Route { path: "/protected", name: "Protected", requires_auth: true },
    Route { path: "/editor", name: "PostEditor", requires_auth: false },
    Route { path: "/posts", name: "PostList", requires_auth: false },
    Route { path: "/posts/{id}", name: "PostDetail", requires_auth: false },
    Route { path: "/search", name: "Search", requires_auth: false },
];

/// The outcome of resolving a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Navigation proceeds to the requested route.
    Proceed(&'static Route),
    /// Navigation is redirected to another path.
    Redirect(&'static str),
}

/// Resolve a navigation against the session's authentication state.
pub fn resolve(path: &str, session: &Session) -> Navigation {
    resolve_with(path, session.is_authenticated())
}

fn resolve_with(path: &str, authenticated: bool) -> Navigation {
    match match_route(path) {
        Some(route) if route.requires_auth && !authenticated => Navigation::Redirect(LOGIN_PATH),
        Some(route) => Navigation::Proceed(route),
        None => Navigation::Redirect(HOME_PATH),
    }
}

/// Find the route matching a concrete path, segment-wise.
pub fn match_route(path: &str) -> Option<&'static Route> {
    let segments = split_path(path);
    ROUTES
        .iter()
        .find(|route| pattern_matches(&split_path(route.path), &segments))
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn pattern_matches(pattern: &[&str], segments: &[&str]) -> bool {
    pattern.len() == segments.len()
        && pattern
            .iter()
            .zip(segments)
            .all(|(p, s)| is_param(p) || p == s)
}

fn is_param(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_route_exact_and_param() {
        assert_eq!(match_route("/posts").map(|r| r.name), Some("PostList"));
        assert_eq!(match_route("/posts/42").map(|r| r.name), Some("PostDetail"));
        assert_eq!(match_route("/posts/").map(|r| r.name), Some("PostList"));
        assert_eq!(match_route("/").map(|r| r.name), Some("Home"));
        assert!(match_route("/nope").is_none());
        assert!(match_route("/posts/42/extra").is_none());
    }

    #[test]
    fn test_guard_redirects_unauthenticated() {
        assert_eq!(resolve_with("/protected", false), Navigation::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_guard_allows_authenticated() {
        match resolve_with("/protected", true) {
            Navigation::Proceed(route) => assert_eq!(route.name, "Protected"),
            other => panic!("Expected Proceed, got {:?}", other),
        }
    }

    #[test]
    fn test_public_routes_ignore_auth_state() {
        for path in ["/", "/login", "/posts", "/search", "/posts/7"] {
            assert!(matches!(resolve_with(path, false), Navigation::Proceed(_)));
            assert!(matches!(resolve_with(path, true), Navigation::Proceed(_)));
        }
    }

    #[test]
    fn test_unknown_path_redirects_home() {
        assert_eq!(resolve_with("/does/not/exist", false), Navigation::Redirect(HOME_PATH));
        assert_eq!(resolve_with("/does/not/exist", true), Navigation::Redirect(HOME_PATH));
    }
}
