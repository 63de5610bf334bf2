use std::fmt;

/// Application routes the session core navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    AddIcon,
    MyCollections,
}

impl Route {
    pub const fn as_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::AddIcon => "/add-icon",
            Route::MyCollections => "/my-collections",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Routes that require an active session.
pub const PROTECTED_ROUTES: [Route; 3] = [Route::Dashboard, Route::AddIcon, Route::MyCollections];

/// Routes reachable without a session.
pub const PUBLIC_ROUTES: [Route; 3] = [Route::Home, Route::Login, Route::Register];

/// Classification of a request path against the configured route sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Protected,
    Public,
    Unclassified,
}

/// Check whether a path is at or under a route.
///
/// Matches exactly or by path-segment prefix, so `/dashboard/settings`
/// belongs to `/dashboard` but `/dashboards` does not.
pub fn matches(path: &str, route: Route) -> bool {
    let base = route.as_path();
    path == base || path.strip_prefix(base).is_some_and(|rest| rest.starts_with('/'))
}

/// Classify a request path as protected, public, or neither.
///
/// Protected wins over public when both lists would match.
pub fn classify(path: &str) -> RouteClass {
    if PROTECTED_ROUTES.iter().any(|route| matches(path, *route)) {
        RouteClass::Protected
    } else if PUBLIC_ROUTES.iter().any(|route| matches(path, *route)) {
        RouteClass::Public
    } else {
        RouteClass::Unclassified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_and_prefix() {
        assert!(matches("/dashboard", Route::Dashboard));
        assert!(matches("/dashboard/settings", Route::Dashboard));
        assert!(!matches("/dashboards", Route::Dashboard));
        assert!(!matches("/", Route::Dashboard));
    }

    #[test]
    fn test_home_matches_only_root() {
        assert!(matches("/", Route::Home));
        assert!(!matches("/login", Route::Home));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("/dashboard"), RouteClass::Protected);
        assert_eq!(classify("/add-icon"), RouteClass::Protected);
        assert_eq!(classify("/my-collections/favorites"), RouteClass::Protected);
        assert_eq!(classify("/"), RouteClass::Public);
        assert_eq!(classify("/login"), RouteClass::Public);
        assert_eq!(classify("/register"), RouteClass::Public);
        assert_eq!(classify("/about"), RouteClass::Unclassified);
    }
}
