//! Hash-based routing.

/// Application routes.
/// URL format: `#/`, `#/login`, `#/admin`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppRoute {
    /// Public file listing: #/ or any unknown hash
    #[default]
    Files,
    /// Password form: #/login
    Login,
    /// Upload/delete console: #/admin
    Admin,
}

impl AppRoute {
    /// Parse URL hash into a route
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "login" => Self::Login,
            "admin" => Self::Admin,
            _ => Self::Files,
        }
    }

    /// Convert route to URL hash
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Files => "#/",
            Self::Login => "#/login",
            Self::Admin => "#/admin",
        }
    }

    /// Whether the route needs an admin session.
    pub fn requires_session(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route (adds a history entry, fires `hashchange`).
    pub fn push(self) {
        crate::utils::dom::set_hash(self.to_hash());
    }

    /// Navigate without leaving the current page in history.
    pub fn replace(self) {
        crate::utils::dom::replace_hash(self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Files);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Files);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Files);
        assert_eq!(AppRoute::from_hash("#/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_hash("#/admin/"), AppRoute::Admin);
        assert_eq!(AppRoute::from_hash("admin"), AppRoute::Admin);
        assert_eq!(AppRoute::from_hash("#/nope"), AppRoute::Files);
    }

    #[test]
    fn test_route_round_trip() {
        for route in [AppRoute::Files, AppRoute::Login, AppRoute::Admin] {
            assert_eq!(AppRoute::from_hash(route.to_hash()), route);
        }
    }

    #[test]
    fn test_only_admin_requires_session() {
        assert!(AppRoute::Admin.requires_session());
        assert!(!AppRoute::Login.requires_session());
        assert!(!AppRoute::Files.requires_session());
    }
}
