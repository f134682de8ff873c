use serde::{Deserialize, Serialize};

/// Which dashboard a user is signed into.
///
/// Every role-specific constant (routes, endpoint, messages, fallbacks)
/// hangs off this enum so the admin and student shells share one code path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PortalRole {
    Admin,
    Student,
}

impl PortalRole {
    /// Lowercase key, also the first path segment of the backend routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            PortalRole::Admin => "admin",
            PortalRole::Student => "student",
        }
    }

    /// Parse a role key. Unknown values yield `None`.
    pub fn from_key(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(PortalRole::Admin),
            "student" => Some(PortalRole::Student),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PortalRole::Admin => "Admin",
            PortalRole::Student => "Student",
        }
    }

    /// Client route the dashboard lives on.
    pub fn root_path(&self) -> &'static str {
        match self {
            PortalRole::Admin => "/admin",
            PortalRole::Student => "/student",
        }
    }

    /// Backend path, relative to the API base URL.
    pub fn details_path(&self) -> &'static str {
        match self {
            PortalRole::Admin => "/admin/my-details",
            PortalRole::Student => "/student/my-details",
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            PortalRole::Admin => "Loading admin details...",
            PortalRole::Student => "Loading user details...",
        }
    }

    /// Shown when a failed fetch carries no server message.
    pub fn fetch_error_message(&self) -> &'static str {
        match self {
            PortalRole::Admin => "Error fetching admin details",
            PortalRole::Student => "Error fetching user details",
        }
    }

    pub fn fallback_name(&self) -> &'static str {
        match self {
            PortalRole::Admin => "Admin",
            PortalRole::Student => "Student",
        }
    }

    pub fn fallback_email(&self) -> &'static str {
        match self {
            PortalRole::Admin => "admin@email.com",
            PortalRole::Student => "student@email.com",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_key_roundtrip() {
        for role in [PortalRole::Admin, PortalRole::Student] {
            assert_eq!(PortalRole::from_key(role.as_str()), Some(role));
        }
    }

    #[test]
    fn role_key_is_case_insensitive() {
        assert_eq!(PortalRole::from_key("ADMIN"), Some(PortalRole::Admin));
        assert_eq!(PortalRole::from_key("faculty"), None);
    }

    #[test]
    fn details_path_lives_under_role_key() {
        assert_eq!(PortalRole::Admin.details_path(), "/admin/my-details");
        assert_eq!(PortalRole::Student.details_path(), "/student/my-details");
        for role in [PortalRole::Admin, PortalRole::Student] {
            assert!(role.details_path().starts_with(role.root_path()));
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PortalRole::Student).unwrap(), r#""student""#);
    }
}
