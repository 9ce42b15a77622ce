//! The simulated user identity.

use serde::{Deserialize, Serialize};

/// A logged-in user of the storefront.
///
/// Login on this demo is simulated: the fields are whatever the visitor
/// typed into the login form, stored in the session verbatim and surfaced to
/// the tag manager as user context. There is no account store and no
/// validation - this is deliberately not an identity system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Self-declared user identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Email address, taken as-is.
    pub email: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let user = User {
            user_id: "000".to_owned(),
            name: "Sarah".to_owned(),
            email: "sarah@example.com".to_owned(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }
}
