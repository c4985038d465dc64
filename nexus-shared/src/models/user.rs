use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Represents a resident account in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// The user's chosen display name.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// Optional human-friendly name shown instead of the username.
    pub display_name: Option<String>,
}

/// Membership tier a session operates under.
///
/// Logout always resets the session back to [`UserType::Free`].
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserType {
    /// Baseline tier every session starts in.
    #[default]
    Free,
    /// Paid tier with premium placement.
    Paid,
    /// Tier allowed to publish news content.
    Publisher,
}

impl UserType {
    /// Marketing label shown on plan cards.
    pub fn plan_label(self) -> &'static str {
        match self {
            UserType::Free => "Free",
            UserType::Paid => "Premium",
            UserType::Publisher => "Publisher",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    #[test]
    fn test_user_creation() {
        let user = User {
            id: Uuid::new_v4(),
            username: "test_user".to_string(),
            email: "test@example.com".to_string(),
            display_name: None,
        };

        assert!(!user.id.is_nil(), "User ID should not be nil");
        assert_eq!(user.username, "test_user");
        assert_eq!(user.email, "test@example.com");
    }

    #[test]
    fn test_user_type_defaults_to_free() {
        assert_eq!(UserType::default(), UserType::Free);
    }

    #[test]
    fn test_user_type_round_trips_through_serde() {
        for (tier, token) in [
            (UserType::Free, "\"free\""),
            (UserType::Paid, "\"paid\""),
            (UserType::Publisher, "\"publisher\""),
        ] {
            assert_eq!(serde_json::to_string(&tier).unwrap(), token);
            assert_eq!(serde_json::from_str::<UserType>(token).unwrap(), tier);
        }
    }

    #[test]
    fn test_user_type_parses_from_slug() {
        assert_eq!(UserType::from_str("publisher").unwrap(), UserType::Publisher);
        assert!(UserType::from_str("admin").is_err());
    }

    #[test]
    fn test_plan_labels() {
        assert_eq!(UserType::Paid.plan_label(), "Premium");
        assert_eq!(UserType::Free.plan_label(), "Free");
    }
}
