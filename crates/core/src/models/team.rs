use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A group of people sharing a set of rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Team {
    /// Creates a team record with only an ID and name set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            creator_id: None,
            created: None,
        }
    }
}

/// A person's relationship to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembership {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_org_id: Option<String>,
    #[serde(default)]
    pub is_moderator: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_membership_defaults_moderator_to_false() {
        let json = r#"{"id":"tm1","teamId":"t1","personEmail":"ann@example.com"}"#;
        let membership: TeamMembership = serde_json::from_str(json).unwrap();

        assert!(!membership.is_moderator);
        assert_eq!(membership.team_id.as_deref(), Some("t1"));
    }
}
