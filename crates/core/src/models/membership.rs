use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person's relationship to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
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
    pub is_monitor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}
