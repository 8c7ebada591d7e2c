use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a room is a 1:1 conversation or a group space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Direct,
    Group,
}

/// A room (space) people exchange messages in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Room {
    /// Creates a room record with only an ID and title set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            room_type: None,
            is_locked: None,
            team_id: None,
            last_activity: None,
            creator_id: None,
            created: None,
        }
    }

    /// Sets the team this room belongs to.
    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_deserializes_api_payload() {
        let json = r#"{
            "id": "Y2lzY29zcGFyazovL3VzL1JPT00vYmJjZWIxYWQ",
            "title": "Project Unicorn",
            "type": "group",
            "isLocked": true,
            "teamId": "Y2lzY29zcGFyazovL3VzL1RFQU0vMTNlMThmNDAtNDJmYy0xMWU2LWE5ZDgtMjExYTBkYzc5NzY5",
            "lastActivity": "2016-04-21T19:12:48.920Z",
            "creatorId": "Y2lzY29zcGFyazovL3VzL1BFT1BMRS9mNWIzNjE4Ny1jOGRkLTQ3MjctOGIyZi1mOWM0NDdmMjkwNDY",
            "created": "2016-04-21T19:01:55.966Z"
        }"#;

        let room: Room = serde_json::from_str(json).unwrap();

        assert_eq!(room.title, "Project Unicorn");
        assert_eq!(room.room_type, Some(RoomType::Group));
        assert_eq!(room.is_locked, Some(true));
        assert!(room.team_id.is_some());
        assert!(room.created.is_some());
    }

    #[test]
    fn test_room_omits_absent_fields() {
        let room = Room::new("r1", "Demo");
        let value = serde_json::to_value(&room).unwrap();

        assert_eq!(value, serde_json::json!({"id": "r1", "title": "Demo"}));
    }

    #[test]
    fn test_room_type_wire_value() {
        assert_eq!(
            serde_json::to_string(&RoomType::Direct).unwrap(),
            "\"direct\""
        );
        assert_eq!(
            serde_json::to_string(&RoomType::Group).unwrap(),
            "\"group\""
        );
    }
}
