//! Records mirroring the REST resources.
//!
//! Every record is a flat serde struct with camelCase wire names. Optional
//! attributes are omitted from the serialized form when absent so that
//! rendered output matches what the API returned.

mod admin;
mod membership;
mod message;
mod person;
mod room;
mod team;
mod webhook;

use serde::{Deserialize, Serialize};

pub use admin::{License, Organization, Role};
pub use membership::Membership;
pub use message::Message;
pub use person::Person;
pub use room::{Room, RoomType};
pub use team::{Team, TeamMembership};
pub use webhook::Webhook;

/// Envelope used by every list endpoint: `{"items": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

impl<T> ItemList<T> {
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_list_unwraps_items() {
        let json = r#"{"items":[{"id":"r1","title":"Ops"},{"id":"r2","title":"Dev"}]}"#;
        let list: ItemList<Room> = serde_json::from_str(json).unwrap();
        let rooms = list.into_items();

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].title, "Ops");
        assert_eq!(rooms[1].id, "r2");
    }

    #[test]
    fn test_item_list_empty() {
        let list: ItemList<Team> = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert!(list.into_items().is_empty());
    }
}
