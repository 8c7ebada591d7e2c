//! Room API operations.

use reqwest::{Method, Request};
use serde::Serialize;
use sparkctl_core::models::{Room, RoomType};

use super::SparkClient;
use crate::error::Result;

/// Query parameters for listing rooms.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRoomsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
}

/// Request for creating a room.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

/// Request for updating a room.
#[derive(Debug, Default, Serialize)]
pub struct UpdateRoomRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Room endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Rooms<'a> {
    pub(super) client: &'a SparkClient,
}

impl Rooms<'_> {
    pub fn list_request(&self, query: &ListRoomsQuery) -> Result<Request> {
        Ok(self.client.request(Method::GET, &["rooms"])?.query(query).build()?)
    }

    /// List rooms.
    pub async fn list(&self, query: &ListRoomsQuery) -> Result<Vec<Room>> {
        self.client.fetch_list(self.list_request(query)?).await
    }

    pub fn create_request(&self, req: &CreateRoomRequest) -> Result<Request> {
        Ok(self.client.request(Method::POST, &["rooms"])?.json(req).build()?)
    }

    /// Create a new room.
    pub async fn create(&self, req: &CreateRoomRequest) -> Result<Room> {
        self.client.fetch(self.create_request(req)?).await
    }

    pub fn get_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["rooms", id])?
            .build()?)
    }

    /// Get room by ID.
    pub async fn get(&self, id: &str) -> Result<Room> {
        self.client.fetch(self.get_request(id)?).await
    }

    pub fn update_request(&self, id: &str, req: &UpdateRoomRequest) -> Result<Request> {
        Ok(self
            .client
            .request(Method::PUT, &["rooms", id])?
            .json(req)
            .build()?)
    }

    /// Update a room.
    pub async fn update(&self, id: &str, req: &UpdateRoomRequest) -> Result<Room> {
        self.client.fetch(self.update_request(id, req)?).await
    }

    pub fn delete_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::DELETE, &["rooms", id])?
            .build()?)
    }

    /// Delete room by ID. Returns the response status code.
    pub async fn delete(&self, id: &str) -> Result<u16> {
        self.client.fetch_status(self.delete_request(id)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{body_json, test_client};
    use crate::error::ClientError;
    use serde_json::json;

    #[test]
    fn test_create_omits_missing_team() {
        let client = test_client();
        let request = client
            .rooms()
            .create_request(&CreateRoomRequest {
                title: Some("Demo".to_string()),
                team_id: None,
            })
            .unwrap();

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(request.url().path(), "/v1/rooms");
        assert_eq!(body_json(&request), json!({"title": "Demo"}));
    }

    #[test]
    fn test_create_with_team() {
        let client = test_client();
        let request = client
            .rooms()
            .create_request(&CreateRoomRequest {
                title: Some("Demo".to_string()),
                team_id: Some("t1".to_string()),
            })
            .unwrap();

        assert_eq!(body_json(&request), json!({"title": "Demo", "teamId": "t1"}));
    }

    #[test]
    fn test_list_query_parameters() {
        let client = test_client();
        let request = client
            .rooms()
            .list_request(&ListRoomsQuery {
                max: Some(5),
                room_type: Some(RoomType::Group),
            })
            .unwrap();

        assert_eq!(request.url().query(), Some("max=5&type=group"));
        assert!(request.body().is_none());
    }

    #[test]
    fn test_delete_path() {
        let client = test_client();
        let request = client.rooms().delete_request("abc").unwrap();

        assert_eq!(*request.method(), Method::DELETE);
        assert_eq!(request.url().path(), "/v1/rooms/abc");
    }

    #[test]
    fn test_id_is_a_single_path_segment() {
        let client = test_client();

        let request = client.rooms().delete_request("../teams/T1").unwrap();
        assert_eq!(request.url().path(), "/v1/rooms/..%2Fteams%2FT1");

        let request = client.rooms().get_request("abc?max=1#x").unwrap();
        assert_eq!(request.url().path(), "/v1/rooms/abc%3Fmax=1%23x");
        assert_eq!(request.url().query(), None);
        assert_eq!(request.url().fragment(), None);
    }

    #[test]
    fn test_dot_ids_are_rejected() {
        let client = test_client();

        for id in ["..", ".", ""] {
            let err = client.rooms().delete_request(id).unwrap_err();
            assert!(matches!(err, ClientError::InvalidUrl(_)), "{id:?}: {err:?}");
        }
    }
}
