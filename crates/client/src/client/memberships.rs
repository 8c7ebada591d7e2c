//! Room membership API operations.

use reqwest::{Method, Request};
use serde::Serialize;
use sparkctl_core::models::Membership;

use super::SparkClient;
use crate::error::Result;

/// Query parameters for listing memberships.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembershipsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Request for adding someone to a room. `isModerator` is only sent when set.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_moderator: bool,
}

/// Request for updating a membership. `isModerator` is always sent.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMembershipRequest {
    pub is_moderator: bool,
}

/// Room membership endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Memberships<'a> {
    pub(super) client: &'a SparkClient,
}

impl Memberships<'_> {
    pub fn list_request(&self, query: &ListMembershipsQuery) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["memberships"])?
            .query(query)
            .build()?)
    }

    /// List memberships.
    pub async fn list(&self, query: &ListMembershipsQuery) -> Result<Vec<Membership>> {
        self.client.fetch_list(self.list_request(query)?).await
    }

    pub fn create_request(&self, req: &CreateMembershipRequest) -> Result<Request> {
        Ok(self
            .client
            .request(Method::POST, &["memberships"])?
            .json(req)
            .build()?)
    }

    /// Add someone to a room.
    pub async fn create(&self, req: &CreateMembershipRequest) -> Result<Membership> {
        self.client.fetch(self.create_request(req)?).await
    }

    pub fn get_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["memberships", id])?
            .build()?)
    }

    /// Get membership by ID.
    pub async fn get(&self, id: &str) -> Result<Membership> {
        self.client.fetch(self.get_request(id)?).await
    }

    pub fn update_request(&self, id: &str, req: &UpdateMembershipRequest) -> Result<Request> {
        Ok(self
            .client
            .request(Method::PUT, &["memberships", id])?
            .json(req)
            .build()?)
    }

    /// Update a membership.
    pub async fn update(&self, id: &str, req: &UpdateMembershipRequest) -> Result<Membership> {
        self.client.fetch(self.update_request(id, req)?).await
    }

    pub fn delete_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::DELETE, &["memberships", id])?
            .build()?)
    }

    /// Delete membership by ID.
    pub async fn delete(&self, id: &str) -> Result<u16> {
        self.client.fetch_status(self.delete_request(id)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{body_json, test_client};
    use serde_json::json;

    #[test]
    fn test_create_sends_moderator_only_when_set() {
        let client = test_client();
        let plain = CreateMembershipRequest {
            room_id: Some("r1".to_string()),
            person_email: Some("ann@example.com".to_string()),
            ..Default::default()
        };
        let request = client.memberships().create_request(&plain).unwrap();
        assert_eq!(
            body_json(&request),
            json!({"roomId": "r1", "personEmail": "ann@example.com"})
        );

        let moderator = CreateMembershipRequest {
            is_moderator: true,
            ..plain
        };
        let request = client.memberships().create_request(&moderator).unwrap();
        assert_eq!(body_json(&request)["isModerator"], json!(true));
    }

    #[test]
    fn test_update_always_sends_moderator() {
        let client = test_client();
        let request = client
            .memberships()
            .update_request("mem1", &UpdateMembershipRequest { is_moderator: false })
            .unwrap();

        assert_eq!(*request.method(), Method::PUT);
        assert_eq!(request.url().path(), "/v1/memberships/mem1");
        assert_eq!(body_json(&request), json!({"isModerator": false}));
    }
}
