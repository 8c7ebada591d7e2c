//! Team membership API operations.

use reqwest::{Method, Request};
use serde::Serialize;
use sparkctl_core::models::TeamMembership;

use super::SparkClient;
use crate::error::Result;

/// Query parameters for listing team memberships.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamMembershipsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Request for adding someone to a team. `isModerator` is only sent when set.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMembershipRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_moderator: bool,
}

/// Request for updating a team membership. `isModerator` is always sent.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMembershipRequest {
    pub is_moderator: bool,
}

/// Team membership endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TeamMemberships<'a> {
    pub(super) client: &'a SparkClient,
}

impl TeamMemberships<'_> {
    pub fn list_request(&self, query: &ListTeamMembershipsQuery) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["team", "memberships"])?
            .query(query)
            .build()?)
    }

    /// List team memberships.
    pub async fn list(&self, query: &ListTeamMembershipsQuery) -> Result<Vec<TeamMembership>> {
        self.client.fetch_list(self.list_request(query)?).await
    }

    pub fn create_request(&self, req: &CreateTeamMembershipRequest) -> Result<Request> {
        Ok(self
            .client
            .request(Method::POST, &["team", "memberships"])?
            .json(req)
            .build()?)
    }

    /// Add someone to a team.
    pub async fn create(&self, req: &CreateTeamMembershipRequest) -> Result<TeamMembership> {
        self.client.fetch(self.create_request(req)?).await
    }

    pub fn get_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["team", "memberships", id])?
            .build()?)
    }

    /// Get team membership by ID.
    pub async fn get(&self, id: &str) -> Result<TeamMembership> {
        self.client.fetch(self.get_request(id)?).await
    }

    pub fn update_request(&self, id: &str, req: &UpdateTeamMembershipRequest) -> Result<Request> {
        Ok(self
            .client
            .request(Method::PUT, &["team", "memberships", id])?
            .json(req)
            .build()?)
    }

    /// Update a team membership.
    pub async fn update(
        &self,
        id: &str,
        req: &UpdateTeamMembershipRequest,
    ) -> Result<TeamMembership> {
        self.client.fetch(self.update_request(id, req)?).await
    }

    pub fn delete_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::DELETE, &["team", "memberships", id])?
            .build()?)
    }

    /// Delete team membership by ID.
    pub async fn delete(&self, id: &str) -> Result<u16> {
        self.client.fetch_status(self.delete_request(id)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;

    #[test]
    fn test_team_memberships_live_under_team_path() {
        let client = test_client();
        let request = client
            .team_memberships()
            .list_request(&ListTeamMembershipsQuery {
                team_id: Some("t1".to_string()),
                max: Some(10),
            })
            .unwrap();

        assert_eq!(request.url().path(), "/v1/team/memberships");
        assert_eq!(request.url().query(), Some("teamId=t1&max=10"));
    }
}
