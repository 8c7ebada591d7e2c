//! Team API operations.

use reqwest::{Method, Request};
use serde::Serialize;
use sparkctl_core::models::Team;

use super::SparkClient;
use crate::error::Result;

/// Query parameters for listing teams.
#[derive(Debug, Default, Serialize)]
pub struct ListTeamsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Request for creating or renaming a team.
#[derive(Debug, Default, Serialize)]
pub struct TeamRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Team endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Teams<'a> {
    pub(super) client: &'a SparkClient,
}

impl Teams<'_> {
    pub fn list_request(&self, query: &ListTeamsQuery) -> Result<Request> {
        Ok(self.client.request(Method::GET, &["teams"])?.query(query).build()?)
    }

    /// List teams.
    pub async fn list(&self, query: &ListTeamsQuery) -> Result<Vec<Team>> {
        self.client.fetch_list(self.list_request(query)?).await
    }

    pub fn create_request(&self, req: &TeamRequest) -> Result<Request> {
        Ok(self.client.request(Method::POST, &["teams"])?.json(req).build()?)
    }

    /// Create a new team.
    pub async fn create(&self, req: &TeamRequest) -> Result<Team> {
        self.client.fetch(self.create_request(req)?).await
    }

    pub fn get_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["teams", id])?
            .build()?)
    }

    /// Get team by ID.
    pub async fn get(&self, id: &str) -> Result<Team> {
        self.client.fetch(self.get_request(id)?).await
    }

    pub fn update_request(&self, id: &str, req: &TeamRequest) -> Result<Request> {
        Ok(self
            .client
            .request(Method::PUT, &["teams", id])?
            .json(req)
            .build()?)
    }

    /// Update a team.
    pub async fn update(&self, id: &str, req: &TeamRequest) -> Result<Team> {
        self.client.fetch(self.update_request(id, req)?).await
    }

    pub fn delete_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::DELETE, &["teams", id])?
            .build()?)
    }

    /// Delete team by ID.
    pub async fn delete(&self, id: &str) -> Result<u16> {
        self.client.fetch_status(self.delete_request(id)?).await
    }
}
