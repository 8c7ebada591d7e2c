//! Organization API operations.

use reqwest::{Method, Request};
use serde::Serialize;
use sparkctl_core::models::Organization;

use super::SparkClient;
use crate::error::Result;

/// Query parameters for listing organizations.
#[derive(Debug, Default, Serialize)]
pub struct ListOrganizationsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Organizations endpoints (admin only).
#[derive(Debug, Clone, Copy)]
pub struct Organizations<'a> {
    pub(super) client: &'a SparkClient,
}

impl Organizations<'_> {
    pub fn list_request(&self, query: &ListOrganizationsQuery) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["organizations"])?
            .query(query)
            .build()?)
    }

    /// List organizations.
    pub async fn list(&self, query: &ListOrganizationsQuery) -> Result<Vec<Organization>> {
        self.client.fetch_list(self.list_request(query)?).await
    }

    pub fn get_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["organizations", id])?
            .build()?)
    }

    /// Get organization by ID.
    pub async fn get(&self, id: &str) -> Result<Organization> {
        self.client.fetch(self.get_request(id)?).await
    }
}
