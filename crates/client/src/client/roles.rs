//! Role API operations.

use reqwest::{Method, Request};
use serde::Serialize;
use sparkctl_core::models::Role;

use super::SparkClient;
use crate::error::Result;

/// Query parameters for listing roles.
#[derive(Debug, Default, Serialize)]
pub struct ListRolesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Roles endpoints (admin only).
#[derive(Debug, Clone, Copy)]
pub struct Roles<'a> {
    pub(super) client: &'a SparkClient,
}

impl Roles<'_> {
    pub fn list_request(&self, query: &ListRolesQuery) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["roles"])?
            .query(query)
            .build()?)
    }

    /// List roles.
    pub async fn list(&self, query: &ListRolesQuery) -> Result<Vec<Role>> {
        self.client.fetch_list(self.list_request(query)?).await
    }

    pub fn get_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["roles", id])?
            .build()?)
    }

    /// Get role by ID.
    pub async fn get(&self, id: &str) -> Result<Role> {
        self.client.fetch(self.get_request(id)?).await
    }
}
