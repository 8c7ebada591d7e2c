//! People API operations.

use reqwest::{Method, Request};
use serde::Serialize;
use sparkctl_core::models::Person;

use super::SparkClient;
use crate::error::Result;

/// Query parameters for searching people.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPeopleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// People endpoints.
#[derive(Debug, Clone, Copy)]
pub struct People<'a> {
    pub(super) client: &'a SparkClient,
}

impl People<'_> {
    pub fn list_request(&self, query: &ListPeopleQuery) -> Result<Request> {
        Ok(self.client.request(Method::GET, &["people"])?.query(query).build()?)
    }

    /// Search people.
    pub async fn list(&self, query: &ListPeopleQuery) -> Result<Vec<Person>> {
        self.client.fetch_list(self.list_request(query)?).await
    }

    pub fn get_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["people", id])?
            .build()?)
    }

    /// Get person by ID.
    pub async fn get(&self, id: &str) -> Result<Person> {
        self.client.fetch(self.get_request(id)?).await
    }

    /// Get the authenticated user.
    pub async fn me(&self) -> Result<Person> {
        self.client.fetch(self.get_request("me")?).await
    }
}
