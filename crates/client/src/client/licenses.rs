//! License API operations.

use reqwest::{Method, Request};
use serde::Serialize;
use sparkctl_core::models::License;

use super::SparkClient;
use crate::error::Result;

/// Query parameters for listing licenses.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLicensesQuery {
    /// Defaults to the authenticated user's organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Licenses endpoints (admin only).
#[derive(Debug, Clone, Copy)]
pub struct Licenses<'a> {
    pub(super) client: &'a SparkClient,
}

impl Licenses<'_> {
    pub fn list_request(&self, query: &ListLicensesQuery) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["licenses"])?
            .query(query)
            .build()?)
    }

    /// List licenses.
    pub async fn list(&self, query: &ListLicensesQuery) -> Result<Vec<License>> {
        self.client.fetch_list(self.list_request(query)?).await
    }

    pub fn get_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["licenses", id])?
            .build()?)
    }

    /// Get license by ID.
    pub async fn get(&self, id: &str) -> Result<License> {
        self.client.fetch(self.get_request(id)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;

    #[test]
    fn test_list_scoped_to_org() {
        let client = test_client();
        let request = client
            .licenses()
            .list_request(&ListLicensesQuery {
                org_id: Some("org-1".to_string()),
                max: None,
            })
            .unwrap();

        assert_eq!(request.url().query(), Some("orgId=org-1"));
    }

    #[test]
    fn test_get_path() {
        let client = test_client();
        let request = client.licenses().get_request("lic-1").unwrap();
        assert_eq!(request.url().path(), "/v1/licenses/lic-1");
    }
}
