//! Webhook API operations.
//!
//! The CLI only lists webhooks; the write operations are available to
//! library callers.

use reqwest::{Method, Request};
use serde::Serialize;
use sparkctl_core::models::Webhook;

use super::SparkClient;
use crate::error::Result;

/// Query parameters for listing webhooks.
#[derive(Debug, Default, Serialize)]
pub struct ListWebhooksQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Request for registering a webhook.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    pub name: String,
    pub target_url: String,
    pub resource: String,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Request for updating a webhook.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookRequest {
    pub name: String,
    pub target_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Webhook endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    pub(super) client: &'a SparkClient,
}

impl Webhooks<'_> {
    pub fn list_request(&self, query: &ListWebhooksQuery) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["webhooks"])?
            .query(query)
            .build()?)
    }

    /// List webhooks.
    pub async fn list(&self, query: &ListWebhooksQuery) -> Result<Vec<Webhook>> {
        self.client.fetch_list(self.list_request(query)?).await
    }

    pub fn create_request(&self, req: &CreateWebhookRequest) -> Result<Request> {
        Ok(self
            .client
            .request(Method::POST, &["webhooks"])?
            .json(req)
            .build()?)
    }

    /// Register a webhook.
    pub async fn create(&self, req: &CreateWebhookRequest) -> Result<Webhook> {
        self.client.fetch(self.create_request(req)?).await
    }

    pub fn get_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["webhooks", id])?
            .build()?)
    }

    /// Get webhook by ID.
    pub async fn get(&self, id: &str) -> Result<Webhook> {
        self.client.fetch(self.get_request(id)?).await
    }

    pub fn update_request(&self, id: &str, req: &UpdateWebhookRequest) -> Result<Request> {
        Ok(self
            .client
            .request(Method::PUT, &["webhooks", id])?
            .json(req)
            .build()?)
    }

    /// Update a webhook.
    pub async fn update(&self, id: &str, req: &UpdateWebhookRequest) -> Result<Webhook> {
        self.client.fetch(self.update_request(id, req)?).await
    }

    pub fn delete_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::DELETE, &["webhooks", id])?
            .build()?)
    }

    /// Delete webhook by ID.
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
    fn test_create_body() {
        let client = test_client();
        let request = client
            .webhooks()
            .create_request(&CreateWebhookRequest {
                name: "New messages".to_string(),
                target_url: "https://hooks.example.com/spark".to_string(),
                resource: "messages".to_string(),
                event: "created".to_string(),
                filter: Some("roomId=r1".to_string()),
                secret: None,
            })
            .unwrap();

        assert_eq!(
            body_json(&request),
            json!({
                "name": "New messages",
                "targetUrl": "https://hooks.example.com/spark",
                "resource": "messages",
                "event": "created",
                "filter": "roomId=r1"
            })
        );
    }

    #[test]
    fn test_update_and_delete_paths() {
        let client = test_client();
        let update = client
            .webhooks()
            .update_request(
                "wh1",
                &UpdateWebhookRequest {
                    name: "Renamed".to_string(),
                    target_url: "https://hooks.example.com/v2".to_string(),
                    secret: None,
                },
            )
            .unwrap();
        let delete = client.webhooks().delete_request("wh1").unwrap();

        assert_eq!(*update.method(), Method::PUT);
        assert_eq!(update.url().path(), "/v1/webhooks/wh1");
        assert_eq!(*delete.method(), Method::DELETE);
        assert_eq!(client.webhooks().get_request("wh1").unwrap().url().path(), "/v1/webhooks/wh1");
    }
}
