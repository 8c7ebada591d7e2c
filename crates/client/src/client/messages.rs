//! Message API operations.

use reqwest::{Method, Request};
use serde::Serialize;
use sparkctl_core::models::Message;

use super::SparkClient;
use crate::error::Result;

/// Query parameters for listing messages.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentioned_people: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Request for posting a message.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// Message endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    pub(super) client: &'a SparkClient,
}

impl Messages<'_> {
    pub fn list_request(&self, query: &ListMessagesQuery) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["messages"])?
            .query(query)
            .build()?)
    }

    /// List messages, newest first.
    pub async fn list(&self, query: &ListMessagesQuery) -> Result<Vec<Message>> {
        self.client.fetch_list(self.list_request(query)?).await
    }

    pub fn create_request(&self, req: &CreateMessageRequest) -> Result<Request> {
        Ok(self
            .client
            .request(Method::POST, &["messages"])?
            .json(req)
            .build()?)
    }

    /// Post a message.
    pub async fn create(&self, req: &CreateMessageRequest) -> Result<Message> {
        self.client.fetch(self.create_request(req)?).await
    }

    pub fn get_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::GET, &["messages", id])?
            .build()?)
    }

    /// Get message by ID.
    pub async fn get(&self, id: &str) -> Result<Message> {
        self.client.fetch(self.get_request(id)?).await
    }

    pub fn delete_request(&self, id: &str) -> Result<Request> {
        Ok(self
            .client
            .request(Method::DELETE, &["messages", id])?
            .build()?)
    }

    /// Delete message by ID.
    pub async fn delete(&self, id: &str) -> Result<u16> {
        self.client.fetch_status(self.delete_request(id)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;

    #[test]
    fn test_list_query_uses_camel_case_cursors() {
        let client = test_client();
        let request = client
            .messages()
            .list_request(&ListMessagesQuery {
                room_id: Some("r1".to_string()),
                before_message: Some("m9".to_string()),
                max: Some(10),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            request.url().query(),
            Some("roomId=r1&beforeMessage=m9&max=10")
        );
    }
}
