//! HTTP client for the assignment API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::models::{Answer, Assignment, AssignmentSummary};
use crate::protocol::{ErrorBody, SubmissionResult, SubmitRequest};

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message} ({status})")]
    Api { status: u16, message: String },
}

/// Talks to a running assignment server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn assignments(&self) -> Result<Vec<AssignmentSummary>, ClientError> {
        let response = self.http.get(self.url("/assignments")).send().await?;
        decode(response).await
    }

    pub async fn assignment(&self, id: &str) -> Result<Assignment, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/assignments/{}", id)))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn submit(&self, id: &str, answers: &[Answer]) -> Result<SubmissionResult, ClientError> {
        let request = SubmitRequest {
            answers: answers.to_vec(),
        };
        let response = self
            .http
            .post(self.url(&format!("/assignments/{}/submit", id)))
            .json(&request)
            .send()
            .await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a success body, or turn the `{"error": ...}` body into
/// [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string(),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
