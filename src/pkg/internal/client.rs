use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::prelude::{Error, Result};

/// Thin wrapper over a shared `reqwest::Client` and the API base url.
/// Every call is a single request; non-2xx responses come back as
/// `Error::Api` with whatever message the body carried. No retries,
/// no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.text().await {
            Ok(body) => extract_message(&body, status),
            Err(_) => format!("request failed with status {status}"),
        };
        tracing::debug!("upstream returned {}: {}", status, &message);
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn extract_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    if body.trim().is_empty() {
        format!("request failed with status {status}")
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn extracts_error_message_from_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/company/missing")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"company not found"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url());
        let response = client
            .http()
            .get(client.url("/company/missing"))
            .send()
            .await
            .unwrap();
        let err = ApiClient::check(response).await.unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "company not found");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn falls_back_to_status_line_on_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/company/1")
            .with_status(500)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url());
        let response = client
            .http()
            .get(client.url("/company/1"))
            .send()
            .await
            .unwrap();
        let err = ApiClient::check(response).await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
