//! # HTTP Transport
//!
//! Thin JSON-over-HTTP layer shared by every gateway and by the reports
//! client. It owns the `reqwest` client and the base URL and maps every
//! failure into a [`TransportError`].

use crate::error::TransportError;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<R, TransportError> {
        debug!(%path, params = query.len(), "GET");
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(network)?;
        decode(check(response).await?).await
    }

    pub async fn send_json<B, R>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, TransportError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(%method, %path, "Send");
        let response = self
            .http
            .request(method, self.url(path))
            .json(body)
            .send()
            .await
            .map_err(network)?;
        decode(check(response).await?).await
    }

    /// `DELETE` whose answer body, if any, is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), TransportError> {
        debug!(%path, "DELETE");
        let response = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(network)?;
        check(response).await.map(drop)
    }

    /// `DELETE` that answers a JSON document.
    pub async fn delete_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, TransportError> {
        debug!(%path, "DELETE");
        let response = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(network)?;
        decode(check(response).await?).await
    }
}

fn network(e: reqwest::Error) -> TransportError {
    TransportError::Network(e.to_string())
}

async fn check(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let detail = parse_detail(&body);
    warn!(status = status.as_u16(), detail = detail.as_deref(), "Request rejected");
    Err(TransportError::Status {
        status: status.as_u16(),
        detail,
    })
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, TransportError> {
    let body = response.text().await.map_err(network)?;
    serde_json::from_str(&body).map_err(|e| TransportError::Network(format!("decode: {e}")))
}

/// Extracts the backend's `detail` message from an error body.
///
/// Accepts `{"detail": "text"}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}`, whose messages are joined with `; `.
pub fn parse_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
