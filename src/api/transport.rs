// src/api/transport.rs
//! Reqwest-backed transport for the Notion API.
//!
//! A thin wrapper around reqwest: authentication headers, the pinned
//! Notion-Version, and mapping of error responses into the typed
//! [`ApiErrorCode`] vocabulary. No parsing or business logic lives here.

use crate::constants::{API_BASE_URL, ERROR_BODY_PREVIEW_LENGTH, NOTION_VERSION};
use crate::error::{ApiErrorCode, Error, Result};
use crate::types::ApiKey;
use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// The error body shape the Notion API returns on failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
}

/// Default [`super::Transport`] implementation over HTTPS.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport authenticated with the given API key.
    pub fn new(api_key: &ApiKey) -> Result<Self> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Create a transport against a non-default base URL (e.g. a local
    /// API stub).
    pub fn with_base_url(api_key: &ApiKey, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::MissingConfiguration(format!("Invalid base URL: {}", e)))?;
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                Error::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint
        );
        Url::parse(&joined)
            .map_err(|e| Error::MissingConfiguration(format!("Invalid endpoint '{}': {}", endpoint, e)))
    }

    /// Turns a response into parsed JSON, mapping non-success statuses
    /// into the typed error vocabulary.
    async fn handle_response(response: Response) -> Result<Value> {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| {
                log::error!("Failed to parse response from {}: {}", url, e);
                Error::MalformedResponse(e.to_string())
            });
        }

        if let Ok(error_body) = serde_json::from_str::<ApiErrorBody>(&body) {
            return Err(Error::NotionApi {
                code: ApiErrorCode::from_api_response(&error_body.code),
                message: error_body.message,
                status: status.as_u16(),
            });
        }

        // Error body was unparseable; fall back to the HTTP status.
        let preview = if body.len() > ERROR_BODY_PREVIEW_LENGTH {
            format!("{}...", &body[..ERROR_BODY_PREVIEW_LENGTH])
        } else {
            body
        };
        Err(Error::NotionApi {
            code: ApiErrorCode::from_http_status(status.as_u16()),
            message: format!("HTTP {} from {}: {}", status, url, preview),
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl super::Transport for HttpTransport {
    async fn get(&self, endpoint: &str) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        log::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let key = ApiKey::new_unchecked("secret_abcdefghijklmnopqrs");
        assert!(HttpTransport::with_base_url(&key, "not a url").is_err());
        assert!(HttpTransport::with_base_url(&key, "https://api.notion.com/v1").is_ok());
    }

    #[test]
    fn test_endpoint_url_joins_relative_paths() {
        let key = ApiKey::new_unchecked("secret_abcdefghijklmnopqrs");
        let transport = HttpTransport::with_base_url(&key, "https://api.notion.com/v1").unwrap();
        let url = transport.endpoint_url("data_sources/abc/query").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.notion.com/v1/data_sources/abc/query"
        );
    }
}
