// API client module: a small blocking HTTP client plus one thin wrapper per
// resource. Transport outcomes are typed (`ApiError`) so the interactive
// flows can tell a 404 from an unreachable server.

pub mod contacts;
pub mod users;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;

pub use contacts::ContactApi;
pub use users::UserApi;

/// Typed outcome of a transport call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("could not connect to the server")]
    Connection(#[source] reqwest::Error),
    #[error("unexpected response status: {0}")]
    Status(StatusCode),
    #[error("transport failure")]
    Transport(#[source] reqwest::Error),
    #[error("malformed response body")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ApiError::Connection(err)
        } else {
            ApiError::Transport(err)
        }
    }
}

/// Shared transport handle: one blocking `reqwest` client and the base URL
/// of the API. Cloned into each resource client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create an ApiClient configured from the environment variable
    /// `SITEDESK_API_URL` or fallback to `http://localhost:8080/api`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("SITEDESK_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".into());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, url: &str) -> Result<String, ApiError> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send()?;
        read_body(response)
    }

    /// Create endpoints are fire-and-forget: the response status is
    /// deliberately not inspected, only send-level failures surface.
    pub fn post(&self, body: String, url: &str) -> Result<(), ApiError> {
        log::debug!("POST {url}");
        self.client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        Ok(())
    }

    pub fn put(&self, body: String, url: &str) -> Result<String, ApiError> {
        log::debug!("PUT {url}");
        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        read_body(response)
    }

    pub fn delete(&self, url: &str) -> Result<String, ApiError> {
        log::debug!("DELETE {url}");
        let response = self.client.delete(url).send()?;
        read_body(response)
    }
}

fn read_body(response: Response) -> Result<String, ApiError> {
    check_status(response.status())?;
    Ok(response.text()?)
}

fn check_status(status: StatusCode) -> Result<(), ApiError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        other => Err(ApiError::Status(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND),
            Err(ApiError::NotFound)
        ));
        assert!(matches!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        ));
        assert!(matches!(
            check_status(StatusCode::NO_CONTENT),
            Err(ApiError::Status(StatusCode::NO_CONTENT))
        ));
    }

    #[test]
    fn decode_failures_map_to_their_own_variant() {
        let err = serde_json::from_str::<crate::models::User>("not json").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
    }
}
