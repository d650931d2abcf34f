//! Container platform API client
//!
//! Thin wrapper over the backend's `/api/v1` HTTP surface. Each method is
//! a single best-effort round trip: no retry, no caching, no timeout
//! override. Non-success statuses become [`Error::Api`] (404 becomes
//! [`Error::NotFound`]); transport failures become [`Error::Http`].

use serde::de::DeserializeOwned;
use url::Url;

use stevedore_core::prelude::*;
use stevedore_core::{Alarm, Container, MetricData};

use crate::payload::NewContainer;

/// Default backend location when no configuration overrides it.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Gateway client for container CRUD, lifecycle actions, and monitoring.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://host:8000/api/v1`).
    pub fn new(base_url: &str) -> Result<Self> {
        // Normalize to a trailing slash so endpoint paths append cleanly.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalized).map_err(|_| Error::base_url(base_url))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::base_url(base_url));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    /// The configured base URL, without the trailing slash.
    pub fn base_url(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }

    /// Full URL for an endpoint path relative to the base.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    // ─────────────────────────────────────────────────────────────
    // Container CRUD
    // ─────────────────────────────────────────────────────────────

    /// `GET /containers`
    pub async fn list_containers(&self) -> Result<Vec<Container>> {
        let response = self
            .http
            .get(self.endpoint("containers"))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    /// `GET /containers/{id}`
    pub async fn get_container(&self, id: &str) -> Result<Container> {
        let response = self
            .http
            .get(self.endpoint(&format!("containers/{id}")))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    /// `POST /containers`
    pub async fn create_container(&self, spec: &NewContainer) -> Result<Container> {
        let response = self
            .http
            .post(self.endpoint("containers"))
            .json(spec)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    /// `PUT /containers/{id}`
    pub async fn update_container(&self, id: &str, spec: &NewContainer) -> Result<Container> {
        let response = self
            .http
            .put(self.endpoint(&format!("containers/{id}")))
            .json(spec)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    /// `DELETE /containers/{id}`
    pub async fn delete_container(&self, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.endpoint(&format!("containers/{id}")))
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // Lifecycle actions
    // ─────────────────────────────────────────────────────────────

    /// `POST /containers/{id}/start`, returns the updated record.
    pub async fn start_container(&self, id: &str) -> Result<Container> {
        self.lifecycle(id, "start").await
    }

    /// `POST /containers/{id}/stop`, returns the updated record.
    pub async fn stop_container(&self, id: &str) -> Result<Container> {
        self.lifecycle(id, "stop").await
    }

    async fn lifecycle(&self, id: &str, verb: &str) -> Result<Container> {
        let response = self
            .http
            .post(self.endpoint(&format!("containers/{id}/{verb}")))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    // ─────────────────────────────────────────────────────────────
    // Monitoring
    // ─────────────────────────────────────────────────────────────

    /// `GET /metrics`
    pub async fn get_metrics(&self) -> Result<MetricData> {
        let response = self
            .http
            .get(self.endpoint("metrics"))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    /// `GET /alarms`
    pub async fn get_alarms(&self) -> Result<Vec<Alarm>> {
        let response = self
            .http
            .get(self.endpoint("alarms"))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::http(err.to_string())
}

/// Reject non-success responses, capturing the body for the diagnostic log.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let path = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    warn!(%status, %path, %body, "API request failed");
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(Error::not_found(path));
    }
    Err(Error::api(status.as_u16(), body))
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| Error::http(format!("invalid response body: {e}")))
}
