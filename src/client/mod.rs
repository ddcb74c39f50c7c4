//! Incident repository client
//!
//! Thin request/response wrapper over the incident backend. Every call is a
//! fresh POST with a JSON body: no retries, no caching, no explicit timeout
//! beyond the transport default.
//!
//! The controller only sees the [`IncidentRepository`] trait, so tests can
//! drive it with a scripted fake instead of a live backend.

mod error;

pub use error::{ClientError, DecodeError};

use crate::incidents::{CreatedIncident, IncidentDetail, NewIncident, RawIncident};
use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Listing and search endpoint
pub const LIST_PATH: &str = "/api/incidents/with-department";
/// Single incident detail endpoint
pub const DETAIL_PATH: &str = "/api/incidents/detail";
/// Creation endpoint
pub const CREATE_PATH: &str = "/api/incidents";
/// Department suggestion endpoint (plain-text answer)
pub const SUGGEST_PATH: &str = "/api/incidents/suggest-department";

/// Operations the dashboard needs from the incident backend
#[async_trait]
pub trait IncidentRepository: Send + Sync {
    /// List incidents, optionally filtered by name. `None` lists everything.
    async fn list_incidents(&self, query: Option<&str>) -> Result<Vec<RawIncident>, ClientError>;

    /// Fetch the detail payload for one incident
    async fn get_incident_detail(&self, id: i64) -> Result<IncidentDetail, ClientError>;

    /// Create a new incident
    async fn create_incident(&self, incident: &NewIncident)
        -> Result<CreatedIncident, ClientError>;

    /// Best-effort department suggestion; failures are logged and yield `None`
    async fn suggest_department(&self, title: &str) -> Option<String>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Request bodies
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListRequest<'a> {
    incident_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailRequest {
    incident_id: i64,
}

#[derive(Debug, Serialize)]
struct SuggestRequest<'a> {
    title: &'a str,
}

/// Turn raw search box input into the listing filter: trimmed, blank means all
pub fn list_query(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Decode a listing body: must be a JSON array of objects shaped like incidents
pub fn decode_incident_list(body: &[u8]) -> Result<Vec<RawIncident>, DecodeError> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Array(items) = value else {
        return Err(DecodeError::NotAnArray {
            found: error::json_kind(&value),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| DecodeError::Record { index, source })
        })
        .collect()
}

/// Decode a detail body
pub fn decode_incident_detail(body: &[u8]) -> Result<IncidentDetail, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP implementation
// ─────────────────────────────────────────────────────────────────────────────

/// reqwest-backed repository bound to one base URL
#[derive(Debug, Clone)]
pub struct HttpIncidentClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIncidentClient {
    /// Build a client for `base_url` (trailing slashes are ignored)
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("noc-center/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ClientError> {
        tracing::debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        tracing::debug!(path, status = response.status().as_u16(), "response");
        Ok(response)
    }
}

#[async_trait]
impl IncidentRepository for HttpIncidentClient {
    async fn list_incidents(&self, query: Option<&str>) -> Result<Vec<RawIncident>, ClientError> {
        let body = ListRequest {
            incident_name: query,
        };
        let response = self.post(LIST_PATH, &body).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(decode_incident_list(&body)?)
    }

    async fn get_incident_detail(&self, id: i64) -> Result<IncidentDetail, ClientError> {
        let response = self
            .post(DETAIL_PATH, &DetailRequest { incident_id: id })
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(decode_incident_detail(&body)?)
    }

    async fn create_incident(
        &self,
        incident: &NewIncident,
    ) -> Result<CreatedIncident, ClientError> {
        let response = self.post(CREATE_PATH, incident).await?;

        let status = response.status();
        if !status.is_success() {
            // Rejection body is shown to the user as-is; an unreadable body is just empty
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Validation {
                status: status.as_u16(),
                message,
            });
        }

        // Empty 2xx body still counts as created
        let body = response.bytes().await?;
        let record: Value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&body).map_err(DecodeError::from)?
        };
        let created = CreatedIncident { record };
        tracing::info!(id = ?created.id(), "Incident created");
        Ok(created)
    }

    async fn suggest_department(&self, title: &str) -> Option<String> {
        let response = match self.post(SUGGEST_PATH, &SuggestRequest { title }).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Department suggestion failed: {}", e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "Department suggestion returned HTTP {}",
                status.as_u16()
            );
            return None;
        }

        match response.text().await {
            Ok(name) => {
                tracing::debug!("Suggested department: {:?}", name);
                Some(name)
            }
            Err(e) => {
                tracing::warn!("Department suggestion body unreadable: {}", e);
                None
            }
        }
    }
}
