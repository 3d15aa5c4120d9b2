//! Snapshot fetcher
//!
//! One blocking GET per run, no retries. The feed document carries the
//! entity records under `elements` and the group labels under `teams`;
//! either array may be absent, which reads as empty.

use pricewatch_core::errors::{PriceWatchError, PwError, PwErrorKind, Result};
use pricewatch_core::model::{parse_entities, Entity, GroupMap, GroupRecord};
use pricewatch_core::{log_op_end, log_op_error, log_op_start};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("pricewatch/", env!("CARGO_PKG_VERSION"));

/// Everything one fetch yields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedData {
    pub entities: Vec<Entity>,
    pub groups: GroupMap,
}

/// Source of the current entity collection
pub trait SnapshotFetcher {
    /// Fetch the current entities and group labels
    ///
    /// # Errors
    ///
    /// Any failure aborts the run; implementations do not retry.
    fn fetch(&self) -> Result<FetchedData>;
}

#[derive(Deserialize)]
struct FeedDocument {
    #[serde(default)]
    elements: Vec<Value>,
    #[serde(default)]
    teams: Vec<GroupRecord>,
}

/// Decode a feed document body
///
/// # Errors
///
/// - `InvalidResponse`: the body is not a JSON object of the expected shape
/// - `MalformedEntity`: an element record lacks `id`, `now_cost`,
///   `web_name` or `team`
pub fn parse_feed(endpoint: &str, body: &str) -> Result<FetchedData> {
    let document: FeedDocument =
        serde_json::from_str(body).map_err(|e| PriceWatchError::InvalidResponse {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

    Ok(FetchedData {
        entities: parse_entities(document.elements)?,
        groups: GroupMap::from_records(document.teams),
    })
}

/// [`SnapshotFetcher`] over blocking HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    endpoint: String,
}

impl HttpFetcher {
    /// # Errors
    ///
    /// `Internal` when the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                PwError::new(PwErrorKind::Internal)
                    .with_op("fetch_snapshot")
                    .with_message(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn fetch_inner(&self) -> Result<FetchedData> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PwError::new(PwErrorKind::ExternalService)
                .with_op("fetch_snapshot")
                .with_message(format!("{} answered with status {}", self.endpoint, status)));
        }

        let body = response.text().map_err(|e| self.transport_error(e))?;
        parse_feed(&self.endpoint, &body)
    }

    fn transport_error(&self, err: reqwest::Error) -> PwError {
        let kind = if err.is_timeout() {
            PwErrorKind::Timeout
        } else {
            PwErrorKind::ExternalService
        };
        PwError::new(kind)
            .with_op("fetch_snapshot")
            .with_message(format!("Request to {} failed: {}", self.endpoint, err))
    }
}

impl SnapshotFetcher for HttpFetcher {
    fn fetch(&self) -> Result<FetchedData> {
        let start = Instant::now();
        log_op_start!("fetch_snapshot", endpoint = %self.endpoint);

        let result = self.fetch_inner();
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(data) => log_op_end!(
                "fetch_snapshot",
                duration_ms = duration_ms,
                entity_count = data.entities.len(),
                group_count = data.groups.len()
            ),
            Err(e) => log_op_error!("fetch_snapshot", e, duration_ms = duration_ms),
        }
        result
    }
}
