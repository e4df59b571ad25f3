//! Scoreboard HTTP client

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::snapshot::GameSnapshot;
use crate::types::Scoreboard;

/// ESPN MLB scoreboard endpoint (no API key required)
pub const ESPN_MLB_SCOREBOARD_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/baseball/mlb/scoreboard";

/// Request timeout; a stalled fetch degrades to an error instead of
/// blocking the caller's loop.
const REQUEST_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("scoreboard endpoint returned {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("failed to decode scoreboard payload: {0}")]
    DecodeFailed(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;

/// Stateless scoreboard client
pub struct ScoreboardClient {
    base_url: String,
    client: Client,
}

impl ScoreboardClient {
    /// Create a client for the given scoreboard endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Client pointed at the live ESPN MLB scoreboard.
    pub fn espn_mlb() -> Self {
        Self::new(ESPN_MLB_SCOREBOARD_URL)
    }

    /// Get a reference to the endpoint URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current scoreboard and reduce it to game snapshots.
    ///
    /// Network failures, non-2xx responses, and undecodable payloads all
    /// surface as [`FeedError`]; none of them are fatal to the caller.
    pub async fn fetch_snapshots(&self) -> Result<Vec<GameSnapshot>> {
        debug!("GET {}", self.base_url);

        let response = self.client.get(&self.base_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            warn!("scoreboard fetch failed with status {}", status);
            return Err(FeedError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let board: Scoreboard = response
            .json()
            .await
            .map_err(|e| FeedError::DecodeFailed(e.to_string()))?;

        let snapshots: Vec<GameSnapshot> = board
            .events
            .iter()
            .filter_map(GameSnapshot::from_event)
            .collect();

        debug!(
            "scoreboard returned {} events, {} usable snapshots",
            board.events.len(),
            snapshots.len()
        );

        Ok(snapshots)
    }
}
