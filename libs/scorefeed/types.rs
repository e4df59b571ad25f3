//! ESPN scoreboard wire types
//!
//! Only the fields the snapshot conversion needs are modeled; serde skips
//! the rest of the payload. Every field is defaulted so a partially
//! populated event degrades to an empty entry instead of a decode error.

use serde::Deserialize;

/// Top-level scoreboard response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One scheduled/live/finished game on the scoreboard
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

/// A single competition inside an event (MLB events carry exactly one)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub status: Option<Status>,
}

/// Game status wrapper
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(rename = "type")]
    #[serde(default)]
    pub kind: Option<StatusType>,
}

/// Game status detail; `state` is one of "pre", "in", "post"
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusType {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub completed: bool,
}

/// One side of a competition
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    /// "home" or "away"
    #[serde(default)]
    pub home_away: String,
    /// Score as a string, e.g. "5" (the feed serializes numbers as strings)
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub team: Option<Team>,
}

/// Team identity
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub display_name: String,
}
