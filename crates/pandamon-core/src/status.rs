//! Status payload model and resolved view state.
//!
//! `RemoteStatus` mirrors the upstream JSON exactly; every nested field the
//! upstream may omit is optional here, and all rendering goes through the
//! default-filling accessors instead of inline defaulting at call sites.
//!
//! `live` is the only required field: a 2xx body without it carries no
//! signal and fails deserialization (the caller maps that to `bad_status`).

use serde::{Deserialize, Serialize};

use crate::client::FetchFailure;

/// One side of a matchup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub losses: Option<u32>,
    /// Whether this side is the home team.
    #[serde(default)]
    pub home: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<bool>,
}

impl TeamSide {
    /// Display name, falling back to the given side placeholder ("Away"/"Home").
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }

    /// Win-loss record, `0-0` when either count is absent.
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins.unwrap_or(0), self.losses.unwrap_or(0))
    }

    /// Logo text: first three characters of the abbreviation, uppercased.
    pub fn logo_abbr(&self) -> String {
        let abbr = self.abbr.as_deref().unwrap_or("NA");
        abbr.chars().take(3).collect::<String>().to_uppercase()
    }

    pub fn score_or_zero(&self) -> u32 {
        self.score.unwrap_or(0)
    }
}

/// A specific contest the upstream resolved the signal from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Free-text state, e.g. "SCHEDULED", "IN_PROGRESS", "FINAL - 10th".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub home: TeamSide,
    #[serde(default)]
    pub away: TeamSide,
}

/// The value returned by the status endpoint.
///
/// Absence of `game` is valid partial data, not an error. An `error` code
/// alongside a populated payload never blocks rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_checked: Option<String>,
    /// The resolved discount signal. Always present, trusted unconditionally.
    pub live: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
}

/// Resolved request lifecycle for one page visit.
///
/// Created as `Loading`, transitions exactly once on the single outstanding
/// request, and is discarded on exit. `Failed` means the request itself could
/// not be completed, distinct from an `error` code inside a Loaded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded(RemoteStatus),
    Failed(FetchFailure),
}

impl ViewState {
    /// Folds a fetch result into the terminal state for this visit.
    pub fn from_fetch(result: Result<RemoteStatus, FetchFailure>) -> Self {
        match result {
            Ok(status) => ViewState::Loaded(status),
            Err(failure) => ViewState::Failed(failure),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The signal badge. A failed fetch must never render a live badge.
    pub fn badge(&self) -> &'static str {
        match self {
            ViewState::Loaded(status) if status.live => "YES",
            _ => "NO",
        }
    }

    /// The loaded payload, if any.
    pub fn data(&self) -> Option<&RemoteStatus> {
        match self {
            ViewState::Loaded(status) => Some(status),
            _ => None,
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.data().and_then(|status| status.game.as_ref())
    }

    /// Machine-readable failure code: the transport code on `Failed`, or the
    /// upstream error embedded in a Loaded payload.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            ViewState::Loading => None,
            ViewState::Loaded(status) => status.error.as_deref(),
            ViewState::Failed(failure) => Some(failure.code()),
        }
    }
}
