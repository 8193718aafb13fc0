//! Pure presentation derivations over the status payload.
//!
//! Every function here is a pure function of its input: same payload, same
//! output. The view layers (TUI card, `check` report) call these instead of
//! reading nested payload fields directly.

use crate::status::{Game, RemoteStatus};

/// Fallback provenance line when the payload carries neither a game nor a
/// checked date.
pub const FALLBACK_SOURCE: &str = "Source: Yesterday’s Dodgers home result (PT)";

/// Fixed note for a transport-level failure.
pub const UNREACHABLE_NOTE: &str = "Could not reach status API.";

/// Explanatory footnote shown under the card.
pub const FOOTNOTE: &str =
    "Discount shows “YES” on the day after a Dodgers home win (Pacific Time).";

/// Placeholder shown in place of a score before the game is final.
pub const VS_PLACEHOLDER: &str = "VS";

/// True iff the free-text status contains "final", case-insensitively.
pub fn is_final(status: Option<&str>) -> bool {
    status
        .map(|s| s.to_uppercase().contains("FINAL"))
        .unwrap_or(false)
}

/// Human-readable provenance line, resolved with a strict precedence chain:
/// game fields, then the checked date, then a fixed fallback sentence.
pub fn info_line(data: &RemoteStatus) -> String {
    if let Some(game) = &data.game {
        let date = game
            .date
            .as_deref()
            .or(data.date_checked.as_deref())
            .unwrap_or("");
        let venue = game.venue.as_deref().unwrap_or("");
        let status = game.status.as_deref().unwrap_or("");
        return format!("Source: {date} • {venue} • {status}");
    }
    match data.date_checked.as_deref() {
        Some(date) => format!("Source: {date}"),
        None => FALLBACK_SOURCE.to_string(),
    }
}

/// Score line for the center column: `away – home` once final, "VS" before.
pub fn score_line(game: &Game) -> String {
    if is_final(game.status.as_deref()) {
        format!("{} – {}", game.away.score_or_zero(), game.home.score_or_zero())
    } else {
        VS_PLACEHOLDER.to_string()
    }
}

/// User-facing note for a failure code. Absent or empty codes yield no note.
pub fn error_note(error: Option<&str>) -> Option<String> {
    match error {
        None | Some("") => None,
        Some("unreachable") => Some(UNREACHABLE_NOTE.to_string()),
        Some(code) => Some(format!("API error: {code}")),
    }
}
