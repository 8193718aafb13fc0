//! Check command handler: one-shot, non-interactive status resolution.
//!
//! Performs the same single fetch the monitor does and prints the resolved
//! state to stdout. The exit code is 0 regardless of the resolved phase; a
//! failed fetch is a reported outcome, not a program error.

use anyhow::Result;
use pandamon_core::client::StatusClient;
use pandamon_core::config::{self, Config};
use pandamon_core::present;
use pandamon_core::status::{RemoteStatus, ViewState};
use serde::Serialize;

/// Machine-readable report for `--json`.
#[derive(Serialize)]
struct CheckReport<'a> {
    phase: &'static str,
    live: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a RemoteStatus>,
}

pub async fn run(config: &Config, json: bool) -> Result<()> {
    let endpoint = config::resolve_endpoint(&config.endpoint)?;
    let client = StatusClient::new(endpoint);
    let state = ViewState::from_fetch(client.fetch().await);

    if json {
        println!("{}", json_report(&state)?);
    } else {
        print!("{}", plain_report(&state));
    }
    Ok(())
}

fn json_report(state: &ViewState) -> Result<String> {
    let report = CheckReport {
        phase: match state {
            ViewState::Loading => "loading",
            ViewState::Loaded(_) => "loaded",
            ViewState::Failed(_) => "failed",
        },
        live: state.data().map(|data| data.live).unwrap_or(false),
        error: state.error_code(),
        data: state.data(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Renders the same card content the TUI shows, one line per row.
fn plain_report(state: &ViewState) -> String {
    let mut out = String::new();

    out.push_str(&format!("Status: {}\n", state.badge()));

    if let Some(game) = state.game() {
        out.push_str(&format!(
            "{} ({})  {}  {} ({})\n",
            game.away.name_or("Away"),
            game.away.record(),
            present::score_line(game),
            game.home.name_or("Home"),
            game.home.record(),
        ));
    }

    match state.data() {
        Some(data) => out.push_str(&format!("{}\n", present::info_line(data))),
        None => out.push_str(&format!("{}\n", present::FALLBACK_SOURCE)),
    }

    if let Some(note) = present::error_note(state.error_code()) {
        out.push_str(&format!("Note: {note}\n"));
    }

    out
}
