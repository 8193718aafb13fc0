//! Full-screen status monitor TUI.

pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use pandamon_core::client::StatusClient;
use pandamon_core::config::{self, Config};
pub use runtime::TuiRuntime;

/// Runs the status monitor until the user quits.
pub async fn run_status_monitor(config: &Config) -> Result<()> {
    // The monitor requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The status monitor requires a terminal.\n\
             Use `pandamon check` for non-interactive output."
        );
    }

    let endpoint = config::resolve_endpoint(&config.endpoint)?;
    let client = StatusClient::new(endpoint);

    let mut runtime = TuiRuntime::new(client)?;
    runtime.run()?;

    Ok(())
}
