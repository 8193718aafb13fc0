//! Application state.
//!
//! One `AppState` per run, owned by the runtime and mutated only by the
//! reducer in `update.rs`. The status lifecycle is a fresh `Loading` that
//! transitions exactly once when the one-shot fetch completes.

use pandamon_core::status::ViewState;

/// TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Spinner animation frame, advanced on ticks while loading.
    pub spinner_frame: u8,
    /// Resolved status for this visit.
    pub status: ViewState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            spinner_frame: 0,
            status: ViewState::Loading,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
