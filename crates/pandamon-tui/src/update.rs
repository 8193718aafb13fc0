//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use pandamon_core::status::ViewState;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;

/// The main reducer function.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        // Exactly one request per visit, issued when the view attaches.
        UiEvent::Attached => vec![UiEffect::FetchStatus],
        UiEvent::Tick => {
            if state.status.is_loading() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(term_event),
        UiEvent::StatusFetched(result) => {
            state.status = ViewState::from_fetch(result);
            vec![]
        }
    }
}

/// The view is read-only: the only control affordance is quitting.
fn handle_terminal_event(event: Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return vec![];
    };
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![UiEffect::Quit]
        }
        _ => vec![],
    }
}
