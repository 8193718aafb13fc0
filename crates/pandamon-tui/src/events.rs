//! UI event types.
//!
//! Events are inputs to the reducer: terminal input, tick cadence, and the
//! completion of the one outstanding fetch.

use pandamon_core::client::FetchFailure;
use pandamon_core::status::RemoteStatus;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// The view attached; issued exactly once before the event loop starts.
    Attached,
    /// Frame cadence tick.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// The one-shot status fetch completed.
    StatusFetched(Result<RemoteStatus, FetchFailure>),
}
