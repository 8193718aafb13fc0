//! Core pandamon library (status model, client, presentation, config).

pub mod client;
pub mod config;
pub mod logging;
pub mod present;
pub mod status;
