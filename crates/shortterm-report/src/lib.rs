//! shortterm-report — Run summaries and history views.
//!
//! Formats finished runs and the persisted history for display.

pub mod history;
pub mod summary;
