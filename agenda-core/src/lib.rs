//! Core types for the agenda ecosystem.
//!
//! This crate is the agenda engine behind agenda-cli:
//! - `model` and `parse` turn a generation payload into a renderable agenda
//!   (or a raw-text fallback when the payload is not well-formed)
//! - `classify` and `format` produce the deterministic plain-text rendering
//! - `session` holds the editable per-day text buffers
//! - `export` builds the parameters for calendar-file requests

pub mod classify;
pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod parse;
pub mod session;

pub use error::{AgendaError, AgendaResult};
pub use model::{AgendaDay, AgendaItem, AgendaModel, ParsedAgenda, Schedule};
