//! Agenda model types.
//!
//! These types represent a generated agenda in a payload-neutral way.
//! The parser converts the generation service's JSON into them, and the
//! formatter, edit session and export builder work exclusively with them.

use serde::{Deserialize, Serialize};

/// A single agenda entry.
///
/// All fields are carried as free text; ordering within a day is
/// significant and preserved as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-form slot text, e.g. "10:00 - 10:15".
    #[serde(default)]
    pub time_slot: Option<String>,
    /// Free-form duration text, e.g. "15 mins".
    #[serde(default)]
    pub duration: Option<String>,
    /// Slot tag from the generator ("work", "coffee_break", ...).
    /// Preserved for round-tripping; formatting never reads it.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// One day of a multi-day agenda.
///
/// `start_time` <= `end_time` is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaDay {
    /// Calendar date as text, e.g. "2024-05-01".
    pub date: String,
    /// Local time-of-day as text, e.g. "09:00".
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub items: Vec<AgendaItem>,
}

/// Single-day vs multi-day agenda shape.
///
/// The two shapes are mutually exclusive; a payload that somehow carries
/// both resolves to `MultiDay` in the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Schedule {
    SingleDay(Vec<AgendaItem>),
    MultiDay(Vec<AgendaDay>),
}

/// A structured agenda, immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaModel {
    pub title: String,
    pub summary: String,
    pub schedule: Schedule,
}

impl AgendaModel {
    /// Number of editable day buffers this agenda produces.
    pub fn day_count(&self) -> usize {
        match &self.schedule {
            Schedule::SingleDay(_) => 1,
            Schedule::MultiDay(days) => days.len(),
        }
    }

    /// The day list, when this is a multi-day agenda.
    pub fn days(&self) -> Option<&[AgendaDay]> {
        match &self.schedule {
            Schedule::SingleDay(_) => None,
            Schedule::MultiDay(days) => Some(days),
        }
    }
}

/// Outcome of parsing a generation payload.
///
/// `Raw` holds the original payload verbatim and is distinct from a
/// successfully parsed empty agenda.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedAgenda {
    Structured(AgendaModel),
    Raw(String),
}

impl ParsedAgenda {
    /// The structured model, when parsing succeeded.
    pub fn model(&self) -> Option<&AgendaModel> {
        match self {
            ParsedAgenda::Structured(model) => Some(model),
            ParsedAgenda::Raw(_) => None,
        }
    }
}
