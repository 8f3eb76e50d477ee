//! Editable per-day text buffers.
//!
//! An [`EditSession`] owns the text the user edits and the text sent to the
//! refine and export collaborators. It is created atomically from a parsed
//! agenda — the buffer count is fixed by the day count and never resized —
//! and mutated only by whole-buffer replacement. Concurrent refinements of
//! the same buffer resolve last-write-wins; no ordering is guaranteed.

use crate::error::{AgendaError, AgendaResult};
use crate::format::format_items;
use crate::model::{AgendaModel, ParsedAgenda, Schedule};

/// Width of the rule separating day buffers in the combined output.
const DIVIDER_WIDTH: usize = 20;

/// The only mutable, user-facing state of the agenda engine.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    buffers: Vec<String>,
}

impl EditSession {
    /// Session with no buffers, for payloads that fell back to raw text.
    pub fn empty() -> Self {
        Self {
            buffers: Vec::new(),
        }
    }

    /// Seed buffers from a parsed model: one per day for a multi-day agenda,
    /// a single buffer otherwise. Buffers hold the formatter output without
    /// the agenda-level title/summary wrapper.
    pub fn from_model(model: &AgendaModel) -> Self {
        let buffers = match &model.schedule {
            Schedule::SingleDay(items) => vec![format_items(items)],
            Schedule::MultiDay(days) => days.iter().map(|day| format_items(&day.items)).collect(),
        };
        Self { buffers }
    }

    /// Seed from a parse outcome: raw fallbacks get no editable buffers.
    pub fn from_parsed(parsed: &ParsedAgenda) -> Self {
        match parsed {
            ParsedAgenda::Structured(model) => Self::from_model(model),
            ParsedAgenda::Raw(_) => Self::empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Current text of buffer `index`.
    pub fn get(&self, index: usize) -> AgendaResult<&str> {
        self.buffers
            .get(index)
            .map(String::as_str)
            .ok_or(AgendaError::IndexOutOfRange {
                index,
                len: self.buffers.len(),
            })
    }

    /// Overwrite buffer `index` entirely. Manual edits and refinement
    /// responses both go through here; there is no partial patching.
    pub fn replace(&mut self, index: usize, text: String) -> AgendaResult<()> {
        match self.buffers.get_mut(index) {
            Some(buffer) => {
                *buffer = text;
                Ok(())
            }
            None => Err(AgendaError::IndexOutOfRange {
                index,
                len: self.buffers.len(),
            }),
        }
    }

    /// All buffers joined in day order, with a visible rule between days so
    /// the combined text keeps its day boundaries. A single buffer comes
    /// back unchanged.
    pub fn combined(&self) -> String {
        let divider = format!("\n\n{}\n\n", "=".repeat(DIVIDER_WIDTH));
        self.buffers.join(&divider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AgendaItem;
    use crate::parse::parse_payload;

    fn item(title: &str) -> AgendaItem {
        AgendaItem {
            title: title.to_string(),
            description: String::new(),
            time_slot: None,
            duration: None,
            kind: None,
        }
    }

    fn single_day_model() -> AgendaModel {
        AgendaModel {
            title: "Sync".to_string(),
            summary: String::new(),
            schedule: Schedule::SingleDay(vec![item("Standup"), item("Coffee Break")]),
        }
    }

    #[test]
    fn single_day_yields_one_buffer_equal_to_formatted_items() {
        let model = single_day_model();
        let session = EditSession::from_model(&model);

        assert_eq!(session.len(), 1);
        match &model.schedule {
            Schedule::SingleDay(items) => {
                assert_eq!(session.get(0).unwrap(), format_items(items));
            }
            Schedule::MultiDay(_) => unreachable!(),
        }
    }

    #[test]
    fn multi_day_buffers_are_index_aligned() {
        let payload = r#"{
            "title": "Offsite",
            "days": [
                {"date": "2024-05-01", "start_time": "09:00", "end_time": "17:00",
                 "items": [{"title": "Welcome"}]},
                {"date": "2024-05-02", "start_time": "09:00", "end_time": "16:00",
                 "items": [{"title": "Retro"}]}
            ]
        }"#;
        let parsed = parse_payload(payload);
        let session = EditSession::from_parsed(&parsed);

        assert_eq!(session.len(), 2);
        assert!(session.get(0).unwrap().contains("WELCOME"));
        assert!(session.get(1).unwrap().contains("RETRO"));
    }

    #[test]
    fn raw_fallback_yields_empty_session() {
        let parsed = parse_payload("not json at all");
        let session = EditSession::from_parsed(&parsed);
        assert!(session.is_empty());
    }

    #[test]
    fn replace_then_get_round_trips() {
        let mut session = EditSession::from_model(&single_day_model());
        session.replace(0, "Hand-written agenda".to_string()).unwrap();
        assert_eq!(session.get(0).unwrap(), "Hand-written agenda");
    }

    #[test]
    fn out_of_range_access_fails_without_mutation() {
        let mut session = EditSession::from_model(&single_day_model());
        let before = session.get(0).unwrap().to_string();

        assert!(matches!(
            session.get(5),
            Err(AgendaError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert!(matches!(
            session.replace(5, "x".to_string()),
            Err(AgendaError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(session.get(0).unwrap(), before);
    }

    #[test]
    fn combined_joins_buffers_with_divider() {
        let mut session = EditSession {
            buffers: vec![String::new(), String::new()],
        };
        session.replace(0, "A".to_string()).unwrap();
        session.replace(1, "B".to_string()).unwrap();

        assert_eq!(session.combined(), format!("A\n\n{}\n\nB", "=".repeat(20)));
    }

    #[test]
    fn combined_single_buffer_is_verbatim() {
        let mut session = EditSession::from_model(&single_day_model());
        session.replace(0, "just me".to_string()).unwrap();
        assert_eq!(session.combined(), "just me");
    }

    #[test]
    fn combined_empty_session_is_empty() {
        assert_eq!(EditSession::empty().combined(), "");
    }
}
