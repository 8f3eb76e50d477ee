//! Generation payload parsing.
//!
//! The generation service returns an opaque string that is expected to be a
//! JSON agenda object. Deserialization is all-or-nothing per payload: any
//! syntax or shape failure falls back to the verbatim text so the caller can
//! still display something.

use serde::Deserialize;

use crate::model::{AgendaDay, AgendaItem, AgendaModel, ParsedAgenda, Schedule};

/// Payload shape as produced by the generation service.
///
/// `items` and `days` are both optional here; `into_model` resolves the
/// ambiguity into the tagged `Schedule`.
#[derive(Deserialize)]
struct RawPayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: String,
    items: Option<Vec<AgendaItem>>,
    days: Option<Vec<AgendaDay>>,
}

impl RawPayload {
    fn into_model(self) -> AgendaModel {
        // A payload carrying both shapes resolves to the day schedule.
        let schedule = match (self.days, self.items) {
            (Some(days), _) => Schedule::MultiDay(days),
            (None, Some(items)) => Schedule::SingleDay(items),
            (None, None) => Schedule::SingleDay(Vec::new()),
        };
        AgendaModel {
            title: self.title,
            summary: self.summary,
            schedule,
        }
    }
}

/// Parse a generation payload into a structured agenda, or fall back to the
/// verbatim text when it is not a well-formed agenda object.
pub fn parse_payload(payload: &str) -> ParsedAgenda {
    match serde_json::from_str::<RawPayload>(payload) {
        Ok(raw) => ParsedAgenda::Structured(raw.into_model()),
        Err(e) => {
            log::warn!("payload is not a structured agenda ({}), keeping raw text", e);
            ParsedAgenda::Raw(payload.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_day_payload() {
        let payload = r#"{
            "title": "Dev Sync",
            "summary": "Weekly alignment.",
            "items": [
                {"title": "Standup", "description": "Round the room."},
                {"title": "Coffee Break"}
            ]
        }"#;

        let model = match parse_payload(payload) {
            ParsedAgenda::Structured(model) => model,
            ParsedAgenda::Raw(text) => panic!("expected structured agenda, got raw: {}", text),
        };

        assert_eq!(model.title, "Dev Sync");
        assert_eq!(model.summary, "Weekly alignment.");
        match model.schedule {
            Schedule::SingleDay(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].title, "Standup");
                assert_eq!(items[1].description, "");
            }
            Schedule::MultiDay(_) => panic!("expected single-day schedule"),
        }
    }

    #[test]
    fn parse_multi_day_payload() {
        let payload = r#"{
            "title": "Offsite",
            "summary": "",
            "days": [
                {
                    "date": "2024-05-01",
                    "start_time": "09:00",
                    "end_time": "17:30",
                    "items": [
                        {"time_slot": "09:00 - 09:30", "title": "Welcome", "description": "Kickoff.", "duration": "30 mins", "type": "work"}
                    ]
                },
                {"date": "2024-05-02", "start_time": "08:30", "end_time": "16:00", "items": []}
            ]
        }"#;

        let model = parse_payload(payload).model().cloned().expect("structured");
        let days = model.days().expect("multi-day");
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].items[0].kind.as_deref(), Some("work"));
        assert!(days[1].items.is_empty());
    }

    #[test]
    fn days_take_precedence_over_items() {
        let payload = r#"{
            "title": "Both shapes",
            "items": [{"title": "Ignored"}],
            "days": [{"date": "2024-05-01", "start_time": "09:00", "end_time": "17:00", "items": []}]
        }"#;

        let model = parse_payload(payload).model().cloned().expect("structured");
        assert!(matches!(model.schedule, Schedule::MultiDay(ref days) if days.len() == 1));
    }

    #[test]
    fn payload_without_items_or_days_is_valid_and_empty() {
        let model = parse_payload(r#"{"title": "Bare"}"#)
            .model()
            .cloned()
            .expect("structured");
        assert_eq!(model.day_count(), 1);
        assert!(matches!(model.schedule, Schedule::SingleDay(ref items) if items.is_empty()));
    }

    #[test]
    fn malformed_payload_falls_back_to_raw() {
        let payload = "Sorry, I could not generate an agenda today.";
        match parse_payload(payload) {
            ParsedAgenda::Raw(text) => assert_eq!(text, payload),
            ParsedAgenda::Structured(_) => panic!("expected raw fallback"),
        }
    }

    #[test]
    fn wrong_shape_falls_back_to_raw() {
        // Syntactically valid JSON, wrong shape: items must be an array.
        let payload = r#"{"title": "Broken", "items": "not a list"}"#;
        assert!(matches!(parse_payload(payload), ParsedAgenda::Raw(ref text) if text == payload));
    }

    #[test]
    fn item_without_title_is_a_shape_failure() {
        let payload = r#"{"items": [{"description": "No title here."}]}"#;
        assert!(matches!(parse_payload(payload), ParsedAgenda::Raw(_)));
    }
}
