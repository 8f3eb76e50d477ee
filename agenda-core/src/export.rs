//! Calendar-export request parameters.
//!
//! Builders read the current edit buffers — never the original structured
//! items — so user edits always reach the exported file. The backend
//! interprets every timestamp as local wall-clock time; nothing here may
//! append a zone marker. The actual network call belongs to the transport
//! layer, which transmits an [`ExportParams`] as-is.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AgendaError, AgendaResult};
use crate::model::{AgendaModel, Schedule};
use crate::session::EditSession;

/// Local wall-clock timestamp format shared by all backend interfaces.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Maximum topic length carried into a suggested filename.
const FILENAME_TOPIC_MAX: usize = 50;

/// Parameter set for a create-ics request.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportParams {
    pub topic: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub agenda_content: String,
}

/// Render a local timestamp for the backend interfaces.
pub fn format_local(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Export parameters covering the entire agenda.
///
/// Content is the combined edit buffers: the sole buffer verbatim, or all
/// buffers in day order separated by a visible divider rule.
pub fn whole_agenda(
    session: &EditSession,
    topic: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
    location: &str,
) -> ExportParams {
    ExportParams {
        topic: topic.to_string(),
        start_time: format_local(start),
        end_time: format_local(end),
        location: location.to_string(),
        agenda_content: session.combined(),
    }
}

/// Export parameters for one day of a multi-day agenda.
///
/// Start/end join the day's date with its start/end times, zero-padded to
/// seconds. The topic gains a 1-based `" (Day {n})"` suffix. Content is that
/// day's current buffer, so user edits are always reflected. Fails without
/// side effects when the agenda has no days or the index is out of range.
pub fn single_day(
    session: &EditSession,
    model: &AgendaModel,
    day_index: usize,
    topic: &str,
    location: &str,
) -> AgendaResult<ExportParams> {
    let days = match &model.schedule {
        Schedule::MultiDay(days) => days,
        Schedule::SingleDay(_) => return Err(AgendaError::NotMultiDay),
    };
    let day = days.get(day_index).ok_or(AgendaError::IndexOutOfRange {
        index: day_index,
        len: days.len(),
    })?;
    let content = session.get(day_index)?.to_string();

    Ok(ExportParams {
        topic: format!("{} (Day {})", topic, day_index + 1),
        start_time: day_timestamp(&day.date, &day.start_time),
        end_time: day_timestamp(&day.date, &day.end_time),
        location: location.to_string(),
        agenda_content: content,
    })
}

/// Suggested download filename for an exported calendar file: the meeting
/// start plus a sanitized topic, e.g. `2024-05-01 09-00 Dev Sync.ics`.
pub fn suggested_filename(topic: &str, start_time: &str) -> String {
    let start = match NaiveDateTime::parse_from_str(start_time.trim_end_matches('Z'), TIMESTAMP_FORMAT)
    {
        Ok(start) => start,
        Err(_) => return "meeting_agenda.ics".to_string(),
    };

    let sanitized: String = topic
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let sanitized = sanitized.split_whitespace().collect::<Vec<_>>().join(" ");
    let sanitized: String = sanitized.chars().take(FILENAME_TOPIC_MAX).collect();

    format!("{} {}.ics", start.format("%Y-%m-%d %H-%M"), sanitized)
}

/// Join a day's date and time-of-day into a local timestamp with seconds.
///
/// Canonicalizes through chrono when both parts parse; free-form text that
/// chrono rejects is joined literally so the request still carries it.
fn day_timestamp(date: &str, time: &str) -> String {
    let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d");
    let parsed_time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"));

    match (parsed_date, parsed_time) {
        (Ok(date), Ok(time)) => format_local(date.and_time(time)),
        _ => format!("{}T{}", date, pad_seconds(time)),
    }
}

/// Append `:00` seconds to an `HH:MM` time, leaving other shapes untouched.
fn pad_seconds(time: &str) -> String {
    let looks_like_hh_mm = time.len() == 5 && time.as_bytes()[2] == b':';
    if looks_like_hh_mm {
        format!("{}:00", time)
    } else {
        time.to_string()
    }
}
