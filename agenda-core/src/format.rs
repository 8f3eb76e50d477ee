//! Plain-text agenda rendering.
//!
//! Produces the canonical editable text for a day's items and the "copy all"
//! rendering of a whole agenda. The transformation is one-directional:
//! structured model in, text out. Nothing here parses text back.

use crate::classify::icon_for_title;
use crate::model::{AgendaItem, AgendaModel, Schedule};

/// Maximum length of a description excerpt before truncation.
const EXCERPT_MAX_CHARS: usize = 100;
/// Characters kept when an excerpt is truncated (an ellipsis is appended).
const EXCERPT_KEPT_CHARS: usize = 97;
/// Width of the rule under day headers.
const DAY_RULE_WIDTH: usize = 40;

/// Render a sequence of agenda items as editable plain text.
///
/// Each item renders as a header line, an optional indented description
/// excerpt, and a trailing blank line for visual separation. An empty item
/// list renders as an empty string. This is the form that seeds the edit
/// session buffers, without any agenda-level title or summary wrapper.
pub fn format_items(items: &[AgendaItem]) -> String {
    let mut lines = Vec::new();
    for item in items {
        lines.push(header_line(item));
        if !item.description.is_empty() {
            lines.push(format!("  {}", description_excerpt(&item.description)));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Render the whole agenda as a single text block (the "copy all" form).
pub fn format_agenda(model: &AgendaModel) -> String {
    let mut lines = Vec::new();
    let title = model.title.to_uppercase();
    lines.push(title.clone());
    lines.push("=".repeat(title.chars().count()));
    lines.push(String::new());

    if !model.summary.is_empty() {
        lines.push(model.summary.clone());
        lines.push(String::new());
    }

    match &model.schedule {
        Schedule::MultiDay(days) => {
            for (i, day) in days.iter().enumerate() {
                lines.push(format!("DAY {} - {}", i + 1, day.date));
                lines.push("-".repeat(DAY_RULE_WIDTH));
                lines.push(format_items(&day.items));
            }
        }
        Schedule::SingleDay(items) => {
            lines.push("AGENDA ITEMS:".to_string());
            lines.push("-".repeat(DAY_RULE_WIDTH));
            lines.push(format_items(items));
        }
    }

    lines.join("\n")
}

/// Header line for one item: time slot (or a bullet), icon, uppercased title,
/// and a duration suffix when both slot and duration are present.
fn header_line(item: &AgendaItem) -> String {
    let icon = icon_for_title(&item.title);
    let title = item.title.to_uppercase();

    match item.time_slot.as_deref().filter(|s| !s.is_empty()) {
        Some(slot) => {
            let mut header = format!("{} - {} {}", slot, icon, title);
            if let Some(duration) = item.duration.as_deref().filter(|d| !d.is_empty()) {
                header.push_str(&format!(" ({} min)", strip_duration_unit(duration)));
            }
            header
        }
        None => format!("* {} {}", icon, title),
    }
}

/// Strip a trailing "mins"/"min" unit word from free-form duration text.
///
/// Duration is carried as text; only the literal unit suffix is removed,
/// nothing is parsed as a number.
fn strip_duration_unit(duration: &str) -> &str {
    let trimmed = duration.trim();
    trimmed
        .strip_suffix("mins")
        .or_else(|| trimmed.strip_suffix("min"))
        .map(str::trim_end)
        .unwrap_or(trimmed)
}

/// First sentence of a description, capped for display.
///
/// Takes text up to and including the first `.`, appending one when the text
/// has no terminator. Excerpts over 100 chars are cut to 97 plus "...".
fn description_excerpt(description: &str) -> String {
    let excerpt = match description.find('.') {
        Some(pos) => description[..=pos].to_string(),
        None => format!("{}.", description),
    };

    if excerpt.chars().count() > EXCERPT_MAX_CHARS {
        let kept: String = excerpt.chars().take(EXCERPT_KEPT_CHARS).collect();
        format!("{}...", kept)
    } else {
        excerpt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AgendaDay;

    fn item(title: &str) -> AgendaItem {
        AgendaItem {
            title: title.to_string(),
            description: String::new(),
            time_slot: None,
            duration: None,
            kind: None,
        }
    }

    fn slotted(title: &str, slot: &str, duration: Option<&str>) -> AgendaItem {
        AgendaItem {
            title: title.to_string(),
            description: String::new(),
            time_slot: Some(slot.to_string()),
            duration: duration.map(str::to_string),
            kind: None,
        }
    }

    #[test]
    fn slotted_item_with_duration() {
        let items = [slotted("Coffee Break", "10:15 - 10:45", Some("30 mins"))];
        assert_eq!(format_items(&items), "10:15 - 10:45 - ☕ COFFEE BREAK (30 min)\n");
    }

    #[test]
    fn duration_unit_is_stripped_literally() {
        let items = [slotted("Kickoff", "09:00 - 09:15", Some("15 mins"))];
        assert!(format_items(&items).contains("(15 min)"));

        let items = [slotted("Kickoff", "09:00 - 09:15", Some("15 min"))];
        assert!(format_items(&items).contains("(15 min)"));
    }

    #[test]
    fn missing_duration_omits_suffix() {
        let items = [slotted("Kickoff", "09:00 - 09:15", None)];
        assert_eq!(format_items(&items), "09:00 - 09:15 - 👋 KICKOFF\n");
    }

    #[test]
    fn unslotted_item_gets_bullet() {
        let items = [item("Roadmap discussion")];
        assert_eq!(format_items(&items), "* 📅 ROADMAP DISCUSSION\n");
    }

    #[test]
    fn empty_time_slot_counts_as_absent() {
        let mut entry = slotted("Standup", "", Some("10 mins"));
        entry.time_slot = Some(String::new());
        assert_eq!(format_items(&[entry]), "* 📅 STANDUP\n");
    }

    #[test]
    fn description_cut_at_first_sentence() {
        let mut entry = item("Planning");
        entry.description = "Review the roadmap. Then assign owners.".to_string();
        let text = format_items(&[entry]);
        assert!(text.contains("  Review the roadmap.\n"));
        assert!(!text.contains("assign owners"));
    }

    #[test]
    fn description_without_terminator_gets_one() {
        let mut entry = item("Planning");
        entry.description = "Review the roadmap".to_string();
        assert!(format_items(&[entry]).contains("  Review the roadmap.\n"));
    }

    #[test]
    fn long_first_sentence_is_truncated_to_97_plus_ellipsis() {
        let mut entry = item("Planning");
        entry.description = format!("{}.", "x".repeat(150));
        let text = format_items(&[entry]);
        let description_line = text
            .lines()
            .find(|l| l.starts_with("  "))
            .expect("description line");
        let excerpt = &description_line[2..];
        assert_eq!(excerpt.chars().count(), 100);
        assert_eq!(excerpt, format!("{}...", "x".repeat(97)));
    }

    #[test]
    fn sentence_of_exactly_100_chars_is_kept() {
        let mut entry = item("Planning");
        entry.description = format!("{}.", "y".repeat(99));
        let text = format_items(&[entry]);
        assert!(text.contains(&format!("  {}.", "y".repeat(99))));
        assert!(!text.contains("..."));
    }

    #[test]
    fn items_are_separated_by_blank_lines() {
        let text = format_items(&[item("First"), item("Second")]);
        assert_eq!(text, "* 📅 FIRST\n\n* 📅 SECOND\n");
    }

    #[test]
    fn empty_item_list_renders_empty() {
        assert_eq!(format_items(&[]), "");
    }

    #[test]
    fn whole_agenda_single_day() {
        let model = AgendaModel {
            title: "Dev Sync".to_string(),
            summary: "Weekly alignment.".to_string(),
            schedule: Schedule::SingleDay(vec![item("Standup")]),
        };
        let text = format_agenda(&model);

        assert!(text.starts_with("DEV SYNC\n========\n"));
        assert!(text.contains("Weekly alignment."));
        assert!(text.contains(&format!("AGENDA ITEMS:\n{}\n", "-".repeat(40))));
        assert!(text.contains("* 📅 STANDUP"));
    }

    #[test]
    fn whole_agenda_multi_day_headers_are_one_based() {
        let day = |date: &str| AgendaDay {
            date: date.to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            items: vec![item("Session")],
        };
        let model = AgendaModel {
            title: "Offsite".to_string(),
            summary: String::new(),
            schedule: Schedule::MultiDay(vec![day("2024-05-01"), day("2024-05-02")]),
        };
        let text = format_agenda(&model);

        assert!(text.contains("DAY 1 - 2024-05-01"));
        assert!(text.contains("DAY 2 - 2024-05-02"));
        // No summary paragraph when the summary is empty.
        assert!(text.starts_with("OFFSITE\n=======\n\nDAY 1"));
    }

    #[test]
    fn title_rule_matches_title_length() {
        let model = AgendaModel {
            title: "Sync".to_string(),
            summary: String::new(),
            schedule: Schedule::SingleDay(Vec::new()),
        };
        let text = format_agenda(&model);
        assert!(text.starts_with("SYNC\n====\n"));
    }
}
