//! Terminal rendering for parsed agendas.
//!
//! Colored counterpart of the plain formatter in agenda-core: day headers
//! highlighted, break-like slots dimmed via the classifier. The plain
//! formatter stays authoritative for the editable/exported text; this module
//! only decorates what the user sees in the terminal.

use agenda_core::classify::is_break_like;
use agenda_core::format::format_items;
use agenda_core::model::{AgendaItem, AgendaModel, ParsedAgenda, Schedule};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Width of the rule under day headers, matching the plain formatter.
const DAY_RULE_WIDTH: usize = 40;

/// Render a parse outcome for the terminal. Raw fallbacks print verbatim.
pub fn render_parsed(parsed: &ParsedAgenda) -> String {
    match parsed {
        ParsedAgenda::Structured(model) => render_model(model),
        ParsedAgenda::Raw(text) => text.clone(),
    }
}

/// Colored whole-agenda rendering.
pub fn render_model(model: &AgendaModel) -> String {
    let mut lines = Vec::new();
    let title = model.title.to_uppercase();
    if !title.is_empty() {
        lines.push(title.bold().to_string());
        lines.push("=".repeat(title.chars().count()));
        lines.push(String::new());
    }

    if !model.summary.is_empty() {
        lines.push(model.summary.clone());
        lines.push(String::new());
    }

    match &model.schedule {
        Schedule::MultiDay(days) => {
            for (i, day) in days.iter().enumerate() {
                lines.push(format!("DAY {} - {}", i + 1, day.date).cyan().to_string());
                lines.push("-".repeat(DAY_RULE_WIDTH));
                lines.push(render_day_items(&day.items));
            }
        }
        Schedule::SingleDay(items) => {
            lines.push("AGENDA ITEMS:".cyan().to_string());
            lines.push("-".repeat(DAY_RULE_WIDTH));
            lines.push(render_day_items(items));
        }
    }

    lines.join("\n")
}

/// Item blocks from the plain formatter, with break-like slots dimmed.
fn render_day_items(items: &[AgendaItem]) -> String {
    let mut out = String::new();
    for item in items {
        let block = format_items(std::slice::from_ref(item));
        if is_break_like(&item.title) {
            out.push_str(&block.dimmed().to_string());
        } else {
            out.push_str(&block);
        }
        out.push('\n');
    }
    out
}

/// Spinner shown while a backend call is in flight.
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
