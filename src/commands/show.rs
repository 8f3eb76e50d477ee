use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use agenda_core::parse::parse_payload;
use agenda_core::session::EditSession;

use crate::commands::day_index;
use crate::render;

pub fn run(agenda_json: PathBuf, day: Option<usize>, raw: bool) -> Result<()> {
    let payload = fs::read_to_string(&agenda_json)
        .with_context(|| format!("Failed to read {}", agenda_json.display()))?;

    if raw {
        println!("{}", pretty_payload(&payload));
        return Ok(());
    }

    let parsed = parse_payload(&payload);

    match day {
        Some(day_number) => {
            let session = EditSession::from_parsed(&parsed);
            let index = day_index(day_number)?;
            println!("{}", session.get(index)?);
        }
        None => println!("{}", render::render_parsed(&parsed)),
    }

    Ok(())
}

/// Pretty-print the payload when it is JSON; pass it through otherwise.
fn pretty_payload(payload: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| payload.to_string()),
        Err(_) => payload.to_string(),
    }
}
