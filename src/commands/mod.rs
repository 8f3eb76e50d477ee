pub mod export;
pub mod generate;
pub mod refine;
pub mod show;

use anyhow::Result;
use chrono::NaiveDateTime;

use agenda_core::export::TIMESTAMP_FORMAT;

/// Parse a user-supplied local timestamp.
///
/// Tolerates a trailing "Z" (stripped, never forwarded — the backend reads
/// local wall-clock time) and a missing seconds component.
pub fn parse_local_timestamp(input: &str) -> Result<NaiveDateTime> {
    let cleaned = input.trim().trim_end_matches('Z');
    NaiveDateTime::parse_from_str(cleaned, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(cleaned, "%Y-%m-%dT%H:%M"))
        .map_err(|_| {
            anyhow::anyhow!(
                "Could not parse timestamp: \"{}\" (expected e.g. 2024-05-01T09:00:00)",
                input
            )
        })
}

/// Convert a 1-based `--day` argument to a buffer index.
pub fn day_index(day_number: usize) -> Result<usize> {
    day_number
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Day numbers start at 1"))
}
