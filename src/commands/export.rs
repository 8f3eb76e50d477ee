use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use agenda_core::export::{self, format_local, ExportParams};
use agenda_core::model::ParsedAgenda;
use agenda_core::parse::parse_payload;
use agenda_core::session::EditSession;

use crate::client::ApiClient;
use crate::commands::{day_index, parse_local_timestamp};
use crate::render;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    api: &ApiClient,
    topic: String,
    location: String,
    start: String,
    end: String,
    agenda_json: Option<PathBuf>,
    agenda_text: Option<PathBuf>,
    day: Option<usize>,
    edited_text: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let start = parse_local_timestamp(&start)?;
    let end = parse_local_timestamp(&end)?;

    let params = match (agenda_json, agenda_text) {
        (Some(path), None) => {
            let payload = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            match parse_payload(&payload) {
                ParsedAgenda::Structured(model) => {
                    let mut session = EditSession::from_model(&model);

                    if let Some(edit_path) = &edited_text {
                        let text = fs::read_to_string(edit_path)
                            .with_context(|| format!("Failed to read {}", edit_path.display()))?;
                        let index = match day {
                            Some(day_number) => day_index(day_number)?,
                            None if session.len() == 1 => 0,
                            None => anyhow::bail!(
                                "--edited-text needs --day for a multi-day agenda"
                            ),
                        };
                        session.replace(index, text)?;
                    }

                    match day {
                        Some(day_number) => export::single_day(
                            &session,
                            &model,
                            day_index(day_number)?,
                            &topic,
                            &location,
                        )?,
                        None => export::whole_agenda(&session, &topic, start, end, &location),
                    }
                }
                // Unparseable payloads still export: the raw text goes out as-is.
                ParsedAgenda::Raw(text) => ExportParams {
                    topic,
                    start_time: format_local(start),
                    end_time: format_local(end),
                    location,
                    agenda_content: text,
                },
            }
        }
        (None, Some(path)) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            ExportParams {
                topic,
                start_time: format_local(start),
                end_time: format_local(end),
                location,
                agenda_content: content,
            }
        }
        _ => anyhow::bail!("Provide exactly one of --agenda-json or --agenda-text"),
    };

    let spinner = render::create_spinner("Requesting calendar file".to_string());
    let result = api.create_ics(&params).await;
    spinner.finish_and_clear();
    let bytes = result?;

    let path = output.unwrap_or_else(|| {
        PathBuf::from(export::suggested_filename(&params.topic, &params.start_time))
    });
    fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write calendar file to {}", path.display()))?;
    println!(
        "{}",
        format!("  Calendar file saved to {}", path.display()).green()
    );

    Ok(())
}
