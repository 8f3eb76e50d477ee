use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::Input;
use owo_colors::OwoColorize;

use agenda_core::export::format_local;
use agenda_core::model::ParsedAgenda;
use agenda_core::parse::parse_payload;

use crate::client::{ApiClient, GenerateRequest, Language};
use crate::commands::parse_local_timestamp;
use crate::render;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    api: &ApiClient,
    topic: Option<String>,
    start: String,
    end: String,
    language: Language,
    email: Option<String>,
    attachments: Vec<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let topic = match topic {
        Some(topic) => topic,
        None => Input::<String>::new()
            .with_prompt("  Topic")
            .interact_text()?,
    };

    let start = parse_local_timestamp(&start)?;
    let end = parse_local_timestamp(&end)?;

    let request = GenerateRequest {
        topic,
        start_time: format_local(start),
        end_time: format_local(end),
        language,
        email_content: email,
        attachments,
    };

    let spinner = render::create_spinner("Generating agenda".to_string());
    let result = api.generate(request).await;
    spinner.finish_and_clear();

    let payload = result?;
    let parsed = parse_payload(&payload);

    if let ParsedAgenda::Raw(_) = parsed {
        eprintln!(
            "{}",
            "  Backend returned unstructured agenda text; showing it verbatim.".yellow()
        );
    }
    println!("{}", render::render_parsed(&parsed));

    if let Some(path) = output {
        fs::write(&path, &payload)
            .with_context(|| format!("Failed to write payload to {}", path.display()))?;
        println!(
            "{}",
            format!("  Agenda payload stored at {}", path.display()).green()
        );
    }

    Ok(())
}
