use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use agenda_core::parse::parse_payload;
use agenda_core::session::EditSession;

use crate::client::{ApiClient, Language};
use crate::commands::day_index;
use crate::render;

pub async fn run(
    api: &ApiClient,
    text_file: Option<PathBuf>,
    agenda_json: Option<PathBuf>,
    day: Option<usize>,
    language: Language,
    instruction: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let instruction = instruction.unwrap_or_else(|| language.default_instruction().to_string());

    let refined = match (text_file, agenda_json) {
        (Some(path), None) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            refine_text(api, &text, &instruction).await?
        }
        (None, Some(path)) => {
            let day_number = day.context("--day is required with --agenda-json")?;
            let index = day_index(day_number)?;

            let payload = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let parsed = parse_payload(&payload);
            let mut session = EditSession::from_parsed(&parsed);

            let text = session.get(index)?.to_string();
            let refined = refine_text(api, &text, &instruction).await?;
            session.replace(index, refined)?;
            session.get(index)?.to_string()
        }
        _ => anyhow::bail!("Provide exactly one of --text-file or --agenda-json"),
    };

    match output {
        Some(path) => {
            fs::write(&path, &refined)
                .with_context(|| format!("Failed to write refined text to {}", path.display()))?;
            println!(
                "{}",
                format!("  Refined text stored at {}", path.display()).green()
            );
        }
        None => println!("{}", refined),
    }

    Ok(())
}

async fn refine_text(api: &ApiClient, text: &str, instruction: &str) -> Result<String> {
    let spinner = render::create_spinner("Refining text".to_string());
    let result = api.refine(text, instruction).await;
    spinner.finish_and_clear();
    result
}
