mod client;
mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use client::{ApiClient, Language};

const DEFAULT_API_BASE: &str = "http://localhost:8086";

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Generate, review and export meeting agendas via the Agenda Planner backend")]
struct Cli {
    /// Agenda Planner backend base URL
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new agenda
    Generate {
        /// Meeting topic (prompted when omitted)
        #[arg(long)]
        topic: Option<String>,

        /// Start timestamp (local, e.g. "2024-05-01T09:00:00")
        #[arg(long)]
        start: String,

        /// End timestamp (local)
        #[arg(long)]
        end: String,

        /// Agenda language
        #[arg(long, value_enum, default_value_t = Language::De)]
        language: Language,

        /// Email context or notes to feed the generator
        #[arg(long)]
        email: Option<String>,

        /// File paths to attach as source material
        #[arg(long, num_args = 0..)]
        attachments: Vec<PathBuf>,

        /// Store the raw agenda payload at this path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render a stored agenda payload as plain text
    Show {
        /// Path to a stored agenda payload (JSON)
        #[arg(long)]
        agenda_json: PathBuf,

        /// Print a single day's edit buffer (1-based)
        #[arg(long)]
        day: Option<usize>,

        /// Pretty-print the stored payload instead of formatting it
        #[arg(long, conflicts_with = "day")]
        raw: bool,
    },
    /// Refine agenda text via the backend
    Refine {
        /// Path to a free-text file to refine
        #[arg(long, conflicts_with = "agenda_json")]
        text_file: Option<PathBuf>,

        /// Path to a stored agenda payload; refines one day's buffer
        #[arg(long, requires = "day")]
        agenda_json: Option<PathBuf>,

        /// Day to refine (1-based, with --agenda-json)
        #[arg(long)]
        day: Option<usize>,

        /// Language for the default instruction
        #[arg(long, value_enum, default_value_t = Language::De)]
        language: Language,

        /// Custom refinement instruction
        #[arg(long)]
        instruction: Option<String>,

        /// Store the refined text at this path instead of printing it
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Create a calendar file from agenda content
    Export {
        /// Meeting topic
        #[arg(long)]
        topic: String,

        /// Meeting location
        #[arg(long)]
        location: String,

        /// Start timestamp (local)
        #[arg(long)]
        start: String,

        /// End timestamp (local)
        #[arg(long)]
        end: String,

        /// Path to a stored agenda payload (JSON)
        #[arg(long, conflicts_with = "agenda_text")]
        agenda_json: Option<PathBuf>,

        /// Path to a plain-text agenda to export as-is
        #[arg(long)]
        agenda_text: Option<PathBuf>,

        /// Export a single day (1-based, with --agenda-json)
        #[arg(long)]
        day: Option<usize>,

        /// Replace a day's buffer with this file before exporting
        #[arg(long)]
        edited_text: Option<PathBuf>,

        /// Destination .ics path (derived from topic and start when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let api = ApiClient::new(&cli.api_base)?;

    match cli.command {
        Commands::Generate {
            topic,
            start,
            end,
            language,
            email,
            attachments,
            output,
        } => {
            commands::generate::run(&api, topic, start, end, language, email, attachments, output)
                .await
        }
        Commands::Show {
            agenda_json,
            day,
            raw,
        } => commands::show::run(agenda_json, day, raw),
        Commands::Refine {
            text_file,
            agenda_json,
            day,
            language,
            instruction,
            output,
        } => {
            commands::refine::run(
                &api,
                text_file,
                agenda_json,
                day,
                language,
                instruction,
                output,
            )
            .await
        }
        Commands::Export {
            topic,
            location,
            start,
            end,
            agenda_json,
            agenda_text,
            day,
            edited_text,
            output,
        } => {
            commands::export::run(
                &api,
                topic,
                location,
                start,
                end,
                agenda_json,
                agenda_text,
                day,
                edited_text,
                output,
            )
            .await
        }
    }
}
