//! HTTP client for the Agenda Planner backend.
//!
//! The backend exposes three form-encoded endpoints: agenda generation,
//! text refinement and calendar-file creation. This client only moves
//! request/response payloads; it never interprets agenda content.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

use agenda_core::export::ExportParams;

/// Generation request timeout; agenda generation can take a while.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Agenda language accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum Language {
    De,
    En,
}

impl Language {
    /// Short code the backend expects.
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "DE",
            Language::En => "EN",
        }
    }

    /// Default refinement instruction when the user gives none.
    pub fn default_instruction(self) -> &'static str {
        match self {
            Language::De => "Please keep the text in German.",
            Language::En => "Keep the text in English.",
        }
    }
}

/// Inputs for a generate-agenda request.
pub struct GenerateRequest {
    pub topic: String,
    pub start_time: String,
    pub end_time: String,
    pub language: Language,
    pub email_content: Option<String>,
    pub attachments: Vec<PathBuf>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    agenda: String,
}

#[derive(Deserialize)]
struct RefineResponse {
    refined_text: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    detail: String,
}

/// HTTP client for the Agenda Planner backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(api_base: &str) -> Result<Self> {
        Url::parse(api_base).with_context(|| format!("Invalid API base URL: \"{}\"", api_base))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// POST /generate-agenda — returns the opaque agenda payload.
    pub async fn generate(&self, req: GenerateRequest) -> Result<String> {
        let mut form = Form::new()
            .text("topic", req.topic)
            .text("start_time", req.start_time)
            .text("end_time", req.end_time)
            .text("language", req.language.code());
        if let Some(email) = req.email_content {
            form = form.text("email_content", email);
        }
        for path in &req.attachments {
            form = form.part("files", file_part(path).await?);
        }

        let resp = self
            .http
            .post(format!("{}/generate-agenda", self.base_url))
            .multipart(form)
            .send()
            .await
            .context("Failed to reach the agenda backend")?;
        let resp = check_status(resp).await?;

        let agenda = resp.json::<GenerateResponse>().await?.agenda;
        log::debug!("received agenda payload ({} bytes)", agenda.len());
        Ok(agenda)
    }

    /// POST /refine-text — returns the replacement text.
    pub async fn refine(&self, text: &str, instruction: &str) -> Result<String> {
        let form = Form::new()
            .text("text", text.to_string())
            .text("instruction", instruction.to_string());

        let resp = self
            .http
            .post(format!("{}/refine-text", self.base_url))
            .multipart(form)
            .send()
            .await
            .context("Failed to reach the agenda backend")?;
        let resp = check_status(resp).await?;

        Ok(resp.json::<RefineResponse>().await?.refined_text)
    }

    /// POST /create-ics — returns the calendar file bytes.
    pub async fn create_ics(&self, params: &ExportParams) -> Result<Vec<u8>> {
        let form = Form::new()
            .text("topic", params.topic.clone())
            .text("start_time", params.start_time.clone())
            .text("end_time", params.end_time.clone())
            .text("location", params.location.clone())
            .text("agenda_content", params.agenda_content.clone());

        let resp = self
            .http
            .post(format!("{}/create-ics", self.base_url))
            .multipart(form)
            .send()
            .await
            .context("Failed to reach the agenda backend")?;
        let resp = check_status(resp).await?;

        Ok(resp.bytes().await?.to_vec())
    }
}

/// Surface the backend's error detail on a non-success response.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status();
    match resp.json::<ErrorResponse>().await {
        Ok(err) => anyhow::bail!("Backend error ({}): {}", status, err.detail),
        Err(_) => anyhow::bail!("Backend error ({})", status),
    }
}

/// Build a multipart file part, keeping the on-disk file name.
async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read attachment: {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("attachment")
        .to_string();

    Ok(Part::bytes(bytes).file_name(name))
}
