//! Thumbnail upload.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::info;

use ytdata_core::Media;
use ytdata_core::params::ThumbnailsSetParams;

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ThumbnailsCommand {
    #[command(subcommand)]
    pub command: ThumbnailsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ThumbnailsSubcommand {
    /// Upload a custom thumbnail for a video
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Video ID
    pub video_id: String,

    /// Image file (JPEG or PNG)
    pub file: PathBuf,

    /// MIME type, inferred from the file extension by default
    #[arg(long)]
    pub content_type: Option<String>,
}

pub async fn handle(cmd: ThumbnailsCommand, api: &ApiArgs) -> Result<()> {
    match cmd.command {
        ThumbnailsSubcommand::Set(args) => set(args, api).await,
    }
}

async fn set(args: SetArgs, api: &ApiArgs) -> Result<()> {
    let data = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let content_type = args
        .content_type
        .clone()
        .unwrap_or_else(|| guess_content_type(&args.file).to_string());
    info!(len = data.len(), %content_type, "uploading thumbnail");

    let client = api.client()?;
    let response = client
        .thumbnails()
        .set(
            &ThumbnailsSetParams::new(args.video_id.as_str()),
            Media::new(content_type, data),
        )
        .await
        .context("Failed to set thumbnail")?;

    output::json(&response, api.pretty)
}

fn guess_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
