//! Playlist item subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use ytdata_core::params::PlaylistItemsListParams;

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct PlaylistItemsCommand {
    #[command(subcommand)]
    pub command: PlaylistItemsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PlaylistItemsSubcommand {
    /// List the items of a playlist
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Playlist ID
    pub playlist_id: String,

    /// Maximum number of results (0-50)
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Page token from a previous call
    #[arg(long)]
    pub page_token: Option<String>,

    /// Resource parts to include
    #[arg(long, default_value = "snippet,contentDetails")]
    pub part: String,
}

pub async fn handle(cmd: PlaylistItemsCommand, api: &ApiArgs) -> Result<()> {
    match cmd.command {
        PlaylistItemsSubcommand::List(args) => list(args, api).await,
    }
}

async fn list(args: ListArgs, api: &ApiArgs) -> Result<()> {
    let client = api.client()?;

    let mut params = PlaylistItemsListParams::new(args.part.as_str());
    params.playlist_id = Some(args.playlist_id);
    params.max_results = args.max_results;
    params.page_token = args.page_token;

    let response = client
        .playlist_items()
        .list(&params)
        .await
        .context("Failed to list playlist items")?;

    output::items(response.items(), response.next_page_token(), api.pretty)
}
