//! Comment thread subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use ytdata_core::params::{CommentOrder, CommentThreadsListParams};

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct CommentThreadsCommand {
    #[command(subcommand)]
    pub command: CommentThreadsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CommentThreadsSubcommand {
    /// List the comment threads of a video
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Video ID
    pub video_id: String,

    /// time or relevance
    #[arg(long)]
    pub order: Option<CommentOrder>,

    /// Maximum number of results (1-100)
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Page token from a previous call
    #[arg(long)]
    pub page_token: Option<String>,

    /// Resource parts to include
    #[arg(long, default_value = "snippet")]
    pub part: String,
}

pub async fn handle(cmd: CommentThreadsCommand, api: &ApiArgs) -> Result<()> {
    match cmd.command {
        CommentThreadsSubcommand::List(args) => list(args, api).await,
    }
}

async fn list(args: ListArgs, api: &ApiArgs) -> Result<()> {
    let client = api.client()?;

    let mut params = CommentThreadsListParams::new(args.part.as_str());
    params.video_id = Some(args.video_id);
    params.order = args.order;
    params.max_results = args.max_results;
    params.page_token = args.page_token;

    let response = client
        .comment_threads()
        .list(&params)
        .await
        .context("Failed to list comment threads")?;

    output::items(response.items(), response.next_page_token(), api.pretty)
}
