//! Channel subcommands.

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Subcommand};

use ytdata_core::params::ChannelsListParams;

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ChannelsCommand {
    #[command(subcommand)]
    pub command: ChannelsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ChannelsSubcommand {
    /// Fetch channels by ID, handle, or the authorized user's own
    Get(GetArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("selector").required(true).args(["id", "handle", "mine"])))]
pub struct GetArgs {
    /// Channel IDs
    #[arg(long, num_args = 1..)]
    pub id: Vec<String>,

    /// Channel handle, e.g. @GoogleDevelopers
    #[arg(long)]
    pub handle: Option<String>,

    /// The authorized user's channel (requires --access-token)
    #[arg(long)]
    pub mine: bool,

    /// Resource parts to include
    #[arg(long, default_value = "snippet,statistics")]
    pub part: String,
}

pub async fn handle(cmd: ChannelsCommand, api: &ApiArgs) -> Result<()> {
    match cmd.command {
        ChannelsSubcommand::Get(args) => get(args, api).await,
    }
}

async fn get(args: GetArgs, api: &ApiArgs) -> Result<()> {
    let client = api.client()?;

    let mut params = ChannelsListParams::new(args.part.as_str());
    if !args.id.is_empty() {
        params.id = Some(args.id);
    }
    params.for_handle = args.handle;
    if args.mine {
        params.mine = Some(true);
    }

    let response = client
        .channels()
        .list(&params)
        .await
        .context("Failed to fetch channels")?;

    output::items(response.items(), response.next_page_token(), api.pretty)
}
