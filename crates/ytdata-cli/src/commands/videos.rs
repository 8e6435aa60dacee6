//! Video subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use ytdata_core::params::{VideosListParams, VideosRateParams};
use ytdata_core::schema::Rating;

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct VideosCommand {
    #[command(subcommand)]
    pub command: VideosSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum VideosSubcommand {
    /// Fetch videos by ID
    Get(GetArgs),

    /// List the most popular videos
    Popular(PopularArgs),

    /// Like, dislike or clear a rating
    Rate(RateArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Video IDs
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Resource parts to include
    #[arg(long, default_value = "snippet,contentDetails,statistics")]
    pub part: String,
}

#[derive(Args, Debug)]
pub struct PopularArgs {
    /// ISO 3166-1 alpha-2 region code
    #[arg(long)]
    pub region: Option<String>,

    /// Restrict to a video category
    #[arg(long)]
    pub category: Option<String>,

    /// Maximum number of results (1-50)
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Page token from a previous call
    #[arg(long)]
    pub page_token: Option<String>,

    /// Resource parts to include
    #[arg(long, default_value = "snippet,statistics")]
    pub part: String,
}

#[derive(Args, Debug)]
pub struct RateArgs {
    /// Video ID
    pub id: String,

    /// like, dislike or none
    pub rating: Rating,
}

pub async fn handle(cmd: VideosCommand, api: &ApiArgs) -> Result<()> {
    match cmd.command {
        VideosSubcommand::Get(args) => get(args, api).await,
        VideosSubcommand::Popular(args) => popular(args, api).await,
        VideosSubcommand::Rate(args) => rate(args, api).await,
    }
}

async fn get(args: GetArgs, api: &ApiArgs) -> Result<()> {
    let client = api.client()?;
    let params = VideosListParams::by_id(args.part.as_str(), args.ids);

    let response = client
        .videos()
        .list(&params)
        .await
        .context("Failed to fetch videos")?;

    output::items(response.items(), response.next_page_token(), api.pretty)
}

async fn popular(args: PopularArgs, api: &ApiArgs) -> Result<()> {
    let client = api.client()?;
    let mut params = VideosListParams::most_popular(args.part.as_str());
    params.region_code = args.region;
    params.video_category_id = args.category;
    params.max_results = args.max_results;
    params.page_token = args.page_token;

    let response = client
        .videos()
        .list(&params)
        .await
        .context("Failed to list popular videos")?;

    output::items(response.items(), response.next_page_token(), api.pretty)
}

async fn rate(args: RateArgs, api: &ApiArgs) -> Result<()> {
    let client = api.client()?;

    client
        .videos()
        .rate(&VideosRateParams::new(args.id.as_str(), args.rating))
        .await
        .context("Failed to rate video")?;

    output::success(&format!("Rated {} as {}", args.id, args.rating));
    Ok(())
}
