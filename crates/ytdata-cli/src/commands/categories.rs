//! Video category listing.

use anyhow::{Context, Result};
use clap::Args;

use ytdata_core::params::VideoCategoriesListParams;

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// ISO 3166-1 alpha-2 region code
    #[arg(long, default_value = "US")]
    pub region: String,

    /// Language for localized titles
    #[arg(long)]
    pub hl: Option<String>,
}

pub async fn run(args: CategoriesArgs, api: &ApiArgs) -> Result<()> {
    let client = api.client()?;

    let mut params = VideoCategoriesListParams::new("snippet");
    params.region_code = Some(args.region);
    params.hl = args.hl;

    let response = client
        .video_categories()
        .list(&params)
        .await
        .context("Failed to list video categories")?;

    output::items(response.items(), response.next_page_token(), api.pretty)
}
