//! Search command implementation.

use anyhow::{Context, Result};
use clap::Args;

use ytdata_core::params::{SearchListParams, SearchOrder, SearchType};

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Restrict to resource types (video, channel, playlist)
    #[arg(long = "type", value_delimiter = ',')]
    pub types: Vec<SearchType>,

    /// Result ordering (date, rating, relevance, title, videoCount, viewCount)
    #[arg(long)]
    pub order: Option<SearchOrder>,

    /// Restrict to a single channel
    #[arg(long)]
    pub channel_id: Option<String>,

    /// ISO 3166-1 alpha-2 region code
    #[arg(long)]
    pub region: Option<String>,

    /// Maximum number of results (0-50)
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Page token from a previous call
    #[arg(long)]
    pub page_token: Option<String>,
}

pub async fn run(args: SearchArgs, api: &ApiArgs) -> Result<()> {
    let client = api.client()?;

    let mut params = SearchListParams::query("snippet", args.query);
    if !args.types.is_empty() {
        params.r#type = Some(args.types);
    }
    params.order = args.order;
    params.channel_id = args.channel_id;
    params.region_code = args.region;
    params.max_results = args.max_results;
    params.page_token = args.page_token;

    let response = client
        .search()
        .list(&params)
        .await
        .context("Search failed")?;

    output::items(response.items(), response.next_page_token(), api.pretty)
}
