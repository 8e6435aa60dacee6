//! CLI argument definitions.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use ytdata_core::{ApiBaseUrl, ClientConfig};
use ytdata_http::YouTubeClient;

use crate::commands::categories::CategoriesArgs;
use crate::commands::channels::ChannelsCommand;
use crate::commands::comment_threads::CommentThreadsCommand;
use crate::commands::playlist_items::PlaylistItemsCommand;
use crate::commands::search::SearchArgs;
use crate::commands::thumbnails::ThumbnailsCommand;
use crate::commands::videos::VideosCommand;

/// YouTube Data API v3 exploration tool.
#[derive(Parser, Debug)]
#[command(name = "yt")]
#[command(author, version = env!("YTDATA_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection and output options shared by every command.
#[derive(Args, Debug)]
pub struct ApiArgs {
    /// API key for public data
    #[arg(long, env = "YOUTUBE_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// OAuth 2.0 access token (takes precedence over --api-key)
    #[arg(long, env = "YOUTUBE_ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub access_token: Option<String>,

    /// API root URL
    #[arg(long, env = "YOUTUBE_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl ApiArgs {
    /// Build a client from the flags and environment.
    pub fn client(&self) -> Result<YouTubeClient> {
        let mut config =
            ClientConfig::new().with_user_agent(concat!("yt/", env!("YTDATA_VERSION")));

        if let Some(url) = &self.base_url {
            let base = ApiBaseUrl::new(url).context("Invalid base URL")?;
            config = config.with_base_url(base);
        }

        if let Some(token) = &self.access_token {
            debug!("using bearer credentials");
            config = config.with_access_token(token.as_str());
        } else if let Some(key) = &self.api_key {
            debug!("using API key credentials");
            config = config.with_api_key(key.as_str());
        }

        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        ytdata_http::connect(config).context("Failed to build client")
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Video lookups and ratings
    Videos(VideosCommand),

    /// Channel lookups
    Channels(ChannelsCommand),

    /// Search videos, channels and playlists
    Search(SearchArgs),

    /// Playlist contents
    PlaylistItems(PlaylistItemsCommand),

    /// Top-level comments on a video
    CommentThreads(CommentThreadsCommand),

    /// List video categories for a region
    Categories(CategoriesArgs),

    /// Custom video thumbnails
    Thumbnails(ThumbnailsCommand),
}
