//! yt - CLI tool for YouTube Data API exploration.
//!
//! This is a thin wrapper over the `ytdata` libraries, intended for manual
//! API exploration and debugging.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{categories, channels, comment_threads, playlist_items, search, thumbnails, videos};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let api = &cli.api;
    match cli.command {
        Commands::Videos(cmd) => videos::handle(cmd, api).await,
        Commands::Channels(cmd) => channels::handle(cmd, api).await,
        Commands::Search(args) => search::run(args, api).await,
        Commands::PlaylistItems(cmd) => playlist_items::handle(cmd, api).await,
        Commands::CommentThreads(cmd) => comment_threads::handle(cmd, api).await,
        Commands::Categories(args) => categories::run(args, api).await,
        Commands::Thumbnails(cmd) => thumbnails::handle(cmd, api).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so stdout stays machine-readable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
