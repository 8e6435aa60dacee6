//! Subcommand implementations.

pub mod categories;
pub mod channels;
pub mod comment_threads;
pub mod playlist_items;
pub mod search;
pub mod thumbnails;
pub mod videos;
