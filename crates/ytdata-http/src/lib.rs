//! ytdata-http - reqwest-backed transport for the YouTube Data API client.
//!
//! ```no_run
//! # async fn run() -> ytdata_core::Result<()> {
//! use ytdata_core::ClientConfig;
//! use ytdata_core::params::VideosListParams;
//!
//! let client = ytdata_http::connect(ClientConfig::new().with_api_key("AIza..."))?;
//! let videos = client
//!     .videos()
//!     .list(&VideosListParams::by_id("snippet", ["dQw4w9WgXcQ"]))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod transport;

pub use transport::ReqwestTransport;

use ytdata_core::{Client, ClientConfig, Result};

/// A client that talks to the API over reqwest.
pub type YouTubeClient = Client<ReqwestTransport>;

/// Build a client backed by a fresh [`ReqwestTransport`].
pub fn connect(config: ClientConfig) -> Result<YouTubeClient> {
    let transport = ReqwestTransport::new(&config)?;
    Ok(Client::new(transport, config))
}
