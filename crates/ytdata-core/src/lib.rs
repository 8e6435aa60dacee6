//! ytdata-core - Typed schemas, parameters and client for the YouTube Data API v3.
//!
//! The crate is transport-agnostic: [`Client`] builds requests, validates
//! parameters and decodes responses, while an injected [`Transport`] moves
//! the bytes. `ytdata-http` provides a reqwest-backed transport.
//!
//! ```
//! use ytdata_core::{Parts, ApiBaseUrl};
//!
//! let parts = Parts::from(["snippet", "statistics"]);
//! assert_eq!(parts.to_string(), "snippet,statistics");
//!
//! let base: ApiBaseUrl = "http://localhost:8080".parse().unwrap();
//! assert_eq!(base.as_str(), "http://localhost:8080/");
//! ```

#[macro_use]
mod macros;

pub mod client;
pub mod error;
pub mod field;
pub mod operation;
pub mod params;
pub mod schema;
pub mod transport;
pub mod types;

pub use client::{Client, ClientConfig, Media, Payload};
pub use error::{
    ApiError, ClientError, Error, ErrorKind, InvalidInputError, ParamError, TransportError,
};
pub use field::Field;
pub use operation::Operation;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{AccessToken, ApiBaseUrl, ApiKey, Credentials, DEFAULT_BASE_URL, Parts};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
