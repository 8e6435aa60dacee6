//! Core value types.
//!
//! These types enforce their invariants at construction time.

mod base_url;
mod credentials;
mod parts;

pub use base_url::{ApiBaseUrl, DEFAULT_BASE_URL};
pub use credentials::{AccessToken, ApiKey, Credentials};
pub use parts::Parts;
