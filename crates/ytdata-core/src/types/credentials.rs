//! Request credentials.
//!
//! The client attaches a caller-supplied credential to every request. How
//! the credential was obtained (console key, OAuth consent) is up to the
//! caller.

use std::fmt;

/// An API key, sent as the `key` query parameter.
///
/// # Security
///
/// - Never displayed in Debug output
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key value for use in request query strings.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

/// An OAuth 2.0 access token, sent as a bearer `Authorization` header.
///
/// # Security
///
/// - Never displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// The credential attached to outgoing requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Credentials {
    /// Send requests unauthenticated.
    #[default]
    None,
    /// Public-data access with an API key.
    ApiKey(ApiKey),
    /// User-authorized access with an OAuth access token.
    Bearer(AccessToken),
}

impl Credentials {
    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials::ApiKey(ApiKey::new(key))
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer(AccessToken::new(token))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Credentials::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_hides_value_in_debug() {
        let key = ApiKey::new("AIzaSyD-secret-value");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("AIza"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn credentials_hide_token_in_debug() {
        let creds = Credentials::bearer("ya29.a0AfH6SMB");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("ya29"));
        assert!(debug.contains("Bearer"));
    }
}
