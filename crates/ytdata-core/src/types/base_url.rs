//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// The public root of the YouTube Data API.
pub const DEFAULT_BASE_URL: &str = "https://youtube.googleapis.com/";

/// A validated API root URL.
///
/// Endpoint paths such as `youtube/v3/videos` are resolved against it, and
/// media uploads against `upload/` beneath it.
///
/// Network URLs must use HTTPS; plain HTTP is accepted only for localhost so
/// that tests can point the client at a local mock server.
///
/// # Example
///
/// ```
/// use ytdata_core::ApiBaseUrl;
///
/// let base = ApiBaseUrl::new("https://youtube.googleapis.com").unwrap();
/// assert_eq!(
///     base.endpoint("youtube/v3/videos").unwrap().as_str(),
///     "https://youtube.googleapis.com/youtube/v3/videos"
/// );
///
/// assert!(ApiBaseUrl::new("http://example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let mut url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: always end with a slash so relative joins keep the path
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self(url))
    }

    /// Resolves an endpoint path against this root.
    ///
    /// `{name}` segments are left untouched; see
    /// [`endpoint_with`](Self::endpoint_with) for substitution.
    pub fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.endpoint_with(path, |_| None)
    }

    /// Resolves an endpoint path, replacing `{name}` segments with the value
    /// returned by `param`. Substituted values are percent-encoded; empty,
    /// `.` and `..` values are rejected.
    pub fn endpoint_with<F>(&self, path: &str, param: F) -> Result<Url, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut url = self.0.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| InvalidInputError::BaseUrl {
                value: self.0.to_string(),
                reason: "cannot be a base".to_string(),
            })?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(name) => {
                        let value = param(name).ok_or_else(|| InvalidInputError::Other {
                            message: format!("missing path parameter '{}'", name),
                        })?;
                        // The url crate drops these instead of encoding them.
                        if matches!(value.as_str(), "" | "." | "..") {
                            return Err(InvalidInputError::Other {
                                message: format!(
                                    "path parameter '{}' must not be '{}'",
                                    name, value
                                ),
                            }
                            .into());
                        }
                        segments.push(&value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }
        Ok(url)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"))
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiBaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiBaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiBaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiBaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
