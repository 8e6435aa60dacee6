//! Error types for the ytdata library.
//!
//! Every client call returns [`Error`]. Failures that happen after a request
//! was built are wrapped in a [`ClientError`], which carries the outgoing
//! request, the response (if one arrived) and a tagged [`Cause`]. Parameter
//! validation and malformed input fail before any request exists.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transport::{HttpRequest, HttpResponse};

/// The unified error type for ytdata operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A request was built and then failed in transport, status or decoding.
    #[error(transparent)]
    Client(Box<ClientError>),

    /// Operation parameters failed validation.
    #[error(transparent)]
    InvalidParams(#[from] ParamError),

    /// Input validation errors (base URL, enum literal, payload shape).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl From<ClientError> for Error {
    fn from(err: ClientError) -> Self {
        Error::Client(Box::new(err))
    }
}

impl Error {
    /// Returns the wrapped [`ClientError`], if the failure happened after a
    /// request was built.
    pub fn as_client_error(&self) -> Option<&ClientError> {
        match self {
            Error::Client(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the failure tag for client errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.as_client_error().map(ClientError::kind)
    }
}

/// Failure category of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The transport failed to deliver the request or read the response.
    Transport,
    /// The server answered with a non-2xx status.
    Status,
    /// The request body could not be encoded.
    Encode,
    /// The response body did not match the declared schema.
    Decode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Status => write!(f, "status"),
            Self::Encode => write!(f, "encode"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

/// The underlying cause of a [`ClientError`].
#[derive(Debug, Error)]
pub enum Cause {
    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-2xx response from the API.
    #[error("API error: {0}")]
    Status(ApiError),

    /// JSON encoding of the request body failed.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body did not decode into the declared schema.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A failed API call, tagged with the request and response it concerned.
#[derive(Debug, Error)]
#[error("{operation}: {cause}")]
pub struct ClientError {
    operation: &'static str,
    request: HttpRequest,
    response: Option<HttpResponse>,
    #[source]
    cause: Cause,
}

impl ClientError {
    /// Create a new client error.
    pub fn new(
        operation: &'static str,
        request: HttpRequest,
        response: Option<HttpResponse>,
        cause: Cause,
    ) -> Self {
        Self {
            operation,
            request,
            response,
            cause,
        }
    }

    /// Returns the failure tag.
    pub fn kind(&self) -> ErrorKind {
        match self.cause {
            Cause::Transport(_) => ErrorKind::Transport,
            Cause::Status(_) => ErrorKind::Status,
            Cause::Encode(_) => ErrorKind::Encode,
            Cause::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Returns the operation id, e.g. `youtube.videos.list`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Returns the request that was sent (or was about to be sent).
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Returns the response, if one was received.
    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Returns the underlying cause.
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Returns the decoded API error for status failures.
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.cause {
            Cause::Status(err) => Some(err),
            _ => None,
        }
    }

    /// Check if the API rejected the request's credentials.
    pub fn is_auth_error(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_auth_error)
    }

    /// Check if the API rejected the request for quota reasons.
    pub fn is_quota_exceeded(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_quota_exceeded)
    }

    /// Check if the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.api_error().is_some_and(|e| e.code == 404)
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The request could not be built by the transport.
    #[error("invalid request: {message}")]
    Request { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Error envelope returned by Google APIs on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

/// Error details decoded from a non-2xx response.
///
/// A body that is not a Google error envelope yields an `ApiError` with only
/// the status code set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code.
    #[serde(default)]
    pub code: u16,
    /// Human-readable message from the server.
    #[serde(default)]
    pub message: Option<String>,
    /// Canonical status name, e.g. `PERMISSION_DENIED`.
    #[serde(default)]
    pub status: Option<String>,
    /// Individual error entries.
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// A single entry of [`ApiError::errors`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub location_type: Option<String>,
}

impl ApiError {
    /// Decode the error envelope from a response, falling back to the bare
    /// status code.
    pub fn from_response(response: &HttpResponse) -> Self {
        let status = response.status;
        match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
            Ok(envelope) => {
                let mut error = envelope.error;
                error.code = status;
                error
            }
            Err(_) => Self {
                code: status,
                ..Self::default()
            },
        }
    }

    /// Returns the reason of the first error entry.
    pub fn reason(&self) -> Option<&str> {
        self.errors.iter().find_map(|e| e.reason.as_deref())
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.code == 401
            || matches!(
                self.reason(),
                Some("authError" | "unauthorized" | "keyInvalid" | "forbidden")
            )
    }

    /// Check if this is a quota or rate-limit rejection.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(
            self.reason(),
            Some("quotaExceeded" | "dailyLimitExceeded" | "rateLimitExceeded")
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.code)?;
        if let Some(reason) = self.reason() {
            write!(f, " [{}]", reason)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// A single parameter validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamIssue {
    /// Wire name of the offending parameter.
    pub field: &'static str,
    /// Why the value was rejected.
    pub reason: String,
}

impl fmt::Display for ParamIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Parameter validation failed for an operation.
///
/// Lists every offending parameter, not only the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid parameters for {operation}: {}", join_issues(.issues))]
pub struct ParamError {
    pub operation: &'static str,
    pub issues: Vec<ParamIssue>,
}

impl ParamError {
    /// Returns the wire names of all offending parameters.
    pub fn fields(&self) -> Vec<&'static str> {
        self.issues.iter().map(|i| i.field).collect()
    }
}

fn join_issues(issues: &[ParamIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// A string outside a closed enumeration.
    #[error("invalid {kind} '{value}': expected one of {}", .expected.join(", "))]
    Enum {
        kind: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    /// A media payload was supplied to an operation without an upload endpoint.
    #[error("{operation} does not accept media uploads")]
    UploadNotSupported { operation: &'static str },

    /// The operation needs a media payload and none was supplied.
    #[error("{operation} requires a media payload")]
    MediaRequired { operation: &'static str },

    /// Credential contains characters that cannot be sent in a header.
    #[error("invalid credential: {reason}")]
    Credential { reason: String },

    /// Media content type is empty or cannot be sent in a header.
    #[error("invalid media content type {value:?}: {reason}")]
    MediaType { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
