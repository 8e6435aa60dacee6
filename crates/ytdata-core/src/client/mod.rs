//! The API client.
//!
//! [`Client::execute`] runs any [`Operation`] through an injected
//! [`Transport`]. The per-resource facades in this module
//! (`client.videos().list(..)`) are thin wrappers over it.

mod resources;
mod upload;

pub use resources::*;
pub use upload::Media;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, trace};

use crate::error::{ApiError, Cause, ClientError, Error, InvalidInputError};
use crate::operation::Operation;
use crate::params::{Params, Query};
use crate::transport::{HttpRequest, RequestBody, Transport};
use crate::types::{AccessToken, ApiBaseUrl, Credentials};
use crate::Result;

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("ytdata/", env!("CARGO_PKG_VERSION"));

/// Client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: ApiBaseUrl,
    pub credentials: Credentials,
    pub user_agent: String,
    /// Per-request timeout, applied by the transport.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: ApiBaseUrl::default(),
            credentials: Credentials::None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: ApiBaseUrl) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Authenticate with an API key (public data only).
    pub fn with_api_key(self, key: impl Into<String>) -> Self {
        self.with_credentials(Credentials::api_key(key))
    }

    /// Authenticate with an OAuth 2.0 access token.
    pub fn with_access_token(self, token: impl Into<String>) -> Self {
        self.with_credentials(Credentials::bearer(token))
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The request body of an operation call.
pub enum Payload<'a, B> {
    /// No body.
    None,
    /// A JSON resource.
    Json(&'a B),
    /// Raw media sent to the upload endpoint.
    Media(Media),
    /// JSON metadata and media sent together as `multipart/related`.
    Multipart(&'a B, Media),
}

impl<B> Payload<'_, B> {
    fn media(&self) -> Option<&Media> {
        match self {
            Payload::Media(media) | Payload::Multipart(_, media) => Some(media),
            Payload::None | Payload::Json(_) => None,
        }
    }

    fn upload_type(&self) -> Option<&'static str> {
        match self {
            Payload::Media(_) => Some("media"),
            Payload::Multipart(..) => Some("multipart"),
            Payload::None | Payload::Json(_) => None,
        }
    }
}

impl<B> fmt::Debug for Payload<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::None => f.write_str("None"),
            Payload::Json(_) => f.write_str("Json"),
            Payload::Media(media) => f.debug_tuple("Media").field(media).finish(),
            Payload::Multipart(_, media) => f.debug_tuple("Multipart").field(media).finish(),
        }
    }
}

/// A YouTube Data API client.
///
/// Cheap to clone; clones share the transport.
///
/// # Example
///
/// ```no_run
/// # async fn example<T: ytdata_core::Transport>(transport: T) -> ytdata_core::Result<()> {
/// use ytdata_core::{Client, ClientConfig};
/// use ytdata_core::params::VideosListParams;
///
/// let client = Client::new(transport, ClientConfig::new().with_api_key("AIza..."));
/// let params = VideosListParams::by_id("snippet,statistics", ["dQw4w9WgXcQ"]);
/// let videos = client.videos().list(&params).await?;
/// for video in videos.items() {
///     println!("{:?}", video.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Client<T> {
    transport: Arc<T>,
    config: Arc<ClientConfig>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self::with_shared_transport(Arc::new(transport), config)
    }

    /// Creates a client over a transport shared with other clients.
    pub fn with_shared_transport(transport: Arc<T>, config: ClientConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one request/response cycle for operation `O`.
    ///
    /// Parameters are validated and the request is built before anything is
    /// sent. The transport is called exactly once.
    #[instrument(skip_all, fields(operation = O::ID))]
    pub async fn execute<O: Operation>(
        &self,
        params: &O::Params,
        payload: Payload<'_, O::Body>,
    ) -> Result<O::Response> {
        let request = self.build_request::<O>(params, &payload)?;

        debug!(method = %request.method, url = %request.redacted_url(), "sending request");

        let response = match self.transport.send(&request).await {
            Ok(response) => response,
            Err(err) => {
                debug!(error = %err, "transport failed");
                return Err(ClientError::new(O::ID, request, None, Cause::Transport(err)).into());
            }
        };

        trace!(status = response.status, bytes = response.body.len(), "response received");

        if !response.is_success() {
            let api_error = ApiError::from_response(&response);
            debug!(status = response.status, reason = ?api_error.reason(), "API returned an error");
            return Err(
                ClientError::new(O::ID, request, Some(response), Cause::Status(api_error)).into(),
            );
        }

        match O::decode(response.body.clone()) {
            Ok(decoded) => Ok(decoded),
            Err(err) => {
                debug!(error = %err, "response did not match schema");
                Err(ClientError::new(O::ID, request, Some(response), Cause::Decode(err)).into())
            }
        }
    }

    /// Builds the request for `O` without sending it.
    pub fn build_request<O: Operation>(
        &self,
        params: &O::Params,
        payload: &Payload<'_, O::Body>,
    ) -> Result<HttpRequest> {
        params.check(O::ID)?;

        let path = match (payload.media(), O::UPLOAD_PATH) {
            (Some(media), Some(upload_path)) => {
                media.check_content_type()?;
                upload_path
            }
            (Some(_), None) => {
                return Err(InvalidInputError::UploadNotSupported { operation: O::ID }.into());
            }
            (None, _) if O::MEDIA_REQUIRED => {
                return Err(InvalidInputError::MediaRequired { operation: O::ID }.into());
            }
            (None, _) => O::PATH,
        };

        let mut url = self
            .config
            .base_url
            .endpoint_with(path, |name| params.path_param(name))?;

        let mut query = Query::new();
        params.append_query(&mut query);
        trace!(?query, "query parameters");

        let mut pairs: Vec<(&str, &str)> = query
            .pairs()
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        if let Some(upload_type) = payload.upload_type() {
            pairs.push(("uploadType", upload_type));
        }
        if let Credentials::ApiKey(key) = &self.config.credentials {
            pairs.push(("key", key.as_str()));
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        let mut request = HttpRequest::new(O::METHOD, url);
        request
            .headers
            .push(("User-Agent".to_string(), self.config.user_agent.clone()));
        request
            .headers
            .push(("Accept".to_string(), "application/json".to_string()));
        if let Credentials::Bearer(token) = &self.config.credentials {
            request
                .headers
                .push(("Authorization".to_string(), bearer_header(token)?));
        }

        request.body = match encode_body(payload) {
            Ok(body) => body,
            Err(err) => {
                return Err(ClientError::new(O::ID, request, None, Cause::Encode(err)).into());
            }
        };

        Ok(request)
    }
}

fn bearer_header(token: &AccessToken) -> Result<String> {
    let token = token.as_str();
    if token.is_empty() || token.chars().any(|c| c.is_control() || c == ' ') {
        return Err(InvalidInputError::Credential {
            reason: "access token must be non-empty and contain no whitespace or control characters"
                .to_string(),
        }
        .into());
    }
    Ok(format!("Bearer {}", token))
}

fn encode_body<B: serde::Serialize>(
    payload: &Payload<'_, B>,
) -> std::result::Result<Option<RequestBody>, serde_json::Error> {
    Ok(match payload {
        Payload::None => None,
        Payload::Json(body) => Some(RequestBody {
            content_type: "application/json".to_string(),
            data: serde_json::to_vec(body)?.into(),
        }),
        Payload::Media(media) => Some(RequestBody {
            content_type: media.content_type.clone(),
            data: media.data.clone(),
        }),
        Payload::Multipart(body, media) => {
            let metadata = serde_json::to_vec(body)?;
            Some(upload::multipart_related(&metadata, media))
        }
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::error::TransportError;
    use crate::transport::{HttpRequest, HttpResponse, Transport};

    /// Replays canned responses and records every request.
    #[derive(Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
        pub requests: Mutex<Vec<HttpRequest>>,
    }

    impl MockTransport {
        pub fn respond(self, status: u16, body: &str) -> Self {
            self.responses.lock().unwrap().push_back(Ok(HttpResponse {
                status,
                headers: vec![("Content-Type".to_string(), "application/json".to_string())],
                body: Bytes::from(body.to_string()),
            }));
            self
        }

        pub fn fail(self, err: TransportError) -> Self {
            self.responses.lock().unwrap().push_back(Err(err));
            self
        }

        pub fn last_request(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("no canned response left")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MockTransport;
    use super::*;
    use crate::error::{ErrorKind, TransportError};
    use crate::field::Field;
    use crate::operation::{CaptionsDownload, ThumbnailsSet, VideosInsert, VideosList};
    use crate::params::{
        CaptionsDownloadParams, ThumbnailsSetParams, VideosInsertParams, VideosListParams,
    };
    use crate::schema::{PrivacyStatus, Video, VideoStatus};
    use crate::transport::HttpMethod;

    fn client(transport: MockTransport, config: ClientConfig) -> Client<MockTransport> {
        Client::new(transport, config)
    }

    #[tokio::test]
    async fn api_key_and_params_end_up_in_query() {
        let client = client(
            MockTransport::default().respond(200, r#"{"kind":"youtube#videoListResponse","items":[]}"#),
            ClientConfig::new().with_api_key("AIzaTest"),
        );

        let params = VideosListParams::by_id("snippet,statistics", ["a", "b"]);
        let response = client.videos().list(&params).await.unwrap();
        assert!(response.items().is_empty());

        let request = client.transport().last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.path(), "/youtube/v3/videos");
        assert_eq!(request.query_param("part").as_deref(), Some("snippet,statistics"));
        assert_eq!(request.query_param("id").as_deref(), Some("a,b"));
        assert_eq!(request.query_param("key").as_deref(), Some("AIzaTest"));
        assert!(request.header("Authorization").is_none());
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn bearer_token_goes_in_header() {
        let client = client(
            MockTransport::default().respond(200, "{}"),
            ClientConfig::new().with_access_token("ya29.token"),
        );

        client
            .videos()
            .list(&VideosListParams::most_popular("id"))
            .await
            .unwrap();

        let request = client.transport().last_request();
        assert_eq!(request.header("authorization"), Some("Bearer ya29.token"));
        assert!(request.query_param("key").is_none());
    }

    #[tokio::test]
    async fn invalid_params_never_reach_transport() {
        let client = client(MockTransport::default(), ClientConfig::new());

        let err = client
            .videos()
            .list(&VideosListParams::new(""))
            .await
            .unwrap_err();

        match err {
            Error::InvalidParams(err) => {
                assert_eq!(err.operation, "youtube.videos.list");
                assert_eq!(err.fields(), vec!["part", "chart", "id", "myRating"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn non_success_status_carries_envelope() {
        let client = client(
            MockTransport::default().respond(
                404,
                r#"{"error":{"code":404,"message":"Video not found.","errors":[{"domain":"youtube.video","reason":"videoNotFound","location":"id","locationType":"parameter"}]}}"#,
            ),
            ClientConfig::new(),
        );

        let err = client
            .videos()
            .list(&VideosListParams::by_id("id", ["nope"]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::Status));
        let client_err = err.as_client_error().unwrap();
        assert!(client_err.is_not_found());
        assert_eq!(client_err.api_error().unwrap().reason(), Some("videoNotFound"));
        assert_eq!(client_err.response().unwrap().status, 404);
        assert_eq!(client_err.request().query_param("id").as_deref(), Some("nope"));
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let client = client(
            MockTransport::default().respond(200, r#"{"items":[{"status":{"privacyStatus":"mystery"}}]}"#),
            ClientConfig::new(),
        );

        let err = client
            .execute::<VideosList>(&VideosListParams::most_popular("status"), Payload::None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Decode));
        assert!(err.as_client_error().unwrap().response().is_some());
    }

    #[tokio::test]
    async fn transport_failure_keeps_request() {
        let client = client(
            MockTransport::default().fail(TransportError::Timeout { duration_ms: 1500 }),
            ClientConfig::new(),
        );

        let err = client
            .videos()
            .list(&VideosListParams::most_popular("id"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Transport));
        let client_err = err.as_client_error().unwrap();
        assert!(client_err.response().is_none());
        assert_eq!(client_err.request().url.path(), "/youtube/v3/videos");
    }

    #[tokio::test]
    async fn void_operation_ignores_body() {
        let client = client(MockTransport::default().respond(204, ""), ClientConfig::new());
        client
            .videos()
            .delete(&crate::params::VideosDeleteParams::new("abc123"))
            .await
            .unwrap();
        assert_eq!(client.transport().last_request().method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn upload_uses_multipart_against_upload_path() {
        let client = client(
            MockTransport::default().respond(200, r#"{"kind":"youtube#video","id":"new1"}"#),
            ClientConfig::new().with_access_token("ya29.token"),
        );

        let mut video = Video::default();
        video.snippet.get_or_insert_default().title = "Holiday".into();
        video.status = Field::Present(VideoStatus {
            privacy_status: Field::Present(PrivacyStatus::Private),
            ..Default::default()
        });

        let uploaded = client
            .videos()
            .insert(
                &VideosInsertParams::new("snippet,status"),
                &video,
                Media::new("video/mp4", &b"\x00\x00\x00\x18ftypmp42"[..]),
            )
            .await
            .unwrap();
        assert_eq!(uploaded.id, Field::Present("new1".to_string()));

        let request = client.transport().last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.path(), "/upload/youtube/v3/videos");
        assert_eq!(request.query_param("uploadType").as_deref(), Some("multipart"));
        assert_eq!(request.query_param("part").as_deref(), Some("snippet,status"));

        let body = request.body.unwrap();
        assert!(body.content_type.starts_with("multipart/related; boundary="));
        let text = String::from_utf8_lossy(&body.data);
        assert!(text.contains(r#"{"snippet":{"title":"Holiday"},"status":{"privacyStatus":"private"}}"#));
        assert!(text.contains("Content-Type: video/mp4"));
    }

    #[tokio::test]
    async fn media_required_fails_before_sending() {
        let client = client(MockTransport::default(), ClientConfig::new());
        let err = client
            .execute::<VideosInsert>(&VideosInsertParams::new("snippet"), Payload::Json(&Video::default()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::MediaRequired { .. })
        ));
        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn media_rejected_without_upload_path() {
        let client = client(MockTransport::default(), ClientConfig::new());
        let err = client
            .execute::<VideosList>(
                &VideosListParams::most_popular("id"),
                Payload::Media(Media::new("video/mp4", "x")),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::UploadNotSupported { operation: "youtube.videos.list" })
        ));
    }

    #[tokio::test]
    async fn download_percent_encodes_path_id() {
        let client = client(MockTransport::default().respond(200, "1\n00:00:00,000 --> 00:00:01,000\nhi\n"), ClientConfig::new());

        let bytes = client
            .execute::<CaptionsDownload>(&CaptionsDownloadParams::new("a/b c"), Payload::None)
            .await
            .unwrap();
        assert!(bytes.starts_with(b"1\n"));

        let request = client.transport().last_request();
        assert_eq!(request.url.path(), "/youtube/v3/captions/a%2Fb%20c");
        assert!(request.query_param("id").is_none());
    }

    #[tokio::test]
    async fn header_injection_in_media_type_fails_before_sending() {
        let client = client(MockTransport::default(), ClientConfig::new());
        let err = client
            .execute::<ThumbnailsSet>(
                &ThumbnailsSetParams::new("abc123"),
                Payload::Media(Media::new("image/png\r\nX-Injected: 1", "png")),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::MediaType { .. })
        ));

        let err = client
            .execute::<VideosInsert>(
                &VideosInsertParams::new("snippet"),
                Payload::Multipart(&Video::default(), Media::new("video/mp4\nX: y", "x")),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::MediaType { .. })
        ));
        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn dot_path_id_fails_before_sending() {
        let client = client(MockTransport::default(), ClientConfig::new());
        for id in [".", ".."] {
            let err = client
                .execute::<CaptionsDownload>(&CaptionsDownloadParams::new(id), Payload::None)
                .await
                .unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
        assert_eq!(client.transport().request_count(), 0);
    }

    #[test]
    fn rejects_token_with_newline() {
        let client = client(
            MockTransport::default(),
            ClientConfig::new().with_access_token("ya29\r\nX-Evil: 1"),
        );
        let err = client
            .build_request::<VideosList>(&VideosListParams::most_popular("id"), &Payload::None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InvalidInputError::Credential { .. })));
    }

    #[test]
    fn no_query_string_without_parameters() {
        let client = client(MockTransport::default(), ClientConfig::new());
        let request = client
            .build_request::<crate::operation::VideosReportAbuse>(
                &crate::params::VideosReportAbuseParams::new(),
                &Payload::None,
            )
            .unwrap();
        assert_eq!(request.url.as_str(), "https://youtube.googleapis.com/youtube/v3/videos/reportAbuse");
    }
}
