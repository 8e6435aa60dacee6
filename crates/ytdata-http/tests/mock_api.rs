//! End-to-end tests against a mock API server.
//!
//! These tests use wiremock to stand in for youtube.googleapis.com and drive
//! the client through the reqwest transport.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_regex, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ytdata_core::error::Cause;
use ytdata_core::params::{
    CaptionsDownloadParams, CommentThreadsListParams, PlaylistsInsertParams, VideosDeleteParams,
    VideosInsertParams, VideosListParams,
};
use ytdata_core::schema::{CaptionFormat, Playlist, PrivacyStatus, Video, VideoSnippet, VideoStatus};
use ytdata_core::{ApiBaseUrl, ClientConfig, ErrorKind, Field, Media, TransportError};
use ytdata_http::{YouTubeClient, connect};

fn client_for(server: &MockServer, config: ClientConfig) -> YouTubeClient {
    let base = ApiBaseUrl::new(server.uri()).unwrap();
    connect(config.with_base_url(base)).unwrap()
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn list_videos_with_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videos"))
        .and(query_param("part", "snippet,statistics"))
        .and(query_param("id", "abc123,def456"))
        .and(query_param("key", "AIzaTest"))
        .and(header("accept", "application/json"))
        .and(header_regex("user-agent", "^ytdata/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#videoListResponse",
            "etag": "e1",
            "pageInfo": {"totalResults": 2, "resultsPerPage": 2},
            "items": [
                {
                    "kind": "youtube#video",
                    "id": "abc123",
                    "snippet": {"title": "First", "tags": null},
                    "statistics": {"viewCount": "1024"}
                },
                {"kind": "youtube#video", "id": "def456"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new().with_api_key("AIzaTest"));
    let params = VideosListParams::by_id(["snippet", "statistics"], ["abc123", "def456"]);
    let response = client.videos().list(&params).await.unwrap();

    let items = response.items();
    assert_eq!(items.len(), 2);

    let first = &items[0];
    let snippet = first.snippet.value().unwrap();
    assert_eq!(snippet.title.value().map(String::as_str), Some("First"));
    assert!(snippet.tags.is_null());
    assert_eq!(
        first.statistics.value().unwrap().view_count,
        Field::Present("1024".to_string())
    );

    assert!(items[1].snippet.is_absent());
    assert_eq!(response.next_page_token(), None);
}

#[tokio::test]
async fn next_page_token_is_exposed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/commentThreads"))
        .and(query_param("videoId", "abc123"))
        .and(query_param("maxResults", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#commentThreadListResponse",
            "nextPageToken": "CAUQAA",
            "items": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new().with_api_key("k"));
    let mut params = CommentThreadsListParams::new("snippet");
    params.video_id = Some("abc123".into());
    params.max_results = Some(20);

    let response = client.comment_threads().list(&params).await.unwrap();
    assert!(response.items.is_present());
    assert!(response.items().is_empty());
    assert_eq!(response.next_page_token(), Some("CAUQAA"));
}

#[tokio::test]
async fn caption_download_returns_raw_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/captions/AUieDa%2F1"))
        .and(query_param("tfmt", "srt"))
        .and(header("authorization", "Bearer ya29.token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(&b"1\n00:00:00,000 --> 00:00:01,000\nHi\n"[..], "text/plain"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new().with_access_token("ya29.token"));
    let mut params = CaptionsDownloadParams::new("AUieDa/1");
    params.tfmt = Some(CaptionFormat::Srt);

    let body = client.captions().download(&params).await.unwrap();
    assert!(body.starts_with(b"1\n00:00:00,000"));
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn insert_playlist_sends_bearer_and_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtube/v3/playlists"))
        .and(query_param("part", "snippet,status"))
        .and(header("authorization", "Bearer ya29.token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "snippet": {"title": "Road trip"},
            "status": {"privacyStatus": "unlisted"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#playlist",
            "id": "PLxyz",
            "snippet": {"title": "Road trip"},
            "status": {"privacyStatus": "unlisted"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new().with_access_token("ya29.token"));

    let mut playlist = Playlist::default();
    playlist.snippet.get_or_insert_default().title = "Road trip".into();
    playlist.status.get_or_insert_default().privacy_status = PrivacyStatus::Unlisted.into();

    let created = client
        .playlists()
        .insert(&PlaylistsInsertParams::new("snippet,status"), &playlist)
        .await
        .unwrap();
    assert_eq!(created.id.value().map(String::as_str), Some("PLxyz"));
}

#[tokio::test]
async fn delete_accepts_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/youtube/v3/videos"))
        .and(query_param("id", "abc123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new().with_access_token("ya29.token"));
    client
        .videos()
        .delete(&VideosDeleteParams::new("abc123"))
        .await
        .unwrap();
}

#[tokio::test]
async fn video_upload_is_multipart_related() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload/youtube/v3/videos"))
        .and(query_param("uploadType", "multipart"))
        .and(query_param("part", "snippet,status"))
        .and(header_regex("content-type", "^multipart/related; boundary=ytdata_"))
        .and(body_string_contains(r#"{"snippet":{"title":"Holiday"},"status":{"privacyStatus":"private"}}"#))
        .and(body_string_contains("Content-Type: video/mp4"))
        .and(body_string_contains("FAKEVIDEO"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#video",
            "id": "new123",
            "status": {"uploadStatus": "uploaded", "privacyStatus": "private"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new().with_access_token("ya29.token"));

    let video = Video {
        snippet: VideoSnippet {
            title: "Holiday".into(),
            ..Default::default()
        }
        .into(),
        status: VideoStatus {
            privacy_status: PrivacyStatus::Private.into(),
            ..Default::default()
        }
        .into(),
        ..Default::default()
    };

    let uploaded = client
        .videos()
        .insert(
            &VideosInsertParams::new("snippet,status"),
            &video,
            Media::new("video/mp4", "FAKEVIDEO"),
        )
        .await
        .unwrap();
    assert_eq!(uploaded.id.value().map(String::as_str), Some("new123"));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn error_envelope_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "status": "PERMISSION_DENIED",
                "errors": [{
                    "message": "The request cannot be completed because you have exceeded your quota.",
                    "domain": "youtube.quota",
                    "reason": "quotaExceeded"
                }]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new().with_api_key("AIzaSecret"));
    let err = client
        .videos()
        .list(&VideosListParams::most_popular("snippet"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::Status));
    let client_err = err.as_client_error().unwrap();
    assert!(client_err.is_quota_exceeded());
    assert_eq!(client_err.operation(), "youtube.videos.list");
    assert_eq!(client_err.response().map(|r| r.status), Some(403));

    let api = client_err.api_error().unwrap();
    assert_eq!(api.code, 403);
    assert_eq!(api.status.as_deref(), Some("PERMISSION_DENIED"));

    // The API key never leaks into the rendered error.
    assert!(!format!("{err} {err:?}").contains("AIzaSecret"));
}

#[tokio::test]
async fn non_json_error_body_keeps_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videos"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new().with_api_key("k"));
    let err = client
        .videos()
        .list(&VideosListParams::most_popular("id"))
        .await
        .unwrap_err();

    let api = err.as_client_error().and_then(|e| e.api_error()).unwrap();
    assert_eq!(api.code, 502);
    assert!(api.errors.is_empty());
    assert!(api.message.is_none());
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "abc123", "status": {"privacyStatus": "mystery"}}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new().with_api_key("k"));
    let err = client
        .videos()
        .list(&VideosListParams::by_id("status", ["abc123"]))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::Decode));
    assert_eq!(err.as_client_error().and_then(|e| e.response()).map(|r| r.status), Some(200));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"items": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = client_for(
        &server,
        ClientConfig::new()
            .with_api_key("k")
            .with_timeout(Duration::from_millis(100)),
    );
    let err = client
        .videos()
        .list(&VideosListParams::most_popular("id"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::Transport));
    let cause = err.as_client_error().map(|e| e.cause());
    assert!(
        matches!(cause, Some(Cause::Transport(TransportError::Timeout { duration_ms: 100 }))),
        "{cause:?}"
    );
    assert!(err.as_client_error().unwrap().response().is_none());
}

#[tokio::test]
async fn invalid_params_never_reach_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new().with_api_key("k"));
    // No filter selected: exactly one of chart, id, myRating is required.
    let err = client
        .videos()
        .list(&VideosListParams::new("snippet"))
        .await
        .unwrap_err();

    assert!(err.kind().is_none());
    assert!(matches!(err, ytdata_core::Error::InvalidParams(_)));
}
