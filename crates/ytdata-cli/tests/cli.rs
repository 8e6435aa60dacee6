//! CLI integration tests against a mock API server.
//!
//! Each test starts a wiremock server, points the built `yt` binary at it
//! through `YOUTUBE_API_BASE_URL` and inspects stdout, stderr and the exit
//! status.

use std::process::Output;

use serde_json::{Value, json};
use tokio::process::Command;
use wiremock::matchers::{body_bytes, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary against `server` with an API key.
async fn run_cli(server: &MockServer, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_yt"))
        .args(args)
        .env("YOUTUBE_API_BASE_URL", server.uri())
        .env("YOUTUBE_API_KEY", "AIzaTest")
        .env_remove("YOUTUBE_ACCESS_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
async fn run_cli_success(server: &MockServer, args: &[&str]) -> String {
    let output = run_cli(server, args).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn json_lines(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("stdout line is not JSON"))
        .collect()
}

#[tokio::test]
async fn test_videos_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videos"))
        .and(query_param("id", "abc123,def456"))
        .and(query_param("part", "snippet"))
        .and(query_param("key", "AIzaTest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#videoListResponse",
            "items": [
                {"kind": "youtube#video", "id": "abc123", "snippet": {"title": "One"}},
                {"kind": "youtube#video", "id": "def456", "snippet": {"title": "Two"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &server,
        &["videos", "get", "abc123", "def456", "--part", "snippet"],
    )
    .await;

    let docs = json_lines(&stdout);
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["id"], "abc123");
    assert_eq!(docs[1]["snippet"]["title"], "Two");
}

#[tokio::test]
async fn test_search_prints_next_page_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("q", "rust lang"))
        .and(query_param("type", "video,playlist"))
        .and(query_param("order", "viewCount"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#searchListResponse",
            "nextPageToken": "CBQQAA",
            "regionCode": "GB",
            "items": [{
                "kind": "youtube#searchResult",
                "id": {"kind": "youtube#video", "videoId": "v1"}
            }]
        })))
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &["search", "rust lang", "--type", "video,playlist", "--order", "viewCount"],
    )
    .await;
    assert!(
        output.status.success(),
        "search failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let docs = json_lines(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["id"]["videoId"], "v1");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CBQQAA"));
}

#[tokio::test]
async fn test_invalid_enum_is_rejected_before_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["search", "cats", "--order", "newest"]).await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("newest"));
}

#[tokio::test]
async fn test_channels_mine_uses_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/channels"))
        .and(query_param("mine", "true"))
        .and(header("authorization", "Bearer ya29.cli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"kind": "youtube#channel", "id": "UCme"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &server,
        &["channels", "get", "--mine", "--access-token", "ya29.cli"],
    )
    .await;
    assert_eq!(json_lines(&stdout)[0]["id"], "UCme");
}

#[tokio::test]
async fn test_channels_requires_selector() {
    let server = MockServer::start().await;
    let output = run_cli(&server, &["channels", "get"]).await;
    assert!(!output.status.success());
}

#[tokio::test]
async fn test_api_error_exits_nonzero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/playlistItems"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": 404,
                "message": "The playlist identified with the request's playlistId parameter cannot be found.",
                "errors": [{"domain": "youtube.playlistItem", "reason": "playlistNotFound"}]
            }
        })))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["playlist-items", "list", "PLmissing"]).await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to list playlist items"));
    assert!(stderr.contains("playlistNotFound"));
    assert!(!stderr.contains("AIzaTest"));
}

#[tokio::test]
async fn test_videos_rate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtube/v3/videos/rate"))
        .and(query_param("id", "abc123"))
        .and(query_param("rating", "dislike"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &server,
        &["videos", "rate", "abc123", "dislike", "--access-token", "ya29.cli"],
    )
    .await;
    assert!(stdout.contains("Rated abc123 as dislike"));
}

#[tokio::test]
async fn test_thumbnails_set_uploads_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload/youtube/v3/thumbnails/set"))
        .and(query_param("videoId", "abc123"))
        .and(query_param("uploadType", "media"))
        .and(header("content-type", "image/png"))
        .and(body_bytes(b"\x89PNG fake".to_vec()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#thumbnailSetResponse",
            "items": [{"default": {"url": "https://i.ytimg.com/vi/abc123/default.jpg"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("thumb.png");
    std::fs::write(&file, b"\x89PNG fake").unwrap();

    let stdout = run_cli_success(
        &server,
        &[
            "thumbnails",
            "set",
            "abc123",
            file.to_str().unwrap(),
            "--access-token",
            "ya29.cli",
        ],
    )
    .await;

    let doc: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(doc["kind"], "youtube#thumbnailSetResponse");
}

#[tokio::test]
async fn test_pretty_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videoCategories"))
        .and(query_param("regionCode", "US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"kind": "youtube#videoCategory", "id": "10", "snippet": {"title": "Music"}}]
        })))
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server, &["categories", "--pretty"]).await;
    assert!(stdout.contains("\n  \"id\": \"10\""));
}
