//! Playlists, playlist items and playlist images.

use std::collections::BTreeMap;

use crate::field::Field;

use super::common::{PrivacyStatus, ResourceId, ThumbnailDetails};

string_enum! {
    pub enum PlaylistImageType {
        Hero => "hero",
    }
}

schema! {
    /// A playlist.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/playlists>
    pub struct Playlist {
        kind: String,
        etag: String,
        id: String,
        snippet: PlaylistSnippet,
        status: PlaylistStatus,
        content_details: PlaylistContentDetails,
        player: PlaylistPlayer,
        localizations: BTreeMap<String, PlaylistLocalization>,
    }

    pub struct PlaylistSnippet {
        published_at: String,
        channel_id: String,
        title: String,
        description: String,
        thumbnails: ThumbnailDetails,
        channel_title: String,
        tags: Vec<String>,
        default_language: String,
        localized: PlaylistLocalization,
        thumbnail_video_id: String,
    }

    pub struct PlaylistLocalization {
        title: String,
        description: String,
    }

    pub struct PlaylistStatus {
        privacy_status: PrivacyStatus,
    }

    pub struct PlaylistContentDetails {
        item_count: u32,
    }

    pub struct PlaylistPlayer {
        embed_html: String,
    }

    /// An entry in a playlist.
    pub struct PlaylistItem {
        kind: String,
        etag: String,
        id: String,
        snippet: PlaylistItemSnippet,
        content_details: PlaylistItemContentDetails,
        status: PlaylistItemStatus,
    }

    pub struct PlaylistItemSnippet {
        published_at: String,
        channel_id: String,
        title: String,
        description: String,
        thumbnails: ThumbnailDetails,
        channel_title: String,
        video_owner_channel_title: String,
        video_owner_channel_id: String,
        playlist_id: String,
        /// Zero-based position in the playlist.
        position: u32,
        resource_id: ResourceId,
    }

    pub struct PlaylistItemContentDetails {
        video_id: String,
        start_at: String,
        end_at: String,
        note: String,
        video_published_at: String,
    }

    pub struct PlaylistItemStatus {
        privacy_status: PrivacyStatus,
    }

    /// A custom image attached to a playlist.
    pub struct PlaylistImage {
        kind: String,
        id: String,
        snippet: PlaylistImageSnippet,
    }

    pub struct PlaylistImageSnippet {
        playlist_id: String,
        r#type: PlaylistImageType,
        width: i32,
        height: i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn playlist_item_resource_id_round_trips() {
        let payload = json!({
            "kind": "youtube#playlistItem",
            "snippet": {
                "playlistId": "PLxyz",
                "position": 3,
                "resourceId": { "kind": "youtube#video", "videoId": "abc123" }
            }
        });
        let item: PlaylistItem = serde_json::from_value(payload.clone()).unwrap();
        let resource = item.snippet.value().unwrap().resource_id.value().unwrap();
        assert_eq!(resource.video_id, Field::Present("abc123".to_string()));
        assert!(resource.channel_id.is_absent());
        assert_eq!(serde_json::to_value(&item).unwrap(), payload);
    }

    #[test]
    fn playlist_body_serializes_only_set_fields() {
        let mut playlist = Playlist::default();
        let snippet = playlist.snippet.get_or_insert_default();
        snippet.title = "Road trip".into();
        playlist.status = Field::Present(PlaylistStatus {
            privacy_status: Field::Present(PrivacyStatus::Private),
        });

        assert_eq!(
            serde_json::to_value(&playlist).unwrap(),
            json!({
                "snippet": { "title": "Road trip" },
                "status": { "privacyStatus": "private" }
            })
        );
    }
}
