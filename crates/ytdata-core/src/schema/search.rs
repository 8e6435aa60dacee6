//! Search results.

use crate::field::Field;

use super::common::{PageInfo, ResourceId, ThumbnailDetails, TokenPagination};
use super::video::LiveBroadcastContent;

schema! {
    /// A search hit. `id.kind` says whether it is a video, channel or playlist.
    pub struct SearchResult {
        kind: String,
        etag: String,
        id: ResourceId,
        snippet: SearchResultSnippet,
    }

    pub struct SearchResultSnippet {
        published_at: String,
        channel_id: String,
        title: String,
        description: String,
        thumbnails: ThumbnailDetails,
        channel_title: String,
        live_broadcast_content: LiveBroadcastContent,
    }

    /// The response of `search.list`, which carries a `regionCode` besides
    /// the usual list fields.
    pub struct SearchListResponse {
        kind: String,
        etag: String,
        next_page_token: String,
        prev_page_token: String,
        region_code: String,
        page_info: PageInfo,
        token_pagination: TokenPagination,
        event_id: String,
        visitor_id: String,
        items: Vec<SearchResult>,
    }
}

impl SearchListResponse {
    pub fn items(&self) -> &[SearchResult] {
        self.items.value().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.value().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mixed_result_kinds_decode() {
        let response: SearchListResponse = serde_json::from_value(json!({
            "kind": "youtube#searchListResponse",
            "regionCode": "US",
            "nextPageToken": "CAIQAA",
            "items": [
                { "id": { "kind": "youtube#video", "videoId": "v1" } },
                { "id": { "kind": "youtube#channel", "channelId": "UC1" } }
            ]
        }))
        .unwrap();

        assert_eq!(response.items().len(), 2);
        assert_eq!(response.next_page_token(), Some("CAIQAA"));
        let second = response.items()[1].id.value().unwrap();
        assert_eq!(second.channel_id, Field::Present("UC1".to_string()));
        assert!(second.video_id.is_absent());
    }
}
