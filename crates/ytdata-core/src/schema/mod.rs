//! Resource schemas.
//!
//! Every resource and nested object of the API is a struct whose fields are
//! three-state [`Field`]s. Decoding rejects values of the wrong type and
//! literals outside a declared enumeration; unknown keys are ignored.
//! Counters the API transmits as JSON strings (int64/uint64) and timestamps
//! stay strings so that re-encoding reproduces the payload exactly.

mod activity;
mod caption;
mod channel;
mod chat;
mod comment;
mod common;
mod i18n;
mod live;
mod membership;
mod misc;
mod playlist;
mod rating;
mod search;
mod subscription;
mod video;

pub use activity::*;
pub use caption::*;
pub use channel::*;
pub use chat::*;
pub use comment::*;
pub use common::*;
pub use i18n::*;
pub use live::*;
pub use membership::*;
pub use misc::*;
pub use playlist::*;
pub use rating::*;
pub use search::*;
pub use subscription::*;
pub use video::*;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// The wrapper every `list` method returns.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// Identifies the API resource's type, e.g. `youtube#videoListResponse`.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub kind: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub etag: Field<String>,
    /// Token for the `pageToken` parameter to fetch the next page.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub next_page_token: Field<String>,
    /// Token for the `pageToken` parameter to fetch the previous page.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub prev_page_token: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub page_info: Field<PageInfo>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub token_pagination: Field<TokenPagination>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub event_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub visitor_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub items: Field<Vec<T>>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            kind: Field::Absent,
            etag: Field::Absent,
            next_page_token: Field::Absent,
            prev_page_token: Field::Absent,
            page_info: Field::Absent,
            token_pagination: Field::Absent,
            event_id: Field::Absent,
            visitor_id: Field::Absent,
            items: Field::Absent,
        }
    }
}

impl<T> ListResponse<T> {
    /// Returns the items of this page; absent and null read as empty.
    pub fn items(&self) -> &[T] {
        self.items.value().map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the continuation token, if another page exists.
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.value().map(String::as_str)
    }
}

pub type ActivityListResponse = ListResponse<Activity>;
pub type CaptionListResponse = ListResponse<Caption>;
pub type ChannelListResponse = ListResponse<Channel>;
pub type ChannelSectionListResponse = ListResponse<ChannelSection>;
pub type CommentListResponse = ListResponse<Comment>;
pub type CommentThreadListResponse = ListResponse<CommentThread>;
pub type I18nLanguageListResponse = ListResponse<I18nLanguage>;
pub type I18nRegionListResponse = ListResponse<I18nRegion>;
pub type LiveBroadcastListResponse = ListResponse<LiveBroadcast>;
pub type LiveChatModeratorListResponse = ListResponse<LiveChatModerator>;
pub type LiveStreamListResponse = ListResponse<LiveStream>;
pub type MemberListResponse = ListResponse<Member>;
pub type MembershipsLevelListResponse = ListResponse<MembershipsLevel>;
pub type PlaylistImageListResponse = ListResponse<PlaylistImage>;
pub type PlaylistItemListResponse = ListResponse<PlaylistItem>;
pub type PlaylistListResponse = ListResponse<Playlist>;
pub type SubscriptionListResponse = ListResponse<Subscription>;
pub type SuperChatEventListResponse = ListResponse<SuperChatEvent>;
pub type ThirdPartyLinkListResponse = ListResponse<ThirdPartyLink>;
pub type VideoAbuseReportReasonListResponse = ListResponse<VideoAbuseReportReason>;
pub type VideoCategoryListResponse = ListResponse<VideoCategory>;
pub type VideoListResponse = ListResponse<Video>;
