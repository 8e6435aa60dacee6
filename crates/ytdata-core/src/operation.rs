//! Operation descriptors.
//!
//! Each API method is a zero-sized type implementing [`Operation`], which
//! ties together its id, HTTP method, endpoint path, parameter record,
//! request body and response decoder. [`Client::execute`] runs any of them.
//!
//! [`Client::execute`]: crate::client::Client::execute

use bytes::Bytes;
use serde::Serialize;

use crate::params::*;
use crate::schema::*;
use crate::transport::HttpMethod;

/// A single API method.
pub trait Operation {
    /// Dotted id such as `youtube.videos.list`.
    const ID: &'static str;
    const METHOD: HttpMethod;
    /// Endpoint path relative to the base URL.
    const PATH: &'static str;
    /// Path used when a media payload is supplied.
    const UPLOAD_PATH: Option<&'static str>;
    /// Whether the operation fails without a media payload.
    const MEDIA_REQUIRED: bool;

    type Params: Params;
    type Body: Serialize + Send + Sync;
    type Response: Send;

    /// Decodes a successful response body.
    fn decode(body: Bytes) -> Result<Self::Response, serde_json::Error>;
}

/// Response decoders.
pub mod decode {
    use bytes::Bytes;
    use serde::de::DeserializeOwned;

    /// Decodes a JSON resource.
    pub fn json<T: DeserializeOwned>(body: Bytes) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&body)
    }

    /// Ignores the body of a void operation.
    pub fn empty(_body: Bytes) -> Result<(), serde_json::Error> {
        Ok(())
    }

    /// Returns the raw bytes of a media download.
    pub fn media(body: Bytes) -> Result<Bytes, serde_json::Error> {
        Ok(body)
    }
}

// abuseReports

operations! {
    AbuseReportsInsert {
        id: "youtube.abuseReports.insert",
        method: Post,
        path: "youtube/v3/abuseReports",
        params: AbuseReportsInsertParams,
        body: AbuseReport,
        response: AbuseReport,
        decode: json,
    }
}

// activities

operations! {
    ActivitiesList {
        id: "youtube.activities.list",
        method: Get,
        path: "youtube/v3/activities",
        params: ActivitiesListParams,
        body: (),
        response: ActivityListResponse,
        decode: json,
    }
}

// captions

operations! {
    CaptionsList {
        id: "youtube.captions.list",
        method: Get,
        path: "youtube/v3/captions",
        params: CaptionsListParams,
        body: (),
        response: CaptionListResponse,
        decode: json,
    }

    /// Uploads a caption track.
    CaptionsInsert {
        id: "youtube.captions.insert",
        method: Post,
        path: "youtube/v3/captions",
        upload: required "upload/youtube/v3/captions",
        params: CaptionsInsertParams,
        body: Caption,
        response: Caption,
        decode: json,
    }

    /// Updates a caption track's draft status and, optionally, its file.
    CaptionsUpdate {
        id: "youtube.captions.update",
        method: Put,
        path: "youtube/v3/captions",
        upload: optional "upload/youtube/v3/captions",
        params: CaptionsUpdateParams,
        body: Caption,
        response: Caption,
        decode: json,
    }

    /// Downloads a caption track as raw bytes.
    CaptionsDownload {
        id: "youtube.captions.download",
        method: Get,
        path: "youtube/v3/captions/{id}",
        params: CaptionsDownloadParams,
        body: (),
        response: Bytes,
        decode: media,
    }

    CaptionsDelete {
        id: "youtube.captions.delete",
        method: Delete,
        path: "youtube/v3/captions",
        params: CaptionsDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }
}

// channelBanners, channels, channelSections

operations! {
    /// Uploads a banner image; set the returned URL as the channel's
    /// `brandingSettings.image.bannerExternalUrl`.
    ChannelBannersInsert {
        id: "youtube.channelBanners.insert",
        method: Post,
        path: "youtube/v3/channelBanners/insert",
        upload: required "upload/youtube/v3/channelBanners/insert",
        params: ChannelBannersInsertParams,
        body: ChannelBannerResource,
        response: ChannelBannerResource,
        decode: json,
    }

    ChannelsList {
        id: "youtube.channels.list",
        method: Get,
        path: "youtube/v3/channels",
        params: ChannelsListParams,
        body: (),
        response: ChannelListResponse,
        decode: json,
    }

    ChannelsUpdate {
        id: "youtube.channels.update",
        method: Put,
        path: "youtube/v3/channels",
        params: ChannelsUpdateParams,
        body: Channel,
        response: Channel,
        decode: json,
    }

    ChannelSectionsList {
        id: "youtube.channelSections.list",
        method: Get,
        path: "youtube/v3/channelSections",
        params: ChannelSectionsListParams,
        body: (),
        response: ChannelSectionListResponse,
        decode: json,
    }

    ChannelSectionsInsert {
        id: "youtube.channelSections.insert",
        method: Post,
        path: "youtube/v3/channelSections",
        params: ChannelSectionsInsertParams,
        body: ChannelSection,
        response: ChannelSection,
        decode: json,
    }

    ChannelSectionsUpdate {
        id: "youtube.channelSections.update",
        method: Put,
        path: "youtube/v3/channelSections",
        params: ChannelSectionsUpdateParams,
        body: ChannelSection,
        response: ChannelSection,
        decode: json,
    }

    ChannelSectionsDelete {
        id: "youtube.channelSections.delete",
        method: Delete,
        path: "youtube/v3/channelSections",
        params: ChannelSectionsDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }
}

// comments, commentThreads

operations! {
    CommentsList {
        id: "youtube.comments.list",
        method: Get,
        path: "youtube/v3/comments",
        params: CommentsListParams,
        body: (),
        response: CommentListResponse,
        decode: json,
    }

    /// Replies to an existing comment.
    CommentsInsert {
        id: "youtube.comments.insert",
        method: Post,
        path: "youtube/v3/comments",
        params: CommentsInsertParams,
        body: Comment,
        response: Comment,
        decode: json,
    }

    CommentsUpdate {
        id: "youtube.comments.update",
        method: Put,
        path: "youtube/v3/comments",
        params: CommentsUpdateParams,
        body: Comment,
        response: Comment,
        decode: json,
    }

    CommentsDelete {
        id: "youtube.comments.delete",
        method: Delete,
        path: "youtube/v3/comments",
        params: CommentsDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }

    CommentsMarkAsSpam {
        id: "youtube.comments.markAsSpam",
        method: Post,
        path: "youtube/v3/comments/markAsSpam",
        params: CommentsMarkAsSpamParams,
        body: (),
        response: (),
        decode: empty,
    }

    CommentsSetModerationStatus {
        id: "youtube.comments.setModerationStatus",
        method: Post,
        path: "youtube/v3/comments/setModerationStatus",
        params: CommentsSetModerationStatusParams,
        body: (),
        response: (),
        decode: empty,
    }

    CommentThreadsList {
        id: "youtube.commentThreads.list",
        method: Get,
        path: "youtube/v3/commentThreads",
        params: CommentThreadsListParams,
        body: (),
        response: CommentThreadListResponse,
        decode: json,
    }

    /// Creates a new top-level comment.
    CommentThreadsInsert {
        id: "youtube.commentThreads.insert",
        method: Post,
        path: "youtube/v3/commentThreads",
        params: CommentThreadsInsertParams,
        body: CommentThread,
        response: CommentThread,
        decode: json,
    }
}

// i18nLanguages, i18nRegions

operations! {
    I18nLanguagesList {
        id: "youtube.i18nLanguages.list",
        method: Get,
        path: "youtube/v3/i18nLanguages",
        params: I18nLanguagesListParams,
        body: (),
        response: I18nLanguageListResponse,
        decode: json,
    }

    I18nRegionsList {
        id: "youtube.i18nRegions.list",
        method: Get,
        path: "youtube/v3/i18nRegions",
        params: I18nRegionsListParams,
        body: (),
        response: I18nRegionListResponse,
        decode: json,
    }
}

// liveBroadcasts

operations! {
    LiveBroadcastsList {
        id: "youtube.liveBroadcasts.list",
        method: Get,
        path: "youtube/v3/liveBroadcasts",
        params: LiveBroadcastsListParams,
        body: (),
        response: LiveBroadcastListResponse,
        decode: json,
    }

    LiveBroadcastsInsert {
        id: "youtube.liveBroadcasts.insert",
        method: Post,
        path: "youtube/v3/liveBroadcasts",
        params: LiveBroadcastsInsertParams,
        body: LiveBroadcast,
        response: LiveBroadcast,
        decode: json,
    }

    LiveBroadcastsUpdate {
        id: "youtube.liveBroadcasts.update",
        method: Put,
        path: "youtube/v3/liveBroadcasts",
        params: LiveBroadcastsUpdateParams,
        body: LiveBroadcast,
        response: LiveBroadcast,
        decode: json,
    }

    LiveBroadcastsDelete {
        id: "youtube.liveBroadcasts.delete",
        method: Delete,
        path: "youtube/v3/liveBroadcasts",
        params: LiveBroadcastsDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }

    /// Binds a broadcast to a stream, or unbinds it.
    LiveBroadcastsBind {
        id: "youtube.liveBroadcasts.bind",
        method: Post,
        path: "youtube/v3/liveBroadcasts/bind",
        params: LiveBroadcastsBindParams,
        body: (),
        response: LiveBroadcast,
        decode: json,
    }

    LiveBroadcastsTransition {
        id: "youtube.liveBroadcasts.transition",
        method: Post,
        path: "youtube/v3/liveBroadcasts/transition",
        params: LiveBroadcastsTransitionParams,
        body: (),
        response: LiveBroadcast,
        decode: json,
    }

    LiveBroadcastsInsertCuepoint {
        id: "youtube.liveBroadcasts.insertCuepoint",
        method: Post,
        path: "youtube/v3/liveBroadcasts/cuepoint",
        params: LiveBroadcastsInsertCuepointParams,
        body: Cuepoint,
        response: Cuepoint,
        decode: json,
    }
}

// liveChatBans, liveChatMessages, liveChatModerators

operations! {
    LiveChatBansInsert {
        id: "youtube.liveChatBans.insert",
        method: Post,
        path: "youtube/v3/liveChat/bans",
        params: LiveChatBansInsertParams,
        body: LiveChatBan,
        response: LiveChatBan,
        decode: json,
    }

    LiveChatBansDelete {
        id: "youtube.liveChatBans.delete",
        method: Delete,
        path: "youtube/v3/liveChat/bans",
        params: LiveChatBansDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }

    LiveChatMessagesList {
        id: "youtube.liveChatMessages.list",
        method: Get,
        path: "youtube/v3/liveChat/messages",
        params: LiveChatMessagesListParams,
        body: (),
        response: LiveChatMessageListResponse,
        decode: json,
    }

    LiveChatMessagesInsert {
        id: "youtube.liveChatMessages.insert",
        method: Post,
        path: "youtube/v3/liveChat/messages",
        params: LiveChatMessagesInsertParams,
        body: LiveChatMessage,
        response: LiveChatMessage,
        decode: json,
    }

    LiveChatMessagesDelete {
        id: "youtube.liveChatMessages.delete",
        method: Delete,
        path: "youtube/v3/liveChat/messages",
        params: LiveChatMessagesDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }

    LiveChatMessagesTransition {
        id: "youtube.liveChatMessages.transition",
        method: Post,
        path: "youtube/v3/liveChat/messages/transition",
        params: LiveChatMessagesTransitionParams,
        body: (),
        response: LiveChatMessage,
        decode: json,
    }

    LiveChatModeratorsList {
        id: "youtube.liveChatModerators.list",
        method: Get,
        path: "youtube/v3/liveChat/moderators",
        params: LiveChatModeratorsListParams,
        body: (),
        response: LiveChatModeratorListResponse,
        decode: json,
    }

    LiveChatModeratorsInsert {
        id: "youtube.liveChatModerators.insert",
        method: Post,
        path: "youtube/v3/liveChat/moderators",
        params: LiveChatModeratorsInsertParams,
        body: LiveChatModerator,
        response: LiveChatModerator,
        decode: json,
    }

    LiveChatModeratorsDelete {
        id: "youtube.liveChatModerators.delete",
        method: Delete,
        path: "youtube/v3/liveChat/moderators",
        params: LiveChatModeratorsDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }
}

// liveStreams

operations! {
    LiveStreamsList {
        id: "youtube.liveStreams.list",
        method: Get,
        path: "youtube/v3/liveStreams",
        params: LiveStreamsListParams,
        body: (),
        response: LiveStreamListResponse,
        decode: json,
    }

    LiveStreamsInsert {
        id: "youtube.liveStreams.insert",
        method: Post,
        path: "youtube/v3/liveStreams",
        params: LiveStreamsInsertParams,
        body: LiveStream,
        response: LiveStream,
        decode: json,
    }

    LiveStreamsUpdate {
        id: "youtube.liveStreams.update",
        method: Put,
        path: "youtube/v3/liveStreams",
        params: LiveStreamsUpdateParams,
        body: LiveStream,
        response: LiveStream,
        decode: json,
    }

    LiveStreamsDelete {
        id: "youtube.liveStreams.delete",
        method: Delete,
        path: "youtube/v3/liveStreams",
        params: LiveStreamsDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }
}

// members, membershipsLevels, superChatEvents

operations! {
    MembersList {
        id: "youtube.members.list",
        method: Get,
        path: "youtube/v3/members",
        params: MembersListParams,
        body: (),
        response: MemberListResponse,
        decode: json,
    }

    MembershipsLevelsList {
        id: "youtube.membershipsLevels.list",
        method: Get,
        path: "youtube/v3/membershipsLevels",
        params: MembershipsLevelsListParams,
        body: (),
        response: MembershipsLevelListResponse,
        decode: json,
    }

    SuperChatEventsList {
        id: "youtube.superChatEvents.list",
        method: Get,
        path: "youtube/v3/superChatEvents",
        params: SuperChatEventsListParams,
        body: (),
        response: SuperChatEventListResponse,
        decode: json,
    }
}

// playlistImages, playlistItems, playlists

operations! {
    PlaylistImagesList {
        id: "youtube.playlistImages.list",
        method: Get,
        path: "youtube/v3/playlistImages",
        params: PlaylistImagesListParams,
        body: (),
        response: PlaylistImageListResponse,
        decode: json,
    }

    PlaylistImagesInsert {
        id: "youtube.playlistImages.insert",
        method: Post,
        path: "youtube/v3/playlistImages",
        upload: optional "upload/youtube/v3/playlistImages",
        params: PlaylistImagesInsertParams,
        body: PlaylistImage,
        response: PlaylistImage,
        decode: json,
    }

    PlaylistImagesUpdate {
        id: "youtube.playlistImages.update",
        method: Put,
        path: "youtube/v3/playlistImages",
        upload: optional "upload/youtube/v3/playlistImages",
        params: PlaylistImagesUpdateParams,
        body: PlaylistImage,
        response: PlaylistImage,
        decode: json,
    }

    PlaylistImagesDelete {
        id: "youtube.playlistImages.delete",
        method: Delete,
        path: "youtube/v3/playlistImages",
        params: PlaylistImagesDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }

    PlaylistItemsList {
        id: "youtube.playlistItems.list",
        method: Get,
        path: "youtube/v3/playlistItems",
        params: PlaylistItemsListParams,
        body: (),
        response: PlaylistItemListResponse,
        decode: json,
    }

    PlaylistItemsInsert {
        id: "youtube.playlistItems.insert",
        method: Post,
        path: "youtube/v3/playlistItems",
        params: PlaylistItemsInsertParams,
        body: PlaylistItem,
        response: PlaylistItem,
        decode: json,
    }

    PlaylistItemsUpdate {
        id: "youtube.playlistItems.update",
        method: Put,
        path: "youtube/v3/playlistItems",
        params: PlaylistItemsUpdateParams,
        body: PlaylistItem,
        response: PlaylistItem,
        decode: json,
    }

    PlaylistItemsDelete {
        id: "youtube.playlistItems.delete",
        method: Delete,
        path: "youtube/v3/playlistItems",
        params: PlaylistItemsDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }

    PlaylistsList {
        id: "youtube.playlists.list",
        method: Get,
        path: "youtube/v3/playlists",
        params: PlaylistsListParams,
        body: (),
        response: PlaylistListResponse,
        decode: json,
    }

    PlaylistsInsert {
        id: "youtube.playlists.insert",
        method: Post,
        path: "youtube/v3/playlists",
        params: PlaylistsInsertParams,
        body: Playlist,
        response: Playlist,
        decode: json,
    }

    PlaylistsUpdate {
        id: "youtube.playlists.update",
        method: Put,
        path: "youtube/v3/playlists",
        params: PlaylistsUpdateParams,
        body: Playlist,
        response: Playlist,
        decode: json,
    }

    PlaylistsDelete {
        id: "youtube.playlists.delete",
        method: Delete,
        path: "youtube/v3/playlists",
        params: PlaylistsDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }
}

// search, subscriptions

operations! {
    SearchList {
        id: "youtube.search.list",
        method: Get,
        path: "youtube/v3/search",
        params: SearchListParams,
        body: (),
        response: SearchListResponse,
        decode: json,
    }

    SubscriptionsList {
        id: "youtube.subscriptions.list",
        method: Get,
        path: "youtube/v3/subscriptions",
        params: SubscriptionsListParams,
        body: (),
        response: SubscriptionListResponse,
        decode: json,
    }

    SubscriptionsInsert {
        id: "youtube.subscriptions.insert",
        method: Post,
        path: "youtube/v3/subscriptions",
        params: SubscriptionsInsertParams,
        body: Subscription,
        response: Subscription,
        decode: json,
    }

    SubscriptionsDelete {
        id: "youtube.subscriptions.delete",
        method: Delete,
        path: "youtube/v3/subscriptions",
        params: SubscriptionsDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }
}

// tests, thirdPartyLinks, thumbnails

operations! {
    TestsInsert {
        id: "youtube.tests.insert",
        method: Post,
        path: "youtube/v3/tests",
        params: TestsInsertParams,
        body: TestItem,
        response: TestItem,
        decode: json,
    }

    ThirdPartyLinksList {
        id: "youtube.thirdPartyLinks.list",
        method: Get,
        path: "youtube/v3/thirdPartyLinks",
        params: ThirdPartyLinksListParams,
        body: (),
        response: ThirdPartyLinkListResponse,
        decode: json,
    }

    ThirdPartyLinksInsert {
        id: "youtube.thirdPartyLinks.insert",
        method: Post,
        path: "youtube/v3/thirdPartyLinks",
        params: ThirdPartyLinksInsertParams,
        body: ThirdPartyLink,
        response: ThirdPartyLink,
        decode: json,
    }

    ThirdPartyLinksUpdate {
        id: "youtube.thirdPartyLinks.update",
        method: Put,
        path: "youtube/v3/thirdPartyLinks",
        params: ThirdPartyLinksUpdateParams,
        body: ThirdPartyLink,
        response: ThirdPartyLink,
        decode: json,
    }

    ThirdPartyLinksDelete {
        id: "youtube.thirdPartyLinks.delete",
        method: Delete,
        path: "youtube/v3/thirdPartyLinks",
        params: ThirdPartyLinksDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }

    /// Uploads a custom thumbnail. Media only; there is no metadata body.
    ThumbnailsSet {
        id: "youtube.thumbnails.set",
        method: Post,
        path: "youtube/v3/thumbnails/set",
        upload: required "upload/youtube/v3/thumbnails/set",
        params: ThumbnailsSetParams,
        body: (),
        response: ThumbnailSetResponse,
        decode: json,
    }
}

// videoAbuseReportReasons, videoCategories, videos, watermarks

operations! {
    VideoAbuseReportReasonsList {
        id: "youtube.videoAbuseReportReasons.list",
        method: Get,
        path: "youtube/v3/videoAbuseReportReasons",
        params: VideoAbuseReportReasonsListParams,
        body: (),
        response: VideoAbuseReportReasonListResponse,
        decode: json,
    }

    VideoCategoriesList {
        id: "youtube.videoCategories.list",
        method: Get,
        path: "youtube/v3/videoCategories",
        params: VideoCategoriesListParams,
        body: (),
        response: VideoCategoryListResponse,
        decode: json,
    }

    VideosList {
        id: "youtube.videos.list",
        method: Get,
        path: "youtube/v3/videos",
        params: VideosListParams,
        body: (),
        response: VideoListResponse,
        decode: json,
    }

    /// Uploads a video with its metadata.
    VideosInsert {
        id: "youtube.videos.insert",
        method: Post,
        path: "youtube/v3/videos",
        upload: required "upload/youtube/v3/videos",
        params: VideosInsertParams,
        body: Video,
        response: Video,
        decode: json,
    }

    VideosUpdate {
        id: "youtube.videos.update",
        method: Put,
        path: "youtube/v3/videos",
        params: VideosUpdateParams,
        body: Video,
        response: Video,
        decode: json,
    }

    VideosDelete {
        id: "youtube.videos.delete",
        method: Delete,
        path: "youtube/v3/videos",
        params: VideosDeleteParams,
        body: (),
        response: (),
        decode: empty,
    }

    VideosRate {
        id: "youtube.videos.rate",
        method: Post,
        path: "youtube/v3/videos/rate",
        params: VideosRateParams,
        body: (),
        response: (),
        decode: empty,
    }

    VideosGetRating {
        id: "youtube.videos.getRating",
        method: Get,
        path: "youtube/v3/videos/getRating",
        params: VideosGetRatingParams,
        body: (),
        response: VideoGetRatingResponse,
        decode: json,
    }

    VideosReportAbuse {
        id: "youtube.videos.reportAbuse",
        method: Post,
        path: "youtube/v3/videos/reportAbuse",
        params: VideosReportAbuseParams,
        body: VideoAbuseReport,
        response: (),
        decode: empty,
    }

    WatermarksSet {
        id: "youtube.watermarks.set",
        method: Post,
        path: "youtube/v3/watermarks/set",
        upload: required "upload/youtube/v3/watermarks/set",
        params: WatermarksSetParams,
        body: InvideoBranding,
        response: (),
        decode: empty,
    }

    WatermarksUnset {
        id: "youtube.watermarks.unset",
        method: Post,
        path: "youtube/v3/watermarks/unset",
        params: WatermarksUnsetParams,
        body: (),
        response: (),
        decode: empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_carry_their_routes() {
        assert_eq!(VideosList::ID, "youtube.videos.list");
        assert_eq!(VideosList::METHOD, HttpMethod::Get);
        assert_eq!(VideosList::UPLOAD_PATH, None);
        assert!(!VideosList::MEDIA_REQUIRED);

        assert_eq!(VideosInsert::UPLOAD_PATH, Some("upload/youtube/v3/videos"));
        assert!(VideosInsert::MEDIA_REQUIRED);
        assert!(!CaptionsUpdate::MEDIA_REQUIRED);
        assert_eq!(LiveChatBansInsert::PATH, "youtube/v3/liveChat/bans");
        assert_eq!(LiveBroadcastsInsertCuepoint::PATH, "youtube/v3/liveBroadcasts/cuepoint");
    }

    #[test]
    fn void_decoder_ignores_body() {
        assert!(VideosDelete::decode(Bytes::from_static(b"not json")).is_ok());
    }

    #[test]
    fn media_decoder_returns_raw_bytes() {
        let body = Bytes::from_static(b"WEBVTT\n\n00:00.000 --> 00:01.000\nhi\n");
        assert_eq!(CaptionsDownload::decode(body.clone()).unwrap(), body);
    }

    #[test]
    fn json_decoder_reports_malformed_body() {
        assert!(VideosList::decode(Bytes::from_static(b"{\"items\": 3}")).is_err());
    }
}
