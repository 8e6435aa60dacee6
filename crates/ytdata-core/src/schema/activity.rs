//! Channel activity feed entries.

use crate::field::Field;

use super::common::{ResourceId, ThumbnailDetails};

string_enum! {
    pub enum ActivityType {
        Upload => "upload",
        Like => "like",
        Favorite => "favorite",
        Comment => "comment",
        Subscription => "subscription",
        PlaylistItem => "playlistItem",
        Recommendation => "recommendation",
        Bulletin => "bulletin",
        Social => "social",
        ChannelItem => "channelItem",
        PromotedItem => "promotedItem",
    }
}

string_enum! {
    pub enum RecommendationReason {
        ReasonUnspecified => "reasonUnspecified",
        VideoFavorited => "videoFavorited",
        VideoLiked => "videoLiked",
        VideoWatched => "videoWatched",
    }
}

string_enum! {
    pub enum SocialType {
        Unspecified => "unspecified",
        GooglePlus => "googlePlus",
        Facebook => "facebook",
        Twitter => "twitter",
    }
}

schema! {
    /// An action a channel or user took on YouTube.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/activities>
    pub struct Activity {
        kind: String,
        etag: String,
        id: String,
        snippet: ActivitySnippet,
        content_details: ActivityContentDetails,
    }

    pub struct ActivitySnippet {
        published_at: String,
        channel_id: String,
        title: String,
        description: String,
        thumbnails: ThumbnailDetails,
        channel_title: String,
        r#type: ActivityType,
        group_id: String,
    }

    /// Details of the activity. Only the object matching `snippet.type` is set.
    pub struct ActivityContentDetails {
        upload: ActivityContentDetailsUpload,
        like: ActivityContentDetailsResource,
        favorite: ActivityContentDetailsResource,
        comment: ActivityContentDetailsResource,
        subscription: ActivityContentDetailsResource,
        playlist_item: ActivityContentDetailsPlaylistItem,
        recommendation: ActivityContentDetailsRecommendation,
        bulletin: ActivityContentDetailsResource,
        social: ActivityContentDetailsSocial,
        channel_item: ActivityContentDetailsResource,
    }

    pub struct ActivityContentDetailsUpload {
        video_id: String,
    }

    pub struct ActivityContentDetailsResource {
        resource_id: ResourceId,
    }

    pub struct ActivityContentDetailsPlaylistItem {
        resource_id: ResourceId,
        playlist_id: String,
        playlist_item_id: String,
    }

    pub struct ActivityContentDetailsRecommendation {
        resource_id: ResourceId,
        reason: RecommendationReason,
        seed_resource_id: ResourceId,
    }

    pub struct ActivityContentDetailsSocial {
        r#type: SocialType,
        resource_id: ResourceId,
        author: String,
        reference_url: String,
        image_url: String,
    }
}
