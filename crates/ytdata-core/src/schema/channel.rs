//! Channels, channel sections, banners and watermarks.

use std::collections::BTreeMap;

use crate::field::Field;

use super::common::{PrivacyStatus, PropertyValue, ThumbnailDetails};

string_enum! {
    pub enum LongUploadsStatus {
        LongUploadsUnspecified => "longUploadsUnspecified",
        Allowed => "allowed",
        Eligible => "eligible",
        Disallowed => "disallowed",
    }
}

string_enum! {
    pub enum ConversionPingContext {
        Subscribe => "subscribe",
        Unsubscribe => "unsubscribe",
        Cview => "cview",
    }
}

string_enum! {
    pub enum ChannelSectionType {
        ChannelsectionTypeUndefined => "channelsectionTypeUndefined",
        SinglePlaylist => "singlePlaylist",
        MultiplePlaylists => "multiplePlaylists",
        PopularUploads => "popularUploads",
        RecentUploads => "recentUploads",
        LikedPlaylists => "likedPlaylists",
        AllPlaylists => "allPlaylists",
        LikedUploads => "likedUploads",
        RecentPosts => "recentPosts",
        RecentActivity => "recentActivity",
        LiveEvents => "liveEvents",
        UpcomingEvents => "upcomingEvents",
        CompletedEvents => "completedEvents",
        MultipleChannels => "multipleChannels",
        PostedVideos => "postedVideos",
        PostedPlaylists => "postedPlaylists",
        Subscriptions => "subscriptions",
    }
}

string_enum! {
    pub enum ChannelSectionStyle {
        ChannelsectionStyleUnspecified => "channelsectionStyleUnspecified",
        HorizontalRow => "horizontalRow",
        VerticalList => "verticalList",
    }
}

string_enum! {
    pub enum InvideoTimingType {
        OffsetFromStart => "offsetFromStart",
        OffsetFromEnd => "offsetFromEnd",
    }
}

string_enum! {
    pub enum InvideoPositionType {
        Corner => "corner",
    }
}

string_enum! {
    pub enum CornerPosition {
        TopLeft => "topLeft",
        TopRight => "topRight",
        BottomLeft => "bottomLeft",
        BottomRight => "bottomRight",
    }
}

schema! {
    /// A YouTube channel.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/channels>
    pub struct Channel {
        kind: String,
        etag: String,
        id: String,
        snippet: ChannelSnippet,
        content_details: ChannelContentDetails,
        statistics: ChannelStatistics,
        topic_details: ChannelTopicDetails,
        status: ChannelStatus,
        branding_settings: ChannelBrandingSettings,
        audit_details: ChannelAuditDetails,
        content_owner_details: ChannelContentOwnerDetails,
        localizations: BTreeMap<String, ChannelLocalization>,
        conversion_pings: ChannelConversionPings,
    }

    pub struct ChannelSnippet {
        title: String,
        description: String,
        custom_url: String,
        published_at: String,
        thumbnails: ThumbnailDetails,
        default_language: String,
        localized: ChannelLocalization,
        country: String,
    }

    pub struct ChannelLocalization {
        title: String,
        description: String,
    }

    pub struct ChannelContentDetails {
        related_playlists: ChannelContentDetailsRelatedPlaylists,
    }

    /// Playlist ids of the channel's system playlists.
    pub struct ChannelContentDetailsRelatedPlaylists {
        likes: String,
        favorites: String,
        uploads: String,
        watch_history: String,
        watch_later: String,
    }

    pub struct ChannelStatistics {
        view_count: String,
        subscriber_count: String,
        hidden_subscriber_count: bool,
        video_count: String,
        comment_count: String,
    }

    pub struct ChannelTopicDetails {
        topic_ids: Vec<String>,
        topic_categories: Vec<String>,
    }

    pub struct ChannelStatus {
        privacy_status: PrivacyStatus,
        is_linked: bool,
        long_uploads_status: LongUploadsStatus,
        made_for_kids: bool,
        self_declared_made_for_kids: bool,
    }

    pub struct ChannelBrandingSettings {
        channel: ChannelSettings,
        watch: WatchSettings,
        image: ImageSettings,
        hints: Vec<PropertyValue>,
    }

    pub struct ChannelSettings {
        title: String,
        description: String,
        keywords: String,
        tracking_analytics_account_id: String,
        unsubscribed_trailer: String,
        default_language: String,
        country: String,
        default_tab: String,
        show_related_channels: bool,
        show_browse_view: bool,
        featured_channels_title: String,
        featured_channels_urls: Vec<String>,
        moderate_comments: bool,
        profile_color: String,
    }

    pub struct WatchSettings {
        text_color: String,
        background_color: String,
        featured_playlist_id: String,
    }

    pub struct ImageSettings {
        /// Set from the `url` returned by `channelBanners.insert`.
        banner_external_url: String,
        banner_image_url: String,
        banner_mobile_image_url: String,
        watch_icon_image_url: String,
        tracking_image_url: String,
    }

    pub struct ChannelAuditDetails {
        overall_good_standing: bool,
        community_guidelines_good_standing: bool,
        copyright_strikes_good_standing: bool,
        content_id_claims_good_standing: bool,
    }

    pub struct ChannelContentOwnerDetails {
        content_owner: String,
        time_linked: String,
    }

    pub struct ChannelConversionPings {
        pings: Vec<ChannelConversionPing>,
    }

    pub struct ChannelConversionPing {
        context: ConversionPingContext,
        conversion_url: String,
    }

    /// A shelf of content on a channel page.
    pub struct ChannelSection {
        kind: String,
        etag: String,
        id: String,
        snippet: ChannelSectionSnippet,
        content_details: ChannelSectionContentDetails,
        targeting: ChannelSectionTargeting,
        localizations: BTreeMap<String, ChannelSectionLocalization>,
    }

    pub struct ChannelSectionSnippet {
        r#type: ChannelSectionType,
        style: ChannelSectionStyle,
        channel_id: String,
        title: String,
        position: u32,
        default_language: String,
        localized: ChannelSectionLocalization,
    }

    pub struct ChannelSectionLocalization {
        title: String,
    }

    pub struct ChannelSectionContentDetails {
        playlists: Vec<String>,
        channels: Vec<String>,
    }

    pub struct ChannelSectionTargeting {
        languages: Vec<String>,
        regions: Vec<String>,
        countries: Vec<String>,
    }

    /// The result of `channelBanners.insert`.
    pub struct ChannelBannerResource {
        kind: String,
        etag: String,
        /// The URL of the uploaded banner image.
        url: String,
    }

    /// A channel watermark, as sent to `watermarks.set`.
    pub struct InvideoBranding {
        image_url: String,
        image_bytes: String,
        target_channel_id: String,
        timing: InvideoTiming,
        position: InvideoPosition,
    }

    pub struct InvideoTiming {
        r#type: InvideoTimingType,
        offset_ms: String,
        duration_ms: String,
    }

    pub struct InvideoPosition {
        r#type: InvideoPositionType,
        corner_position: CornerPosition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn channel_section_type_uses_type_key() {
        let payload = json!({
            "id": "UCsec",
            "snippet": { "type": "singlePlaylist", "style": "horizontalRow", "position": 0 },
            "contentDetails": { "playlists": ["PL1"] }
        });
        let section: ChannelSection = serde_json::from_value(payload.clone()).unwrap();
        let snippet = section.snippet.value().unwrap();
        assert_eq!(snippet.r#type, Field::Present(ChannelSectionType::SinglePlaylist));
        assert_eq!(serde_json::to_value(&section).unwrap(), payload);
    }

    #[test]
    fn channel_statistics_keep_string_counters() {
        let channel: Channel = serde_json::from_value(json!({
            "statistics": { "subscriberCount": "1024", "hiddenSubscriberCount": false }
        }))
        .unwrap();
        let stats = channel.statistics.value().unwrap();
        assert_eq!(stats.subscriber_count, Field::Present("1024".to_string()));
        assert_eq!(stats.hidden_subscriber_count, Field::Present(false));
    }

    #[test]
    fn watermark_position_rejects_unknown_corner() {
        let result = serde_json::from_value::<InvideoBranding>(json!({
            "position": { "type": "corner", "cornerPosition": "middle" }
        }));
        assert!(result.is_err());
    }
}
