//! Videos, ratings, abuse reports and categories.

use std::collections::BTreeMap;

use serde_json::Number;

use crate::field::Field;

use super::common::{AccessPolicy, GeoPoint, PrivacyStatus, ThumbnailDetails};
use super::rating::ContentRating;

string_enum! {
    /// Whether a resource is an upcoming or active live broadcast.
    pub enum LiveBroadcastContent {
        None => "none",
        Upcoming => "upcoming",
        Live => "live",
        Completed => "completed",
    }
}

string_enum! {
    pub enum VideoDefinition {
        Sd => "sd",
        Hd => "hd",
    }
}

string_enum! {
    /// Caption availability. The API sends this as a string, not a boolean.
    pub enum CaptionAvailability {
        True => "true",
        False => "false",
    }
}

string_enum! {
    pub enum VideoProjection {
        Rectangular => "rectangular",
        Spherical => "360",
    }
}

string_enum! {
    pub enum UploadStatus {
        Uploaded => "uploaded",
        Processed => "processed",
        Failed => "failed",
        Rejected => "rejected",
        Deleted => "deleted",
    }
}

string_enum! {
    pub enum UploadFailureReason {
        Conversion => "conversion",
        InvalidFile => "invalidFile",
        EmptyFile => "emptyFile",
        TooSmall => "tooSmall",
        Codec => "codec",
        Unsupported => "unsupported",
    }
}

string_enum! {
    pub enum RejectionReason {
        Copyright => "copyright",
        Inappropriate => "inappropriate",
        Duplicate => "duplicate",
        TermsOfUse => "termsOfUse",
        UploaderAccountSuspended => "uploaderAccountSuspended",
        Length => "length",
        Claim => "claim",
        UploaderAccountClosed => "uploaderAccountClosed",
        Trademark => "trademark",
        Legal => "legal",
    }
}

string_enum! {
    pub enum VideoLicense {
        Youtube => "youtube",
        CreativeCommon => "creativeCommon",
    }
}

string_enum! {
    pub enum FileType {
        Video => "video",
        Audio => "audio",
        Image => "image",
        Archive => "archive",
        Document => "document",
        Project => "project",
        Other => "other",
    }
}

string_enum! {
    pub enum StreamRotation {
        None => "none",
        Clockwise => "clockwise",
        UpsideDown => "upsideDown",
        CounterClockwise => "counterClockwise",
        Other => "other",
    }
}

string_enum! {
    pub enum ProcessingStatus {
        Processing => "processing",
        Succeeded => "succeeded",
        Failed => "failed",
        Terminated => "terminated",
    }
}

string_enum! {
    pub enum ProcessingFailureReason {
        UploadFailed => "uploadFailed",
        TranscodeFailed => "transcodeFailed",
        StreamingFailed => "streamingFailed",
        Other => "other",
    }
}

string_enum! {
    pub enum ProcessingError {
        AudioFile => "audioFile",
        ImageFile => "imageFile",
        ProjectFile => "projectFile",
        NotAVideoFile => "notAVideoFile",
        DocFile => "docFile",
        ArchiveFile => "archiveFile",
        UnsupportedSpatialAudioLayout => "unsupportedSpatialAudioLayout",
    }
}

string_enum! {
    pub enum ProcessingWarning {
        UnknownContainer => "unknownContainer",
        UnknownVideoCodec => "unknownVideoCodec",
        UnknownAudioCodec => "unknownAudioCodec",
        InconsistentResolution => "inconsistentResolution",
        HasEditlist => "hasEditlist",
        ProblematicVideoCodec => "problematicVideoCodec",
        ProblematicAudioCodec => "problematicAudioCodec",
        UnsupportedVrStereoMode => "unsupportedVrStereoMode",
        UnsupportedSphericalProjectionType => "unsupportedSphericalProjectionType",
        UnsupportedHdrPixelFormat => "unsupportedHdrPixelFormat",
        UnsupportedHdrColorMetadata => "unsupportedHdrColorMetadata",
        ProblematicHdrLookupTable => "problematicHdrLookupTable",
    }
}

string_enum! {
    pub enum ProcessingHint {
        NonStreamableMov => "nonStreamableMov",
        SendBestQualityVideo => "sendBestQualityVideo",
        SphericalVideo => "sphericalVideo",
        SpatialAudio => "spatialAudio",
        VrVideo => "vrVideo",
        HdrVideo => "hdrVideo",
    }
}

string_enum! {
    pub enum EditorSuggestion {
        VideoAutoLevels => "videoAutoLevels",
        VideoStabilize => "videoStabilize",
        VideoCrop => "videoCrop",
        AudioQuietAudioSwap => "audioQuietAudioSwap",
    }
}

string_enum! {
    pub enum VideoGameRating {
        Anyone => "anyone",
        M15Plus => "m15Plus",
        M16Plus => "m16Plus",
        M17Plus => "m17Plus",
    }
}

string_enum! {
    /// The rating to record with `videos.rate`.
    pub enum Rating {
        Like => "like",
        Dislike => "dislike",
        None => "none",
    }
}

string_enum! {
    /// The authorized user's rating as reported by `videos.getRating`.
    pub enum ViewerRating {
        None => "none",
        Like => "like",
        Dislike => "dislike",
        Unspecified => "unspecified",
    }
}

schema! {
    /// A YouTube video.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/videos>
    pub struct Video {
        kind: String,
        etag: String,
        id: String,
        snippet: VideoSnippet,
        content_details: VideoContentDetails,
        status: VideoStatus,
        statistics: VideoStatistics,
        paid_product_placement_details: VideoPaidProductPlacementDetails,
        player: VideoPlayer,
        topic_details: VideoTopicDetails,
        recording_details: VideoRecordingDetails,
        file_details: VideoFileDetails,
        processing_details: VideoProcessingDetails,
        suggestions: VideoSuggestions,
        live_streaming_details: VideoLiveStreamingDetails,
        localizations: BTreeMap<String, VideoLocalization>,
        age_gating: VideoAgeGating,
        monetization_details: VideoMonetizationDetails,
        project_details: VideoProjectDetails,
    }

    pub struct VideoSnippet {
        published_at: String,
        channel_id: String,
        title: String,
        description: String,
        thumbnails: ThumbnailDetails,
        channel_title: String,
        tags: Vec<String>,
        category_id: String,
        live_broadcast_content: LiveBroadcastContent,
        default_language: String,
        localized: VideoLocalization,
        default_audio_language: String,
    }

    pub struct VideoLocalization {
        title: String,
        description: String,
    }

    pub struct VideoContentDetails {
        /// ISO 8601 duration, e.g. `PT15M33S`.
        duration: String,
        /// `2d` or `3d`.
        dimension: String,
        definition: VideoDefinition,
        caption: CaptionAvailability,
        licensed_content: bool,
        region_restriction: VideoRegionRestriction,
        content_rating: ContentRating,
        projection: VideoProjection,
        has_custom_thumbnail: bool,
        country_restriction: AccessPolicy,
    }

    pub struct VideoRegionRestriction {
        allowed: Vec<String>,
        blocked: Vec<String>,
    }

    pub struct VideoStatus {
        upload_status: UploadStatus,
        failure_reason: UploadFailureReason,
        rejection_reason: RejectionReason,
        privacy_status: PrivacyStatus,
        /// Scheduled publish time; only valid while the video is private.
        publish_at: String,
        license: VideoLicense,
        embeddable: bool,
        public_stats_viewable: bool,
        made_for_kids: bool,
        self_declared_made_for_kids: bool,
        contains_synthetic_media: bool,
    }

    /// Counters; the API transmits them as decimal strings.
    pub struct VideoStatistics {
        view_count: String,
        like_count: String,
        dislike_count: String,
        favorite_count: String,
        comment_count: String,
    }

    pub struct VideoPaidProductPlacementDetails {
        has_paid_product_placement: bool,
    }

    pub struct VideoPlayer {
        embed_html: String,
        embed_height: String,
        embed_width: String,
    }

    pub struct VideoTopicDetails {
        topic_ids: Vec<String>,
        relevant_topic_ids: Vec<String>,
        topic_categories: Vec<String>,
    }

    pub struct VideoRecordingDetails {
        location_description: String,
        location: GeoPoint,
        recording_date: String,
    }

    /// Details about the uploaded file. Visible only to the owner.
    pub struct VideoFileDetails {
        file_name: String,
        file_size: String,
        file_type: FileType,
        container: String,
        video_streams: Vec<VideoFileDetailsVideoStream>,
        audio_streams: Vec<VideoFileDetailsAudioStream>,
        duration_ms: String,
        bitrate_bps: String,
        creation_time: String,
    }

    pub struct VideoFileDetailsVideoStream {
        width_pixels: u32,
        height_pixels: u32,
        frame_rate_fps: Number,
        aspect_ratio: Number,
        codec: String,
        bitrate_bps: String,
        rotation: StreamRotation,
        vendor: String,
    }

    pub struct VideoFileDetailsAudioStream {
        channel_count: u32,
        codec: String,
        bitrate_bps: String,
        vendor: String,
    }

    pub struct VideoProcessingDetails {
        processing_status: ProcessingStatus,
        processing_progress: VideoProcessingDetailsProcessingProgress,
        processing_failure_reason: ProcessingFailureReason,
        file_details_availability: String,
        processing_issues_availability: String,
        tag_suggestions_availability: String,
        editor_suggestions_availability: String,
        thumbnails_availability: String,
    }

    pub struct VideoProcessingDetailsProcessingProgress {
        parts_total: String,
        parts_processed: String,
        time_left_ms: String,
    }

    pub struct VideoSuggestions {
        processing_errors: Vec<ProcessingError>,
        processing_warnings: Vec<ProcessingWarning>,
        processing_hints: Vec<ProcessingHint>,
        tag_suggestions: Vec<VideoSuggestionsTagSuggestion>,
        editor_suggestions: Vec<EditorSuggestion>,
    }

    pub struct VideoSuggestionsTagSuggestion {
        tag: String,
        category_restricts: Vec<String>,
    }

    pub struct VideoLiveStreamingDetails {
        actual_start_time: String,
        actual_end_time: String,
        scheduled_start_time: String,
        scheduled_end_time: String,
        concurrent_viewers: String,
        active_live_chat_id: String,
    }

    pub struct VideoAgeGating {
        restricted: bool,
        alcohol_content: bool,
        video_game_rating: VideoGameRating,
    }

    pub struct VideoMonetizationDetails {
        access: AccessPolicy,
    }

    pub struct VideoProjectDetails {}

    /// The response of `videos.getRating`.
    pub struct VideoGetRatingResponse {
        kind: String,
        etag: String,
        event_id: String,
        visitor_id: String,
        items: Vec<VideoRating>,
    }

    pub struct VideoRating {
        video_id: String,
        rating: ViewerRating,
    }

    /// The body of `videos.reportAbuse`.
    pub struct VideoAbuseReport {
        video_id: String,
        reason_id: String,
        secondary_reason_id: String,
        comments: String,
        language: String,
    }

    pub struct VideoAbuseReportReason {
        kind: String,
        etag: String,
        id: String,
        snippet: VideoAbuseReportReasonSnippet,
    }

    pub struct VideoAbuseReportReasonSnippet {
        label: String,
        secondary_reasons: Vec<VideoAbuseReportSecondaryReason>,
    }

    pub struct VideoAbuseReportSecondaryReason {
        id: String,
        label: String,
    }

    pub struct VideoCategory {
        kind: String,
        etag: String,
        id: String,
        snippet: VideoCategorySnippet,
    }

    pub struct VideoCategorySnippet {
        channel_id: String,
        title: String,
        assignable: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_video_decodes_with_other_fields_absent() {
        let video: Video =
            serde_json::from_value(json!({ "kind": "youtube#video", "id": "abc123" })).unwrap();

        assert_eq!(video.kind.value().map(String::as_str), Some("youtube#video"));
        assert_eq!(video.id.value().map(String::as_str), Some("abc123"));
        assert!(video.snippet.is_absent());
        assert!(video.statistics.is_absent());
        assert_eq!(
            serde_json::to_value(&video).unwrap(),
            json!({ "kind": "youtube#video", "id": "abc123" })
        );
    }

    #[test]
    fn null_field_is_kept_distinct() {
        let video: Video =
            serde_json::from_value(json!({ "id": "abc123", "snippet": null })).unwrap();
        assert!(video.snippet.is_null());
        assert_eq!(
            serde_json::to_value(&video).unwrap(),
            json!({ "id": "abc123", "snippet": null })
        );
    }

    #[test]
    fn full_video_round_trips() {
        let payload = json!({
            "kind": "youtube#video",
            "etag": "XpPGQXPnxQJhLgs6enD_n8JR4Qk",
            "id": "dQw4w9WgXcQ",
            "snippet": {
                "publishedAt": "2009-10-25T06:57:33Z",
                "channelId": "UCuAXFkgsw1L7xaCfnd5JJOw",
                "title": "Rick Astley - Never Gonna Give You Up",
                "tags": ["rick astley", "80s"],
                "categoryId": "10",
                "liveBroadcastContent": "none",
                "thumbnails": {
                    "high": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg", "width": 480, "height": 360 }
                }
            },
            "contentDetails": {
                "duration": "PT3M33S",
                "definition": "hd",
                "caption": "true",
                "projection": "rectangular",
                "contentRating": { "ytRating": "ytAgeRestricted" }
            },
            "status": {
                "uploadStatus": "processed",
                "privacyStatus": "public",
                "license": "youtube",
                "embeddable": true,
                "madeForKids": false
            },
            "statistics": { "viewCount": "1500000000", "likeCount": "17000000", "commentCount": "2300000" },
            "localizations": { "de": { "title": "Niemals" } }
        });

        let video: Video = serde_json::from_value(payload.clone()).unwrap();
        let status = video.status.value().unwrap();
        assert_eq!(status.privacy_status, Field::Present(PrivacyStatus::Public));
        assert_eq!(
            video.statistics.value().unwrap().view_count.value().map(String::as_str),
            Some("1500000000")
        );
        assert_eq!(serde_json::to_value(&video).unwrap(), payload);
    }

    #[test]
    fn integer_coordinates_round_trip_unchanged() {
        let payload = json!({
            "recordingDetails": {
                "location": { "latitude": 40, "longitude": -3, "altitude": 0 }
            },
            "fileDetails": {
                "videoStreams": [{ "frameRateFps": 29.97, "aspectRatio": 2 }]
            }
        });

        let video: Video = serde_json::from_value(payload.clone()).unwrap();
        let location = video.recording_details.value().unwrap().location.value().unwrap();
        assert_eq!(location.latitude.value().and_then(Number::as_i64), Some(40));
        assert_eq!(location.longitude.value().and_then(Number::as_i64), Some(-3));
        assert_eq!(serde_json::to_value(&video).unwrap(), payload);
    }

    #[test]
    fn unknown_enum_literal_fails_decode() {
        let result = serde_json::from_value::<Video>(json!({
            "status": { "privacyStatus": "mystery" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn wrong_type_fails_decode() {
        let result = serde_json::from_value::<Video>(json!({
            "contentDetails": { "licensedContent": "yes" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let video: Video =
            serde_json::from_value(json!({ "id": "x", "brandNewPart": { "a": 1 } })).unwrap();
        assert_eq!(video.id, Field::Present("x".to_string()));
    }

    #[test]
    fn get_rating_response_decodes() {
        let response: VideoGetRatingResponse = serde_json::from_value(json!({
            "kind": "youtube#videoGetRatingResponse",
            "items": [{ "videoId": "abc", "rating": "like" }]
        }))
        .unwrap();
        let items = response.items.value().unwrap();
        assert_eq!(items[0].rating, Field::Present(ViewerRating::Like));
    }
}
