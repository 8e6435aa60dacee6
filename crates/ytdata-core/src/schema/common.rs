//! Objects shared across resources.

use serde_json::Number;

use crate::field::Field;

string_enum! {
    /// Who can see a resource.
    pub enum PrivacyStatus {
        Public => "public",
        Unlisted => "unlisted",
        Private => "private",
    }
}

schema! {
    /// Paging details for lists of resources.
    pub struct PageInfo {
        /// The total number of results in the result set.
        total_results: i32,
        /// The number of results included in the API response.
        results_per_page: i32,
    }

    /// Stub token pagination template to suppress results.
    pub struct TokenPagination {}

    /// A thumbnail image.
    pub struct Thumbnail {
        url: String,
        width: u32,
        height: u32,
    }

    /// Thumbnails keyed by resolution.
    pub struct ThumbnailDetails {
        default: Thumbnail,
        medium: Thumbnail,
        high: Thumbnail,
        standard: Thumbnail,
        maxres: Thumbnail,
    }

    /// Identifies the resource a search result, subscription or playlist
    /// item points at. `kind` says which of the id fields is meaningful.
    pub struct ResourceId {
        kind: String,
        video_id: String,
        channel_id: String,
        playlist_id: String,
    }

    pub struct LanguageTag {
        value: String,
    }

    pub struct LocalizedString {
        value: String,
        language: String,
    }

    pub struct LocalizedProperty {
        default: String,
        default_language: LanguageTag,
        localized: Vec<LocalizedString>,
    }

    /// Geographic coordinates. Numbers keep the representation they were
    /// received with.
    pub struct GeoPoint {
        latitude: Number,
        longitude: Number,
        altitude: Number,
    }

    /// Rights-management policy for YouTube resources.
    pub struct AccessPolicy {
        /// The value of allowed indicates whether the access to the policy
        /// is allowed or denied by default.
        allowed: bool,
        /// A list of region codes that identify countries where the default
        /// policy does not apply.
        exception: Vec<String>,
    }

    /// A name/value pair.
    pub struct PropertyValue {
        property: String,
        value: String,
    }

    /// Public details of a channel, as shown next to chat messages, bans and
    /// Super Chats.
    pub struct ChannelProfileDetails {
        channel_id: String,
        channel_url: String,
        display_name: String,
        profile_image_url: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_privacy_status_is_rejected() {
        let err = serde_json::from_value::<PrivacyStatus>(json!("mystery")).unwrap_err();
        assert!(err.to_string().contains("unknown variant `mystery`"));
        assert!("mystery".parse::<PrivacyStatus>().is_err());
        assert_eq!("unlisted".parse::<PrivacyStatus>().unwrap(), PrivacyStatus::Unlisted);
    }

    #[test]
    fn thumbnails_keep_only_supplied_sizes() {
        let thumbnails: ThumbnailDetails = serde_json::from_value(json!({
            "default": { "url": "https://i.ytimg.com/vi/x/default.jpg", "width": 120, "height": 90 }
        }))
        .unwrap();

        assert!(thumbnails.default.is_present());
        assert!(thumbnails.maxres.is_absent());
        assert_eq!(
            serde_json::to_value(&thumbnails).unwrap(),
            json!({
                "default": { "url": "https://i.ytimg.com/vi/x/default.jpg", "width": 120, "height": 90 }
            })
        );
    }

    #[test]
    fn negative_width_is_a_type_error() {
        let result = serde_json::from_value::<Thumbnail>(json!({ "width": -1 }));
        assert!(result.is_err());
    }
}
