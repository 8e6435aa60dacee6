//! `search.list` parameters.

use crate::types::Parts;

string_enum! {
    pub enum SearchType {
        Channel => "channel",
        Playlist => "playlist",
        Video => "video",
    }
}

string_enum! {
    pub enum SearchOrder {
        Date => "date",
        Rating => "rating",
        Relevance => "relevance",
        Title => "title",
        VideoCount => "videoCount",
        ViewCount => "viewCount",
    }
}

string_enum! {
    pub enum SafeSearch {
        Moderate => "moderate",
        None => "none",
        Strict => "strict",
    }
}

string_enum! {
    pub enum ChannelType {
        Any => "any",
        Show => "show",
    }
}

string_enum! {
    pub enum EventType {
        Completed => "completed",
        Live => "live",
        Upcoming => "upcoming",
    }
}

string_enum! {
    pub enum VideoCaption {
        Any => "any",
        ClosedCaption => "closedCaption",
        None => "none",
    }
}

string_enum! {
    pub enum VideoDefinitionFilter {
        Any => "any",
        High => "high",
        Standard => "standard",
    }
}

string_enum! {
    pub enum VideoDimension {
        Any => "any",
        Dim2d => "2d",
        Dim3d => "3d",
    }
}

string_enum! {
    pub enum VideoDuration {
        Any => "any",
        /// Longer than 20 minutes.
        Long => "long",
        Medium => "medium",
        /// Shorter than 4 minutes.
        Short => "short",
    }
}

string_enum! {
    /// Shared by `videoEmbeddable`, `videoPaidProductPlacement` and
    /// `videoSyndicated`.
    pub enum AnyOrTrue {
        Any => "any",
        True => "true",
    }
}

string_enum! {
    pub enum VideoLicenseFilter {
        Any => "any",
        CreativeCommon => "creativeCommon",
        Youtube => "youtube",
    }
}

string_enum! {
    pub enum VideoType {
        Any => "any",
        Episode => "episode",
        Movie => "movie",
    }
}

params! {
    /// Parameters of `search.list`.
    ///
    /// The `video*` filters, `eventType` and `forMine` apply only when
    /// `type` is exactly `video`.
    pub struct SearchListParams {
        required {
            part: Parts = "part",
        }
        optional {
            q: String = "q",
            r#type: Vec<SearchType> = "type",
            channel_id: String = "channelId",
            channel_type: ChannelType = "channelType",
            event_type: EventType = "eventType",
            for_content_owner: bool = "forContentOwner",
            for_developer: bool = "forDeveloper",
            for_mine: bool = "forMine",
            /// `lat,lng` center of a circular search area.
            location: String = "location",
            /// Radius such as `10km`; required with `location`.
            location_radius: String = "locationRadius",
            max_results: u32 = "maxResults",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            order: SearchOrder = "order",
            page_token: String = "pageToken",
            published_after: String = "publishedAfter",
            published_before: String = "publishedBefore",
            region_code: String = "regionCode",
            relevance_language: String = "relevanceLanguage",
            safe_search: SafeSearch = "safeSearch",
            topic_id: String = "topicId",
            video_caption: VideoCaption = "videoCaption",
            video_category_id: String = "videoCategoryId",
            video_definition: VideoDefinitionFilter = "videoDefinition",
            video_dimension: VideoDimension = "videoDimension",
            video_duration: VideoDuration = "videoDuration",
            video_embeddable: AnyOrTrue = "videoEmbeddable",
            video_license: VideoLicenseFilter = "videoLicense",
            video_paid_product_placement: AnyOrTrue = "videoPaidProductPlacement",
            video_syndicated: AnyOrTrue = "videoSyndicated",
            video_type: VideoType = "videoType",
        }
    }
    validate(this, v) {
        v.range("maxResults", this.max_results, 0, 50);
        v.at_most_one(&[
            ("forContentOwner", this.for_content_owner.is_some()),
            ("forDeveloper", this.for_developer.is_some()),
            ("forMine", this.for_mine.is_some()),
        ]);

        let videos_only = this.r#type.as_deref() == Some(&[SearchType::Video][..]);
        let video_filters = [
            ("eventType", this.event_type.is_some()),
            ("forMine", this.for_mine.is_some()),
            ("videoCaption", this.video_caption.is_some()),
            ("videoCategoryId", this.video_category_id.is_some()),
            ("videoDefinition", this.video_definition.is_some()),
            ("videoDimension", this.video_dimension.is_some()),
            ("videoDuration", this.video_duration.is_some()),
            ("videoEmbeddable", this.video_embeddable.is_some()),
            ("videoLicense", this.video_license.is_some()),
            ("videoPaidProductPlacement", this.video_paid_product_placement.is_some()),
            ("videoSyndicated", this.video_syndicated.is_some()),
            ("videoType", this.video_type.is_some()),
        ];
        for (field, present) in video_filters {
            v.only_with(field, present, videos_only, "when type is video");
        }

        v.only_with(
            "location",
            this.location.is_some(),
            this.location_radius.is_some(),
            "together with locationRadius",
        );
        v.only_with(
            "locationRadius",
            this.location_radius.is_some(),
            this.location.is_some(),
            "together with location",
        );
    }
}

impl SearchListParams {
    /// A free-text query over the given parts.
    pub fn query(part: impl Into<Parts>, q: impl Into<String>) -> Self {
        let mut params = Self::new(part);
        params.q = Some(q.into());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Params, Query};

    #[test]
    fn video_filters_require_video_type() {
        let mut params = SearchListParams::query("snippet", "rust");
        params.video_duration = Some(VideoDuration::Long);
        params.video_definition = Some(VideoDefinitionFilter::High);

        let err = params.check("youtube.search.list").unwrap_err();
        assert_eq!(err.fields(), vec!["videoDefinition", "videoDuration"]);

        params.r#type = Some(vec![SearchType::Video]);
        params.check("youtube.search.list").unwrap();
    }

    #[test]
    fn mixed_types_do_not_count_as_video() {
        let mut params = SearchListParams::query("snippet", "rust");
        params.r#type = Some(vec![SearchType::Video, SearchType::Channel]);
        params.event_type = Some(EventType::Live);

        let err = params.check("youtube.search.list").unwrap_err();
        assert_eq!(err.fields(), vec!["eventType"]);
    }

    #[test]
    fn location_needs_radius() {
        let mut params = SearchListParams::query("snippet", "coffee");
        params.location = Some("37.42307,-122.08427".to_string());

        let err = params.check("youtube.search.list").unwrap_err();
        assert_eq!(err.fields(), vec!["location"]);
    }

    #[test]
    fn query_encoding() {
        let mut params = SearchListParams::query("snippet", "rust lang");
        params.r#type = Some(vec![SearchType::Video, SearchType::Playlist]);
        params.order = Some(SearchOrder::ViewCount);
        params.max_results = Some(10);

        let mut query = Query::new();
        params.append_query(&mut query);
        assert_eq!(query.get("q"), Some("rust lang"));
        assert_eq!(query.get("type"), Some("video,playlist"));
        assert_eq!(query.get("order"), Some("viewCount"));
        assert_eq!(query.get("maxResults"), Some("10"));
    }
}
