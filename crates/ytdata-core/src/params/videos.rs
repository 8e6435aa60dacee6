//! Videos, ratings, categories, abuse reasons and thumbnails.

use crate::schema::Rating;
use crate::types::Parts;

string_enum! {
    pub enum Chart {
        ChartUnspecified => "chartUnspecified",
        MostPopular => "mostPopular",
    }
}

string_enum! {
    pub enum MyRating {
        Like => "like",
        Dislike => "dislike",
    }
}

params! {
    /// Parameters of `videos.list`.
    ///
    /// Exactly one of `chart`, `id` and `myRating` selects the videos.
    /// Paging only applies to `chart` and `myRating` lookups.
    pub struct VideosListParams {
        required {
            part: Parts = "part",
        }
        optional {
            chart: Chart = "chart",
            id: Vec<String> = "id",
            my_rating: MyRating = "myRating",
            hl: String = "hl",
            max_height: u32 = "maxHeight",
            max_width: u32 = "maxWidth",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            region_code: String = "regionCode",
            video_category_id: String = "videoCategoryId",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
    validate(this, v) {
        v.exactly_one(&[
            ("chart", this.chart.is_some()),
            ("id", this.id.is_some()),
            ("myRating", this.my_rating.is_some()),
        ]);
        v.range("maxResults", this.max_results, 1, 50);
        v.range("maxHeight", this.max_height, 72, 8192);
        v.range("maxWidth", this.max_width, 72, 8192);
        v.only_with("maxResults", this.max_results.is_some(), this.id.is_none(), "without id");
        v.only_with("pageToken", this.page_token.is_some(), this.id.is_none(), "without id");
        v.only_with("regionCode", this.region_code.is_some(), this.chart.is_some(), "with chart");
        v.only_with(
            "videoCategoryId",
            this.video_category_id.is_some(),
            this.chart.is_some(),
            "with chart",
        );
    }
}

impl VideosListParams {
    /// Look up videos by id.
    pub fn by_id<I, S>(part: impl Into<Parts>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut params = Self::new(part);
        params.id = Some(ids.into_iter().map(Into::into).collect());
        params
    }

    /// The most popular videos, optionally for a region.
    pub fn most_popular(part: impl Into<Parts>) -> Self {
        let mut params = Self::new(part);
        params.chart = Some(Chart::MostPopular);
        params
    }
}

params! {
    /// Parameters of `videos.insert`. The video file is sent as media.
    pub struct VideosInsertParams {
        required {
            part: Parts = "part",
        }
        optional {
            notify_subscribers: bool = "notifySubscribers",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
}

params! {
    pub struct VideosUpdateParams {
        required {
            part: Parts = "part",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct VideosDeleteParams {
        required {
            id: String = "id",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct VideosRateParams {
        required {
            id: String = "id",
            rating: Rating = "rating",
        }
        optional {}
    }
}

params! {
    pub struct VideosGetRatingParams {
        required {
            id: Vec<String> = "id",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct VideosReportAbuseParams {
        required {}
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    /// Parameters of `videoCategories.list`.
    pub struct VideoCategoriesListParams {
        required {
            part: Parts = "part",
        }
        optional {
            id: Vec<String> = "id",
            region_code: String = "regionCode",
            hl: String = "hl",
        }
    }
    validate(this, v) {
        v.exactly_one(&[
            ("id", this.id.is_some()),
            ("regionCode", this.region_code.is_some()),
        ]);
    }
}

params! {
    pub struct VideoAbuseReportReasonsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            hl: String = "hl",
        }
    }
}

params! {
    /// Parameters of `thumbnails.set`. The image is sent as media.
    pub struct ThumbnailsSetParams {
        required {
            video_id: String = "videoId",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}
