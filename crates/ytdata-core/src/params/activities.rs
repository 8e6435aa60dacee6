use crate::types::Parts;

params! {
    /// Parameters of `activities.list`.
    pub struct ActivitiesListParams {
        required {
            part: Parts = "part",
        }
        optional {
            channel_id: String = "channelId",
            /// List the authorized user's own activities.
            mine: bool = "mine",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            /// RFC 3339 lower bound on `snippet.publishedAt`.
            published_after: String = "publishedAfter",
            published_before: String = "publishedBefore",
            region_code: String = "regionCode",
        }
    }
    validate(this, v) {
        v.exactly_one(&[
            ("channelId", this.channel_id.is_some()),
            ("mine", this.mine.is_some()),
        ]);
        v.range("maxResults", this.max_results, 0, 50);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Params, Query};

    #[test]
    fn channel_filter_is_encoded() {
        let mut params = ActivitiesListParams::new("snippet,contentDetails");
        params.channel_id = Some("UC_x5XG1OV2P6uZZ5FSM9Ttw".to_string());
        params.max_results = Some(25);
        params.check("youtube.activities.list").unwrap();

        let mut query = Query::new();
        params.append_query(&mut query);
        assert_eq!(query.get("part"), Some("snippet,contentDetails"));
        assert_eq!(query.get("channelId"), Some("UC_x5XG1OV2P6uZZ5FSM9Ttw"));
        assert_eq!(query.get("maxResults"), Some("25"));
        assert_eq!(query.get("mine"), None);
    }

    #[test]
    fn reports_every_failure() {
        let mut params = ActivitiesListParams::new("");
        params.max_results = Some(99);

        let err = params.check("youtube.activities.list").unwrap_err();
        assert_eq!(err.fields(), vec!["part", "channelId", "mine", "maxResults"]);
    }
}
