use crate::types::Parts;

string_enum! {
    pub enum MembersMode {
        ListMembersModeUnknown => "listMembersModeUnknown",
        /// Only members that joined or upgraded since the page token was issued.
        Updates => "updates",
        AllCurrent => "all_current",
    }
}

params! {
    /// Parameters of `members.list`.
    pub struct MembersListParams {
        required {
            part: Parts = "part",
        }
        optional {
            mode: MembersMode = "mode",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            has_access_to_level: String = "hasAccessToLevel",
            /// Comma-separated channel ids to check for membership.
            filter_by_member_channel_id: String = "filterByMemberChannelId",
        }
    }
    validate(this, v) {
        v.range("maxResults", this.max_results, 0, 1000);
    }
}

params! {
    pub struct MembershipsLevelsListParams {
        required {
            part: Parts = "part",
        }
        optional {}
    }
}

params! {
    pub struct SuperChatEventsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            hl: String = "hl",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
        }
    }
    validate(this, v) {
        v.range("maxResults", this.max_results, 1, 50);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Params, Query};

    #[test]
    fn members_allow_large_pages() {
        let mut params = MembersListParams::new("snippet");
        params.mode = Some(MembersMode::AllCurrent);
        params.max_results = Some(1000);
        params.check("youtube.members.list").unwrap();

        let mut query = Query::new();
        params.append_query(&mut query);
        assert_eq!(query.get("mode"), Some("all_current"));

        params.max_results = Some(1001);
        assert!(params.check("youtube.members.list").is_err());
    }
}
