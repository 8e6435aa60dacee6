//! Channels, channel sections, banners and watermarks.

use crate::types::Parts;

params! {
    /// Parameters of `channelBanners.insert`. The image is sent as media.
    pub struct ChannelBannersInsertParams {
        required {}
        optional {
            channel_id: String = "channelId",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
}

params! {
    /// Parameters of `channels.list`.
    ///
    /// Exactly one of `forHandle`, `forUsername`, `id`, `managedByMe` and
    /// `mine` selects the channels.
    pub struct ChannelsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            /// A handle such as `@GoogleDevelopers`.
            for_handle: String = "forHandle",
            for_username: String = "forUsername",
            id: Vec<String> = "id",
            managed_by_me: bool = "managedByMe",
            mine: bool = "mine",
            hl: String = "hl",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
    validate(this, v) {
        v.exactly_one(&[
            ("forHandle", this.for_handle.is_some()),
            ("forUsername", this.for_username.is_some()),
            ("id", this.id.is_some()),
            ("managedByMe", this.managed_by_me.is_some()),
            ("mine", this.mine.is_some()),
        ]);
        v.range("maxResults", this.max_results, 0, 50);
        v.only_with(
            "managedByMe",
            this.managed_by_me.is_some(),
            this.on_behalf_of_content_owner.is_some(),
            "together with onBehalfOfContentOwner",
        );
    }
}

params! {
    pub struct ChannelsUpdateParams {
        required {
            part: Parts = "part",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct ChannelSectionsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            channel_id: String = "channelId",
            id: Vec<String> = "id",
            mine: bool = "mine",
            hl: String = "hl",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
    validate(this, v) {
        v.exactly_one(&[
            ("channelId", this.channel_id.is_some()),
            ("id", this.id.is_some()),
            ("mine", this.mine.is_some()),
        ]);
    }
}

params! {
    pub struct ChannelSectionsInsertParams {
        required {
            part: Parts = "part",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
}

params! {
    pub struct ChannelSectionsUpdateParams {
        required {
            part: Parts = "part",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct ChannelSectionsDeleteParams {
        required {
            id: String = "id",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    /// Parameters of `watermarks.set`. The image is sent as media.
    pub struct WatermarksSetParams {
        required {
            channel_id: String = "channelId",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct WatermarksUnsetParams {
        required {
            channel_id: String = "channelId",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Params, Query};

    #[test]
    fn handle_lookup_is_valid() {
        let mut params = ChannelsListParams::new(["snippet", "statistics"]);
        params.for_handle = Some("@GoogleDevelopers".to_string());
        params.check("youtube.channels.list").unwrap();

        let mut query = Query::new();
        params.append_query(&mut query);
        assert_eq!(query.get("part"), Some("snippet,statistics"));
        assert_eq!(query.get("forHandle"), Some("@GoogleDevelopers"));
    }

    #[test]
    fn conflicting_selectors_are_reported() {
        let mut params = ChannelsListParams::new("id");
        params.mine = Some(true);
        params.id = Some(vec!["UC1".to_string()]);

        let err = params.check("youtube.channels.list").unwrap_err();
        assert_eq!(err.fields(), vec!["id", "mine"]);
    }

    #[test]
    fn managed_by_me_needs_content_owner() {
        let mut params = ChannelsListParams::new("id");
        params.managed_by_me = Some(true);

        let err = params.check("youtube.channels.list").unwrap_err();
        assert_eq!(err.fields(), vec!["managedByMe"]);
    }
}
