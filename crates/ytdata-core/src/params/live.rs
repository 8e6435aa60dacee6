//! Live broadcasts, streams and chat.

use crate::schema::{BroadcastStatus, PollTransition};
use crate::types::Parts;

string_enum! {
    /// Filter for `liveBroadcasts.list`.
    pub enum BroadcastStatusFilter {
        All => "all",
        Active => "active",
        Completed => "completed",
        Upcoming => "upcoming",
    }
}

string_enum! {
    pub enum BroadcastType {
        All => "all",
        Event => "event",
        Persistent => "persistent",
    }
}

params! {
    /// Parameters of `liveBroadcasts.list`.
    pub struct LiveBroadcastsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            broadcast_status: BroadcastStatusFilter = "broadcastStatus",
            broadcast_type: BroadcastType = "broadcastType",
            id: Vec<String> = "id",
            mine: bool = "mine",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
    validate(this, v) {
        v.exactly_one(&[
            ("broadcastStatus", this.broadcast_status.is_some()),
            ("id", this.id.is_some()),
            ("mine", this.mine.is_some()),
        ]);
        v.range("maxResults", this.max_results, 0, 50);
    }
}

params! {
    pub struct LiveBroadcastsInsertParams {
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
    pub struct LiveBroadcastsUpdateParams {
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
    pub struct LiveBroadcastsDeleteParams {
        required {
            id: String = "id",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
}

params! {
    /// Parameters of `liveBroadcasts.bind`. Omitting `streamId` unbinds.
    pub struct LiveBroadcastsBindParams {
        required {
            id: String = "id",
            part: Parts = "part",
        }
        optional {
            stream_id: String = "streamId",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
}

params! {
    pub struct LiveBroadcastsTransitionParams {
        required {
            broadcast_status: BroadcastStatus = "broadcastStatus",
            id: String = "id",
            part: Parts = "part",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
}

params! {
    pub struct LiveBroadcastsInsertCuepointParams {
        required {
            id: String = "id",
        }
        optional {
            part: Parts = "part",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
}

params! {
    pub struct LiveChatBansInsertParams {
        required {
            part: Parts = "part",
        }
        optional {}
    }
}

params! {
    pub struct LiveChatBansDeleteParams {
        required {
            id: String = "id",
        }
        optional {}
    }
}

params! {
    /// Parameters of `liveChatMessages.list`.
    pub struct LiveChatMessagesListParams {
        required {
            live_chat_id: String = "liveChatId",
            part: Parts = "part",
        }
        optional {
            hl: String = "hl",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            /// Edge length in pixels of returned profile images.
            profile_image_size: u32 = "profileImageSize",
        }
    }
    validate(this, v) {
        v.range("maxResults", this.max_results, 200, 2000);
        v.range("profileImageSize", this.profile_image_size, 16, 720);
    }
}

params! {
    pub struct LiveChatMessagesInsertParams {
        required {
            part: Parts = "part",
        }
        optional {}
    }
}

params! {
    pub struct LiveChatMessagesDeleteParams {
        required {
            id: String = "id",
        }
        optional {}
    }
}

params! {
    /// Parameters of `liveChatMessages.transition`, which closes a poll.
    pub struct LiveChatMessagesTransitionParams {
        required {
            id: String = "id",
        }
        optional {
            status: PollTransition = "status",
        }
    }
}

params! {
    pub struct LiveChatModeratorsListParams {
        required {
            live_chat_id: String = "liveChatId",
            part: Parts = "part",
        }
        optional {
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
        }
    }
    validate(this, v) {
        v.range("maxResults", this.max_results, 0, 50);
    }
}

params! {
    pub struct LiveChatModeratorsInsertParams {
        required {
            part: Parts = "part",
        }
        optional {}
    }
}

params! {
    pub struct LiveChatModeratorsDeleteParams {
        required {
            id: String = "id",
        }
        optional {}
    }
}

params! {
    pub struct LiveStreamsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            id: Vec<String> = "id",
            mine: bool = "mine",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
    validate(this, v) {
        v.exactly_one(&[("id", this.id.is_some()), ("mine", this.mine.is_some())]);
        v.range("maxResults", this.max_results, 0, 50);
    }
}

params! {
    pub struct LiveStreamsInsertParams {
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
    pub struct LiveStreamsUpdateParams {
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
    pub struct LiveStreamsDeleteParams {
        required {
            id: String = "id",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Params, Query};

    #[test]
    fn chat_page_size_has_a_floor() {
        let mut params = LiveChatMessagesListParams::new("Cg0KC2JjYXN0MQ", "snippet,authorDetails");
        params.max_results = Some(50);
        params.profile_image_size = Some(800);

        let err = params.check("youtube.liveChatMessages.list").unwrap_err();
        assert_eq!(err.fields(), vec!["maxResults", "profileImageSize"]);
    }

    #[test]
    fn transition_encodes_target_status() {
        let params = LiveBroadcastsTransitionParams::new(BroadcastStatus::Live, "bcast1", "status");
        params.check("youtube.liveBroadcasts.transition").unwrap();

        let mut query = Query::new();
        params.append_query(&mut query);
        assert_eq!(query.get("broadcastStatus"), Some("live"));
        assert_eq!(query.get("id"), Some("bcast1"));
    }

    #[test]
    fn broadcasts_need_a_selector() {
        let err = LiveBroadcastsListParams::new("snippet")
            .check("youtube.liveBroadcasts.list")
            .unwrap_err();
        assert_eq!(err.fields(), vec!["broadcastStatus", "id", "mine"]);
    }
}
