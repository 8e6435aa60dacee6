use crate::types::Parts;

string_enum! {
    pub enum SubscriptionOrder {
        Alphabetical => "alphabetical",
        Relevance => "relevance",
        Unread => "unread",
    }
}

params! {
    /// Parameters of `subscriptions.list`.
    pub struct SubscriptionsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            channel_id: String = "channelId",
            id: Vec<String> = "id",
            mine: bool = "mine",
            my_recent_subscribers: bool = "myRecentSubscribers",
            my_subscribers: bool = "mySubscribers",
            /// Restrict results to subscriptions to these channels.
            for_channel_id: String = "forChannelId",
            max_results: u32 = "maxResults",
            order: SubscriptionOrder = "order",
            page_token: String = "pageToken",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
    validate(this, v) {
        v.exactly_one(&[
            ("channelId", this.channel_id.is_some()),
            ("id", this.id.is_some()),
            ("mine", this.mine.is_some()),
            ("myRecentSubscribers", this.my_recent_subscribers.is_some()),
            ("mySubscribers", this.my_subscribers.is_some()),
        ]);
        v.range("maxResults", this.max_results, 0, 50);
    }
}

params! {
    pub struct SubscriptionsInsertParams {
        required {
            part: Parts = "part",
        }
        optional {}
    }
}

params! {
    pub struct SubscriptionsDeleteParams {
        required {
            id: String = "id",
        }
        optional {}
    }
}
