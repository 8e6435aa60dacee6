//! Subscriptions.

use crate::field::Field;

use super::common::{ResourceId, ThumbnailDetails};

string_enum! {
    pub enum SubscriptionActivityType {
        All => "all",
        Uploads => "uploads",
    }
}

schema! {
    /// A user's subscription to a channel.
    pub struct Subscription {
        kind: String,
        etag: String,
        id: String,
        snippet: SubscriptionSnippet,
        content_details: SubscriptionContentDetails,
        subscriber_snippet: SubscriptionSubscriberSnippet,
    }

    pub struct SubscriptionSnippet {
        published_at: String,
        channel_title: String,
        title: String,
        description: String,
        /// The channel subscribed to.
        resource_id: ResourceId,
        channel_id: String,
        thumbnails: ThumbnailDetails,
    }

    pub struct SubscriptionContentDetails {
        total_item_count: u32,
        new_item_count: u32,
        activity_type: SubscriptionActivityType,
    }

    pub struct SubscriptionSubscriberSnippet {
        title: String,
        description: String,
        channel_id: String,
        thumbnails: ThumbnailDetails,
    }
}
