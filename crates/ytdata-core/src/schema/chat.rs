//! Live chat messages, bans, moderators and Super Chat events.

use crate::field::Field;

use super::common::{ChannelProfileDetails, PageInfo, TokenPagination};

string_enum! {
    pub enum LiveChatMessageType {
        InvalidType => "invalidType",
        TextMessageEvent => "textMessageEvent",
        Tombstone => "tombstone",
        FanFundingEvent => "fanFundingEvent",
        ChatEndedEvent => "chatEndedEvent",
        SponsorOnlyModeStartedEvent => "sponsorOnlyModeStartedEvent",
        SponsorOnlyModeEndedEvent => "sponsorOnlyModeEndedEvent",
        NewSponsorEvent => "newSponsorEvent",
        MemberMilestoneChatEvent => "memberMilestoneChatEvent",
        MembershipGiftingEvent => "membershipGiftingEvent",
        GiftMembershipReceivedEvent => "giftMembershipReceivedEvent",
        MessageDeletedEvent => "messageDeletedEvent",
        MessageRetractedEvent => "messageRetractedEvent",
        UserBannedEvent => "userBannedEvent",
        SuperChatEvent => "superChatEvent",
        SuperStickerEvent => "superStickerEvent",
        PollEvent => "pollEvent",
    }
}

string_enum! {
    pub enum BanType {
        LiveChatBanTypeUnspecified => "liveChatBanTypeUnspecified",
        Permanent => "permanent",
        Temporary => "temporary",
    }
}

string_enum! {
    pub enum PollStatus {
        Unknown => "unknown",
        Active => "active",
        Closed => "closed",
    }
}

string_enum! {
    /// Target state for `liveChatMessages.transition`.
    pub enum PollTransition {
        StatusUnspecified => "statusUnspecified",
        Closed => "closed",
    }
}

schema! {
    /// A message in a live chat.
    ///
    /// See: <https://developers.google.com/youtube/v3/live/docs/liveChatMessages>
    pub struct LiveChatMessage {
        kind: String,
        etag: String,
        id: String,
        snippet: LiveChatMessageSnippet,
        author_details: LiveChatMessageAuthorDetails,
    }

    /// The detail object matching `type` is the only one set.
    pub struct LiveChatMessageSnippet {
        r#type: LiveChatMessageType,
        live_chat_id: String,
        author_channel_id: String,
        published_at: String,
        has_display_content: bool,
        display_message: String,
        text_message_details: LiveChatTextMessageDetails,
        message_deleted_details: LiveChatMessageDeletedDetails,
        message_retracted_details: LiveChatMessageRetractedDetails,
        user_banned_details: LiveChatUserBannedMessageDetails,
        member_milestone_chat_details: LiveChatMemberMilestoneChatDetails,
        new_sponsor_details: LiveChatNewSponsorDetails,
        super_chat_details: LiveChatSuperChatDetails,
        super_sticker_details: LiveChatSuperStickerDetails,
        membership_gifting_details: LiveChatMembershipGiftingDetails,
        gift_membership_received_details: LiveChatGiftMembershipReceivedDetails,
        poll_details: LiveChatPollDetails,
    }

    pub struct LiveChatTextMessageDetails {
        message_text: String,
    }

    pub struct LiveChatMessageDeletedDetails {
        deleted_message_id: String,
    }

    pub struct LiveChatMessageRetractedDetails {
        retracted_message_id: String,
    }

    pub struct LiveChatUserBannedMessageDetails {
        banned_user_details: ChannelProfileDetails,
        ban_type: BanType,
        ban_duration_seconds: String,
    }

    pub struct LiveChatMemberMilestoneChatDetails {
        user_comment: String,
        member_month: u32,
        member_level_name: String,
    }

    pub struct LiveChatNewSponsorDetails {
        member_level_name: String,
        is_upgrade: bool,
    }

    pub struct LiveChatSuperChatDetails {
        /// Amount in micros of `currency`.
        amount_micros: String,
        currency: String,
        amount_display_string: String,
        user_comment: String,
        tier: u32,
    }

    pub struct LiveChatSuperStickerDetails {
        super_sticker_metadata: SuperStickerMetadata,
        amount_micros: String,
        currency: String,
        amount_display_string: String,
        tier: u32,
    }

    pub struct SuperStickerMetadata {
        sticker_id: String,
        alt_text: String,
        alt_text_language: String,
    }

    pub struct LiveChatMembershipGiftingDetails {
        gift_memberships_count: i32,
        gift_memberships_level_name: String,
    }

    pub struct LiveChatGiftMembershipReceivedDetails {
        member_level_name: String,
        gifter_channel_id: String,
        associated_membership_gifting_message_id: String,
    }

    pub struct LiveChatPollDetails {
        metadata: LiveChatPollDetailsPollMetadata,
        status: PollStatus,
    }

    pub struct LiveChatPollDetailsPollMetadata {
        question_text: String,
        options: Vec<LiveChatPollDetailsPollMetadataPollOption>,
    }

    pub struct LiveChatPollDetailsPollMetadataPollOption {
        option_text: String,
        tally: String,
    }

    pub struct LiveChatMessageAuthorDetails {
        channel_id: String,
        channel_url: String,
        display_name: String,
        profile_image_url: String,
        is_verified: bool,
        is_chat_owner: bool,
        is_chat_sponsor: bool,
        is_chat_moderator: bool,
    }

    /// The response of `liveChatMessages.list`.
    ///
    /// Callers should wait `pollingIntervalMillis` before asking for the
    /// next page.
    pub struct LiveChatMessageListResponse {
        kind: String,
        etag: String,
        next_page_token: String,
        polling_interval_millis: u32,
        offline_at: String,
        page_info: PageInfo,
        token_pagination: TokenPagination,
        event_id: String,
        visitor_id: String,
        items: Vec<LiveChatMessage>,
        active_poll_item: LiveChatMessage,
    }

    /// A ban on a chat participant.
    pub struct LiveChatBan {
        kind: String,
        etag: String,
        id: String,
        snippet: LiveChatBanSnippet,
    }

    pub struct LiveChatBanSnippet {
        live_chat_id: String,
        r#type: BanType,
        ban_duration_seconds: String,
        banned_user_details: ChannelProfileDetails,
    }

    pub struct LiveChatModerator {
        kind: String,
        etag: String,
        id: String,
        snippet: LiveChatModeratorSnippet,
    }

    pub struct LiveChatModeratorSnippet {
        live_chat_id: String,
        moderator_details: ChannelProfileDetails,
    }

    /// A Super Chat or Super Sticker purchase.
    pub struct SuperChatEvent {
        kind: String,
        etag: String,
        id: String,
        snippet: SuperChatEventSnippet,
    }

    pub struct SuperChatEventSnippet {
        channel_id: String,
        supporter_details: ChannelProfileDetails,
        comment_text: String,
        created_at: String,
        amount_micros: String,
        currency: String,
        display_string: String,
        message_type: u32,
        is_super_sticker_event: bool,
        super_sticker_metadata: SuperStickerMetadata,
    }
}

impl LiveChatMessageListResponse {
    pub fn items(&self) -> &[LiveChatMessage] {
        self.items.value().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.value().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_page_decodes_polling_hint() {
        let response: LiveChatMessageListResponse = serde_json::from_value(json!({
            "kind": "youtube#liveChatMessageListResponse",
            "pollingIntervalMillis": 2000,
            "nextPageToken": "GOCjvN",
            "items": [{
                "id": "m1",
                "snippet": {
                    "type": "superChatEvent",
                    "superChatDetails": { "amountMicros": "5000000", "currency": "USD", "tier": 2 }
                },
                "authorDetails": { "displayName": "fan", "isChatSponsor": true }
            }]
        }))
        .unwrap();

        assert_eq!(response.polling_interval_millis, Field::Present(2000));
        let snippet = response.items()[0].snippet.value().unwrap();
        assert_eq!(snippet.r#type, Field::Present(LiveChatMessageType::SuperChatEvent));
        assert!(snippet.text_message_details.is_absent());
    }

    #[test]
    fn unknown_message_type_is_rejected() {
        let result = serde_json::from_value::<LiveChatMessage>(json!({
            "snippet": { "type": "mystery" }
        }));
        assert!(result.is_err());
    }
}
