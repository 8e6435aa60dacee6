//! Comments and comment threads.

use crate::schema::ModerationStatus;
use crate::types::Parts;

string_enum! {
    /// Format of the `textDisplay` field in returned comments.
    pub enum TextFormat {
        Html => "html",
        PlainText => "plainText",
    }
}

string_enum! {
    pub enum CommentOrder {
        Time => "time",
        Relevance => "relevance",
    }
}

params! {
    /// Parameters of `comments.list`.
    pub struct CommentsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            id: Vec<String> = "id",
            /// List the replies to this top-level comment.
            parent_id: String = "parentId",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            text_format: TextFormat = "textFormat",
        }
    }
    validate(this, v) {
        v.exactly_one(&[
            ("id", this.id.is_some()),
            ("parentId", this.parent_id.is_some()),
        ]);
        v.range("maxResults", this.max_results, 1, 100);
        v.only_with("maxResults", this.max_results.is_some(), this.id.is_none(), "without id");
        v.only_with("pageToken", this.page_token.is_some(), this.id.is_none(), "without id");
    }
}

params! {
    pub struct CommentsInsertParams {
        required {
            part: Parts = "part",
        }
        optional {}
    }
}

params! {
    pub struct CommentsUpdateParams {
        required {
            part: Parts = "part",
        }
        optional {}
    }
}

params! {
    pub struct CommentsDeleteParams {
        required {
            id: String = "id",
        }
        optional {}
    }
}

params! {
    pub struct CommentsMarkAsSpamParams {
        required {
            id: Vec<String> = "id",
        }
        optional {}
    }
}

params! {
    /// Parameters of `comments.setModerationStatus`.
    pub struct CommentsSetModerationStatusParams {
        required {
            id: Vec<String> = "id",
            moderation_status: ModerationStatus = "moderationStatus",
        }
        optional {
            /// Also reject future comments from the author.
            ban_author: bool = "banAuthor",
        }
    }
    validate(this, v) {
        v.only_with(
            "banAuthor",
            this.ban_author.is_some(),
            this.moderation_status == ModerationStatus::Rejected,
            "when moderationStatus is rejected",
        );
    }
}

params! {
    /// Parameters of `commentThreads.list`.
    pub struct CommentThreadsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            all_threads_related_to_channel_id: String = "allThreadsRelatedToChannelId",
            channel_id: String = "channelId",
            id: Vec<String> = "id",
            video_id: String = "videoId",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            moderation_status: ModerationStatus = "moderationStatus",
            order: CommentOrder = "order",
            search_terms: String = "searchTerms",
            text_format: TextFormat = "textFormat",
        }
    }
    validate(this, v) {
        v.exactly_one(&[
            ("allThreadsRelatedToChannelId", this.all_threads_related_to_channel_id.is_some()),
            ("channelId", this.channel_id.is_some()),
            ("id", this.id.is_some()),
            ("videoId", this.video_id.is_some()),
        ]);
        v.range("maxResults", this.max_results, 1, 100);
    }
}

params! {
    pub struct CommentThreadsInsertParams {
        required {
            part: Parts = "part",
        }
        optional {}
    }
}
