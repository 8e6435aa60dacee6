//! Comments and comment threads.

use crate::field::Field;

string_enum! {
    pub enum CommentViewerRating {
        None => "none",
        Like => "like",
        Dislike => "dislike",
    }
}

string_enum! {
    /// Moderation state of a comment; also the value sent to
    /// `comments.setModerationStatus`.
    pub enum ModerationStatus {
        Published => "published",
        HeldForReview => "heldForReview",
        LikelySpam => "likelySpam",
        Rejected => "rejected",
    }
}

schema! {
    /// A single comment.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/comments>
    pub struct Comment {
        kind: String,
        etag: String,
        id: String,
        snippet: CommentSnippet,
    }

    pub struct CommentSnippet {
        author_display_name: String,
        author_profile_image_url: String,
        author_channel_url: String,
        author_channel_id: CommentSnippetAuthorChannelId,
        channel_id: String,
        video_id: String,
        text_display: String,
        text_original: String,
        parent_id: String,
        can_rate: bool,
        viewer_rating: CommentViewerRating,
        like_count: u32,
        moderation_status: ModerationStatus,
        published_at: String,
        updated_at: String,
    }

    pub struct CommentSnippetAuthorChannelId {
        value: String,
    }

    /// A top-level comment with (a subset of) its replies.
    pub struct CommentThread {
        kind: String,
        etag: String,
        id: String,
        snippet: CommentThreadSnippet,
        replies: CommentThreadReplies,
    }

    pub struct CommentThreadSnippet {
        channel_id: String,
        video_id: String,
        top_level_comment: Comment,
        can_reply: bool,
        total_reply_count: u32,
        is_public: bool,
    }

    pub struct CommentThreadReplies {
        comments: Vec<Comment>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn thread_with_nested_comment_round_trips() {
        let payload = json!({
            "kind": "youtube#commentThread",
            "id": "UgzX",
            "snippet": {
                "videoId": "abc123",
                "topLevelComment": {
                    "kind": "youtube#comment",
                    "id": "UgzX",
                    "snippet": {
                        "textDisplay": "First!",
                        "authorChannelId": { "value": "UCabc" },
                        "likeCount": 4,
                        "viewerRating": "none"
                    }
                },
                "canReply": true,
                "totalReplyCount": 0,
                "isPublic": true
            }
        });
        let thread: CommentThread = serde_json::from_value(payload.clone()).unwrap();
        let top = thread
            .snippet
            .value()
            .and_then(|s| s.top_level_comment.value())
            .unwrap();
        assert_eq!(top.id, Field::Present("UgzX".to_string()));
        assert_eq!(serde_json::to_value(&thread).unwrap(), payload);
    }

    #[test]
    fn moderation_status_rejects_unknown_literal() {
        assert!("spam".parse::<ModerationStatus>().is_err());
        assert_eq!(ModerationStatus::HeldForReview.to_string(), "heldForReview");
    }
}
