//! Caption tracks.

use crate::field::Field;

string_enum! {
    pub enum CaptionTrackKind {
        Standard => "standard",
        Asr => "ASR",
        Forced => "forced",
    }
}

string_enum! {
    pub enum AudioTrackType {
        Unknown => "unknown",
        Primary => "primary",
        Commentary => "commentary",
        Descriptive => "descriptive",
    }
}

string_enum! {
    pub enum CaptionStatus {
        Serving => "serving",
        Syncing => "syncing",
        Failed => "failed",
    }
}

string_enum! {
    pub enum CaptionFailureReason {
        UnknownFormat => "unknownFormat",
        UnsupportedFormat => "unsupportedFormat",
        ProcessingFailed => "processingFailed",
    }
}

string_enum! {
    /// Caption file formats accepted by `captions.download`'s `tfmt`.
    pub enum CaptionFormat {
        Sbv => "sbv",
        Scc => "scc",
        Srt => "srt",
        Ttml => "ttml",
        Vtt => "vtt",
    }
}

schema! {
    /// A caption track associated with exactly one video.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/captions>
    pub struct Caption {
        kind: String,
        etag: String,
        id: String,
        snippet: CaptionSnippet,
    }

    pub struct CaptionSnippet {
        video_id: String,
        last_updated: String,
        track_kind: CaptionTrackKind,
        /// BCP-47 language tag.
        language: String,
        name: String,
        audio_track_type: AudioTrackType,
        is_cc: bool,
        is_large: bool,
        is_easy_reader: bool,
        is_draft: bool,
        is_auto_synced: bool,
        status: CaptionStatus,
        failure_reason: CaptionFailureReason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn asr_track_kind_is_upper_case() {
        let caption: Caption = serde_json::from_value(json!({
            "snippet": { "trackKind": "ASR", "language": "en", "isDraft": false }
        }))
        .unwrap();
        let snippet = caption.snippet.value().unwrap();
        assert_eq!(snippet.track_kind, Field::Present(CaptionTrackKind::Asr));
        assert!(serde_json::from_value::<CaptionTrackKind>(json!("asr")).is_err());
    }
}
