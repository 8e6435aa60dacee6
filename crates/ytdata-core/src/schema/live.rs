//! Live broadcasts, live streams and cuepoints.

use crate::field::Field;

use super::common::{PrivacyStatus, ThumbnailDetails};

string_enum! {
    pub enum LifeCycleStatus {
        Created => "created",
        Ready => "ready",
        TestStarting => "testStarting",
        Testing => "testing",
        LiveStarting => "liveStarting",
        Live => "live",
        Complete => "complete",
        Revoked => "revoked",
    }
}

string_enum! {
    pub enum RecordingStatus {
        NotRecording => "notRecording",
        Recording => "recording",
        Recorded => "recorded",
    }
}

string_enum! {
    pub enum LiveBroadcastPriority {
        Low => "low",
        Normal => "normal",
        High => "high",
    }
}

string_enum! {
    pub enum ClosedCaptionsType {
        ClosedCaptionsDisabled => "closedCaptionsDisabled",
        ClosedCaptionsHttpPost => "closedCaptionsHttpPost",
        ClosedCaptionsEmbedded => "closedCaptionsEmbedded",
    }
}

string_enum! {
    pub enum BroadcastProjection {
        Rectangular => "rectangular",
        Spherical => "360",
        Mesh => "mesh",
    }
}

string_enum! {
    pub enum LatencyPreference {
        Normal => "normal",
        Low => "low",
        UltraLow => "ultraLow",
    }
}

string_enum! {
    pub enum StereoLayout {
        Mono => "mono",
        LeftRight => "leftRight",
        TopBottom => "topBottom",
    }
}

string_enum! {
    pub enum ScheduleStrategy {
        ScheduleStrategyUnspecified => "scheduleStrategyUnspecified",
        Concurrent => "concurrent",
        NonConcurrent => "nonConcurrent",
    }
}

string_enum! {
    pub enum CueType {
        CueTypeUnspecified => "cueTypeUnspecified",
        CueTypeAd => "cueTypeAd",
    }
}

string_enum! {
    /// Target state for `liveBroadcasts.transition`.
    pub enum BroadcastStatus {
        Testing => "testing",
        Live => "live",
        Complete => "complete",
    }
}

string_enum! {
    pub enum IngestionType {
        Rtmp => "rtmp",
        Dash => "dash",
        Webrtc => "webrtc",
        Hls => "hls",
    }
}

string_enum! {
    pub enum StreamResolution {
        R240p => "240p",
        R360p => "360p",
        R480p => "480p",
        R720p => "720p",
        R1080p => "1080p",
        R1440p => "1440p",
        R2160p => "2160p",
        Variable => "variable",
    }
}

string_enum! {
    pub enum StreamFrameRate {
        Fps30 => "30fps",
        Fps60 => "60fps",
        Variable => "variable",
    }
}

string_enum! {
    pub enum StreamStatus {
        Created => "created",
        Ready => "ready",
        Active => "active",
        Inactive => "inactive",
        Error => "error",
    }
}

string_enum! {
    pub enum StreamHealth {
        Good => "good",
        Ok => "ok",
        Bad => "bad",
        NoData => "noData",
        Revoked => "revoked",
    }
}

string_enum! {
    pub enum IssueSeverity {
        Info => "info",
        Warning => "warning",
        Error => "error",
    }
}

schema! {
    /// A scheduled or running live event.
    ///
    /// See: <https://developers.google.com/youtube/v3/live/docs/liveBroadcasts>
    pub struct LiveBroadcast {
        kind: String,
        etag: String,
        id: String,
        snippet: LiveBroadcastSnippet,
        status: LiveBroadcastStatus,
        content_details: LiveBroadcastContentDetails,
        statistics: LiveBroadcastStatistics,
        monetization_details: LiveBroadcastMonetizationDetails,
    }

    pub struct LiveBroadcastSnippet {
        published_at: String,
        channel_id: String,
        title: String,
        description: String,
        thumbnails: ThumbnailDetails,
        scheduled_start_time: String,
        scheduled_end_time: String,
        actual_start_time: String,
        actual_end_time: String,
        is_default_broadcast: bool,
        live_chat_id: String,
    }

    pub struct LiveBroadcastStatus {
        life_cycle_status: LifeCycleStatus,
        privacy_status: PrivacyStatus,
        recording_status: RecordingStatus,
        made_for_kids: bool,
        self_declared_made_for_kids: bool,
        live_broadcast_priority: LiveBroadcastPriority,
    }

    pub struct LiveBroadcastContentDetails {
        bound_stream_id: String,
        bound_stream_last_update_time_ms: String,
        monitor_stream: MonitorStreamInfo,
        enable_embed: bool,
        enable_dvr: bool,
        record_from_start: bool,
        enable_closed_captions: bool,
        closed_captions_type: ClosedCaptionsType,
        projection: BroadcastProjection,
        enable_low_latency: bool,
        latency_preference: LatencyPreference,
        enable_auto_start: bool,
        enable_auto_stop: bool,
        stereo_layout: StereoLayout,
    }

    pub struct MonitorStreamInfo {
        enable_monitor_stream: bool,
        broadcast_stream_delay_ms: u32,
        embed_html: String,
    }

    pub struct LiveBroadcastStatistics {
        total_chat_count: String,
    }

    pub struct LiveBroadcastMonetizationDetails {
        cuepoint_schedule: CuepointSchedule,
    }

    pub struct CuepointSchedule {
        enabled: bool,
        pause_ads_until: String,
        schedule_strategy: ScheduleStrategy,
        repeat_interval_secs: u32,
    }

    /// An ad break inserted into a running broadcast.
    pub struct Cuepoint {
        id: String,
        etag: String,
        insertion_offset_time_ms: String,
        walltime_ms: String,
        duration_secs: u32,
        cue_type: CueType,
    }

    /// A video stream that can be bound to broadcasts.
    pub struct LiveStream {
        kind: String,
        etag: String,
        id: String,
        snippet: LiveStreamSnippet,
        cdn: CdnSettings,
        status: LiveStreamStatus,
        content_details: LiveStreamContentDetails,
    }

    pub struct LiveStreamSnippet {
        published_at: String,
        channel_id: String,
        title: String,
        description: String,
        is_default_stream: bool,
    }

    pub struct CdnSettings {
        ingestion_type: IngestionType,
        ingestion_info: IngestionInfo,
        resolution: StreamResolution,
        frame_rate: StreamFrameRate,
        format: String,
    }

    /// Where the encoder should push the stream.
    pub struct IngestionInfo {
        stream_name: String,
        ingestion_address: String,
        backup_ingestion_address: String,
        rtmps_ingestion_address: String,
        rtmps_backup_ingestion_address: String,
    }

    pub struct LiveStreamStatus {
        stream_status: StreamStatus,
        health_status: LiveStreamHealthStatus,
    }

    pub struct LiveStreamHealthStatus {
        status: StreamHealth,
        last_update_time_seconds: String,
        configuration_issues: Vec<LiveStreamConfigurationIssue>,
    }

    pub struct LiveStreamConfigurationIssue {
        /// One of several dozen issue codes, e.g. `bitrateLow`.
        r#type: String,
        severity: IssueSeverity,
        reason: String,
        description: String,
    }

    pub struct LiveStreamContentDetails {
        closed_captions_ingestion_url: String,
        is_reusable: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn broadcast_status_round_trips() {
        let payload = json!({
            "kind": "youtube#liveBroadcast",
            "id": "bcast1",
            "snippet": { "title": "Launch", "liveChatId": "Cg0KC2JjYXN0MQ" },
            "status": { "lifeCycleStatus": "testStarting", "privacyStatus": "unlisted" },
            "contentDetails": { "projection": "360", "latencyPreference": "ultraLow" }
        });
        let broadcast: LiveBroadcast = serde_json::from_value(payload.clone()).unwrap();
        let status = broadcast.status.value().unwrap();
        assert_eq!(status.life_cycle_status, Field::Present(LifeCycleStatus::TestStarting));
        assert_eq!(serde_json::to_value(&broadcast).unwrap(), payload);
    }

    #[test]
    fn stream_resolution_literals_start_with_digits() {
        assert_eq!("1080p".parse::<StreamResolution>().unwrap(), StreamResolution::R1080p);
        assert_eq!(StreamFrameRate::Fps60.as_str(), "60fps");
        assert!("4k".parse::<StreamResolution>().is_err());
    }
}
