//! Channel memberships.

use crate::field::Field;

use super::common::ChannelProfileDetails;

schema! {
    /// A channel member (sponsor).
    pub struct Member {
        kind: String,
        etag: String,
        snippet: MemberSnippet,
    }

    pub struct MemberSnippet {
        creator_channel_id: String,
        member_details: ChannelProfileDetails,
        memberships_details: MembershipsDetails,
    }

    pub struct MembershipsDetails {
        highest_accessible_level: String,
        highest_accessible_level_display_name: String,
        accessible_levels: Vec<String>,
        memberships_duration: MembershipsDuration,
        memberships_duration_at_levels: Vec<MembershipsDurationAtLevel>,
    }

    pub struct MembershipsDuration {
        member_since: String,
        member_total_duration_months: i32,
    }

    pub struct MembershipsDurationAtLevel {
        level: String,
        member_since: String,
        member_total_duration_months: i32,
    }

    /// A pricing level offered by a creator.
    pub struct MembershipsLevel {
        kind: String,
        etag: String,
        id: String,
        snippet: MembershipsLevelSnippet,
    }

    pub struct MembershipsLevelSnippet {
        creator_channel_id: String,
        level_details: LevelDetails,
    }

    pub struct LevelDetails {
        display_name: String,
    }
}
