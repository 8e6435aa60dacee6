//! Playlists, playlist items and playlist images.

use crate::types::Parts;

params! {
    /// Parameters of `playlists.list`.
    pub struct PlaylistsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            channel_id: String = "channelId",
            id: Vec<String> = "id",
            mine: bool = "mine",
            hl: String = "hl",
            max_results: u32 = "maxResults",
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
        ]);
        v.range("maxResults", this.max_results, 0, 50);
    }
}

params! {
    pub struct PlaylistsInsertParams {
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
    pub struct PlaylistsUpdateParams {
        required {
            part: Parts = "part",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct PlaylistsDeleteParams {
        required {
            id: String = "id",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    /// Parameters of `playlistItems.list`.
    pub struct PlaylistItemsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            id: Vec<String> = "id",
            playlist_id: String = "playlistId",
            /// Only return items that contain this video.
            video_id: String = "videoId",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
    validate(this, v) {
        v.exactly_one(&[
            ("id", this.id.is_some()),
            ("playlistId", this.playlist_id.is_some()),
        ]);
        v.range("maxResults", this.max_results, 0, 50);
    }
}

params! {
    pub struct PlaylistItemsInsertParams {
        required {
            part: Parts = "part",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct PlaylistItemsUpdateParams {
        required {
            part: Parts = "part",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct PlaylistItemsDeleteParams {
        required {
            id: String = "id",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    /// Parameters of `playlistImages.list`. `parent` is the playlist id.
    pub struct PlaylistImagesListParams {
        required {}
        optional {
            part: Parts = "part",
            parent: String = "parent",
            max_results: u32 = "maxResults",
            page_token: String = "pageToken",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
    validate(this, v) {
        v.range("maxResults", this.max_results, 0, 50);
    }
}

params! {
    pub struct PlaylistImagesInsertParams {
        required {}
        optional {
            part: Parts = "part",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            on_behalf_of_content_owner_channel: String = "onBehalfOfContentOwnerChannel",
        }
    }
}

params! {
    pub struct PlaylistImagesUpdateParams {
        required {}
        optional {
            part: Parts = "part",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct PlaylistImagesDeleteParams {
        required {
            id: String = "id",
        }
        optional {
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}
