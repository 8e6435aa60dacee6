use crate::schema::CaptionFormat;
use crate::types::Parts;

params! {
    pub struct CaptionsListParams {
        required {
            part: Parts = "part",
            video_id: String = "videoId",
        }
        optional {
            id: Vec<String> = "id",
            on_behalf_of: String = "onBehalfOf",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    /// Parameters of `captions.insert`. The caption file is sent as media.
    pub struct CaptionsInsertParams {
        required {
            part: Parts = "part",
        }
        optional {
            on_behalf_of: String = "onBehalfOf",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            /// Let YouTube sync the caption text to the audio track.
            sync: bool = "sync",
        }
    }
}

params! {
    pub struct CaptionsUpdateParams {
        required {
            part: Parts = "part",
        }
        optional {
            on_behalf_of: String = "onBehalfOf",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
            sync: bool = "sync",
        }
    }
}

params! {
    /// Parameters of `captions.download`. `id` is a path parameter.
    pub struct CaptionsDownloadParams {
        path {
            id: String = "id",
        }
        required {}
        optional {
            /// Convert the track to this format.
            tfmt: CaptionFormat = "tfmt",
            /// Translate the track into this language.
            tlang: String = "tlang",
            on_behalf_of: String = "onBehalfOf",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

params! {
    pub struct CaptionsDeleteParams {
        required {
            id: String = "id",
        }
        optional {
            on_behalf_of: String = "onBehalfOf",
            on_behalf_of_content_owner: String = "onBehalfOfContentOwner",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Params, Query};

    #[test]
    fn download_id_goes_to_path_not_query() {
        let mut params = CaptionsDownloadParams::new("AUieDaZ");
        params.tfmt = Some(CaptionFormat::Vtt);

        assert_eq!(params.path_param("id").as_deref(), Some("AUieDaZ"));
        let mut query = Query::new();
        params.append_query(&mut query);
        assert_eq!(query.pairs(), &[("tfmt", "vtt".to_string())]);
    }

    #[test]
    fn download_requires_id() {
        let err = CaptionsDownloadParams::new("").check("youtube.captions.download").unwrap_err();
        assert_eq!(err.fields(), vec!["id"]);
    }

    #[test]
    fn list_requires_video_id() {
        let err = CaptionsListParams::new("snippet", " ").check("youtube.captions.list").unwrap_err();
        assert_eq!(err.fields(), vec!["videoId"]);
    }
}
