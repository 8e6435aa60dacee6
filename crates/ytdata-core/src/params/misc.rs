//! Abuse reports, i18n lookups, tests and third-party links.

use crate::schema::ThirdPartyLinkType;
use crate::types::Parts;

params! {
    pub struct AbuseReportsInsertParams {
        required {
            part: Parts = "part",
        }
        optional {}
    }
}

params! {
    pub struct I18nLanguagesListParams {
        required {
            part: Parts = "part",
        }
        optional {
            hl: String = "hl",
        }
    }
}

params! {
    pub struct I18nRegionsListParams {
        required {
            part: Parts = "part",
        }
        optional {
            hl: String = "hl",
        }
    }
}

params! {
    pub struct TestsInsertParams {
        required {
            part: Parts = "part",
        }
        optional {
            external_channel_id: String = "externalChannelId",
        }
    }
}

params! {
    pub struct ThirdPartyLinksListParams {
        required {
            part: Parts = "part",
        }
        optional {
            linking_token: String = "linkingToken",
            r#type: ThirdPartyLinkType = "type",
            external_channel_id: String = "externalChannelId",
        }
    }
}

params! {
    pub struct ThirdPartyLinksInsertParams {
        required {
            part: Parts = "part",
        }
        optional {
            external_channel_id: String = "externalChannelId",
        }
    }
}

params! {
    pub struct ThirdPartyLinksUpdateParams {
        required {
            part: Parts = "part",
        }
        optional {
            external_channel_id: String = "externalChannelId",
        }
    }
}

params! {
    pub struct ThirdPartyLinksDeleteParams {
        required {
            linking_token: String = "linkingToken",
            r#type: ThirdPartyLinkType = "type",
        }
        optional {
            part: Parts = "part",
            external_channel_id: String = "externalChannelId",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Params, Query};

    #[test]
    fn third_party_link_delete_encodes_type() {
        let params = ThirdPartyLinksDeleteParams::new("tok", ThirdPartyLinkType::ChannelToStoreLink);
        params.check("youtube.thirdPartyLinks.delete").unwrap();

        let mut query = Query::new();
        params.append_query(&mut query);
        assert_eq!(query.get("type"), Some("channelToStoreLink"));
        assert_eq!(query.get("linkingToken"), Some("tok"));
    }
}
