//! Abuse reports, test items, third-party links and thumbnail responses.

use crate::field::Field;

use super::common::ThumbnailDetails;

string_enum! {
    pub enum ThirdPartyLinkType {
        LinkUnspecified => "linkUnspecified",
        ChannelToStoreLink => "channelToStoreLink",
    }
}

string_enum! {
    pub enum LinkStatus {
        Unknown => "unknown",
        Failed => "failed",
        Pending => "pending",
        Linked => "linked",
    }
}

string_enum! {
    pub enum BillingStatus {
        BillingStatusUnspecified => "billingStatusUnspecified",
        BillingStatusPending => "billingStatusPending",
        BillingStatusActive => "billingStatusActive",
        BillingStatusInactive => "billingStatusInactive",
    }
}

schema! {
    /// The body of `abuseReports.insert`.
    pub struct AbuseReport {
        subject: Entity,
        abuse_types: Vec<AbuseType>,
        description: String,
        related_entities: Vec<RelatedEntity>,
    }

    pub struct Entity {
        type_id: String,
        id: String,
        url: String,
    }

    pub struct AbuseType {
        id: String,
    }

    pub struct RelatedEntity {
        entity: Entity,
    }

    /// Payload of the `tests.insert` endpoint.
    pub struct TestItem {
        id: String,
        featured_part: bool,
        gaia: String,
        snippet: TestItemSnippet,
    }

    pub struct TestItemSnippet {}

    /// A link between a channel and a third-party store.
    pub struct ThirdPartyLink {
        kind: String,
        etag: String,
        linking_token: String,
        snippet: ThirdPartyLinkSnippet,
        status: ThirdPartyLinkStatus,
    }

    pub struct ThirdPartyLinkSnippet {
        r#type: ThirdPartyLinkType,
        channel_to_store_link: ChannelToStoreLinkDetails,
    }

    pub struct ChannelToStoreLinkDetails {
        store_name: String,
        store_url: String,
        merchant_id: String,
        billing_details: ChannelToStoreLinkDetailsBillingDetails,
    }

    pub struct ChannelToStoreLinkDetailsBillingDetails {
        billing_status: BillingStatus,
    }

    pub struct ThirdPartyLinkStatus {
        link_status: LinkStatus,
    }

    /// The response of `thumbnails.set`.
    pub struct ThumbnailSetResponse {
        kind: String,
        etag: String,
        event_id: String,
        visitor_id: String,
        items: Vec<ThumbnailDetails>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn third_party_link_round_trips() {
        let payload = json!({
            "kind": "youtube#thirdPartyLink",
            "linkingToken": "tok",
            "snippet": {
                "type": "channelToStoreLink",
                "channelToStoreLink": { "storeName": "Shop", "merchantId": "123" }
            },
            "status": { "linkStatus": "linked" }
        });
        let link: ThirdPartyLink = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(
            link.status.value().unwrap().link_status,
            Field::Present(LinkStatus::Linked)
        );
        assert_eq!(serde_json::to_value(&link).unwrap(), payload);
    }
}
