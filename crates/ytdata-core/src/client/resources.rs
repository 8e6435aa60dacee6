//! Per-resource facades over [`Client::execute`].

use bytes::Bytes;

use super::{Client, Media, Payload};
use crate::operation::*;
use crate::params::*;
use crate::schema::*;
use crate::transport::Transport;
use crate::Result;

macro_rules! resources {
    ($(
        $(#[$meta:meta])*
        $accessor:ident => $name:ident;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub struct $name<'a, T> {
                client: &'a Client<T>,
            }
        )*

        impl<T: Transport> Client<T> {
            $(
                $(#[$meta])*
                pub fn $accessor(&self) -> $name<'_, T> {
                    $name { client: self }
                }
            )*
        }
    };
}

resources! {
    /// `abuseReports` methods.
    abuse_reports => AbuseReports;
    /// `activities` methods.
    activities => Activities;
    /// `captions` methods.
    captions => Captions;
    /// `channelBanners` methods.
    channel_banners => ChannelBanners;
    /// `channels` methods.
    channels => Channels;
    /// `channelSections` methods.
    channel_sections => ChannelSections;
    /// `comments` methods.
    comments => Comments;
    /// `commentThreads` methods.
    comment_threads => CommentThreads;
    /// `i18nLanguages` methods.
    i18n_languages => I18nLanguages;
    /// `i18nRegions` methods.
    i18n_regions => I18nRegions;
    /// `liveBroadcasts` methods.
    live_broadcasts => LiveBroadcasts;
    /// `liveChatBans` methods.
    live_chat_bans => LiveChatBans;
    /// `liveChatMessages` methods.
    live_chat_messages => LiveChatMessages;
    /// `liveChatModerators` methods.
    live_chat_moderators => LiveChatModerators;
    /// `liveStreams` methods.
    live_streams => LiveStreams;
    /// `members` methods.
    members => Members;
    /// `membershipsLevels` methods.
    memberships_levels => MembershipsLevels;
    /// `playlistImages` methods.
    playlist_images => PlaylistImages;
    /// `playlistItems` methods.
    playlist_items => PlaylistItems;
    /// `playlists` methods.
    playlists => Playlists;
    /// `search` methods.
    search => Search;
    /// `subscriptions` methods.
    subscriptions => Subscriptions;
    /// `superChatEvents` methods.
    super_chat_events => SuperChatEvents;
    /// `tests` methods.
    tests => Tests;
    /// `thirdPartyLinks` methods.
    third_party_links => ThirdPartyLinks;
    /// `thumbnails` methods.
    thumbnails => Thumbnails;
    /// `videoAbuseReportReasons` methods.
    video_abuse_report_reasons => VideoAbuseReportReasons;
    /// `videoCategories` methods.
    video_categories => VideoCategories;
    /// `videos` methods.
    videos => Videos;
    /// `watermarks` methods.
    watermarks => Watermarks;
}

impl<T: Transport> AbuseReports<'_, T> {
    pub async fn insert(
        &self,
        params: &AbuseReportsInsertParams,
        report: &AbuseReport,
    ) -> Result<AbuseReport> {
        self.client
            .execute::<AbuseReportsInsert>(params, Payload::Json(report))
            .await
    }
}

impl<T: Transport> Activities<'_, T> {
    pub async fn list(&self, params: &ActivitiesListParams) -> Result<ActivityListResponse> {
        self.client.execute::<ActivitiesList>(params, Payload::None).await
    }
}

impl<T: Transport> Captions<'_, T> {
    pub async fn list(&self, params: &CaptionsListParams) -> Result<CaptionListResponse> {
        self.client.execute::<CaptionsList>(params, Payload::None).await
    }

    /// Uploads a caption track file with its metadata.
    pub async fn insert(
        &self,
        params: &CaptionsInsertParams,
        caption: &Caption,
        media: Media,
    ) -> Result<Caption> {
        self.client
            .execute::<CaptionsInsert>(params, Payload::Multipart(caption, media))
            .await
    }

    pub async fn update(&self, params: &CaptionsUpdateParams, caption: &Caption) -> Result<Caption> {
        self.client
            .execute::<CaptionsUpdate>(params, Payload::Json(caption))
            .await
    }

    /// Updates the metadata and replaces the caption file.
    pub async fn update_with_media(
        &self,
        params: &CaptionsUpdateParams,
        caption: &Caption,
        media: Media,
    ) -> Result<Caption> {
        self.client
            .execute::<CaptionsUpdate>(params, Payload::Multipart(caption, media))
            .await
    }

    pub async fn download(&self, params: &CaptionsDownloadParams) -> Result<Bytes> {
        self.client.execute::<CaptionsDownload>(params, Payload::None).await
    }

    pub async fn delete(&self, params: &CaptionsDeleteParams) -> Result<()> {
        self.client.execute::<CaptionsDelete>(params, Payload::None).await
    }
}

impl<T: Transport> ChannelBanners<'_, T> {
    /// Uploads a banner image. The response carries its URL.
    pub async fn insert(
        &self,
        params: &ChannelBannersInsertParams,
        image: Media,
    ) -> Result<ChannelBannerResource> {
        self.client
            .execute::<ChannelBannersInsert>(params, Payload::Media(image))
            .await
    }
}

impl<T: Transport> Channels<'_, T> {
    pub async fn list(&self, params: &ChannelsListParams) -> Result<ChannelListResponse> {
        self.client.execute::<ChannelsList>(params, Payload::None).await
    }

    pub async fn update(&self, params: &ChannelsUpdateParams, channel: &Channel) -> Result<Channel> {
        self.client
            .execute::<ChannelsUpdate>(params, Payload::Json(channel))
            .await
    }
}

impl<T: Transport> ChannelSections<'_, T> {
    pub async fn list(&self, params: &ChannelSectionsListParams) -> Result<ChannelSectionListResponse> {
        self.client
            .execute::<ChannelSectionsList>(params, Payload::None)
            .await
    }

    pub async fn insert(
        &self,
        params: &ChannelSectionsInsertParams,
        section: &ChannelSection,
    ) -> Result<ChannelSection> {
        self.client
            .execute::<ChannelSectionsInsert>(params, Payload::Json(section))
            .await
    }

    pub async fn update(
        &self,
        params: &ChannelSectionsUpdateParams,
        section: &ChannelSection,
    ) -> Result<ChannelSection> {
        self.client
            .execute::<ChannelSectionsUpdate>(params, Payload::Json(section))
            .await
    }

    pub async fn delete(&self, params: &ChannelSectionsDeleteParams) -> Result<()> {
        self.client
            .execute::<ChannelSectionsDelete>(params, Payload::None)
            .await
    }
}

impl<T: Transport> Comments<'_, T> {
    pub async fn list(&self, params: &CommentsListParams) -> Result<CommentListResponse> {
        self.client.execute::<CommentsList>(params, Payload::None).await
    }

    pub async fn insert(&self, params: &CommentsInsertParams, comment: &Comment) -> Result<Comment> {
        self.client
            .execute::<CommentsInsert>(params, Payload::Json(comment))
            .await
    }

    pub async fn update(&self, params: &CommentsUpdateParams, comment: &Comment) -> Result<Comment> {
        self.client
            .execute::<CommentsUpdate>(params, Payload::Json(comment))
            .await
    }

    pub async fn delete(&self, params: &CommentsDeleteParams) -> Result<()> {
        self.client.execute::<CommentsDelete>(params, Payload::None).await
    }

    pub async fn mark_as_spam(&self, params: &CommentsMarkAsSpamParams) -> Result<()> {
        self.client
            .execute::<CommentsMarkAsSpam>(params, Payload::None)
            .await
    }

    pub async fn set_moderation_status(
        &self,
        params: &CommentsSetModerationStatusParams,
    ) -> Result<()> {
        self.client
            .execute::<CommentsSetModerationStatus>(params, Payload::None)
            .await
    }
}

impl<T: Transport> CommentThreads<'_, T> {
    pub async fn list(&self, params: &CommentThreadsListParams) -> Result<CommentThreadListResponse> {
        self.client
            .execute::<CommentThreadsList>(params, Payload::None)
            .await
    }

    pub async fn insert(
        &self,
        params: &CommentThreadsInsertParams,
        thread: &CommentThread,
    ) -> Result<CommentThread> {
        self.client
            .execute::<CommentThreadsInsert>(params, Payload::Json(thread))
            .await
    }
}

impl<T: Transport> I18nLanguages<'_, T> {
    pub async fn list(&self, params: &I18nLanguagesListParams) -> Result<I18nLanguageListResponse> {
        self.client
            .execute::<I18nLanguagesList>(params, Payload::None)
            .await
    }
}

impl<T: Transport> I18nRegions<'_, T> {
    pub async fn list(&self, params: &I18nRegionsListParams) -> Result<I18nRegionListResponse> {
        self.client.execute::<I18nRegionsList>(params, Payload::None).await
    }
}

impl<T: Transport> LiveBroadcasts<'_, T> {
    pub async fn list(&self, params: &LiveBroadcastsListParams) -> Result<LiveBroadcastListResponse> {
        self.client
            .execute::<LiveBroadcastsList>(params, Payload::None)
            .await
    }

    pub async fn insert(
        &self,
        params: &LiveBroadcastsInsertParams,
        broadcast: &LiveBroadcast,
    ) -> Result<LiveBroadcast> {
        self.client
            .execute::<LiveBroadcastsInsert>(params, Payload::Json(broadcast))
            .await
    }

    pub async fn update(
        &self,
        params: &LiveBroadcastsUpdateParams,
        broadcast: &LiveBroadcast,
    ) -> Result<LiveBroadcast> {
        self.client
            .execute::<LiveBroadcastsUpdate>(params, Payload::Json(broadcast))
            .await
    }

    pub async fn delete(&self, params: &LiveBroadcastsDeleteParams) -> Result<()> {
        self.client
            .execute::<LiveBroadcastsDelete>(params, Payload::None)
            .await
    }

    pub async fn bind(&self, params: &LiveBroadcastsBindParams) -> Result<LiveBroadcast> {
        self.client
            .execute::<LiveBroadcastsBind>(params, Payload::None)
            .await
    }

    pub async fn transition(&self, params: &LiveBroadcastsTransitionParams) -> Result<LiveBroadcast> {
        self.client
            .execute::<LiveBroadcastsTransition>(params, Payload::None)
            .await
    }

    pub async fn insert_cuepoint(
        &self,
        params: &LiveBroadcastsInsertCuepointParams,
        cuepoint: &Cuepoint,
    ) -> Result<Cuepoint> {
        self.client
            .execute::<LiveBroadcastsInsertCuepoint>(params, Payload::Json(cuepoint))
            .await
    }
}

impl<T: Transport> LiveChatBans<'_, T> {
    pub async fn insert(&self, params: &LiveChatBansInsertParams, ban: &LiveChatBan) -> Result<LiveChatBan> {
        self.client
            .execute::<LiveChatBansInsert>(params, Payload::Json(ban))
            .await
    }

    pub async fn delete(&self, params: &LiveChatBansDeleteParams) -> Result<()> {
        self.client
            .execute::<LiveChatBansDelete>(params, Payload::None)
            .await
    }
}

impl<T: Transport> LiveChatMessages<'_, T> {
    pub async fn list(&self, params: &LiveChatMessagesListParams) -> Result<LiveChatMessageListResponse> {
        self.client
            .execute::<LiveChatMessagesList>(params, Payload::None)
            .await
    }

    pub async fn insert(
        &self,
        params: &LiveChatMessagesInsertParams,
        message: &LiveChatMessage,
    ) -> Result<LiveChatMessage> {
        self.client
            .execute::<LiveChatMessagesInsert>(params, Payload::Json(message))
            .await
    }

    pub async fn delete(&self, params: &LiveChatMessagesDeleteParams) -> Result<()> {
        self.client
            .execute::<LiveChatMessagesDelete>(params, Payload::None)
            .await
    }

    pub async fn transition(&self, params: &LiveChatMessagesTransitionParams) -> Result<LiveChatMessage> {
        self.client
            .execute::<LiveChatMessagesTransition>(params, Payload::None)
            .await
    }
}

impl<T: Transport> LiveChatModerators<'_, T> {
    pub async fn list(
        &self,
        params: &LiveChatModeratorsListParams,
    ) -> Result<LiveChatModeratorListResponse> {
        self.client
            .execute::<LiveChatModeratorsList>(params, Payload::None)
            .await
    }

    pub async fn insert(
        &self,
        params: &LiveChatModeratorsInsertParams,
        moderator: &LiveChatModerator,
    ) -> Result<LiveChatModerator> {
        self.client
            .execute::<LiveChatModeratorsInsert>(params, Payload::Json(moderator))
            .await
    }

    pub async fn delete(&self, params: &LiveChatModeratorsDeleteParams) -> Result<()> {
        self.client
            .execute::<LiveChatModeratorsDelete>(params, Payload::None)
            .await
    }
}

impl<T: Transport> LiveStreams<'_, T> {
    pub async fn list(&self, params: &LiveStreamsListParams) -> Result<LiveStreamListResponse> {
        self.client.execute::<LiveStreamsList>(params, Payload::None).await
    }

    pub async fn insert(&self, params: &LiveStreamsInsertParams, stream: &LiveStream) -> Result<LiveStream> {
        self.client
            .execute::<LiveStreamsInsert>(params, Payload::Json(stream))
            .await
    }

    pub async fn update(&self, params: &LiveStreamsUpdateParams, stream: &LiveStream) -> Result<LiveStream> {
        self.client
            .execute::<LiveStreamsUpdate>(params, Payload::Json(stream))
            .await
    }

    pub async fn delete(&self, params: &LiveStreamsDeleteParams) -> Result<()> {
        self.client
            .execute::<LiveStreamsDelete>(params, Payload::None)
            .await
    }
}

impl<T: Transport> Members<'_, T> {
    pub async fn list(&self, params: &MembersListParams) -> Result<MemberListResponse> {
        self.client.execute::<MembersList>(params, Payload::None).await
    }
}

impl<T: Transport> MembershipsLevels<'_, T> {
    pub async fn list(
        &self,
        params: &MembershipsLevelsListParams,
    ) -> Result<MembershipsLevelListResponse> {
        self.client
            .execute::<MembershipsLevelsList>(params, Payload::None)
            .await
    }
}

impl<T: Transport> PlaylistImages<'_, T> {
    pub async fn list(&self, params: &PlaylistImagesListParams) -> Result<PlaylistImageListResponse> {
        self.client
            .execute::<PlaylistImagesList>(params, Payload::None)
            .await
    }

    pub async fn insert(
        &self,
        params: &PlaylistImagesInsertParams,
        image: &PlaylistImage,
    ) -> Result<PlaylistImage> {
        self.client
            .execute::<PlaylistImagesInsert>(params, Payload::Json(image))
            .await
    }

    pub async fn insert_with_media(
        &self,
        params: &PlaylistImagesInsertParams,
        image: &PlaylistImage,
        media: Media,
    ) -> Result<PlaylistImage> {
        self.client
            .execute::<PlaylistImagesInsert>(params, Payload::Multipart(image, media))
            .await
    }

    pub async fn update(
        &self,
        params: &PlaylistImagesUpdateParams,
        image: &PlaylistImage,
    ) -> Result<PlaylistImage> {
        self.client
            .execute::<PlaylistImagesUpdate>(params, Payload::Json(image))
            .await
    }

    pub async fn update_with_media(
        &self,
        params: &PlaylistImagesUpdateParams,
        image: &PlaylistImage,
        media: Media,
    ) -> Result<PlaylistImage> {
        self.client
            .execute::<PlaylistImagesUpdate>(params, Payload::Multipart(image, media))
            .await
    }

    pub async fn delete(&self, params: &PlaylistImagesDeleteParams) -> Result<()> {
        self.client
            .execute::<PlaylistImagesDelete>(params, Payload::None)
            .await
    }
}

impl<T: Transport> PlaylistItems<'_, T> {
    pub async fn list(&self, params: &PlaylistItemsListParams) -> Result<PlaylistItemListResponse> {
        self.client
            .execute::<PlaylistItemsList>(params, Payload::None)
            .await
    }

    pub async fn insert(&self, params: &PlaylistItemsInsertParams, item: &PlaylistItem) -> Result<PlaylistItem> {
        self.client
            .execute::<PlaylistItemsInsert>(params, Payload::Json(item))
            .await
    }

    pub async fn update(&self, params: &PlaylistItemsUpdateParams, item: &PlaylistItem) -> Result<PlaylistItem> {
        self.client
            .execute::<PlaylistItemsUpdate>(params, Payload::Json(item))
            .await
    }

    pub async fn delete(&self, params: &PlaylistItemsDeleteParams) -> Result<()> {
        self.client
            .execute::<PlaylistItemsDelete>(params, Payload::None)
            .await
    }
}

impl<T: Transport> Playlists<'_, T> {
    pub async fn list(&self, params: &PlaylistsListParams) -> Result<PlaylistListResponse> {
        self.client.execute::<PlaylistsList>(params, Payload::None).await
    }

    pub async fn insert(&self, params: &PlaylistsInsertParams, playlist: &Playlist) -> Result<Playlist> {
        self.client
            .execute::<PlaylistsInsert>(params, Payload::Json(playlist))
            .await
    }

    pub async fn update(&self, params: &PlaylistsUpdateParams, playlist: &Playlist) -> Result<Playlist> {
        self.client
            .execute::<PlaylistsUpdate>(params, Payload::Json(playlist))
            .await
    }

    pub async fn delete(&self, params: &PlaylistsDeleteParams) -> Result<()> {
        self.client.execute::<PlaylistsDelete>(params, Payload::None).await
    }
}

impl<T: Transport> Search<'_, T> {
    pub async fn list(&self, params: &SearchListParams) -> Result<SearchListResponse> {
        self.client.execute::<SearchList>(params, Payload::None).await
    }
}

impl<T: Transport> Subscriptions<'_, T> {
    pub async fn list(&self, params: &SubscriptionsListParams) -> Result<SubscriptionListResponse> {
        self.client
            .execute::<SubscriptionsList>(params, Payload::None)
            .await
    }

    pub async fn insert(
        &self,
        params: &SubscriptionsInsertParams,
        subscription: &Subscription,
    ) -> Result<Subscription> {
        self.client
            .execute::<SubscriptionsInsert>(params, Payload::Json(subscription))
            .await
    }

    pub async fn delete(&self, params: &SubscriptionsDeleteParams) -> Result<()> {
        self.client
            .execute::<SubscriptionsDelete>(params, Payload::None)
            .await
    }
}

impl<T: Transport> SuperChatEvents<'_, T> {
    pub async fn list(&self, params: &SuperChatEventsListParams) -> Result<SuperChatEventListResponse> {
        self.client
            .execute::<SuperChatEventsList>(params, Payload::None)
            .await
    }
}

impl<T: Transport> Tests<'_, T> {
    pub async fn insert(&self, params: &TestsInsertParams, item: &TestItem) -> Result<TestItem> {
        self.client
            .execute::<TestsInsert>(params, Payload::Json(item))
            .await
    }
}

impl<T: Transport> ThirdPartyLinks<'_, T> {
    pub async fn list(&self, params: &ThirdPartyLinksListParams) -> Result<ThirdPartyLinkListResponse> {
        self.client
            .execute::<ThirdPartyLinksList>(params, Payload::None)
            .await
    }

    pub async fn insert(
        &self,
        params: &ThirdPartyLinksInsertParams,
        link: &ThirdPartyLink,
    ) -> Result<ThirdPartyLink> {
        self.client
            .execute::<ThirdPartyLinksInsert>(params, Payload::Json(link))
            .await
    }

    pub async fn update(
        &self,
        params: &ThirdPartyLinksUpdateParams,
        link: &ThirdPartyLink,
    ) -> Result<ThirdPartyLink> {
        self.client
            .execute::<ThirdPartyLinksUpdate>(params, Payload::Json(link))
            .await
    }

    pub async fn delete(&self, params: &ThirdPartyLinksDeleteParams) -> Result<()> {
        self.client
            .execute::<ThirdPartyLinksDelete>(params, Payload::None)
            .await
    }
}

impl<T: Transport> Thumbnails<'_, T> {
    /// Uploads a custom thumbnail image for a video.
    pub async fn set(&self, params: &ThumbnailsSetParams, image: Media) -> Result<ThumbnailSetResponse> {
        self.client
            .execute::<ThumbnailsSet>(params, Payload::Media(image))
            .await
    }
}

impl<T: Transport> VideoAbuseReportReasons<'_, T> {
    pub async fn list(
        &self,
        params: &VideoAbuseReportReasonsListParams,
    ) -> Result<VideoAbuseReportReasonListResponse> {
        self.client
            .execute::<VideoAbuseReportReasonsList>(params, Payload::None)
            .await
    }
}

impl<T: Transport> VideoCategories<'_, T> {
    pub async fn list(&self, params: &VideoCategoriesListParams) -> Result<VideoCategoryListResponse> {
        self.client
            .execute::<VideoCategoriesList>(params, Payload::None)
            .await
    }
}

impl<T: Transport> Videos<'_, T> {
    pub async fn list(&self, params: &VideosListParams) -> Result<VideoListResponse> {
        self.client.execute::<VideosList>(params, Payload::None).await
    }

    /// Uploads a video file with its metadata.
    pub async fn insert(&self, params: &VideosInsertParams, video: &Video, media: Media) -> Result<Video> {
        self.client
            .execute::<VideosInsert>(params, Payload::Multipart(video, media))
            .await
    }

    pub async fn update(&self, params: &VideosUpdateParams, video: &Video) -> Result<Video> {
        self.client
            .execute::<VideosUpdate>(params, Payload::Json(video))
            .await
    }

    pub async fn delete(&self, params: &VideosDeleteParams) -> Result<()> {
        self.client.execute::<VideosDelete>(params, Payload::None).await
    }

    pub async fn rate(&self, params: &VideosRateParams) -> Result<()> {
        self.client.execute::<VideosRate>(params, Payload::None).await
    }

    pub async fn get_rating(&self, params: &VideosGetRatingParams) -> Result<VideoGetRatingResponse> {
        self.client
            .execute::<VideosGetRating>(params, Payload::None)
            .await
    }

    pub async fn report_abuse(
        &self,
        params: &VideosReportAbuseParams,
        report: &VideoAbuseReport,
    ) -> Result<()> {
        self.client
            .execute::<VideosReportAbuse>(params, Payload::Json(report))
            .await
    }
}

impl<T: Transport> Watermarks<'_, T> {
    /// Uploads a watermark image and its placement for a channel.
    pub async fn set(
        &self,
        params: &WatermarksSetParams,
        branding: &InvideoBranding,
        image: Media,
    ) -> Result<()> {
        self.client
            .execute::<WatermarksSet>(params, Payload::Multipart(branding, image))
            .await
    }

    pub async fn unset(&self, params: &WatermarksUnsetParams) -> Result<()> {
        self.client
            .execute::<WatermarksUnset>(params, Payload::None)
            .await
    }
}
