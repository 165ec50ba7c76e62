//! Sources of business: where a quote came from.
//!
//! Every entry carries two boolean-in-string metadata fields,
//! `is_super_click` and `is_price_comparison`, promoted to typed accessors
//! on [`SourceOfBusinessId`].

use crate::macros::define_catalog;

define_catalog! {
    /// Marker for the source-of-business catalog.
    marker: SourceOfBusiness,
    id: SourceOfBusinessId,
    validated: ValidatedSourceOfBusinessId,
    registry: SOURCES_OF_BUSINESS,
    name: "SourceOfBusiness",
    description: "Where a quote came from.",
    entries: [
        (ORGANIC_SEARCH, "organic_search", "Unpaid search engine traffic", "OrganicSearch", 0, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (PAID_SEARCH_GOOGLE, "paid_search_google", "Paid search on Google", "PaidSearchGoogle", 1, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (PAID_SEARCH_BING, "paid_search_bing", "Paid search on Bing", "PaidSearchBing", 2, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (PAID_SEARCH_YAHOO, "paid_search_yahoo", "Paid search on Yahoo", "PaidSearchYahoo", 3, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (DISPLAY_ADVERTISING, "display_advertising", "Programmatic display advertising", "DisplayAdvertising", 4, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (RETARGETING, "retargeting", "Display retargeting campaigns", "Retargeting", 5, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (SOCIAL_FACEBOOK, "social_facebook", "Facebook advertising", "SocialFacebook", 6, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (SOCIAL_INSTAGRAM, "social_instagram", "Instagram advertising", "SocialInstagram", 7, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (SOCIAL_TIKTOK, "social_tiktok", "TikTok advertising", "SocialTiktok", 8, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (SOCIAL_YOUTUBE, "social_youtube", "YouTube advertising", "SocialYoutube", 9, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (SOCIAL_TWITTER, "social_twitter", "Twitter advertising", "SocialTwitter", 10, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (EMAIL_CAMPAIGN, "email_campaign", "Outbound email campaigns", "EmailCampaign", 11, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (DIRECT_MAIL, "direct_mail", "Direct mail campaigns", "DirectMail", 12, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (TELEVISION, "television", "Television advertising", "Television", 13, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (RADIO, "radio", "Radio advertising", "Radio", 14, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (STREAMING_AUDIO, "streaming_audio", "Streaming audio advertising", "StreamingAudio", 15, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (PODCAST, "podcast", "Podcast sponsorship", "Podcast", 16, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (BILLBOARD, "billboard", "Outdoor and billboard advertising", "Billboard", 17, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (SPONSORSHIP, "sponsorship", "Event and team sponsorship", "Sponsorship", 18, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (WORD_OF_MOUTH, "word_of_mouth", "Customer told us they heard from a friend", "WordOfMouth", 19, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (REFER_A_FRIEND, "refer_a_friend", "Referral program", "ReferAFriend", 20, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (AGENT_REFERRAL, "agent_referral", "Referred by an independent agent", "AgentReferral", 21, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (EMPLOYEE_REFERRAL, "employee_referral", "Referred by an employee", "EmployeeReferral", 22, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (REPEAT_CUSTOMER, "repeat_customer", "Returning former customer", "RepeatCustomer", 23, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (WINBACK_CAMPAIGN, "winback_campaign", "Win-back outreach to lapsed customers", "WinbackCampaign", 24, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (RENEWAL_OFFER, "renewal_offer", "Offer presented at renewal", "RenewalOffer", 25, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (CROSS_SELL, "cross_sell", "Cross-sell from an existing policy", "CrossSell", 26, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (CALL_CENTER_INBOUND, "call_center_inbound", "Inbound call without prior attribution", "CallCenterInbound", 27, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (CALL_CENTER_OUTBOUND, "call_center_outbound", "Outbound call campaign", "CallCenterOutbound", 28, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (MOBILE_APP, "mobile_app", "The consumer mobile app", "MobileApp", 29, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (APP_STORE, "app_store", "App store discovery", "AppStore", 30, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (AFFILIATE_NETWORK, "affiliate_network", "Generic affiliate network traffic", "AffiliateNetwork", 31, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (PARTNER_BANK, "partner_bank", "Bank partnership placement", "PartnerBank", 32, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (PARTNER_DEALERSHIP, "partner_dealership", "Auto dealership partnership", "PartnerDealership", 33, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (PARTNER_DMV_SERVICES, "partner_dmv_services", "DMV services partnership", "PartnerDmvServices", 34, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (PARTNER_RIDESHARE, "partner_rideshare", "Rideshare platform partnership", "PartnerRideshare", 35, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (LIBERTY_MUTUAL_TRANSFER, "liberty_mutual_transfer", "Transferred from Liberty Mutual", "LibertyMutualTransfer", 36, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (PRESS_COVERAGE, "press_coverage", "Earned media coverage", "PressCoverage", 37, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (COMMUNITY_EVENT, "community_event", "Local community event", "CommunityEvent", 38, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (UNKNOWN, "unknown", "Source could not be determined", "Unknown", 39, [("is_super_click", "false"), ("is_price_comparison", "false")]),
        (COMPARE_COM, "compare_com", "Compare.com comparison marketplace", "CompareCom", 40, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (THE_ZEBRA, "the_zebra", "The Zebra comparison marketplace", "TheZebra", 41, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (INSURIFY, "insurify", "Insurify comparison marketplace", "Insurify", 42, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (GABI, "gabi", "Gabi policy comparison", "Gabi", 43, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (JERRY, "jerry", "Jerry comparison app", "Jerry", 44, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (WAY_COM, "way_com", "Way.com comparison app", "WayCom", 45, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (SAVVY, "savvy", "Savvy comparison platform", "Savvy", 46, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (CREDIT_KARMA, "credit_karma", "Credit Karma marketplace", "CreditKarma", 47, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (NERDWALLET, "nerdwallet", "NerdWallet comparison content", "Nerdwallet", 48, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (BANKRATE, "bankrate", "Bankrate comparison content", "Bankrate", 49, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (VALUEPENGUIN, "valuepenguin", "ValuePenguin comparison content", "Valuepenguin", 50, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (THEZEBRA_EMBEDDED, "thezebra_embedded", "The Zebra embedded quote widget", "ThezebraEmbedded", 51, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (POLICYGENIUS, "policygenius", "Policygenius comparison marketplace", "Policygenius", 52, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (QUOTELAB, "quotelab", "QuoteLab comparison traffic", "Quotelab", 53, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (RATE_RETRIEVER, "rate_retriever", "Rate Retriever comparison tool", "RateRetriever", 54, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (OTTO, "otto", "Otto comparison marketplace", "Otto", 55, [("is_super_click", "false"), ("is_price_comparison", "true")]),
        (EVERQUOTE, "everquote", "EverQuote click listing", "Everquote", 56, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (QUOTE_WIZARD, "quote_wizard", "QuoteWizard click listing", "QuoteWizard", 57, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (SMART_FINANCIAL, "smart_financial", "SmartFinancial click listing", "SmartFinancial", 58, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (MEDIA_ALPHA, "media_alpha", "MediaAlpha click exchange", "MediaAlpha", 59, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (QMP, "qmp", "QuoteMediaPlace click exchange", "Qmp", 60, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (DATALOT, "datalot", "Datalot click listing", "Datalot", 61, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (QUINSTREET, "quinstreet", "QuinStreet click listing", "Quinstreet", 62, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (UNDERGROUND_ELEPHANT, "underground_elephant", "Underground Elephant click listing", "UndergroundElephant", 63, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (ADHARMONICS, "adharmonics", "AdHarmonics click listing", "Adharmonics", 64, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (RANK_MEDIA, "rank_media", "Rank Media click listing", "RankMedia", 65, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (PRECISE_LEADS, "precise_leads", "Precise Leads click listing", "PreciseLeads", 66, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (HOMETOWN_QUOTES, "hometown_quotes", "Hometown Quotes click listing", "HometownQuotes", 67, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (INSIDE_RESPONSE, "inside_response", "Inside Response click listing", "InsideResponse", 68, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (CONTACTABILITY, "contactability", "Contactability click listing", "Contactability", 69, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (BLUE_WAVE, "blue_wave", "Blue Wave click listing", "BlueWave", 70, [("is_super_click", "true"), ("is_price_comparison", "false")]),
        (AGGREGATOR_SUPERCLICK, "aggregator_superclick", "Aggregator click-through priced as superclick", "AggregatorSuperclick", 71, [("is_super_click", "true"), ("is_price_comparison", "true")]),
        (ZEBRA_SUPERCLICK, "zebra_superclick", "The Zebra superclick placement", "ZebraSuperclick", 72, [("is_super_click", "true"), ("is_price_comparison", "true")]),
        (INSURIFY_SUPERCLICK, "insurify_superclick", "Insurify superclick placement", "InsurifySuperclick", 73, [("is_super_click", "true"), ("is_price_comparison", "true")]),
        (EVERQUOTE_COMPARISON, "everquote_comparison", "EverQuote comparison placement", "EverquoteComparison", 74, [("is_super_click", "true"), ("is_price_comparison", "true")]),
        (MEDIAALPHA_COMPARISON, "mediaalpha_comparison", "MediaAlpha comparison placement", "MediaalphaComparison", 75, [("is_super_click", "true"), ("is_price_comparison", "true")]),
        (QUOTEWIZARD_COMPARISON, "quotewizard_comparison", "QuoteWizard comparison placement", "QuotewizardComparison", 76, [("is_super_click", "true"), ("is_price_comparison", "true")]),
        (SMARTFINANCIAL_COMPARISON, "smartfinancial_comparison", "SmartFinancial comparison placement", "SmartfinancialComparison", 77, [("is_super_click", "true"), ("is_price_comparison", "true")]),
        (CREDITKARMA_SUPERCLICK, "creditkarma_superclick", "Credit Karma superclick placement", "CreditkarmaSuperclick", 78, [("is_super_click", "true"), ("is_price_comparison", "true")]),
        (NERDWALLET_SUPERCLICK, "nerdwallet_superclick", "NerdWallet superclick placement", "NerdwalletSuperclick", 79, [("is_super_click", "true"), ("is_price_comparison", "true")]),
        (JERRY_SUPERCLICK, "jerry_superclick", "Jerry superclick placement", "JerrySuperclick", 80, [("is_super_click", "true"), ("is_price_comparison", "true")]),
    ]
}

impl SourceOfBusinessId {
    /// Whether this source is billed as a superclick placement. False for
    /// unresolvable identifiers.
    pub fn is_super_click(&self) -> bool {
        self.entry()
            .map(|entry| entry.meta_flag("is_super_click"))
            .unwrap_or(false)
    }

    /// Whether this source is a price-comparison placement. False for
    /// unresolvable identifiers.
    pub fn is_price_comparison(&self) -> bool {
        self.entry()
            .map(|entry| entry.meta_flag("is_price_comparison"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_the_full_table() {
        assert_eq!(SOURCES_OF_BUSINESS.len(), 81);
    }

    #[test]
    fn every_entry_carries_both_flags() {
        for entry in SOURCES_OF_BUSINESS.entries() {
            assert!(entry.meta_value("is_super_click").is_some(), "{}", entry.id);
            assert!(entry.meta_value("is_price_comparison").is_some(), "{}", entry.id);
        }
    }

    #[test]
    fn flags_read_through_the_typed_accessors() {
        assert!(SourceOfBusinessId::EVERQUOTE.is_super_click());
        assert!(!SourceOfBusinessId::EVERQUOTE.is_price_comparison());
        assert!(SourceOfBusinessId::COMPARE_COM.is_price_comparison());
        assert!(!SourceOfBusinessId::COMPARE_COM.is_super_click());
        assert!(SourceOfBusinessId::ZEBRA_SUPERCLICK.is_super_click());
        assert!(SourceOfBusinessId::ZEBRA_SUPERCLICK.is_price_comparison());
        assert!(!SourceOfBusinessId::DIRECT_MAIL.is_super_click());
    }

    #[test]
    fn flags_are_false_for_unresolvable_ids() {
        let bogus = SourceOfBusinessId::new("carrier_pigeon");
        assert!(!bogus.is_super_click());
        assert!(!bogus.is_price_comparison());
    }
}
