//! Services in the fleet.
//!
//! Entries carry a `log_area` metadata field naming the logging area the
//! service reports under, and deployment variants carry a `parent` pointer
//! to their logical base service. Parent pointers stay within this catalog,
//! are declared statically, and are never walked transitively.

use crate::macros::define_catalog;

define_catalog! {
    /// Marker for the service catalog.
    marker: Service,
    id: ServiceId,
    validated: ValidatedServiceId,
    registry: SERVICES,
    name: "Service",
    description: "Services in the fleet.",
    entries: [
        (MS_GATEWAY, "ms-gateway", "Edge API gateway", "MsGateway", 0, [("log_area", "platform")]),
        (MS_GWBLOB, "ms-gwblob", "Shared document blob store", "MsGwblob", 1, [("log_area", "platform")]),
        (MS_BCBLOB, "ms-bcblob", "Billing-center deployment of the blob store", "MsBcblob", 2, [("log_area", "billing"), ("parent", "ms-gwblob")]),
        (MS_PCBLOB, "ms-pcblob", "Policy-center deployment of the blob store", "MsPcblob", 3, [("log_area", "policy"), ("parent", "ms-gwblob")]),
        (MS_CCBLOB, "ms-ccblob", "Claim-center deployment of the blob store", "MsCcblob", 4, [("log_area", "claims"), ("parent", "ms-gwblob")]),
        (MS_TEMPLATE, "ms-template", "Document and message template rendering", "MsTemplate", 5, [("log_area", "platform")]),
        (MS_NOTIFICATION, "ms-notification", "Outbound notification orchestration", "MsNotification", 6, [("log_area", "platform")]),
        (MS_EMAIL, "ms-email", "Email delivery", "MsEmail", 7, [("log_area", "platform")]),
        (MS_SMS, "ms-sms", "SMS delivery", "MsSms", 8, [("log_area", "platform")]),
        (MS_SCHEDULER, "ms-scheduler", "Deferred and recurring job scheduling", "MsScheduler", 9, [("log_area", "platform")]),
        (MS_AUDIT, "ms-audit", "Audit trail capture", "MsAudit", 10, [("log_area", "platform")]),
        (MS_FEATURE_FLAGS, "ms-feature-flags", "Feature flag evaluation", "MsFeatureFlags", 11, [("log_area", "platform")]),
        (MS_CONFIGURATION, "ms-configuration", "Runtime configuration distribution", "MsConfiguration", 12, [("log_area", "platform")]),
        (MS_SEARCH, "ms-search", "Full-text search over fleet documents", "MsSearch", 13, [("log_area", "platform")]),
        (MS_TELEMETRY, "ms-telemetry", "Telemetry ingestion and fan-out", "MsTelemetry", 14, [("log_area", "platform")]),
        (MS_REPORTING, "ms-reporting", "Operational reporting", "MsReporting", 15, [("log_area", "platform")]),
        (MS_ADDRESS, "ms-address", "Postal address validation", "MsAddress", 16, [("log_area", "platform")]),
        (MS_DOCUMENTS, "ms-documents", "Customer document generation", "MsDocuments", 17, [("log_area", "platform")]),
        (MS_ESIGNATURE, "ms-esignature", "Electronic signature workflows", "MsEsignature", 18, [("log_area", "platform")]),
        (MS_QUOTE, "ms-quote", "Quote lifecycle orchestration", "MsQuote", 19, [("log_area", "quote")]),
        (MS_QUOTE_INTENT, "ms-quote-intent", "Captures quote intent before rating", "MsQuoteIntent", 20, [("log_area", "quote")]),
        (MS_RATING, "ms-rating", "Premium rating engine", "MsRating", 21, [("log_area", "quote")]),
        (MS_UNDERWRITING, "ms-underwriting", "Underwriting rule evaluation", "MsUnderwriting", 22, [("log_area", "quote")]),
        (MS_DRIVERS, "ms-drivers", "Driver detail capture", "MsDrivers", 23, [("log_area", "quote")]),
        (MS_VEHICLES, "ms-vehicles", "Vehicle detail capture", "MsVehicles", 24, [("log_area", "quote")]),
        (MS_COVERAGES, "ms-coverages", "Coverage selection", "MsCoverages", 25, [("log_area", "quote")]),
        (MS_DISCOUNTS, "ms-discounts", "Discount eligibility", "MsDiscounts", 26, [("log_area", "quote")]),
        (MS_PREFILL, "ms-prefill", "Third-party data prefill", "MsPrefill", 27, [("log_area", "quote")]),
        (MS_OCCUPATION, "ms-occupation", "Occupation resolution for quoting", "MsOccupation", 28, [("log_area", "quote")]),
        (MS_MILEAGE, "ms-mileage", "Mileage band resolution", "MsMileage", 29, [("log_area", "quote")]),
        (MS_MVR, "ms-mvr", "Motor vehicle record ordering", "MsMvr", 30, [("log_area", "quote")]),
        (MS_CLUE, "ms-clue", "Prior loss history ordering", "MsClue", 31, [("log_area", "quote")]),
        (MS_CREDIT, "ms-credit", "Credit-based insurance scoring", "MsCredit", 32, [("log_area", "quote")]),
        (MS_BIND, "ms-bind", "Quote binding", "MsBind", 33, [("log_area", "quote")]),
        (MS_POLICY, "ms-policy", "Policy administration", "MsPolicy", 34, [("log_area", "policy")]),
        (MS_POLICY_DOCS, "ms-policy-docs", "Policy document assembly", "MsPolicyDocs", 35, [("log_area", "policy")]),
        (MS_ENDORSEMENT, "ms-endorsement", "Mid-term policy changes", "MsEndorsement", 36, [("log_area", "policy")]),
        (MS_RENEWAL, "ms-renewal", "Renewal processing", "MsRenewal", 37, [("log_area", "policy")]),
        (MS_CANCELLATION, "ms-cancellation", "Cancellation processing", "MsCancellation", 38, [("log_area", "policy")]),
        (MS_REINSTATEMENT, "ms-reinstatement", "Reinstatement processing", "MsReinstatement", 39, [("log_area", "policy")]),
        (MS_IDCARDS, "ms-idcards", "Insurance ID card issuance", "MsIdcards", 40, [("log_area", "policy")]),
        (MS_BILLING, "ms-billing", "Billing account management", "MsBilling", 41, [("log_area", "billing")]),
        (MS_PAYMENTS, "ms-payments", "Payment capture and settlement", "MsPayments", 42, [("log_area", "billing")]),
        (MS_INVOICING, "ms-invoicing", "Invoice generation", "MsInvoicing", 43, [("log_area", "billing")]),
        (MS_REFUNDS, "ms-refunds", "Refund disbursement", "MsRefunds", 44, [("log_area", "billing")]),
        (MS_PAYMENTPLANS, "ms-paymentplans", "Payment plan management", "MsPaymentplans", 45, [("log_area", "billing")]),
        (MS_CLAIMS, "ms-claims", "Claims lifecycle orchestration", "MsClaims", 46, [("log_area", "claims")]),
        (MS_FNOL, "ms-fnol", "First notice of loss intake", "MsFnol", 47, [("log_area", "claims")]),
        (MS_CLAIMS_DOCS, "ms-claims-docs", "Claims document management", "MsClaimsDocs", 48, [("log_area", "claims")]),
        (MS_SALVAGE, "ms-salvage", "Salvage and subrogation tracking", "MsSalvage", 49, [("log_area", "claims")]),
        (MS_APPRAISAL, "ms-appraisal", "Damage appraisal scheduling", "MsAppraisal", 50, [("log_area", "claims")]),
        (MS_RENTAL, "ms-rental", "Rental car coordination", "MsRental", 51, [("log_area", "claims")]),
        (MS_ACCOUNT, "ms-account", "Customer account management", "MsAccount", 52, [("log_area", "account")]),
        (MS_IDENTITY, "ms-identity", "Authentication and identity", "MsIdentity", 53, [("log_area", "account")]),
        (MS_PREFERENCES, "ms-preferences", "Customer communication preferences", "MsPreferences", 54, [("log_area", "account")]),
        (MS_CONSENT, "ms-consent", "Consent and disclosure tracking", "MsConsent", 55, [("log_area", "account")]),
        (MS_PROFILE, "ms-profile", "Customer profile aggregation", "MsProfile", 56, [("log_area", "account")]),
        (MS_LEADS, "ms-leads", "Lead intake and scoring", "MsLeads", 57, [("log_area", "marketing")]),
        (MS_CAMPAIGN, "ms-campaign", "Campaign management", "MsCampaign", 58, [("log_area", "marketing")]),
        (MS_ATTRIBUTION, "ms-attribution", "Marketing attribution", "MsAttribution", 59, [("log_area", "marketing")]),
        (MS_PARTNERS, "ms-partners", "Partner integration hub", "MsPartners", 60, [("log_area", "marketing")]),
        (MS_SOURCES, "ms-sources", "Source-of-business resolution", "MsSources", 61, [("log_area", "marketing")]),
        (MS_QUOTE_WEB, "ms-quote-web", "Public web deployment of ms-quote", "MsQuoteWeb", 62, [("log_area", "quote"), ("parent", "ms-quote")]),
        (MS_QUOTE_INTENT_WEB, "ms-quote-intent-web", "Public web deployment of ms-quote-intent", "MsQuoteIntentWeb", 63, [("log_area", "quote"), ("parent", "ms-quote-intent")]),
        (MS_RATING_WEB, "ms-rating-web", "Public web deployment of ms-rating", "MsRatingWeb", 64, [("log_area", "quote"), ("parent", "ms-rating")]),
        (MS_DRIVERS_WEB, "ms-drivers-web", "Public web deployment of ms-drivers", "MsDriversWeb", 65, [("log_area", "quote"), ("parent", "ms-drivers")]),
        (MS_VEHICLES_WEB, "ms-vehicles-web", "Public web deployment of ms-vehicles", "MsVehiclesWeb", 66, [("log_area", "quote"), ("parent", "ms-vehicles")]),
        (MS_COVERAGES_WEB, "ms-coverages-web", "Public web deployment of ms-coverages", "MsCoveragesWeb", 67, [("log_area", "quote"), ("parent", "ms-coverages")]),
        (MS_BIND_WEB, "ms-bind-web", "Public web deployment of ms-bind", "MsBindWeb", 68, [("log_area", "quote"), ("parent", "ms-bind")]),
        (MS_POLICY_WEB, "ms-policy-web", "Public web deployment of ms-policy", "MsPolicyWeb", 69, [("log_area", "policy"), ("parent", "ms-policy")]),
        (MS_ENDORSEMENT_WEB, "ms-endorsement-web", "Public web deployment of ms-endorsement", "MsEndorsementWeb", 70, [("log_area", "policy"), ("parent", "ms-endorsement")]),
        (MS_RENEWAL_WEB, "ms-renewal-web", "Public web deployment of ms-renewal", "MsRenewalWeb", 71, [("log_area", "policy"), ("parent", "ms-renewal")]),
        (MS_IDCARDS_WEB, "ms-idcards-web", "Public web deployment of ms-idcards", "MsIdcardsWeb", 72, [("log_area", "policy"), ("parent", "ms-idcards")]),
        (MS_BILLING_WEB, "ms-billing-web", "Public web deployment of ms-billing", "MsBillingWeb", 73, [("log_area", "billing"), ("parent", "ms-billing")]),
        (MS_PAYMENTS_WEB, "ms-payments-web", "Public web deployment of ms-payments", "MsPaymentsWeb", 74, [("log_area", "billing"), ("parent", "ms-payments")]),
        (MS_CLAIMS_WEB, "ms-claims-web", "Public web deployment of ms-claims", "MsClaimsWeb", 75, [("log_area", "claims"), ("parent", "ms-claims")]),
        (MS_FNOL_WEB, "ms-fnol-web", "Public web deployment of ms-fnol", "MsFnolWeb", 76, [("log_area", "claims"), ("parent", "ms-fnol")]),
        (MS_ACCOUNT_WEB, "ms-account-web", "Public web deployment of ms-account", "MsAccountWeb", 77, [("log_area", "account"), ("parent", "ms-account")]),
        (MS_IDENTITY_WEB, "ms-identity-web", "Public web deployment of ms-identity", "MsIdentityWeb", 78, [("log_area", "account"), ("parent", "ms-identity")]),
        (MS_PREFERENCES_WEB, "ms-preferences-web", "Public web deployment of ms-preferences", "MsPreferencesWeb", 79, [("log_area", "account"), ("parent", "ms-preferences")]),
        (MS_PROFILE_WEB, "ms-profile-web", "Public web deployment of ms-profile", "MsProfileWeb", 80, [("log_area", "account"), ("parent", "ms-profile")]),
        (MS_PAYMENTPLANS_WEB, "ms-paymentplans-web", "Public web deployment of ms-paymentplans", "MsPaymentplansWeb", 81, [("log_area", "billing"), ("parent", "ms-paymentplans")]),
    ]
}

/// Resolves `id` and returns its logical parent: the declared parent when
/// the entry has one, the entry's own identifier otherwise, absence when
/// the identifier does not resolve.
pub fn parent_of(id: &str) -> Option<ServiceId> {
    ServiceId::new(id.to_owned()).parent()
}

impl ServiceId {
    /// The logging area this service reports under.
    pub fn log_area(&self) -> Option<&'static str> {
        self.entry().and_then(|entry| entry.meta_value("log_area"))
    }

    /// The logical parent of this service. Entries without a declared
    /// parent are their own parent; unresolvable identifiers have none.
    pub fn parent(&self) -> Option<ServiceId> {
        let entry = self.entry()?;
        match entry.meta_value("parent") {
            Some(parent) => SERVICES.by_id_string(parent).map(ServiceId::canonical),
            None => Some(ServiceId::canonical(entry)),
        }
    }
}

impl ValidatedServiceId {
    /// The parent wrapper, present only when this wrapper holds a resolved
    /// identifier whose parent resolves too.
    pub fn parent(&self) -> Option<ValidatedServiceId> {
        let parent = self.id()?.parent()?;
        Some(parent.validated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_the_full_table() {
        assert_eq!(SERVICES.len(), 82);
    }

    #[test]
    fn deployment_variants_resolve_to_their_base_service() {
        assert_eq!(parent_of("ms-bcblob").unwrap(), "ms-gwblob");
        assert_eq!(parent_of("ms-quote-intent-web").unwrap(), "ms-quote-intent");
    }

    #[test]
    fn services_without_a_parent_are_their_own_parent() {
        assert_eq!(parent_of("ms-template").unwrap(), "ms-template");
        assert_eq!(parent_of("ms-quote").unwrap(), "ms-quote");
    }

    #[test]
    fn unresolvable_services_have_no_parent() {
        assert!(parent_of("ms-missing").is_none());
        assert!(ServiceId::new("ms-missing").parent().is_none());
    }

    #[test]
    fn every_declared_parent_resolves_within_the_catalog() {
        for entry in SERVICES.entries() {
            let id = ServiceId::from_static(entry.id);
            let parent = id.parent().unwrap();
            match entry.meta_value("parent") {
                Some(declared) => assert_eq!(parent, declared),
                None => assert_eq!(parent, entry.id),
            }
            // Parents are base services, never variants themselves.
            assert!(parent.parent().unwrap() == parent.as_str());
        }
    }

    #[test]
    fn every_entry_reports_a_log_area() {
        for entry in SERVICES.entries() {
            assert!(ServiceId::from_static(entry.id).log_area().is_some());
        }
    }

    #[test]
    fn validated_parent_requires_a_resolved_inner() {
        let valid = ServiceId::MS_BCBLOB.validated();
        let parent = valid.parent().unwrap();
        assert_eq!(parent.to_id_string(), "ms-gwblob");

        assert!(ValidatedServiceId::new().parent().is_none());
        assert!(ValidatedServiceId::from_fragment("ms-missing").parent().is_none());
    }
}
