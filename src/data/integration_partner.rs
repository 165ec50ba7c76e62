//! Third parties the fleet exchanges quote and policy data with.

use crate::macros::define_catalog;

define_catalog! {
    /// Marker for the integration-partner catalog.
    marker: IntegrationPartner,
    id: IntegrationPartnerId,
    validated: ValidatedIntegrationPartnerId,
    registry: INTEGRATION_PARTNERS,
    name: "IntegrationPartner",
    description: "Third parties the fleet exchanges quote and policy data with.",
    entries: [
        (CREDIT_KARMA, "credit_karma", "Credit Karma marketplace integration", "CreditKarma", 0),
        (THE_ZEBRA, "the_zebra", "The Zebra comparison marketplace", "TheZebra", 1),
        (INSURIFY, "insurify", "Insurify comparison marketplace", "Insurify", 2),
        (EVERQUOTE, "everquote", "EverQuote lead exchange", "EverQuote", 3),
        (QUOTE_WIZARD, "quote_wizard", "QuoteWizard lead exchange", "QuoteWizard", 4),
        (SMART_FINANCIAL, "smart_financial", "SmartFinancial lead exchange", "SmartFinancial", 5),
        (COMPARE_COM, "compare_com", "Compare.com comparison marketplace", "CompareCom", 6),
        (GABI, "gabi", "Gabi policy-comparison integration", "Gabi", 7),
        (EXPERIAN, "experian", "Experian data-prefill integration", "Experian", 8),
    ]
}
