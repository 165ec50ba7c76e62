//! Account domains: the business channel that owns a customer account.

use crate::macros::define_catalog;

define_catalog! {
    /// Marker for the account-domain catalog.
    marker: AccountDomain,
    id: AccountDomainId,
    validated: ValidatedAccountDomainId,
    registry: ACCOUNT_DOMAINS,
    name: "AccountDomain",
    description: "Business channels that can own a customer account.",
    entries: [
        (DIRECT, "direct", "Policies sold directly to the customer", "Direct", 0),
        (LIBERTY_MUTUAL, "liberty_mutual", "Policies serviced on behalf of Liberty Mutual", "LibertyMutual", 1),
        (AGENCY, "agency", "Policies sold through independent agencies", "Agency", 2),
    ]
}
