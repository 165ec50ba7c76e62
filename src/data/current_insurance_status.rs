//! Current insurance status of a quoting customer.
//!
//! Besides the full catalog, two restricted views are published: the
//! statuses that count as currently insured, and those that count as
//! uninsured. Lookups on a view see only its subset.

use crate::catalog::View;
use crate::macros::define_catalog;

use std::sync::LazyLock;

define_catalog! {
    /// Marker for the current-insurance-status catalog.
    marker: CurrentInsuranceStatus,
    id: CurrentInsuranceStatusId,
    validated: ValidatedCurrentInsuranceStatusId,
    registry: CURRENT_INSURANCE_STATUSES,
    name: "CurrentInsuranceStatus",
    description: "Current insurance status of a quoting customer.",
    entries: [
        (OWN_POLICY, "own_policy", "Insured on their own policy", "OwnPolicy", 0),
        (ON_ANOTHERS_POLICY, "on_anothers_policy", "Insured on someone else's policy", "OnAnothersPolicy", 1),
        (MILITARY_OVERSEAS, "military_overseas", "Covered while deployed overseas with the military", "MilitaryOverseas", 2),
        (POLICY_EXPIRED_WITHIN_30DAYS, "policy_expired_within_30days", "Previous policy expired within the last 30 days", "PolicyExpiredWithin30Days", 3),
        (POLICY_EXPIRED_OVER_30DAYS, "policy_expired_over_30days", "Previous policy expired more than 30 days ago", "PolicyExpiredOver30Days", 4),
        (JUST_ACQUIRED_AUTO, "just_acquired_auto", "Just acquired a vehicle and has no policy yet", "JustAcquiredAuto", 5),
    ]
}

/// Statuses that count as currently insured.
pub static INSURED_STATUSES: LazyLock<View> = LazyLock::new(|| {
    View::new(
        "InsuredStatuses",
        "Statuses that count as currently insured.",
        &CURRENT_INSURANCE_STATUSES,
        &["own_policy", "on_anothers_policy", "military_overseas"],
    )
});

/// Statuses that count as currently uninsured.
pub static UNINSURED_STATUSES: LazyLock<View> = LazyLock::new(|| {
    View::new(
        "UninsuredStatuses",
        "Statuses that count as currently uninsured.",
        &CURRENT_INSURANCE_STATUSES,
        &[
            "policy_expired_within_30days",
            "policy_expired_over_30days",
            "just_acquired_auto",
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_partition_the_catalog() {
        assert_eq!(
            INSURED_STATUSES.len() + UNINSURED_STATUSES.len(),
            CURRENT_INSURANCE_STATUSES.len(),
        );
        for entry in INSURED_STATUSES.entries() {
            assert!(UNINSURED_STATUSES.by_id_string(entry.id).is_none());
        }
    }

    #[test]
    fn view_lookups_see_only_the_subset() {
        assert!(INSURED_STATUSES.by_id_string("own_policy").is_some());
        assert!(INSURED_STATUSES.by_id_string("just_acquired_auto").is_none());
        assert!(UNINSURED_STATUSES
            .by_id(&CurrentInsuranceStatusId::JUST_ACQUIRED_AUTO)
            .is_some());
        assert_eq!(
            UNINSURED_STATUSES.by_index(0).map(|entry| entry.id),
            Some("policy_expired_within_30days"),
        );
    }
}
