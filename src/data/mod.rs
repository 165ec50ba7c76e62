//! The enumeration catalogs.
//!
//! One module per enumeration. Each defines the catalog's marker type, its
//! `Id`/`Validated` aliases with one constant per entry, and the registry
//! singleton, plus any catalog-specific behavior (urgency ranks, parent
//! chains, reverse indices, sub-collections, promoted metadata accessors).

pub mod account_domain;
pub mod brand;
pub mod current_insurance_status;
pub mod department;
pub mod family_structure;
pub mod integration_partner;
pub mod log_level;
pub mod occupation;
pub mod service;
pub mod source_of_business;
pub mod transaction_header;
pub mod vehicle_mileage;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::id::Id;

    use serde_json::json;
    use std::collections::HashSet;

    // The shared contract every catalog must uphold: total case-folded
    // lookup, positional lookup, strict round-trips on both wire formats,
    // and rejection of unknown input.
    fn check_catalog<C: Catalog>() {
        let registry = C::registry();
        assert!(!registry.is_empty(), "{} is empty", registry.name());

        for (position, entry) in registry.entries().iter().enumerate() {
            assert_eq!(registry.by_id_string(entry.id), Some(entry));
            assert_eq!(
                registry.by_id_string(&entry.id.to_ascii_uppercase()),
                Some(entry),
            );
            assert_eq!(registry.by_index(position), Some(entry));

            let id = Id::<C>::from_static(entry.id);
            let encoded = serde_json::to_value(&id).unwrap();
            assert_eq!(encoded, json!(entry.id));
            let decoded: Id<C> = serde_json::from_value(encoded).unwrap();
            assert_eq!(decoded, id);

            let rendered = id.to_xml("Value").unwrap();
            let parsed: Id<C> = Id::from_xml(&rendered).unwrap();
            assert_eq!(parsed, id);

            // The registry accepts both identifier forms through the
            // shared capability.
            assert_eq!(registry.by_id(&id), Some(entry));
            assert_eq!(registry.by_id(&id.validated()), Some(entry));
        }

        let folded: HashSet<String> = registry
            .entries()
            .iter()
            .map(|entry| entry.id.to_ascii_lowercase())
            .collect();
        assert_eq!(folded.len(), registry.len(), "{}", registry.name());

        let symbols: HashSet<&str> = registry
            .entries()
            .iter()
            .map(|entry| entry.symbolic_name)
            .collect();
        assert_eq!(symbols.len(), registry.len(), "{}", registry.name());

        assert!(registry.by_id_string("no_such_identifier_anywhere").is_none());
        assert!(registry.by_id_string("").is_none());
        assert!(registry.by_index(registry.len()).is_none());
    }

    #[test]
    fn every_catalog_upholds_the_shared_invariants() {
        check_catalog::<account_domain::AccountDomain>();
        check_catalog::<brand::Brand>();
        check_catalog::<current_insurance_status::CurrentInsuranceStatus>();
        check_catalog::<department::Department>();
        check_catalog::<integration_partner::IntegrationPartner>();
        check_catalog::<log_level::LogLevel>();
        check_catalog::<occupation::Occupation>();
        check_catalog::<service::Service>();
        check_catalog::<source_of_business::SourceOfBusiness>();
        check_catalog::<transaction_header::TransactionHeader>();
        check_catalog::<vehicle_mileage::VehicleMileage>();
    }

    #[test]
    fn catalog_sizes_match_the_product_contract() {
        assert_eq!(account_domain::ACCOUNT_DOMAINS.len(), 3);
        assert_eq!(brand::BRANDS.len(), 2);
        assert_eq!(current_insurance_status::CURRENT_INSURANCE_STATUSES.len(), 6);
        assert_eq!(department::DEPARTMENTS.len(), 6);
        assert_eq!(integration_partner::INTEGRATION_PARTNERS.len(), 9);
        assert_eq!(log_level::LOG_LEVELS.len(), 7);
        assert_eq!(occupation::OCCUPATIONS.len(), 430);
        assert_eq!(service::SERVICES.len(), 82);
        assert_eq!(source_of_business::SOURCES_OF_BUSINESS.len(), 81);
        assert_eq!(transaction_header::TRANSACTION_HEADERS.len(), 8);
        assert_eq!(vehicle_mileage::VEHICLE_MILEAGES.len(), 8);
    }
}
