//! Internal departments referenced by routing and telemetry.

use crate::macros::define_catalog;

define_catalog! {
    /// Marker for the department catalog.
    marker: Department,
    id: DepartmentId,
    validated: ValidatedDepartmentId,
    registry: DEPARTMENTS,
    name: "Department",
    description: "Internal departments referenced by call routing and telemetry.",
    entries: [
        (SALES, "sales", "New-business sales", "Sales", 0),
        (CUSTOMER_SERVICE, "customer_service", "Policy servicing and customer care", "CustomerService", 1),
        (CLAIMS, "claims", "First notice of loss and claims handling", "Claims", 2),
        (MARKETING, "marketing", "Brand and acquisition marketing", "Marketing", 3),
        (FINANCE, "finance", "Billing, payments and accounting", "Finance", 4),
        (INFORMATION_TECHNOLOGY, "information_technology", "Infrastructure and engineering", "InformationTechnology", 5),
    ]
}
