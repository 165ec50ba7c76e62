//! Brands the fleet sells under.

use crate::macros::define_catalog;

define_catalog! {
    /// Marker for the brand catalog.
    marker: Brand,
    id: BrandId,
    validated: ValidatedBrandId,
    registry: BRANDS,
    name: "Brand",
    description: "Consumer brands the fleet sells policies under.",
    entries: [
        (ELEPHANT, "elephant", "The Elephant consumer brand", "Elephant", 0),
        (APPARENT, "apparent", "The Apparent commercial-auto brand", "Apparent", 1),
    ]
}
