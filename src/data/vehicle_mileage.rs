//! Annual vehicle mileage bands used in quoting.

use crate::macros::define_catalog;

define_catalog! {
    /// Marker for the vehicle-mileage catalog.
    marker: VehicleMileage,
    id: VehicleMileageId,
    validated: ValidatedVehicleMileageId,
    registry: VEHICLE_MILEAGES,
    name: "VehicleMileage",
    description: "Annual mileage bands used in quoting.",
    entries: [
        (BELOW_5000, "below_5000", "Fewer than 5,000 miles per year", "Below5000", 0, [("min", "0"), ("max", "4999")]),
        (FROM_5000_TO_7499, "5000_to_7499", "5,000 to 7,499 miles per year", "From5000To7499", 1, [("min", "5000"), ("max", "7499")]),
        (FROM_7500_TO_9999, "7500_to_9999", "7,500 to 9,999 miles per year", "From7500To9999", 2, [("min", "7500"), ("max", "9999")]),
        (FROM_10000_TO_12499, "10000_to_12499", "10,000 to 12,499 miles per year", "From10000To12499", 3, [("min", "10000"), ("max", "12499")]),
        (FROM_12500_TO_14999, "12500_to_14999", "12,500 to 14,999 miles per year", "From12500To14999", 4, [("min", "12500"), ("max", "14999")]),
        (FROM_15000_TO_19999, "15000_to_19999", "15,000 to 19,999 miles per year", "From15000To19999", 5, [("min", "15000"), ("max", "19999")]),
        (FROM_20000_TO_24999, "20000_to_24999", "20,000 to 24,999 miles per year", "From20000To24999", 6, [("min", "20000"), ("max", "24999")]),
        (ABOVE_25000, "25000_and_above", "25,000 or more miles per year", "Above25000", 7, [("min", "25000"), ("max", "99999")]),
    ]
}

impl VehicleMileageId {
    /// Lower bound of the band, inclusive.
    pub fn min(&self) -> Option<u32> {
        self.entry()
            .and_then(|entry| entry.meta_value("min"))
            .and_then(|value| value.parse().ok())
    }

    /// Upper bound of the band, inclusive.
    pub fn max(&self) -> Option<u32> {
        self.entry()
            .and_then(|entry| entry.meta_value("max"))
            .and_then(|value| value.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_contiguous_and_ascending() {
        let mut previous_max = None;
        for entry in VEHICLE_MILEAGES.entries() {
            let id = VehicleMileageId::from_static(entry.id);
            let min = id.min().unwrap();
            let max = id.max().unwrap();
            assert!(min <= max, "band {} is inverted", entry.id);
            if let Some(previous) = previous_max {
                assert_eq!(min, previous + 1, "gap before band {}", entry.id);
            }
            previous_max = Some(max);
        }
    }

    #[test]
    fn bounds_are_absent_for_unresolvable_ids() {
        let bogus = VehicleMileageId::new("odometer_broken");
        assert_eq!(bogus.min(), None);
        assert_eq!(bogus.max(), None);
    }
}
