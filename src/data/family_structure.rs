//! Family structure flags collected during quoting.
//!
//! Four optional booleans that pack into a single integer for storage:
//! bits 1, 2, 4 and 8 for little ones, pre-teens, teens and young adults
//! respectively. A bit is contributed only when the field is present and
//! true; unpacking always yields present fields.

use serde::{Deserialize, Serialize};

/// Which age groups live in the customer's household.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyStructure {
    /// Children under 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_little_ones: Option<bool>,
    /// Children 5 to 12.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_pre_teens: Option<bool>,
    /// Children 13 to 17.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_teens: Option<bool>,
    /// Young adults 18 to 25 still in the household.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_young_adults: Option<bool>,
}

impl FamilyStructure {
    const BITS: [u8; 4] = [1, 2, 4, 8];

    /// Packs the flags into an integer. A field contributes its bit exactly
    /// when it is present and true.
    pub fn to_int(&self) -> u8 {
        let fields = [
            self.has_little_ones,
            self.has_pre_teens,
            self.has_teens,
            self.has_young_adults,
        ];
        fields
            .iter()
            .zip(Self::BITS)
            .filter(|(field, _)| **field == Some(true))
            .map(|(_, bit)| bit)
            .sum()
    }

    /// Unpacks an integer into flags. Every field comes back present.
    pub fn from_int(bits: u8) -> Self {
        Self {
            has_little_ones: Some(bits & Self::BITS[0] != 0),
            has_pre_teens: Some(bits & Self::BITS[1] != 0),
            has_teens: Some(bits & Self::BITS[2] != 0),
            has_young_adults: Some(bits & Self::BITS[3] != 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_is_the_inverse_of_unpacking() {
        for bits in 0..16 {
            assert_eq!(FamilyStructure::from_int(bits).to_int(), bits);
        }
    }

    #[test]
    fn five_unpacks_to_little_ones_and_teens() {
        let family = FamilyStructure::from_int(5);
        assert_eq!(family.has_little_ones, Some(true));
        assert_eq!(family.has_pre_teens, Some(false));
        assert_eq!(family.has_teens, Some(true));
        assert_eq!(family.has_young_adults, Some(false));
        assert_eq!(family.to_int(), 5);
    }

    #[test]
    fn absent_and_false_fields_contribute_nothing() {
        let family = FamilyStructure {
            has_little_ones: None,
            has_pre_teens: Some(false),
            has_teens: Some(true),
            has_young_adults: None,
        };
        assert_eq!(family.to_int(), 4);
        assert_eq!(FamilyStructure::default().to_int(), 0);
    }

    #[test]
    fn serde_round_trip_skips_absent_fields() {
        let family = FamilyStructure {
            has_teens: Some(true),
            ..FamilyStructure::default()
        };
        let encoded = serde_json::to_value(&family).unwrap();
        assert_eq!(encoded, serde_json::json!({ "hasTeens": true }));
        let decoded: FamilyStructure = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, family);
    }
}
