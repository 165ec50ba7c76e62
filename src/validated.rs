//! The permissive identifier wrapper.

use crate::catalog::{Catalog, Entry, Identifier};
use crate::error::Error;
use crate::id::Id;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// An identifier-shaped value whose decoder never fails at field level.
///
/// On decode it captures the raw input fragment, resolves it against the
/// catalog when possible, and records an
/// [`INVALID_UNMARSHAL_ID`](crate::error::INVALID_UNMARSHAL_ID) error
/// instead of failing when it cannot. A document full of permissive fields
/// decodes completely and is triaged afterwards by walking
/// [`captured_value`](Self::captured_value) and [`errors`](Self::errors).
///
/// Three outcomes are distinguishable after a decode:
/// success-with-value (`is_valid()`), success-with-empty (captured text is
/// empty, no error), and success-with-error (captured text kept, one error
/// recorded). Repeated [`capture`](Self::capture) calls on the same value
/// append to the error list; the captured fragment always reflects the most
/// recent attempt.
pub struct Validated<C: Catalog> {
    id: Option<Id<C>>,
    captured: Option<String>,
    errors: Vec<Error>,
}

impl<C: Catalog> Validated<C> {
    /// An empty wrapper: no inner identifier, nothing captured, no errors.
    pub fn new() -> Self {
        Self {
            id: None,
            captured: None,
            errors: Vec::new(),
        }
    }

    /// Wraps an existing identifier. The inner identifier is kept only when
    /// it resolves; nothing is captured and no error is recorded.
    pub fn from_id(id: &Id<C>) -> Self {
        Self {
            id: id.id().cloned(),
            captured: None,
            errors: Vec::new(),
        }
    }

    /// Decodes a raw text fragment into a fresh wrapper.
    pub fn from_fragment(fragment: &str) -> Self {
        let mut wrapper = Self::new();
        wrapper.capture(fragment);
        wrapper
    }

    /// The permissive decode step.
    ///
    /// Strips surrounding ASCII double quotes, stores the result as the
    /// captured value, and resolves it against the catalog. Unknown
    /// non-empty input appends one error to the list and leaves the inner
    /// identifier absent. This never fails.
    pub fn capture(&mut self, fragment: &str) {
        let captured = fragment.trim_matches('"');
        self.captured = Some(captured.to_owned());
        if captured.is_empty() {
            self.id = None;
            return;
        }
        match C::registry().by_id_string(captured) {
            Some(entry) => self.id = Some(Id::canonical(entry)),
            None => {
                self.errors.push(Error::invalid_unmarshal(C::NAME, captured));
                self.id = None;
            }
        }
    }

    /// The inner identifier, present only when the last input resolved.
    pub fn id(&self) -> Option<&Id<C>> {
        self.id.as_ref()
    }

    /// Whether the wrapper currently holds a resolved identifier.
    pub fn is_valid(&self) -> bool {
        self.id.is_some()
    }

    /// The catalog entry behind the inner identifier, if present.
    pub fn entry(&self) -> Option<&'static Entry> {
        self.id.as_ref().and_then(Id::entry)
    }

    /// The raw fragment stored by the most recent decode attempt,
    /// quote-stripped, regardless of validity.
    pub fn captured_value(&self) -> Option<&str> {
        self.captured.as_deref()
    }

    /// The decode errors accumulated so far, oldest first.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The inner identifier text when present, the empty string otherwise.
    pub fn to_id_string(&self) -> &str {
        match &self.id {
            Some(id) => id.as_str(),
            None => "",
        }
    }
}

impl<C: Catalog> Identifier for Validated<C> {
    fn id_text(&self) -> Option<&str> {
        self.id.as_ref().and_then(Id::id_text)
    }
}

impl<C: Catalog> Default for Validated<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Catalog> Clone for Validated<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            captured: self.captured.clone(),
            errors: self.errors.clone(),
        }
    }
}

impl<C: Catalog> PartialEq for Validated<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.captured == other.captured && self.errors == other.errors
    }
}

impl<C: Catalog> Eq for Validated<C> {}

impl<C: Catalog> fmt::Debug for Validated<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validated")
            .field("catalog", &C::NAME)
            .field("id", &self.id)
            .field("captured", &self.captured)
            .field("errors", &self.errors)
            .finish()
    }
}

impl<C: Catalog> Serialize for Validated<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.id {
            None => serializer.serialize_none(),
            Some(id) => id.serialize(serializer),
        }
    }
}

impl<'de, C: Catalog> Deserialize<'de> for Validated<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Non-string payloads still surface the parser's own error; only
        // identifier validation is recovered locally.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_fragment(raw.as_deref().unwrap_or("")))
    }
}

#[cfg(test)]
mod tests {
    use crate::data::account_domain::{AccountDomainId, ValidatedAccountDomainId};
    use serde_json::json;

    #[test]
    fn permissive_decode_resolves_known_identifiers() {
        let wrapper: ValidatedAccountDomainId = serde_json::from_value(json!("Agency")).unwrap();
        assert!(wrapper.is_valid());
        assert_eq!(wrapper.id().map(AccountDomainId::as_str), Some("agency"));
        assert_eq!(wrapper.captured_value(), Some("Agency"));
        assert!(wrapper.errors().is_empty());
    }

    #[test]
    fn permissive_decode_keeps_unknown_input_and_records_one_error() {
        let wrapper: ValidatedAccountDomainId =
            serde_json::from_value(json!("\"unknown_domain\"")).unwrap();
        assert!(!wrapper.is_valid());
        assert_eq!(wrapper.captured_value(), Some("unknown_domain"));
        assert_eq!(wrapper.errors().len(), 1);
        assert!(wrapper.errors()[0].is_invalid_unmarshal());
    }

    #[test]
    fn permissive_decode_of_empty_input_records_no_error() {
        let wrapper: ValidatedAccountDomainId = serde_json::from_value(json!("")).unwrap();
        assert!(!wrapper.is_valid());
        assert_eq!(wrapper.captured_value(), Some(""));
        assert!(wrapper.errors().is_empty());
    }

    #[test]
    fn permissive_decode_propagates_parser_errors() {
        assert!(serde_json::from_value::<ValidatedAccountDomainId>(json!(42)).is_err());
    }

    #[test]
    fn capture_appends_across_attempts_and_tracks_latest_fragment() {
        let mut wrapper = ValidatedAccountDomainId::new();
        wrapper.capture("nonsense");
        wrapper.capture("more_nonsense");
        assert_eq!(wrapper.errors().len(), 2);
        assert_eq!(wrapper.captured_value(), Some("more_nonsense"));

        wrapper.capture("direct");
        assert!(wrapper.is_valid());
        assert_eq!(wrapper.captured_value(), Some("direct"));
        // Earlier errors are kept for triage.
        assert_eq!(wrapper.errors().len(), 2);
    }

    #[test]
    fn permissive_encode_delegates_to_the_strict_encoder() {
        let wrapper = AccountDomainId::DIRECT.validated();
        assert_eq!(serde_json::to_value(&wrapper).unwrap(), json!("direct"));

        let empty = ValidatedAccountDomainId::new();
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!(null));
    }

    #[test]
    fn promotion_from_an_invalid_identifier_leaves_the_inner_absent() {
        let wrapper = AccountDomainId::new("bogus").validated();
        assert!(!wrapper.is_valid());
        assert!(wrapper.captured_value().is_none());
        assert!(wrapper.errors().is_empty());
    }
}
