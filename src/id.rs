//! The strict identifier value type.

use crate::catalog::{Catalog, Entry, Identifier};
use crate::error::Error;
use crate::validated::Validated;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A catalog identifier: a thin wrapper over the canonical identifier text,
/// parameterized by the catalog it belongs to.
///
/// Each enumeration exposes an alias of this type (for example
/// `AccountDomainId = Id<AccountDomain>`) along with one constant per
/// catalog entry. The value itself is plain data: freely cloned, compared,
/// embedded in documents, and discarded. Validity is a property of the text
/// against the catalog, checked on demand, never cached.
///
/// # Codec behavior
///
/// The serde implementation is the *strict* codec for the primary wire
/// format: encoding an unknown non-empty identifier fails with
/// [`INVALID_MARSHAL_ID`](crate::error::INVALID_MARSHAL_ID), decoding one
/// fails with [`INVALID_UNMARSHAL_ID`](crate::error::INVALID_UNMARSHAL_ID),
/// and the absent value maps to `null` in both directions. Decoding stores
/// the catalog's canonical spelling, not the raw input.
///
/// # Example
///
/// ```
/// use enumerations::data::account_domain::{AccountDomainId, ACCOUNT_DOMAINS};
///
/// let id: AccountDomainId = serde_json::from_str("\"DiReCt\"").unwrap();
/// assert_eq!(id, AccountDomainId::DIRECT);
/// assert_eq!(id.as_str(), "direct");
/// assert!(ACCOUNT_DOMAINS.by_id(&id).is_some());
/// ```
pub struct Id<C: Catalog> {
    text: Cow<'static, str>,
    _catalog: PhantomData<C>,
}

impl<C: Catalog> Id<C> {
    /// Creates an identifier from a static string. Usable in `const`
    /// contexts; the catalog constants are built this way.
    pub const fn from_static(text: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            _catalog: PhantomData,
        }
    }

    /// Creates an identifier from arbitrary text. The text is kept verbatim;
    /// validity is judged lazily against the catalog.
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            _catalog: PhantomData,
        }
    }

    /// The absent identifier. Encodes as the wire format's absent sentinel.
    pub const fn empty() -> Self {
        Self::from_static("")
    }

    /// The identifier text as stored.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the stored text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the catalog resolves this identifier.
    pub fn is_valid(&self) -> bool {
        self.entry().is_some()
    }

    /// The catalog entry behind this identifier, if it resolves.
    pub fn entry(&self) -> Option<&'static Entry> {
        C::registry().by_id_string(&self.text)
    }

    /// Validity-preserving projection: the identifier itself when valid,
    /// absence otherwise.
    pub fn id(&self) -> Option<&Self> {
        if self.is_valid() {
            Some(self)
        } else {
            None
        }
    }

    /// The identifier text when valid and non-empty, the empty string
    /// otherwise.
    pub fn to_id_string(&self) -> &str {
        if self.is_valid() {
            &self.text
        } else {
            ""
        }
    }

    /// Promotes this identifier into the permissive wrapper. The wrapper's
    /// inner identifier is absent when this identifier does not resolve.
    pub fn validated(&self) -> Validated<C> {
        Validated::from_id(self)
    }

    /// An identifier holding the catalog's as-authored spelling for `entry`.
    pub(crate) fn canonical(entry: &'static Entry) -> Self {
        Self::from_static(entry.id)
    }
}

impl<C: Catalog> Identifier for Id<C> {
    fn id_text(&self) -> Option<&str> {
        if self.is_valid() {
            Some(&self.text)
        } else {
            None
        }
    }
}

impl<C: Catalog> Clone for Id<C> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            _catalog: PhantomData,
        }
    }
}

impl<C: Catalog> Default for Id<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: Catalog> PartialEq for Id<C> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl<C: Catalog> Eq for Id<C> {}

impl<C: Catalog> PartialEq<str> for Id<C> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl<C: Catalog> PartialEq<&str> for Id<C> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl<C: Catalog> Hash for Id<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl<C: Catalog> fmt::Debug for Id<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&C::NAME).field(&self.text).finish()
    }
}

impl<C: Catalog> fmt::Display for Id<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<C: Catalog> From<String> for Id<C> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<C: Catalog> From<&'static str> for Id<C> {
    fn from(text: &'static str) -> Self {
        Self::from_static(text)
    }
}

impl<C: Catalog> Serialize for Id<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.text.is_empty() {
            serializer.serialize_none()
        } else if let Some(entry) = self.entry() {
            serializer.serialize_str(entry.id)
        } else {
            Err(serde::ser::Error::custom(Error::invalid_marshal(
                C::NAME, &self.text,
            )))
        }
    }
}

impl<'de, C: Catalog> Deserialize<'de> for Id<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            // A null payload is treated like the empty string: absent.
            None | Some("") => Ok(Self::empty()),
            Some(text) => match C::registry().by_id_string(text) {
                Some(entry) => Ok(Self::canonical(entry)),
                None => Err(serde::de::Error::custom(Error::invalid_unmarshal(
                    C::NAME, text,
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::data::account_domain::AccountDomainId;
    use crate::error::INVALID_UNMARSHAL_ID;
    use serde_json::json;

    #[test]
    fn strict_decode_resolves_known_identifiers() {
        let id: AccountDomainId = serde_json::from_value(json!("direct")).unwrap();
        assert_eq!(id, AccountDomainId::DIRECT);
        assert!(id.is_valid());
    }

    #[test]
    fn strict_decode_case_folds_and_stores_canonical_text() {
        let id: AccountDomainId = serde_json::from_value(json!("DiReCt")).unwrap();
        assert_eq!(id.as_str(), "direct");
        assert!(id.is_valid());
    }

    #[test]
    fn strict_decode_fails_on_unknown_identifiers() {
        let error =
            serde_json::from_value::<AccountDomainId>(json!("unknown_domain")).unwrap_err();
        assert!(error.to_string().contains(INVALID_UNMARSHAL_ID));
    }

    #[test]
    fn strict_decode_treats_null_and_empty_as_absent() {
        let id: AccountDomainId = serde_json::from_value(json!(null)).unwrap();
        assert!(id.is_empty());
        assert!(!id.is_valid());

        let id: AccountDomainId = serde_json::from_value(json!("")).unwrap();
        assert!(id.is_empty());
        assert_eq!(id.to_id_string(), "");
    }

    #[test]
    fn strict_encode_round_trips_every_entry() {
        use crate::data::account_domain::ACCOUNT_DOMAINS;

        for entry in ACCOUNT_DOMAINS.entries() {
            let encoded = serde_json::to_value(AccountDomainId::from_static(entry.id)).unwrap();
            assert_eq!(encoded, json!(entry.id));
            let decoded: AccountDomainId = serde_json::from_value(encoded).unwrap();
            assert_eq!(decoded.as_str(), entry.id);
        }
    }

    #[test]
    fn strict_encode_rejects_unknown_identifiers() {
        let error = serde_json::to_value(AccountDomainId::new("bogus")).unwrap_err();
        assert!(error.to_string().contains(crate::error::INVALID_MARSHAL_ID));
    }

    #[test]
    fn strict_encode_renders_absent_as_null() {
        let encoded = serde_json::to_value(AccountDomainId::empty()).unwrap();
        assert_eq!(encoded, json!(null));
    }

    #[test]
    fn projection_and_id_string_track_validity() {
        let valid = AccountDomainId::DIRECT;
        assert!(valid.id().is_some());
        assert_eq!(valid.to_id_string(), "direct");

        let invalid = AccountDomainId::new("bogus");
        assert!(invalid.id().is_none());
        assert_eq!(invalid.to_id_string(), "");
    }
}
