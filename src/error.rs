//! Error types shared by the strict and permissive codecs.

/// Sentinel carried by errors raised while encoding an identifier that is
/// non-empty but not present in its catalog.
pub const INVALID_MARSHAL_ID: &str = "InvalidMarshalID";

/// Sentinel carried by errors raised while decoding an identifier that is
/// non-empty but not present in its catalog.
pub const INVALID_UNMARSHAL_ID: &str = "InvalidUnmarshalID";

/// Alias of [`std::result::Result`] defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error returned by the identifier codecs.
///
/// Transport-level parse failures from the underlying format parser are
/// carried in [`Error::Malformed`] without reclassification; the two
/// identifier-specific failures carry the catalog name and the offending
/// value for triage.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Strict encode of a non-empty identifier with no catalog entry.
    #[error("{}: no {catalog} entry matches {value:?}", INVALID_MARSHAL_ID)]
    InvalidMarshalId {
        /// Name of the catalog that rejected the value.
        catalog: &'static str,
        /// The identifier text that failed to resolve.
        value: String,
    },

    /// Decode of a non-empty identifier with no catalog entry.
    #[error("{}: no {catalog} entry matches {value:?}", INVALID_UNMARSHAL_ID)]
    InvalidUnmarshalId {
        /// Name of the catalog that rejected the value.
        catalog: &'static str,
        /// The identifier text that failed to resolve.
        value: String,
    },

    /// Malformed payload reported by the underlying wire-format parser.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl Error {
    pub(crate) fn invalid_marshal(catalog: &'static str, value: &str) -> Self {
        Self::InvalidMarshalId {
            catalog,
            value: value.to_owned(),
        }
    }

    pub(crate) fn invalid_unmarshal(catalog: &'static str, value: &str) -> Self {
        Self::InvalidUnmarshalId {
            catalog,
            value: value.to_owned(),
        }
    }

    /// The well-known sentinel for this error, if it is one of the two
    /// identifier failures.
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            Self::InvalidMarshalId { .. } => Some(INVALID_MARSHAL_ID),
            Self::InvalidUnmarshalId { .. } => Some(INVALID_UNMARSHAL_ID),
            Self::Malformed(_) => None,
        }
    }

    /// Whether this is an [`Error::InvalidMarshalId`].
    pub fn is_invalid_marshal(&self) -> bool {
        matches!(self, Self::InvalidMarshalId { .. })
    }

    /// Whether this is an [`Error::InvalidUnmarshalId`].
    pub fn is_invalid_unmarshal(&self) -> bool {
        matches!(self, Self::InvalidUnmarshalId { .. })
    }
}

impl From<quick_xml::Error> for Error {
    fn from(error: quick_xml::Error) -> Self {
        Self::Malformed(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_appear_in_display_output() {
        let marshal = Error::invalid_marshal("Brand", "nope");
        assert!(marshal.to_string().starts_with(INVALID_MARSHAL_ID));
        assert_eq!(marshal.sentinel(), Some(INVALID_MARSHAL_ID));

        let unmarshal = Error::invalid_unmarshal("Brand", "nope");
        assert!(unmarshal.to_string().starts_with(INVALID_UNMARSHAL_ID));
        assert_eq!(unmarshal.sentinel(), Some(INVALID_UNMARSHAL_ID));

        assert_eq!(Error::Malformed("eof".into()).sentinel(), None);
    }
}
