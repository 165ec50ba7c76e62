//! Canonical identifier catalogs shared across the insurance microservice
//! fleet.
//!
//! Each enumeration in [`data`] is a closed catalog of entries with a stable
//! string identifier, exposed through three cooperating types:
//!
//! - [`Id`] — the strict identifier value. Its serde codec fails loudly on
//!   unknown identifiers in either direction.
//! - [`Validated`] — the permissive wrapper. Its decoder never fails at
//!   field level; it captures the raw input and records errors for post-hoc
//!   triage.
//! - a [`Registry`] singleton per catalog with case-insensitive lookup,
//!   positional lookup, and one constant per entry.
//!
//! Both types also speak a second, tag-element wire format via
//! [`Id::to_xml`]/[`Id::from_xml`] and their [`Validated`] counterparts.
//!
//! # Example
//!
//! ```
//! use enumerations::data::brand::{BrandId, ValidatedBrandId, BRANDS};
//!
//! // Strict: unknown identifiers abort the document decode.
//! assert!(serde_json::from_str::<BrandId>("\"sloth\"").is_err());
//!
//! // Permissive: unknown identifiers are captured for triage.
//! let wrapper: ValidatedBrandId = serde_json::from_str("\"sloth\"").unwrap();
//! assert!(!wrapper.is_valid());
//! assert_eq!(wrapper.captured_value(), Some("sloth"));
//!
//! // Lookups are case-insensitive and positional.
//! assert_eq!(BRANDS.by_id_string("Elephant").unwrap().id, "elephant");
//! assert_eq!(BRANDS.by_index(0).unwrap().id, "elephant");
//! ```

pub mod catalog;
pub mod data;
pub mod error;
pub mod id;
pub mod validated;
pub mod xml;

mod macros;

pub use crate::catalog::{Catalog, Entry, Identifier, Registry, View};
pub use crate::error::{Error, Result, INVALID_MARSHAL_ID, INVALID_UNMARSHAL_ID};
pub use crate::id::Id;
pub use crate::validated::Validated;
