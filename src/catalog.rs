//! Catalog rows, registries, and the lookup contracts they expose.
//!
//! Every enumeration in [`crate::data`] is an instance of the same shape: an
//! ordered, immutable table of [`Entry`] rows wrapped in a [`Registry`] that
//! indexes them by ASCII-lowercased identifier. Registries are process-wide
//! singletons built once on first access; lookups hand out references into
//! the shared table and never allocate.

use std::collections::HashMap;

/// One row of a catalog.
///
/// The `id` is the canonical wire form: unique case-insensitively within its
/// catalog, matched case-insensitively on lookup, and emitted as-authored on
/// output. `meta` is the raw key/value payload; catalogs that promote
/// specific keys to typed accessors (log areas, header keys, mileage bounds)
/// still leave the raw pairs visible here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Stable textual identifier, the canonical wire form.
    pub id: &'static str,
    /// Human-readable long form.
    pub description: &'static str,
    /// Programmer-facing short form; names the entry's constant.
    pub symbolic_name: &'static str,
    /// Ordering hint. Informational only; authoring order is authoritative.
    pub sort_order: i32,
    /// Optional string metadata attached to the entry.
    pub meta: &'static [(&'static str, &'static str)],
}

impl Entry {
    /// Looks up a metadata value by key.
    pub fn meta_value(&self, key: &str) -> Option<&'static str> {
        self.meta
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }

    /// Reads a boolean-in-string metadata value. Anything but `"true"` is
    /// false, including an absent key.
    pub fn meta_flag(&self, key: &str) -> bool {
        matches!(self.meta_value(key), Some("true"))
    }
}

/// The minimal capability shared by [`Id`](crate::Id) and
/// [`Validated`](crate::Validated): enough for a registry to resolve either
/// form through [`Registry::by_id`].
pub trait Identifier {
    /// The identifier text, if this value currently resolves in its catalog.
    fn id_text(&self) -> Option<&str>;

    /// Whether this value currently resolves in its catalog.
    fn is_valid(&self) -> bool {
        self.id_text().is_some()
    }
}

/// Marker trait tying an identifier type to its catalog.
///
/// Implemented by the uninhabited marker type that `define_catalog!`
/// generates for each enumeration.
pub trait Catalog: 'static {
    /// Registry name, used in error payloads.
    const NAME: &'static str;

    /// The process-wide registry singleton for this catalog.
    fn registry() -> &'static Registry;
}

/// An enumeration's registry: the ordered entries plus the case-folded
/// identifier index.
#[derive(Debug)]
pub struct Registry {
    name: &'static str,
    description: &'static str,
    entries: &'static [Entry],
    index: HashMap<String, usize>,
}

impl Registry {
    pub(crate) fn new(
        name: &'static str,
        description: &'static str,
        entries: &'static [Entry],
    ) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let previous = index.insert(entry.id.to_ascii_lowercase(), position);
            debug_assert!(
                previous.is_none(),
                "duplicate identifier {:?} in catalog {name}",
                entry.id,
            );
        }
        tracing::debug!(catalog = name, entries = entries.len(), "catalog index built");
        Self {
            name,
            description,
            entries,
            index,
        }
    }

    /// Registry name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registry description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// All entries, in authoring order.
    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves an identifier-shaped value. Invalid or absent identifiers
    /// yield `None`, never an error.
    pub fn by_id<I: Identifier + ?Sized>(&self, id: &I) -> Option<&'static Entry> {
        self.by_id_string(id.id_text()?)
    }

    /// Resolves raw identifier text, case-insensitively. Empty text is
    /// rejected.
    pub fn by_id_string(&self, text: &str) -> Option<&'static Entry> {
        if text.is_empty() {
            return None;
        }
        let position = *self.index.get(&text.to_ascii_lowercase())?;
        Some(&self.entries[position])
    }

    /// Returns the entry at `position` in authoring order.
    pub fn by_index(&self, position: usize) -> Option<&'static Entry> {
        self.entries.get(position)
    }
}

/// A restricted view over a subset of another registry's entries.
///
/// Views share the parent's rows; lookups see only the subset. Used by
/// catalogs that publish named sub-collections.
#[derive(Debug)]
pub struct View {
    name: &'static str,
    description: &'static str,
    members: Vec<&'static Entry>,
    index: HashMap<String, usize>,
}

impl View {
    pub(crate) fn new(
        name: &'static str,
        description: &'static str,
        parent: &Registry,
        ids: &[&str],
    ) -> Self {
        let members: Vec<&'static Entry> = ids
            .iter()
            .filter_map(|id| parent.by_id_string(id))
            .collect();
        debug_assert_eq!(
            members.len(),
            ids.len(),
            "view {name} references identifiers missing from {}",
            parent.name(),
        );
        let mut index = HashMap::with_capacity(members.len());
        for (position, entry) in members.iter().enumerate() {
            index.insert(entry.id.to_ascii_lowercase(), position);
        }
        tracing::debug!(view = name, members = members.len(), "sub-collection built");
        Self {
            name,
            description,
            members,
            index,
        }
    }

    /// View name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// View description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The member entries, in the order the view declares them.
    pub fn entries(&self) -> &[&'static Entry] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the view holds no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Resolves an identifier-shaped value against the subset.
    pub fn by_id<I: Identifier + ?Sized>(&self, id: &I) -> Option<&'static Entry> {
        self.by_id_string(id.id_text()?)
    }

    /// Resolves raw identifier text against the subset, case-insensitively.
    pub fn by_id_string(&self, text: &str) -> Option<&'static Entry> {
        if text.is_empty() {
            return None;
        }
        let position = *self.index.get(&text.to_ascii_lowercase())?;
        Some(self.members[position])
    }

    /// Returns the member at `position` in declaration order.
    pub fn by_index(&self, position: usize) -> Option<&'static Entry> {
        self.members.get(position).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ROWS: &[Entry] = &[
        Entry {
            id: "alpha",
            description: "First row",
            symbolic_name: "Alpha",
            sort_order: 0,
            meta: &[("flavor", "crunchy")],
        },
        Entry {
            id: "beta",
            description: "Second row",
            symbolic_name: "Beta",
            sort_order: 1,
            meta: &[],
        },
    ];

    fn registry() -> Registry {
        Registry::new("Test", "Test rows", ROWS)
    }

    #[test]
    fn index_covers_every_entry() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        for (position, entry) in registry.entries().iter().enumerate() {
            assert_eq!(registry.by_id_string(entry.id), Some(entry));
            assert_eq!(
                registry.by_id_string(&entry.id.to_ascii_uppercase()),
                Some(entry),
            );
            assert_eq!(registry.by_index(position), Some(entry));
        }
    }

    #[test]
    fn lookups_reject_empty_and_unknown_text() {
        let registry = registry();
        assert_eq!(registry.by_id_string(""), None);
        assert_eq!(registry.by_id_string("gamma"), None);
        assert_eq!(registry.by_index(2), None);
    }

    #[test]
    fn meta_accessors() {
        let registry = registry();
        let alpha = registry.by_id_string("alpha").unwrap();
        assert_eq!(alpha.meta_value("flavor"), Some("crunchy"));
        assert_eq!(alpha.meta_value("missing"), None);
        assert!(!alpha.meta_flag("flavor"));
    }

    #[test]
    fn views_see_only_their_subset() {
        let registry = registry();
        let view = View::new("Alphas", "Only alpha", &registry, &["alpha"]);
        assert_eq!(view.len(), 1);
        assert_eq!(view.by_id_string("ALPHA").map(|e| e.id), Some("alpha"));
        assert_eq!(view.by_id_string("beta"), None);
        assert_eq!(view.by_index(0).map(|e| e.id), Some("alpha"));
        assert_eq!(view.by_index(1), None);
    }
}
