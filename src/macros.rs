// Generates one enumeration: the catalog marker type, the `Id`/`Validated`
// aliases, one identifier constant per entry, and the registry singleton.
//
// Entry rows are `(CONST_NAME, id, description, symbolic_name, sort_order)`
// with an optional trailing `[("key", "value"), ...]` metadata block.
macro_rules! define_catalog {
    (
        $(#[$docs:meta])*
        marker: $marker:ident,
        id: $id_alias:ident,
        validated: $validated_alias:ident,
        registry: $registry:ident,
        name: $name:literal,
        description: $description:literal,
        entries: [
            $(
                (
                    $const_name:ident,
                    $id:literal,
                    $entry_description:literal,
                    $symbolic:literal,
                    $sort:expr
                    $(, [$(($meta_key:literal, $meta_value:literal)),* $(,)?])?
                ),
            )+
        ]
    ) => {
        $(#[$docs])*
        #[derive(Debug, Clone, Copy)]
        pub enum $marker {}

        impl $crate::catalog::Catalog for $marker {
            const NAME: &'static str = $name;

            fn registry() -> &'static $crate::catalog::Registry {
                std::sync::LazyLock::force(&$registry)
            }
        }

        #[doc = concat!("Identifier value for the `", $name, "` catalog.")]
        pub type $id_alias = $crate::id::Id<$marker>;

        #[doc = concat!("Permissive wrapper for the `", $name, "` catalog.")]
        pub type $validated_alias = $crate::validated::Validated<$marker>;

        impl $crate::id::Id<$marker> {
            $(
                #[doc = $entry_description]
                pub const $const_name: Self = Self::from_static($id);
            )+
        }

        #[doc = $description]
        pub static $registry: std::sync::LazyLock<$crate::catalog::Registry> =
            std::sync::LazyLock::new(|| {
                static ENTRIES: &[$crate::catalog::Entry] = &[
                    $(
                        $crate::catalog::Entry {
                            id: $id,
                            description: $entry_description,
                            symbolic_name: $symbolic,
                            sort_order: $sort,
                            meta: &[$($(($meta_key, $meta_value)),*)?],
                        },
                    )+
                ];
                $crate::catalog::Registry::new($name, $description, ENTRIES)
            });
    };
}

pub(crate) use define_catalog;
