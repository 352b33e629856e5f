//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

/// Every recognized class or meta name, in canonical spelling.
pub(crate) const CLASS_NAMES: [&str; 9] = [
    "none", "all", "ddl", "function", "misc", "misc_set", "read", "role", "write",
];

/// A recognized name with each letter randomly upper- or lowercased.
pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    (
        prop::sample::select(CLASS_NAMES.to_vec()),
        prop::collection::vec(any::<bool>(), 8),
    )
        .prop_map(|(name, upper)| {
            name.chars()
                .zip(upper.into_iter().cycle())
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect()
        })
}

/// A well-formed list of recognized names, some negated, with varied spacing.
pub(crate) fn arb_class_list() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (any::<bool>(), arb_class_name(), prop::sample::select(vec!["", " ", "\t"])),
        1..8,
    )
    .prop_map(|elements| {
        elements
            .into_iter()
            .map(|(subtract, name, pad)| {
                let marker = if subtract { "-" } else { "" };
                format!("{pad}{marker}{name}{pad}")
            })
            .collect::<Vec<_>>()
            .join(",")
    })
}
