//! Sample recipes covering every seed family and most operators.

/// Recipes shown to newcomers, each a valid notation string.
///
/// ## Example
///
/// ```rust
/// use conway_notation::{compile, SAMPLE_RECIPES};
///
/// for recipe in SAMPLE_RECIPES {
///     assert!(compile(recipe).is_ok(), "{recipe}");
/// }
/// ```
pub const SAMPLE_RECIPES: &[&str] = &[
    "C2dakD",
    "oC20kkkT",
    "kn4C40A0dA4",
    "opD",
    "lT",
    "lK5oC",
    "knD",
    "dn6x4K5bT",
    "oox4P7",
    "n18n18n9n9n9soxY9",
];
