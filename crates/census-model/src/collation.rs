//! Locale-aware name ordering.
//!
//! Jurisdiction and state names are sorted the way a reader expects rather
//! than by code point: accents and case only break ties. Comparison is done
//! on three levels:
//!
//! 1. base letters (NFD decomposition, combining marks removed, lowercased)
//! 2. lowercased name with accents kept
//! 3. the original name, lowercase before uppercase
//!
//! `Cañon City` therefore sorts between `Canby` and `Canton`.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Precomputed sort key for a display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: String,
}

impl CollationKey {
    pub fn new(name: &str) -> Self {
        let primary = name
            .nfd()
            .filter(|ch| !is_combining_mark(*ch))
            .flat_map(char::to_lowercase)
            .collect();
        let secondary = name.nfc().flat_map(char::to_lowercase).collect();
        Self {
            primary,
            secondary,
            tertiary: invert_case(name),
        }
    }
}

/// Swap letter case so lowercase orders first at the last level.
fn invert_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
    }
    out
}

/// Compare two names using [`CollationKey`] ordering.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
