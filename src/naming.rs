//! Slug derivation from location display names.
//!
//! Every location is keyed by its slug: the lowercase form of
//! `properties.name`. The same string is used as the index key, written back
//! into the document as `properties.slug`, and embedded as a path segment in
//! `properties.metadata_file`, so derivation must be byte-stable from run to
//! run.
//!
//! Lowercasing is full Unicode lowercasing, not ASCII-only:
//! - `"Amsterdam"` → `"amsterdam"`
//! - `"Everest Base Camp"` → `"everest base camp"` (spaces preserved)
//! - `"Århus"` → `"århus"`
//!
//! Nothing else is normalized. Spaces, punctuation, and non-ASCII characters
//! all survive, matching what the data pipeline has always served under.

/// Derive the index slug for a location display name.
pub fn derive_slug(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_case_lowered() {
        assert_eq!(derive_slug("Amsterdam"), "amsterdam");
    }

    #[test]
    fn spaces_preserved() {
        assert_eq!(derive_slug("Everest Base Camp"), "everest base camp");
    }

    #[test]
    fn already_lowercase_unchanged() {
        assert_eq!(derive_slug("utrecht"), "utrecht");
    }

    #[test]
    fn unicode_lowercased() {
        assert_eq!(derive_slug("Århus"), "århus");
    }

    #[test]
    fn digits_and_punctuation_untouched() {
        assert_eq!(derive_slug("Area-51 (North)"), "area-51 (north)");
    }

    #[test]
    fn empty_name_gives_empty_slug() {
        assert_eq!(derive_slug(""), "");
    }
}
