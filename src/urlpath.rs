//! URL path joining for the generated `metadata_file` field.
//!
//! These are browser-facing URL paths, not filesystem paths, so the
//! separator is always `/` regardless of platform. Joining inserts exactly
//! one separator between segments and collapses separators that would
//! otherwise double up:
//!
//! - `join("/", &["amsterdam", "metadata.json"])` → `"/amsterdam/metadata.json"`
//! - `join("/data/", &["x", "metadata.json"])` → `"/data/x/metadata.json"`
//! - `join("", &["x", "metadata.json"])` → `"x/metadata.json"`
//!
//! A segment with leading separators does not reset the accumulated path;
//! its extra separators collapse into the single joining one.

/// Join `segments` onto `base` with forward-slash semantics.
pub fn join(base: &str, segments: &[&str]) -> String {
    let mut path = base.to_string();
    for segment in segments {
        if path.is_empty() {
            path.push_str(segment);
            continue;
        }
        if !path.ends_with('/') {
            path.push('/');
        }
        path.push_str(segment.trim_start_matches('/'));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_base() {
        assert_eq!(
            join("/", &["amsterdam", "metadata.json"]),
            "/amsterdam/metadata.json"
        );
    }

    #[test]
    fn base_without_trailing_separator() {
        assert_eq!(join("/data", &["x", "metadata.json"]), "/data/x/metadata.json");
    }

    #[test]
    fn base_with_trailing_separator_not_doubled() {
        assert_eq!(
            join("/data/", &["x", "metadata.json"]),
            "/data/x/metadata.json"
        );
    }

    #[test]
    fn empty_base_yields_relative_path() {
        assert_eq!(join("", &["x", "metadata.json"]), "x/metadata.json");
    }

    #[test]
    fn segment_leading_separators_collapsed() {
        assert_eq!(join("/data", &["/x", "metadata.json"]), "/data/x/metadata.json");
        assert_eq!(join("/data/", &["//x", "y"]), "/data/x/y");
    }

    #[test]
    fn empty_segment_contributes_nothing_extra() {
        assert_eq!(join("/", &["", "metadata.json"]), "/metadata.json");
        assert_eq!(join("/data", &["", "metadata.json"]), "/data/metadata.json");
    }

    #[test]
    fn slug_with_spaces_survives() {
        assert_eq!(
            join("/data", &["everest base camp", "metadata.json"]),
            "/data/everest base camp/metadata.json"
        );
    }

    #[test]
    fn relative_base() {
        assert_eq!(join("data", &["x", "metadata.json"]), "data/x/metadata.json");
    }
}
