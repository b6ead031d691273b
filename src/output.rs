//! CLI build summary formatting.
//!
//! The summary goes to stderr, never stdout — stdout may be carrying the
//! serialized index itself when `--output` is omitted, and piping the tool
//! must always yield clean JSON.
//!
//! Each indexed document gets a numbered header line with indented context
//! lines underneath, in argument order:
//!
//! ```text
//! Locations
//! 001 amsterdam
//!     Source: data/amsterdam/metadata.json
//!     Metadata file: /data/amsterdam/metadata.json
//! 002 everest base camp
//!     Source: everest.json
//!     Metadata file: /data/everest base camp/metadata.json
//!     Replaced: entry from old-everest.json
//!
//! Indexed 2 locations from 2 documents → dist/locations.json
//! ```
//!
//! `format_*` functions are pure and return lines; `print_*` wrappers do the
//! writing.

use crate::index::BuildResult;
use crate::source::OutputTarget;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the build summary: one entry per input document in argument order,
/// closed by a one-line total.
pub fn format_build_summary(result: &BuildResult, target: &OutputTarget) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Locations".to_string());
    for (i, record) in result.records.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), record.slug));
        lines.push(format!("    Source: {}", record.origin));
        lines.push(format!("    Metadata file: {}", record.metadata_file));
        if let Some(ref earlier) = record.replaced {
            lines.push(format!("    Replaced: entry from {}", earlier));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Indexed {} locations from {} documents \u{2192} {}",
        result.index.len(),
        result.records.len(),
        target.describe()
    ));

    lines
}

/// Print the build summary to stderr.
pub fn print_build_summary(result: &BuildResult, target: &OutputTarget) {
    for line in format_build_summary(result, target) {
        eprintln!("{}", line);
    }
}
