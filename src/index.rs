//! Index assembly: the parse → annotate → accumulate pipeline.
//!
//! Consumes the metadata sources in argument order and produces the mapping
//! the frontend fetches as `locations.json`:
//!
//! ```text
//! {
//!   "amsterdam": { "properties": { "name": "Amsterdam", "slug": "amsterdam",
//!                                  "metadata_file": "/amsterdam/metadata.json", ... }, ... },
//!   "utrecht":   { ... }
//! }
//! ```
//!
//! Every entry's key equals its own `properties.slug`. When two input names
//! lowercase to the same slug, the later document replaces the earlier one;
//! the displacement is recorded so the build summary can report it.
//!
//! Any failure — an unreadable source, invalid JSON, a missing or non-string
//! `properties.name` — aborts the whole build. There is no partial-success
//! mode: the caller only serializes the index after this module returns `Ok`.

use crate::config::BuildConfig;
use crate::metadata::{self, FieldError};
use crate::naming;
use crate::source::{Input, SourceError};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("{origin}: invalid JSON: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
    #[error("{origin}: {source}")]
    Field { origin: String, source: FieldError },
}

/// The assembled mapping from slug to annotated metadata document.
///
/// Keys are kept sorted so repeated runs over the same inputs serialize to
/// identical bytes.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct LocationIndex {
    locations: BTreeMap<String, Value>,
}

impl LocationIndex {
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&Value> {
        self.locations.get(slug)
    }

    /// All slugs in key order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    /// Serialize the index as one JSON object, compact by default.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Bookkeeping for one indexed document, in argument order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    /// Derived mapping key.
    pub slug: String,
    /// Where the document came from (path, or `<stdin>`).
    pub origin: String,
    /// Computed `properties.metadata_file` value.
    pub metadata_file: String,
    /// Origin of the earlier entry this document displaced, if any.
    pub replaced: Option<String>,
}

/// Outcome of a build: the index plus per-document records for the summary.
#[derive(Debug)]
pub struct BuildResult {
    pub index: LocationIndex,
    pub records: Vec<IndexRecord>,
}

/// Build the location index from the given sources, in order.
pub fn build_index(config: &BuildConfig, inputs: &[Input]) -> Result<BuildResult, IndexError> {
    let mut index = LocationIndex::default();
    let mut records = Vec::with_capacity(inputs.len());
    // Origin currently holding each slug; a displaced insert hands back the
    // origin being replaced.
    let mut holders: BTreeMap<String, String> = BTreeMap::new();

    for input in inputs {
        let origin = input.origin();
        let raw = input.read()?;

        let mut doc: Value = serde_json::from_str(&raw).map_err(|source| IndexError::Parse {
            origin: origin.clone(),
            source,
        })?;

        let name = metadata::location_name(&doc)
            .map_err(|source| IndexError::Field {
                origin: origin.clone(),
                source,
            })?
            .to_string();

        let slug = naming::derive_slug(&name);
        let metadata_file = config.metadata_file_path(&slug);
        metadata::annotate(&mut doc, &slug, &metadata_file).map_err(|source| {
            IndexError::Field {
                origin: origin.clone(),
                source,
            }
        })?;

        index.locations.insert(slug.clone(), doc);
        let replaced = holders.insert(slug.clone(), origin.clone());

        records.push(IndexRecord {
            slug,
            origin,
            metadata_file,
            replaced,
        });
    }

    Ok(BuildResult { index, records })
}
