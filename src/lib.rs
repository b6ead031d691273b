//! # locations-index
//!
//! Builds the `locations.json` index for the sea-level elevation profile
//! visualisation. Each location ships a `metadata.json` describing its
//! elevation cut (a GeoJSON-style feature with `properties.name`, the cut
//! geometry, and whatever else the frontend needs); this tool aggregates
//! those documents into the single index the browser fetches first.
//!
//! # Architecture: One Pass, One Write
//!
//! The whole program is a linear read → annotate → accumulate → write
//! pipeline:
//!
//! ```text
//! metadata.json ...  →  parse  →  + slug, metadata_file  →  locations.json
//! ```
//!
//! Each input document gets two derived fields under `properties`:
//!
//! - `slug`: the lowercased `properties.name`, which is also the entry's key
//!   in the emitted index and the path segment its data files live under.
//! - `metadata_file`: `{base-path}/{slug}/metadata.json`, the URL the
//!   frontend loads when the location is selected.
//!
//! Everything else in the document passes through untouched. The index is
//! serialized exactly once, after all inputs have been processed — a failed
//! run never emits a half-built document.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `BuildConfig` — base path and formatting options from the CLI |
//! | [`source`] | Input/output endpoints, including the `-` stdin/stdout convention |
//! | [`naming`] | Slug derivation from display names |
//! | [`urlpath`] | Forward-slash URL path joining |
//! | [`metadata`] | Field access over the loosely-typed location documents |
//! | [`index`] | The builder: parse, annotate, accumulate, serialize |
//! | [`output`] | Human-readable build summary printed to stderr |
//!
//! # Design Decisions
//!
//! ## Sorted Keys
//!
//! The index is held in a `BTreeMap`, so repeated runs over the same inputs
//! serialize to byte-identical output. JSON object key order carries no
//! meaning for the frontend; determinism is purely for diffable builds.
//!
//! ## Last Write Wins
//!
//! Two names that lowercase to the same slug collide on one index key, and
//! the later document in argument order replaces the earlier one. This is
//! deliberate: the slug is the location's identity as far as the frontend is
//! concerned, and refusing to build over a collision would turn a content
//! problem into a pipeline failure. The displacement is called out in the
//! build summary instead.
//!
//! ## Summary on Stderr
//!
//! By default the index itself goes to stdout, so all human-readable
//! reporting goes to stderr. Piping the tool into a file or another process
//! always yields clean JSON.

pub mod config;
pub mod index;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod source;
pub mod urlpath;

#[cfg(test)]
pub(crate) mod test_helpers;
