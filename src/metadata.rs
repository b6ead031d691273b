//! Field access over loosely-typed location documents.
//!
//! Input documents are arbitrary JSON — GeoJSON features in practice, with
//! `geometry` and a grab-bag of `properties` — and the builder treats them
//! as opaque except for three fields under `properties`:
//!
//! - `name` is read (required),
//! - `slug` and `metadata_file` are written, replacing any existing values.
//!
//! There is no schema. Everything the builder doesn't touch passes through
//! to the emitted index byte-for-byte, so new frontend fields never require
//! a pipeline change.
//!
//! The required-field check is explicit: a document without a string
//! `properties.name` is rejected with a dedicated error here rather than a
//! failed lookup somewhere downstream, and "absent" is reported distinctly
//! from "present but not a string".

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("document has no properties.name field")]
    MissingName,
    #[error("properties.name is not a string")]
    NameNotText,
}

const NAME_FIELD: &str = "name";
const SLUG_FIELD: &str = "slug";
const METADATA_FILE_FIELD: &str = "metadata_file";

/// Read the required `properties.name` field of a location document.
///
/// Any document shape that does not provide the field — a non-object
/// document, a non-object `properties`, or a missing key — reports
/// [`FieldError::MissingName`]; a present value of the wrong type reports
/// [`FieldError::NameNotText`].
pub fn location_name(doc: &Value) -> Result<&str, FieldError> {
    let name = doc
        .get("properties")
        .and_then(|props| props.get(NAME_FIELD))
        .ok_or(FieldError::MissingName)?;
    name.as_str().ok_or(FieldError::NameNotText)
}

/// Write the derived `properties.slug` and `properties.metadata_file` fields
/// into a document, overwriting existing values and leaving every other
/// field untouched.
///
/// Callers resolve the name via [`location_name`] first, which guarantees
/// `properties` is an object; a document that never passed that check fails
/// here with the same [`FieldError::MissingName`].
pub fn annotate(doc: &mut Value, slug: &str, metadata_file: &str) -> Result<(), FieldError> {
    let props = doc
        .get_mut("properties")
        .and_then(Value::as_object_mut)
        .ok_or(FieldError::MissingName)?;
    props.insert(SLUG_FIELD.to_string(), Value::String(slug.to_string()));
    props.insert(
        METADATA_FILE_FIELD.to_string(),
        Value::String(metadata_file.to_string()),
    );
    Ok(())
}
