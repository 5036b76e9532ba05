//! Pure app-spec document model and validation — no I/O, no async.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::SpecRejection;

/// Keys that must be present and non-empty for a document to be accepted as
/// a Tapis app spec.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "id",
    "version",
    "description",
    "owner",
    "runtime",
    "jobType",
    "jobAttributes",
];

/// Key overridden when deriving the submission copy.
pub const CONTAINER_IMAGE_FIELD: &str = "containerImage";

/// A Tapis application specification, held verbatim as parsed from disk.
///
/// The document is passive: unknown keys are preserved and submitted
/// unchanged, and nothing here mutates it. [`AppSpec::with_container_image`]
/// returns a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppSpec {
    doc: Value,
}

impl AppSpec {
    #[must_use]
    pub fn new(doc: Value) -> Self {
        Self { doc }
    }

    /// Check the document against [`REQUIRED_FIELDS`], rejecting on the
    /// first key that is missing or empty. Total and pure: a malformed
    /// (non-object) document is a rejection, never a panic.
    ///
    /// # Errors
    ///
    /// Returns the first [`SpecRejection`] encountered, in field order.
    pub fn validate(&self) -> Result<(), SpecRejection> {
        let Some(fields) = self.doc.as_object() else {
            return Err(SpecRejection::NotAnObject);
        };
        for field in REQUIRED_FIELDS {
            match fields.get(field) {
                None => return Err(SpecRejection::MissingField(field)),
                Some(value) if !is_present(value) => {
                    return Err(SpecRejection::EmptyField(field));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Derived copy with [`CONTAINER_IMAGE_FIELD`] set to `image`; `self` is
    /// left untouched. Only meaningful for documents that passed
    /// [`AppSpec::validate`]; a non-object document is returned unchanged.
    #[must_use]
    pub fn with_container_image(&self, image: &str) -> Self {
        let mut doc = self.doc.clone();
        if let Value::Object(fields) = &mut doc {
            fields.insert(
                CONTAINER_IMAGE_FIELD.to_owned(),
                Value::String(image.to_owned()),
            );
        }
        Self { doc }
    }

    /// Look up a top-level field of the document.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.doc.get(key)
    }
}

/// A field counts as present when it is not `null`, not `false`, not numeric
/// zero, and not the empty string. Empty arrays and objects count as present.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Select the image reference from a comma-separated tag list: the first
/// entry that is non-empty after trimming, or `None` when there is no usable
/// entry.
#[must_use]
pub fn first_image_tag(tags: &str) -> Option<&str> {
    tags.split(',').map(str::trim).find(|tag| !tag.is_empty())
}
