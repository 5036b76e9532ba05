//! Domain layer — pure types and validation for the app-spec document.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `crate::output`, `tokio`, `std::fs`, or `std::net`. All functions are
//! synchronous and take data in, returning data out.

pub mod error;
pub mod spec;

pub use error::{InputError, SpecFileError, SpecRejection};
pub use spec::{AppSpec, CONTAINER_IMAGE_FIELD, REQUIRED_FIELDS, first_image_tag};
