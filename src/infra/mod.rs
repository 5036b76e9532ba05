//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: runner environment access,
//! spec-file reading, and the Tapis HTTP client.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::output` are forbidden.

pub mod inputs;
pub mod reader;
pub mod tapis;
