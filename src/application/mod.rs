//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain` — never on `crate::infra` or
//! `crate::output`.

pub mod ports;
pub mod services;

pub use ports::{ActionInputs, AppCreator, DEFAULT_BASE_PATH, OutputSink, SpecReader, WorkflowLog};
