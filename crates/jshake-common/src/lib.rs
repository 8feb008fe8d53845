//! Common types and utilities for the jshake bundler core.
//!
//! This crate provides foundational types used across all jshake crates:
//! - Diagnostics (`Diagnostic`, categories, log codes)
//! - Position/line mapping for source locations (`LineMap`, `Location`)
//! - Shared option types (`ShakeOptions`, `JsxMode`)

pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, log_codes};

pub mod position;
pub use position::{LineMap, Location};

pub mod options;
pub use options::{JsxMode, ShakeOptions};
