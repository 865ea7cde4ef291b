//! # Error Types
//!
//! Structured error types for beam_core.
//!
//! Only catalog lookups are fallible in the Rust sense. Diagram
//! computation follows a different convention: a geometrically invalid
//! parameter set yields an empty point list with an error-flagged axis
//! label (see [`crate::catalog::DiagramSeries::error`]), so the caller can
//! always render a diagram area, even in the failure case.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type for catalog lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum CatalogError {
    /// No configuration with the requested id exists
    #[error("Configuration not found: {id}")]
    ConfigurationNotFound { id: String },
}

/// A parameter combination that violates a configuration's physical
/// constraints.
///
/// This is the single failure taxonomy of the diagram functions. It is
/// never propagated out of a shear/moment computation; it is converted to
/// the in-band empty-series signal. The `Display` text becomes part of the
/// error axis label, e.g. `"V (Error: invalid a)"`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Lengths are negative, non-finite, or their sum exceeds the span
    #[error("invalid lengths")]
    InvalidLengths,

    /// A named position parameter lies outside its admissible range
    #[error("invalid {name}")]
    InvalidPosition { name: &'static str },
}
