//! Error types for gpupick operations.
//!
//! This module defines [`GpupickError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GpupickError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GpupickError::Other`) for unexpected errors
//! - Catalog cross-reference mismatches (a session naming a check the catalog
//!   lacks) are never errors; the analysis layer skips them silently

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gpupick operations.
#[derive(Debug, Error)]
pub enum GpupickError {
    /// Catalog file not found at the given location.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse a catalog document.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// Referenced tool does not exist anywhere in the catalog.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// A reorder operation was given an index outside the sequence.
    #[error("Invalid reorder: cannot move item {from} to {to} in a list of {len}")]
    InvalidReorder { from: usize, to: usize, len: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gpupick operations.
pub type Result<T> = std::result::Result<T, GpupickError>;
