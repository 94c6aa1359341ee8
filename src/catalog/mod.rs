//! Static catalog of diagnostic categories, checks, and tools.
//!
//! The catalog is read-only reference data: categories group checks, and each
//! check names the tools that satisfy it. Tools are never declared as records
//! of their own; [`ToolRegistry`] materializes them from the check references.
//!
//! # Architecture
//!
//! - [`schema`] - Serde data model and catalog loading
//! - [`builtin`] - The GPU diagnostics catalog embedded at compile time
//! - [`registry`] - Discovery-ordered tool index derived from a catalog

pub mod builtin;
pub mod registry;
pub mod schema;

pub use registry::ToolRegistry;
pub use schema::{Catalog, Category, Check};
