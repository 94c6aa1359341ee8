//! Gpupick - GPU diagnostic tool recommendation wizard.
//!
//! Gpupick is a CLI tool that walks a user through selecting and prioritizing
//! GPU health checks, then ranks the diagnostic tools that best cover the
//! prioritized set. It also ships a static tools directory, per-tool coverage
//! summaries, and a side-by-side tool comparison.
//!
//! # Modules
//!
//! - [`analysis`] - Scoring, coverage, and comparison engines
//! - [`catalog`] - Static catalog of categories, checks, and tools
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`export`] - CSV serialization of recommendations
//! - [`session`] - Per-run selection and ranking state
//! - [`ui`] - Interactive prompts, tables, and terminal output
//!
//! # Example
//!
//! ```
//! use gpupick::analysis::recommend;
//! use gpupick::catalog::{Catalog, ToolRegistry};
//! use gpupick::session::{RankingOrder, SelectionSet};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let registry = ToolRegistry::build(&catalog);
//!
//! // Nothing selected yet: every tool scores zero, in discovery order.
//! let ranked = recommend(
//!     &registry,
//!     &catalog,
//!     &SelectionSet::default(),
//!     &RankingOrder::default(),
//! );
//! assert!(ranked.iter().all(|t| t.score == 0));
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod session;
pub mod ui;

pub use error::{GpupickError, Result};
