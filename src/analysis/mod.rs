//! Scoring, coverage, and comparison engines.
//!
//! Everything in this module is pure, synchronous computation over an
//! immutable catalog plus borrowed session snapshots. Each call recomputes
//! from scratch and returns fresh values; identical inputs always produce
//! identical, identically ordered output.
//!
//! # Architecture
//!
//! - [`scoring`] - Ranked tool recommendations from a selection and ranking
//! - [`coverage`] - Session-independent per-tool catalog coverage
//! - [`compare`] - Side-by-side membership matrix for a handful of tools

pub mod compare;
pub mod coverage;
pub mod scoring;

pub use compare::{compare, CategoryComparison, CheckComparison, ComparisonMatrix};
pub use coverage::{coverage, CategoryCoverage};
pub use scoring::{recommend, CategoryScore, ToolAnalysis};
