//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the catalog
//! once, builds the tool registry, and routes CLI subcommands to their
//! implementations.

pub mod compare;
pub mod completions;
pub mod dispatcher;
pub mod tool;
pub mod tools;
pub mod wizard;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
