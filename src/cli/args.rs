//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Gpupick - GPU diagnostic tool recommendation wizard.
#[derive(Debug, Parser)]
#[command(name = "gpupick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a catalog JSON file (overrides the built-in catalog)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Show expanded per-category detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the recommendation wizard (default if no command specified)
    Wizard(WizardArgs),

    /// List every tool in the catalog with its coverage
    Tools,

    /// Show one tool's coverage across all categories
    Tool(ToolArgs),

    /// Compare up to three tools side by side
    Compare(CompareArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `wizard` command.
#[derive(Debug, Clone, clap::Args)]
pub struct WizardArgs {
    /// Number of recommendations to show
    #[arg(short, long, default_value_t = 3)]
    pub top: usize,

    /// Write the recommendations to a CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

impl Default for WizardArgs {
    fn default() -> Self {
        Self { top: 3, csv: None }
    }
}

/// Arguments for the `tool` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ToolArgs {
    /// Tool name, exactly as it appears in the catalog
    pub name: String,
}

/// Arguments for the `compare` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompareArgs {
    /// Tool names to compare (1 to 3)
    #[arg(required = true, num_args = 1..=3)]
    pub tools: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["gpupick"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn wizard_defaults_to_top_three() {
        let cli = Cli::parse_from(["gpupick", "wizard"]);
        match cli.command {
            Some(Commands::Wizard(args)) => {
                assert_eq!(args.top, 3);
                assert!(args.csv.is_none());
            }
            other => panic!("expected wizard, got {:?}", other),
        }
    }

    #[test]
    fn compare_rejects_more_than_three_tools() {
        let result = Cli::try_parse_from(["gpupick", "compare", "a", "b", "c", "d"]);
        assert!(result.is_err());
    }

    #[test]
    fn compare_requires_at_least_one_tool() {
        assert!(Cli::try_parse_from(["gpupick", "compare"]).is_err());
    }

    #[test]
    fn global_catalog_flag_applies_after_subcommand() {
        let cli = Cli::parse_from(["gpupick", "tools", "--catalog", "/tmp/c.json"]);
        assert_eq!(cli.catalog.as_deref(), Some(std::path::Path::new("/tmp/c.json")));
    }
}
