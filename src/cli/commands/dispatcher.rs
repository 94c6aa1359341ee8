//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::catalog::{Catalog, ToolRegistry};
use crate::cli::args::{Cli, Commands, WizardArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against the loaded catalog.
    fn execute(
        &self,
        catalog: &Catalog,
        registry: &ToolRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    catalog_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher. With no path, the built-in catalog is used.
    pub fn new(catalog_path: Option<PathBuf>) -> Self {
        Self { catalog_path }
    }

    /// Load the catalog this invocation works against.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                tracing::debug!("loading catalog from {}", path.display());
                Catalog::from_path(path)
            }
            None => Catalog::builtin(),
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation.
    /// No subcommand means the wizard with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = self.load_catalog()?;
        let registry = ToolRegistry::build(&catalog);

        match &cli.command {
            Some(Commands::Wizard(args)) => {
                let cmd = super::wizard::WizardCommand::new(args.clone());
                cmd.execute(&catalog, &registry, ui)
            }
            Some(Commands::Tools) => {
                let cmd = super::tools::ToolsCommand::new();
                cmd.execute(&catalog, &registry, ui)
            }
            Some(Commands::Tool(args)) => {
                let cmd = super::tool::ToolCommand::new(args.clone());
                cmd.execute(&catalog, &registry, ui)
            }
            Some(Commands::Compare(args)) => {
                let cmd = super::compare::CompareCommand::new(args.clone());
                cmd.execute(&catalog, &registry, ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(&catalog, &registry, ui)
            }
            None => {
                let cmd = super::wizard::WizardCommand::new(WizardArgs::default());
                cmd.execute(&catalog, &registry, ui)
            }
        }
    }
}
