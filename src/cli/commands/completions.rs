//! Shell completions generation.
//!
//! The `gpupick completions` command generates shell completion scripts.

use clap::CommandFactory;

use crate::catalog::{Catalog, ToolRegistry};
use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(
        &self,
        _catalog: &Catalog,
        _registry: &ToolRegistry,
        _ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "gpupick", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
