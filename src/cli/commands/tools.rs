//! Tools directory command.
//!
//! The `gpupick tools` command lists every distinct tool the catalog
//! references, in discovery order, with how much of the catalog it covers.

use crate::analysis::coverage;
use crate::catalog::{Catalog, ToolRegistry};
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The tools directory command implementation.
#[derive(Debug, Default)]
pub struct ToolsCommand;

impl ToolsCommand {
    /// Create a new tools command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for ToolsCommand {
    fn execute(
        &self,
        catalog: &Catalog,
        registry: &ToolRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        ui.show_header("Tools Directory");

        let mut table = Table::new(vec!["Tool", "Checks Covered", "Categories"]);
        for tool in registry.tools() {
            let categories_hit = coverage(registry, catalog, tool)
                .iter()
                .filter(|c| !c.included.is_empty())
                .count();
            table.add_row(vec![
                tool.clone(),
                registry.covered_check_count(tool).to_string(),
                categories_hit.to_string(),
            ]);
        }
        ui.message(&table.render());

        if ui.output_mode().shows_status() {
            ui.message(&format!(
                "{} tools referenced across {} categories ({} checks)",
                registry.tools().len(),
                catalog.categories.len(),
                catalog.check_count()
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_every_tool_once_with_counts() {
        let catalog = Catalog::builtin().unwrap();
        let registry = ToolRegistry::build(&catalog);
        let mut ui = MockUI::new();

        let result = ToolsCommand::new()
            .execute(&catalog, &registry, &mut ui)
            .unwrap();
        assert!(result.success);

        let output = ui.all_output();
        assert!(output.contains("HWINFO"));
        // HWINFO appears in many checks but gets a single directory row.
        assert_eq!(output.matches("│ HWINFO ").count(), 1);
        assert!(ui.headers().contains(&"Tools Directory".to_string()));
    }
}
