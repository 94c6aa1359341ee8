//! Side-by-side tool comparison command.
//!
//! The `gpupick compare <TOOL>...` command renders the membership matrix for
//! up to three tools. The ≤3 cap and the at-least-one requirement live in the
//! clap definition; this command only normalizes the list.

use crate::analysis::compare;
use crate::catalog::{Catalog, ToolRegistry};
use crate::cli::args::CompareArgs;
use crate::error::Result;
use crate::ui::{should_use_colors, GpupickTheme, Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The compare command implementation.
pub struct CompareCommand {
    args: CompareArgs,
}

impl CompareCommand {
    /// Create a new compare command.
    pub fn new(args: CompareArgs) -> Self {
        Self { args }
    }

    /// Deduplicate the requested tools, warning about names the catalog
    /// does not know. Unknown tools still get a column of misses.
    fn normalized_tools(&self, registry: &ToolRegistry, ui: &mut dyn UserInterface) -> Vec<String> {
        let mut tools: Vec<String> = Vec::new();
        for tool in &self.args.tools {
            if tools.contains(tool) {
                continue;
            }
            if !registry.contains(tool) {
                ui.warning(&format!("Tool '{}' is not in the catalog", tool));
            }
            tools.push(tool.clone());
        }
        tools
    }
}

impl Command for CompareCommand {
    fn execute(
        &self,
        catalog: &Catalog,
        registry: &ToolRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let tools = self.normalized_tools(registry, ui);
        let theme = if should_use_colors() {
            GpupickTheme::new()
        } else {
            GpupickTheme::plain()
        };

        ui.show_header(&format!("Comparing: {}", tools.join(" vs ")));

        let matrix = compare(registry, catalog, &tools);
        for category in &matrix.categories {
            if ui.output_mode().shows_status() {
                ui.message(&format!("{}", theme.key.apply_to(&category.category)));
            }

            let mut headers = vec!["Check".to_string()];
            headers.extend(tools.iter().cloned());
            let mut table = Table::new(headers);

            for row in &category.checks {
                let mut cells = vec![row.check.clone()];
                for (_, covers) in &row.tools {
                    cells.push(if *covers { "✓".to_string() } else { "✗".to_string() });
                }
                table.add_row(cells);
            }

            ui.message(&table.render());
            ui.message("");
        }

        Ok(CommandResult::success())
    }
}
