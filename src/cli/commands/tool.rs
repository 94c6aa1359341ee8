//! Per-tool coverage summary command.
//!
//! The `gpupick tool <NAME>` command shows what one tool covers in the full
//! catalog, independent of any wizard session.

use crate::analysis::coverage;
use crate::catalog::{Catalog, ToolRegistry};
use crate::cli::args::ToolArgs;
use crate::error::Result;
use crate::ui::{should_use_colors, GpupickTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The tool summary command implementation.
pub struct ToolCommand {
    args: ToolArgs,
}

impl ToolCommand {
    /// Create a new tool command.
    pub fn new(args: ToolArgs) -> Self {
        Self { args }
    }
}

impl Command for ToolCommand {
    fn execute(
        &self,
        catalog: &Catalog,
        registry: &ToolRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if !registry.contains(&self.args.name) {
            ui.error(&format!(
                "Unknown tool: {}. Run 'gpupick tools' to list the catalog.",
                self.args.name
            ));
            return Ok(CommandResult::failure(2));
        }

        let theme = if should_use_colors() {
            GpupickTheme::new()
        } else {
            GpupickTheme::plain()
        };

        ui.show_header(&self.args.name);

        for cc in coverage(registry, catalog, &self.args.name) {
            ui.message(&format!(
                "{}  {} {}/{} checks",
                theme.key.apply_to(&cc.category),
                theme.coverage_bar(cc.ratio(), 10),
                cc.included.len(),
                cc.total
            ));

            let category = catalog.category(&cc.category);
            for check in category.map_or(&[][..], |c| c.checks.as_slice()) {
                let line = if cc.included.contains(&check.name) {
                    theme.format_covered(&check.name)
                } else {
                    theme.format_uncovered(&check.name)
                };
                ui.message(&format!("  {}", line));
                if ui.output_mode().shows_detail() {
                    ui.message(&format!("    {}", theme.dim.apply_to(&check.description)));
                }
            }
            ui.message("");
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn unknown_tool_fails_with_guidance() {
        let catalog = Catalog::builtin().unwrap();
        let registry = ToolRegistry::build(&catalog);
        let mut ui = MockUI::new();

        let cmd = ToolCommand::new(ToolArgs {
            name: "NoSuchTool".into(),
        });
        let result = cmd.execute(&catalog, &registry, &mut ui).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.errors()[0].contains("NoSuchTool"));
    }

    #[test]
    fn known_tool_reports_every_category() {
        let catalog = Catalog::builtin().unwrap();
        let registry = ToolRegistry::build(&catalog);
        let mut ui = MockUI::new();

        let cmd = ToolCommand::new(ToolArgs {
            name: "HWINFO".into(),
        });
        let result = cmd.execute(&catalog, &registry, &mut ui).unwrap();
        assert!(result.success);

        let output = ui.all_output();
        for category in &catalog.categories {
            assert!(output.contains(&category.name), "missing {}", category.name);
        }
        // HWINFO covers every Power and Thermal check except one.
        assert!(output.contains("Power and Thermal"));
        assert!(output.contains("✓ Power Rail Voltage Stability Check"));
        assert!(output.contains("✗ Cooling System Efficiency Check"));
    }
}
