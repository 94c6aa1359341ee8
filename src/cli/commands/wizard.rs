//! Interactive recommendation wizard.
//!
//! The `gpupick wizard` command walks three steps: multi-select checks per
//! category, reorder the selected checks by priority, then show the ranked
//! tool recommendations with an optional CSV export.

use std::path::Path;

use console::Term;

use crate::analysis::{recommend, ToolAnalysis};
use crate::catalog::{Catalog, ToolRegistry};
use crate::cli::args::WizardArgs;
use crate::error::Result;
use crate::export::write_csv;
use crate::session::{RankingOrder, SelectionSet};
use crate::ui::{
    confirm_export, rank_checks, select_checks, should_use_colors, GpupickTheme, UserInterface,
};

use super::dispatcher::{Command, CommandResult};

/// Default export filename when the user confirms the CSV prompt.
const EXPORT_FILENAME: &str = "diagnostic-tool-recommendations.csv";

/// The wizard command implementation.
pub struct WizardCommand {
    args: WizardArgs,
}

impl WizardCommand {
    /// Create a new wizard command.
    pub fn new(args: WizardArgs) -> Self {
        Self { args }
    }

    /// Step 1: per-category multi-select.
    fn collect_selection(&self, catalog: &Catalog, term: &Term) -> Result<SelectionSet> {
        let mut selection = SelectionSet::default();
        for category in &catalog.categories {
            let picked = select_checks(category, term)?;
            selection.set_category(&category.name, picked);
        }
        Ok(selection)
    }

    /// Step 2: per-category priority ordering of the selected checks.
    fn collect_ranking(
        &self,
        catalog: &Catalog,
        selection: &SelectionSet,
        term: &Term,
    ) -> Result<RankingOrder> {
        let names: Vec<String> = catalog.categories.iter().map(|c| c.name.clone()).collect();
        let mut ranking = RankingOrder::from_selection(selection, &names);

        for category in &catalog.categories {
            let current = ranking.ranking(&category.name).to_vec();
            if current.len() >= 2 {
                let ordered = rank_checks(&category.name, &current, term)?;
                ranking.set_category(&category.name, ordered);
            }
        }
        Ok(ranking)
    }

    /// Step 3: render the top recommendations.
    pub(crate) fn render_results(
        &self,
        top: &[ToolAnalysis],
        selection: &SelectionSet,
        theme: &GpupickTheme,
        ui: &mut dyn UserInterface,
    ) {
        ui.show_header("Top Recommended Tools");

        for (index, analysis) in top.iter().enumerate() {
            ui.message(&format!(
                "{} {}  {}",
                theme.dim.apply_to(format!("#{}", index + 1)),
                theme.highlight.apply_to(&analysis.tool),
                theme.dim.apply_to(format!("score {}", analysis.score)),
            ));
            ui.message(&format!(
                "   Covers {} of {} selected checks",
                analysis.included_total(),
                selection.total()
            ));

            if ui.output_mode().shows_detail() {
                for cs in &analysis.category_scores {
                    let selected = selection.selected(&cs.category);
                    if selected.is_empty() {
                        continue;
                    }
                    ui.message(&format!(
                        "   {}  {}/{} checks",
                        theme.key.apply_to(&cs.category),
                        cs.included.len(),
                        selected.len()
                    ));
                    for check in selected {
                        let line = if cs.included.iter().any(|c| c == check) {
                            theme.format_covered(check)
                        } else {
                            theme.format_uncovered(check)
                        };
                        ui.message(&format!("     {}", line));
                    }
                }
            }
            ui.message("");
        }
    }
}

impl Command for WizardCommand {
    fn execute(
        &self,
        catalog: &Catalog,
        registry: &ToolRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let term = Term::stdout();
        let theme = if should_use_colors() {
            GpupickTheme::new()
        } else {
            GpupickTheme::plain()
        };

        ui.show_header("GPU Diagnostic Tool Finder");
        if ui.output_mode().shows_status() {
            ui.message("Pick the checks that matter, rank them, and get tool recommendations.");
            ui.message("");
        }

        let selection = self.collect_selection(catalog, &term)?;
        if selection.is_empty() {
            ui.warning("No checks selected. Select some checks to see recommendations.");
            return Ok(CommandResult::success());
        }
        tracing::debug!("{} checks selected", selection.total());

        let ranking = self.collect_ranking(catalog, &selection, &term)?;

        let ranked = recommend(registry, catalog, &selection, &ranking);
        let shown = self.args.top.max(1).min(ranked.len());
        let top = &ranked[..shown];
        self.render_results(top, &selection, &theme, ui);

        if let Some(path) = &self.args.csv {
            write_csv(path, top, &selection)?;
            ui.success(&format!("Wrote {}", path.display()));
        } else if confirm_export(&term)? {
            write_csv(Path::new(EXPORT_FILENAME), top, &selection)?;
            ui.success(&format!("Wrote {}", EXPORT_FILENAME));
        }

        Ok(CommandResult::success())
    }
}
