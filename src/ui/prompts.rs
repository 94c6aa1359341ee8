//! Interactive wizard prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect, Sort};

use crate::catalog::Category;
use crate::error::{GpupickError, Result};

/// Convert dialoguer errors to GpupickError.
fn map_dialoguer_err(e: dialoguer::Error) -> GpupickError {
    GpupickError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Multi-select the checks the user cares about within one category.
///
/// Returns the chosen check names in catalog order. Choosing nothing is
/// valid; the category simply contributes no score.
pub fn select_checks(category: &Category, term: &Term) -> Result<Vec<String>> {
    let labels: Vec<String> = category
        .checks
        .iter()
        .map(|check| check.name.clone())
        .collect();

    let picked = MultiSelect::with_theme(&prompt_theme())
        .with_prompt(format!("{} — pick the checks that matter to you", category.name))
        .items(&labels)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(picked.iter().map(|&i| labels[i].clone()).collect())
}

/// Reorder one category's selected checks by priority, top entry first.
pub fn rank_checks(category_name: &str, checks: &[String], term: &Term) -> Result<Vec<String>> {
    if checks.len() < 2 {
        return Ok(checks.to_vec());
    }

    let order = Sort::with_theme(&prompt_theme())
        .with_prompt(format!(
            "{} — order by priority (top = most important)",
            category_name
        ))
        .items(checks)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(order.iter().map(|&i| checks[i].clone()).collect())
}

/// Ask whether to export the recommendations as CSV.
pub fn confirm_export(term: &Term) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt("Export recommendations as CSV?")
        .default(false)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
