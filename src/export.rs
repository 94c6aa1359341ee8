//! CSV serialization of recommendation results.
//!
//! Pure formatting over the scoring engine's output; no score logic is
//! re-derived here. Layout matches the original export: one row per tool,
//! check entries written as `<category>: <check>` and joined with `; `
//! inside a double-quoted field.

use std::fs;
use std::path::Path;

use crate::analysis::ToolAnalysis;
use crate::error::Result;
use crate::session::SelectionSet;

/// Render recommendations as a CSV document.
///
/// The breakdown lists are filtered against the selection once more so a
/// stale snapshot can never leak unselected checks into the export.
pub fn generate_csv(analyses: &[ToolAnalysis], selection: &SelectionSet) -> String {
    let mut csv = String::from("Tool Name,Supported Checks,Unsupported Checks\n");

    for analysis in analyses {
        let mut supported = Vec::new();
        let mut unsupported = Vec::new();

        for cs in &analysis.category_scores {
            for check in &cs.included {
                if selection.is_selected(&cs.category, check) {
                    supported.push(format!("{}: {}", cs.category, check));
                }
            }
            for check in &cs.not_included {
                if selection.is_selected(&cs.category, check) {
                    unsupported.push(format!("{}: {}", cs.category, check));
                }
            }
        }

        csv.push_str(&format!(
            "{},{},{}\n",
            quote(&analysis.tool),
            quote(&supported.join("; ")),
            quote(&unsupported.join("; "))
        ));
    }

    csv
}

/// Write recommendations to a CSV file.
pub fn write_csv(path: &Path, analyses: &[ToolAnalysis], selection: &SelectionSet) -> Result<()> {
    fs::write(path, generate_csv(analyses, selection))?;
    Ok(())
}

/// Double-quote a field, doubling interior quotes (RFC 4180).
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
