//! Side-by-side tool comparison.
//!
//! Pure membership lookup, no scoring or weighting. The CLI layer caps the
//! comparison at three tools; the engine itself processes whatever list it is
//! given, including an empty one.

use crate::catalog::{Catalog, ToolRegistry};

/// Per-check membership row: which of the compared tools cover it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckComparison {
    /// Check name.
    pub check: String,

    /// `(tool, covers)` in the caller's tool order.
    pub tools: Vec<(String, bool)>,
}

impl CheckComparison {
    /// Whether the named tool covers this check, if it was compared.
    pub fn covers(&self, tool: &str) -> Option<bool> {
        self.tools
            .iter()
            .find(|(t, _)| t == tool)
            .map(|(_, covers)| *covers)
    }
}

/// One category's comparison rows, in catalog check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryComparison {
    /// Category name.
    pub category: String,

    /// One row per check in the category.
    pub checks: Vec<CheckComparison>,
}

/// Full comparison matrix, one entry per catalog category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonMatrix {
    pub categories: Vec<CategoryComparison>,
}

/// Build the membership matrix for the given tools.
pub fn compare(registry: &ToolRegistry, catalog: &Catalog, tools: &[String]) -> ComparisonMatrix {
    let categories = catalog
        .categories
        .iter()
        .map(|category| CategoryComparison {
            category: category.name.clone(),
            checks: category
                .checks
                .iter()
                .map(|check| CheckComparison {
                    check: check.name.clone(),
                    tools: tools
                        .iter()
                        .map(|tool| {
                            (
                                tool.clone(),
                                registry.covers(tool, &category.name, &check.name),
                            )
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    ComparisonMatrix { categories }
}
