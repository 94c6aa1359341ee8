//! Session-independent catalog coverage.
//!
//! Answers "what does this tool cover in the full catalog", ignoring any
//! selection or ranking. Backs the per-tool summary view.

use crate::catalog::{Catalog, ToolRegistry};

/// One category's absolute coverage for a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCoverage {
    /// Category name.
    pub category: String,

    /// Checks in this category the tool covers, in catalog order.
    pub included: Vec<String>,

    /// Total checks defined in this category.
    pub total: usize,
}

impl CategoryCoverage {
    /// Covered fraction in `[0.0, 1.0]`. A category with no checks is 0.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.included.len() as f64 / self.total as f64
        }
    }
}

/// Compute per-category coverage for one tool, in catalog order.
pub fn coverage(registry: &ToolRegistry, catalog: &Catalog, tool: &str) -> Vec<CategoryCoverage> {
    catalog
        .categories
        .iter()
        .map(|category| CategoryCoverage {
            category: category.name.clone(),
            included: category
                .checks
                .iter()
                .filter(|check| registry.covers(tool, &category.name, &check.name))
                .map(|check| check.name.clone())
                .collect(),
            total: category.checks.len(),
        })
        .collect()
}
