//! Catalog data model and loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GpupickError, Result};

/// A single diagnostic criterion within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    /// Check name, unique within its category.
    pub name: String,

    /// Human-readable explanation of what the check verifies.
    pub description: String,

    /// Tools that satisfy this check, in catalog authoring order.
    #[serde(default)]
    pub tools: Vec<String>,
}

impl Check {
    /// Whether the named tool satisfies this check.
    pub fn covers(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }
}

/// A named grouping of related checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique across the catalog.
    pub name: String,

    /// Checks belonging to this category, in authoring order.
    #[serde(default)]
    pub checks: Vec<Check>,
}

impl Category {
    /// Look up a check by name.
    pub fn check(&self, name: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.name == name)
    }
}

/// The full read-only catalog. Loaded once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Load the built-in GPU diagnostics catalog.
    pub fn builtin() -> Result<Self> {
        super::builtin::load_catalog()
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GpupickError::CatalogNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                GpupickError::Io(e)
            }
        })?;

        let catalog: Catalog =
            serde_json::from_str(&content).map_err(|e| GpupickError::CatalogParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        for warning in catalog.lint() {
            tracing::warn!("catalog: {}", warning);
        }

        Ok(catalog)
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Total number of checks across all categories.
    pub fn check_count(&self) -> usize {
        self.categories.iter().map(|c| c.checks.len()).sum()
    }

    /// Authoring lints: non-fatal integrity issues worth surfacing in logs.
    ///
    /// Catalog data is developer-controlled, so duplicates and empty tool
    /// lists are authoring defects rather than runtime failures.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].iter().any(|c| c.name == category.name) {
                warnings.push(format!("duplicate category name '{}'", category.name));
            }

            for (j, check) in category.checks.iter().enumerate() {
                if category.checks[..j].iter().any(|c| c.name == check.name) {
                    warnings.push(format!(
                        "duplicate check name '{}' in category '{}'",
                        check.name, category.name
                    ));
                }
                if check.tools.is_empty() {
                    warnings.push(format!(
                        "check '{}' in category '{}' lists no tools",
                        check.name, category.name
                    ));
                }
            }
        }

        warnings
    }
}
