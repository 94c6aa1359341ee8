//! Discovery-ordered tool index.
//!
//! Tools only exist in the catalog as string references inside checks. The
//! registry materializes them once per catalog: a distinct tool list in
//! first-seen order (category order, then check order, then tools-list order)
//! plus a membership index from tool name to the checks it covers. The
//! discovery order doubles as the stable tie-break key for scoring.

use std::collections::{HashMap, HashSet};

use crate::catalog::schema::Catalog;

/// Index of every distinct tool referenced by a catalog.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<String>,
    coverage: HashMap<String, HashSet<(String, String)>>,
}

impl ToolRegistry {
    /// Build the registry by walking the catalog in authoring order.
    pub fn build(catalog: &Catalog) -> Self {
        let mut tools = Vec::new();
        let mut coverage: HashMap<String, HashSet<(String, String)>> = HashMap::new();

        for category in &catalog.categories {
            for check in &category.checks {
                for tool in &check.tools {
                    if !coverage.contains_key(tool) {
                        tools.push(tool.clone());
                    }
                    coverage
                        .entry(tool.clone())
                        .or_default()
                        .insert((category.name.clone(), check.name.clone()));
                }
            }
        }

        Self { tools, coverage }
    }

    /// All distinct tools in discovery order.
    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    /// Whether the catalog references this tool anywhere.
    pub fn contains(&self, tool: &str) -> bool {
        self.coverage.contains_key(tool)
    }

    /// Whether the tool satisfies the given check.
    pub fn covers(&self, tool: &str, category: &str, check: &str) -> bool {
        self.coverage
            .get(tool)
            .is_some_and(|checks| checks.contains(&(category.to_string(), check.to_string())))
    }

    /// Number of catalog checks the tool covers, across all categories.
    pub fn covered_check_count(&self, tool: &str) -> usize {
        self.coverage.get(tool).map_or(0, HashSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        serde_json::from_str(
            r#"{
                "categories": [
                    {"name": "A", "checks": [
                        {"name": "C1", "description": "", "tools": ["T2", "T1"]},
                        {"name": "C2", "description": "", "tools": ["T1", "T3"]}
                    ]},
                    {"name": "B", "checks": [
                        {"name": "C3", "description": "", "tools": ["T3", "T4"]}
                    ]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn tools_preserve_first_seen_order() {
        let registry = ToolRegistry::build(&sample());
        assert_eq!(registry.tools(), ["T2", "T1", "T3", "T4"]);
    }

    #[test]
    fn duplicate_references_are_collapsed() {
        let registry = ToolRegistry::build(&sample());
        assert_eq!(registry.tools().iter().filter(|t| *t == "T1").count(), 1);
        assert_eq!(registry.covered_check_count("T1"), 2);
    }

    #[test]
    fn covers_answers_membership_per_check() {
        let registry = ToolRegistry::build(&sample());
        assert!(registry.covers("T3", "A", "C2"));
        assert!(registry.covers("T3", "B", "C3"));
        assert!(!registry.covers("T3", "A", "C1"));
        assert!(!registry.covers("T9", "A", "C1"));
    }

    #[test]
    fn contains_rejects_unknown_tools() {
        let registry = ToolRegistry::build(&sample());
        assert!(registry.contains("T4"));
        assert!(!registry.contains("T9"));
    }
}
