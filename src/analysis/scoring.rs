//! Tool recommendation scoring.
//!
//! The weight of a check is positional: in a category ranking of length `n`,
//! the check at index `i` is worth `n - i` points to every tool that covers
//! it. Scores are therefore only comparable within a single computation;
//! a longer ranking inflates the absolute magnitudes.

use crate::catalog::{Catalog, ToolRegistry};
use crate::session::{RankingOrder, SelectionSet};

/// Per-category breakdown of one tool's coverage of the selected checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    /// Category name.
    pub category: String,

    /// Selected checks the tool covers, in rank order.
    pub included: Vec<String>,

    /// Selected checks the tool does not cover, in rank order.
    pub not_included: Vec<String>,
}

/// Scored breakdown for one tool, the engine's output unit.
///
/// Recomputed fresh on every [`recommend`] call, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolAnalysis {
    /// Tool name.
    pub tool: String,

    /// Sum of positional weights across every covered, selected check.
    pub score: u32,

    /// One entry per catalog category, in catalog order.
    pub category_scores: Vec<CategoryScore>,
}

impl ToolAnalysis {
    /// Breakdown for one category, if the catalog has it.
    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.category_scores.iter().find(|c| c.category == name)
    }

    /// Total selected checks this tool covers, across all categories.
    pub fn included_total(&self) -> usize {
        self.category_scores.iter().map(|c| c.included.len()).sum()
    }
}

/// Score every catalog tool against the user's selection and ranking.
///
/// Returns one [`ToolAnalysis`] per distinct tool, sorted by score
/// descending. The sort is stable, so tools with equal scores keep the
/// registry's discovery order.
///
/// Ranking entries that are unselected, or that name a check the category
/// does not define, contribute nothing: catalog data is static, so a
/// mismatch is an authoring defect to skip, not a runtime failure.
pub fn recommend(
    registry: &ToolRegistry,
    catalog: &Catalog,
    selection: &SelectionSet,
    ranking: &RankingOrder,
) -> Vec<ToolAnalysis> {
    let mut analyses: Vec<ToolAnalysis> = registry
        .tools()
        .iter()
        .map(|tool| score_tool(tool, registry, catalog, selection, ranking))
        .collect();

    analyses.sort_by(|a, b| b.score.cmp(&a.score));
    analyses
}

fn score_tool(
    tool: &str,
    registry: &ToolRegistry,
    catalog: &Catalog,
    selection: &SelectionSet,
    ranking: &RankingOrder,
) -> ToolAnalysis {
    let mut score = 0u32;
    let mut category_scores = Vec::with_capacity(catalog.categories.len());

    for category in &catalog.categories {
        let ranked = ranking.ranking(&category.name);
        let weight_base = ranked.len() as u32;

        let mut included = Vec::new();
        let mut not_included = Vec::new();

        for (index, check_name) in ranked.iter().enumerate() {
            if !selection.is_selected(&category.name, check_name) {
                continue;
            }
            if category.check(check_name).is_none() {
                tracing::debug!(
                    "ranking names unknown check '{}' in category '{}', skipping",
                    check_name,
                    category.name
                );
                continue;
            }

            if registry.covers(tool, &category.name, check_name) {
                score += weight_base - index as u32;
                included.push(check_name.clone());
            } else {
                not_included.push(check_name.clone());
            }
        }

        category_scores.push(CategoryScore {
            category: category.name.clone(),
            included,
            not_included,
        });
    }

    ToolAnalysis {
        tool: tool.to_string(),
        score,
        category_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        serde_json::from_str(
            r#"{
                "categories": [
                    {"name": "X", "checks": [
                        {"name": "C1", "description": "", "tools": ["T1", "T2"]},
                        {"name": "C2", "description": "", "tools": ["T2"]}
                    ]}
                ]
            }"#,
        )
        .unwrap()
    }

    fn session(ranked: &[&str]) -> (SelectionSet, RankingOrder) {
        let mut selection = SelectionSet::default();
        selection.set_category("X", ranked.iter().map(|c| c.to_string()).collect());
        let mut ranking = RankingOrder::default();
        ranking.set_category("X", ranked.iter().map(|c| c.to_string()).collect());
        (selection, ranking)
    }

    #[test]
    fn weights_decrease_with_rank_index() {
        // C1 at rank 0 is worth 2, C2 at rank 1 is worth 1.
        let catalog = catalog();
        let registry = ToolRegistry::build(&catalog);
        let (selection, ranking) = session(&["C1", "C2"]);

        let ranked = recommend(&registry, &catalog, &selection, &ranking);
        assert_eq!(ranked[0].tool, "T2");
        assert_eq!(ranked[0].score, 3);
        assert_eq!(ranked[1].tool, "T1");
        assert_eq!(ranked[1].score, 2);
    }

    #[test]
    fn breakdown_splits_included_and_not_included() {
        let catalog = catalog();
        let registry = ToolRegistry::build(&catalog);
        let (selection, ranking) = session(&["C1", "C2"]);

        let ranked = recommend(&registry, &catalog, &selection, &ranking);
        let t1 = ranked.iter().find(|t| t.tool == "T1").unwrap();
        let x = t1.category("X").unwrap();
        assert_eq!(x.included, ["C1"]);
        assert_eq!(x.not_included, ["C2"]);
        assert_eq!(t1.included_total(), 1);
    }

    #[test]
    fn unselected_ranking_entries_contribute_nothing() {
        let catalog = catalog();
        let registry = ToolRegistry::build(&catalog);

        let mut selection = SelectionSet::default();
        selection.set_category("X", vec!["C2".into()]);
        let mut ranking = RankingOrder::default();
        ranking.set_category("X", vec!["C1".into(), "C2".into()]);

        let ranked = recommend(&registry, &catalog, &selection, &ranking);
        let t2 = ranked.iter().find(|t| t.tool == "T2").unwrap();
        // C2 still sits at index 1 of a 2-entry ranking, so it is worth 1.
        assert_eq!(t2.score, 1);
        let x = t2.category("X").unwrap();
        assert_eq!(x.included, ["C2"]);
        assert!(x.not_included.is_empty());
    }

    #[test]
    fn ranking_entry_missing_from_catalog_is_skipped() {
        let catalog = catalog();
        let registry = ToolRegistry::build(&catalog);

        let mut selection = SelectionSet::default();
        selection.set_category("X", vec!["C1".into(), "Ghost".into()]);
        let mut ranking = RankingOrder::default();
        ranking.set_category("X", vec!["Ghost".into(), "C1".into()]);

        let ranked = recommend(&registry, &catalog, &selection, &ranking);
        let t1 = ranked.iter().find(|t| t.tool == "T1").unwrap();
        // C1 at index 1 of a 2-entry ranking: weight 1. Ghost adds nothing.
        assert_eq!(t1.score, 1);
        let x = t1.category("X").unwrap();
        assert_eq!(x.included, ["C1"]);
        assert!(x.not_included.is_empty());
    }

    #[test]
    fn empty_session_scores_every_tool_zero() {
        let catalog = catalog();
        let registry = ToolRegistry::build(&catalog);

        let ranked = recommend(
            &registry,
            &catalog,
            &SelectionSet::default(),
            &RankingOrder::default(),
        );
        assert_eq!(ranked.len(), 2);
        for analysis in &ranked {
            assert_eq!(analysis.score, 0);
            for cs in &analysis.category_scores {
                assert!(cs.included.is_empty());
                assert!(cs.not_included.is_empty());
            }
        }
        // Zero scores fall back to discovery order.
        assert_eq!(ranked[0].tool, "T1");
        assert_eq!(ranked[1].tool, "T2");
    }
}
