//! User's per-category check selection.

use std::collections::HashMap;

/// Which checks the user cares about, keyed by category name.
///
/// A category absent from the map means "nothing selected there" and
/// contributes neither to scores nor to coverage denominators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: HashMap<String, Vec<String>>,
}

impl SelectionSet {
    /// Replace the selection for one category.
    pub fn set_category(&mut self, category: &str, checks: Vec<String>) {
        self.selected.insert(category.to_string(), checks);
    }

    /// Selected check names for a category, in selection order.
    ///
    /// A missing category key reads as an empty selection.
    pub fn selected(&self, category: &str) -> &[String] {
        self.selected.get(category).map_or(&[], Vec::as_slice)
    }

    /// Whether a specific check is selected in its category.
    pub fn is_selected(&self, category: &str, check: &str) -> bool {
        self.selected(category).iter().any(|c| c == check)
    }

    /// Number of selected checks in one category.
    pub fn count_in(&self, category: &str) -> usize {
        self.selected(category).len()
    }

    /// Total selected checks across all categories.
    pub fn total(&self) -> usize {
        self.selected.values().map(Vec::len).sum()
    }

    /// Whether no check is selected anywhere.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_category_reads_as_empty() {
        let selection = SelectionSet::default();
        assert!(selection.selected("Memory").is_empty());
        assert!(!selection.is_selected("Memory", "C1"));
        assert_eq!(selection.count_in("Memory"), 0);
        assert!(selection.is_empty());
    }

    #[test]
    fn set_category_replaces_prior_selection() {
        let mut selection = SelectionSet::default();
        selection.set_category("Memory", vec!["C1".into(), "C2".into()]);
        selection.set_category("Memory", vec!["C3".into()]);
        assert_eq!(selection.selected("Memory"), ["C3"]);
        assert!(!selection.is_selected("Memory", "C1"));
    }

    #[test]
    fn total_sums_across_categories() {
        let mut selection = SelectionSet::default();
        selection.set_category("A", vec!["C1".into(), "C2".into()]);
        selection.set_category("B", vec!["C3".into()]);
        assert_eq!(selection.total(), 3);
        assert!(!selection.is_empty());
    }
}
