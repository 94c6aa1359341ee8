//! User's per-category priority ordering.

use std::collections::HashMap;

use crate::error::{GpupickError, Result};
use crate::session::selection::SelectionSet;

/// Pure array move: remove the element at `from` and reinsert it at `to`,
/// shifting the elements in between by one position.
///
/// `from == to` returns the input unchanged. Out-of-range indices are an
/// [`GpupickError::InvalidReorder`] rather than silent corruption.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    if from >= items.len() || to >= items.len() {
        return Err(GpupickError::InvalidReorder {
            from,
            to,
            len: items.len(),
        });
    }

    let mut moved = items.to_vec();
    if from != to {
        let item = moved.remove(from);
        moved.insert(to, item);
    }
    Ok(moved)
}

/// Priority order of check names per category, index 0 = highest priority.
///
/// Only the checks that are also selected contribute to scoring; stray names
/// are ignored downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingOrder {
    rankings: HashMap<String, Vec<String>>,
}

impl RankingOrder {
    /// Seed rankings from a selection: each category starts ordered the way
    /// the checks were selected.
    pub fn from_selection(selection: &SelectionSet, categories: &[String]) -> Self {
        let mut order = Self::default();
        for category in categories {
            let selected = selection.selected(category);
            if !selected.is_empty() {
                order.set_category(category, selected.to_vec());
            }
        }
        order
    }

    /// Replace the ranking for one category.
    pub fn set_category(&mut self, category: &str, checks: Vec<String>) {
        self.rankings.insert(category.to_string(), checks);
    }

    /// Ranked check names for a category, highest priority first.
    ///
    /// A missing category key reads as an empty ranking.
    pub fn ranking(&self, category: &str) -> &[String] {
        self.rankings.get(category).map_or(&[], Vec::as_slice)
    }

    /// Move one check within a category's ranking.
    pub fn move_check(&mut self, category: &str, from: usize, to: usize) -> Result<()> {
        let current = self.ranking(category);
        let moved = move_item(current, from, to)?;
        self.rankings.insert(category.to_string(), moved);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<&'static str> {
        vec!["A", "B", "C"]
    }

    #[test]
    fn move_forward_shifts_intervening_items_left() {
        assert_eq!(move_item(&abc(), 0, 2).unwrap(), ["B", "C", "A"]);
    }

    #[test]
    fn move_backward_shifts_intervening_items_right() {
        assert_eq!(move_item(&abc(), 2, 0).unwrap(), ["C", "A", "B"]);
    }

    #[test]
    fn move_to_same_index_is_a_no_op() {
        assert_eq!(move_item(&abc(), 1, 1).unwrap(), abc());
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        assert!(matches!(
            move_item(&abc(), 3, 0),
            Err(GpupickError::InvalidReorder { from: 3, len: 3, .. })
        ));
        assert!(move_item(&abc(), 0, 3).is_err());
        assert!(move_item::<&str>(&[], 0, 0).is_err());
    }

    #[test]
    fn from_selection_seeds_selected_categories_only() {
        let mut selection = SelectionSet::default();
        selection.set_category("A", vec!["C1".into(), "C2".into()]);
        selection.set_category("B", vec![]);

        let order = RankingOrder::from_selection(
            &selection,
            &["A".to_string(), "B".to_string(), "C".to_string()],
        );
        assert_eq!(order.ranking("A"), ["C1", "C2"]);
        assert!(order.ranking("B").is_empty());
        assert!(order.ranking("C").is_empty());
    }

    #[test]
    fn move_check_permutes_one_category() {
        let mut order = RankingOrder::default();
        order.set_category("A", vec!["C1".into(), "C2".into(), "C3".into()]);
        order.move_check("A", 2, 0).unwrap();
        assert_eq!(order.ranking("A"), ["C3", "C1", "C2"]);
    }

    #[test]
    fn move_check_on_missing_category_errors() {
        let mut order = RankingOrder::default();
        assert!(order.move_check("A", 0, 0).is_err());
    }
}
