//! Per-run wizard state.
//!
//! A session holds what the user chose (the [`SelectionSet`]) and how they
//! prioritized it (the [`RankingOrder`]). Both are plain snapshots: the
//! analysis layer borrows them per computation and never retains or mutates
//! them. Nothing here survives the process (by product decision gpupick
//! persists no state between runs).

pub mod ranking;
pub mod selection;

pub use ranking::{move_item, RankingOrder};
pub use selection::SelectionSet;
