//! Random selection of the next quiz item without repetition.

use std::collections::BTreeSet;

use rand::Rng;

use crate::model::{Catalog, ItemId, QuizItem};

/// Outcome of drawing from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw<'a> {
    Drawn { id: ItemId, item: &'a QuizItem },
    /// Every catalog item has been used this game.
    Exhausted,
}

/// Pick one item uniformly at random from `catalog \ used`.
///
/// Does not record the pick; the caller adds `id` to its used set.
pub fn draw<'a, R: Rng>(catalog: &'a Catalog, used: &BTreeSet<ItemId>, rng: &mut R) -> Draw<'a> {
    let eligible: Vec<(ItemId, &QuizItem)> = catalog
        .iter()
        .filter(|(id, _)| !used.contains(id))
        .collect();
    if eligible.is_empty() {
        return Draw::Exhausted;
    }

    let pick = rng.random_range(0..eligible.len());
    match eligible.get(pick) {
        Some(&(id, item)) => Draw::Drawn { id, item },
        None => Draw::Exhausted,
    }
}

/// Number of catalog items still eligible to be drawn.
#[must_use]
pub fn remaining(catalog: &Catalog, used: &BTreeSet<ItemId>) -> usize {
    catalog.iter().filter(|(id, _)| !used.contains(id)).count()
}
