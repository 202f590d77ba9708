use crate::*;
use std::collections::BTreeMap;

/// Vote ledger from parent-game outcomes to the subgames supporting them.
///
/// Backed by an ordered map so iteration, leader selection, and the
/// preference sums are deterministic in (row, col) order. Built fresh per
/// aggregation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    votes: BTreeMap<Cell, Vec<usize>>,
}

impl Tally {
    /// Records one vote for `cell` from the numbered subgame.
    pub fn record(&mut self, cell: Cell, subgame: usize) {
        self.votes.entry(cell).or_default().push(subgame);
    }
    /// Vote count for a single outcome.
    pub fn count(&self, cell: Cell) -> usize {
        self.votes.get(&cell).map_or(0, Vec::len)
    }
    /// Subgames that voted for an outcome, in voting order.
    pub fn supporters(&self, cell: Cell) -> &[usize] {
        self.votes.get(&cell).map_or(&[], Vec::as_slice)
    }
    /// The highest vote count, 0 when nothing voted.
    pub fn max(&self) -> usize {
        self.votes.values().map(Vec::len).max().unwrap_or(0)
    }
    /// Every outcome achieving the highest vote count, in cell order.
    pub fn leaders(&self) -> Vec<Cell> {
        let max = self.max();
        self.votes
            .iter()
            .filter(|(_, supporters)| supporters.len() == max)
            .map(|(&cell, _)| cell)
            .collect()
    }
    /// Vote sums per row, in row order.
    pub fn rows(&self) -> Vec<(i32, usize)> {
        let mut sums = BTreeMap::new();
        for (&(row, _), supporters) in &self.votes {
            *sums.entry(row).or_insert(0) += supporters.len();
        }
        sums.into_iter().collect()
    }
    /// Vote sums per column, in column order.
    pub fn cols(&self) -> Vec<(i32, usize)> {
        let mut sums = BTreeMap::new();
        for (&(_, col), supporters) in &self.votes {
            *sums.entry(col).or_insert(0) += supporters.len();
        }
        sums.into_iter().collect()
    }
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
    /// Outcomes and their supporters, in cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &[usize])> {
        self.votes
            .iter()
            .map(|(&cell, supporters)| (cell, supporters.as_slice()))
    }
}
