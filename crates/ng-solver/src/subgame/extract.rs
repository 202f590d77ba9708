use crate::*;
use std::collections::BTreeSet;

/// Enumerates the valid 2x2 submatrices of a 3x3 game.
///
/// The search walks all C(9,4) = 126 raw cell combinations in lexicographic
/// order and applies only the 2-row/2-col validity filter; it does not
/// collapse combinations that canonicalize to the same block. The `dedup`
/// toggle suppresses repeated canonical shapes for callers that want each
/// block counted once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    dedup: bool,
}

impl Extractor {
    pub fn new(dedup: bool) -> Self {
        Self { dedup }
    }

    /// Every accepted submatrix, in enumeration order, with payoffs copied
    /// from the parent and corners canonicalized to
    /// [min-row/min-col, min-row/max-col, max-row/min-col, max-row/max-col].
    pub fn extract(&self, game: &Payoffs3) -> Vec<Submatrix> {
        let mut seen = BTreeSet::new();
        let mut subgames = Vec::new();
        for combo in combinations(9, 4) {
            let cells = combo
                .iter()
                .map(|&k| ((k / 3) as i32, (k % 3) as i32))
                .collect::<Vec<Cell>>();
            let rows = distinct(cells.iter().map(|cell| cell.0));
            let cols = distinct(cells.iter().map(|cell| cell.1));
            if rows.len() != 2 || cols.len() != 2 {
                continue;
            }
            let corners = [
                (rows[0], cols[0]),
                (rows[0], cols[1]),
                (rows[1], cols[0]),
                (rows[1], cols[1]),
            ];
            if self.dedup && !seen.insert(corners) {
                continue;
            }
            let mut sub = Payoffs2::new();
            for (k, &(row, col)) in corners.iter().enumerate() {
                sub.set((k / 2) as i32, (k % 2) as i32, 0, game.get(row, col, 0));
                sub.set((k / 2) as i32, (k % 2) as i32, 1, game.get(row, col, 1));
            }
            subgames.push(Submatrix::new(sub, corners));
        }
        log::info!("extracted {} valid 2x2 subgames", subgames.len());
        subgames
    }
}

/// All k-element combinations of 0..n in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn descend(all: &mut Vec<Vec<usize>>, current: &mut Vec<usize>, start: usize, n: usize, k: usize) {
        let depth = current.len();
        if depth == k {
            all.push(current.clone());
            return;
        }
        for i in start..=(n - k + depth) {
            current.push(i);
            descend(all, current, i + 1, n, k);
            current.pop();
        }
    }
    let mut all = Vec::new();
    descend(&mut all, &mut Vec::with_capacity(k), 0, n, k);
    all
}

/// Unique values in encounter order, then sorted ascending.
fn distinct(values: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut found = Vec::new();
    for value in values {
        if !found.contains(&value) {
            found.push(value);
        }
    }
    found.sort();
    found
}
