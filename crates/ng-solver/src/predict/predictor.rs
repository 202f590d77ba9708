use crate::*;
use ng_core::*;
use rayon::prelude::*;
use serde::Serialize;

/// A predicted 3x3 outcome with its vote support.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub row: i32,
    pub col: i32,
    pub payoffs: [Utility; 2],
    pub votes: usize,
    pub supporters: Vec<usize>,
}

/// Serializable report of a full prediction run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub subgames: usize,
    pub outcomes: Vec<Outcome>,
    pub predicted: Vec<Outcome>,
    pub rows: Vec<(i32, usize)>,
    pub cols: Vec<(i32, usize)>,
}

/// Predicts a 3x3 game's outcome from its 2x2 subgames.
///
/// Every extracted submatrix is solved independently; each non-myopic
/// equilibrium is thresholded to a pure strategy per player, mapped back to
/// parent coordinates, and counted as one vote from that subgame.
#[derive(Debug, Clone, Copy)]
pub struct Predictor {
    game: Payoffs3,
    dedup: bool,
}

impl From<Payoffs3> for Predictor {
    fn from(game: Payoffs3) -> Self {
        Self { game, dedup: false }
    }
}

impl Predictor {
    /// Collapses repeated canonical submatrix shapes before voting.
    pub fn dedup(self, dedup: bool) -> Self {
        Self { dedup, ..self }
    }

    /// Runs extraction, then the per-subgame solves and the vote tally.
    ///
    /// The solves fan out across threads; subgame numbers come from the
    /// extraction index and the collected order matches it, so the tally
    /// and supporter lists are identical to a sequential run.
    pub fn predict(&self) -> Prediction {
        let subgames = Extractor::new(self.dedup).extract(&self.game);
        let total = subgames.len();
        let analyses = subgames
            .into_par_iter()
            .enumerate()
            .map(|(index, submatrix)| Analysis::solve(index + 1, submatrix))
            .collect::<Vec<_>>();
        let mut tally = Tally::default();
        for analysis in &analyses {
            for equilibrium in analysis.lookahead() {
                let profile = equilibrium.profile();
                let cell = analysis
                    .submatrix()
                    .locate(profile.favored(0), profile.favored(1));
                log::debug!("subgame {} votes for ({},{})", analysis.id(), cell.0, cell.1);
                tally.record(cell, analysis.id());
            }
        }
        Prediction {
            game: self.game,
            analyses,
            tally,
            total,
        }
    }
}

/// The result of one prediction run.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    game: Payoffs3,
    analyses: Vec<Analysis>,
    tally: Tally,
    total: usize,
}

impl Prediction {
    pub fn analyses(&self) -> &[Analysis] {
        &self.analyses
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    /// Number of subgames analyzed.
    pub fn subgames(&self) -> usize {
        self.total
    }
    fn outcome(&self, cell: Cell) -> Outcome {
        Outcome {
            row: cell.0,
            col: cell.1,
            payoffs: [self.game.get(cell.0, cell.1, 0), self.game.get(cell.0, cell.1, 1)],
            votes: self.tally.count(cell),
            supporters: self.tally.supporters(cell).to_vec(),
        }
    }
    /// Every outcome that received votes, in cell order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.tally.iter().map(|(cell, _)| self.outcome(cell)).collect()
    }
    /// The maximal-vote outcome(s), in cell order.
    pub fn predicted(&self) -> Vec<Outcome> {
        self.tally.leaders().into_iter().map(|cell| self.outcome(cell)).collect()
    }
    pub fn summary(&self) -> Summary {
        Summary {
            subgames: self.total,
            outcomes: self.outcomes(),
            predicted: self.predicted(),
            rows: self.tally.rows(),
            cols: self.tally.cols(),
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vote summary:")?;
        if self.tally.is_empty() {
            writeln!(f, "  no subgame produced a vote")?;
        }
        for (cell, supporters) in self.tally.iter() {
            let ids = supporters
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                f,
                "  Outcome ({},{}): {} votes from subgames: {}",
                cell.0,
                cell.1,
                supporters.len(),
                ids
            )?;
        }
        writeln!(f, "Predicted non-myopic outcomes:")?;
        if self.tally.is_empty() {
            writeln!(f, "  no clear consensus from subgame analysis")?;
        }
        for outcome in self.predicted() {
            writeln!(
                f,
                "  Player 1 plays strategy {}, Player 2 plays strategy {} -> ({}, {}) [supported by {}/{} subgames]",
                outcome.row + 1,
                outcome.col + 1,
                outcome.payoffs[0],
                outcome.payoffs[1],
                outcome.votes,
                self.total
            )?;
        }
        write!(f, "Player 1 row preferences: ")?;
        for (row, votes) in self.tally.rows() {
            write!(f, "Row {}({} votes) ", row + 1, votes)?;
        }
        writeln!(f)?;
        write!(f, "Player 2 column preferences: ")?;
        for (col, votes) in self.tally.cols() {
            write!(f, "Col {}({} votes) ", col + 1, votes)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extended_coordination() -> Payoffs3 {
        Payoffs3::from([
            [(3.0, 3.0), (0.0, 5.0), (2.0, 1.0)],
            [(5.0, 0.0), (1.0, 1.0), (4.0, 2.0)],
            [(1.0, 2.0), (2.0, 4.0), (6.0, 6.0)],
        ])
    }

    #[test]
    fn extended_coordination_predicts_the_joint_optimum() {
        let prediction = Predictor::from(extended_coordination()).predict();
        assert_eq!(prediction.subgames(), 9);
        let predicted = prediction.predicted();
        assert_eq!(predicted.len(), 1);
        assert_eq!((predicted[0].row, predicted[0].col), (2, 2));
        assert_eq!(predicted[0].payoffs, [6.0, 6.0]);
        assert_eq!(predicted[0].votes, 4);
        assert_eq!(predicted[0].supporters, vec![4, 6, 8, 9]);
    }

    #[test]
    fn extended_coordination_vote_spread_is_deterministic() {
        let prediction = Predictor::from(extended_coordination()).predict();
        let tally = prediction.tally();
        assert_eq!(tally.count((1, 1)), 1);
        assert_eq!(tally.count((1, 2)), 2);
        assert_eq!(tally.count((2, 1)), 2);
        assert_eq!(tally.count((2, 2)), 4);
        assert_eq!(tally.supporters((1, 1)), &[1]);
        assert_eq!(tally.supporters((1, 2)), &[3, 5]);
        assert_eq!(tally.supporters((2, 1)), &[2, 7]);
    }

    #[test]
    fn preference_sums_follow_the_votes() {
        let prediction = Predictor::from(extended_coordination()).predict();
        assert_eq!(prediction.tally().rows(), vec![(1, 3), (2, 6)]);
        assert_eq!(prediction.tally().cols(), vec![(1, 3), (2, 6)]);
    }

    #[test]
    fn dedup_does_not_change_a_3x3_prediction() {
        let plain = Predictor::from(extended_coordination()).predict();
        let deduped = Predictor::from(extended_coordination()).dedup(true).predict();
        assert_eq!(plain.summary(), deduped.summary());
    }

    #[test]
    fn predicting_twice_is_identical() {
        let game = Payoffs3::random();
        let first = Predictor::from(game).predict();
        let second = Predictor::from(game).predict();
        assert_eq!(first, second);
    }

    #[test]
    fn analyses_are_numbered_in_extraction_order() {
        let prediction = Predictor::from(extended_coordination()).predict();
        let ids = prediction.analyses().iter().map(Analysis::id).collect::<Vec<_>>();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }
}
