//! 3x3 outcome prediction from per-subgame analysis.
//!
//! Each extracted 2x2 subgame is solved independently; its non-myopic
//! equilibria are thresholded to pure strategies and translated back to
//! parent coordinates, where each counts as one vote. The outcome(s) with
//! the most votes form the prediction, and per-row / per-column vote sums
//! are reported as a descriptive dominance signal.

mod analysis;
mod predictor;
mod tally;

pub use analysis::*;
pub use predictor::*;
pub use tally::*;
