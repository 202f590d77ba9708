//! Equilibrium solving for 2x2 games.
//!
//! All searches walk fixed, ordered candidate grids. A candidate displaces
//! the incumbent only by beating it by strictly more than the tolerance, so
//! among near-ties the earliest-scanned candidate wins. That ordering
//! decides which equilibrium gets reported when payoffs are flat and must
//! not be rearranged.

mod lookahead;
mod solver;

pub use solver::*;
