//! Grid-search equilibrium solving for small normal-form games.
//!
//! Two-player games with 2 strategies per player are solved exactly for
//! pure Nash equilibria and scanned for mixed and non-myopic (lookahead)
//! equilibria over fixed probability grids. Games with 3 strategies per
//! player are handled by decomposing into every axis-aligned 2x2 submatrix,
//! solving each independently, and aggregating the per-subgame results into
//! a predicted outcome by vote tally.
//!
//! # Module Structure
//!
//! - `game` — payoff matrices, strategy profiles, equilibria
//! - `solver` — best response search and Nash / non-myopic scans
//! - `subgame` — 2x2 submatrix extraction from 3x3 games
//! - `predict` — per-subgame analysis, vote tally, outcome prediction

mod game;
mod predict;
mod solver;
mod subgame;

pub use game::*;
pub use predict::*;
pub use solver::*;
pub use subgame::*;
