//! 2x2 submatrix extraction from 3x3 games.
//!
//! A 3x3 game is decomposed by enumerating every combination of 4 of its 9
//! cells and keeping those that span exactly 2 distinct rows and 2 distinct
//! columns (the axis-aligned 2x2 blocks). Each accepted block is
//! canonicalized with rows and columns sorted ascending and carries the
//! mapping back to its source coordinates.

mod extract;
mod submatrix;

pub use extract::*;
pub use submatrix::*;
