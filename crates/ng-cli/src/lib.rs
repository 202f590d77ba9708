//! Console front-end for the nashgrid solvers.
//!
//! The binaries are thin wrappers: they resolve a fully populated payoff
//! matrix (flag, example, or interactive entry), hand it to the solver
//! crate, and print whatever comes back.

mod examples;
mod input;

pub use examples::*;
pub use input::*;
