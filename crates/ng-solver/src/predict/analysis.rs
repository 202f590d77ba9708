use crate::*;
use serde::Serialize;

/// One solved subgame: its number in extraction order, the submatrix, and
/// both equilibrium lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    id: usize,
    submatrix: Submatrix,
    nash: Vec<Equilibrium>,
    lookahead: Vec<Equilibrium>,
}

impl Analysis {
    /// Solves a numbered submatrix.
    pub fn solve(id: usize, submatrix: Submatrix) -> Self {
        let solver = Solver::from(*submatrix.game());
        Self {
            id,
            submatrix,
            nash: solver.all_nash(),
            lookahead: solver.non_myopic(),
        }
    }
    pub fn id(&self) -> usize {
        self.id
    }
    pub fn submatrix(&self) -> &Submatrix {
        &self.submatrix
    }
    pub fn nash(&self) -> &[Equilibrium] {
        &self.nash
    }
    pub fn lookahead(&self) -> &[Equilibrium] {
        &self.lookahead
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Subgame {} ===", self.id)?;
        write!(f, "{}", self.submatrix)?;
        writeln!(f, "Nash equilibria:")?;
        if self.nash.is_empty() {
            writeln!(f, "- none found")?;
        }
        for equilibrium in &self.nash {
            writeln!(f, "- {}", equilibrium)?;
        }
        writeln!(f, "Non-myopic equilibria:")?;
        if self.lookahead.is_empty() {
            writeln!(f, "- none found")?;
        }
        for equilibrium in &self.lookahead {
            writeln!(f, "- {}", equilibrium)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_carries_both_equilibrium_lists() {
        // The top-left block of a dilemma-style 3x3 is itself a dilemma.
        let game = Payoffs3::try_from("3,3 0,5 2,1 5,0 1,1 4,2 1,2 2,4 6,6").expect("valid");
        let sub = Extractor::default().extract(&game)[0];
        let analysis = Analysis::solve(1, sub);
        assert_eq!(analysis.id(), 1);
        assert_eq!(analysis.nash().len(), 1);
        assert_eq!(analysis.lookahead().len(), 1);
        assert_eq!(*analysis.lookahead()[0].profile(), Profile::new(0.0, 0.0));
    }
}
