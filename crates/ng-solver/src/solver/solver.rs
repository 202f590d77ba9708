use crate::*;
use ng_core::*;

/// Equilibrium solver over a fixed 2x2 game.
///
/// Holds nothing but the matrix it was built from; every method is a pure
/// function of that matrix, so solving the same game twice yields
/// identical sequences.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    game: Payoffs2,
}

impl From<Payoffs2> for Solver {
    fn from(game: Payoffs2) -> Self {
        Self { game }
    }
}

impl Solver {
    pub fn game(&self) -> &Payoffs2 {
        &self.game
    }

    /// The fine probability grid, 0.00 to 1.00 in 0.01 steps.
    fn fine() -> impl Iterator<Item = Probability> {
        (0..=RESPONSE_GRID).map(|i| i as Probability / RESPONSE_GRID as Probability)
    }

    /// A player's expected payoff under a mixed-strategy profile.
    pub fn expected(&self, player: i32, profile: &Profile) -> Utility {
        let mut value = 0.0;
        for row in 0..2 {
            for col in 0..2 {
                let p = if row == 0 { profile.p1() } else { 1.0 - profile.p1() };
                let q = if col == 0 { profile.p2() } else { 1.0 - profile.p2() };
                value += p * q * self.game.get(row, col, player);
            }
        }
        value
    }

    /// A player's best-response probability against the opponent's fixed
    /// probability, scanning pure strategies first and then the fine grid
    /// in increasing order. The incumbent survives unless a later candidate
    /// beats it by more than `tolerance`.
    pub fn respond(&self, player: i32, other: Probability, tolerance: Utility) -> Probability {
        let mut best = (Utility::NEG_INFINITY, 0.5);
        for own in [0.0, 1.0].into_iter().chain(Self::fine()) {
            let payoff = self.expected(player, &Profile::oriented(player, own, other));
            if payoff > best.0 + tolerance {
                best = (payoff, own);
            }
        }
        best.1
    }

    /// True when both players are within `tolerance` of their best response
    /// to the other's current probability.
    pub fn is_equilibrium(&self, profile: &Profile, tolerance: Utility) -> bool {
        (profile.p1() - self.respond(0, profile.p2(), tolerance)).abs() <= tolerance
            && (profile.p2() - self.respond(1, profile.p1(), tolerance)).abs() <= tolerance
    }

    /// Pure-strategy Nash equilibria, scanned in (0,0), (0,1), (1,0), (1,1)
    /// order. A cell survives unless a player's single alternative strategy
    /// strictly improves their payoff, so exact ties keep the cell.
    pub fn pure_nash(&self) -> Vec<Equilibrium> {
        let mut found = Vec::new();
        for row in 0..2 {
            for col in 0..2 {
                if self.game.get(1 - row, col, 0) > self.game.get(row, col, 0) {
                    continue;
                }
                if self.game.get(row, 1 - col, 1) > self.game.get(row, col, 1) {
                    continue;
                }
                found.push(Equilibrium::pure(
                    Profile::pure(row, col),
                    format!(
                        "Pure strategy NE: Player 1 plays {}, Player 2 plays {}",
                        row, col
                    ),
                ));
            }
        }
        found
    }

    /// Mixed-strategy candidates: scan player 1's probability over the fine
    /// grid; where player 2 is indifferent between columns, try the fully
    /// mixed placeholder p2 = 0.5 and keep it only if it verifies as a Nash
    /// equilibrium. Adjacent passing grid points are all emitted.
    pub fn mixed_nash(&self) -> Vec<Equilibrium> {
        let mut found = Vec::new();
        for p1 in Self::fine() {
            let first = p1 * self.game.get(0, 0, 1) + (1.0 - p1) * self.game.get(1, 0, 1);
            let second = p1 * self.game.get(0, 1, 1) + (1.0 - p1) * self.game.get(1, 1, 1);
            if (first - second).abs() < INDIFFERENCE_THRESHOLD {
                let profile = Profile::new(p1, 0.5);
                if self.is_equilibrium(&profile, RESPONSE_TOLERANCE) {
                    found.push(Equilibrium::mixed(
                        profile,
                        format!(
                            "Mixed strategy NE: Player 1 plays strategy 1 with probability {:.6}, Player 2 plays strategy 1 with probability {:.6}",
                            p1, 0.5
                        ),
                    ));
                }
            }
        }
        found
    }

    /// Every Nash equilibrium found: pure results first, then mixed, both
    /// in their scan orders.
    pub fn all_nash(&self) -> Vec<Equilibrium> {
        let mut found = self.pure_nash();
        found.extend(self.mixed_nash());
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dilemma() -> Payoffs2 {
        Payoffs2::from([[(3.0, 3.0), (0.0, 5.0)], [(5.0, 0.0), (1.0, 1.0)]])
    }

    fn pennies() -> Payoffs2 {
        Payoffs2::from([[(1.0, -1.0), (-1.0, 1.0)], [(-1.0, 1.0), (1.0, -1.0)]])
    }

    fn coordination() -> Payoffs2 {
        Payoffs2::from([[(2.0, 2.0), (0.0, 0.0)], [(0.0, 0.0), (1.0, 1.0)]])
    }

    #[test]
    fn dilemma_has_one_pure_equilibrium_at_mutual_defection() {
        let pure = Solver::from(dilemma()).pure_nash();
        assert_eq!(pure.len(), 1);
        assert_eq!(*pure[0].profile(), Profile::pure(1, 1));
        assert!(pure[0].is_pure());
        assert_eq!(
            pure[0].label(),
            "Pure strategy NE: Player 1 plays 1, Player 2 plays 1"
        );
    }

    #[test]
    fn pennies_has_no_pure_equilibrium() {
        assert!(Solver::from(pennies()).pure_nash().is_empty());
    }

    #[test]
    fn pennies_emits_no_mixed_candidate() {
        // The indifference placeholder p2 = 0.5 never matches the
        // earliest-wins best response, so the verification gate rejects
        // every grid point.
        assert!(Solver::from(pennies()).mixed_nash().is_empty());
    }

    #[test]
    fn coordination_has_both_diagonal_equilibria_in_scan_order() {
        let pure = Solver::from(coordination()).pure_nash();
        assert_eq!(pure.len(), 2);
        assert_eq!(*pure[0].profile(), Profile::pure(0, 0));
        assert_eq!(*pure[1].profile(), Profile::pure(1, 1));
    }

    #[test]
    fn ties_keep_the_cell() {
        // Every payoff equal: no deviation is strictly better, so all four
        // cells are pure equilibria.
        let flat = Payoffs2::from([[(1.0, 1.0), (1.0, 1.0)], [(1.0, 1.0), (1.0, 1.0)]]);
        assert_eq!(Solver::from(flat).pure_nash().len(), 4);
    }

    #[test]
    fn all_nash_is_pure_then_mixed() {
        let solver = Solver::from(dilemma());
        let mut expected = solver.pure_nash();
        expected.extend(solver.mixed_nash());
        assert_eq!(solver.all_nash(), expected);
    }

    #[test]
    fn expected_payoff_is_affine_in_own_probability() {
        let solver = Solver::from(Payoffs2::random());
        for player in 0..2 {
            let at = |own: Probability| {
                solver.expected(player, &Profile::oriented(player, own, 0.37))
            };
            let (lo, mid, hi) = (at(0.0), at(0.5), at(1.0));
            assert!(((lo + hi) / 2.0 - mid).abs() < 1e-9);
        }
    }

    #[test]
    fn respond_prefers_the_earliest_candidate_under_ties() {
        // Flat payoffs leave every candidate tied; the first scanned pure
        // strategy (probability 0.0) must win.
        let flat = Payoffs2::from([[(2.0, 2.0), (2.0, 2.0)], [(2.0, 2.0), (2.0, 2.0)]]);
        let solver = Solver::from(flat);
        assert_eq!(solver.respond(0, 0.3, RESPONSE_TOLERANCE), 0.0);
        assert_eq!(solver.respond(1, 0.9, RESPONSE_TOLERANCE), 0.0);
    }

    #[test]
    fn respond_finds_dominant_strategies() {
        let solver = Solver::from(dilemma());
        // Defection (index 1) dominates: probability of index 0 is zero.
        assert_eq!(solver.respond(0, 0.0, RESPONSE_TOLERANCE), 0.0);
        assert_eq!(solver.respond(0, 1.0, RESPONSE_TOLERANCE), 0.0);
        assert_eq!(solver.respond(1, 0.5, RESPONSE_TOLERANCE), 0.0);
    }

    #[test]
    fn equilibrium_check_is_two_sided() {
        let solver = Solver::from(dilemma());
        assert!(solver.is_equilibrium(&Profile::pure(1, 1), RESPONSE_TOLERANCE));
        assert!(!solver.is_equilibrium(&Profile::pure(0, 0), RESPONSE_TOLERANCE));
        assert!(!solver.is_equilibrium(&Profile::pure(0, 1), RESPONSE_TOLERANCE));
    }

    #[test]
    fn solving_twice_is_identical() {
        let game = Payoffs2::random();
        let (a, b) = (Solver::from(game), Solver::from(game));
        assert_eq!(a.all_nash(), b.all_nash());
        assert_eq!(a.non_myopic(), b.non_myopic());
    }
}
