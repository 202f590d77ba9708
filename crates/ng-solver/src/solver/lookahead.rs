use crate::*;
use ng_core::*;

/// Non-myopic equilibrium search.
///
/// A profile is non-myopic when each player, before deviating, anticipates
/// that the opponent will re-optimize against the deviation. Player 1
/// evaluates each candidate probability by the payoff it earns once
/// player 2 plays its best response to that candidate, and symmetrically
/// for player 2. A grid point qualifies when neither player has an
/// alternative grid point whose anticipated payoff is strictly better.
impl Solver {
    /// The coarse probability grid, 0.00 to 1.00 in 0.05 steps.
    fn coarse() -> impl Iterator<Item = Probability> {
        (0..=LOOKAHEAD_GRID).map(|i| i as Probability / LOOKAHEAD_GRID as Probability)
    }

    /// The payoff a player expects from committing to `own` once the
    /// opponent best-responds to it.
    fn anticipated(&self, player: i32, own: Probability) -> Utility {
        let reply = self.respond(1 - player, own, RESPONSE_TOLERANCE);
        self.expected(player, &Profile::oriented(player, own, reply))
    }

    /// True when no alternative grid point improves the player's
    /// anticipated payoff by more than the tolerance.
    fn is_farsighted(&self, player: i32, own: Probability) -> bool {
        let incumbent = self.anticipated(player, own);
        Self::coarse()
            .filter(|alt| (alt - own).abs() > RESPONSE_TOLERANCE)
            .all(|alt| self.anticipated(player, alt) <= incumbent + RESPONSE_TOLERANCE)
    }

    /// Non-myopic equilibria over the coarse grid, player 1's probability
    /// in the outer loop. The set may be empty or contain many adjacent
    /// grid points.
    pub fn non_myopic(&self) -> Vec<Equilibrium> {
        let mut found = Vec::new();
        for p1 in Self::coarse() {
            for p2 in Self::coarse() {
                if self.is_farsighted(0, p1) && self.is_farsighted(1, p2) {
                    found.push(Equilibrium::mixed(
                        Profile::new(p1, p2),
                        format!(
                            "Non-myopic equilibrium: Player 1 plays strategy 1 with probability {:.2}, Player 2 plays strategy 1 with probability {:.2}",
                            p1, p2
                        ),
                    ));
                }
            }
        }
        found
    }
}
