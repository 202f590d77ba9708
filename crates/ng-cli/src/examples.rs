use ng_solver::*;

/// The Prisoner's Dilemma: defection dominates, mutual defection is the
/// lone equilibrium despite mutual cooperation paying more.
pub fn dilemma() -> Payoffs2 {
    Payoffs2::from([[(3.0, 3.0), (0.0, 5.0)], [(5.0, 0.0), (1.0, 1.0)]])
}

/// The Extended Coordination Game: a 3x3 with dilemma-style temptations in
/// the upper-left and a jointly dominant (6,6) corner.
pub fn coordination() -> Payoffs3 {
    Payoffs3::from([
        [(3.0, 3.0), (0.0, 5.0), (2.0, 1.0)],
        [(5.0, 0.0), (1.0, 1.0), (4.0, 2.0)],
        [(1.0, 2.0), (2.0, 4.0), (6.0, 6.0)],
    ])
}
