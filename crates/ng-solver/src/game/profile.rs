use ng_core::*;
use serde::Serialize;

/// A mixed-strategy profile for a 2-strategy game.
///
/// Each field is the probability that the named player plays strategy
/// index 0; strategy index 1 carries the complement. Values outside [0, 1]
/// are a caller error and are never produced by the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    p1: Probability,
    p2: Probability,
}

impl Profile {
    pub fn new(p1: Probability, p2: Probability) -> Self {
        Self { p1, p2 }
    }
    /// The profile that plays the pure outcome (row, col) with certainty.
    pub fn pure(row: i32, col: i32) -> Self {
        Self {
            p1: if row == 0 { 1.0 } else { 0.0 },
            p2: if col == 0 { 1.0 } else { 0.0 },
        }
    }
    /// A profile seen from one player's side: `own` is that player's
    /// probability, `other` the opponent's.
    pub fn oriented(player: i32, own: Probability, other: Probability) -> Self {
        match player {
            0 => Self::new(own, other),
            _ => Self::new(other, own),
        }
    }
    pub fn p1(&self) -> Probability {
        self.p1
    }
    pub fn p2(&self) -> Probability {
        self.p2
    }
    /// The named player's probability of playing strategy index 0.
    pub fn of(&self, player: i32) -> Probability {
        match player {
            0 => self.p1,
            _ => self.p2,
        }
    }
    /// True when both probabilities are exactly 0 or 1.
    pub fn is_pure(&self) -> bool {
        (self.p1 == 0.0 || self.p1 == 1.0) && (self.p2 == 0.0 || self.p2 == 1.0)
    }
    /// The strategy index a player leans toward: index 0 at or above the
    /// 0.5 threshold, index 1 below it.
    pub fn favored(&self, player: i32) -> i32 {
        if self.of(player) >= 0.5 { 0 } else { 1 }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(p1={:.2}, p2={:.2})", self.p1, self.p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_profiles_play_the_named_outcome() {
        assert_eq!(Profile::pure(0, 0), Profile::new(1.0, 1.0));
        assert_eq!(Profile::pure(0, 1), Profile::new(1.0, 0.0));
        assert_eq!(Profile::pure(1, 0), Profile::new(0.0, 1.0));
        assert_eq!(Profile::pure(1, 1), Profile::new(0.0, 0.0));
        assert!(Profile::pure(1, 1).is_pure());
        assert!(!Profile::new(0.5, 1.0).is_pure());
    }

    #[test]
    fn oriented_swaps_sides_for_player_two() {
        assert_eq!(Profile::oriented(0, 0.3, 0.7), Profile::new(0.3, 0.7));
        assert_eq!(Profile::oriented(1, 0.3, 0.7), Profile::new(0.7, 0.3));
    }

    #[test]
    fn favored_thresholds_at_one_half() {
        assert_eq!(Profile::new(0.5, 0.49).favored(0), 0);
        assert_eq!(Profile::new(0.5, 0.49).favored(1), 1);
        assert_eq!(Profile::new(1.0, 0.0).favored(0), 0);
        assert_eq!(Profile::new(1.0, 0.0).favored(1), 1);
    }
}
