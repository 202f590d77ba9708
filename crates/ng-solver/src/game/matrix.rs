use ng_core::*;
use serde::Serialize;

/// A cell coordinate in a payoff matrix.
pub type Cell = (i32, i32);

/// An S×S normal-form payoff matrix for two players.
///
/// Each cell holds the ordered pair of payoffs `[to player 0, to player 1]`
/// for that joint pure-strategy outcome. Rows index player 0's strategies,
/// columns player 1's. The type is a plain value: filled once during
/// construction and never mutated after a solver takes it.
///
/// Indices are signed and bounds are forgiving: reads outside the grid
/// return 0.0 and writes outside the grid are dropped, in both cases
/// silently. This tolerant policy is part of the contract, not an error
/// path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Payoffs<const S: usize> {
    cells: [[[Utility; 2]; S]; S],
}

/// A 2x2 game.
pub type Payoffs2 = Payoffs<2>;
/// A 3x3 game.
pub type Payoffs3 = Payoffs<3>;

impl<const S: usize> Payoffs<S> {
    /// Creates an all-zero matrix.
    pub const fn new() -> Self {
        Self {
            cells: [[[0.0; 2]; S]; S],
        }
    }
    /// Stores a payoff, dropping the write if any index is out of range.
    pub fn set(&mut self, row: i32, col: i32, player: i32, value: Utility) {
        if Self::inside(row, col, player) {
            self.cells[row as usize][col as usize][player as usize] = value;
        }
    }
    /// Retrieves a payoff, or 0.0 if any index is out of range.
    pub fn get(&self, row: i32, col: i32, player: i32) -> Utility {
        if Self::inside(row, col, player) {
            self.cells[row as usize][col as usize][player as usize]
        } else {
            0.0
        }
    }
    fn inside(row: i32, col: i32, player: i32) -> bool {
        (0..S as i32).contains(&row) && (0..S as i32).contains(&col) && (0..PLAYERS).contains(&player)
    }
}

impl<const S: usize> Default for Payoffs<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const S: usize> From<[[(Utility, Utility); S]; S]> for Payoffs<S> {
    fn from(rows: [[(Utility, Utility); S]; S]) -> Self {
        let mut game = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, &(first, second)) in cells.iter().enumerate() {
                game.set(row as i32, col as i32, 0, first);
                game.set(row as i32, col as i32, 1, second);
            }
        }
        game
    }
}

/// Parses whitespace-separated `p1,p2` cells in row-major order,
/// e.g. `"3,3 0,5 5,0 1,1"` for a 2x2 game.
impl<const S: usize> TryFrom<&str> for Payoffs<S> {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cells = s.split_whitespace().collect::<Vec<_>>();
        anyhow::ensure!(
            cells.len() == S * S,
            "expected {} cells, got {}",
            S * S,
            cells.len()
        );
        let mut game = Self::new();
        for (k, cell) in cells.iter().enumerate() {
            let (first, second) = cell
                .split_once(',')
                .ok_or_else(|| anyhow::anyhow!("cell {:?} is not of the form p1,p2", cell))?;
            game.set((k / S) as i32, (k % S) as i32, 0, first.trim().parse()?);
            game.set((k / S) as i32, (k % S) as i32, 1, second.trim().parse()?);
        }
        Ok(game)
    }
}

impl<const S: usize> std::fmt::Display for Payoffs<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:21}Player 2", "")?;
        write!(f, "{:21}", "")?;
        for col in 1..=S {
            write!(f, "{:<14}", format!("Strategy {}", col))?;
        }
        writeln!(f)?;
        for row in 0..S as i32 {
            write!(f, "Player 1 Strategy {}: ", row + 1)?;
            for col in 0..S as i32 {
                let pair = format!("({:.1}, {:.1})", self.get(row, col, 0), self.get(row, col, 1));
                write!(f, "{:<14}", pair)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<const S: usize> Arbitrary for Payoffs<S> {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let mut game = Self::new();
        for row in 0..S as i32 {
            for col in 0..S as i32 {
                for player in 0..PLAYERS {
                    game.set(row, col, player, rng.random_range(-9..=9) as Utility);
                }
            }
        }
        game
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_retrieves_payoffs() {
        let mut game = Payoffs2::new();
        game.set(0, 1, 0, 4.0);
        game.set(0, 1, 1, -2.5);
        assert_eq!(game.get(0, 1, 0), 4.0);
        assert_eq!(game.get(0, 1, 1), -2.5);
        assert_eq!(game.get(1, 1, 0), 0.0);
    }

    #[test]
    fn out_of_range_reads_return_zero() {
        let game = Payoffs2::from([[(1.0, 2.0), (3.0, 4.0)], [(5.0, 6.0), (7.0, 8.0)]]);
        assert_eq!(game.get(-1, 0, 0), 0.0);
        assert_eq!(game.get(2, 0, 0), 0.0);
        assert_eq!(game.get(0, -1, 1), 0.0);
        assert_eq!(game.get(0, 2, 1), 0.0);
        assert_eq!(game.get(0, 0, 2), 0.0);
        assert_eq!(game.get(0, 0, -1), 0.0);
        let wide = Payoffs3::new();
        assert_eq!(wide.get(3, 0, 0), 0.0);
        assert_eq!(wide.get(0, 3, 1), 0.0);
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut game = Payoffs2::new();
        game.set(-1, 0, 0, 9.0);
        game.set(2, 0, 0, 9.0);
        game.set(0, 0, 2, 9.0);
        assert_eq!(game, Payoffs2::new());
    }

    #[test]
    fn literal_construction_is_row_major() {
        let game = Payoffs2::from([[(3.0, 3.0), (0.0, 5.0)], [(5.0, 0.0), (1.0, 1.0)]]);
        assert_eq!(game.get(0, 0, 0), 3.0);
        assert_eq!(game.get(0, 1, 1), 5.0);
        assert_eq!(game.get(1, 0, 0), 5.0);
        assert_eq!(game.get(1, 1, 1), 1.0);
    }

    #[test]
    fn parses_cell_strings() {
        let game = Payoffs2::try_from("3,3 0,5 5,0 1,1").expect("valid matrix");
        assert_eq!(
            game,
            Payoffs2::from([[(3.0, 3.0), (0.0, 5.0)], [(5.0, 0.0), (1.0, 1.0)]])
        );
        let game = Payoffs3::try_from("3,3 0,5 2,1 5,0 1,1 4,2 1,2 2,4 6,6").expect("valid matrix");
        assert_eq!(game.get(2, 2, 0), 6.0);
        assert_eq!(game.get(1, 2, 1), 2.0);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(Payoffs2::try_from("3,3 0,5 5,0").is_err());
        assert!(Payoffs2::try_from("3,3 0,5 5,0 1,1 9,9").is_err());
        assert!(Payoffs2::try_from("3,3 0,5 5;0 1,1").is_err());
        assert!(Payoffs2::try_from("3,3 0,5 5,x 1,1").is_err());
    }
}
