//! Grid topology
//!
//! The board is a torus: leaving one edge re-enters on the opposite edge.

use super::config::ConfigError;
use super::state::Position;
use rand::Rng;
use std::collections::HashSet;

/// Fixed-size wrap-around grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    /// Create a board, rejecting zero, single-cell or oversized dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }
        if width == 1 && height == 1 {
            return Err(ConfigError::BoardTooSmall);
        }
        match (i32::try_from(width), i32::try_from(height)) {
            (Ok(width), Ok(height)) => Ok(Self { width, height }),
            _ => Err(ConfigError::DimensionTooLarge { width, height }),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Cell where a fresh snake spawns
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Map any coordinate pair onto the board
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    /// Check if a position lies inside the board without wrapping
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    pub fn is_occupied(&self, pos: Position, occupied: &HashSet<Position>) -> bool {
        occupied.contains(&pos)
    }
}

/// Source of candidate cells for apple placement
///
/// Every `rand::Rng` draws cells uniformly. Scripted sources let callers
/// decide exactly where apples land.
pub trait CellPicker {
    fn pick_cell(&mut self, board: &Board) -> Position;
}

impl<R: Rng> CellPicker for R {
    fn pick_cell(&mut self, board: &Board) -> Position {
        let x = self.gen_range(0..board.width());
        let y = self.gen_range(0..board.height());
        Position::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(Board::new(0, 5).is_err());
        assert!(Board::new(5, 0).is_err());
        assert_eq!(Board::new(1, 1), Err(ConfigError::BoardTooSmall));
        assert!(Board::new(2, 1).is_ok());
    }

    #[test]
    fn test_center() {
        let board = Board::new(32, 24).unwrap();
        assert_eq!(board.center(), Position::new(16, 12));

        let odd = Board::new(5, 3).unwrap();
        assert_eq!(odd.center(), Position::new(2, 1));
    }

    #[test]
    fn test_wrap_all_edges() {
        let board = Board::new(10, 8).unwrap();

        assert_eq!(board.wrap(Position::new(10, 3)), Position::new(0, 3));
        assert_eq!(board.wrap(Position::new(-1, 3)), Position::new(9, 3));
        assert_eq!(board.wrap(Position::new(4, 8)), Position::new(4, 0));
        assert_eq!(board.wrap(Position::new(4, -1)), Position::new(4, 7));
    }

    #[test]
    fn test_wrap_leaves_inner_cells_alone() {
        let board = Board::new(10, 8).unwrap();
        let pos = Position::new(3, 5);
        assert_eq!(board.wrap(pos), pos);
        assert!(board.contains(pos));
        assert!(!board.contains(Position::new(10, 0)));
    }

    #[test]
    fn test_wrap_far_outside() {
        let board = Board::new(10, 8).unwrap();
        assert_eq!(board.wrap(Position::new(-21, 17)), Position::new(9, 1));
    }

    #[test]
    fn test_is_occupied() {
        let board = Board::new(10, 10).unwrap();
        let occupied: HashSet<Position> = [Position::new(1, 1), Position::new(2, 1)]
            .into_iter()
            .collect();

        assert!(board.is_occupied(Position::new(2, 1), &occupied));
        assert!(!board.is_occupied(Position::new(3, 1), &occupied));
        assert_eq!(board.cell_count(), 100);
    }

    #[test]
    fn test_rng_picks_cells_on_board() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let board = Board::new(3, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let seen: HashSet<Position> = (0..500).map(|_| rng.pick_cell(&board)).collect();

        assert!(seen.iter().all(|&p| board.contains(p)));
        assert_eq!(seen.len(), board.cell_count());
    }
}
