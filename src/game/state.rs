use super::action::Direction;
use super::board::{Board, CellPicker};
use std::collections::{HashSet, VecDeque};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
}

/// The snake in the game
///
/// `body` holds the occupied cells head first. `length` is the target size:
/// it can run one ahead of `body.len()` between eating an apple and the next
/// move, which is how the snake grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    spawn: Position,
}

impl Snake {
    /// Create a one-cell snake at `spawn` heading right
    pub fn new(spawn: Position) -> Self {
        Self {
            body: VecDeque::from([spawn]),
            length: 1,
            direction: Direction::Right,
            pending_direction: None,
            spawn,
        }
    }

    /// Create a snake from explicit cells, head first.
    ///
    /// Returns `None` for an empty body. The snake still resets to `spawn`.
    #[cfg(test)]
    pub(crate) fn with_body(spawn: Position, body: Vec<Position>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self {
            length: body.len(),
            body: body.into(),
            direction,
            pending_direction: None,
            spawn,
        })
    }

    /// Buffer a heading change for the next advance.
    ///
    /// A reversal is dropped while the snake is longer than one cell.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.body.len() > 1 && self.direction.is_opposite(direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Move one cell, committing any buffered heading first
    pub fn advance(&mut self, board: &Board) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = board.wrap(self.head().moved_in_direction(self.direction));
        self.body.push_front(new_head);

        while self.body.len() > self.length {
            self.body.pop_back();
        }
    }

    /// Raise the target length; the tail stays put on the next advance
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        // body is never empty
        self.body[0]
    }

    /// Body segments, excluding the head
    pub fn body_excluding_head(&self) -> impl Iterator<Item = &Position> {
        self.body.iter().skip(1)
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_excluding_head().any(|&segment| segment == pos)
    }

    /// All occupied cells, head first
    pub fn cells(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub fn occupied(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Target length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn spawn(&self) -> Position {
        self.spawn
    }

    /// Back to a one-cell snake at the spawn cell heading right
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.spawn);
        self.length = 1;
        self.direction = Direction::Right;
        self.pending_direction = None;
    }
}

/// The food the snake chases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Move the apple to a uniformly random cell outside `excluded`.
    ///
    /// Rejection sampling: cheap while most of the board is free. If
    /// `excluded` covers every cell this never returns.
    pub fn randomize<P: CellPicker>(
        &mut self,
        board: &Board,
        excluded: &HashSet<Position>,
        picker: &mut P,
    ) {
        loop {
            let pos = picker.pick_cell(board);

            if !board.is_occupied(pos, excluded) {
                self.position = pos;
                return;
            }
        }
    }
}
