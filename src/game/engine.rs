use super::{
    action::{Action, Direction},
    board::{Board, CellPicker},
    config::{ConfigError, GameConfig},
    state::{Apple, Phase, Position, Snake},
};

/// Result of a game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Whether the snake ran into itself, ending the round
    pub collided: bool,
}

/// Read-only snapshot of everything the renderer draws
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub phase: Phase,
    pub snake: &'a Snake,
    pub apple: Position,
    pub score: u32,
    /// Score of the most recently finished round
    pub last_score: Option<u32>,
    pub board: Board,
}

impl RenderView<'_> {
    pub fn snake_cells(&self) -> impl Iterator<Item = &Position> {
        self.snake.cells()
    }
}

/// The game state machine
///
/// Owns the snake, the apple and the random source used to place apples.
/// Any `rand::Rng` works as that source.
/// The frame driver feeds it actions as they arrive and calls [`tick`] once
/// per frame.
///
/// [`tick`]: GameEngine::tick
pub struct GameEngine<R: CellPicker> {
    config: GameConfig,
    board: Board,
    snake: Snake,
    apple: Apple,
    phase: Phase,
    score: u32,
    last_score: Option<u32>,
    rng: R,
}

impl<R: CellPicker> GameEngine<R> {
    /// Create a new game engine in the menu phase
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.grid_width, config.grid_height)?;
        let snake = Snake::new(board.center());

        let mut engine = Self {
            config,
            board,
            snake,
            apple: Apple::new(board.center()),
            phase: Phase::Menu,
            score: 0,
            last_score: None,
            rng,
        };
        engine.respawn_apple();
        Ok(engine)
    }

    /// Apply one input event
    pub fn handle_action(&mut self, action: Action) {
        match (self.phase, action) {
            (Phase::Playing, Action::Move(direction)) => self.queue_direction(direction),
            (Phase::Menu, Action::Confirm) => self.start_round(),
            // Directions in the menu are dropped by the reset anyway; confirm
            // mid-round has no meaning
            (Phase::Menu, Action::Move(_)) | (Phase::Playing, Action::Confirm) => {}
        }
    }

    pub fn queue_direction(&mut self, direction: Direction) {
        self.snake.queue_direction(direction);
    }

    /// Advance the simulation by one grid step
    pub fn tick(&mut self) -> TickResult {
        if self.phase != Phase::Playing {
            return TickResult::default();
        }

        self.snake.advance(&self.board);
        let head = self.snake.head();

        let ate_apple = head == self.apple.position;
        if ate_apple {
            self.snake.grow();
            self.score += 1;
            self.respawn_apple();
        }

        let collided = self.snake.collides_with_body(head);
        if collided {
            self.end_round();
        }

        TickResult {
            ate_apple,
            collided,
        }
    }

    fn start_round(&mut self) {
        self.snake.reset();
        self.score = 0;
        self.respawn_apple();
        self.phase = Phase::Playing;
        log::info!(
            "Round started on a {}x{} board",
            self.board.width(),
            self.board.height()
        );
    }

    fn end_round(&mut self) {
        log::info!(
            "Round over: score {}, length {}",
            self.score,
            self.snake.length()
        );
        self.last_score = Some(self.score);
        self.snake.reset();
        self.phase = Phase::Menu;
    }

    fn respawn_apple(&mut self) {
        let occupied = self.snake.occupied();
        self.apple.randomize(&self.board, &occupied, &mut self.rng);
        log::debug!(
            "Apple placed at ({}, {})",
            self.apple.position.x,
            self.apple.position.y
        );
    }

    pub fn view(&self) -> RenderView<'_> {
        RenderView {
            phase: self.phase,
            snake: &self.snake,
            apple: self.apple.position,
            score: self.score,
            last_score: self.last_score,
            board: self.board,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub(crate) fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    #[cfg(test)]
    pub(crate) fn apple_mut(&mut self) -> &mut Apple {
        &mut self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Target frame rate for the driver
    pub fn ticks_per_second(&self) -> u32 {
        self.config.ticks_per_second
    }
}
