use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GameConfig, GridSize};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Coarse game phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// Result of one simulation tick, surfaced to the driving loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Continue,
    GameOver,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covered every free cell, leaving nowhere to spawn food.
    BoardFull,
}

/// Complete mutable game state for one session.
///
/// The high score survives `reset()` and lives only in process memory.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with an entropy-seeded random source.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let snake = Snake::new(config.grid, config.initial_snake_length);
        let placeholder = Food::at(Position { x: 0, y: 0 });

        let mut state = Self {
            snake,
            food: placeholder,
            score: 0,
            high_score: 0,
            phase: GamePhase::Running,
            end_reason: None,
            config,
            rng,
        };
        state.respawn_food();
        state
    }

    /// Advances the simulation by one tick.
    ///
    /// A finished run is left untouched and keeps reporting
    /// [`TickOutcome::GameOver`] until [`reset`](Self::reset) is called.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == GamePhase::GameOver {
            return TickOutcome::GameOver;
        }

        self.snake.move_forward();

        if self.snake.check_collision(self.config.grid) {
            let reason = if self.snake.head().is_within_bounds(self.config.grid) {
                EndReason::SelfCollision
            } else {
                EndReason::WallCollision
            };
            self.end_run(reason);
            return TickOutcome::GameOver;
        }

        if self.snake.head() == self.food.position {
            self.snake.grow_next();
            self.score += self.config.points_per_food;
            self.respawn_food();

            if self.phase == GamePhase::GameOver {
                return TickOutcome::GameOver;
            }
        }

        TickOutcome::Continue
    }

    /// Requests a heading change; reversals are dropped by the snake and
    /// nothing is applied once the run is over.
    pub fn apply_direction(&mut self, direction: Direction) {
        if self.phase == GamePhase::Running {
            self.snake.turn(direction);
        }
    }

    /// Starts a fresh run, keeping the session high score.
    pub fn reset(&mut self) {
        self.snake
            .reset(self.config.grid, self.config.initial_snake_length);
        self.score = 0;
        self.phase = GamePhase::Running;
        self.end_reason = None;
        self.respawn_food();
    }

    /// Returns the grid dimensions this state was constructed with.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    /// Places new food on a free cell; a full board ends the run instead.
    fn respawn_food(&mut self) {
        match Food::spawn(&mut self.rng, self.config.grid, &self.snake) {
            Some(food) => self.food = food,
            None => self.end_run(EndReason::BoardFull),
        }
    }

    fn end_run(&mut self, reason: EndReason) {
        self.phase = GamePhase::GameOver;
        self.end_reason = Some(reason);
        self.high_score = self.high_score.max(self.score);
    }
}
