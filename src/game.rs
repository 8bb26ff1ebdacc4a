use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{FOOD_POINTS, GRID_SIZE};
use crate::food;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Waiting for the first directional input of the session.
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Complete mutable game state for one session.
///
/// All operations are total over the phase machine: out-of-phase commands
/// and illegal direction requests are silent no-ops, never errors.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pending_direction: Option<Direction>,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session with an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let snake = Snake::new(center(), Direction::Up);
        let food = food::spawn_position(&mut rng, &snake);

        Self {
            snake,
            food,
            score: 0,
            high_score: 0,
            status: GameStatus::NotStarted,
            pending_direction: None,
            rng,
        }
    }

    /// Advances the simulation by one tick. No-op unless running.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.snake.set_direction(direction);
        }

        let next_head = self.snake.next_head();
        if !next_head.is_within_bounds() {
            self.status = GameStatus::GameOver;
            return;
        }

        // The pre-move body includes the tail cell, so stepping into the
        // cell the tail is about to vacate still ends the game.
        if self.snake.occupies(next_head) {
            self.status = GameStatus::GameOver;
            return;
        }

        let ate = next_head == self.food;
        self.snake.advance(ate);

        if ate {
            self.score += FOOD_POINTS;
            if self.score > self.high_score {
                self.high_score = self.score;
            }
            self.food = food::spawn_position(&mut self.rng, &self.snake);
        }
    }

    /// Records a directional request for the next tick.
    ///
    /// The first request of a session starts the game. Requests that would
    /// reverse the snake onto itself are dropped; a newer valid request
    /// overwrites an older one that no tick has consumed yet.
    pub fn request_direction(&mut self, direction: Direction) {
        match self.status {
            GameStatus::GameOver => return,
            GameStatus::NotStarted => self.status = GameStatus::Running,
            GameStatus::Running | GameStatus::Paused => {}
        }

        if direction == self.snake.direction().opposite() {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Flips between running and paused; no-op in other phases.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Resets the session for a new game, keeping the high score, and
    /// starts ticking immediately.
    pub fn restart(&mut self) {
        self.snake = Snake::new(center(), Direction::Up);
        self.food = food::spawn_position(&mut self.rng, &self.snake);
        self.score = 0;
        self.pending_direction = None;
        self.status = GameStatus::Running;
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.request_direction(direction),
            GameInput::Pause => {
                if self.status == GameStatus::GameOver {
                    self.restart();
                } else {
                    self.toggle_pause();
                }
            }
            GameInput::Quit => {}
        }
    }

    /// Returns the direction requested but not yet consumed by a tick.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn center() -> Position {
    Position {
        x: GRID_SIZE / 2,
        y: GRID_SIZE / 2,
    }
}
