use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::food;
use crate::grid::{Board, Cell};
use crate::input::{direction_change_is_valid, Direction};
use crate::rules::{check_collision, CollisionKind, Progression};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    Over,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Not running, or no direction chosen yet.
    Skipped,
    Moved,
    Ate { speed_changed: bool },
    Collided(CollisionKind),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub status: GameStatus,
    pub death_reason: Option<CollisionKind>,
    pub tick_count: u64,
    direction: Direction,
    pending_direction: Direction,
    progression: Progression,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates an idle game seeded from system entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let board = config.board();
        let snake = Snake::new(board.center());
        let food = food::place(&mut rng, board, &snake);

        Self {
            snake,
            food,
            status: GameStatus::Idle,
            death_reason: None,
            tick_count: 0,
            direction: Direction::None,
            pending_direction: Direction::None,
            progression: Progression::new(&config),
            config,
            rng,
        }
    }

    /// Reinitialises snake, food, score and speed and returns to idle.
    ///
    /// The random source carries over so successive games differ.
    pub fn reset(&mut self) {
        let board = self.board();
        self.snake = Snake::new(board.center());
        self.food = food::place(&mut self.rng, board, &self.snake);
        self.status = GameStatus::Idle;
        self.death_reason = None;
        self.tick_count = 0;
        self.direction = Direction::None;
        self.pending_direction = Direction::None;
        self.progression = Progression::new(&self.config);
    }

    /// Idle -> Running. Returns false in any other state.
    pub fn start(&mut self) -> bool {
        self.transition(GameStatus::Idle, GameStatus::Running)
    }

    /// Running -> Paused. Returns false in any other state.
    pub fn pause(&mut self) -> bool {
        self.transition(GameStatus::Running, GameStatus::Paused)
    }

    /// Paused -> Running. Returns false in any other state.
    pub fn resume(&mut self) -> bool {
        self.transition(GameStatus::Paused, GameStatus::Running)
    }

    fn transition(&mut self, from: GameStatus, to: GameStatus) -> bool {
        if self.status != from {
            return false;
        }
        debug!("game status {from:?} -> {to:?}");
        self.status = to;
        true
    }

    /// Buffers a direction change for the next tick.
    ///
    /// Only accepted while running, and never the reverse of the direction
    /// the snake is currently travelling. Within one tick the last accepted
    /// input wins; every candidate is checked against the applied direction,
    /// so two quick turns cannot add up to a reversal.
    pub fn buffer_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.pending_direction = direction;
        true
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Order: apply the buffered direction, move, check collision, then
    /// score and replace the food if it was eaten.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }

        self.direction = self.pending_direction;
        if self.direction.is_none() {
            return TickOutcome::Skipped;
        }

        self.tick_count += 1;
        let board = self.board();
        let grew = self.snake.advance(self.direction, board.cell_size(), self.food);

        let collision = check_collision(&self.snake, board);
        if collision != CollisionKind::None {
            info!(
                "game over after {} ticks: {collision:?}, score {}",
                self.tick_count,
                self.score()
            );
            self.status = GameStatus::Over;
            self.death_reason = Some(collision);
            return TickOutcome::Collided(collision);
        }

        if !grew {
            return TickOutcome::Moved;
        }

        let speed_changed = self.progression.record_food();
        self.food = food::place(&mut self.rng, board, &self.snake);
        debug!(
            "food eaten: score {}, speed {}ms, next food at ({}, {})",
            self.score(),
            self.speed_ms(),
            self.food.x,
            self.food.y
        );

        TickOutcome::Ate { speed_changed }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    /// Current tick interval in milliseconds.
    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.progression.speed_ms()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.progression.interval()
    }

    /// Direction applied on the last tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction that the next tick will apply.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.config.board()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
