use std::time::Duration;

use crate::config::GameConfig;
use crate::grid::Board;
use crate::snake::Snake;

/// Outcome of the per-tick collision check.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CollisionKind {
    None,
    Wall,
    SelfBody,
}

/// Classifies the head position after a move.
///
/// Wall takes precedence over self collision.
#[must_use]
pub fn check_collision(snake: &Snake, board: Board) -> CollisionKind {
    if !board.contains(snake.head()) {
        return CollisionKind::Wall;
    }

    if snake.head_overlaps_body() {
        return CollisionKind::SelfBody;
    }

    CollisionKind::None
}

/// Score and tick-interval progression for one game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Progression {
    score: u32,
    speed_ms: u64,
    food_points: u32,
    speed_step_ms: u64,
    min_speed_ms: u64,
}

impl Progression {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            speed_ms: config.initial_speed_ms,
            food_points: config.food_points,
            speed_step_ms: config.speed_step_ms,
            min_speed_ms: config.min_speed_ms,
        }
    }

    /// Applies one food event. Returns true when the interval changed.
    pub fn record_food(&mut self) -> bool {
        self.score = self.score.saturating_add(self.food_points);

        let next_speed = self
            .speed_ms
            .saturating_sub(self.speed_step_ms)
            .max(self.min_speed_ms);
        let changed = next_speed != self.speed_ms;
        self.speed_ms = next_speed;
        changed
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current tick interval in milliseconds.
    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}
