use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::Board;

/// Board side length in pixels.
pub const DEFAULT_BOARD_SIZE: u32 = 400;

/// Side length of one grid cell in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Tick interval of a fresh game in milliseconds.
pub const DEFAULT_INITIAL_SPEED_MS: u64 = 150;

/// Amount the tick interval shrinks per food eaten.
pub const DEFAULT_SPEED_STEP_MS: u64 = 10;

/// Tick interval floor in milliseconds.
pub const DEFAULT_MIN_SPEED_MS: u64 = 80;

/// Score granted per food.
pub const DEFAULT_FOOD_POINTS: u32 = 10;

/// Minimum swipe displacement along the dominant axis, in pixels.
pub const DEFAULT_MIN_SWIPE_DISTANCE: f32 = 30.0;

/// How long the board border stays highlighted after food is eaten.
pub const PULSE_DURATION: Duration = Duration::from_millis(500);

/// Tunable game parameters.
///
/// Every field has a default matching the classic 20x20 board, so a config
/// file only needs to name the values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: u32,
    pub cell_size: u32,
    pub initial_speed_ms: u64,
    pub speed_step_ms: u64,
    pub min_speed_ms: u64,
    pub food_points: u32,
    pub min_swipe_distance: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            initial_speed_ms: DEFAULT_INITIAL_SPEED_MS,
            speed_step_ms: DEFAULT_SPEED_STEP_MS,
            min_speed_ms: DEFAULT_MIN_SPEED_MS,
            food_points: DEFAULT_FOOD_POINTS,
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
        }
    }
}

/// Reasons a [`GameConfig`] is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("board size {board_size} is not a positive multiple of cell size {cell_size}")]
    MisalignedBoard { board_size: u32, cell_size: u32 },
    #[error("board size {board_size} exceeds the supported maximum of {max}", max = i32::MAX)]
    BoardTooLarge { board_size: u32 },
    #[error("board has {columns} column(s); at least 2 are needed to fit snake and food")]
    BoardTooSmall { columns: u32 },
    #[error("minimum speed must be greater than zero")]
    ZeroMinSpeed,
    #[error("minimum speed {min_speed_ms}ms exceeds initial speed {initial_speed_ms}ms")]
    FloorAboveInitialSpeed {
        min_speed_ms: u64,
        initial_speed_ms: u64,
    },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameConfig {
    /// Parses a JSON config and validates it.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Checks the invariants the game loop relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        if self.board_size == 0 || self.board_size % self.cell_size != 0 {
            return Err(ConfigError::MisalignedBoard {
                board_size: self.board_size,
                cell_size: self.cell_size,
            });
        }

        if self.board_size > i32::MAX as u32 {
            return Err(ConfigError::BoardTooLarge {
                board_size: self.board_size,
            });
        }

        let columns = self.board_size / self.cell_size;
        if columns < 2 {
            return Err(ConfigError::BoardTooSmall { columns });
        }

        if self.min_speed_ms == 0 {
            return Err(ConfigError::ZeroMinSpeed);
        }

        if self.min_speed_ms > self.initial_speed_ms {
            return Err(ConfigError::FloorAboveInitialSpeed {
                min_speed_ms: self.min_speed_ms,
                initial_speed_ms: self.initial_speed_ms,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn board(&self) -> Board {
        Board::new(self.board_size, self.cell_size)
    }
}
