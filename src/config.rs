//! Construction-time simulation tuning
//!
//! A `Config` is captured once when an engine is built; nothing re-reads it
//! mid-run except the speed schedule, which the engine applies per food.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Simulation tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Board is `grid_size` x `grid_size` cells
    pub grid_size: i32,
    /// Tick interval at the start of a run (ms)
    pub initial_tick_ms: u32,
    /// Tick interval reduction per food eaten (ms)
    pub speed_step_ms: u32,
    /// Tick interval floor (ms)
    pub min_tick_ms: u32,
    /// Score per food eaten
    pub food_points: u32,
    /// Accumulated-time backlog clamp, in tick intervals
    pub max_backlog_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: consts::GRID_SIZE,
            initial_tick_ms: consts::INITIAL_TICK_MS,
            speed_step_ms: consts::SPEED_STEP_MS,
            min_tick_ms: consts::MIN_TICK_MS,
            food_points: consts::FOOD_POINTS,
            max_backlog_ticks: consts::MAX_BACKLOG_TICKS,
        }
    }
}

impl Config {
    /// Sanitize degenerate values.
    ///
    /// The spawn places a 3-segment snake centered on the board, so the grid
    /// must be at least 5 cells wide to leave a free column on each side.
    /// Intervals of zero would make the accumulator drain every call.
    pub fn clamped(mut self) -> Self {
        self.grid_size = self.grid_size.max(5);
        self.min_tick_ms = self.min_tick_ms.max(1);
        self.initial_tick_ms = self.initial_tick_ms.max(self.min_tick_ms);
        self.max_backlog_ticks = self.max_backlog_ticks.max(1);
        self
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.grid_size * self.grid_size) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_consts() {
        let cfg = Config::default();
        assert_eq!(cfg.grid_size, 20);
        assert_eq!(cfg.initial_tick_ms, 150);
        assert_eq!(cfg.min_tick_ms, 50);
    }

    #[test]
    fn clamped_repairs_degenerate_values() {
        let cfg = Config {
            grid_size: 2,
            initial_tick_ms: 0,
            speed_step_ms: 5,
            min_tick_ms: 0,
            food_points: 10,
            max_backlog_ticks: 0,
        }
        .clamped();

        assert!(cfg.grid_size >= 5);
        assert!(cfg.min_tick_ms >= 1);
        assert!(cfg.initial_tick_ms >= cfg.min_tick_ms);
        assert!(cfg.max_backlog_ticks >= 1);
    }
}
