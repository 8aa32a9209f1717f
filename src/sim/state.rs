//! Game state and core simulation types
//!
//! Pure data: the engine owns and mutates a `SimState`, hosts only ever see
//! read-only snapshots of it.

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::random_free_cell;
use crate::config::Config;
use crate::consts::INITIAL_LENGTH;

/// Movement direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One grid step in this direction. Y grows downward, matching the
    /// board's row-major layout.
    pub fn unit(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Lifecycle status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Engine constructed, no run started yet
    Menu,
    /// Active gameplay
    Running,
    /// Run suspended; ticks are no-ops
    Paused,
    /// Run ended via wall or self collision. Absorbing except for `reset()`.
    Terminated,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Snake body, head first. Each segment is one grid step from the
    /// previous, no duplicates.
    pub snake: VecDeque<IVec2>,
    /// Food cell, never coincident with any snake segment
    pub food: IVec2,
    /// Committed movement direction (applied on the last step)
    pub direction: Direction,
    /// Most recently queued, not-yet-applied turn (last-write-wins slot)
    pub queued_direction: Option<Direction>,
    /// Score, always a multiple of the per-food point value
    pub score: u32,
    /// Current tick interval (ms); shrinks as food is eaten, floored
    pub tick_interval_ms: u32,
    /// Lifecycle status
    pub status: Status,
    /// Session-visible best score, refreshed in memory at the terminal step
    pub high_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    /// Build a fresh state: a 3-segment snake centered on the board moving
    /// right, food at a uniformly random free cell, score zero.
    ///
    /// The caller decides the status (`Menu` at engine construction,
    /// `Running` on `start()`).
    pub fn new(cfg: &Config, seed: u64, high_score: u32, status: Status) -> Self {
        let mut rng = RngState::new(seed).to_rng();
        Self::with_rng(cfg, seed, high_score, status, &mut rng)
    }

    /// Same as [`SimState::new`] but drawing from a caller-owned RNG, so the
    /// engine's generator stays in sync with the spawn's food draw.
    pub fn with_rng(
        cfg: &Config,
        seed: u64,
        high_score: u32,
        status: Status,
        rng: &mut Pcg32,
    ) -> Self {
        let center = cfg.grid_size / 2;
        let mut snake = VecDeque::with_capacity(cfg.cell_count());
        for i in 0..INITIAL_LENGTH as i32 {
            snake.push_back(IVec2::new(center - i, center));
        }

        let food = random_free_cell(rng, cfg.grid_size, &snake);

        Self {
            seed,
            rng_state: RngState::new(seed),
            snake,
            food,
            direction: Direction::Right,
            queued_direction: None,
            score: 0,
            tick_interval_ms: cfg.initial_tick_ms,
            status,
            high_score,
            time_ticks: 0,
        }
    }

    /// Current head cell
    pub fn head(&self) -> IVec2 {
        // The body is never empty: spawn puts 3 segments in and steps only
        // ever swap or grow.
        self.snake[0]
    }

    /// Body length in cells
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }
}
