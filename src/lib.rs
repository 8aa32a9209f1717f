//! Grid Snake - the arcade portal's snake simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid movement, collisions, game state)
//! - `store`: Persistent high-score collaborator (file / LocalStorage / in-memory)
//! - `config`: Construction-time tuning
//!
//! The crate is render-agnostic: a host drives `SnakeEngine::tick` with
//! elapsed wall-clock time and draws the returned state snapshot however it
//! likes. No I/O happens on the simulation path.

pub mod config;
pub mod sim;
pub mod store;

pub use config::Config;
pub use sim::{Direction, SimState, SnakeEngine, Status, StepOutcome};
pub use store::{MemoryScoreStore, PlatformScoreStore, ScoreStore};
#[cfg(not(target_arch = "wasm32"))]
pub use store::FileScoreStore;
#[cfg(target_arch = "wasm32")]
pub use store::LocalStorageScoreStore;

/// Game configuration constants
pub mod consts {
    /// Board is GRID_SIZE x GRID_SIZE cells
    pub const GRID_SIZE: i32 = 20;
    /// Snake length at spawn
    pub const INITIAL_LENGTH: usize = 3;
    /// Tick interval at the start of a run (ms)
    pub const INITIAL_TICK_MS: u32 = 150;
    /// Tick interval shrinks by this much per food eaten (ms)
    pub const SPEED_STEP_MS: u32 = 5;
    /// Tick interval never drops below this floor (ms)
    pub const MIN_TICK_MS: u32 = 50;
    /// Score awarded per food eaten
    pub const FOOD_POINTS: u32 = 10;
    /// Accumulated backlog is clamped to this many tick intervals
    pub const MAX_BACKLOG_TICKS: u32 = 3;
}
