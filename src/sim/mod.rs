//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick interval only (one grid step per tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - No I/O on the step path (the high-score write at the terminal step goes
//!   through the injected store and is best-effort)

pub mod collision;
pub mod engine;
pub mod state;
pub mod step;

pub use collision::{hits_body, hits_wall, random_free_cell};
pub use engine::SnakeEngine;
pub use state::{Direction, RngState, SimState, Status};
pub use step::{StepOutcome, step};
