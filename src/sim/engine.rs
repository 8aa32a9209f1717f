//! The host-facing simulation engine
//!
//! `SnakeEngine` owns the authoritative `SimState`, the elapsed-time
//! accumulator and the single buffered-direction slot. A host calls
//! `tick(elapsed_ms)` from whatever scheduler it has (frame callback, timer
//! thread, test loop); directional input arrives through `queue_direction`
//! at any time and is sampled once per tick boundary.
//!
//! No call on this surface panics or returns an error: ill-timed calls are
//! absorbed as no-ops and the only terminal outcome is the `Terminated`
//! status, polled via `state()`.

use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{Direction, SimState, Status};
use super::step::{StepOutcome, step};
use crate::config::Config;
use crate::store::ScoreStore;

/// Spreads consecutive run indices across the seed space (splitmix64 gamma)
const RUN_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Fixed-tick snake simulation engine
pub struct SnakeEngine<S: ScoreStore> {
    cfg: Config,
    state: SimState,
    rng: Pcg32,
    /// Elapsed time not yet consumed by a step (ms)
    accumulator_ms: u32,
    store: S,
    base_seed: u64,
    /// Completed `start()` calls, used to derive per-run seeds
    runs: u64,
}

impl<S: ScoreStore> SnakeEngine<S> {
    /// Build an engine in `Menu` status. The persisted high score is read
    /// here, once; afterwards the in-memory copy is authoritative for the
    /// session.
    pub fn new(cfg: Config, seed: u64, store: S) -> Self {
        let cfg = cfg.clamped();
        let high_score = store.read_high_score();
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = SimState::with_rng(&cfg, seed, high_score, Status::Menu, &mut rng);
        debug!("engine ready (seed {seed}, stored best {high_score})");
        Self {
            cfg,
            state,
            rng,
            accumulator_ms: 0,
            store,
            base_seed: seed,
            runs: 0,
        }
    }

    /// Begin a run: fresh centered snake moving right, random food, score
    /// zero, status `Running`. Valid from any status.
    pub fn start(&mut self) {
        let run_seed = self
            .base_seed
            .wrapping_add(self.runs.wrapping_mul(RUN_SEED_STRIDE));
        self.runs += 1;

        let high_score = self.state.high_score;
        self.rng = Pcg32::seed_from_u64(run_seed);
        self.state = SimState::with_rng(&self.cfg, run_seed, high_score, Status::Running, &mut self.rng);
        self.accumulator_ms = 0;
        info!("run {} started (seed {run_seed})", self.runs);
    }

    /// Alias for [`SnakeEngine::start`]; re-enters `Running` from any state,
    /// `Terminated` included.
    pub fn reset(&mut self) {
        self.start();
    }

    /// Buffer a turn for the next tick boundary. Last write wins.
    ///
    /// Ignored unless `Running`, and rejected when `direction` exactly
    /// reverses the *committed* heading - that would walk the head into its
    /// own neck. A turn that merely reverses the queued (uncommitted) value
    /// is fine; rapid double-taps resolve across two ticks.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.state.status != Status::Running {
            return;
        }
        if direction == self.state.direction.opposite() {
            debug!("rejected reversal into {direction:?}");
            return;
        }
        self.state.queued_direction = Some(direction);
    }

    /// Advance wall-clock time by `elapsed_ms`.
    ///
    /// Performs at most one discrete step per call: when the accumulator
    /// crosses the current tick interval, one interval is consumed and one
    /// step runs. Leftover time is retained so short frames still add up,
    /// but the backlog is clamped to `max_backlog_ticks` intervals - a burst
    /// of catch-up steps after a stall (backgrounded tab, debugger pause)
    /// would be worse than losing the stale time.
    pub fn tick(&mut self, elapsed_ms: u32) -> &SimState {
        if self.state.status != Status::Running {
            return &self.state;
        }

        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);

        if self.accumulator_ms >= self.state.tick_interval_ms {
            self.accumulator_ms -= self.state.tick_interval_ms;
            match step(&mut self.state, &mut self.rng, &self.cfg) {
                StepOutcome::Ate => {
                    debug!(
                        "food eaten: score {}, interval {}ms",
                        self.state.score, self.state.tick_interval_ms
                    );
                }
                outcome @ (StepOutcome::HitWall | StepOutcome::HitSelf) => {
                    info!(
                        "run over ({outcome:?}) at tick {}, final score {}",
                        self.state.time_ticks, self.state.score
                    );
                    // At-most-once durable write; failures are the store's
                    // problem and never alter simulation state.
                    self.store.write_high_score_if_greater(self.state.score);
                    self.accumulator_ms = 0;
                }
                StepOutcome::Moved | StepOutcome::Idle => {}
            }
        }

        // Clamp against the post-step interval; eating may have shrunk it.
        let cap = self
            .state
            .tick_interval_ms
            .saturating_mul(self.cfg.max_backlog_ticks);
        if self.accumulator_ms > cap {
            self.accumulator_ms = cap;
        }

        &self.state
    }

    /// Suspend or resume. Only `Running` and `Paused` participate; any other
    /// status absorbs the call. Resuming discards accumulated backlog so a
    /// long pause never fast-forwards.
    pub fn toggle_pause(&mut self) {
        match self.state.status {
            Status::Running => {
                self.state.status = Status::Paused;
                debug!("paused at tick {}", self.state.time_ticks);
            }
            Status::Paused => {
                self.accumulator_ms = 0;
                self.state.status = Status::Running;
                debug!("resumed at tick {}", self.state.time_ticks);
            }
            Status::Menu | Status::Terminated => {}
        }
    }

    /// Read-only snapshot of the authoritative state
    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// The injected persistence collaborator
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }
}
