//! The discrete simulation step
//!
//! One step advances the snake by exactly one grid cell. The engine calls
//! this at tick boundaries; tests call it directly on hand-built states.

use rand::Rng;

use super::collision::{hits_body, hits_wall, random_free_cell};
use super::state::{SimState, Status};
use crate::config::Config;

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head advanced one cell, tail popped (net length unchanged)
    Moved,
    /// Food consumed: grew by one, score bumped, interval tightened
    Ate,
    /// New head left the board; run terminated
    HitWall,
    /// New head landed on the body; run terminated
    HitSelf,
    /// State was not `Running`; nothing happened
    Idle,
}

impl StepOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, StepOutcome::HitWall | StepOutcome::HitSelf)
    }
}

/// Advance the simulation by one discrete step.
///
/// Order matters and is fixed: commit the queued turn, compute the new head,
/// wall check, self check, push head, then grow-or-slide. On a terminal hit
/// the body is left untouched (no head push) and `high_score` is refreshed in
/// memory; the durable write is the engine's job.
pub fn step<R: Rng>(state: &mut SimState, rng: &mut R, cfg: &Config) -> StepOutcome {
    if state.status != Status::Running {
        return StepOutcome::Idle;
    }

    // Commit the buffered turn. Legality was checked at queue time against
    // the then-committed direction; the recheck here drops anything that
    // slipped through as an exact reversal.
    if let Some(queued) = state.queued_direction.take() {
        if queued != state.direction.opposite() {
            state.direction = queued;
        }
    }

    state.time_ticks += 1;

    let new_head = state.head() + state.direction.unit();

    if hits_wall(new_head, cfg.grid_size) {
        state.status = Status::Terminated;
        state.high_score = state.high_score.max(state.score);
        return StepOutcome::HitWall;
    }

    if hits_body(new_head, &state.snake) {
        state.status = Status::Terminated;
        state.high_score = state.high_score.max(state.score);
        return StepOutcome::HitSelf;
    }

    state.snake.push_front(new_head);

    if new_head == state.food {
        state.score += cfg.food_points;
        state.tick_interval_ms =
            (state.tick_interval_ms.saturating_sub(cfg.speed_step_ms)).max(cfg.min_tick_ms);
        // Sample over the post-step body so the new head cell is excluded and
        // the "food never overlaps the snake" invariant holds atomically.
        state.food = random_free_cell(rng, cfg.grid_size, &state.snake);
        StepOutcome::Ate
    } else {
        state.snake.pop_back();
        StepOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;
    use glam::IVec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::VecDeque;

    fn running_state(cfg: &Config, seed: u64) -> SimState {
        SimState::new(cfg, seed, 0, Status::Running)
    }

    #[test]
    fn plain_move_swaps_tail_for_head() {
        let cfg = Config::default();
        let mut state = running_state(&cfg, 3);
        state.food = IVec2::new(0, 0); // Out of the snake's immediate path
        let tail = *state.snake.back().unwrap();
        let mut rng = Pcg32::seed_from_u64(3);

        let outcome = step(&mut state, &mut rng, &cfg);

        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(state.head(), IVec2::new(11, 10));
        assert_eq!(state.len(), 3);
        assert!(!state.snake.contains(&tail));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn food_tick_grows_scores_and_speeds_up() {
        let cfg = Config::default();
        let mut state = running_state(&cfg, 3);
        state.snake = [IVec2::new(2, 2), IVec2::new(1, 2), IVec2::new(0, 2)].into();
        state.food = IVec2::new(3, 2);
        let mut rng = Pcg32::seed_from_u64(3);

        let outcome = step(&mut state, &mut rng, &cfg);

        assert_eq!(outcome, StepOutcome::Ate);
        let expected: VecDeque<IVec2> = [
            IVec2::new(3, 2),
            IVec2::new(2, 2),
            IVec2::new(1, 2),
            IVec2::new(0, 2),
        ]
        .into();
        assert_eq!(state.snake, expected);
        assert_eq!(state.score, 10);
        assert_eq!(state.tick_interval_ms, 145);
        assert!(!state.snake.contains(&state.food));
    }

    #[test]
    fn interval_floors_at_minimum() {
        let cfg = Config::default();
        let mut state = running_state(&cfg, 3);
        state.snake = [IVec2::new(2, 2), IVec2::new(1, 2), IVec2::new(0, 2)].into();
        state.food = IVec2::new(3, 2);
        state.tick_interval_ms = 52;
        let mut rng = Pcg32::seed_from_u64(3);

        step(&mut state, &mut rng, &cfg);

        assert_eq!(state.tick_interval_ms, cfg.min_tick_ms);
    }

    #[test]
    fn wall_hit_terminates_without_mutating_the_body() {
        let cfg = Config { grid_size: 5, ..Config::default() }.clamped();
        let mut state = running_state(&cfg, 3);
        state.snake = [IVec2::new(4, 2), IVec2::new(3, 2), IVec2::new(2, 2)].into();
        state.food = IVec2::new(0, 0);
        state.score = 30;
        let body_before = state.snake.clone();
        let mut rng = Pcg32::seed_from_u64(3);

        let outcome = step(&mut state, &mut rng, &cfg);

        assert_eq!(outcome, StepOutcome::HitWall);
        assert_eq!(state.status, Status::Terminated);
        assert_eq!(state.snake, body_before);
        assert_eq!(state.high_score, 30);
    }

    #[test]
    fn self_hit_terminates() {
        let cfg = Config::default();
        let mut state = running_state(&cfg, 3);
        // Head at (5,5) moving up into (5,6)... arrange a hook so the next
        // cell down is already occupied.
        state.snake = [
            IVec2::new(5, 5),
            IVec2::new(4, 5),
            IVec2::new(4, 6),
            IVec2::new(5, 6),
            IVec2::new(6, 6),
        ]
        .into();
        state.direction = Direction::Down;
        state.food = IVec2::new(0, 0);
        let mut rng = Pcg32::seed_from_u64(3);

        let outcome = step(&mut state, &mut rng, &cfg);

        assert_eq!(outcome, StepOutcome::HitSelf);
        assert_eq!(state.status, Status::Terminated);
    }

    #[test]
    fn vacated_tail_cell_is_fair_game() {
        // Head steps into the cell the tail leaves this same tick; the body
        // check runs against the pre-pop body, so this is terminal — the
        // original board behaves the same way.
        let cfg = Config::default();
        let mut state = running_state(&cfg, 3);
        state.snake = [
            IVec2::new(5, 5),
            IVec2::new(5, 6),
            IVec2::new(6, 6),
            IVec2::new(6, 5),
        ]
        .into();
        state.direction = Direction::Right;
        state.food = IVec2::new(0, 0);
        let mut rng = Pcg32::seed_from_u64(3);

        let outcome = step(&mut state, &mut rng, &cfg);
        assert_eq!(outcome, StepOutcome::HitSelf);
    }

    #[test]
    fn queued_reversal_is_dropped_at_commit() {
        let cfg = Config::default();
        let mut state = running_state(&cfg, 3);
        state.food = IVec2::new(0, 0);
        state.queued_direction = Some(Direction::Left); // Exact reversal of Right
        let mut rng = Pcg32::seed_from_u64(3);

        step(&mut state, &mut rng, &cfg);

        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.head(), IVec2::new(11, 10));
    }

    #[test]
    fn idle_when_not_running() {
        let cfg = Config::default();
        for status in [Status::Menu, Status::Paused, Status::Terminated] {
            let mut state = SimState::new(&cfg, 3, 0, status);
            let before = state.clone();
            let mut rng = Pcg32::seed_from_u64(3);

            assert_eq!(step(&mut state, &mut rng, &cfg), StepOutcome::Idle);
            assert_eq!(state, before);
        }
    }
}
