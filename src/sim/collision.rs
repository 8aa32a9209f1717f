//! Terminal-condition checks and food placement
//!
//! Small pure predicates over grid cells. Both collision checks are equally
//! terminal; the step runs the wall check first so the reported cause is
//! stable.

use std::collections::VecDeque;

use glam::IVec2;
use rand::Rng;

/// True if `cell` lies outside the `[0, grid_size)` board on either axis
pub fn hits_wall(cell: IVec2, grid_size: i32) -> bool {
    cell.x < 0 || cell.x >= grid_size || cell.y < 0 || cell.y >= grid_size
}

/// True if `cell` coincides with any body segment
pub fn hits_body(cell: IVec2, body: &VecDeque<IVec2>) -> bool {
    body.contains(&cell)
}

/// Pick a uniformly random cell not occupied by `body`.
///
/// Rejection sampling, same as the original board's food placement. Once the
/// board is nearly full rejection degenerates, so after a bounded number of
/// attempts we fall back to scanning for the remaining free cells. A fully
/// occupied board yields the off-board sentinel `(-1, -1)`, which no head can
/// ever reach.
pub fn random_free_cell<R: Rng>(rng: &mut R, grid_size: i32, body: &VecDeque<IVec2>) -> IVec2 {
    let attempts = (grid_size * grid_size * 4) as usize;
    for _ in 0..attempts {
        let cell = IVec2::new(rng.random_range(0..grid_size), rng.random_range(0..grid_size));
        if !hits_body(cell, body) {
            return cell;
        }
    }

    let free: Vec<IVec2> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| IVec2::new(x, y)))
        .filter(|cell| !hits_body(*cell, body))
        .collect();
    if free.is_empty() {
        return IVec2::new(-1, -1);
    }
    free[rng.random_range(0..free.len())]
}
