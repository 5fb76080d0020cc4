//! Cascade resolution - clear, gravity, refill until settled
//!
//! One resolve call loops detect -> clear -> gravity -> refill until the
//! detector finds nothing. Each iteration is recorded as a [`CascadeStep`]
//! so a caller can stage animation without re-deriving intermediate boards.
//! Score policy: one point per cleared cell, summed across iterations.

use arrayvec::ArrayVec;

use jewels_types::{Coord, JewelKind, BOARD_SIZE};

use crate::combo::{detect_combos, ComboMask};
use crate::matrix::Matrix;
use crate::rng::JewelSource;

const COLUMN_LEN: usize = BOARD_SIZE as usize;

/// One cascade iteration: what was cleared, and the board after the
/// column shift and refill that followed.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeStep {
    /// Cells cleared this iteration
    pub cleared: ComboMask,
    /// Number of cells cleared this iteration
    pub cleared_cells: u32,
    /// Board state after gravity and refill
    pub matrix: Matrix,
}

/// Result of resolving a matrix to a settled state
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Final settled matrix: no combos, no empty cells
    pub matrix: Matrix,
    /// Total cells cleared across every iteration
    pub score_delta: u32,
    /// One entry per cascade iteration, in order
    pub steps: Vec<CascadeStep>,
}

/// Resolve every combo on the board, cascading until a fixed point.
///
/// The input matrix is not modified; refill values are drawn from `source`.
/// Terminates because each iteration either clears at least one run or
/// exits the loop.
pub fn resolve(matrix: &Matrix, source: &mut impl JewelSource) -> Resolution {
    let mut current = matrix.clone();
    let mut score_delta = 0;
    let mut steps = Vec::new();

    loop {
        let cleared = detect_combos(&current);
        if cleared.is_empty() {
            break;
        }

        for at in cleared.iter() {
            current.set(at, None);
        }
        let cleared_cells = cleared.count();
        score_delta += cleared_cells;

        apply_gravity(&mut current);
        refill(&mut current, source);

        steps.push(CascadeStep {
            cleared,
            cleared_cells,
            matrix: current.clone(),
        });
    }

    Resolution {
        matrix: current,
        score_delta,
        steps,
    }
}

/// Let jewels fall: within each column, non-empty cells shift toward the
/// bottom row, preserving their relative order; vacancies collect at the top.
fn apply_gravity(matrix: &mut Matrix) {
    for x in 0..BOARD_SIZE {
        let mut column: ArrayVec<JewelKind, COLUMN_LEN> = ArrayVec::new();
        for y in 0..BOARD_SIZE {
            if let Some(kind) = matrix.get(Coord::new(x, y)) {
                column.push(kind);
            }
        }

        let gap = COLUMN_LEN - column.len();
        for y in 0..COLUMN_LEN {
            let cell = if y < gap { None } else { Some(column[y - gap]) };
            matrix.set(Coord::new(x, y as u8), cell);
        }
    }
}

/// Fill every remaining vacancy with a fresh jewel from the source.
/// Cells are visited in row-major order, which fixes the draw sequence.
fn refill(matrix: &mut Matrix, source: &mut impl JewelSource) {
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let at = Coord::new(x, y);
            if matrix.get(at).is_none() {
                matrix.set(at, Some(source.next_jewel()));
            }
        }
    }
}
