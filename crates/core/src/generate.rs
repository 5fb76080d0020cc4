//! Matrix generation - settled random boards
//!
//! A fresh board is rolled uniformly at random, then re-rolled until no
//! combo is present. Pure retry settles almost immediately with seven
//! kinds; a bounded retry count plus a constructive repair sweep keeps
//! termination guaranteed even for degenerate sources.

use jewels_types::{Cell, Coord, JewelKind, BOARD_SIZE, GENERATE_RETRY_LIMIT};

use crate::combo::detect_combos;
use crate::matrix::Matrix;
use crate::rng::JewelSource;

/// Produce a full 8x8 matrix with no combos.
///
/// Rolls complete random boards until one is settled; after
/// [`GENERATE_RETRY_LIMIT`] failures the last candidate is repaired in
/// place instead.
pub fn generate(source: &mut impl JewelSource) -> Matrix {
    let mut candidate = random_matrix(source);
    for _ in 0..GENERATE_RETRY_LIMIT {
        if detect_combos(&candidate).is_empty() {
            return candidate;
        }
        candidate = random_matrix(source);
    }

    repair(&mut candidate);
    candidate
}

/// Roll every cell uniformly at random, in row-major order
fn random_matrix(source: &mut impl JewelSource) -> Matrix {
    let mut matrix = Matrix::new();
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            matrix.set(Coord::new(x, y), Some(source.next_jewel()));
        }
    }
    matrix
}

/// Constructive repair: sweep row-major and replace any cell that completes
/// a run with the first kind that completes none.
///
/// A run's right-/bottom-most cell always has two equal neighbors behind it
/// in sweep order, so one forward pass leaves no run standing. At most two
/// kinds are ever forbidden for a cell, so a replacement always exists.
fn repair(matrix: &mut Matrix) {
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let at = Coord::new(x, y);
            let Some(current) = matrix.get(at) else {
                continue;
            };

            let left_pair = if x >= 2 {
                pair_kind(
                    matrix.get(Coord::new(x - 1, y)),
                    matrix.get(Coord::new(x - 2, y)),
                )
            } else {
                None
            };
            let up_pair = if y >= 2 {
                pair_kind(
                    matrix.get(Coord::new(x, y - 1)),
                    matrix.get(Coord::new(x, y - 2)),
                )
            } else {
                None
            };

            if Some(current) != left_pair && Some(current) != up_pair {
                continue;
            }

            let replacement = JewelKind::ALL
                .into_iter()
                .find(|kind| Some(*kind) != left_pair && Some(*kind) != up_pair);
            if let Some(kind) = replacement {
                matrix.set(at, Some(kind));
            }
        }
    }
}

/// The shared kind of two equal non-empty cells, if any
fn pair_kind(first: Cell, second: Cell) -> Option<JewelKind> {
    match (first, second) {
        (Some(a), Some(b)) if a == b => Some(a),
        _ => None,
    }
}
