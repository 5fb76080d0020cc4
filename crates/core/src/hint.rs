//! Hint search - find a swap that would create a combo
//!
//! Exhaustive scan in row-major order, trying the right neighbor before the
//! down neighbor, so the same board always yields the same hint. Each trial
//! swap runs on a scratch copy; the caller's matrix is never touched.

use jewels_types::{Coord, BOARD_SIZE};

use crate::combo::detect_combos;
use crate::matrix::Matrix;

/// First adjacent pair whose swap produces at least one combo, or `None`
/// when no swap on the whole board does.
pub fn find_hint(matrix: &Matrix) -> Option<(Coord, Coord)> {
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let at = Coord::new(x, y);
            for neighbor in [at.right(), at.down()].into_iter().flatten() {
                if let Some(trial) = matrix.swapped(at, neighbor) {
                    if !detect_combos(&trial).is_empty() {
                        return Some((at, neighbor));
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use jewels_types::JewelKind::{Amber, Amethyst, Diamond, Emerald, Ruby};

    /// Alternating four-kind pattern; no combo exists and no single swap
    /// can create one (any swap leaves runs of at most two).
    fn hintless_matrix() -> Matrix {
        let mut matrix = Matrix::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let kind = match (y % 2, x % 2) {
                    (0, 0) => Amber,
                    (0, _) => Amethyst,
                    (_, 0) => Diamond,
                    (_, _) => Emerald,
                };
                matrix.set(Coord::new(x, y), Some(kind));
            }
        }
        matrix
    }

    #[test]
    fn test_no_hint_on_locked_board() {
        assert_eq!(find_hint(&hintless_matrix()), None);
    }

    #[test]
    fn test_finds_first_producing_pair_in_scan_order() {
        let mut matrix = hintless_matrix();
        // Plant Ruby so that swapping (2,0) down completes a row of three
        matrix.set(Coord::new(0, 0), Some(Ruby));
        matrix.set(Coord::new(1, 0), Some(Ruby));
        matrix.set(Coord::new(2, 1), Some(Ruby));

        let hint = find_hint(&matrix);
        assert_eq!(hint, Some((Coord::new(2, 0), Coord::new(2, 1))));
    }

    #[test]
    fn test_hint_swap_really_produces_a_combo() {
        let mut matrix = hintless_matrix();
        matrix.set(Coord::new(0, 0), Some(Ruby));
        matrix.set(Coord::new(1, 0), Some(Ruby));
        matrix.set(Coord::new(2, 1), Some(Ruby));

        let (a, b) = find_hint(&matrix).unwrap();
        let swapped = matrix.swapped(a, b).unwrap();
        assert!(!detect_combos(&swapped).is_empty());
    }

    #[test]
    fn test_hint_does_not_mutate_the_board() {
        let matrix = hintless_matrix();
        let before = matrix.clone();
        let _ = find_hint(&matrix);
        assert_eq!(matrix, before);
    }
}
