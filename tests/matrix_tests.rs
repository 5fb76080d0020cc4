//! Matrix tests - grid storage and swap rules through the facade API

use jewels::core::Matrix;
use jewels::types::JewelKind::{self, Amber, Amethyst, Diamond, Emerald};
use jewels::types::{Cell, Coord, BOARD_SIZE};

fn row(kinds: [JewelKind; 8]) -> [Cell; 8] {
    kinds.map(Some)
}

/// Alternating four-kind board with no combos
fn settled_board() -> Matrix {
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
fn test_from_rows_matches_coordinates() {
    let matrix = Matrix::from_rows([
        row([Amber, Amethyst, Amber, Amethyst, Amber, Amethyst, Amber, Amethyst]),
        row([Diamond, Emerald, Diamond, Emerald, Diamond, Emerald, Diamond, Emerald]),
        row([Amber, Amethyst, Amber, Amethyst, Amber, Amethyst, Amber, Amethyst]),
        row([Diamond, Emerald, Diamond, Emerald, Diamond, Emerald, Diamond, Emerald]),
        row([Amber, Amethyst, Amber, Amethyst, Amber, Amethyst, Amber, Amethyst]),
        row([Diamond, Emerald, Diamond, Emerald, Diamond, Emerald, Diamond, Emerald]),
        row([Amber, Amethyst, Amber, Amethyst, Amber, Amethyst, Amber, Amethyst]),
        row([Diamond, Emerald, Diamond, Emerald, Diamond, Emerald, Diamond, Emerald]),
    ]);
    assert_eq!(matrix, settled_board());
    assert_eq!(matrix.get(Coord::new(1, 0)), Some(Amethyst));
    assert_eq!(matrix.get(Coord::new(0, 1)), Some(Diamond));
}

#[test]
fn test_swap_is_its_own_inverse() {
    let matrix = settled_board();
    let a = Coord::new(3, 3);
    let b = Coord::new(3, 4);

    let once = matrix.swapped(a, b).unwrap();
    assert_ne!(once, matrix);
    let twice = once.swapped(a, b).unwrap();
    assert_eq!(twice, matrix);
}

#[test]
fn test_non_adjacent_swap_is_rejected() {
    let matrix = settled_board();
    let before = matrix.clone();

    // Distance 2, diagonal, and self
    assert!(matrix.swapped(Coord::new(0, 0), Coord::new(0, 2)).is_none());
    assert!(matrix.swapped(Coord::new(2, 2), Coord::new(3, 3)).is_none());
    assert!(matrix.swapped(Coord::new(5, 5), Coord::new(5, 5)).is_none());
    assert_eq!(matrix, before);
}

#[test]
#[should_panic]
fn test_out_of_bounds_coordinate_fails_fast() {
    Coord::new(8, 0);
}

#[test]
fn test_every_kind_has_a_distinct_display_color() {
    let mut colors = std::collections::HashSet::new();
    for kind in JewelKind::ALL {
        assert!(!kind.display_color().is_empty());
        colors.insert(kind.display_color());
    }
    assert_eq!(colors.len(), JewelKind::ALL.len());
}
