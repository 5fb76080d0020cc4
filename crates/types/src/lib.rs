//! Core types shared across the board engine
//! This crate contains pure data types with no external dependencies

/// Board dimensions (the board is square)
pub const BOARD_SIZE: u8 = 8;

/// Minimum run length that counts as a combo
pub const MIN_COMBO_LEN: usize = 3;

/// Full-board re-rolls before the generator falls back to local repair
pub const GENERATE_RETRY_LIMIT: u32 = 64;

/// Hint presentation constants: the caller highlights the hinted pair
/// with this many on/off pulses, each phase lasting this long.
pub const HINT_PULSE_COUNT: u8 = 5;
pub const HINT_PULSE_MS: u32 = 100;

/// Jewel kinds on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JewelKind {
    Amber,
    Amethyst,
    Diamond,
    Emerald,
    Ruby,
    Sapphire,
    Topaz,
}

impl JewelKind {
    /// All jewel kinds, in draw order
    pub const ALL: [JewelKind; 7] = [
        JewelKind::Amber,
        JewelKind::Amethyst,
        JewelKind::Diamond,
        JewelKind::Emerald,
        JewelKind::Ruby,
        JewelKind::Sapphire,
        JewelKind::Topaz,
    ];

    /// Parse jewel kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "amber" => Some(JewelKind::Amber),
            "amethyst" => Some(JewelKind::Amethyst),
            "diamond" => Some(JewelKind::Diamond),
            "emerald" => Some(JewelKind::Emerald),
            "ruby" => Some(JewelKind::Ruby),
            "sapphire" => Some(JewelKind::Sapphire),
            "topaz" => Some(JewelKind::Topaz),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            JewelKind::Amber => "amber",
            JewelKind::Amethyst => "amethyst",
            JewelKind::Diamond => "diamond",
            JewelKind::Emerald => "emerald",
            JewelKind::Ruby => "ruby",
            JewelKind::Sapphire => "sapphire",
            JewelKind::Topaz => "topaz",
        }
    }

    /// Display color for rendering, one per kind.
    /// Lookup table only; the engine never branches on colors.
    pub fn display_color(&self) -> &'static str {
        match self {
            JewelKind::Amber => "orange",
            JewelKind::Amethyst => "purple",
            JewelKind::Diamond => "white",
            JewelKind::Emerald => "green",
            JewelKind::Ruby => "red",
            JewelKind::Sapphire => "blue",
            JewelKind::Topaz => "yellow",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with a jewel kind).
/// Empty cells appear only transiently while a cascade is resolving.
pub type Cell = Option<JewelKind>;

/// A validated board coordinate.
///
/// Construction panics outside `[0, BOARD_SIZE)` on either axis: an
/// out-of-range coordinate is a caller bug, not a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    pub fn new(x: u8, y: u8) -> Self {
        assert!(
            x < BOARD_SIZE && y < BOARD_SIZE,
            "coordinate ({}, {}) outside the {}x{} board",
            x,
            y,
            BOARD_SIZE,
            BOARD_SIZE
        );
        Self { x, y }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// Grid adjacency: same row or column, one step apart
    pub fn is_adjacent(&self, other: Coord) -> bool {
        (self.x == other.x && self.y.abs_diff(other.y) == 1)
            || (self.y == other.y && self.x.abs_diff(other.x) == 1)
    }

    /// Neighbor one step to the right, if still on the board
    pub fn right(&self) -> Option<Coord> {
        (self.x + 1 < BOARD_SIZE).then(|| Coord::new(self.x + 1, self.y))
    }

    /// Neighbor one step down, if still on the board
    pub fn down(&self) -> Option<Coord> {
        (self.y + 1 < BOARD_SIZE).then(|| Coord::new(self.x, self.y + 1))
    }
}
