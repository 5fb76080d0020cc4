//! Game session - the owning control loop over the stateless engine
//!
//! The engine functions are pure; this type holds what a caller needs
//! between moves: the current settled matrix, the cumulative score, and
//! the RNG. It also applies the caller-level contracts: a swap that
//! clears nothing is reverted, and hints are wrapped in a pulse
//! descriptor for the presentation layer's highlight loop.
//!
//! `&mut self` on mutating calls serializes moves per session; concurrent
//! callers each own their own session.

use jewels_types::{Coord, HINT_PULSE_COUNT, HINT_PULSE_MS};

use crate::cascade::{resolve, CascadeStep};
use crate::generate::generate;
use crate::hint::find_hint;
use crate::matrix::Matrix;
use crate::rng::SimpleRng;

/// Hint presentation descriptor: highlight the pair with `pulses` on/off
/// cycles, each phase lasting `interval_ms`. The timer loop is the
/// caller's job; the engine only names the cells and the cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintPulse {
    pub first: Coord,
    pub second: Coord,
    pub pulses: u8,
    pub interval_ms: u32,
}

/// Outcome of a swap request
#[derive(Debug, Clone, PartialEq)]
pub enum SwapResult {
    /// Coordinates are not grid-adjacent; nothing changed
    NotAdjacent,
    /// Swap was legal but cleared nothing; the board was reverted
    NoMatch,
    /// Swap cleared cells; the board and score advanced
    Matched {
        score_delta: u32,
        steps: Vec<CascadeStep>,
    },
}

/// One player's board, score, and RNG
#[derive(Debug, Clone)]
pub struct GameSession {
    matrix: Matrix,
    score: u32,
    rng: SimpleRng,
}

impl GameSession {
    /// Start a session with a settled board derived from the seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let matrix = generate(&mut rng);
        Self {
            matrix,
            score: 0,
            rng,
        }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Attempt a swap between two cells.
    ///
    /// Adjacency is validated first; a legal swap is then resolved, and
    /// committed only when the resolution cleared at least one cell.
    pub fn try_swap(&mut self, a: Coord, b: Coord) -> SwapResult {
        let Some(swapped) = self.matrix.swapped(a, b) else {
            return SwapResult::NotAdjacent;
        };

        let resolution = resolve(&swapped, &mut self.rng);
        if resolution.score_delta == 0 {
            // Pre-swap matrix was never replaced, so the revert is free
            return SwapResult::NoMatch;
        }

        self.matrix = resolution.matrix;
        self.score += resolution.score_delta;
        SwapResult::Matched {
            score_delta: resolution.score_delta,
            steps: resolution.steps,
        }
    }

    /// A swap the player could make, as a highlight pulse descriptor.
    /// Read-only; returns `None` when the board has no producing swap.
    pub fn hint(&self) -> Option<HintPulse> {
        find_hint(&self.matrix).map(|(first, second)| HintPulse {
            first,
            second,
            pulses: HINT_PULSE_COUNT,
            interval_ms: HINT_PULSE_MS,
        })
    }

    /// Replace the board with a fresh settled one and reset the score.
    /// The RNG continues from its current state, so a restarted session
    /// does not replay the previous board.
    pub fn restart(&mut self) {
        self.matrix = generate(&mut self.rng);
        self.score = 0;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
