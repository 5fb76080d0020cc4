//! Board engine - pure, deterministic, and testable
//!
//! This crate contains the whole match-3 board engine: grid storage, combo
//! detection, cascade resolution, swap validation, and hint search. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical boards and refills
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run under any frontend (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`matrix`]: 8x8 jewel grid with flat-array storage and swap application
//! - [`combo`]: run detection over rows and columns, one linear pass each
//! - [`cascade`]: clear / gravity / refill loop with per-iteration steps
//! - [`generate`]: settled random board generation with bounded retries
//! - [`hint`]: exhaustive search for a combo-producing swap
//! - [`rng`]: seedable LCG and the jewel source abstraction
//! - [`session`]: owning control loop (board + score + RNG) for callers
//!
//! # Board Rules
//!
//! - A **combo** is a run of three or more identical jewels in a row or
//!   column; boards at rest never contain one.
//! - Swaps are legal only between grid-adjacent cells; a swap that clears
//!   nothing is reverted by the session.
//! - Cleared cells score one point each; cascades keep clearing until the
//!   board settles.
//!
//! # Example
//!
//! ```
//! use jewels_core::{detect_combos, find_hint, generate, SimpleRng};
//!
//! let mut rng = SimpleRng::new(12345);
//! let board = generate(&mut rng);
//!
//! // A generated board is settled: no combo anywhere
//! assert!(detect_combos(&board).is_empty());
//!
//! // A hint, when present, names an adjacent pair worth swapping
//! if let Some((a, b)) = find_hint(&board) {
//!     assert!(a.is_adjacent(b));
//! }
//! ```

pub mod cascade;
pub mod combo;
pub mod generate;
pub mod hint;
pub mod matrix;
pub mod rng;
pub mod session;

pub use jewels_types as types;

// Re-export commonly used items for convenience
pub use cascade::{resolve, CascadeStep, Resolution};
pub use combo::{detect_combos, ComboMask};
pub use generate::generate;
pub use hint::find_hint;
pub use matrix::Matrix;
pub use rng::{JewelSource, SimpleRng};
pub use session::{GameSession, HintPulse, SwapResult};
