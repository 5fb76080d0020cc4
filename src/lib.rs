//! Jewels (workspace facade crate).
//!
//! This package keeps the `jewels::{core,types}` public API stable while the
//! implementation lives in dedicated crates under `crates/`.

pub use jewels_core as core;
pub use jewels_types as types;
