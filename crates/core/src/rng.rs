//! RNG module - deterministic jewel generation
//!
//! Generation and refill are parameterized over a [`JewelSource`] so that a
//! seed fully determines every board the engine produces. The default source
//! is a simple LCG; tests substitute scripted sources.

use jewels_types::JewelKind;

/// A deterministic supply of jewel kinds for generation and refill
pub trait JewelSource {
    /// Draw the next jewel kind
    fn next_jewel(&mut self) -> JewelKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl JewelSource for SimpleRng {
    fn next_jewel(&mut self) -> JewelKind {
        let index = self.next_range(JewelKind::ALL.len() as u32) as usize;
        JewelKind::ALL[index]
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
