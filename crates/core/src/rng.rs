//! Random sources for shape selection
//!
//! The engine draws shapes through the [`RandomSource`] trait so a game can be
//! driven by a seeded generator in play and by a fixed sequence in tests.

/// Source of shape choices
pub trait RandomSource {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Value in `[0, max)`
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
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
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values forever.
///
/// Each value is reduced into range by `next_range`, so catalog indices can be
/// given directly: `FixedSequence::new(vec![0, 1])` yields I, O, I, O, ...
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<u32>,
    pos: usize,
}

impl FixedSequence {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "FixedSequence needs at least one value");
        Self { values, pos: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        v
    }
}
