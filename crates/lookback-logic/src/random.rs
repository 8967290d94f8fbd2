//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible table construction.
//! Uses a simple but effective xorshift algorithm.

/// Seeded random number generator
///
/// Deterministic: same seed + stream = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state
        let state = (seed ^ 0x6a09e667f3bcc908).max(1);

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Derive an independent stream, e.g. one per entrant
    pub fn for_stream(&self, stream: u64) -> Self {
        let mut new_state = self.state;
        new_state ^= stream.wrapping_add(1).wrapping_mul(0x9e3779b97f4a7c15);

        let mut rng = Self { state: new_state.max(1) };
        rng.next_u64(); // Mix
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Uniform float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        // top 53 bits fill the mantissa exactly
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Fair coin flip
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }
}
