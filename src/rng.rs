//! Seeded PRNG for pivot selection.
//!
//! Construction takes an explicit seed so repeated builds of the same input
//! produce the same layout; there is no global generator.

/// Simple xorshift64 PRNG.
#[derive(Debug, Clone)]
pub(crate) struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            // xorshift has a fixed point at zero
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
