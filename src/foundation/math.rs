/// Small seeded generator (SplitMix64) used for sketch selection.
///
/// Not cryptographic. Equal seeds give equal sequences, which keeps tests and CLI output
/// reproducible.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
        self.state = self.state.wrapping_add(GAMMA);
        let mix = |z: u64, shift: u32, mul: u64| (z ^ (z >> shift)).wrapping_mul(mul);
        let z = mix(self.state, 30, 0xBF58_476D_1CE4_E5B9);
        let z = mix(z, 27, 0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let len = len as u64;
        // Rejection sampling keeps the distribution uniform for any `len`.
        let zone = u64::MAX - (u64::MAX % len);
        loop {
            let v = self.next_u64();
            if v < zone {
                return (v % len) as usize;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
