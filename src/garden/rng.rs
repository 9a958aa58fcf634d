//! Small linear-congruential generator for cosmetic randomness.
//!
//! Not crypto secure; it only has to make flowers and clouds look varied.
//! Kept stateful so several draws within the same millisecond still differ.

pub(super) struct Lcg {
    state: u64,
}

impl Lcg {
    pub(super) fn new(seed: u64) -> Self {
        let mut lcg = Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        };
        // Burn two draws so small clock seeds do not bias the first picks.
        lcg.next();
        lcg.next();
        lcg
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform float in [0, 1).
    pub(super) fn unit(&mut self) -> f64 {
        // Low LCG bits are weak; use the upper half.
        (self.next() >> 32) as f64 / (1u64 << 32) as f64
    }

    /// Uniform float in [lo, hi).
    pub(super) fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit() * (hi - lo)
    }

    /// Uniform index in [0, len).
    pub(super) fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.unit() * len as f64) as usize % len
    }
}

/// Seed for a fresh garden: OS entropy when the `rng` feature is enabled,
/// otherwise the page clock.
pub(super) fn entropy_seed() -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
    }
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0) as u64
}
