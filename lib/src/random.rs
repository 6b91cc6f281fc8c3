//! Pseudo-random sources for window placement.

/// A source of pseudo-random numbers. Injected so placement can be
/// reproduced from a seed.
pub trait RandomSource: Send {
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish value in `[0, bound)`; `0` when `bound` is `0`.
    #[inline]
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}

/// Marsaglia xorshift32.
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub const DEFAULT_SEED: u32 = 0x2545_F491;

    /// A zero seed would lock the generator at zero, so it is replaced by
    /// [`Self::DEFAULT_SEED`].
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { Self::DEFAULT_SEED } else { seed },
        }
    }

    /// Fold a 64-bit command-line seed into generator state.
    pub const fn from_seed64(seed: u64) -> Self {
        Self::new((seed ^ (seed >> 32)) as u32)
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RandomSource for XorShift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
