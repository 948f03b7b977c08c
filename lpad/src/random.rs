/// Draws used by level generation.
///
/// Only [`Random::next_u32`] is required; the ranged draws are inclusive on both ends.
pub trait Random {
    fn next_u32(&mut self) -> u32;

    /// Uniform in `0..=max`.
    fn irandom(&mut self, max: u32) -> u32 {
        (self.next_u32() as u64 % (max as u64 + 1)) as u32
    }

    /// Uniform in `min..=max`. The bounds may be given in either order.
    fn irandom_range(&mut self, min: u32, max: u32) -> u32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        low + self.irandom(high - low)
    }

    /// `true` with a `chance` percent probability.
    fn proc(&mut self, chance: u8) -> bool {
        self.irandom_range(1, 100) <= chance as u32
    }
}

/// xorshift32, seeded once at boot from the hardware entropy source.
#[derive(Debug, Clone)]
pub struct XorShift(u32);

impl XorShift {
    pub fn new(seed: u32) -> Self {
        // an all-zero state never leaves zero
        XorShift(if seed == 0 { 0x1986_0512 } else { seed })
    }

    /// Folds a wider entropy sample into a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new((seed as u32) ^ ((seed >> 32) as u32))
    }
}

impl Random for XorShift {
    fn next_u32(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }
}
