//! Randomness source used by the stochastic patterns.

/// Uniform 8/16-bit generator with entropy injection.
///
/// The frame loop calls [`RandomSource::add_entropy`] once per tick; patterns
/// draw from it while rendering.
pub trait RandomSource {
    /// Next uniform 16-bit value
    fn random16(&mut self) -> u16;

    /// Next uniform 8-bit value
    fn random8(&mut self) -> u8;

    /// Mix external entropy into the generator state
    fn add_entropy(&mut self, entropy: u16);

    /// Uniform value in `0..lim`
    #[allow(clippy::cast_possible_truncation)]
    fn random8_below(&mut self, lim: u8) -> u8 {
        ((u16::from(self.random8()) * u16::from(lim)) >> 8) as u8
    }

    /// Uniform value in `min..lim`
    fn random8_between(&mut self, min: u8, lim: u8) -> u8 {
        min.wrapping_add(self.random8_below(lim.wrapping_sub(min)))
    }

    /// Uniform value in `0..lim`
    #[allow(clippy::cast_possible_truncation)]
    fn random16_below(&mut self, lim: u16) -> u16 {
        ((u32::from(self.random16()) * u32::from(lim)) >> 16) as u16
    }
}

const RAND16_SEED: u16 = 1337;
const RAND16_MULTIPLIER: u16 = 2053;
const RAND16_INCREMENT: u16 = 13849;

/// 16-bit linear congruential generator
///
/// Cheap enough to call hundreds of times per frame on a small MCU. Quality
/// comes from the per-frame entropy fed by the frame loop.
#[derive(Debug, Clone)]
pub struct Rand16 {
    seed: u16,
}

impl Default for Rand16 {
    fn default() -> Self {
        Self::new(RAND16_SEED)
    }
}

impl Rand16 {
    /// Create a generator with a fixed seed
    pub const fn new(seed: u16) -> Self {
        Self { seed }
    }

    /// Current generator state
    pub const fn seed(&self) -> u16 {
        self.seed
    }

    const fn step(&mut self) -> u16 {
        self.seed = self
            .seed
            .wrapping_mul(RAND16_MULTIPLIER)
            .wrapping_add(RAND16_INCREMENT);
        self.seed
    }
}

impl RandomSource for Rand16 {
    fn random16(&mut self) -> u16 {
        self.step()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn random8(&mut self) -> u8 {
        let value = self.step();
        // Fold both halves together, the low byte alone is weak
        (value as u8).wrapping_add((value >> 8) as u8)
    }

    fn add_entropy(&mut self, entropy: u16) {
        self.seed = self.seed.wrapping_add(entropy);
    }
}
