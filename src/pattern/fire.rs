//! Heat map patterns
//!
//! One-dimensional cellular heat simulation: cells cool randomly, heat
//! drifts away from the base while diffusing, and new sparks ignite near
//! the base. Cell temperatures are mapped through a palette.

use super::{Pattern, RenderContext};
use crate::{
    color::Rgb,
    math8::{qadd8, qsub8, scale8},
    palette::Palette16,
    random::RandomSource,
};

/// Sparks ignite within this many cells of the base
const SPARK_ZONE: u8 = 7;

/// Heat simulation tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireConfig {
    /// How much the air cools as it rises; less cooling, taller flames
    pub cooling: u8,
    /// Chance out of 255 that a new spark is lit each frame
    pub sparking: u8,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            cooling: 49,
            sparking: 60,
        }
    }
}

/// Which end of the strip is the base of the flame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatDirection {
    /// Heat rises from pixel 0
    Up,
    /// Heat falls from the last pixel
    Down,
}

/// Persistent temperature of every cell
#[derive(Debug, Clone)]
pub struct HeatField<const N: usize> {
    cells: [u8; N],
}

impl<const N: usize> Default for HeatField<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> HeatField<N> {
    pub const fn new() -> Self {
        Self { cells: [0; N] }
    }

    pub const fn cells(&self) -> &[u8; N] {
        &self.cells
    }

    /// Run one simulation step
    #[allow(clippy::cast_possible_truncation)]
    pub fn step<R: RandomSource>(&mut self, config: FireConfig, rng: &mut R) {
        if N == 0 {
            return;
        }

        // Cool down every cell a little
        let max_cooling = ((u32::from(config.cooling) * 10) / N as u32 + 2).min(255) as u8;
        for cell in &mut self.cells {
            *cell = qsub8(*cell, rng.random8_between(0, max_cooling));
        }

        // Heat drifts up and diffuses
        for k in (2..N).rev() {
            let sum = u16::from(self.cells[k - 1]) + 2 * u16::from(self.cells[k - 2]);
            self.cells[k] = (sum / 3) as u8;
        }

        // Ignite new sparks near the base
        if rng.random8() < config.sparking {
            let y = usize::from(rng.random8_below(SPARK_ZONE));
            if y < N {
                self.cells[y] = qadd8(self.cells[y], rng.random8_between(160, 255));
            }
        }
    }
}

/// Heat simulation rendered through a palette
pub struct HeatMap<'a, const N: usize> {
    field: &'a mut HeatField<N>,
    palette: &'a Palette16,
    direction: HeatDirection,
}

impl<'a, const N: usize> HeatMap<'a, N> {
    pub const fn new(
        field: &'a mut HeatField<N>,
        palette: &'a Palette16,
        direction: HeatDirection,
    ) -> Self {
        Self {
            field,
            palette,
            direction,
        }
    }
}

impl<const N: usize> Pattern<N> for HeatMap<'_, N> {
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        self.field.step(ctx.fire, ctx.rng);

        for (j, heat) in self.field.cells.iter().enumerate() {
            let color = self.palette.color_at(scale8(*heat, 190));
            let pixel = match self.direction {
                HeatDirection::Up => j,
                HeatDirection::Down => N - 1 - j,
            };
            leds[pixel] = color;
        }
    }
}
