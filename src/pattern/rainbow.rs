//! Rainbow patterns
//!
//! Hue gradient across the strip starting at the global hue, optionally
//! sprinkled with glitter, and a solid single-hue fill.

use super::{Pattern, RenderContext, pixel_span};
use crate::{
    color::{Hsv, Rgb, WHITE, add_colors, fill_rainbow, fill_solid, hsv2rgb},
    random::RandomSource,
};

const GLITTER_CHANCE: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainbowVariant {
    /// Full hue sweep across the strip
    Gradient,
    /// Hue sweep plus random white sparkles
    Glitter,
    /// Whole strip in the current hue
    Solid,
}

#[derive(Debug, Clone)]
pub struct Rainbow {
    variant: RainbowVariant,
}

impl Rainbow {
    pub const fn new(variant: RainbowVariant) -> Self {
        Self { variant }
    }
}

impl<const N: usize> Pattern<N> for Rainbow {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        if N == 0 {
            return;
        }
        let delta_hue = (255 / N) as u8;
        match self.variant {
            RainbowVariant::Gradient => fill_rainbow(leds, ctx.hue, delta_hue),
            RainbowVariant::Glitter => {
                fill_rainbow(leds, ctx.hue, delta_hue);
                add_glitter(ctx, leds, GLITTER_CHANCE);
            }
            RainbowVariant::Solid => fill_solid(
                leds,
                hsv2rgb(Hsv {
                    hue: ctx.hue,
                    sat: 255,
                    val: 255,
                }),
            ),
        }
    }
}

/// Add white to one random pixel with probability `chance`/256
fn add_glitter<R: RandomSource, const N: usize>(
    ctx: &mut RenderContext<'_, R, N>,
    leds: &mut [Rgb; N],
    chance: u8,
) {
    if ctx.rng.random8() < chance {
        let pos = ctx.rng.random16_below(pixel_span::<N>()) as usize;
        leds[pos] = add_colors(leds[pos], WHITE);
    }
}
