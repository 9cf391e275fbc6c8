use super::{Pattern, RenderContext, pixel_span};
use crate::{
    color::{Rgb, add_colors, fade_to_black_by},
    random::RandomSource,
};

const FADE: u8 = 10;

/// Random colored speckles that blink in and fade smoothly
#[derive(Debug, Clone, Copy, Default)]
pub struct Confetti;

impl<const N: usize> Pattern<N> for Confetti {
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        if N == 0 {
            return;
        }
        fade_to_black_by(leds, FADE);
        let pos = ctx.rng.random16_below(pixel_span::<N>()) as usize;
        let index = ctx.hue.wrapping_add(ctx.rng.random8_below(64));
        leds[pos] = add_colors(leds[pos], ctx.base_palette.color_at(index));
    }
}
