use super::{Pattern, RenderContext, clamp_pixel, pixel_span};
use crate::{
    color::{Rgb, fade_to_black_by},
    math8::beatsin16,
    random::RandomSource,
};

const FADE: u8 = 20;

/// A colored dot sweeping back and forth, with fading trails
///
/// The span between the previous and the current position is filled so
/// the dot never leaves gaps at high speed.
#[derive(Debug, Clone, Default)]
pub struct Sinelon {
    prev: usize,
}

impl Sinelon {
    pub const fn new() -> Self {
        Self { prev: 0 }
    }
}

impl<const N: usize> Pattern<N> for Sinelon {
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        if N == 0 {
            return;
        }
        fade_to_black_by(leds, FADE);

        let pos = beatsin16(u16::from(ctx.speed), 0, pixel_span::<N>(), ctx.now_ms) as usize;
        let pos = clamp_pixel::<N>(pos);
        let prev = clamp_pixel::<N>(self.prev);
        let color = ctx.base_palette.color_at(ctx.hue);

        let (from, to) = if pos < prev { (pos, prev) } else { (prev, pos) };
        leds[from..=to].fill(color);
        self.prev = pos;
    }
}
