use super::{Pattern, RenderContext};
use crate::{color::Rgb, math8::beatsin8, palette::PaletteBlend, random::RandomSource};

/// Colored stripes pulsing at the configured tempo
#[derive(Debug, Clone, Copy, Default)]
pub struct Bpm;

impl<const N: usize> Pattern<N> for Bpm {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        let beat = beatsin8(u16::from(ctx.speed), 64, 255, ctx.now_ms);
        for (i, led) in leds.iter_mut().enumerate() {
            let i = i as u8;
            let index = ctx.hue.wrapping_add(i.wrapping_mul(2));
            let brightness = beat
                .wrapping_sub(ctx.hue)
                .wrapping_add(i.wrapping_mul(10));
            *led = ctx.base_palette.color(index, brightness, PaletteBlend::Linear);
        }
    }
}
