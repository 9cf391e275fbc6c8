//! Color waves: the pride motion rendered through the blended palette

use super::{
    Pattern, RenderContext,
    wave::{PixelOrder, WaveFrame, wave_brightness},
};
use crate::{
    clock::WaveClock,
    color::{Rgb, nblend},
    math8::scale8,
    palette::PaletteBlend,
    random::RandomSource,
};

const BLEND_AMOUNT: u8 = 128;

/// Palette waves blended into the previous frame
pub struct ColorWaves<'a> {
    clock: &'a mut WaveClock,
    order: PixelOrder,
}

impl<'a> ColorWaves<'a> {
    pub const fn new(clock: &'a mut WaveClock, order: PixelOrder) -> Self {
        Self { clock, order }
    }
}

/// Fold the hue accumulator into a triangle wave over `0..=255`
#[allow(clippy::cast_possible_truncation)]
const fn folded_hue(hue16: u16) -> u8 {
    let h16_128 = hue16 >> 7;
    if h16_128 & 0x100 != 0 {
        255 - (h16_128 >> 1) as u8
    } else {
        (h16_128 >> 1) as u8
    }
}

impl<const N: usize> Pattern<N> for ColorWaves<'_> {
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        if N == 0 {
            return;
        }
        let frame = WaveFrame::sample(self.clock, ctx.now_ms, (300, 1500));

        let mut hue16 = frame.phase.hue16;
        let mut theta16 = frame.phase.brightness_theta16;
        for i in 0..N {
            hue16 = hue16.wrapping_add(frame.hue_inc16);
            theta16 = theta16.wrapping_add(frame.brightness_theta_inc16);

            let index = scale8(folded_hue(hue16), 240);
            let brightness = wave_brightness(theta16, frame.bright_depth);
            let color = ctx.palette.color(index, brightness, PaletteBlend::Linear);

            let pixel = self.order.pixel(i, ctx.layout);
            nblend(&mut leds[pixel], color, BLEND_AMOUNT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::folded_hue;

    #[test]
    fn hue_folds_back_down() {
        assert_eq!(folded_hue(0), 0);
        assert_eq!(folded_hue(0x4000), 64);
        assert_eq!(folded_hue(0x7F80), 127);
        assert_eq!(folded_hue(0x8000), 127);
        assert_eq!(folded_hue(0xFF80), 0);
    }
}
