//! Pride waves: rainbow bands with ever-changing width, speed and depth

use super::{
    Pattern, RenderContext,
    wave::{PixelOrder, WaveFrame, wave_brightness},
};
use crate::{
    clock::WaveClock,
    color::{Hsv, Rgb, hsv2rgb, nblend},
    math8::beatsin88,
    random::RandomSource,
};

const BLEND_AMOUNT: u8 = 64;

/// HSV rainbow waves blended into the previous frame
pub struct Pride<'a> {
    clock: &'a mut WaveClock,
    order: PixelOrder,
}

impl<'a> Pride<'a> {
    pub const fn new(clock: &'a mut WaveClock, order: PixelOrder) -> Self {
        Self { clock, order }
    }
}

impl<const N: usize> Pattern<N> for Pride<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        if N == 0 {
            return;
        }
        let sat = beatsin88(87, 220, 250, ctx.now_ms) as u8;
        let frame = WaveFrame::sample(self.clock, ctx.now_ms, (1, 3000));

        let mut hue16 = frame.phase.hue16;
        let mut theta16 = frame.phase.brightness_theta16;
        for i in 0..N {
            hue16 = hue16.wrapping_add(frame.hue_inc16);
            theta16 = theta16.wrapping_add(frame.brightness_theta_inc16);

            let color = hsv2rgb(Hsv {
                hue: (hue16 >> 8) as u8,
                sat,
                val: wave_brightness(theta16, frame.bright_depth),
            });
            let pixel = self.order.pixel(i, ctx.layout);
            nblend(&mut leds[pixel], color, BLEND_AMOUNT);
        }
    }
}
