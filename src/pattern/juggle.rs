use super::{Pattern, RenderContext, clamp_pixel, pixel_span};
use crate::{
    color::{Hsv, Rgb, add_colors, fade_to_black_by, hsv2rgb},
    math8::beatsin16,
    random::RandomSource,
};

/// Length of the juggle program in seconds
const PROGRAM_SECONDS: u32 = 30;

/// Several colored dots weaving in and out of sync with each other
///
/// Runs a 30 second program that changes the number of dots, their tempo
/// and spacing every ten seconds.
#[derive(Debug, Clone)]
pub struct Juggle {
    dots: u8,
    fade: u8,
    hue_inc: u8,
    hue: u8,
    base_beat: u8,
    last_second: Option<u8>,
}

impl Default for Juggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Juggle {
    pub const fn new() -> Self {
        Self {
            dots: 4,
            fade: 2,
            hue_inc: 255 / 4 - 1,
            hue: 0,
            base_beat: 5,
            last_second: None,
        }
    }

    /// Number of dots in the current program step
    pub const fn dots(&self) -> u8 {
        self.dots
    }

    #[allow(clippy::cast_possible_truncation)]
    fn update_program<R: RandomSource>(&mut self, now_ms: u32, rng: &mut R) {
        let second = ((now_ms / 1000) % PROGRAM_SECONDS) as u8;
        if self.last_second == Some(second) {
            return;
        }
        self.last_second = Some(second);
        match second {
            0 => self.set_step(1, 20, 16, 2, 0),
            10 => self.set_step(4, 10, 16, 8, 128),
            20 => {
                let hue = rng.random8();
                self.set_step(8, 3, 0, 8, hue);
            }
            _ => {}
        }
    }

    const fn set_step(&mut self, dots: u8, base_beat: u8, hue_inc: u8, fade: u8, hue: u8) {
        self.dots = dots;
        self.base_beat = base_beat;
        self.hue_inc = hue_inc;
        self.fade = fade;
        self.hue = hue;
    }
}

impl<const N: usize> Pattern<N> for Juggle {
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        if N == 0 {
            return;
        }
        self.update_program(ctx.now_ms, ctx.rng);

        fade_to_black_by(leds, self.fade);
        let mut hue = self.hue;
        for i in 0..self.dots {
            let bpm = u16::from(self.base_beat) + u16::from(i) + u16::from(self.dots);
            let pos = beatsin16(bpm, 0, pixel_span::<N>(), ctx.now_ms) as usize;
            let pos = clamp_pixel::<N>(pos);
            let color = hsv2rgb(Hsv {
                hue: ctx.hue.wrapping_add(hue),
                sat: 255,
                val: 255,
            });
            leds[pos] = add_colors(leds[pos], color);
            hue = hue.wrapping_add(self.hue_inc);
        }
    }
}
