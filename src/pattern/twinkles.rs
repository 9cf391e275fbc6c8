//! Color twinkles
//!
//! Pixels are seeded dim from a palette, brighten until one channel
//! saturates, then fade back to black. Each pixel carries a single
//! direction flag between frames.

use super::{Pattern, RenderContext, pixel_span};
use crate::{
    clock::Interval,
    color::{BLACK, Rgb, add_colors, nscale8},
    palette::{Palette16, PaletteBlend},
    random::RandomSource,
};

use embassy_time::{Duration, Instant};

const STEP_PERIOD: Duration = Duration::from_millis(30);
const STARTING_BRIGHTNESS: u8 = 64;
const FADE_IN_SPEED: u8 = 32;
const FADE_OUT_SPEED: u8 = 20;
const DENSITY: u8 = 255;

/// Twinkle direction flags and step timer
#[derive(Debug, Clone)]
pub struct TwinkleField<const N: usize> {
    brightening: [bool; N],
    step: Interval,
}

impl<const N: usize> TwinkleField<N> {
    /// Create the field with its step timer armed at `now`
    pub const fn new(now: Instant) -> Self {
        Self {
            brightening: [false; N],
            step: Interval::new(STEP_PERIOD, now),
        }
    }

    /// Whether pixel `index` is currently getting brighter
    pub const fn is_brightening(&self, index: usize) -> bool {
        self.brightening[index]
    }

    fn brighten_or_darken(&mut self, leds: &mut [Rgb; N]) {
        for (led, brightening) in leds.iter_mut().zip(self.brightening.iter_mut()) {
            if *brightening {
                *led = make_brighter(*led, FADE_IN_SPEED);
                if led.r == 255 || led.g == 255 || led.b == 255 {
                    *brightening = false;
                }
            } else {
                *led = make_darker(*led, FADE_OUT_SPEED);
            }
        }
    }
}

/// Color twinkles drawn from a fixed palette
pub struct ColorTwinkles<'a, const N: usize> {
    field: &'a mut TwinkleField<N>,
    palette: &'a Palette16,
}

impl<'a, const N: usize> ColorTwinkles<'a, N> {
    pub const fn new(field: &'a mut TwinkleField<N>, palette: &'a Palette16) -> Self {
        Self { field, palette }
    }
}

impl<const N: usize> Pattern<N> for ColorTwinkles<'_, N> {
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        if N == 0 || !self.field.step.ready(Instant::from_millis(u64::from(ctx.now_ms))) {
            return;
        }
        self.field.brighten_or_darken(leds);

        if ctx.rng.random8() < DENSITY {
            let pos = ctx.rng.random16_below(pixel_span::<N>()) as usize;
            if leds[pos] == BLACK {
                let index = ctx.rng.random8();
                leds[pos] = self
                    .palette
                    .color(index, STARTING_BRIGHTNESS, PaletteBlend::Snap);
                self.field.brightening[pos] = true;
            }
        }
    }
}

#[inline]
fn make_brighter(color: Rgb, amount: u8) -> Rgb {
    add_colors(color, nscale8(color, amount))
}

#[inline]
fn make_darker(color: Rgb, amount: u8) -> Rgb {
    nscale8(color, 255 - amount)
}
