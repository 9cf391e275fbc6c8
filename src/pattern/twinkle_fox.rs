//! Twinkling "holiday" lights that fade in and out
//!
//! No per-pixel state is stored: every pixel derives its own clock offset,
//! speed and color salt from a fixed-seed sequence that is replayed each
//! frame, so the same pixel always twinkles the same way.

use super::{Pattern, RenderContext};
use crate::{
    color::{BLACK, Rgb},
    math8::{qsub8, sin8},
    palette::{Palette16, PaletteBlend},
    random::RandomSource,
};

/// Overall twinkle speed, 0 (very slow) to 8 (very fast)
const TWINKLE_SPEED: u8 = 4;
/// Overall twinkle density, 0 (none lit) to 8 (all lit)
const TWINKLE_DENSITY: u8 = 5;

const PRNG_SEED: u16 = 11337;
const PRNG_MULTIPLIER: u16 = 2053;
const PRNG_INCREMENT: u16 = 1384;

#[derive(Debug, Clone)]
pub struct TwinkleFox<'a> {
    palette: &'a Palette16,
}

impl<'a> TwinkleFox<'a> {
    pub const fn new(palette: &'a Palette16) -> Self {
        Self { palette }
    }

    /// Color of one twinkle at its own clock `ms`
    #[allow(clippy::cast_possible_truncation)]
    fn twinkle(&self, ms: u32, salt: u8) -> Rgb {
        let ticks = (ms >> (8 - TWINKLE_SPEED)) as u16;
        let fast_cycle = ticks as u8;
        let mut slow_cycle16 = (ticks >> 8).wrapping_add(u16::from(salt));
        slow_cycle16 = slow_cycle16.wrapping_add(u16::from(sin8(slow_cycle16 as u8)));
        slow_cycle16 = slow_cycle16
            .wrapping_mul(PRNG_MULTIPLIER)
            .wrapping_add(PRNG_INCREMENT);
        let slow_cycle = (slow_cycle16 as u8).wrapping_add((slow_cycle16 >> 8) as u8);

        let brightness = if (slow_cycle & 0x0E) / 2 < TWINKLE_DENSITY {
            attack_decay_wave8(fast_cycle)
        } else {
            0
        };
        if brightness == 0 {
            return BLACK;
        }

        let hue = slow_cycle.wrapping_sub(salt);
        let color = self.palette.color(hue, brightness, PaletteBlend::Snap);
        cool_like_incandescent(color, fast_cycle)
    }
}

impl<const N: usize> Pattern<N> for TwinkleFox<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        let mut prng = PRNG_SEED;
        let mut next = || {
            prng = prng.wrapping_mul(PRNG_MULTIPLIER).wrapping_add(PRNG_INCREMENT);
            prng
        };

        for led in leds.iter_mut() {
            let clock_offset = next();
            let salt_source = next();
            // Speed multiplier in eighths, 8/8 to 23/8
            let speed_q5_3 =
                ((((salt_source & 0xFF) >> 4) + (salt_source & 0x0F)) & 0x0F) + 0x08;
            let clock = (ctx.now_ms.wrapping_mul(u32::from(speed_q5_3)) >> 3)
                .wrapping_add(u32::from(clock_offset));
            let salt = (salt_source >> 8) as u8;

            // Black background: lit twinkles always win
            *led = self.twinkle(clock, salt);
        }
    }
}

/// Fast attack, slower decay envelope over one 8-bit cycle
const fn attack_decay_wave8(i: u8) -> u8 {
    if i < 86 {
        i * 3
    } else {
        let i = i - 86;
        255 - (i + i / 2)
    }
}

/// Drain green, then blue, during the decay half like a cooling filament
const fn cool_like_incandescent(color: Rgb, phase: u8) -> Rgb {
    if phase < 128 {
        return color;
    }
    let cooling = (phase - 128) >> 4;
    Rgb {
        r: color.r,
        g: qsub8(color.g, cooling),
        b: qsub8(color.b, cooling * 2),
    }
}

#[cfg(test)]
mod tests {
    use super::{attack_decay_wave8, cool_like_incandescent};
    use crate::color::Rgb;

    #[test]
    fn envelope_peaks_then_decays() {
        assert_eq!(attack_decay_wave8(0), 0);
        assert_eq!(attack_decay_wave8(85), 255);
        assert_eq!(attack_decay_wave8(86), 255);
        assert_eq!(attack_decay_wave8(255), 2);
    }

    #[test]
    fn cooling_only_in_decay_half() {
        let white = Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        assert_eq!(cool_like_incandescent(white, 100), white);
        let cooled = cool_like_incandescent(white, 255);
        assert_eq!((cooled.r, cooled.g, cooled.b), (255, 248, 241));
    }
}
