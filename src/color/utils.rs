pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::{blend8, qadd8, scale8},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Blend `overlay` into `existing` in place
///
/// Zero leaves the pixel untouched, 255 replaces it. In between each channel
/// is `scale8(existing, 255 - amount) + scale8(overlay, amount)`, which can
/// land one below [`blend_colors`] since neither side rounds.
#[inline]
pub fn nblend(existing: &mut Rgb, overlay: Rgb, amount_of_overlay: u8) {
    match amount_of_overlay {
        0 => {}
        255 => *existing = overlay,
        amount => {
            let keep = 255 - amount;
            *existing = Rgb {
                r: qadd8(scale8(existing.r, keep), scale8(overlay.r, amount)),
                g: qadd8(scale8(existing.g, keep), scale8(overlay.g, amount)),
                b: qadd8(scale8(existing.b, keep), scale8(overlay.b, amount)),
            };
        }
    }
}

/// Channel-wise saturating add
#[inline]
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}

/// Scale every channel by `scale` (0-255 = 0.0-1.0)
#[inline]
pub const fn nscale8(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Fill the whole slice with one color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Dim every pixel by `fade_by`/256 of its current value
pub fn fade_to_black_by(leds: &mut [Rgb], fade_by: u8) {
    let keep = 255 - fade_by;
    for led in leds {
        *led = nscale8(*led, keep);
    }
}

/// Fill with a hue gradient starting at `initial_hue`
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hsv = Hsv {
        hue: initial_hue,
        sat: 240,
        val: 255,
    };
    for led in leds {
        *led = hsv2rgb(hsv);
        hsv.hue = hsv.hue.wrapping_add(delta_hue);
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
