use crate::color::Rgb;

/// Fill `leds[start_pos..=end_pos]` with a linear RGB gradient
///
/// Channels are stepped in 8.8 fixed point, so the end color is reached
/// within one step of truncation. Positions past the end of `leds` are ignored.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub const fn fill_gradient_rgb(
    leds: &mut [Rgb],
    start_pos: usize,
    start_color: Rgb,
    end_pos: usize,
    end_color: Rgb,
) {
    if leds.is_empty() {
        return;
    }

    // Ensure proper ordering
    let (start_pos, end_pos, start_color, end_color) = if end_pos < start_pos {
        (end_pos, start_pos, end_color, start_color)
    } else {
        (start_pos, end_pos, start_color, end_color)
    };

    // Distances in 8.7 fixed point
    let r_distance87 = (end_color.r as i16 - start_color.r as i16) << 7;
    let g_distance87 = (end_color.g as i16 - start_color.g as i16) << 7;
    let b_distance87 = (end_color.b as i16 - start_color.b as i16) << 7;

    let pixel_distance = end_pos - start_pos;
    let divisor = if pixel_distance == 0 {
        1
    } else {
        pixel_distance as i16
    };

    // Per-pixel deltas in 8.8, wrapping like the u16 accumulators below
    let r_delta88 = (r_distance87 / divisor).wrapping_mul(2);
    let g_delta88 = (g_distance87 / divisor).wrapping_mul(2);
    let b_delta88 = (b_distance87 / divisor).wrapping_mul(2);

    let mut r88 = (start_color.r as u16) << 8;
    let mut g88 = (start_color.g as u16) << 8;
    let mut b88 = (start_color.b as u16) << 8;

    let mut i = start_pos;
    while i <= end_pos && i < leds.len() {
        leds[i] = Rgb {
            r: (r88 >> 8) as u8,
            g: (g88 >> 8) as u8,
            b: (b88 >> 8) as u8,
        };
        r88 = r88.wrapping_add(r_delta88 as u16);
        g88 = g88.wrapping_add(g_delta88 as u16);
        b88 = b88.wrapping_add(b_delta88 as u16);
        i += 1;
    }
}
