//! 8- and 16-bit fixed-point helpers.
//!
//! Saturating operations clamp to `0..=255`, modular ones wrap. Oscillators
//! take the millisecond clock explicitly and wrap with 32-bit overflow.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale a 16-bit value by a 16-bit factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Add two values, clamping at 255
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Subtract `b` from `a`, clamping at 0
#[inline]
pub const fn qsub8(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Add with 8-bit wrap, then reduce modulo `m`
///
/// `m` must be non-zero.
#[inline]
pub const fn addmod8(a: u8, b: u8, m: u8) -> u8 {
    a.wrapping_add(b) % m
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Fast 8-bit sine approximation
///
/// A full turn is `0..=255`; output is centered on 128.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn sin8(theta: u8) -> u8 {
    // Interleaved (base, slope * 16) per quarter-wave section
    const B_M16: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F;

    let mut secoffset = offset & 0x0F;
    if theta & 0x40 != 0 {
        secoffset += 1;
    }

    let section = (offset >> 4) as usize * 2;
    let b = B_M16[section];
    let m16 = B_M16[section + 1];

    let mx = ((m16 as u16 * secoffset as u16) >> 4) as u8;
    let mut y = (mx + b) as i8;
    if theta & 0x80 != 0 {
        y = -y;
    }
    (y as i16 + 128) as u8
}

/// Fast 16-bit sine approximation
///
/// A full turn is `0..=65535`; output is in `-32645..=32645`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn sin16(theta: u16) -> i16 {
    const BASE: [u16; 8] = [0, 6393, 12539, 18204, 23170, 27245, 30273, 32137];
    const SLOPE: [u8; 8] = [49, 48, 44, 38, 31, 23, 14, 4];

    let mut offset = (theta & 0x3FFF) >> 3; // 0..2047
    if theta & 0x4000 != 0 {
        offset = 2047 - offset;
    }

    let section = (offset / 256) as usize;
    let b = BASE[section];
    let m = SLOPE[section] as u16;

    let secoffset8 = (offset as u8) / 2;
    let mx = m * secoffset8 as u16;

    let y = (mx + b) as i16;
    if theta & 0x8000 != 0 { -y } else { y }
}

/// Sawtooth from 0 to 65535 at the given tempo
///
/// `bpm88` is beats per minute in 8.8 fixed point.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn beat88(bpm88: u16, now_ms: u32) -> u16 {
    (now_ms.wrapping_mul(bpm88 as u32).wrapping_mul(280) >> 16) as u16
}

/// Sawtooth from 0 to 65535; `bpm` below 256 is whole beats per minute
#[inline]
pub const fn beat16(bpm: u16, now_ms: u32) -> u16 {
    let bpm88 = if bpm < 256 { bpm << 8 } else { bpm };
    beat88(bpm88, now_ms)
}

/// Sawtooth from 0 to 255; `bpm` below 256 is whole beats per minute
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn beat8(bpm: u16, now_ms: u32) -> u8 {
    (beat16(bpm, now_ms) >> 8) as u8
}

/// Sine oscillator over `lowest..=highest` at a tempo in 8.8 fixed point
#[inline]
#[allow(clippy::cast_sign_loss)]
pub const fn beatsin88(bpm88: u16, lowest: u16, highest: u16, now_ms: u32) -> u16 {
    let beat = beat88(bpm88, now_ms);
    let beatsin = (sin16(beat) as u16).wrapping_add(32768);
    let range = highest.wrapping_sub(lowest);
    lowest.wrapping_add(scale16(beatsin, range))
}

/// Sine oscillator over `lowest..=highest`
#[inline]
#[allow(clippy::cast_sign_loss)]
pub const fn beatsin16(bpm: u16, lowest: u16, highest: u16, now_ms: u32) -> u16 {
    let beat = beat16(bpm, now_ms);
    let beatsin = (sin16(beat) as u16).wrapping_add(32768);
    let range = highest.wrapping_sub(lowest);
    lowest.wrapping_add(scale16(beatsin, range))
}

/// 8-bit sine oscillator over `lowest..=highest`
#[inline]
pub const fn beatsin8(bpm: u16, lowest: u8, highest: u8, now_ms: u32) -> u8 {
    let beat = beat8(bpm, now_ms);
    let range = highest.wrapping_sub(lowest);
    lowest.wrapping_add(scale8(sin8(beat), range))
}
