//! 16-entry color palettes
//!
//! A palette maps an 8-bit index onto 16 control points: the high nibble
//! picks the entry, the low nibble blends toward the next one (wrapping from
//! the last entry back to the first).

/// Build a palette from 16 hex colors (0xRRGGBB)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        $crate::palette::Palette16::new([
            $($crate::color::rgb_from_u32($color)),*
        ])
    };
}

pub(crate) use hex_palette;

mod blender;
pub mod presets;

pub use blender::{PaletteBlender, PaletteStore};

use crate::{
    color::{BLACK, Rgb, fill_gradient_rgb},
    math8::scale8,
};

/// Number of control points in a palette
pub const PALETTE_SIZE: usize = 16;

/// How neighbouring palette entries are combined on lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteBlend {
    /// Interpolate between the two nearest entries
    Linear,
    /// Snap to the entry selected by the high nibble
    Snap,
}

/// A gradient stop: `(index, r, g, b)`
pub type GradientStop = (u8, u8, u8, u8);

/// Palette of 16 control points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16 {
    entries: [Rgb; PALETTE_SIZE],
}

impl Default for Palette16 {
    fn default() -> Self {
        Self::solid(BLACK)
    }
}

impl Palette16 {
    /// Create a palette from explicit entries
    pub const fn new(entries: [Rgb; PALETTE_SIZE]) -> Self {
        Self { entries }
    }

    /// Palette with every entry set to `color`
    pub const fn solid(color: Rgb) -> Self {
        Self {
            entries: [color; PALETTE_SIZE],
        }
    }

    /// Four-color gradient spread over the 16 entries
    pub const fn gradient4(c1: Rgb, c2: Rgb, c3: Rgb, c4: Rgb) -> Self {
        let mut entries = [BLACK; PALETTE_SIZE];
        let one_third = PALETTE_SIZE / 3;
        let two_thirds = PALETTE_SIZE * 2 / 3;
        let last = PALETTE_SIZE - 1;
        fill_gradient_rgb(&mut entries, 0, c1, one_third, c2);
        fill_gradient_rgb(&mut entries, one_third, c2, two_thirds, c3);
        fill_gradient_rgb(&mut entries, two_thirds, c3, last, c4);
        Self { entries }
    }

    /// Decode a gradient stop list into 16 entries
    ///
    /// Stops must be sorted by index, start at 0 and end at 255. With fewer
    /// than 16 stops every stop is guaranteed its own entry, so sharp
    /// features are not lost to the 16-slot quantization.
    pub const fn from_gradient(stops: &[GradientStop]) -> Self {
        let mut entries = [BLACK; PALETTE_SIZE];
        if stops.is_empty() {
            return Self { entries };
        }

        let count = stops.len();
        let mut last_slot_used: Option<usize> = None;
        let mut start_index: usize = 0;
        let (_, r, g, b) = stops[0];
        let mut start_color = Rgb { r, g, b };

        let mut stop = 1;
        while start_index < 255 && stop < count {
            let (end_index, r, g, b) = stops[stop];
            let end_index = end_index as usize;
            let end_color = Rgb { r, g, b };

            let mut start_slot = start_index / 16;
            let mut end_slot = end_index / 16;
            if count < PALETTE_SIZE {
                if let Some(last) = last_slot_used {
                    if start_slot <= last && last < PALETTE_SIZE - 1 {
                        start_slot = last + 1;
                        if end_slot < start_slot {
                            end_slot = start_slot;
                        }
                    }
                }
                last_slot_used = Some(end_slot);
            }
            fill_gradient_rgb(&mut entries, start_slot, start_color, end_slot, end_color);

            start_index = end_index;
            start_color = end_color;
            stop += 1;
        }

        Self { entries }
    }

    /// Control points
    pub const fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }

    /// Mutable control points
    pub const fn entries_mut(&mut self) -> &mut [Rgb; PALETTE_SIZE] {
        &mut self.entries
    }

    /// Look up a color with linear blending at full brightness
    pub const fn color_at(&self, index: u8) -> Rgb {
        self.color(index, 255, PaletteBlend::Linear)
    }

    /// Look up a color
    ///
    /// `brightness` scales the result; 0 is black, 255 leaves it untouched.
    pub const fn color(&self, index: u8, brightness: u8, blend: PaletteBlend) -> Rgb {
        let hi4 = (index >> 4) as usize;
        let lo4 = index & 0x0F;

        let first = self.entries[hi4];
        let mut red = first.r;
        let mut green = first.g;
        let mut blue = first.b;

        if lo4 != 0 && matches!(blend, PaletteBlend::Linear) {
            let second = if hi4 == PALETTE_SIZE - 1 {
                self.entries[0]
            } else {
                self.entries[hi4 + 1]
            };
            let f2 = lo4 << 4;
            let f1 = 255 - f2;
            red = scale8(red, f1).wrapping_add(scale8(second.r, f2));
            green = scale8(green, f1).wrapping_add(scale8(second.g, f2));
            blue = scale8(blue, f1).wrapping_add(scale8(second.b, f2));
        }

        if brightness == 0 {
            return BLACK;
        }
        if brightness != 255 {
            // Rounding adjustment, matches the 8-bit video scale
            let brightness = brightness + 1;
            red = scale8(red, brightness);
            green = scale8(green, brightness);
            blue = scale8(blue, brightness);
        }

        Rgb {
            r: red,
            g: green,
            b: blue,
        }
    }
}

