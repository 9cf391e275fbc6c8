//! Power budget limiter
//!
//! Estimates the draw of a frame from per-channel consumption figures and
//! lowers the global brightness until the estimate fits the supply.

use crate::color::Rgb;

/// Draw of one fully lit red channel
const RED_MW: u32 = 16 * 5;
/// Draw of one fully lit green channel
const GREEN_MW: u32 = 11 * 5;
/// Draw of one fully lit blue channel
const BLUE_MW: u32 = 15 * 5;
/// Idle draw of one dark LED
const DARK_MW: u32 = 5;

/// Supply limits of the power source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerBudget {
    pub volts: u8,
    pub milliamps: u32,
}

impl Default for PowerBudget {
    fn default() -> Self {
        Self {
            volts: 5,
            milliamps: 2000,
        }
    }
}

impl PowerBudget {
    /// Budget in milliwatts
    pub const fn max_milliwatts(self) -> u32 {
        self.volts as u32 * self.milliamps
    }

    /// Highest brightness up to `brightness` that keeps `frame` within budget
    #[allow(clippy::cast_possible_truncation)]
    pub fn limit_brightness(self, frame: &[Rgb], brightness: u8) -> u8 {
        let total = unscaled_milliwatts(frame);
        let requested = (u64::from(total) * u64::from(brightness)) / 256;
        let max = u64::from(self.max_milliwatts());
        if requested <= max {
            return brightness;
        }
        ((u64::from(brightness) * max) / requested) as u8
    }
}

/// Estimated draw of `frame` at full brightness
pub fn unscaled_milliwatts(frame: &[Rgb]) -> u32 {
    let (mut red, mut green, mut blue) = (0u32, 0u32, 0u32);
    for pixel in frame {
        red += u32::from(pixel.r);
        green += u32::from(pixel.g);
        blue += u32::from(pixel.b);
    }
    let lit = (red * RED_MW + green * GREEN_MW + blue * BLUE_MW) >> 8;
    #[allow(clippy::cast_possible_truncation)]
    let dark = DARK_MW * frame.len() as u32;
    lit + dark
}
