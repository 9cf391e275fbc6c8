//! Output-side post-processing
//!
//! Filters run on a copy of the frame right before it is handed to the
//! output driver. The pixel buffer the patterns draw into is never touched,
//! so patterns that blend with the previous frame keep their full-range
//! history.

use crate::color::Rgb;

mod color_correction;
mod power;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}

pub use color_correction::{ColorCorrection, TYPICAL_SMD5050, UNCORRECTED};
pub use power::{PowerBudget, unscaled_milliwatts};

#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Color correction
    pub color_correction: Rgb,
    /// Power supply limits
    pub power: PowerBudget,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color_correction: TYPICAL_SMD5050,
            power: PowerBudget::default(),
        }
    }
}

/// Filter processor - applies post-processing to frames
///
/// The power limiter picks the brightness first, then color correction
/// scaled by that brightness is applied per channel.
#[derive(Debug, Clone)]
pub struct OutputFilters {
    color_correction: ColorCorrection,
    power: PowerBudget,
}

impl OutputFilters {
    pub const fn new(config: &OutputConfig) -> Self {
        Self {
            color_correction: ColorCorrection::new(config.color_correction),
            power: config.power,
        }
    }

    /// Write the filtered `frame` into `out`
    ///
    /// Returns the brightness actually applied after power limiting.
    pub fn apply<const N: usize>(&self, frame: &[Rgb; N], brightness: u8, out: &mut [Rgb; N]) -> u8 {
        let brightness = self.power.limit_brightness(frame, brightness);
        out.copy_from_slice(frame);
        // 255 brightness with no correction leaves the copy untouched
        self.color_correction.scaled(brightness).apply(out);
        brightness
    }
}
