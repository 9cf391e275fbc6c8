//! Color correction
//!
//! Per-channel multiplicative scaling for the LED package's white balance.
//! The factors are combined with the global brightness so a single
//! `scale8` per channel does both.

use crate::color::Rgb;
use crate::math8::scale8;

use super::Filter;

/// Correction for typical SMD5050 packages
pub const TYPICAL_SMD5050: Rgb = Rgb {
    r: 0xFF,
    g: 0xB0,
    b: 0xF0,
};

/// No correction
pub const UNCORRECTED: Rgb = Rgb {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
};

/// Color correction filter
///
/// Applies per-channel multiplicative scaling to correct color output.
#[derive(Debug, Clone, Copy)]
pub struct ColorCorrection {
    /// Correction factors for each channel (0-255 = 0%-100%)
    factors: Rgb,
}

impl ColorCorrection {
    /// Create a new color correction from color
    pub const fn new(factors: Rgb) -> Self {
        Self { factors }
    }

    /// Combined channel factors at `brightness`
    ///
    /// Zero brightness gives all-zero factors.
    pub const fn scaled(self, brightness: u8) -> Self {
        if brightness == 0 {
            return Self::new(Rgb { r: 0, g: 0, b: 0 });
        }
        Self::new(Rgb {
            r: scale8(self.factors.r, brightness),
            g: scale8(self.factors.g, brightness),
            b: scale8(self.factors.b, brightness),
        })
    }

    pub const fn factors(self) -> Rgb {
        self.factors
    }

    /// Check if correction is active
    pub const fn is_active(self) -> bool {
        self.factors.r != 255 || self.factors.g != 255 || self.factors.b != 255
    }
}

impl Filter for ColorCorrection {
    fn apply(&self, frame: &mut [Rgb]) {
        if !self.is_active() {
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, self.factors.r);
            pixel.g = scale8(pixel.g, self.factors.g);
            pixel.b = scale8(pixel.b, self.factors.b);
        }
    }
}
