//! Oscillators shared by the full-field wave patterns

use crate::{
    clock::{WaveClock, WavePhase},
    layout::FibonacciLayout,
    math8::{beatsin88, sin16},
};

/// Order in which a wave is laid over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelOrder {
    /// Strip order
    Natural,
    /// Center-outward spiral order
    Fibonacci,
}

impl PixelOrder {
    /// Physical pixel for the `index`-th wave sample, mirrored end to start
    pub(crate) const fn pixel<const N: usize>(
        self,
        index: usize,
        layout: &FibonacciLayout<N>,
    ) -> usize {
        let pixel = match self {
            Self::Natural => index,
            Self::Fibonacci => layout.to_physical(index),
        };
        N - 1 - pixel
    }
}

/// Per-frame oscillator sample driving a wave
#[derive(Debug, Clone, Copy)]
pub(crate) struct WaveFrame {
    pub phase: WavePhase,
    pub bright_depth: u8,
    pub brightness_theta_inc16: u16,
    pub hue_inc16: u16,
}

impl WaveFrame {
    /// Sample the oscillators and advance `clock` to `now_ms`
    ///
    /// `hue_inc` is the `(lowest, highest)` range of the per-pixel hue step.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn sample(clock: &mut WaveClock, now_ms: u32, hue_inc: (u16, u16)) -> Self {
        let bright_depth = beatsin88(341, 96, 224, now_ms) as u8;
        let brightness_theta_inc16 = beatsin88(203, 25 * 256, 40 * 256, now_ms);
        let ms_multiplier = beatsin88(147, 23, 60, now_ms);
        let hue_inc16 = beatsin88(113, hue_inc.0, hue_inc.1, now_ms);
        let hue_rate = beatsin88(400, 5, 9, now_ms);

        let phase = clock.advance(now_ms, ms_multiplier, hue_rate);
        Self {
            phase,
            bright_depth,
            brightness_theta_inc16,
            hue_inc16,
        }
    }
}

/// Squared sine brightness at `theta16`, compressed into the top
/// `depth` of the 8-bit range
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn wave_brightness(theta16: u16, depth: u8) -> u8 {
    let b16 = (sin16(theta16) as u16).wrapping_add(32768) as u32;
    let bri16 = (b16 * b16) / 65536;
    let bri8 = ((bri16 * depth as u32) / 65536) as u8;
    bri8 + (255 - depth)
}
