//! Animation clock
//!
//! Everything here is driven by the frame loop polling the wall clock.
//! Millisecond snapshots are kept as wrapping `u32` (and `u16` for the wave
//! accumulators), so counter overflow needs no special casing.

use embassy_time::{Duration, Instant};

/// Milliseconds since start, truncated to the wrapping 32-bit clock
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn millis32(now: Instant) -> u32 {
    now.as_millis() as u32
}

/// Periodic trigger polled once per frame
///
/// Fires when at least `period` has elapsed since the last fire and re-arms
/// at the time it was polled, so granularity is bounded by the frame rate.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: u32,
    last: u32,
}

impl Interval {
    /// Create a trigger armed at `now`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(period: Duration, now: Instant) -> Self {
        Self {
            period: period.as_millis() as u32,
            last: millis32(now),
        }
    }

    /// Check the trigger, re-arming it when it fires
    pub fn ready(&mut self, now: Instant) -> bool {
        let now = millis32(now);
        if now.wrapping_sub(self.last) >= self.period {
            self.last = now;
            return true;
        }
        false
    }

    /// Trigger period in milliseconds
    pub const fn period_ms(&self) -> u32 {
        self.period
    }
}

/// Triggers that fired during one [`AnimationState::poll`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTick {
    /// Time to pick the next target palette
    pub rotate_palette: bool,
    /// Time to step the palette blend
    pub blend_palette: bool,
}

/// Global hue and the palette timers
#[derive(Debug, Clone)]
pub struct AnimationState {
    hue: u8,
    rotation: Interval,
    blend: Interval,
}

impl AnimationState {
    /// Arm both palette triggers at `now`
    pub const fn new(palette_rotation: Duration, palette_blend: Duration, now: Instant) -> Self {
        Self {
            hue: 0,
            rotation: Interval::new(palette_rotation, now),
            blend: Interval::new(palette_blend, now),
        }
    }

    /// Rotating base hue shared by the patterns
    pub const fn hue(&self) -> u8 {
        self.hue
    }

    /// Evaluate the timers; the hue advances on every blend tick
    pub fn poll(&mut self, now: Instant) -> ClockTick {
        let tick = ClockTick {
            rotate_palette: self.rotation.ready(now),
            blend_palette: self.blend.ready(now),
        };
        if tick.blend_palette {
            self.hue = self.hue.wrapping_add(1);
        }
        tick
    }
}

/// Phase handed to a wave renderer for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavePhase {
    /// Hue accumulator as it was before this frame's advance
    pub hue16: u16,
    /// Brightness phase of the first pixel
    pub brightness_theta16: u16,
}

/// Pseudotime and hue accumulators of the full-field wave patterns
///
/// Both advance by `elapsed * rate`, where the rates are themselves
/// oscillating, which gives the motion its uneven organic speed.
#[derive(Debug, Clone, Default)]
pub struct WaveClock {
    pseudotime: u16,
    last_millis: u16,
    hue16: u16,
}

impl WaveClock {
    /// Start with every accumulator at zero
    pub const fn new() -> Self {
        Self {
            pseudotime: 0,
            last_millis: 0,
            hue16: 0,
        }
    }

    /// Advance the accumulators to `now_ms`
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, now_ms: u32, ms_multiplier: u16, hue_rate: u16) -> WavePhase {
        let hue16 = self.hue16;

        let ms = now_ms as u16;
        let delta = ms.wrapping_sub(self.last_millis);
        self.last_millis = ms;
        self.pseudotime = self
            .pseudotime
            .wrapping_add(delta.wrapping_mul(ms_multiplier));
        self.hue16 = self.hue16.wrapping_add(delta.wrapping_mul(hue_rate));

        WavePhase {
            hue16,
            brightness_theta16: self.pseudotime,
        }
    }

    /// Phase accumulator driving the brightness wave
    pub const fn pseudotime(&self) -> u16 {
        self.pseudotime
    }

    /// Base hue in 8.8 fixed point
    pub const fn hue16(&self) -> u16 {
        self.hue16
    }
}
