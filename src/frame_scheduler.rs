//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::color::{BLACK, Rgb};
use crate::filter::{OutputConfig, OutputFilters};
use crate::input::ButtonInput;
use crate::random::RandomSource;
use crate::{OutputDriver, Renderer};

/// Default target frame rate (120 FPS).
pub const DEFAULT_FPS: u32 = 120;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Brightness sent to the strip after power limiting.
    pub brightness: u8,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Calls the renderer, the output filters and the output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let renderer = Renderer::<_, 64>::new(&ReelConfig::default(), Rand16::default(), now);
/// let mut scheduler = FrameScheduler::new(renderer, driver, &OutputConfig::default());
///
/// loop {
///     let now = Instant::now();
///     let result = scheduler.tick(now, hardware_random(), &mut &BUTTONS);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, R: RandomSource, const N: usize> {
    output: O,
    renderer: Renderer<R, N>,
    filters: OutputFilters,
    output_buffer: [Rgb; N],
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O: OutputDriver, R: RandomSource, const N: usize> FrameScheduler<O, R, N> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (120 FPS) for frame timing.
    pub fn new(renderer: Renderer<R, N>, driver: O, config: &OutputConfig) -> Self {
        Self::with_frame_duration(renderer, driver, config, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: Renderer<R, N>,
        driver: O,
        config: &OutputConfig,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            filters: OutputFilters::new(config),
            output_buffer: [BLACK; N],
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame
    /// 3. Filters a copy of it and writes that to the output driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick<I: ButtonInput>(&mut self, now: Instant, entropy: u16, input: &mut I) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        let max_drift = Duration::from_millis(max_drift_ms);
        if now.as_millis() > self.next_frame.as_millis() + max_drift.as_millis() {
            self.next_frame = now;
        }

        // Render and output
        self.renderer.render(now, entropy, input);
        let brightness = self.filters.apply(
            self.renderer.frame(),
            self.renderer.brightness(),
            &mut self.output_buffer,
        );
        self.output.write(&self.output_buffer);

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            brightness,
        }
    }

    /// Last frame as written to the output driver
    pub const fn output_frame(&self) -> &[Rgb; N] {
        &self.output_buffer
    }

    /// Get a reference to the output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Get a reference to the renderer.
    pub const fn renderer(&self) -> &Renderer<R, N> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub const fn renderer_mut(&mut self) -> &mut Renderer<R, N> {
        &mut self.renderer
    }
}
