#![no_std]

pub mod clock;
pub mod color;
pub mod command;
pub mod filter;
pub mod frame_scheduler;
pub mod input;
pub mod layout;
pub mod math8;
pub mod output;
pub mod palette;
pub mod pattern;
pub mod random;
pub mod renderer;
pub mod scheduler;

pub use clock::{AnimationState, Interval, WaveClock};
pub use command::{Command, CommandQueue};
pub use filter::{OutputConfig, OutputFilters, PowerBudget};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use input::{Button, ButtonInput, InputDispatcher, NoInput, ReleaseLatch};
pub use layout::FibonacciLayout;
pub use output::SmartLedsOutput;
pub use palette::{Palette16, PaletteBlend, PaletteBlender, PaletteStore};
pub use pattern::{FireConfig, PatternId, PatternLibrary};
pub use random::{Rand16, RandomSource};
pub use renderer::{ReelConfig, ReelTimings, Renderer};
pub use scheduler::{BRIGHTNESS_LEVELS, Direction, LevelStepper, PatternScheduler};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
