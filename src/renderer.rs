use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::{AnimationState, millis32};
use crate::color::{BLACK, Rgb};
use crate::command::{Command, CommandQueue};
use crate::input::{ButtonInput, InputDispatcher};
use crate::layout::FibonacciLayout;
use crate::palette::presets::{BasePalette, GRADIENTS};
use crate::palette::{Palette16, PaletteBlender, PaletteStore};
use crate::pattern::{FireConfig, PatternId, PatternLibrary, RenderContext};
use crate::random::RandomSource;
use crate::scheduler::{BRIGHTNESS_LEVEL_COUNT, LevelStepper, PatternScheduler};

/// Capacity of the pending command queue
const COMMAND_QUEUE_SIZE: usize = 8;

/// Periods of the time-driven triggers
#[derive(Debug, Clone, Copy)]
pub struct ReelTimings {
    /// How often a new target palette is picked
    pub palette_rotation: Duration,
    /// How often the live palette steps toward the target
    pub palette_blend: Duration,
    /// How long each pattern plays while autoplay is on
    pub autoplay: Duration,
}

impl Default for ReelTimings {
    fn default() -> Self {
        Self {
            palette_rotation: Duration::from_secs(10),
            palette_blend: Duration::from_millis(40),
            autoplay: Duration::from_secs(10),
        }
    }
}

/// Configuration for the reel
#[derive(Debug, Clone)]
pub struct ReelConfig {
    pub timings: ReelTimings,
    /// Fraction of the remaining distance covered per blend step (x/256)
    pub palette_blend_step: u8,
    pub fire: FireConfig,
    /// Oscillator tempo in beats per minute
    pub speed: u8,
    pub autoplay: bool,
    /// Pattern shown at startup
    pub pattern: PatternId,
    /// Index into the brightness levels at startup
    pub brightness_index: u8,
    /// Fixed palette used by the sweep and speckle patterns
    pub base_palette: BasePalette,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            timings: ReelTimings::default(),
            palette_blend_step: 8,
            fire: FireConfig::default(),
            speed: 30,
            autoplay: true,
            pattern: PatternId::default(),
            brightness_index: 0,
            base_palette: BasePalette::default(),
        }
    }
}

/// Frame loop core - everything between the wall clock and the pixel buffer
///
/// One call to [`Renderer::render`] is one frame. All state is owned here
/// and mutated only from that call.
pub struct Renderer<R: RandomSource, const N: usize> {
    // Configuration
    palette_blend_step: u8,
    speed: u8,
    fire: FireConfig,
    base_palette: &'static Palette16,

    // Internal state
    power: bool,
    animation: AnimationState,
    palettes: PaletteBlender,
    scheduler: PatternScheduler,
    brightness: LevelStepper<BRIGHTNESS_LEVEL_COUNT>,
    commands: CommandQueue<COMMAND_QUEUE_SIZE>,
    frame_buffer: [Rgb; N],

    // Internal dependencies
    patterns: PatternLibrary<N>,
    layout: FibonacciLayout<N>,
    rng: R,
}

impl<R: RandomSource, const N: usize> Renderer<R, N> {
    /// Create the renderer, starting all timers at `now`
    pub fn new(config: &ReelConfig, rng: R, now: Instant) -> Self {
        let timings = config.timings;
        Self {
            palette_blend_step: config.palette_blend_step,
            speed: config.speed,
            fire: config.fire,
            base_palette: config.base_palette.palette(),
            power: true,
            animation: AnimationState::new(timings.palette_rotation, timings.palette_blend, now),
            palettes: PaletteBlender::new(PaletteStore::new(&GRADIENTS)),
            scheduler: PatternScheduler::new(config.pattern, config.autoplay, timings.autoplay, now),
            brightness: LevelStepper::brightness(config.brightness_index),
            commands: CommandQueue::new(),
            frame_buffer: [BLACK; N],
            patterns: PatternLibrary::new(now),
            layout: FibonacciLayout::new(),
            rng,
        }
    }

    /// Process one frame
    ///
    /// Feeds `entropy` to the randomness source, handles input and queued
    /// commands, advances palettes and autoplay, then renders the active
    /// pattern. While powered off the frame is black and nothing advances.
    pub fn render<I: ButtonInput>(&mut self, now: Instant, entropy: u16, input: &mut I) -> &[Rgb; N] {
        self.rng.add_entropy(entropy);

        InputDispatcher::dispatch(input, &mut self.commands);
        self.process_commands();

        if !self.power {
            self.frame_buffer.fill(BLACK);
            return &self.frame_buffer;
        }

        let tick = self.animation.poll(now);
        if tick.rotate_palette {
            self.palettes.select_next_target();
        }
        if tick.blend_palette {
            self.palettes.blend_toward_target(self.palette_blend_step);
        }

        self.scheduler.tick(now);

        let mut ctx = RenderContext {
            now_ms: millis32(now),
            hue: self.animation.hue(),
            speed: self.speed,
            fire: self.fire,
            palette: self.palettes.current(),
            base_palette: self.base_palette,
            layout: &self.layout,
            rng: &mut self.rng,
        };
        self.patterns
            .render(self.scheduler.current(), &mut ctx, &mut self.frame_buffer);

        &self.frame_buffer
    }

    /// Queue a command for the next frame
    ///
    /// Returns the command if the queue is full
    pub fn push_command(&mut self, command: Command) -> Result<(), Command> {
        self.commands.push(command)
    }

    /// Last rendered frame
    pub const fn frame(&self) -> &[Rgb; N] {
        &self.frame_buffer
    }

    /// Active pattern
    pub const fn pattern(&self) -> PatternId {
        self.scheduler.current()
    }

    /// Current global brightness level
    pub const fn brightness(&self) -> u8 {
        self.brightness.level()
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    /// Switch the output on or off immediately
    pub fn set_power(&mut self, on: bool) {
        if self.power != on {
            #[cfg(feature = "esp32-log")]
            println!("[Renderer] power: {}", if on { "on" } else { "off" });
            self.power = on;
        }
    }

    pub const fn scheduler(&self) -> &PatternScheduler {
        &self.scheduler
    }

    pub const fn palettes(&self) -> &PaletteBlender {
        &self.palettes
    }

    pub const fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub const fn layout(&self) -> &FibonacciLayout<N> {
        &self.layout
    }

    pub const fn patterns(&self) -> &PatternLibrary<N> {
        &self.patterns
    }

    /// Apply every queued command in order
    fn process_commands(&mut self) {
        while let Some(command) = self.commands.pop() {
            match command {
                Command::AdvancePattern(direction) => {
                    self.scheduler.advance(direction);
                }
                Command::AdvanceBrightness(direction) => {
                    self.brightness.advance(direction);
                }
                Command::DisableAutoplay => self.scheduler.disable_autoplay(),
                Command::SetPower(on) => self.set_power(on),
            }
        }
    }
}
