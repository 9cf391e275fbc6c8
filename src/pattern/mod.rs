//! Pattern library with compile-time known pattern variants
//!
//! Every pattern fills the whole buffer once per frame. State that must
//! survive between frames (heat cells, wave accumulators, twinkle
//! directions) lives in [`PatternLibrary`] and is created once at startup;
//! parameterized patterns borrow it for the duration of a single call.

mod bpm;
mod color_waves;
mod confetti;
mod fire;
mod juggle;
mod map;
mod pride;
mod rainbow;
mod sinelon;
mod twinkle_fox;
mod twinkles;
mod wave;

pub use bpm::Bpm;
pub use color_waves::ColorWaves;
pub use confetti::Confetti;
pub use fire::{FireConfig, HeatDirection, HeatField, HeatMap};
pub use juggle::Juggle;
pub use map::{MapCoord, MapSource, PaletteMap};
pub use pride::Pride;
pub use rainbow::{Rainbow, RainbowVariant};
pub use sinelon::Sinelon;
pub use twinkle_fox::TwinkleFox;
pub use twinkles::{ColorTwinkles, TwinkleField};
pub use wave::PixelOrder;

use embassy_time::Instant;

use crate::{
    clock::WaveClock,
    color::Rgb,
    layout::FibonacciLayout,
    palette::{Palette16, presets},
    random::RandomSource,
};

/// Everything a pattern may read while rendering one frame
pub struct RenderContext<'a, R: RandomSource, const N: usize> {
    /// Wall clock in wrapping milliseconds
    pub now_ms: u32,
    /// Rotating base hue
    pub hue: u8,
    /// Oscillator tempo in beats per minute
    pub speed: u8,
    /// Heat simulation tuning
    pub fire: FireConfig,
    /// Cross-faded palette from the palette blender
    pub palette: &'a Palette16,
    /// Fixed palette picked in the configuration
    pub base_palette: &'a Palette16,
    /// Board geometry
    pub layout: &'a FibonacciLayout<N>,
    /// Randomness source, entropy is fed by the frame loop
    pub rng: &'a mut R,
}

pub trait Pattern<const N: usize> {
    /// Render a single frame
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]);
}

/// Known patterns, in playlist order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatternId {
    PrideFibonacci = 0,
    ColorWavesFibonacci,
    AnglePalette,
    RadiusPalette,
    XPalette,
    YPalette,
    XyPalette,
    AngleGradientPalette,
    RadiusGradientPalette,
    XGradientPalette,
    YGradientPalette,
    XyGradientPalette,
    RainbowTwinkles,
    SnowTwinkles,
    CloudTwinkles,
    IncandescentTwinkles,
    RetroC9Twinkles,
    RedWhiteTwinkles,
    BlueWhiteTwinkles,
    RedGreenWhiteTwinkles,
    FairyLightTwinkles,
    Snow2Twinkles,
    HollyTwinkles,
    IceTwinkles,
    PartyTwinkles,
    ForestTwinkles,
    LavaTwinkles,
    FireTwinkles,
    Cloud2Twinkles,
    OceanTwinkles,
    Rainbow,
    RainbowWithGlitter,
    RainbowSolid,
    Confetti,
    Sinelon,
    Bpm,
    Juggle,
    Fire,
    Water,
}

impl Default for PatternId {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl PatternId {
    /// Playlist, indexed by the raw id
    pub const ALL: [Self; 39] = [
        Self::PrideFibonacci,
        Self::ColorWavesFibonacci,
        Self::AnglePalette,
        Self::RadiusPalette,
        Self::XPalette,
        Self::YPalette,
        Self::XyPalette,
        Self::AngleGradientPalette,
        Self::RadiusGradientPalette,
        Self::XGradientPalette,
        Self::YGradientPalette,
        Self::XyGradientPalette,
        Self::RainbowTwinkles,
        Self::SnowTwinkles,
        Self::CloudTwinkles,
        Self::IncandescentTwinkles,
        Self::RetroC9Twinkles,
        Self::RedWhiteTwinkles,
        Self::BlueWhiteTwinkles,
        Self::RedGreenWhiteTwinkles,
        Self::FairyLightTwinkles,
        Self::Snow2Twinkles,
        Self::HollyTwinkles,
        Self::IceTwinkles,
        Self::PartyTwinkles,
        Self::ForestTwinkles,
        Self::LavaTwinkles,
        Self::FireTwinkles,
        Self::Cloud2Twinkles,
        Self::OceanTwinkles,
        Self::Rainbow,
        Self::RainbowWithGlitter,
        Self::RainbowSolid,
        Self::Confetti,
        Self::Sinelon,
        Self::Bpm,
        Self::Juggle,
        Self::Fire,
        Self::Water,
    ];

    /// Number of patterns in the playlist
    #[allow(clippy::cast_possible_truncation)]
    pub const COUNT: u8 = Self::ALL.len() as u8;

    pub const fn from_raw(value: u8) -> Option<Self> {
        if value < Self::COUNT {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrideFibonacci => "pride_fibonacci",
            Self::ColorWavesFibonacci => "color_waves_fibonacci",
            Self::AnglePalette => "angle_palette",
            Self::RadiusPalette => "radius_palette",
            Self::XPalette => "x_palette",
            Self::YPalette => "y_palette",
            Self::XyPalette => "xy_palette",
            Self::AngleGradientPalette => "angle_gradient_palette",
            Self::RadiusGradientPalette => "radius_gradient_palette",
            Self::XGradientPalette => "x_gradient_palette",
            Self::YGradientPalette => "y_gradient_palette",
            Self::XyGradientPalette => "xy_gradient_palette",
            Self::RainbowTwinkles => "rainbow_twinkles",
            Self::SnowTwinkles => "snow_twinkles",
            Self::CloudTwinkles => "cloud_twinkles",
            Self::IncandescentTwinkles => "incandescent_twinkles",
            Self::RetroC9Twinkles => "retro_c9_twinkles",
            Self::RedWhiteTwinkles => "red_white_twinkles",
            Self::BlueWhiteTwinkles => "blue_white_twinkles",
            Self::RedGreenWhiteTwinkles => "red_green_white_twinkles",
            Self::FairyLightTwinkles => "fairy_light_twinkles",
            Self::Snow2Twinkles => "snow2_twinkles",
            Self::HollyTwinkles => "holly_twinkles",
            Self::IceTwinkles => "ice_twinkles",
            Self::PartyTwinkles => "party_twinkles",
            Self::ForestTwinkles => "forest_twinkles",
            Self::LavaTwinkles => "lava_twinkles",
            Self::FireTwinkles => "fire_twinkles",
            Self::Cloud2Twinkles => "cloud2_twinkles",
            Self::OceanTwinkles => "ocean_twinkles",
            Self::Rainbow => "rainbow",
            Self::RainbowWithGlitter => "rainbow_with_glitter",
            Self::RainbowSolid => "rainbow_solid",
            Self::Confetti => "confetti",
            Self::Sinelon => "sinelon",
            Self::Bpm => "bpm",
            Self::Juggle => "juggle",
            Self::Fire => "fire",
            Self::Water => "water",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }
}

/// Per-pattern state, created once and kept across pattern switches
#[derive(Debug, Clone)]
pub struct PatternLibrary<const N: usize> {
    pride_clock: WaveClock,
    color_waves_clock: WaveClock,
    heat: HeatField<N>,
    twinkles: TwinkleField<N>,
    sinelon: Sinelon,
    juggle: Juggle,
}

impl<const N: usize> PatternLibrary<N> {
    pub fn new(now: Instant) -> Self {
        Self {
            pride_clock: WaveClock::new(),
            color_waves_clock: WaveClock::new(),
            heat: HeatField::new(),
            twinkles: TwinkleField::new(now),
            sinelon: Sinelon::new(),
            juggle: Juggle::new(),
        }
    }

    /// Heat cells shared by the fire and water patterns
    pub const fn heat(&self) -> &HeatField<N> {
        &self.heat
    }

    /// Render one frame of `id`
    pub fn render<R: RandomSource>(
        &mut self,
        id: PatternId,
        ctx: &mut RenderContext<'_, R, N>,
        leds: &mut [Rgb; N],
    ) {
        match id {
            PatternId::PrideFibonacci => {
                Pride::new(&mut self.pride_clock, PixelOrder::Fibonacci).render(ctx, leds);
            }
            PatternId::ColorWavesFibonacci => {
                ColorWaves::new(&mut self.color_waves_clock, PixelOrder::Fibonacci)
                    .render(ctx, leds);
            }
            PatternId::AnglePalette => map(MapCoord::Angle, MapSource::Base, ctx, leds),
            PatternId::RadiusPalette => map(MapCoord::Radius, MapSource::Base, ctx, leds),
            PatternId::XPalette => map(MapCoord::X, MapSource::Base, ctx, leds),
            PatternId::YPalette => map(MapCoord::Y, MapSource::Base, ctx, leds),
            PatternId::XyPalette => map(MapCoord::Xy, MapSource::Base, ctx, leds),
            PatternId::AngleGradientPalette => {
                map(MapCoord::Angle, MapSource::Blended, ctx, leds);
            }
            PatternId::RadiusGradientPalette => {
                map(MapCoord::Radius, MapSource::Blended, ctx, leds);
            }
            PatternId::XGradientPalette => map(MapCoord::X, MapSource::Blended, ctx, leds),
            PatternId::YGradientPalette => map(MapCoord::Y, MapSource::Blended, ctx, leds),
            PatternId::XyGradientPalette => map(MapCoord::Xy, MapSource::Blended, ctx, leds),
            PatternId::RainbowTwinkles => self.twinkle(&presets::RAINBOW, ctx, leds),
            PatternId::SnowTwinkles => self.twinkle(&presets::SNOW_TWINKLE, ctx, leds),
            PatternId::CloudTwinkles => self.twinkle(&presets::CLOUD, ctx, leds),
            PatternId::IncandescentTwinkles => {
                self.twinkle(&presets::INCANDESCENT, ctx, leds);
            }
            PatternId::RetroC9Twinkles => fox(&presets::RETRO_C9, ctx, leds),
            PatternId::RedWhiteTwinkles => fox(&presets::RED_WHITE, ctx, leds),
            PatternId::BlueWhiteTwinkles => fox(&presets::BLUE_WHITE, ctx, leds),
            PatternId::RedGreenWhiteTwinkles => fox(&presets::RED_GREEN_WHITE, ctx, leds),
            PatternId::FairyLightTwinkles => fox(&presets::FAIRY_LIGHT, ctx, leds),
            PatternId::Snow2Twinkles => fox(&presets::SNOW, ctx, leds),
            PatternId::HollyTwinkles => fox(&presets::HOLLY, ctx, leds),
            PatternId::IceTwinkles => fox(&presets::ICE_TWINKLE, ctx, leds),
            PatternId::PartyTwinkles => fox(&presets::PARTY, ctx, leds),
            PatternId::ForestTwinkles => fox(&presets::FOREST, ctx, leds),
            PatternId::LavaTwinkles => fox(&presets::LAVA, ctx, leds),
            PatternId::FireTwinkles => fox(&presets::HEAT, ctx, leds),
            PatternId::Cloud2Twinkles => fox(&presets::CLOUD, ctx, leds),
            PatternId::OceanTwinkles => fox(&presets::OCEAN, ctx, leds),
            PatternId::Rainbow => Rainbow::new(RainbowVariant::Gradient).render(ctx, leds),
            PatternId::RainbowWithGlitter => {
                Rainbow::new(RainbowVariant::Glitter).render(ctx, leds);
            }
            PatternId::RainbowSolid => Rainbow::new(RainbowVariant::Solid).render(ctx, leds),
            PatternId::Confetti => Confetti.render(ctx, leds),
            PatternId::Sinelon => self.sinelon.render(ctx, leds),
            PatternId::Bpm => Bpm.render(ctx, leds),
            PatternId::Juggle => self.juggle.render(ctx, leds),
            PatternId::Fire => {
                HeatMap::new(&mut self.heat, &presets::HEAT, HeatDirection::Up).render(ctx, leds);
            }
            PatternId::Water => {
                HeatMap::new(&mut self.heat, &presets::ICE, HeatDirection::Down)
                    .render(ctx, leds);
            }
        }
    }

    fn twinkle<R: RandomSource>(
        &mut self,
        palette: &'static Palette16,
        ctx: &mut RenderContext<'_, R, N>,
        leds: &mut [Rgb; N],
    ) {
        ColorTwinkles::new(&mut self.twinkles, palette).render(ctx, leds);
    }
}

fn map<R: RandomSource, const N: usize>(
    coord: MapCoord,
    source: MapSource,
    ctx: &mut RenderContext<'_, R, N>,
    leds: &mut [Rgb; N],
) {
    PaletteMap::new(coord, source).render(ctx, leds);
}

fn fox<R: RandomSource, const N: usize>(
    palette: &'static Palette16,
    ctx: &mut RenderContext<'_, R, N>,
    leds: &mut [Rgb; N],
) {
    TwinkleFox::new(palette).render(ctx, leds);
}

/// Clamp a pixel position produced by an oscillator spanning `0..=N`
#[inline]
pub(crate) const fn clamp_pixel<const N: usize>(pos: usize) -> usize {
    if pos >= N { N.saturating_sub(1) } else { pos }
}

/// `N` as the upper bound of a 16-bit oscillator
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn pixel_span<const N: usize>() -> u16 {
    if N > u16::MAX as usize {
        u16::MAX
    } else {
        N as u16
    }
}
