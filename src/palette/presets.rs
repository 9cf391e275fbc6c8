//! Built-in palette tables
//!
//! Static color data only. The classic 16-entry palettes, the twinkle
//! palettes and the gradient set rotated through by the [`PaletteStore`].
//!
//! [`PaletteStore`]: super::PaletteStore
#![allow(clippy::unreadable_literal)]

use super::{GradientStop, Palette16};
use crate::color::rgb_from_u32;

pub const RAINBOW: Palette16 = hex_palette![
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A,
    0x00AB55, 0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
];

pub const RAINBOW_STRIPE: Palette16 = hex_palette![
    0xFF0000, 0x000000, 0xAB5500, 0x000000, 0xABAB00, 0x000000, 0x00FF00, 0x000000,
    0x00AB55, 0x000000, 0x0000FF, 0x000000, 0x5500AB, 0x000000, 0xAB0055, 0x000000,
];

pub const CLOUD: Palette16 = hex_palette![
    0x0000FF, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B,
    0x0000FF, 0x00008B, 0x87CEEB, 0x87CEEB, 0xADD8E6, 0xFFFFFF, 0xADD8E6, 0x87CEEB,
];

pub const LAVA: Palette16 = hex_palette![
    0x000000, 0x800000, 0x000000, 0x800000, 0x8B0000, 0x8B0000, 0x800000, 0x8B0000,
    0x8B0000, 0x8B0000, 0xFF0000, 0xFFA500, 0xFFFFFF, 0xFFA500, 0xFF0000, 0x8B0000,
];

pub const OCEAN: Palette16 = hex_palette![
    0x191970, 0x00008B, 0x191970, 0x000080, 0x00008B, 0x0000CD, 0x2E8B57, 0x008080,
    0x5F9EA0, 0x0000FF, 0x008B8B, 0x6495ED, 0x7FFFD4, 0x2E8B57, 0x00FFFF, 0x87CEFA,
];

pub const FOREST: Palette16 = hex_palette![
    0x006400, 0x006400, 0x556B2F, 0x006400, 0x008000, 0x228B22, 0x6B8E23, 0x008000,
    0x2E8B57, 0x66CDAA, 0x32CD32, 0x9ACD32, 0x90EE90, 0x7CFC00, 0x66CDAA, 0x228B22,
];

pub const PARTY: Palette16 = hex_palette![
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B, 0xE81700, 0xB84700, 0xAB7700, 0xABAB00,
    0xAB5500, 0xDD2200, 0xF2000E, 0xC2003E, 0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9,
];

pub const HEAT: Palette16 = hex_palette![
    0x000000, 0x330000, 0x660000, 0x990000, 0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600,
    0xFF9900, 0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF,
];

/// Black through blue and aqua to white, used by the water heat map
pub const ICE: Palette16 = Palette16::gradient4(
    rgb_from_u32(0x000000),
    rgb_from_u32(0x0000FF),
    rgb_from_u32(0x00FFFF),
    rgb_from_u32(0xFFFFFF),
);

// Color twinkle palettes

const SNOW_WHITE: u32 = 0xFFFFFF;
const SNOW_GRAY: u32 = 0x555555;

pub const SNOW_TWINKLE: Palette16 = hex_palette![
    SNOW_WHITE, SNOW_WHITE, SNOW_WHITE, SNOW_WHITE, SNOW_GRAY, SNOW_GRAY, SNOW_GRAY, SNOW_GRAY,
    SNOW_GRAY, SNOW_GRAY, SNOW_GRAY, SNOW_GRAY, SNOW_GRAY, SNOW_GRAY, SNOW_GRAY, SNOW_GRAY,
];

pub const INCANDESCENT: Palette16 = Palette16::solid(rgb_from_u32(0xE1A024));

// TwinkleFOX palettes

const C9_RED: u32 = 0xB80400;
const C9_ORANGE: u32 = 0x902C02;
const C9_GREEN: u32 = 0x046002;
const C9_BLUE: u32 = 0x070758;
const C9_WHITE: u32 = 0x606820;

/// Old-school C9 incandescent bulbs
pub const RETRO_C9: Palette16 = hex_palette![
    C9_RED, C9_ORANGE, C9_RED, C9_ORANGE, C9_ORANGE, C9_RED, C9_ORANGE, C9_RED,
    C9_GREEN, C9_GREEN, C9_GREEN, C9_GREEN, C9_BLUE, C9_BLUE, C9_BLUE, C9_WHITE,
];

const RED: u32 = 0xFF0000;
const GREEN: u32 = 0x00B000;
const BLUE: u32 = 0x0000FF;
const GRAY: u32 = 0x404040;

pub const RED_WHITE: Palette16 = hex_palette![
    RED, RED, RED, RED, GRAY, GRAY, GRAY, GRAY,
    RED, RED, RED, RED, GRAY, GRAY, GRAY, GRAY,
];

pub const BLUE_WHITE: Palette16 = hex_palette![
    BLUE, BLUE, BLUE, BLUE, BLUE, BLUE, BLUE, BLUE,
    BLUE, BLUE, BLUE, BLUE, BLUE, GRAY, GRAY, GRAY,
];

pub const RED_GREEN_WHITE: Palette16 = hex_palette![
    RED, RED, RED, RED, RED, RED, RED, RED,
    RED, RED, GRAY, GRAY, GREEN, GREEN, GREEN, GREEN,
];

const FAIRY: u32 = 0xFFE42D;
const HALF_FAIRY: u32 = (FAIRY & 0xFEFEFE) / 2;
const QUARTER_FAIRY: u32 = (FAIRY & 0xFCFCFC) / 4;

/// Warm fairy lights with a few dimmer bulbs
pub const FAIRY_LIGHT: Palette16 = hex_palette![
    FAIRY, FAIRY, FAIRY, FAIRY, HALF_FAIRY, HALF_FAIRY, FAIRY, FAIRY,
    QUARTER_FAIRY, QUARTER_FAIRY, FAIRY, FAIRY, FAIRY, FAIRY, FAIRY, FAIRY,
];

const SNOW_DIM: u32 = 0x304048;
const SNOW_BRIGHT: u32 = 0xE0F0FF;

pub const SNOW: Palette16 = hex_palette![
    SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM,
    SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_BRIGHT,
];

const HOLLY_GREEN: u32 = 0x00580C;
const HOLLY_RED: u32 = 0xB00402;

/// Mostly dark green with the occasional red berry
pub const HOLLY: Palette16 = hex_palette![
    HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN,
    HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN,
    HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN, HOLLY_RED,
];

const ICE_BLUE1: u32 = 0x0C1040;
const ICE_BLUE2: u32 = 0x182080;
const ICE_BLUE3: u32 = 0x5080C0;

pub const ICE_TWINKLE: Palette16 = hex_palette![
    ICE_BLUE1, ICE_BLUE1, ICE_BLUE1, ICE_BLUE1, ICE_BLUE1, ICE_BLUE1, ICE_BLUE1, ICE_BLUE1,
    ICE_BLUE1, ICE_BLUE1, ICE_BLUE1, ICE_BLUE1, ICE_BLUE2, ICE_BLUE2, ICE_BLUE2, ICE_BLUE3,
];

/// Fixed palettes selectable as the base palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasePalette {
    #[default]
    Rainbow,
    RainbowStripe,
    Cloud,
    Lava,
    Ocean,
    Forest,
    Party,
    Heat,
}

impl BasePalette {
    /// Every base palette in selection order
    pub const ALL: [BasePalette; 8] = [
        Self::Rainbow,
        Self::RainbowStripe,
        Self::Cloud,
        Self::Lava,
        Self::Ocean,
        Self::Forest,
        Self::Party,
        Self::Heat,
    ];

    pub const fn palette(self) -> &'static Palette16 {
        match self {
            Self::Rainbow => &RAINBOW,
            Self::RainbowStripe => &RAINBOW_STRIPE,
            Self::Cloud => &CLOUD,
            Self::Lava => &LAVA,
            Self::Ocean => &OCEAN,
            Self::Forest => &FOREST,
            Self::Party => &PARTY,
            Self::Heat => &HEAT,
        }
    }
}

// Gradient palettes rotated by the palette store

const SUNSET_REAL: &[GradientStop] = &[
    (0, 120, 0, 0),
    (22, 179, 22, 0),
    (51, 255, 104, 0),
    (85, 167, 22, 18),
    (135, 100, 0, 103),
    (198, 16, 0, 130),
    (255, 0, 0, 160),
];

const RIVENDELL: &[GradientStop] = &[
    (0, 1, 14, 5),
    (101, 16, 36, 14),
    (165, 56, 68, 30),
    (242, 150, 156, 99),
    (255, 150, 156, 99),
];

const OCEAN_BREEZE: &[GradientStop] = &[
    (0, 1, 6, 7),
    (89, 1, 99, 111),
    (153, 144, 209, 255),
    (255, 0, 73, 82),
];

const RGI: &[GradientStop] = &[
    (0, 4, 1, 31),
    (31, 55, 1, 16),
    (63, 197, 3, 7),
    (95, 59, 2, 17),
    (127, 6, 2, 34),
    (159, 39, 6, 33),
    (191, 112, 13, 32),
    (223, 56, 9, 35),
    (255, 22, 6, 38),
];

const RETRO2: &[GradientStop] = &[(0, 188, 135, 1), (255, 46, 7, 1)];

const ANALOGOUS: &[GradientStop] = &[
    (0, 3, 0, 255),
    (63, 23, 0, 255),
    (127, 67, 0, 255),
    (191, 142, 0, 45),
    (255, 255, 0, 0),
];

const PINK_SPLASH: &[GradientStop] = &[
    (0, 126, 11, 255),
    (127, 197, 1, 22),
    (175, 210, 157, 172),
    (221, 157, 3, 112),
    (255, 157, 3, 112),
];

const CORAL_REEF: &[GradientStop] = &[
    (0, 40, 199, 197),
    (50, 10, 152, 155),
    (96, 1, 111, 120),
    (96, 43, 127, 162),
    (139, 10, 73, 111),
    (255, 1, 34, 71),
];

/// A named gradient palette
#[derive(Debug, Clone, Copy)]
pub struct NamedGradient {
    pub name: &'static str,
    /// Stops the palette was decoded from
    pub stops: &'static [GradientStop],
    pub palette: Palette16,
}

impl NamedGradient {
    const fn new(name: &'static str, stops: &'static [GradientStop]) -> Self {
        Self {
            name,
            stops,
            palette: Palette16::from_gradient(stops),
        }
    }
}

/// Gradient palettes in rotation order
pub const GRADIENTS: [NamedGradient; 8] = [
    NamedGradient::new("sunset_real", SUNSET_REAL),
    NamedGradient::new("rivendell", RIVENDELL),
    NamedGradient::new("ocean_breeze", OCEAN_BREEZE),
    NamedGradient::new("rgi", RGI),
    NamedGradient::new("retro2", RETRO2),
    NamedGradient::new("analogous", ANALOGOUS),
    NamedGradient::new("pink_splash", PINK_SPLASH),
    NamedGradient::new("coral_reef", CORAL_REEF),
];
