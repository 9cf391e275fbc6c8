mod gradient;
mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use gradient::fill_gradient_rgb;
pub use utils::{
    add_colors, blend_colors, fade_to_black_by, fill_rainbow, fill_solid,
    hsv2rgb, nblend, nscale8, rgb_from_u32,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// All channels full
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
