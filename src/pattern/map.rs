//! Geometric palette sweeps
//!
//! Each physical pixel looks up `beat - coordinate` in a palette, so the
//! palette scrolls across the board along one of the spiral coordinates.

use super::{Pattern, RenderContext};
use crate::{color::Rgb, math8::beat8, random::RandomSource};

/// Board coordinate the palette is swept along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCoord {
    Angle,
    Radius,
    X,
    Y,
    /// Diagonal, `x + y`
    Xy,
}

/// Which palette the sweep reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSource {
    /// Fixed configured palette
    Base,
    /// Cross-faded gradient palette
    Blended,
}

#[derive(Debug, Clone)]
pub struct PaletteMap {
    coord: MapCoord,
    source: MapSource,
}

impl PaletteMap {
    pub const fn new(coord: MapCoord, source: MapSource) -> Self {
        Self { coord, source }
    }
}

impl<const N: usize> Pattern<N> for PaletteMap {
    fn render<R: RandomSource>(&mut self, ctx: &mut RenderContext<'_, R, N>, leds: &mut [Rgb; N]) {
        let beat = beat8(u16::from(ctx.speed), ctx.now_ms);
        let palette = match self.source {
            MapSource::Base => ctx.base_palette,
            MapSource::Blended => ctx.palette,
        };
        let layout = ctx.layout;

        for (i, led) in leds.iter_mut().enumerate() {
            let offset = match self.coord {
                MapCoord::Angle => layout.angle()[i],
                MapCoord::Radius => layout.radius()[i],
                MapCoord::X => layout.x()[i],
                MapCoord::Y => layout.y()[i],
                MapCoord::Xy => layout.x()[i].wrapping_add(layout.y()[i]),
            };
            *led = palette.color_at(beat.wrapping_sub(offset));
        }
    }
}
