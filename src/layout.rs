//! Spiral board geometry
//!
//! Pixels are placed on a Fermat spiral: logical pixel `i` sits at radius
//! `sqrt(i + 0.5)` and angle `i * golden_angle`, so index order runs from the
//! center outward. The strip itself is soldered along [`ARMS`] spiral arms
//! in serpentine order, which gives the logical to physical permutation.

/// Number of spiral arms the strip is wired along
pub const ARMS: usize = 8;

/// Turn fraction between consecutive pixels (`2 - phi`)
const GOLDEN_TURN: f32 = 0.381_966_02;

const TAU: f32 = core::f32::consts::TAU;

/// Precomputed layout of an `N` pixel spiral board
///
/// Built once at startup. Coordinates are indexed by physical position and
/// scaled to the full 8-bit range.
#[derive(Debug, Clone)]
pub struct FibonacciLayout<const N: usize> {
    to_physical: [u16; N],
    x: [u8; N],
    y: [u8; N],
    angle: [u8; N],
    radius: [u8; N],
}

impl<const N: usize> Default for FibonacciLayout<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FibonacciLayout<N> {
    /// Compute the permutation and coordinates
    ///
    /// `N` must fit in 16 bits.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn new() -> Self {
        assert!(N <= u16::MAX as usize + 1);

        let mut layout = Self {
            to_physical: [0; N],
            x: [0; N],
            y: [0; N],
            angle: [0; N],
            radius: [0; N],
        };
        if N == 0 {
            return layout;
        }

        let outer = libm::sqrtf(N as f32 - 0.5);
        for logical in 0..N {
            let physical = serpentine_index(logical, N);
            layout.to_physical[logical] = physical as u16;

            let turn = libm::fmodf(logical as f32 * GOLDEN_TURN, 1.0);
            let radius = if outer > 0.0 {
                libm::sqrtf(logical as f32 + 0.5) / outer
            } else {
                0.0
            };
            let theta = turn * TAU;

            layout.angle[physical] = to_u8(turn * 256.0);
            layout.radius[physical] = to_u8(radius * 255.0);
            layout.x[physical] = to_u8(127.5 + radius * 127.5 * libm::cosf(theta));
            layout.y[physical] = to_u8(127.5 + radius * 127.5 * libm::sinf(theta));
        }

        layout
    }

    /// Number of pixels on the board
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Physical position of the logical (center-outward) pixel `index`
    pub const fn to_physical(&self, index: usize) -> usize {
        self.to_physical[index] as usize
    }

    /// Whole logical to physical permutation
    pub const fn physical_map(&self) -> &[u16; N] {
        &self.to_physical
    }

    /// Horizontal coordinate of a physical pixel
    pub const fn x(&self) -> &[u8; N] {
        &self.x
    }

    /// Vertical coordinate of a physical pixel
    pub const fn y(&self) -> &[u8; N] {
        &self.y
    }

    /// Polar angle of a physical pixel, a full turn is 256
    pub const fn angle(&self) -> &[u8; N] {
        &self.angle
    }

    /// Distance of a physical pixel from the center
    pub const fn radius(&self) -> &[u8; N] {
        &self.radius
    }
}

/// Position of a logical pixel along the serpentine wiring
///
/// Arms are laid out one after another; even arms run outward, odd arms
/// run back toward the center.
const fn serpentine_index(logical: usize, count: usize) -> usize {
    let arm = logical % ARMS;
    let step = logical / ARMS;

    let mut offset = 0;
    let mut prev = 0;
    while prev < arm {
        offset += arm_len(prev, count);
        prev += 1;
    }

    if arm % 2 == 0 {
        offset + step
    } else {
        offset + arm_len(arm, count) - 1 - step
    }
}

/// Number of pixels wired on `arm`
const fn arm_len(arm: usize, count: usize) -> usize {
    if arm >= count {
        0
    } else {
        (count - arm).div_ceil(ARMS)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(value: f32) -> u8 {
    libm::roundf(value).clamp(0.0, 255.0) as u8
}
