//! Palette rotation and cross-fading
//!
//! The store walks a fixed list of gradient palettes; the blender eases the
//! live palette toward whichever entry the store currently targets.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Palette16, presets::NamedGradient};
use crate::{color::BLACK, math8::{addmod8, scale8}};

/// Fixed, ordered collection of gradient palettes with a wrapping cursor
#[derive(Debug, Clone)]
pub struct PaletteStore {
    gradients: &'static [NamedGradient],
    index: u8,
}

impl PaletteStore {
    /// Create a store positioned at the first entry
    ///
    /// The list must hold between 1 and 255 palettes.
    pub const fn new(gradients: &'static [NamedGradient]) -> Self {
        assert!(!gradients.is_empty() && gradients.len() <= u8::MAX as usize);
        Self { gradients, index: 0 }
    }

    /// Number of palettes in the store
    #[allow(clippy::cast_possible_truncation)]
    pub const fn len(&self) -> u8 {
        self.gradients.len() as u8
    }

    /// Always false, a store is never empty
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Index of the selected palette
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Currently selected palette
    pub const fn selected(&self) -> &NamedGradient {
        &self.gradients[self.index as usize]
    }

    /// Move the cursor forward by one, wrapping at the end
    pub fn advance(&mut self) -> &NamedGradient {
        self.index = addmod8(self.index, 1, self.len());
        self.selected()
    }
}

/// Live palette that cross-fades toward a target from the store
#[derive(Debug, Clone)]
pub struct PaletteBlender {
    store: PaletteStore,
    current: Palette16,
    target: Palette16,
}

impl PaletteBlender {
    /// Start from black, fading toward the store's first palette
    pub const fn new(store: PaletteStore) -> Self {
        let target = store.selected().palette;
        Self {
            store,
            current: Palette16::solid(BLACK),
            target,
        }
    }

    /// Palette patterns should render with
    pub const fn current(&self) -> &Palette16 {
        &self.current
    }

    /// Palette being faded toward
    pub const fn target(&self) -> &Palette16 {
        &self.target
    }

    /// Store the blender picks its targets from
    pub const fn store(&self) -> &PaletteStore {
        &self.store
    }

    /// Advance the store and retarget the fade
    pub fn select_next_target(&mut self) {
        let next = self.store.advance();
        #[cfg(feature = "esp32-log")]
        println!("[PaletteBlender] target palette: {}", next.name);
        self.target = next.palette;
    }

    /// Move every channel of every control point toward the target
    ///
    /// Each channel covers `step`/256 of its remaining distance, at least one
    /// unit and never more than the distance itself. A zero step holds.
    pub fn blend_toward_target(&mut self, step: u8) {
        let target = self.target.entries();
        for (current, target) in self.current.entries_mut().iter_mut().zip(target) {
            current.r = approach(current.r, target.r, step);
            current.g = approach(current.g, target.g, step);
            current.b = approach(current.b, target.b, step);
        }
    }
}

#[inline]
fn approach(current: u8, target: u8, step: u8) -> u8 {
    let distance = current.abs_diff(target);
    if distance == 0 || step == 0 {
        return current;
    }
    let delta = scale8(distance, step).clamp(1, distance);
    if current < target {
        current + delta
    } else {
        current - delta
    }
}

#[cfg(test)]
mod tests {
    use super::approach;

    #[test]
    fn approach_moves_at_least_one_step() {
        assert_eq!(approach(10, 11, 8), 11);
        assert_eq!(approach(11, 10, 8), 10);
        assert_eq!(approach(0, 255, 8), 8);
    }

    #[test]
    fn approach_holds_on_zero_step() {
        assert_eq!(approach(255, 0, 0), 255);
        assert_eq!(approach(3, 200, 0), 3);
    }

    #[test]
    fn approach_never_overshoots() {
        assert_eq!(approach(0, 3, 255), 3);
        assert_eq!(approach(200, 100, 255), 100);
    }
}
