//! Button input
//!
//! Debouncing happens outside the crate. The frame loop only asks, once per
//! frame, whether each button was released since the previous poll and turns
//! the answers into queued commands.

use core::cell::Cell;

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{command::CommandQueue, scheduler::Direction};

/// The two physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Steps to the next pattern
    Pattern,
    /// Steps to the next brightness level
    Brightness,
}

/// Debounced "released since last poll" edges
pub trait ButtonInput {
    /// Pattern button was released since the last call
    fn pattern_released(&mut self) -> bool;

    /// Brightness button was released since the last call
    fn brightness_released(&mut self) -> bool;
}

/// Input source that never reports a release
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl ButtonInput for NoInput {
    fn pattern_released(&mut self) -> bool {
        false
    }

    fn brightness_released(&mut self) -> bool {
        false
    }
}

/// Translates button edges into commands
#[derive(Debug, Clone, Copy, Default)]
pub struct InputDispatcher;

impl InputDispatcher {
    /// Poll both buttons once and queue the resulting commands
    ///
    /// A command that does not fit in the queue is dropped; losing a button
    /// press is harmless.
    pub fn dispatch<I: ButtonInput, const N: usize>(input: &mut I, queue: &mut CommandQueue<N>) {
        if input.pattern_released() {
            #[cfg(feature = "esp32-log")]
            println!("[InputDispatcher] pattern button released");
            let _ = queue.push_manual_pattern(Direction::Forward);
        }

        if input.brightness_released() {
            #[cfg(feature = "esp32-log")]
            println!("[InputDispatcher] brightness button released");
            let _ = queue.push_brightness(Direction::Forward);
        }
    }
}

/// Interrupt-safe release flags
///
/// Debouncer interrupts call [`ReleaseLatch::release`]; the frame loop polls
/// through [`ButtonInput`], which reads and clears the flag in one critical
/// section. Repeated releases between two polls collapse into one.
pub struct ReleaseLatch {
    pattern: Mutex<Cell<bool>>,
    brightness: Mutex<Cell<bool>>,
}

impl Default for ReleaseLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseLatch {
    pub const fn new() -> Self {
        Self {
            pattern: Mutex::new(Cell::new(false)),
            brightness: Mutex::new(Cell::new(false)),
        }
    }

    /// Record a release of `button`
    pub fn release(&self, button: Button) {
        critical_section::with(|cs| self.flag(button).borrow(cs).set(true));
    }

    /// Read and clear the release flag of `button`
    pub fn take(&self, button: Button) -> bool {
        critical_section::with(|cs| self.flag(button).borrow(cs).replace(false))
    }

    const fn flag(&self, button: Button) -> &Mutex<Cell<bool>> {
        match button {
            Button::Pattern => &self.pattern,
            Button::Brightness => &self.brightness,
        }
    }
}

impl ButtonInput for &ReleaseLatch {
    fn pattern_released(&mut self) -> bool {
        self.take(Button::Pattern)
    }

    fn brightness_released(&mut self) -> bool {
        self.take(Button::Brightness)
    }
}

impl ButtonInput for ReleaseLatch {
    fn pattern_released(&mut self) -> bool {
        self.take(Button::Pattern)
    }

    fn brightness_released(&mut self) -> bool {
        self.take(Button::Brightness)
    }
}
