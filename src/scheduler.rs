//! Pattern selection and brightness level stepping
//!
//! Both keep a single wrapping index: stepping forward from the last entry
//! lands on the first, stepping backward from the first lands on the last.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{clock::millis32, pattern::PatternId};

/// Step direction for wrapping indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Step `index` within `0..count`, wrapping at both ends
pub const fn wrap_step(index: u8, count: u8, direction: Direction) -> u8 {
    if count == 0 {
        return 0;
    }
    match direction {
        Direction::Forward => {
            if index >= count - 1 {
                0
            } else {
                index + 1
            }
        }
        Direction::Backward => {
            if index == 0 || index >= count {
                count - 1
            } else {
                index - 1
            }
        }
    }
}

/// Active pattern and the autoplay timer
#[derive(Debug, Clone)]
pub struct PatternScheduler {
    index: u8,
    autoplay: bool,
    duration: u32,
    deadline: u32,
}

impl PatternScheduler {
    /// Create a scheduler on `pattern`, with the first autoplay deadline one
    /// `duration` after `now`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(pattern: PatternId, autoplay: bool, duration: Duration, now: Instant) -> Self {
        let duration = duration.as_millis() as u32;
        Self {
            index: pattern.raw(),
            autoplay,
            duration,
            deadline: millis32(now).wrapping_add(duration),
        }
    }

    /// Index of the active pattern
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Active pattern
    pub const fn current(&self) -> PatternId {
        match PatternId::from_raw(self.index) {
            Some(id) => id,
            None => PatternId::ALL[0],
        }
    }

    pub const fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    /// Wall-clock millisecond at which autoplay advances next
    pub const fn deadline(&self) -> u32 {
        self.deadline
    }

    /// Step the pattern index
    pub fn advance(&mut self, direction: Direction) -> PatternId {
        self.index = wrap_step(self.index, PatternId::COUNT, direction);
        let current = self.current();
        #[cfg(feature = "esp32-log")]
        println!("[PatternScheduler] pattern: {} ({})", self.index, current.as_str());
        current
    }

    /// Turn autoplay off until restart
    pub fn disable_autoplay(&mut self) {
        if self.autoplay {
            self.autoplay = false;
            #[cfg(feature = "esp32-log")]
            println!("[PatternScheduler] autoplay: off");
        }
    }

    /// Advance forward when autoplay is on and the deadline has passed
    ///
    /// Returns `true` if the pattern changed.
    #[allow(clippy::cast_possible_wrap)]
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.autoplay {
            return false;
        }
        let now = millis32(now);
        if (now.wrapping_sub(self.deadline) as i32) <= 0 {
            return false;
        }
        self.advance(Direction::Forward);
        self.deadline = now.wrapping_add(self.duration);
        true
    }
}

/// Number of global brightness levels
pub const BRIGHTNESS_LEVEL_COUNT: usize = 5;

/// Global brightness levels, dimmest first
pub const BRIGHTNESS_LEVELS: [u8; BRIGHTNESS_LEVEL_COUNT] = [16, 32, 64, 128, 255];

/// Wrapping index over a fixed set of levels
#[derive(Debug, Clone)]
pub struct LevelStepper<const L: usize> {
    levels: [u8; L],
    index: u8,
}

impl LevelStepper<BRIGHTNESS_LEVEL_COUNT> {
    /// Stepper over [`BRIGHTNESS_LEVELS`]
    pub const fn brightness(index: u8) -> Self {
        Self::new(BRIGHTNESS_LEVELS, index)
    }
}

impl<const L: usize> LevelStepper<L> {
    /// Create a stepper; an out of range `index` starts at the first level
    ///
    /// `levels` must hold between 1 and 255 entries.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(levels: [u8; L], index: u8) -> Self {
        assert!(L > 0 && L <= u8::MAX as usize);
        let index = if (index as usize) < L { index } else { 0 };
        Self { levels, index }
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Current level
    pub const fn level(&self) -> u8 {
        self.levels[self.index as usize]
    }

    /// Step the level index
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, direction: Direction) -> u8 {
        self.index = wrap_step(self.index, L as u8, direction);
        let level = self.level();
        #[cfg(feature = "esp32-log")]
        println!("[LevelStepper] brightness: {}", level);
        level
    }
}
