use heapless::Deque;

use crate::scheduler::Direction;

/// Commands that can be applied to the reel between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step the active pattern
    AdvancePattern(Direction),
    /// Step the global brightness level
    AdvanceBrightness(Direction),
    /// Stop automatic pattern rotation until restart
    DisableAutoplay,
    /// Switch the output on or off
    SetPower(bool),
}

/// Bounded FIFO of pending commands
///
/// N is the number of commands to store in the queue
#[derive(Debug, Default)]
pub struct CommandQueue<const N: usize> {
    inner: Deque<Command, N>,
}

impl<const N: usize> CommandQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Deque::new(),
        }
    }

    /// Push a command onto the queue
    ///
    /// Returns the command if the queue is full
    pub fn push(&mut self, command: Command) -> Result<(), Command> {
        self.inner.push_back(command)
    }

    /// Pop the oldest command
    ///
    /// Returns None if the queue is empty
    pub fn pop(&mut self) -> Option<Command> {
        self.inner.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Push a manual pattern step, which also ends autoplay
    ///
    /// Both commands are queued or neither is.
    pub fn push_manual_pattern(&mut self, direction: Direction) -> Result<(), Command> {
        let pattern_op = Command::AdvancePattern(direction);
        if self.inner.capacity() - self.inner.len() < 2 {
            return Err(pattern_op);
        }
        self.push(Command::DisableAutoplay)?;
        self.push(pattern_op)
    }

    /// Push a brightness step
    pub fn push_brightness(&mut self, direction: Direction) -> Result<(), Command> {
        self.push(Command::AdvanceBrightness(direction))
    }

    /// Push a power change
    pub fn push_power(&mut self, on: bool) -> Result<(), Command> {
        self.push(Command::SetPower(on))
    }
}
