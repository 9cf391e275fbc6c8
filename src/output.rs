use smart_leds::{RGB8, SmartLedsWrite};

use crate::{OutputDriver, color::Rgb};

/// Adapter presenting any `smart-leds` writer as an [`OutputDriver`]
///
/// Transport errors are dropped: a stalled strip is neither detected nor
/// retried, the next frame simply tries again.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let _ = self.writer.write(colors.iter().copied());
    }
}
