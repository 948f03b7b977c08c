mod input_sampler;
mod pad_mask;

pub use input_sampler::InputSampler;
pub use pad_mask::PadMask;

use crate::colour::Colour;

pub const WIDTH: usize = 4;
pub const HEIGHT: usize = 4;
pub const NUM_PADS: usize = WIDTH * HEIGHT;

/// Button and LED access for the 4x4 pad.
///
/// Colour and brightness writes only touch the presentation buffer; nothing
/// reaches the LEDs until [`Keypad::flush`].
pub trait Keypad {
    type Error;

    /// Pads currently held down.
    fn held(&mut self) -> Result<PadMask, Self::Error>;

    /// `brightness` is clamped into `0.0..=1.0`. Out of range indices are ignored.
    fn set_pad(&mut self, index: usize, colour: Colour, brightness: f32);

    fn fill(&mut self, colour: Colour, brightness: f32) {
        for index in 0..NUM_PADS {
            self.set_pad(index, colour, brightness);
        }
    }

    fn clear(&mut self) {
        self.fill(Colour::BLACK, 0.0);
    }

    fn flush(&mut self) -> Result<(), Self::Error>;
}
