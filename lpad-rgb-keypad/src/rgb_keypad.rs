use embedded_hal::{digital::OutputPin, i2c::I2c, spi::SpiBus};
use lpad::{
    colour::Colour,
    keypad::{Keypad, PadMask, NUM_PADS},
};

/// I/O expander holding the button states.
const ADDRESS: u8 = 0x20;
const INPUT_REGISTER: u8 = 0x00;

/// Start frame, four bytes per LED, end frame.
const FRAME_LEN: usize = 4 + NUM_PADS * 4 + 4;
const LED_OFFSET: usize = 4;
const LED_HEADER: u8 = 0b1110_0000;

#[derive(Debug)]
pub enum Error<I, S, P> {
    I2c(I),
    Spi(S),
    ChipSelect(P),
}

/// 4x4 RGB keypad: buttons behind an I2C expander, an APA102 LED chain on SPI.
pub struct RgbKeypad<I: I2c, S: SpiBus, P: OutputPin> {
    i2c: I,
    spi: S,
    cs: P,
    frame: [u8; FRAME_LEN],
}

impl<I: I2c, S: SpiBus, P: OutputPin> RgbKeypad<I, S, P> {
    pub fn new(i2c: I, spi: S, mut cs: P) -> Self {
        cs.set_high().ok();
        let mut frame = [0; FRAME_LEN];
        for led in frame[LED_OFFSET..LED_OFFSET + NUM_PADS * 4].chunks_exact_mut(4) {
            led[0] = LED_HEADER;
        }
        RgbKeypad {
            i2c,
            spi,
            cs,
            frame,
        }
    }
}

impl<I: I2c, S: SpiBus, P: OutputPin> Keypad for RgbKeypad<I, S, P> {
    type Error = Error<I::Error, S::Error, P::Error>;

    fn held(&mut self) -> Result<PadMask, Self::Error> {
        let mut buf = [0; 2];
        self.i2c
            .write_read(ADDRESS, &[INPUT_REGISTER], &mut buf)
            .map_err(Error::I2c)?;
        // inputs are pulled up, a pressed pad reads 0
        Ok(PadMask(!u16::from_le_bytes(buf)))
    }

    fn set_pad(&mut self, index: usize, colour: Colour, brightness: f32) {
        if index >= NUM_PADS {
            return;
        }
        let level = (brightness.clamp(0.0, 1.0) * 31.0) as u8;
        let offset = LED_OFFSET + index * 4;
        self.frame[offset..offset + 4].copy_from_slice(&[
            LED_HEADER | level,
            colour.b,
            colour.g,
            colour.r,
        ]);
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(Error::ChipSelect)?;
        let written = self
            .spi
            .write(&self.frame)
            .and_then(|_| self.spi.flush());
        self.cs.set_high().map_err(Error::ChipSelect)?;
        written.map_err(Error::Spi)
    }
}
