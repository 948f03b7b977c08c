/// 5-bit per channel colour, as the LED chain expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const MAX: u8 = 31;

    pub const BLACK: Colour = Colour::new(0, 0, 0);
    pub const WHITE: Colour = Colour::new(31, 31, 31);
    pub const RED: Colour = Colour::new(31, 0, 0);
    pub const ORANGE: Colour = Colour::new(31, 16, 1);
    pub const GREEN: Colour = Colour::new(0, 31, 0);
    pub const BLUE: Colour = Colour::new(0, 0, 31);
    pub const YELLOW: Colour = Colour::new(31, 31, 0);
    pub const MAGENTA: Colour = Colour::new(31, 0, 31);
    pub const AQUA: Colour = Colour::new(0, 31, 31);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    pub fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Hue/saturation/value, each on the same 0..=31 scale as [`Colour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl From<Hsv> for Colour {
    fn from(hsv: Hsv) -> Self {
        let max = Colour::MAX as f32;
        let h = hsv.h.min(Colour::MAX) as f32 / max;
        let s = hsv.s.min(Colour::MAX) as f32 / max;
        let v = hsv.v.min(Colour::MAX) as f32 / max;

        if s <= 0.0 {
            return from_unit(v, v, v);
        }

        // six sectors of 60 degrees
        let h = h * 6.0;
        let sector = h as u32;
        let ff = h - sector as f32;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * ff);
        let t = v * (1.0 - s * (1.0 - ff));

        match sector {
            0 => from_unit(v, t, p),
            1 => from_unit(q, v, p),
            2 => from_unit(p, v, t),
            3 => from_unit(p, q, v),
            4 => from_unit(t, p, v),
            _ => from_unit(v, p, q),
        }
    }
}

fn from_unit(r: f32, g: f32, b: f32) -> Colour {
    let max = Colour::MAX as f32;
    Colour::new((r * max) as u8, (g * max) as u8, (b * max) as u8)
}

/// Slowly cycling hue shared by every mode.
#[derive(Debug, Clone)]
pub struct Rainbow {
    hue: u8,
    ticks: u8,
    rate: u8,
}

impl Rainbow {
    pub fn new(rate: u8) -> Self {
        Rainbow {
            hue: 0,
            ticks: 0,
            rate: rate.max(1),
        }
    }

    pub fn advance(&mut self) {
        self.ticks += 1;
        if self.ticks >= self.rate {
            self.ticks -= self.rate;
            self.hue = (self.hue + 1) % (Colour::MAX + 1);
        }
    }

    pub fn hue(&self) -> u8 {
        self.hue
    }

    pub fn colour(&self) -> Colour {
        Hsv {
            h: self.hue,
            s: Colour::MAX,
            v: Colour::MAX,
        }
        .into()
    }
}
