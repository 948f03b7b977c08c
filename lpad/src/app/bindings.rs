use crate::keyboard::{Key, KeyReport, Modifiers};

use super::AppMode;

/// Macro keys of one mode, sent from the accent pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub modifiers: Modifiers,
    pub keys: [Key; 8],
}

const F13_TO_F20: [Key; 8] = [
    Key::F13,
    Key::F14,
    Key::F15,
    Key::F16,
    Key::F17,
    Key::F18,
    Key::F19,
    Key::F20,
];

const SHIFTS: Modifiers = Modifiers::LEFT_SHIFT.union(Modifiers::RIGHT_SHIFT);

pub const LBOE: Bindings = Bindings {
    modifiers: Modifiers::LEFT_ALT.union(SHIFTS),
    keys: F13_TO_F20,
};

pub const GBC: Bindings = Bindings {
    modifiers: SHIFTS,
    keys: F13_TO_F20,
};

pub const PICO_PROJECT: Bindings = Bindings {
    modifiers: Modifiers::LEFT_CTRL
        .union(Modifiers::RIGHT_CTRL)
        .union(SHIFTS),
    keys: F13_TO_F20,
};

pub const KEYBINDS: Bindings = Bindings {
    modifiers: Modifiers::LEFT_CTRL.union(SHIFTS),
    keys: F13_TO_F20,
};

impl Bindings {
    pub const FIRST_PAD: usize = 8;

    /// `None` for the puzzle, which owns every pad.
    pub fn for_mode(mode: AppMode) -> Option<&'static Bindings> {
        match mode {
            AppMode::Lboe => Some(&LBOE),
            AppMode::Gbc => Some(&GBC),
            AppMode::PicoProject => Some(&PICO_PROJECT),
            AppMode::Keybinds => Some(&KEYBINDS),
            AppMode::PhotonSmash => None,
        }
    }

    pub fn report(&self, pad: usize) -> Option<KeyReport> {
        let key = self.keys.get(pad.checked_sub(Self::FIRST_PAD)?)?;
        Some(KeyReport::single(self.modifiers, *key))
    }
}
