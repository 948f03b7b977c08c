use crate::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppMode {
    Lboe,
    Gbc,
    PicoProject,
    Keybinds,
    PhotonSmash,
}

impl AppMode {
    /// In order of their selection pads.
    pub const ALL: [AppMode; 5] = [
        AppMode::Lboe,
        AppMode::Gbc,
        AppMode::PicoProject,
        AppMode::Keybinds,
        AppMode::PhotonSmash,
    ];

    /// Pad that selects this mode and shows its indicator.
    pub fn pad(&self) -> usize {
        *self as usize
    }

    pub fn from_pad(index: usize) -> Option<AppMode> {
        Self::ALL.get(index).copied()
    }

    pub fn theme(&self) -> Colour {
        match self {
            AppMode::Lboe => Colour::AQUA,
            AppMode::Gbc => Colour::GREEN,
            AppMode::PicoProject => Colour::ORANGE,
            AppMode::Keybinds => Colour::YELLOW,
            AppMode::PhotonSmash => Colour::MAGENTA,
        }
    }

    pub fn is_puzzle(&self) -> bool {
        *self == AppMode::PhotonSmash
    }
}
