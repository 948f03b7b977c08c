use super::Grid;

/// Hand-authored starting layout.
#[derive(Debug, Clone, Copy)]
pub struct PredefinedLevel {
    pub lights: &'static [u8],
}

impl PredefinedLevel {
    pub fn grid(&self) -> Grid {
        Grid::from_lit(self.lights)
    }
}

pub const PREDEFINED_LEVELS: [PredefinedLevel; 11] = [
    PredefinedLevel {
        lights: &[1, 4, 5, 6, 9],
    },
    PredefinedLevel {
        lights: &[0, 3, 12, 15],
    },
    PredefinedLevel {
        lights: &[3, 6, 9, 12],
    },
    PredefinedLevel {
        lights: &[5, 6, 9, 10],
    },
    PredefinedLevel {
        lights: &[4, 8, 11, 13, 15],
    },
    PredefinedLevel {
        lights: &[0, 5, 10, 15],
    },
    PredefinedLevel {
        lights: &[1, 2, 4, 5, 6, 7],
    },
    PredefinedLevel {
        lights: &[1, 2, 5, 6, 9, 10, 13, 14],
    },
    PredefinedLevel {
        lights: &[0, 1, 2, 3, 4, 7, 8, 11, 12, 13, 14, 15],
    },
    PredefinedLevel {
        lights: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 14, 15],
    },
    PredefinedLevel {
        lights: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    },
];

/// Index of the first curated level that cannot be cleared, if any.
pub fn first_unsolvable() -> Option<usize> {
    PREDEFINED_LEVELS
        .iter()
        .position(|level| !level.grid().is_playable())
}
