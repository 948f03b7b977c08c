use crate::keypad::{PadMask, NUM_PADS, WIDTH};

/// Logical state of the 16 cells, bit `i` set when cell `i` is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grid(u16);

impl Grid {
    pub const DARK: Grid = Grid(0);

    pub const fn from_bits(bits: u16) -> Self {
        Grid(bits)
    }

    pub fn from_lit(lit: &[u8]) -> Self {
        let mut grid = Grid::DARK;
        lit.iter()
            .map(|i| *i as usize)
            .filter(|i| *i < NUM_PADS)
            .for_each(|i| grid.set(i, true));
        grid
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    pub fn is_lit(&self, index: usize) -> bool {
        index < NUM_PADS && self.0 & (1 << index) != 0
    }

    pub fn set(&mut self, index: usize, lit: bool) {
        if index >= NUM_PADS {
            return;
        }
        if lit {
            self.0 |= 1 << index;
        } else {
            self.0 &= !(1 << index);
        }
    }

    /// Cells flipped by pressing `index`: the cell itself and its orthogonal
    /// neighbours that exist.
    pub fn toggle_mask(index: usize) -> u16 {
        if index >= NUM_PADS {
            return 0;
        }
        let mut mask = 1 << index;
        // top edge
        if index >= WIDTH {
            mask |= 1 << (index - WIDTH);
        }
        // bottom edge
        if index < NUM_PADS - WIDTH {
            mask |= 1 << (index + WIDTH);
        }
        // left edge
        if index % WIDTH != 0 {
            mask |= 1 << (index - 1);
        }
        // right edge
        if (index + 1) % WIDTH != 0 {
            mask |= 1 << (index + 1);
        }
        mask
    }

    pub fn toggle(&mut self, index: usize) {
        self.0 ^= Self::toggle_mask(index);
    }

    pub fn lit(&self) -> PadMask {
        PadMask(self.0)
    }

    pub fn lit_count(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_dark(&self) -> bool {
        self.0 == 0
    }

    /// Chases every lit cell of rows 0-2 down by pressing the cell below it.
    /// On a 4x4 board the grid can be cleared exactly when nothing is left
    /// over in the bottom row afterwards.
    pub fn is_solvable(&self) -> bool {
        let mut chased = *self;
        for index in WIDTH..NUM_PADS {
            if chased.is_lit(index - WIDTH) {
                chased.toggle(index);
            }
        }
        chased.is_dark()
    }

    /// Solvable and not already won.
    pub fn is_playable(&self) -> bool {
        !self.is_dark() && self.is_solvable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_orthogonal_neighbours() {
        let mut grid = Grid::from_lit(&[5]);
        grid.toggle(5);
        assert_eq!(grid, Grid::from_lit(&[1, 4, 6, 9]));
        assert!(!grid.is_dark());
    }

    #[test]
    fn corner_and_edge_masks() {
        assert_eq!(Grid::toggle_mask(0), Grid::from_lit(&[0, 1, 4]).bits());
        assert_eq!(Grid::toggle_mask(3), Grid::from_lit(&[2, 3, 7]).bits());
        assert_eq!(Grid::toggle_mask(12), Grid::from_lit(&[8, 12, 13]).bits());
        assert_eq!(Grid::toggle_mask(15), Grid::from_lit(&[11, 14, 15]).bits());
        assert_eq!(Grid::toggle_mask(7), Grid::from_lit(&[3, 6, 7, 11]).bits());
        assert_eq!(Grid::toggle_mask(16), 0);
    }

    #[test]
    fn toggle_is_self_inverse() {
        for bits in [0u16, 0xffff, 0x1234, 0x8001, 0x0ff0] {
            for index in 0..NUM_PADS {
                let mut grid = Grid::from_bits(bits);
                grid.toggle(index);
                grid.toggle(index);
                assert_eq!(grid, Grid::from_bits(bits));
            }
        }
    }

    #[test]
    fn solvable_matches_exhaustive_search() {
        // every grid reachable from dark by some set of presses
        let mut reachable = std::vec![false; 1 << NUM_PADS];
        for presses in 0..(1u32 << NUM_PADS) {
            let bits = (0..NUM_PADS)
                .filter(|i| presses & (1 << i) != 0)
                .fold(0u16, |acc, i| acc ^ Grid::toggle_mask(i));
            reachable[bits as usize] = true;
        }

        for bits in 0..=u16::MAX {
            assert_eq!(
                Grid::from_bits(bits).is_solvable(),
                reachable[bits as usize],
                "grid {:#06x}",
                bits
            );
        }
        assert_eq!(reachable.iter().filter(|r| **r).count(), 4096);
    }

    #[test]
    fn single_lit_cell_is_not_solvable() {
        assert!(!Grid::from_lit(&[5]).is_solvable());
    }

    #[test]
    fn dark_grid_is_solvable_but_not_playable() {
        assert!(Grid::DARK.is_solvable());
        assert!(!Grid::DARK.is_playable());
    }
}
