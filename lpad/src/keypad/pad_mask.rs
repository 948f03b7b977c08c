use core::ops::{BitAnd, BitOr, Not};

use super::NUM_PADS;

/// One bit per pad, bit `i` is pad `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PadMask(pub u16);

impl PadMask {
    pub const EMPTY: PadMask = PadMask(0);

    pub const fn single(index: usize) -> Self {
        PadMask(1 << index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index < NUM_PADS && self.0 & (1 << index) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Lowest-indexed pad in the set.
    pub fn first(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let bits = self.0;
        (0..NUM_PADS).filter(move |i| bits & (1 << i) != 0)
    }
}

impl From<u16> for PadMask {
    fn from(bits: u16) -> Self {
        PadMask(bits)
    }
}

impl FromIterator<usize> for PadMask {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        iter.into_iter()
            .filter(|i| *i < NUM_PADS)
            .fold(PadMask::EMPTY, |acc, i| acc | PadMask::single(i))
    }
}

impl BitAnd for PadMask {
    type Output = PadMask;
    fn bitand(self, rhs: Self) -> Self::Output {
        PadMask(self.0 & rhs.0)
    }
}

impl BitOr for PadMask {
    type Output = PadMask;
    fn bitor(self, rhs: Self) -> Self::Output {
        PadMask(self.0 | rhs.0)
    }
}

impl Not for PadMask {
    type Output = PadMask;
    fn not(self) -> Self::Output {
        PadMask(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_is_lowest_index() {
        let mask: PadMask = [9, 3, 12].into_iter().collect();
        assert_eq!(mask.first(), Some(3));
        assert_eq!(PadMask::EMPTY.first(), None);
    }

    #[test]
    fn iter_yields_set_pads_in_order() {
        let mask = PadMask(0b1000_0000_0010_0001);
        let pads: heapless::Vec<usize, 16> = mask.iter().collect();
        assert_eq!(pads.as_slice(), &[0, 5, 15]);
    }
}
