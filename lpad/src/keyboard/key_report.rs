use super::{Key, Modifiers};

/// One boot keyboard report: a modifier byte and up to six keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyReport {
    pub modifiers: Modifiers,
    pub keys: [u8; 6],
}

impl KeyReport {
    pub const ROLLOVER: usize = 6;

    /// All keys released.
    pub const fn release() -> Self {
        KeyReport {
            modifiers: Modifiers::NONE,
            keys: [0; 6],
        }
    }

    pub fn single(modifiers: Modifiers, key: Key) -> Self {
        Self::new(modifiers, &[key])
    }

    /// Keys beyond the rollover limit are dropped.
    pub fn new(modifiers: Modifiers, keys: &[Key]) -> Self {
        let mut report = KeyReport {
            modifiers,
            keys: [0; 6],
        };
        keys.iter()
            .filter(|key| !key.is_noop())
            .map(Key::key_code)
            .take(Self::ROLLOVER)
            .enumerate()
            .for_each(|(i, c)| report.keys[i] = c);
        report
    }

    pub fn is_release(&self) -> bool {
        *self == Self::release()
    }

    /// `[modifiers, reserved, key0..key5]`
    pub fn to_bytes(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[0] = self.modifiers.bits();
        bytes[2..].copy_from_slice(&self.keys);
        bytes
    }
}
