use core::fmt::Debug;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<K: 'static + Debug, C: 'static + Debug> {
    Keypad {
        #[cfg_attr(feature = "defmt", defmt(Debug2Format))]
        source: K,
    },
    Transport {
        #[cfg_attr(feature = "defmt", defmt(Debug2Format))]
        source: C,
    },
}
