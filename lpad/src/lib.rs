#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod colour;
pub mod keyboard;
pub mod keypad;
pub mod puzzle;
pub mod random;
pub mod reset;
pub mod usb;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(feature = "defmt")]
pub(crate) mod log {
    pub use defmt::{debug, info, warn};
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
pub(crate) mod log {
    pub use ::log::{debug, info, warn};
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
pub(crate) mod log {
    macro_rules! discard {
        ($($arg:tt)*) => {{
            let _ = core::format_args!($($arg)*);
        }};
    }
    pub(crate) use {discard as debug, discard as info, discard as warn};
}
