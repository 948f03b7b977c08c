use super::AppMode;

/// Loop timings and startup behaviour. Fixed at build time by the board crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Period of the fast tick that drains one report to the host.
    pub hid_interval_ms: u32,
    /// Period of the logic tick: input, modes, puzzle, LEDs and the watchdog.
    pub update_interval_ms: u32,
    pub watchdog_timeout_ms: u32,
    /// Watchdog timeout while the control is held down.
    pub reset_hold_timeout_ms: u32,
    /// Logic ticks per rainbow hue step.
    pub rainbow_rate: u8,
    pub initial_mode: AppMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            hid_interval_ms: 8,
            update_interval_ms: 16,
            watchdog_timeout_ms: 200,
            reset_hold_timeout_ms: 2000,
            rainbow_rate: 1,
            initial_mode: AppMode::Gbc,
        }
    }
}
