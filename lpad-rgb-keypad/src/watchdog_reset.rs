use cortex_m::peripheral::SCB;
use embedded_hal_0_2::watchdog::{Watchdog as _, WatchdogEnable as _};
use fugit::MicrosDurationU32;
use lpad::reset::ResetController;
use rp_pico::hal::Watchdog;

pub struct WatchdogReset {
    watchdog: Watchdog,
}

impl WatchdogReset {
    pub fn new(mut watchdog: Watchdog) -> Self {
        watchdog.pause_on_debug(true);
        WatchdogReset { watchdog }
    }
}

impl ResetController for WatchdogReset {
    fn restart(&mut self) {
        defmt::info!("restarting");
        SCB::sys_reset();
    }

    fn arm(&mut self, timeout_ms: u32) {
        self.watchdog.start(MicrosDurationU32::millis(timeout_ms));
    }

    fn feed(&mut self) {
        self.watchdog.feed();
    }
}
