/// Watchdog-backed restart control.
pub trait ResetController {
    /// Restart the whole system now.
    fn restart(&mut self);

    /// (Re)start the forced-restart countdown with a new timeout.
    fn arm(&mut self, timeout_ms: u32);

    /// Service the countdown.
    fn feed(&mut self);
}

/// Manual reset gesture: while the control is held the watchdog gets a long
/// timeout and is no longer fed, so holding it long enough restarts the system.
#[derive(Debug, Clone)]
pub struct ResetGesture {
    holding: bool,
    timeout_ms: u32,
    hold_timeout_ms: u32,
}

impl ResetGesture {
    pub fn new(timeout_ms: u32, hold_timeout_ms: u32) -> Self {
        ResetGesture {
            holding: false,
            timeout_ms,
            hold_timeout_ms,
        }
    }

    pub fn start<W: ResetController>(&mut self, reset: &mut W) {
        self.holding = false;
        reset.arm(self.timeout_ms);
        reset.feed();
    }

    /// Call once per logic tick.
    pub fn service<W: ResetController>(&mut self, control_held: bool, reset: &mut W) {
        if !self.holding {
            if control_held {
                self.holding = true;
                reset.arm(self.hold_timeout_ms);
            }
            reset.feed();
        } else if !control_held {
            self.holding = false;
            reset.arm(self.timeout_ms);
            reset.feed();
        }
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockReset, ResetCall};

    #[test]
    fn holding_stops_feeding() {
        let mut reset = MockReset::default();
        let mut gesture = ResetGesture::new(200, 2000);
        gesture.start(&mut reset);
        gesture.service(false, &mut reset);
        assert_eq!(
            reset.calls.as_slice(),
            &[ResetCall::Arm(200), ResetCall::Feed, ResetCall::Feed]
        );
        reset.calls.clear();

        gesture.service(true, &mut reset);
        gesture.service(true, &mut reset);
        gesture.service(true, &mut reset);
        assert!(gesture.is_holding());
        // one last feed right after arming the long timeout, then silence
        assert_eq!(
            reset.calls.as_slice(),
            &[ResetCall::Arm(2000), ResetCall::Feed]
        );
    }

    #[test]
    fn release_rearms_normal_timeout() {
        let mut reset = MockReset::default();
        let mut gesture = ResetGesture::new(200, 2000);
        gesture.service(true, &mut reset);
        reset.calls.clear();

        gesture.service(false, &mut reset);
        assert!(!gesture.is_holding());
        assert_eq!(
            reset.calls.as_slice(),
            &[ResetCall::Arm(200), ResetCall::Feed]
        );
    }
}
