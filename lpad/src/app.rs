mod app_mode;
mod bindings;
mod config;
mod error;
mod mode_controller;
mod ticker;

use core::fmt::Debug;

pub use app_mode::AppMode;
pub use bindings::Bindings;
pub use config::Config;
pub use error::Error;
pub use mode_controller::{ModeController, TickInput};
pub use ticker::Ticker;

use crate::{
    colour::{Colour, Rainbow},
    keyboard::{ExternalCommunicator, KeyQueue},
    keypad::{InputSampler, Keypad},
    log::{info, warn},
    puzzle::first_unsolvable,
    random::Random,
    reset::{ResetController, ResetGesture},
};

pub const KEY_QUEUE_CAPACITY: usize = 16;

/// The whole firmware state, owned by the board's main loop.
pub struct App<K: Keypad, C: ExternalCommunicator, R: Random, W: ResetController> {
    pub keypad: K,
    pub communicator: C,
    rng: R,
    reset: W,
    config: Config,
    sampler: InputSampler,
    queue: KeyQueue<KEY_QUEUE_CAPACITY>,
    modes: ModeController,
    rainbow: Rainbow,
    gesture: ResetGesture,
    hid_ticker: Ticker,
    update_ticker: Ticker,
    last_millis: Option<u32>,
}

impl<K, C, R, W> App<K, C, R, W>
where
    K: Keypad,
    K::Error: Debug + 'static,
    C: ExternalCommunicator,
    C::Error: Debug + 'static,
    R: Random,
    W: ResetController,
{
    pub fn new(keypad: K, communicator: C, rng: R, reset: W, config: Config) -> Self {
        App {
            keypad,
            communicator,
            rng,
            reset,
            sampler: InputSampler::new(),
            queue: KeyQueue::new(),
            modes: ModeController::new(),
            rainbow: Rainbow::new(config.rainbow_rate),
            gesture: ResetGesture::new(config.watchdog_timeout_ms, config.reset_hold_timeout_ms),
            hid_ticker: Ticker::new(config.hid_interval_ms),
            update_ticker: Ticker::new(config.update_interval_ms),
            last_millis: None,
            config,
        }
    }

    /// Paints the initial mode and arms the watchdog. Call once, right before
    /// the loop starts polling.
    pub fn start(&mut self) -> Result<(), Error<K::Error, C::Error>> {
        info!("lpad starting");
        self.modes
            .transition(self.config.initial_mode, &mut self.keypad, &mut self.rng);

        if cfg!(debug_assertions) {
            if let Some(index) = first_unsolvable() {
                warn!("curated level {} cannot be solved", index);
                self.keypad.clear();
                self.keypad.set_pad(index, Colour::YELLOW, 1.0);
            }
        }

        self.gesture.start(&mut self.reset);
        self.keypad
            .flush()
            .map_err(|source| Error::Keypad { source })
    }

    /// One loop iteration. Runs whichever ticks are due and reports the first
    /// collaborator failure; the state is left consistent either way.
    pub fn poll(
        &mut self,
        now_millis: u32,
        control_held: bool,
    ) -> Result<(), Error<K::Error, C::Error>> {
        let elapsed = match self.last_millis {
            Some(last) => now_millis.wrapping_sub(last),
            None => 0,
        };
        self.last_millis = Some(now_millis);

        let mut result = Ok(());
        if self.hid_ticker.advance(elapsed) {
            result = self.hid_tick();
        }
        if self.update_ticker.advance(elapsed) {
            let updated = self.update(control_held);
            result = result.and(updated);
        }
        result
    }

    /// Sends at most one queued report.
    pub fn hid_tick(&mut self) -> Result<(), Error<K::Error, C::Error>> {
        self.queue
            .drain(&self.communicator)
            .map_err(|source| Error::Transport { source })
    }

    /// Logic tick: watchdog, input, modes and the LED frame.
    pub fn update(&mut self, control_held: bool) -> Result<(), Error<K::Error, C::Error>> {
        self.gesture.service(control_held, &mut self.reset);
        self.rainbow.advance();

        let (held, read) = match self.keypad.held() {
            Ok(held) => (held, Ok(())),
            Err(source) => (self.sampler.held(), Err(Error::Keypad { source })),
        };
        let pressed = self.sampler.sample(held);

        let input = TickInput {
            pressed,
            held,
            control_held,
            elapsed_ms: self.update_ticker.period_ms(),
            rainbow: self.rainbow.colour(),
        };
        self.modes.tick(
            input,
            &mut self.keypad,
            &mut self.queue,
            &mut self.rng,
            &mut self.reset,
        );

        let flushed = self
            .keypad
            .flush()
            .map_err(|source| Error::Keypad { source });
        read.and(flushed)
    }

    pub fn mode(&self) -> AppMode {
        self.modes.mode()
    }

    pub fn modes(&self) -> &ModeController {
        &self.modes
    }

    pub fn reset(&self) -> &W {
        &self.reset
    }

    pub fn queued_reports(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        keyboard::KeyReport,
        keypad::PadMask,
        puzzle::PREDEFINED_LEVELS,
        random::XorShift,
        testing::{MockCommunicator, MockKeypad, MockReset, ResetCall},
    };

    type TestApp = App<MockKeypad, MockCommunicator, XorShift, MockReset>;

    fn app() -> TestApp {
        let mut app = App::new(
            MockKeypad::default(),
            MockCommunicator::ready(),
            XorShift::new(11),
            MockReset::default(),
            Config::default(),
        );
        app.start().unwrap();
        app
    }

    #[test]
    fn starts_in_gbc_with_watchdog_armed() {
        let app = app();
        assert_eq!(app.mode(), AppMode::Gbc);
        assert_eq!(app.keypad.pads[1].1, ModeController::ACTIVE_BRIGHTNESS);
        assert_eq!(app.keypad.flushes, 1);
        assert_eq!(app.reset.calls[..2], [ResetCall::Arm(200), ResetCall::Feed]);
    }

    #[test]
    fn first_poll_runs_both_ticks() {
        let mut app = app();
        app.poll(1000, false).unwrap();
        assert_eq!(app.keypad.flushes, 2);
        assert_eq!(app.reset.calls.last(), Some(&ResetCall::Feed));
    }

    #[test]
    fn ticks_follow_their_periods() {
        let mut app = app();
        app.poll(0, false).unwrap();
        app.keypad.held = PadMask::single(8);
        // 8ms: hid only
        app.poll(8, false).unwrap();
        assert_eq!(app.queued_reports(), 0);
        // 16ms: logic tick queues the pair
        app.poll(16, false).unwrap();
        assert_eq!(app.queued_reports(), 2);
        // 24ms and 32ms drain one each
        app.poll(24, false).unwrap();
        app.poll(32, false).unwrap();
        assert!(app.communicator.sent.borrow()[1].is_release());
        assert_eq!(app.queued_reports(), 0);
    }

    #[test]
    fn held_pad_fires_once() {
        let mut app = app();
        app.keypad.held = PadMask::single(9);
        let mut now = 0;
        for _ in 0..20 {
            app.poll(now, false).unwrap();
            now += 8;
        }
        let sent = app.communicator.sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].keys[0], 0x69);
        assert_eq!(sent[1], KeyReport::release());
    }

    #[test]
    fn transport_errors_surface_and_retry() {
        let mut app = app();
        app.keypad.held = PadMask::single(8);
        app.update(false).unwrap();

        app.communicator.fail_next.set(true);
        assert!(matches!(app.hid_tick(), Err(Error::Transport { .. })));
        app.hid_tick().unwrap();
        assert_eq!(app.communicator.sent.borrow().len(), 1);
        assert_eq!(app.queued_reports(), 1);
    }

    #[test]
    fn keypad_read_failure_keeps_previous_state() {
        let mut app = app();
        app.keypad.held = PadMask::single(8);
        app.update(false).unwrap();

        app.keypad.fail_read = true;
        assert!(matches!(app.update(false), Err(Error::Keypad { .. })));
        app.keypad.fail_read = false;
        // still held: no second press
        app.update(false).unwrap();
        assert_eq!(app.queued_reports(), 2);
    }

    #[test]
    fn holding_control_stops_feeding_the_watchdog() {
        let mut app = app();
        app.reset.calls.clear();
        for _ in 0..5 {
            app.update(true).unwrap();
        }
        assert_eq!(app.reset.calls, [ResetCall::Arm(2000), ResetCall::Feed]);

        app.update(false).unwrap();
        assert_eq!(app.reset.calls[2..], [ResetCall::Arm(200), ResetCall::Feed]);
    }

    #[test]
    fn control_exits_the_puzzle() {
        let mut app = app();
        app.keypad.held = PadMask::single(4);
        app.update(false).unwrap();
        assert_eq!(app.mode(), AppMode::PhotonSmash);

        app.keypad.held = PadMask::EMPTY;
        app.update(false).unwrap();
        assert_eq!(app.keypad.lit(), PREDEFINED_LEVELS[0].grid().lit());

        app.update(true).unwrap();
        assert_eq!(app.mode(), AppMode::Gbc);
    }
}
