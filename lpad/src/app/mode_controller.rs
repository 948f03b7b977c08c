use crate::{
    colour::Colour,
    keyboard::KeyQueue,
    keypad::{Keypad, PadMask},
    log::{info, warn},
    puzzle::{PuzzleEngine, PuzzleEvent, PuzzleState},
    random::Random,
    reset::ResetController,
};

use super::{bindings::Bindings, AppMode};

/// Everything a logic tick hands to the mode controller.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    pub pressed: PadMask,
    pub held: PadMask,
    /// The exit/reset control, separate from the pads.
    pub control_held: bool,
    pub elapsed_ms: u32,
    pub rainbow: Colour,
}

/// Owns the active mode and the puzzle session, if any.
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: AppMode,
    return_mode: AppMode,
    level: u8,
    puzzle: Option<PuzzleEngine>,
    /// Hue of the latest tick, for painting a freshly entered level.
    rainbow: Colour,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    pub const DIM_BRIGHTNESS: f32 = 0.075;
    pub const ACTIVE_BRIGHTNESS: f32 = 0.25;
    pub const LIGHTS_OFF_BRIGHTNESS: f32 = 0.15;
    pub const ACCENT_BRIGHTNESS: f32 = 0.2;

    pub const LIGHTS_OFF_PAD: usize = 7;
    pub const RESET_GUARD_PAD: usize = 12;
    pub const RESET_PAD: usize = 15;

    /// Mode selection pads plus lights-off. Lowest pressed wins.
    const SELECTION_PADS: PadMask = PadMask(0b1001_1111);
    const ACCENT_PADS: PadMask = PadMask(0xff00);

    /// Nothing is painted until the first [`ModeController::transition`].
    pub fn new() -> Self {
        ModeController {
            mode: AppMode::Gbc,
            return_mode: AppMode::Gbc,
            level: 0,
            puzzle: None,
            rainbow: Colour::RED,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Mode the puzzle exits to.
    pub fn return_mode(&self) -> AppMode {
        self.return_mode
    }

    /// Next puzzle level, kept across puzzle sessions.
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn puzzle(&self) -> Option<&PuzzleEngine> {
        self.puzzle.as_ref()
    }

    pub fn transition<K: Keypad, R: Random>(&mut self, mode: AppMode, keypad: &mut K, rng: &mut R) {
        info!("switching to {:?}", mode);
        keypad.clear();

        if mode.is_puzzle() {
            if !self.mode.is_puzzle() {
                self.return_mode = self.mode;
            }
            self.mode = mode;
            self.enter_puzzle(keypad, rng);
        } else {
            self.mode = mode;
            self.puzzle = None;
            self.paint_indicators(keypad);
        }
    }

    fn enter_puzzle<K: Keypad, R: Random>(&mut self, keypad: &mut K, rng: &mut R) {
        let engine = PuzzleEngine::enter(self.level, AppMode::PhotonSmash.theme(), rng);
        if engine.state() == PuzzleState::Game {
            engine.paint(self.rainbow, keypad);
        }
        self.puzzle = Some(engine);
    }

    fn paint_indicators<K: Keypad>(&self, keypad: &mut K) {
        for mode in AppMode::ALL {
            let brightness = if mode == self.mode {
                Self::ACTIVE_BRIGHTNESS
            } else {
                Self::DIM_BRIGHTNESS
            };
            keypad.set_pad(mode.pad(), mode.theme(), brightness);
        }
        keypad.set_pad(
            Self::LIGHTS_OFF_PAD,
            Colour::RED,
            Self::LIGHTS_OFF_BRIGHTNESS,
        );
        for index in Self::ACCENT_PADS.iter() {
            keypad.set_pad(index, self.mode.theme(), Self::ACCENT_BRIGHTNESS);
        }
    }

    pub fn tick<K: Keypad, R: Random, W: ResetController, const N: usize>(
        &mut self,
        input: TickInput,
        keypad: &mut K,
        queue: &mut KeyQueue<N>,
        rng: &mut R,
        reset: &mut W,
    ) {
        self.rainbow = input.rainbow;
        if self.mode.is_puzzle() {
            self.puzzle_tick(input, keypad, rng);
            return;
        }

        if let Some(index) = (input.pressed & Self::ACCENT_PADS).first() {
            if index == Self::RESET_PAD && input.held.contains(Self::RESET_GUARD_PAD) {
                warn!("reset chord");
                reset.restart();
                return;
            }
            if let Some(report) = Bindings::for_mode(self.mode).and_then(|b| b.report(index)) {
                queue.enqueue(report).ok();
            }
        }

        match (input.pressed & Self::SELECTION_PADS).first() {
            Some(Self::LIGHTS_OFF_PAD) => keypad.clear(),
            Some(index) => {
                if let Some(mode) = AppMode::from_pad(index) {
                    self.transition(mode, keypad, rng);
                }
            }
            None => {}
        }
    }

    fn puzzle_tick<K: Keypad, R: Random>(&mut self, input: TickInput, keypad: &mut K, rng: &mut R) {
        if input.control_held {
            self.transition(self.return_mode, keypad, rng);
            return;
        }

        if self.puzzle.is_none() {
            self.enter_puzzle(keypad, rng);
        }
        let Some(engine) = self.puzzle.as_mut() else {
            return;
        };

        match engine.tick(input.pressed, input.elapsed_ms, input.rainbow, keypad) {
            PuzzleEvent::None => {}
            PuzzleEvent::Won { next_level } => self.level = next_level,
            PuzzleEvent::Completed { next_level } => {
                self.level = next_level;
                keypad.clear();
                self.enter_puzzle(keypad, rng);
            }
            PuzzleEvent::Exit => self.transition(self.return_mode, keypad, rng),
        }
    }
}
