use crate::{
    colour::Colour,
    keypad::{Keypad, PadMask, NUM_PADS},
    log::{debug, info, warn},
    random::Random,
};

use super::{
    generator::{self, Strategy},
    levels::PREDEFINED_LEVELS,
    Grid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PuzzleState {
    Game,
    WinAnimation,
    UnsolvableAnimation,
}

/// What the mode controller has to do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PuzzleEvent {
    None,
    /// The grid was just cleared. The win animation starts.
    Won { next_level: u8 },
    /// The win animation is over, start the next level.
    Completed { next_level: u8 },
    /// Leave the puzzle for the mode it was entered from.
    Exit,
}

/// One puzzle session: a level from entry until it is won or abandoned.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    grid: Grid,
    level: u8,
    colour: Colour,
    brightness: f32,
    rainbow: bool,
    state: PuzzleState,
    animation_ms: u32,
    strategy: Option<Strategy>,
}

impl PuzzleEngine {
    pub const WIN_ANIMATION_MS: u32 = 1000;
    pub const UNSOLVABLE_ANIMATION_MS: u32 = 1500;
    pub const FLASH_PERIOD_MS: u32 = 250;
    pub const ANIMATION_BRIGHTNESS: f32 = 0.5;
    pub const PREDEFINED_BRIGHTNESS: f32 = 0.75;
    pub const GENERATED_BRIGHTNESS: f32 = 0.65;
    pub const RAINBOW_CHANCE: u8 = 6;

    /// Loads `level`: curated while the table lasts, generated afterwards.
    /// `fallback` replaces a black session colour.
    pub fn enter<R: Random>(level: u8, fallback: Colour, rng: &mut R) -> Self {
        let mut colour = Colour::new(
            rng.irandom(Colour::MAX as u32) as u8,
            rng.irandom(Colour::MAX as u32) as u8,
            rng.irandom(Colour::MAX as u32) as u8,
        );
        if colour.is_black() {
            colour = fallback;
        }

        let (grid, brightness, strategy, playable) =
            match PREDEFINED_LEVELS.get(level as usize) {
                Some(predefined) => {
                    let grid = predefined.grid();
                    (grid, Self::PREDEFINED_BRIGHTNESS, None, grid.is_playable())
                }
                None => {
                    let generated = generator::generate(level, rng);
                    (
                        generated.grid,
                        Self::GENERATED_BRIGHTNESS,
                        Some(generated.strategy),
                        generated.playable,
                    )
                }
            };

        let state = if playable {
            info!("photon smash level {}", level);
            PuzzleState::Game
        } else {
            warn!("photon smash level {} cannot be solved", level);
            PuzzleState::UnsolvableAnimation
        };

        PuzzleEngine {
            grid,
            level,
            colour,
            brightness,
            rainbow: rng.proc(Self::RAINBOW_CHANCE),
            state,
            animation_ms: 0,
            strategy,
        }
    }

    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn is_rainbow(&self) -> bool {
        self.rainbow
    }

    /// `None` for curated levels.
    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Applies the toggle at `index`. Returns `true` when that cleared the grid.
    /// Ignored outside of [`PuzzleState::Game`].
    pub fn press(&mut self, index: usize) -> bool {
        if self.state != PuzzleState::Game || index >= NUM_PADS {
            return false;
        }
        self.grid.toggle(index);
        debug!("pressed {}, {} lit", index, self.grid.lit_count());

        if self.grid.is_dark() {
            info!("photon smash level {} cleared", self.level);
            self.state = PuzzleState::WinAnimation;
            self.level = self.level.saturating_add(1);
            self.animation_ms = 0;
            return true;
        }
        false
    }

    /// Per logic tick. `rainbow` is the shared cycling hue.
    pub fn tick<K: Keypad>(
        &mut self,
        pressed: PadMask,
        elapsed_ms: u32,
        rainbow: Colour,
        keypad: &mut K,
    ) -> PuzzleEvent {
        match self.state {
            PuzzleState::Game => {
                if let Some(index) = pressed.first() {
                    if self.press(index) {
                        keypad.clear();
                        return PuzzleEvent::Won {
                            next_level: self.level,
                        };
                    }
                }
                self.paint(rainbow, keypad);
                PuzzleEvent::None
            }
            PuzzleState::WinAnimation => {
                if self.animate(elapsed_ms, Colour::GREEN, Colour::WHITE, keypad)
                    >= Self::WIN_ANIMATION_MS
                {
                    PuzzleEvent::Completed {
                        next_level: self.level,
                    }
                } else {
                    PuzzleEvent::None
                }
            }
            PuzzleState::UnsolvableAnimation => {
                if self.animate(elapsed_ms, Colour::RED, Colour::YELLOW, keypad)
                    >= Self::UNSOLVABLE_ANIMATION_MS
                {
                    PuzzleEvent::Exit
                } else {
                    PuzzleEvent::None
                }
            }
        }
    }

    /// Paints the grid: lit cells in the session colour (or `rainbow`), the rest off.
    pub fn paint<K: Keypad>(&self, rainbow: Colour, keypad: &mut K) {
        let colour = if self.rainbow { rainbow } else { self.colour };
        for index in 0..NUM_PADS {
            if self.grid.is_lit(index) {
                keypad.set_pad(index, colour, self.brightness);
            } else {
                keypad.set_pad(index, self.colour, 0.0);
            }
        }
    }

    fn animate<K: Keypad>(
        &mut self,
        elapsed_ms: u32,
        odd: Colour,
        even: Colour,
        keypad: &mut K,
    ) -> u32 {
        self.animation_ms += elapsed_ms;
        let colour = if (self.animation_ms / Self::FLASH_PERIOD_MS) & 1 == 1 {
            odd
        } else {
            even
        };
        keypad.fill(colour, Self::ANIMATION_BRIGHTNESS);
        self.animation_ms
    }
}
