//! Photon Smash, a 4x4 Lights-Out variant.

mod engine;
mod generator;
mod grid;
mod levels;

pub use engine::{PuzzleEngine, PuzzleEvent, PuzzleState};
pub use generator::{generate, Generated, Strategy};
pub use grid::Grid;
pub use levels::{first_unsolvable, PredefinedLevel, PREDEFINED_LEVELS};
