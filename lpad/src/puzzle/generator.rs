use crate::{keypad::NUM_PADS, log::debug, random::Random};

use super::{levels::PREDEFINED_LEVELS, Grid};

/// Ways of producing a level, tried in [`Strategy::FALLBACK_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Strategy {
    /// Light a handful of distinct cells directly.
    Scatter,
    /// Press random cells starting from dark.
    Presses,
    /// A short chain of presses, usually two or three.
    Chain,
    /// Borrow a curated level.
    Curated,
}

impl Strategy {
    pub const FALLBACK_ORDER: [Strategy; 4] = [
        Strategy::Scatter,
        Strategy::Presses,
        Strategy::Chain,
        Strategy::Curated,
    ];

    const MAX_SCATTERED: u32 = 15;
    const MAX_PRESSES: u32 = 50;
    const PRESS_ATTEMPTS: usize = 4;
    /// Chance of each extra link after the first two presses of a chain.
    const CHAIN_ODDS: [u8; 4] = [50, 25, 5, 1];

    pub fn generate<R: Random>(self, level: u8, rng: &mut R) -> Grid {
        match self {
            Strategy::Scatter => scatter(level, rng),
            Strategy::Presses => presses(level, rng),
            Strategy::Chain => chain(rng),
            Strategy::Curated => {
                let index = rng.irandom(PREDEFINED_LEVELS.len() as u32 - 1) as usize;
                PREDEFINED_LEVELS[index].grid()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Generated {
    pub grid: Grid,
    pub strategy: Strategy,
    /// `false` only when every strategy failed; the caller must not start a
    /// game on this grid.
    pub playable: bool,
}

pub fn generate<R: Random>(level: u8, rng: &mut R) -> Generated {
    let mut last = Generated {
        grid: Grid::DARK,
        strategy: Strategy::Curated,
        playable: false,
    };
    for strategy in Strategy::FALLBACK_ORDER {
        let grid = strategy.generate(level, rng);
        if grid.is_playable() {
            debug!("level {} generated by {:?}", level, strategy);
            return Generated {
                grid,
                strategy,
                playable: true,
            };
        }
        last = Generated {
            grid,
            strategy,
            playable: false,
        };
    }
    last
}

fn scatter<R: Random>(level: u8, rng: &mut R) -> Grid {
    let level = level as u32;
    let count = rng
        .irandom_range(1 + level / 10, level / 3)
        .min(Strategy::MAX_SCATTERED);

    let mut positions: [u8; NUM_PADS] = core::array::from_fn(|i| i as u8);
    let mut remaining = NUM_PADS;
    let mut grid = Grid::DARK;
    for _ in 0..count {
        let r = rng.irandom(remaining as u32 - 1) as usize;
        grid.set(positions[r] as usize, true);
        positions[r] = positions[remaining - 1];
        remaining -= 1;
    }
    grid
}

fn presses<R: Random>(level: u8, rng: &mut R) -> Grid {
    let level = level as u32;
    let mut grid = Grid::DARK;
    for _ in 0..Strategy::PRESS_ATTEMPTS {
        let count = rng
            .irandom_range(1 + level, level * 2)
            .min(Strategy::MAX_PRESSES);
        grid = Grid::DARK;
        for _ in 0..count {
            grid.toggle(rng.irandom(NUM_PADS as u32 - 1) as usize);
        }
        if !grid.is_dark() {
            break;
        }
    }
    grid
}

fn chain<R: Random>(rng: &mut R) -> Grid {
    let pads = NUM_PADS as u32;
    let mut grid = Grid::DARK;
    let mut position = rng.irandom(pads - 1);
    grid.toggle(position as usize);

    let mut step = |grid: &mut Grid, rng: &mut R| {
        position = (position + rng.irandom(pads - 2)) % pads;
        grid.toggle(position as usize);
    };
    step(&mut grid, rng);
    for chance in Strategy::CHAIN_ODDS {
        if !rng.proc(chance) {
            break;
        }
        step(&mut grid, rng);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random::XorShift, testing::ScriptedRandom};

    #[test]
    fn every_level_ends_playable() {
        let mut rng = XorShift::new(0x5eed);
        for level in 0..=u8::MAX {
            for _ in 0..8 {
                let generated = generate(level, &mut rng);
                assert!(generated.playable);
                assert!(generated.grid.is_solvable());
                assert!(generated.grid.lit_count() >= 1);
            }
        }
    }

    #[test]
    fn scatter_lights_distinct_cells() {
        // count draw, then three position draws that would collide without the swap
        let mut rng = ScriptedRandom::new(&[2, 0, 0, 0]);
        let grid = Strategy::Scatter.generate(9, &mut rng);
        assert_eq!(grid.lit_count(), 3);
        assert_eq!(grid, Grid::from_lit(&[0, 15, 14]));
    }

    #[test]
    fn scatter_is_capped() {
        let mut rng = XorShift::new(99);
        for _ in 0..50 {
            assert!(Strategy::Scatter.generate(u8::MAX, &mut rng).lit_count() <= 15);
        }
    }

    #[test]
    fn presses_are_solvable_by_construction() {
        let mut rng = XorShift::new(7);
        for level in [11u8, 40, 120, 255] {
            for _ in 0..32 {
                assert!(Strategy::Presses.generate(level, &mut rng).is_solvable());
            }
        }
    }

    #[test]
    fn chain_stops_when_odds_fail() {
        // start at 2, step +3 to 5, then the 50% link fails
        let mut rng = ScriptedRandom::new(&[2, 3, 99]);
        let grid = Strategy::Chain.generate(20, &mut rng);
        let mut expected = Grid::DARK;
        expected.toggle(2);
        expected.toggle(5);
        assert_eq!(grid, expected);
    }

    #[test]
    fn chain_that_cancels_out_falls_through() {
        // scatter: two cells in opposite corners, which cannot be cleared.
        // presses: four attempts of twelve presses on pad 0.
        // chain: 4 then +0 lands on 4 again, odds fail. curated: level 0.
        let mut script = std::vec![0u32; 3];
        for _ in 0..4 {
            script.extend_from_slice(&[0; 13]);
        }
        script.extend_from_slice(&[4, 0, 99, 0]);
        let mut rng = ScriptedRandom::new(&script);

        let generated = generate(11, &mut rng);
        assert_eq!(generated.strategy, Strategy::Curated);
        assert!(generated.playable);
        assert_eq!(generated.grid, PREDEFINED_LEVELS[0].grid());
    }
}
