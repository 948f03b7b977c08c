use super::PadMask;

/// Turns the held set into the set of pads that went down since the last sample.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    previous: PadMask,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, held: PadMask) -> PadMask {
        let pressed = held & !self.previous;
        self.previous = held;
        pressed
    }

    /// Held set as of the last sample.
    pub fn held(&self) -> PadMask {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_rising_edges_only() {
        let mut sampler = InputSampler::new();
        assert_eq!(sampler.sample(PadMask(0b0101)), PadMask(0b0101));
        // still held: nothing new
        assert_eq!(sampler.sample(PadMask(0b0101)), PadMask::EMPTY);
        // 0 released, 1 pressed
        assert_eq!(sampler.sample(PadMask(0b0110)), PadMask(0b0010));
        assert_eq!(sampler.held(), PadMask(0b0110));
    }

    #[test]
    fn release_and_press_again_counts_twice() {
        let mut sampler = InputSampler::new();
        assert_eq!(sampler.sample(PadMask::single(7)), PadMask::single(7));
        assert_eq!(sampler.sample(PadMask::EMPTY), PadMask::EMPTY);
        assert_eq!(sampler.sample(PadMask::single(7)), PadMask::single(7));
    }
}
