/// Fixed-rate accumulator over a millisecond clock.
///
/// Fires at most once per [`Ticker::advance`] and keeps the remainder, so a
/// late iteration is caught up over the following ones.
#[derive(Debug, Clone)]
pub struct Ticker {
    period_ms: u32,
    elapsed_ms: u32,
}

impl Ticker {
    /// Starts due, so the first iteration ticks.
    pub fn new(period_ms: u32) -> Self {
        Ticker {
            period_ms,
            elapsed_ms: period_ms,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn advance(&mut self, delta_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        if self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            true
        } else {
            false
        }
    }
}
