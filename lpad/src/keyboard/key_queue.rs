use heapless::Deque;

use crate::log::debug;

use super::{ExternalCommunicator, KeyReport};

/// Outgoing reports, strictly FIFO.
///
/// Every enqueued report is followed by a release report, and the two are
/// accepted or dropped together so a key can never be left pressed.
#[derive(Debug, Clone)]
pub struct KeyQueue<const N: usize> {
    reports: Deque<KeyReport, N>,
}

impl<const N: usize> Default for KeyQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> KeyQueue<N> {
    pub fn new() -> Self {
        KeyQueue {
            reports: Deque::new(),
        }
    }

    /// Returns the report back when there is no room for the pair.
    pub fn enqueue(&mut self, report: KeyReport) -> Result<(), KeyReport> {
        if N - self.reports.len() < 2 {
            debug!("key queue full, dropping report");
            return Err(report);
        }
        self.reports.push_back(report)?;
        self.reports.push_back(KeyReport::release())?;
        Ok(())
    }

    /// Sends the oldest report if the host is ready for it. The report is only
    /// removed once the communicator accepts it.
    pub fn drain<C: ExternalCommunicator>(&mut self, communicator: &C) -> Result<(), C::Error> {
        if !communicator.is_ready() {
            return Ok(());
        }
        if let Some(report) = self.reports.front() {
            communicator.send_report(report)?;
            self.reports.pop_front();
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyReport> {
        self.reports.iter()
    }
}
