//! Collaborator doubles for unit tests.

use core::cell::{Cell, RefCell};
use std::vec::Vec;

use crate::{
    colour::Colour,
    keyboard::{ExternalCommunicator, KeyReport},
    keypad::{Keypad, PadMask, NUM_PADS},
    random::Random,
    reset::ResetController,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

#[derive(Debug, Default)]
pub struct MockKeypad {
    pub pads: [(Colour, f32); NUM_PADS],
    pub held: PadMask,
    pub fail_read: bool,
    pub flushes: usize,
}

impl MockKeypad {
    /// Pads with a non-zero brightness.
    pub fn lit(&self) -> PadMask {
        self.pads
            .iter()
            .enumerate()
            .filter(|(_, (_, brightness))| *brightness > 0.0)
            .map(|(index, _)| index)
            .collect()
    }
}

impl Keypad for MockKeypad {
    type Error = MockError;

    fn held(&mut self) -> Result<PadMask, MockError> {
        if self.fail_read {
            Err(MockError)
        } else {
            Ok(self.held)
        }
    }

    fn set_pad(&mut self, index: usize, colour: Colour, brightness: f32) {
        if let Some(pad) = self.pads.get_mut(index) {
            *pad = (colour, brightness.clamp(0.0, 1.0));
        }
    }

    fn flush(&mut self) -> Result<(), MockError> {
        self.flushes += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockCommunicator {
    pub ready: bool,
    pub sent: RefCell<Vec<KeyReport>>,
    pub fail_next: Cell<bool>,
}

impl MockCommunicator {
    pub fn ready() -> Self {
        MockCommunicator {
            ready: true,
            ..Default::default()
        }
    }
}

impl ExternalCommunicator for MockCommunicator {
    type Error = MockError;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn send_report(&self, report: &KeyReport) -> Result<(), MockError> {
        if self.fail_next.replace(false) {
            return Err(MockError);
        }
        self.sent.borrow_mut().push(*report);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCall {
    Restart,
    Arm(u32),
    Feed,
}

#[derive(Debug, Default)]
pub struct MockReset {
    pub calls: Vec<ResetCall>,
}

impl MockReset {
    pub fn restarts(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == ResetCall::Restart)
            .count()
    }
}

impl ResetController for MockReset {
    fn restart(&mut self) {
        self.calls.push(ResetCall::Restart);
    }

    fn arm(&mut self, timeout_ms: u32) {
        self.calls.push(ResetCall::Arm(timeout_ms));
    }

    fn feed(&mut self) {
        self.calls.push(ResetCall::Feed);
    }
}

/// Replays `script` from `next_u32`, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<u32>,
    position: usize,
}

impl ScriptedRandom {
    pub fn new(script: &[u32]) -> Self {
        assert!(!script.is_empty());
        ScriptedRandom {
            script: script.to_vec(),
            position: 0,
        }
    }
}

impl Random for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value
    }
}
