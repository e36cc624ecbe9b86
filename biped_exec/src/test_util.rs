//! Test doubles for the bus and the pacer.

use std::time::Duration;

use servo_if::{BusError, Command, ServoBus};

use crate::dispatch::Pacer;

/// Bus recording every accepted command, optionally failing on one transmit call.
#[derive(Default)]
pub struct MockBus {
    /// Commands accepted by the bus.
    pub sent: Vec<Command>,

    /// Number of calls to `transmit`, including failed ones.
    pub transmits: usize,

    /// Number of calls to `disconnect`.
    pub disconnects: usize,

    fail_at: Option<usize>,
}

impl MockBus {
    /// A bus which rejects the `n`th transmit call (counting from zero).
    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }
}

impl ServoBus for MockBus {
    fn transmit(&mut self, cmd: &Command) -> Result<(), BusError> {
        let call = self.transmits;
        self.transmits += 1;

        if self.disconnects > 0 {
            return Err(BusError::Disconnected);
        }
        if self.fail_at == Some(call) {
            return Err(BusError::Nack(cmd.kind().code()));
        }

        self.sent.push(cmd.clone());
        Ok(())
    }

    fn disconnect(&mut self) {
        self.disconnects += 1;
    }
}

/// Pacer recording the requested holds instead of sleeping.
#[derive(Default)]
pub struct RecordingPacer {
    pub holds: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn hold(&mut self, duration: Duration) {
        self.holds.push(duration);
    }
}
