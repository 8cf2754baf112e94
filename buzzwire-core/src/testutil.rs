//! Shared mocks for unit tests

use core::cell::Cell;

use buzzwire_hal::bus::{BusError, SlaveBus};
use buzzwire_hal::gpio::{FlexPin, InputPin};

/// Sense pin reading a level owned by the test
pub struct SensePin<'a> {
    pub level: &'a Cell<bool>,
}

impl InputPin for SensePin<'_> {
    fn is_high(&self) -> bool {
        self.level.get()
    }
}

/// Direction-switchable pin recording its last configuration
#[derive(Default)]
pub struct FlexMock {
    output: bool,
    high: bool,
}

impl FlexPin for FlexMock {
    fn set_as_input(&mut self) {
        self.output = false;
    }

    fn set_as_output(&mut self) {
        self.output = true;
    }

    fn is_output(&self) -> bool {
        self.output
    }

    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Bus fed by the test, drained by the code under test
pub struct ScriptedBus {
    data: [u8; 64],
    len: usize,
    pos: usize,
    pub listened: Option<u8>,
    pub fail_listen: bool,
}

impl ScriptedBus {
    pub fn new() -> Self {
        Self {
            data: [0; 64],
            len: 0,
            pos: 0,
            listened: None,
            fail_listen: false,
        }
    }

    pub fn push(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.data[self.len] = byte;
            self.len += 1;
        }
    }

    pub fn remaining(&self) -> usize {
        self.len - self.pos
    }
}

impl SlaveBus for ScriptedBus {
    fn listen(&mut self, address: u8) -> Result<(), BusError> {
        if self.fail_listen {
            return Err(BusError::Unavailable);
        }
        self.listened = Some(address);
        Ok(())
    }

    fn try_recv(&mut self) -> Option<u8> {
        if self.pos < self.len {
            let byte = self.data[self.pos];
            self.pos += 1;
            Some(byte)
        } else {
            None
        }
    }
}
