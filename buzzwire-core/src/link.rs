//! Slave side of the course bus session
//!
//! The master arms a node with `BeginTransaction`, acknowledges course
//! contacts with `DetectHit` and closes the window with `DetectGoal`.
//! This module owns the notify lines and is the only writer of their
//! direction.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use buzzwire_hal::bus::SlaveBus;
use buzzwire_hal::gpio::FlexPin;
use buzzwire_protocol::Command;

use crate::detect::Condition;
use crate::lines::NotifyLines;

/// Most command bytes drained per [`SharedLink::service`] call
///
/// Bounds the work done in the receive context when the transport
/// queue is full; leftover bytes stay queued for the next call.
pub const RX_BUDGET: usize = 16;

/// Session states of a slave node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// No active window; notify lines are inputs
    #[default]
    Inactive,
    /// Master-opened window; notify lines are node-driven outputs
    Active,
}

impl LinkState {
    /// Process a command and return the next state
    ///
    /// The window opens on `BeginTransaction` and closes on
    /// `DetectGoal`; it survives any number of `DetectHit` commands in
    /// between.
    pub fn transition(self, command: Command) -> Self {
        match command {
            Command::BeginTransaction => LinkState::Active,
            Command::DetectGoal => LinkState::Inactive,
            Command::DetectHit => self,
        }
    }
}

/// Slave session: link state plus the notify lines it governs
pub struct SlaveLink<P> {
    state: LinkState,
    lines: NotifyLines<P>,
}

impl<P: FlexPin> SlaveLink<P> {
    /// Build an inactive session around the notify lines
    pub fn new(lines: NotifyLines<P>) -> Self {
        Self {
            state: LinkState::Inactive,
            lines,
        }
    }

    /// Current session state
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Whether an active window is open
    pub fn is_active(&self) -> bool {
        self.state == LinkState::Active
    }

    /// The notify lines
    pub fn lines(&self) -> &NotifyLines<P> {
        &self.lines
    }

    /// Apply one master command
    ///
    /// Each arm follows the fixed direction/level ordering of
    /// [`NotifyLines`]; the state update comes last.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::BeginTransaction => {
                debug!("window opened");
                self.lines.drive_low();
            }
            Command::DetectGoal => {
                debug!("goal acknowledged, window closed");
                self.lines.release();
            }
            Command::DetectHit => {
                debug!("hit acknowledged");
                self.lines.clear(Condition::Hit);
            }
        }
        self.state = self.state.transition(command);
    }

    /// Raise a condition's notify line (level only)
    pub(crate) fn notify(&mut self, condition: Condition) {
        self.lines.raise(condition);
    }

    /// Arm the notify lines for first use (outputs, low)
    pub(crate) fn arm(&mut self) {
        self.lines.drive_low();
    }
}

/// Shared handle to a node's session
///
/// One value per node, created at startup and referenced from both the
/// detection poll and the bus receive context. All access to a notify
/// line's (direction, level) pair goes through the contained mutex, so
/// the receive context cannot observe a torn update. Firmware picks a
/// `CriticalSectionRawMutex`; host tests get away with a
/// `NoopRawMutex`.
pub struct SharedLink<M: RawMutex, P> {
    inner: Mutex<M, RefCell<SlaveLink<P>>>,
}

impl<M: RawMutex, P: FlexPin> SharedLink<M, P> {
    /// Wrap the notify lines into a shareable, inactive session
    pub fn new(lines: NotifyLines<P>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(SlaveLink::new(lines))),
        }
    }

    /// Run `f` with the session locked
    ///
    /// Keep the closure short: on interrupt-capable platforms it runs
    /// with the receive context masked.
    pub fn with<R>(&self, f: impl FnOnce(&mut SlaveLink<P>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Whether an active window is open
    pub fn is_active(&self) -> bool {
        self.with(|link| link.is_active())
    }

    /// Drain pending command bytes from the bus
    ///
    /// Called from the receive context whenever bytes may be queued.
    /// Handles at most [`RX_BUDGET`] bytes per call, tolerates an empty
    /// queue and never blocks. Unknown bytes are logged and ignored.
    /// Returns the number of bytes consumed.
    pub fn service<B: SlaveBus>(&self, bus: &mut B) -> usize {
        let mut consumed = 0;
        while consumed < RX_BUDGET {
            let byte = match bus.try_recv() {
                Some(byte) => byte,
                None => break,
            };
            consumed += 1;
            match Command::from_byte(byte) {
                Some(command) => self.with(|link| link.handle(command)),
                None => warn!("unknown command byte {:#x}, ignored", byte),
            }
        }
        consumed
    }
}
