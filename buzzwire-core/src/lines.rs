//! Notify-line management
//!
//! Each node exposes two notification lines to the master. During an
//! active window they are outputs driven by the node; outside one they
//! are released to inputs so they cannot fight another driver on the
//! shared wiring.

use buzzwire_hal::gpio::FlexPin;

use crate::detect::Condition;

/// The goal/hit notify-line pair of a node
///
/// Direction is only ever changed by the bus session
/// ([`SlaveLink`](crate::link::SlaveLink)); the detection poll is
/// limited to raising levels.
pub struct NotifyLines<P> {
    goal: P,
    hit: P,
}

impl<P: FlexPin> NotifyLines<P> {
    /// Wrap the two notify pins
    ///
    /// The pins are left untouched until the node is set up.
    pub fn new(goal: P, hit: P) -> Self {
        Self { goal, hit }
    }

    /// Drive both lines as outputs at low level
    ///
    /// Direction changes first so the low level is what reaches the
    /// wire.
    pub fn drive_low(&mut self) {
        self.goal.set_as_output();
        self.hit.set_as_output();
        self.goal.set_low();
        self.hit.set_low();
    }

    /// Drop both levels and release the lines to inputs
    pub fn release(&mut self) {
        self.goal.set_low();
        self.hit.set_low();
        self.goal.set_as_input();
        self.hit.set_as_input();
    }

    /// Assert a condition's line
    ///
    /// Level-only: the line's direction is not changed, so the
    /// assertion reaches the wire only while the line is driven.
    pub fn raise(&mut self, condition: Condition) {
        self.line_mut(condition).set_high();
    }

    /// Drop a condition's line, keeping its direction
    pub fn clear(&mut self, condition: Condition) {
        self.line_mut(condition).set_low();
    }

    /// The goal notify pin
    pub fn goal(&self) -> &P {
        &self.goal
    }

    /// The hit notify pin
    pub fn hit(&self) -> &P {
        &self.hit
    }

    fn line_mut(&mut self, condition: Condition) -> &mut P {
        match condition {
            Condition::Goal => &mut self.goal,
            Condition::Hit => &mut self.hit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FlexMock;

    fn lines() -> NotifyLines<FlexMock> {
        NotifyLines::new(FlexMock::default(), FlexMock::default())
    }

    #[test]
    fn test_new_leaves_pins_untouched() {
        let lines = lines();
        assert!(!lines.goal().is_output());
        assert!(lines.goal().is_set_low());
        assert!(!lines.hit().is_output());
        assert!(lines.hit().is_set_low());
    }

    #[test]
    fn test_drive_low_arms_both_outputs() {
        let mut lines = lines();
        lines.raise(Condition::Goal);
        lines.drive_low();

        assert!(lines.goal().is_output());
        assert!(lines.goal().is_set_low());
        assert!(lines.hit().is_output());
        assert!(lines.hit().is_set_low());
    }

    #[test]
    fn test_release_drops_and_floats_both() {
        let mut lines = lines();
        lines.drive_low();
        lines.raise(Condition::Goal);
        lines.raise(Condition::Hit);
        lines.release();

        assert!(!lines.goal().is_output());
        assert!(lines.goal().is_set_low());
        assert!(!lines.hit().is_output());
        assert!(lines.hit().is_set_low());
    }

    #[test]
    fn test_raise_and_clear_keep_direction() {
        let mut lines = lines();
        lines.drive_low();

        lines.raise(Condition::Hit);
        assert!(lines.hit().is_output());
        assert!(lines.hit().is_set_high());
        assert!(lines.goal().is_set_low());

        lines.clear(Condition::Hit);
        assert!(lines.hit().is_output());
        assert!(lines.hit().is_set_low());
    }
}
