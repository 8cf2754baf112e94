//! Commands sent by the master controller
//!
//! Every command is a single byte. The master addresses one node at a
//! time; a node never sees traffic meant for its neighbours.

/// Command values sent from the master to a slave node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Open an active window: the node drives its notify lines
    BeginTransaction,
    /// Acknowledge a course contact; the node drops its hit line
    DetectHit,
    /// Acknowledge the goal and close the active window
    DetectGoal,
}

// Wire format values
const CMD_BEGIN_TRANSACTION: u8 = 0x00;
const CMD_DETECT_HIT: u8 = 0x01;
const CMD_DETECT_GOAL: u8 = 0x02;

impl Command {
    /// Parse a command from its wire format byte
    ///
    /// Returns `None` for bytes outside the command set; the receiving
    /// side logs and ignores those.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_BEGIN_TRANSACTION => Some(Command::BeginTransaction),
            CMD_DETECT_HIT => Some(Command::DetectHit),
            CMD_DETECT_GOAL => Some(Command::DetectGoal),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Command::BeginTransaction => CMD_BEGIN_TRANSACTION,
            Command::DetectHit => CMD_DETECT_HIT,
            Command::DetectGoal => CMD_DETECT_GOAL,
        }
    }

    /// Returns true if this command opens an active window
    pub fn opens_window(&self) -> bool {
        matches!(self, Command::BeginTransaction)
    }

    /// Returns true if this command closes the active window
    pub fn ends_window(&self) -> bool {
        matches!(self, Command::DetectGoal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_roundtrip() {
        let commands = [
            Command::BeginTransaction,
            Command::DetectHit,
            Command::DetectGoal,
        ];

        for command in commands {
            let byte = command.to_byte();
            let parsed = Command::from_byte(byte).unwrap();
            assert_eq!(command, parsed);
        }
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(Command::BeginTransaction.to_byte(), 0x00);
        assert_eq!(Command::DetectHit.to_byte(), 0x01);
        assert_eq!(Command::DetectGoal.to_byte(), 0x02);
    }

    #[test]
    fn test_unknown_bytes() {
        assert_eq!(Command::from_byte(0x03), None);
        assert_eq!(Command::from_byte(0x7F), None);
        assert_eq!(Command::from_byte(0xFF), None);
    }

    #[test]
    fn test_window_predicates() {
        assert!(Command::BeginTransaction.opens_window());
        assert!(!Command::BeginTransaction.ends_window());
        assert!(Command::DetectGoal.ends_window());
        assert!(!Command::DetectGoal.opens_window());
        assert!(!Command::DetectHit.opens_window());
        assert!(!Command::DetectHit.ends_window());
    }
}
