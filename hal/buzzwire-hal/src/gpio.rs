//! GPIO pin abstractions
//!
//! Provides traits for digital pins that can be implemented by
//! chip-specific HALs.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Digital pin whose direction is switched at runtime
///
/// Notify lines on the shared course wiring are driven by the node
/// during an active window and released to inputs afterwards, so their
/// direction is runtime state rather than a construction-time choice.
pub trait FlexPin {
    /// Configure the pin as a high-impedance input
    fn set_as_input(&mut self);

    /// Configure the pin as a push-pull output
    fn set_as_output(&mut self);

    /// Check if the pin is currently configured as an output
    fn is_output(&self) -> bool;

    /// Set the output level high (logic 1)
    fn set_high(&mut self);

    /// Set the output level low (logic 0)
    fn set_low(&mut self);

    /// Set the output level to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the output level is currently set high
    ///
    /// Reports the driven level, which reaches the wire only while the
    /// pin is an output.
    fn is_set_high(&self) -> bool;

    /// Check if the output level is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Placeholder input pin for nodes that detect events through a
/// predicate instead of a sensor pin
///
/// Always reads low.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoPin;

impl InputPin for NoPin {
    fn is_high(&self) -> bool {
        false
    }
}
