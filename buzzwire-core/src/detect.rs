//! Event detection strategies
//!
//! A node learns about "goal" and "hit" either from a digital sense pin
//! or from an externally supplied predicate (for sensors that need a
//! driver of their own). The strategy is chosen at construction;
//! checking is a pure query either way.

use buzzwire_hal::gpio::InputPin;

use crate::error::Error;

/// External detection predicate
pub type Predicate<'a> = dyn Fn() -> bool + 'a;

/// The two conditions a node watches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Condition {
    /// Track completion
    Goal,
    /// Course contact
    Hit,
}

/// Detection strategy for one condition
///
/// Holds no mutable state; [`check`](EventSource::check) never blocks
/// and has no side effects.
pub enum EventSource<'a, P> {
    /// Read a digital sense pin, optionally active-low
    Pin {
        /// The sense pin, already configured as an input by the caller
        pin: P,
        /// Invert the reading (active-low sensor wiring)
        inverted: bool,
    },
    /// Delegate to an external predicate
    ///
    /// `None` means the node was built without a predicate for this
    /// condition; checking it fails rather than reporting "no event".
    Func(Option<&'a Predicate<'a>>),
}

impl<'a, P: InputPin> EventSource<'a, P> {
    /// Detection from an active-high sense pin
    pub fn pin(pin: P) -> Self {
        Self::pin_with_polarity(pin, false)
    }

    /// Detection from a sense pin with explicit polarity
    pub fn pin_with_polarity(pin: P, inverted: bool) -> Self {
        EventSource::Pin { pin, inverted }
    }

    /// Detection through an external predicate
    pub fn func(predicate: &'a Predicate<'a>) -> Self {
        EventSource::Func(Some(predicate))
    }

    /// A source with no predicate bound; every check fails
    pub fn unbound() -> Self {
        EventSource::Func(None)
    }

    /// Query whether the condition currently holds
    pub fn check(&self) -> Result<bool, Error> {
        match self {
            EventSource::Pin { pin, inverted } => Ok(pin.is_high() != *inverted),
            EventSource::Func(Some(predicate)) => Ok(predicate()),
            EventSource::Func(None) => Err(Error::UnboundPredicate),
        }
    }
}
