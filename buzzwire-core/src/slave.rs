//! Periodic detection and notification for a course node
//!
//! [`SlaveCommunicator`] ties the two event sources to the shared bus
//! session. An external driver loop calls [`poll`](SlaveCommunicator::poll)
//! at whatever cadence the course needs; the bus receive context
//! services the session independently through
//! [`SharedLink::service`](crate::link::SharedLink::service).

use embassy_sync::blocking_mutex::raw::RawMutex;

use buzzwire_hal::bus::SlaveBus;
use buzzwire_hal::gpio::{FlexPin, InputPin, NoPin};
use buzzwire_protocol::SlaveAddress;

use crate::config::NodeConfig;
use crate::detect::{Condition, EventSource, Predicate};
use crate::error::Error;
use crate::link::SharedLink;

/// Slave communicator of one course node
///
/// Owns the detection strategies and a handle to the node's bus
/// session. Dropping it performs no electrical teardown: the notify
/// pins keep their last driven direction and level.
pub struct SlaveCommunicator<'a, M: RawMutex, P, S = NoPin> {
    goal: EventSource<'a, S>,
    hit: EventSource<'a, S>,
    link: &'a SharedLink<M, P>,
}

impl<'a, M: RawMutex, P: FlexPin, S: InputPin> SlaveCommunicator<'a, M, P, S> {
    /// Set up a node whose conditions are sensed by digital pins
    ///
    /// The sense pins must already be configured as inputs. The address
    /// is validated before anything else; on failure no pin or bus
    /// state is touched. On success the notify lines are armed
    /// (outputs, low) and the node joins the bus.
    pub fn with_pins<B: SlaveBus>(
        link: &'a SharedLink<M, P>,
        bus: &mut B,
        goal_sense: S,
        hit_sense: S,
        config: &NodeConfig,
    ) -> Result<Self, Error> {
        let address = SlaveAddress::new(config.address)?;
        link.with(|session| session.arm());
        bus.listen(address.get())?;
        info!("joined bus at address {:#x}", address.get());

        Ok(Self {
            goal: EventSource::pin_with_polarity(goal_sense, config.goal_active_low),
            hit: EventSource::pin_with_polarity(hit_sense, config.hit_active_low),
            link,
        })
    }

    /// Check both conditions once and raise notify levels on detection
    ///
    /// Both conditions are always checked. A failing source only skips
    /// its own condition; the first failure is returned after the other
    /// check ran. Raising is level-only: clearing a line and flipping
    /// its direction are the master's side of the protocol.
    pub fn poll(&mut self) -> Result<(), Error> {
        let mut failure = None;

        for (condition, source) in [(Condition::Goal, &self.goal), (Condition::Hit, &self.hit)] {
            match source.check() {
                Ok(true) => {
                    info!("{:?} detected", condition);
                    self.link.with(|session| session.notify(condition));
                }
                Ok(false) => {}
                Err(error) => {
                    warn!("{:?} check failed: {:?}", condition, error);
                    if failure.is_none() {
                        failure = Some(error);
                    }
                }
            }
        }

        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Whether the master currently has this node's window open
    pub fn is_active(&self) -> bool {
        self.link.is_active()
    }
}

impl<'a, M: RawMutex, P: FlexPin> SlaveCommunicator<'a, M, P> {
    /// Set up a node whose conditions are checked by predicates
    ///
    /// Either predicate may be `None` for a node that only watches one
    /// condition; polling the missing one reports
    /// [`Error::UnboundPredicate`] without affecting the other. Address
    /// validation, line arming and bus registration match
    /// [`with_pins`](SlaveCommunicator::with_pins).
    pub fn with_predicates<B: SlaveBus>(
        link: &'a SharedLink<M, P>,
        bus: &mut B,
        goal: Option<&'a Predicate<'a>>,
        hit: Option<&'a Predicate<'a>>,
        config: &NodeConfig,
    ) -> Result<Self, Error> {
        let address = SlaveAddress::new(config.address)?;
        link.with(|session| session.arm());
        bus.listen(address.get())?;
        info!("joined bus at address {:#x}", address.get());

        Ok(Self {
            goal: EventSource::Func(goal),
            hit: EventSource::Func(hit),
            link,
        })
    }
}
