//! Interfaces to the machine services the menu reads from and calls into.
//!
//! Implementations must return promptly: pause, abort, media mounting and the
//! like are only *requested* here and carried out by the machine's own state
//! machines.

use crate::{capabilities::Game, state::StateSnapshot};

/// Named control requests a menu item can make.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlAction {
    Pause,
    Resume,
    Abort,
    /// Start the media autostart sequence.
    Autostart,
    EnterGame(Game),
}

/// Source of the per-tick status snapshot.
///
/// In a multi-threaded host this must publish a consistent record (under a
/// lock or via an atomic swap); the menu does no locking of its own.
pub trait StatusSource {
    fn snapshot(&self) -> StateSnapshot;
}

/// Receiver of control requests.
pub trait ControlActions {
    type Error;

    fn invoke(&mut self, action: ControlAction) -> Result<(), Self::Error>;
}

/// Textual command queue. Commands are forwarded verbatim, unvalidated.
pub trait CommandQueue {
    type Error;

    fn enqueue(&mut self, command: &'static str) -> Result<(), Self::Error>;
}
