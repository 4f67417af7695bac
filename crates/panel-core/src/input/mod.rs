//! Input abstraction layer.

pub mod mock;

pub use mock::MockInput;

/// Logical encoder actions consumed by the menu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Move the cursor one row down.
    RotateCw,
    /// Move the cursor one row up.
    RotateCcw,
    /// Activate the highlighted row.
    Press,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
