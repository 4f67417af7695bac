use super::{InputEvent, InputProvider};

/// Encoder stand-in for panel bring-up: the menu ticks and renders, but the
/// cursor never moves and nothing is ever activated.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        MockInput
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        // No encoder attached: report an empty queue every tick.
        Ok(None)
    }
}
