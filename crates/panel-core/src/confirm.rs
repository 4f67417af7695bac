//! Confirmation overlay for destructive actions.

use log::{debug, info};

use crate::{
    error::MenuError,
    item::{Handler, MenuBuilder},
    machine::ControlAction,
};

/// Static description of a confirmation screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConfirmSpec {
    pub action: ControlAction,
    pub prompt: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

impl ConfirmSpec {
    /// Row highlighted when the screen opens.
    pub const CANCEL_INDEX: usize = 1;

    /// Emits `[confirm, cancel]`.
    pub fn build(&self, menu: &mut MenuBuilder<'_>) -> Result<(), MenuError> {
        menu.action(self.confirm_label, Handler::ConfirmPending)?
            .back(self.cancel_label)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GateState {
    Idle,
    AwaitConfirm {
        pending: ControlAction,
        prompt: &'static str,
    },
}

/// Holds a destructive action between selection and confirm/cancel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConfirmationGate {
    state: GateState,
}

impl Default for ConfirmationGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationGate {
    pub const fn new() -> Self {
        Self {
            state: GateState::Idle,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, GateState::AwaitConfirm { .. })
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match self.state {
            GateState::AwaitConfirm { prompt, .. } => Some(prompt),
            GateState::Idle => None,
        }
    }

    /// Enters `AwaitConfirm`, replacing any earlier pending action.
    pub fn arm(&mut self, spec: &ConfirmSpec) {
        debug!(
            "ui-confirm: armed action={:?} prompt={:?}",
            spec.action, spec.prompt
        );
        self.state = GateState::AwaitConfirm {
            pending: spec.action,
            prompt: spec.prompt,
        };
    }

    /// Returns the pending action exactly once; `None` when already idle.
    pub fn confirm(&mut self) -> Option<ControlAction> {
        match core::mem::replace(&mut self.state, GateState::Idle) {
            GateState::AwaitConfirm { pending, .. } => {
                info!("ui-confirm: confirmed action={:?}", pending);
                Some(pending)
            }
            GateState::Idle => {
                debug!("ui-confirm: confirm ignored, nothing pending");
                None
            }
        }
    }

    /// Drops the pending action. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        if was_pending {
            debug!("ui-confirm: cancelled");
        }
        self.state = GateState::Idle;
        was_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{MenuItem, MenuList};

    const SPEC: ConfirmSpec = ConfirmSpec {
        action: ControlAction::Abort,
        prompt: "Stop Print?",
        confirm_label: "Stop",
        cancel_label: "Back",
    };

    #[test]
    fn confirm_yields_pending_action_once() {
        let mut gate = ConfirmationGate::new();
        gate.arm(&SPEC);
        assert_eq!(gate.prompt(), Some("Stop Print?"));

        assert_eq!(gate.confirm(), Some(ControlAction::Abort));
        assert_eq!(gate.confirm(), None);
        assert_eq!(gate.state(), GateState::Idle);
    }

    #[test]
    fn cancel_discards_pending_action() {
        let mut gate = ConfirmationGate::new();
        gate.arm(&SPEC);
        assert!(gate.cancel());
        assert!(!gate.cancel());
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn spec_builds_confirm_and_cancel_rows() {
        let mut items = MenuList::new();
        SPEC.build(&mut MenuBuilder::new(&mut items)).unwrap();
        assert_eq!(
            items.as_slice(),
            &[
                MenuItem::Action {
                    label: "Stop",
                    handler: Handler::ConfirmPending,
                },
                MenuItem::Back { label: "Back" },
            ]
        );
        assert_eq!(items[ConfirmSpec::CANCEL_INDEX], MenuItem::Back { label: "Back" });
    }
}
