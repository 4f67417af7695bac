//! Resolves an activated item into its effect.

use log::{debug, info, warn};

use crate::{
    confirm::{ConfirmSpec, ConfirmationGate},
    item::{Handler, MenuItem},
    machine::{CommandQueue, ControlAction, ControlActions},
    navigation::{NavigationStack, PopResult},
    screen::{ScreenKind, ScreenRegistry},
};

/// What a dispatch did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DispatchOutcome {
    /// A screen was pushed or popped.
    Navigated,
    /// Back on the root screen; nothing changed.
    AlreadyAtRoot,
    Invoked(ControlAction),
    Enqueued(&'static str),
    /// A pending destructive action was confirmed and requested.
    Confirmed(ControlAction),
    /// A pending destructive action was dropped.
    Cancelled,
    /// Placeholder, inert row, or a confirm with nothing pending.
    Ignored,
    /// A collaborator refused the request or the stack is full. After a
    /// confirm the gate has already resolved, so the confirmation screen is
    /// still popped.
    Rejected,
}

/// Owns the confirmation gate; everything else is passed in per call.
#[derive(Debug, Default)]
pub struct ActionDispatcher {
    gate: ConfirmationGate,
}

impl ActionDispatcher {
    pub const fn new() -> Self {
        Self {
            gate: ConfirmationGate::new(),
        }
    }

    pub fn gate(&self) -> &ConfirmationGate {
        &self.gate
    }

    pub fn dispatch<M>(
        &mut self,
        item: &MenuItem,
        nav: &mut NavigationStack,
        registry: &ScreenRegistry,
        machine: &mut M,
    ) -> DispatchOutcome
    where
        M: ControlActions + CommandQueue,
    {
        debug!(
            "ui-menu: activate {:?} on {:?}",
            item,
            nav.current_screen()
        );

        match *item {
            MenuItem::Back { .. } => self.back(nav),
            MenuItem::Submenu { target, .. } => {
                let Some(def) = registry.get(target) else {
                    warn!("ui-menu: submenu target {:?} not registered", target);
                    return DispatchOutcome::Rejected;
                };
                if nav.push(target).is_err() {
                    return DispatchOutcome::Rejected;
                }
                if let ScreenKind::Confirm(spec) = def.kind {
                    self.gate.arm(&spec);
                    nav.save_cursor(ConfirmSpec::CANCEL_INDEX);
                }
                DispatchOutcome::Navigated
            }
            MenuItem::Action {
                handler: Handler::Control(action),
                ..
            } => invoke(machine, action),
            MenuItem::Action {
                handler: Handler::ConfirmPending,
                ..
            } => {
                let Some(action) = self.gate.confirm() else {
                    return DispatchOutcome::Ignored;
                };
                let outcome = match invoke(machine, action) {
                    DispatchOutcome::Invoked(action) => DispatchOutcome::Confirmed(action),
                    other => other,
                };
                let _ = nav.pop();
                outcome
            }
            MenuItem::Action {
                handler: Handler::Inert,
                ..
            }
            | MenuItem::Skip => DispatchOutcome::Ignored,
            MenuItem::Command { text, .. } => match machine.enqueue(text) {
                Ok(()) => {
                    info!("ui-menu: enqueued command {:?}", text);
                    DispatchOutcome::Enqueued(text)
                }
                Err(_) => {
                    warn!("ui-menu: command {:?} rejected by queue", text);
                    DispatchOutcome::Rejected
                }
            },
        }
    }

    fn back(&mut self, nav: &mut NavigationStack) -> DispatchOutcome {
        if self.gate.cancel() {
            let _ = nav.pop();
            return DispatchOutcome::Cancelled;
        }
        match nav.activate_back() {
            PopResult::Popped { .. } => DispatchOutcome::Navigated,
            PopResult::AlreadyAtRoot => DispatchOutcome::AlreadyAtRoot,
        }
    }
}

fn invoke<M: ControlActions>(machine: &mut M, action: ControlAction) -> DispatchOutcome {
    match machine.invoke(action) {
        Ok(()) => {
            info!("ui-menu: requested {:?}", action);
            DispatchOutcome::Invoked(action)
        }
        Err(_) => {
            warn!("ui-menu: request {:?} refused", action);
            DispatchOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        capabilities::CapabilitySet,
        item::MenuList,
        labels,
        menus::placeholder_screen,
        screen::ScreenId,
        state::StateSnapshot,
    };

    #[derive(Default)]
    struct Recorder {
        invoked: Vec<ControlAction>,
        commands: Vec<&'static str>,
        refuse: bool,
    }

    impl ControlActions for Recorder {
        type Error = ();

        fn invoke(&mut self, action: ControlAction) -> Result<(), Self::Error> {
            if self.refuse {
                return Err(());
            }
            self.invoked.push(action);
            Ok(())
        }
    }

    impl CommandQueue for Recorder {
        type Error = ();

        fn enqueue(&mut self, command: &'static str) -> Result<(), Self::Error> {
            if self.refuse {
                return Err(());
            }
            self.commands.push(command);
            Ok(())
        }
    }

    fn registry() -> ScreenRegistry {
        let mut registry = ScreenRegistry::with_main_menu().unwrap();
        registry
            .register_list(ScreenId::Tune, labels::TUNE, placeholder_screen)
            .unwrap();
        registry
    }

    fn stop_item() -> MenuItem {
        MenuItem::Submenu {
            label: labels::STOP_PRINT,
            target: ScreenId::AbortConfirm,
        }
    }

    fn confirm_item(registry: &ScreenRegistry) -> MenuItem {
        let mut items = MenuList::new();
        registry
            .build(
                ScreenId::AbortConfirm,
                &StateSnapshot::idle(),
                &CapabilitySet::default(),
                &mut items,
            )
            .unwrap();
        items[0]
    }

    #[test]
    fn confirm_invokes_once_and_returns_to_parent() {
        let registry = registry();
        let mut nav = NavigationStack::new(ScreenId::Main);
        nav.save_cursor(2);
        let mut machine = Recorder::default();
        let mut dispatcher = ActionDispatcher::new();

        let outcome = dispatcher.dispatch(&stop_item(), &mut nav, &registry, &mut machine);
        assert_eq!(outcome, DispatchOutcome::Navigated);
        assert_eq!(nav.current_screen(), ScreenId::AbortConfirm);
        assert_eq!(nav.cursor(), ConfirmSpec::CANCEL_INDEX);
        assert!(dispatcher.gate().is_pending());

        let confirm = confirm_item(&registry);
        let outcome = dispatcher.dispatch(&confirm, &mut nav, &registry, &mut machine);
        assert_eq!(outcome, DispatchOutcome::Confirmed(ControlAction::Abort));
        assert_eq!(nav.current_screen(), ScreenId::Main);
        assert_eq!(nav.cursor(), 2);

        let outcome = dispatcher.dispatch(&confirm, &mut nav, &registry, &mut machine);
        assert_eq!(outcome, DispatchOutcome::Ignored);
        assert_eq!(machine.invoked, [ControlAction::Abort]);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn cancel_pops_without_invoking() {
        let registry = registry();
        let mut nav = NavigationStack::new(ScreenId::Main);
        let mut machine = Recorder::default();
        let mut dispatcher = ActionDispatcher::new();

        dispatcher.dispatch(&stop_item(), &mut nav, &registry, &mut machine);
        let back = MenuItem::Back {
            label: labels::BACK,
        };
        let outcome = dispatcher.dispatch(&back, &mut nav, &registry, &mut machine);

        assert_eq!(outcome, DispatchOutcome::Cancelled);
        assert!(machine.invoked.is_empty());
        assert_eq!(nav.current_screen(), ScreenId::Main);
        assert!(!dispatcher.gate().is_pending());
    }

    #[test]
    fn back_at_root_reports_and_keeps_depth() {
        let registry = registry();
        let mut nav = NavigationStack::new(ScreenId::Main);
        let mut machine = Recorder::default();
        let mut dispatcher = ActionDispatcher::new();
        let back = MenuItem::Back {
            label: labels::WATCH,
        };

        for _ in 0..3 {
            let outcome = dispatcher.dispatch(&back, &mut nav, &registry, &mut machine);
            assert_eq!(outcome, DispatchOutcome::AlreadyAtRoot);
            assert_eq!(nav.depth(), 1);
        }
    }

    #[test]
    fn commands_are_forwarded_verbatim() {
        let registry = registry();
        let mut nav = NavigationStack::new(ScreenId::Main);
        let mut machine = Recorder::default();
        let mut dispatcher = ActionDispatcher::new();
        let item = MenuItem::Command {
            label: "Odd",
            text: "  not gcode ;",
        };

        let outcome = dispatcher.dispatch(&item, &mut nav, &registry, &mut machine);
        assert_eq!(outcome, DispatchOutcome::Enqueued("  not gcode ;"));
        assert_eq!(machine.commands, ["  not gcode ;"]);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn refused_confirm_still_resolves_gate_and_returns() {
        let registry = registry();
        let mut nav = NavigationStack::new(ScreenId::Main);
        nav.save_cursor(2);
        let mut machine = Recorder {
            refuse: true,
            ..Recorder::default()
        };
        let mut dispatcher = ActionDispatcher::new();

        dispatcher.dispatch(&stop_item(), &mut nav, &registry, &mut machine);
        assert!(dispatcher.gate().is_pending());

        let confirm = confirm_item(&registry);
        let outcome = dispatcher.dispatch(&confirm, &mut nav, &registry, &mut machine);
        assert_eq!(outcome, DispatchOutcome::Rejected);
        assert!(!dispatcher.gate().is_pending());
        assert_eq!(nav.current_screen(), ScreenId::Main);
        assert_eq!(nav.cursor(), 2);
        assert_eq!(nav.depth(), 1);
        assert!(machine.invoked.is_empty());

        let outcome = dispatcher.dispatch(&confirm, &mut nav, &registry, &mut machine);
        assert_eq!(outcome, DispatchOutcome::Ignored);
    }

    #[test]
    fn refused_requests_leave_navigation_alone() {
        let registry = registry();
        let mut nav = NavigationStack::new(ScreenId::Main);
        let mut machine = Recorder {
            refuse: true,
            ..Recorder::default()
        };
        let mut dispatcher = ActionDispatcher::new();

        let pause = MenuItem::Action {
            label: labels::PAUSE_PRINT,
            handler: Handler::Control(ControlAction::Pause),
        };
        assert_eq!(
            dispatcher.dispatch(&pause, &mut nav, &registry, &mut machine),
            DispatchOutcome::Rejected
        );
        let power = MenuItem::Command {
            label: labels::SWITCH_PS_ON,
            text: labels::CMD_POWER_ON,
        };
        assert_eq!(
            dispatcher.dispatch(&power, &mut nav, &registry, &mut machine),
            DispatchOutcome::Rejected
        );
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn unregistered_or_inert_items_do_nothing() {
        let registry = registry();
        let mut nav = NavigationStack::new(ScreenId::Main);
        let mut machine = Recorder::default();
        let mut dispatcher = ActionDispatcher::new();

        let missing = MenuItem::Submenu {
            label: labels::MIXER,
            target: ScreenId::Mixer,
        };
        assert_eq!(
            dispatcher.dispatch(&missing, &mut nav, &registry, &mut machine),
            DispatchOutcome::Rejected
        );
        let inert = MenuItem::Action {
            label: labels::NO_MEDIA,
            handler: Handler::Inert,
        };
        assert_eq!(
            dispatcher.dispatch(&inert, &mut nav, &registry, &mut machine),
            DispatchOutcome::Ignored
        );
        assert_eq!(
            dispatcher.dispatch(&MenuItem::Skip, &mut nav, &registry, &mut machine),
            DispatchOutcome::Ignored
        );
        assert_eq!(nav.depth(), 1);
        assert!(machine.invoked.is_empty());
    }

    #[test]
    fn plain_submenu_push_does_not_arm_gate() {
        let registry = registry();
        let mut nav = NavigationStack::new(ScreenId::Main);
        let mut machine = Recorder::default();
        let mut dispatcher = ActionDispatcher::new();
        let tune = MenuItem::Submenu {
            label: labels::TUNE,
            target: ScreenId::Tune,
        };

        assert_eq!(
            dispatcher.dispatch(&tune, &mut nav, &registry, &mut machine),
            DispatchOutcome::Navigated
        );
        assert_eq!(nav.cursor(), 0);
        assert!(!dispatcher.gate().is_pending());
    }
}
