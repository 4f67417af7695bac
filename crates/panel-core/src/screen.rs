//! Statically registered screens.

use heapless::Vec;
use log::{debug, info};

use crate::{
    capabilities::CapabilitySet,
    confirm::ConfirmSpec,
    error::{ConfigError, MenuError},
    item::{MenuBuilder, MenuItem, MenuList},
    labels,
    machine::ControlAction,
    menus,
    state::StateSnapshot,
};

pub const MAX_SCREENS: usize = 32;

/// Stable screen identity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenId {
    Main,
    Tune,
    Motion,
    Temperature,
    Configuration,
    Media,
    AbortConfirm,
    Cutter,
    Mixer,
    Mmu,
    UserMenu,
    FilamentChange,
    /// Preheat before loading filament into extruder 0.
    FilamentPreheat,
    Info,
    Led,
    /// Service interval slot, zero-based.
    ServiceInterval(u8),
    GameMenu,
}

/// Produces the items of a list screen for one tick. Must not have side effects.
pub type BuildFn =
    fn(&StateSnapshot, &CapabilitySet, &mut MenuBuilder<'_>) -> Result<(), MenuError>;

#[derive(Clone, Copy, Debug)]
pub enum ScreenKind {
    List(BuildFn),
    /// Two-choice confirmation guarding a destructive action.
    Confirm(ConfirmSpec),
}

#[derive(Clone, Copy, Debug)]
pub struct ScreenDef {
    pub id: ScreenId,
    pub title: &'static str,
    pub kind: ScreenKind,
}

/// Table of every screen the menu can reach.
pub struct ScreenRegistry {
    root: ScreenId,
    screens: Vec<ScreenDef, MAX_SCREENS>,
}

impl ScreenRegistry {
    pub const fn new(root: ScreenId) -> Self {
        Self {
            root,
            screens: Vec::new(),
        }
    }

    /// Registry rooted at the main menu with its stop confirmation.
    pub fn with_main_menu() -> Result<Self, ConfigError> {
        let mut registry = Self::new(ScreenId::Main);
        registry.register_list(ScreenId::Main, labels::MAIN, menus::main_menu)?;
        registry.register_confirm(
            ScreenId::AbortConfirm,
            labels::STOP_PRINT,
            ConfirmSpec {
                action: ControlAction::Abort,
                prompt: labels::STOP_PRINT_PROMPT,
                confirm_label: labels::STOP,
                cancel_label: labels::BACK,
            },
        )?;
        Ok(registry)
    }

    pub fn register_list(
        &mut self,
        id: ScreenId,
        title: &'static str,
        build: BuildFn,
    ) -> Result<&mut Self, ConfigError> {
        self.register(ScreenDef {
            id,
            title,
            kind: ScreenKind::List(build),
        })
    }

    pub fn register_confirm(
        &mut self,
        id: ScreenId,
        title: &'static str,
        spec: ConfirmSpec,
    ) -> Result<&mut Self, ConfigError> {
        self.register(ScreenDef {
            id,
            title,
            kind: ScreenKind::Confirm(spec),
        })
    }

    pub fn register(&mut self, def: ScreenDef) -> Result<&mut Self, ConfigError> {
        if self.contains(def.id) {
            return Err(ConfigError::DuplicateScreen(def.id));
        }
        self.screens
            .push(def)
            .map_err(|_| ConfigError::RegistryFull)?;
        debug!("ui-menu: registered screen {:?} title={:?}", def.id, def.title);
        Ok(self)
    }

    pub fn root(&self) -> ScreenId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: ScreenId) -> Option<&ScreenDef> {
        self.screens.iter().find(|def| def.id == id)
    }

    /// Builds `id` into `items`. Unknown screens yield an empty list; a
    /// validated registry never hands one out.
    pub fn build(
        &self,
        id: ScreenId,
        snapshot: &StateSnapshot,
        caps: &CapabilitySet,
        items: &mut MenuList,
    ) -> Result<(), MenuError> {
        let mut menu = MenuBuilder::new(items);
        match self.get(id).map(|def| def.kind) {
            Some(ScreenKind::List(build)) => build(snapshot, caps, &mut menu),
            Some(ScreenKind::Confirm(spec)) => spec.build(&mut menu),
            None => Ok(()),
        }
    }

    /// Checks that the root exists and that no reachable machine state makes a
    /// list screen overflow or point at an unregistered screen.
    pub fn validate(&self, caps: &CapabilitySet) -> Result<(), ConfigError> {
        if !self.contains(self.root) {
            return Err(ConfigError::RootNotRegistered(self.root));
        }

        let mut items = MenuList::new();
        for def in &self.screens {
            if !matches!(def.kind, ScreenKind::List(_)) {
                continue;
            }
            for snapshot in StateSnapshot::all() {
                self.build(def.id, &snapshot, caps, &mut items)
                    .map_err(|_| ConfigError::ListOverflow(def.id))?;

                for item in &items {
                    if let MenuItem::Submenu { target, .. } = item {
                        if !self.contains(*target) {
                            return Err(ConfigError::UnregisteredScreen {
                                from: def.id,
                                target: *target,
                            });
                        }
                    }
                }
            }
        }

        info!(
            "ui-menu: registry valid root={:?} screens={}",
            self.root,
            self.screens.len()
        );
        Ok(())
    }
}
