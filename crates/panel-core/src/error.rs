//! Error types for the menu engine.
//!
//! All variants carry only fixed-size data so they stay `Copy` and usable
//! without `alloc`.

use crate::screen::ScreenId;

/// Runtime capacity faults raised while building lists or navigating.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuError {
    /// A builder emitted more items than `MAX_MENU_ITEMS`.
    ListFull,
    /// A push would exceed `MAX_NAV_DEPTH`.
    StackFull,
}

/// Startup configuration faults. Detected once, before the first tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The registry root screen has no definition.
    RootNotRegistered(ScreenId),

    /// The same screen id was registered twice.
    DuplicateScreen(ScreenId),

    /// No room left for another screen definition.
    RegistryFull,

    /// `from` can emit a submenu entry pointing at an unregistered screen.
    UnregisteredScreen { from: ScreenId, target: ScreenId },

    /// A builder overflows the item list for some reachable machine state.
    ListOverflow(ScreenId),
}
