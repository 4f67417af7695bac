//! Screen builders.

mod main_menu;

pub use main_menu::main_menu;

use crate::{
    capabilities::CapabilitySet, error::MenuError, item::MenuBuilder, labels,
    state::StateSnapshot,
};

/// Back-only screen standing in for one owned by another subsystem.
pub fn placeholder_screen(
    _: &StateSnapshot,
    _: &CapabilitySet,
    menu: &mut MenuBuilder<'_>,
) -> Result<(), MenuError> {
    menu.back(labels::BACK)?;
    Ok(())
}
