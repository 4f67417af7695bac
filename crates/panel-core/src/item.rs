//! Menu entries emitted by screen builders.

use heapless::Vec;

use crate::{error::MenuError, machine::ControlAction, render::MenuItemKind, screen::ScreenId};

pub const MAX_MENU_ITEMS: usize = 24;

/// Items of one screen for one tick.
pub type MenuList = Vec<MenuItem, MAX_MENU_ITEMS>;

/// What an `Action` item does when activated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Handler {
    /// Request a named control action from the machine.
    Control(ControlAction),
    /// Resolve the pending confirmation.
    ConfirmPending,
    /// Informational row; activation does nothing.
    Inert,
}

/// One selectable row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuItem {
    Back {
        label: &'static str,
    },
    Action {
        label: &'static str,
        handler: Handler,
    },
    Submenu {
        label: &'static str,
        target: ScreenId,
    },
    Command {
        label: &'static str,
        text: &'static str,
    },
    /// Empty slot kept for layout symmetry.
    Skip,
}

impl MenuItem {
    pub const fn label(&self) -> &'static str {
        match self {
            MenuItem::Back { label }
            | MenuItem::Action { label, .. }
            | MenuItem::Submenu { label, .. }
            | MenuItem::Command { label, .. } => label,
            MenuItem::Skip => "",
        }
    }

    pub const fn kind(&self) -> MenuItemKind {
        match self {
            MenuItem::Back { .. } => MenuItemKind::Back,
            MenuItem::Action { .. } => MenuItemKind::Action,
            MenuItem::Submenu { .. } => MenuItemKind::Submenu,
            MenuItem::Command { .. } => MenuItemKind::Command,
            MenuItem::Skip => MenuItemKind::Placeholder,
        }
    }
}

/// Append-only sink used by screen builders.
pub struct MenuBuilder<'a> {
    items: &'a mut MenuList,
}

impl<'a> MenuBuilder<'a> {
    /// Clears `items` and starts a fresh list.
    pub fn new(items: &'a mut MenuList) -> Self {
        items.clear();
        Self { items }
    }

    pub fn back(&mut self, label: &'static str) -> Result<&mut Self, MenuError> {
        self.push(MenuItem::Back { label })
    }

    pub fn action(
        &mut self,
        label: &'static str,
        handler: Handler,
    ) -> Result<&mut Self, MenuError> {
        self.push(MenuItem::Action { label, handler })
    }

    pub fn control(
        &mut self,
        label: &'static str,
        action: ControlAction,
    ) -> Result<&mut Self, MenuError> {
        self.action(label, Handler::Control(action))
    }

    pub fn submenu(
        &mut self,
        label: &'static str,
        target: ScreenId,
    ) -> Result<&mut Self, MenuError> {
        self.push(MenuItem::Submenu { label, target })
    }

    pub fn command(
        &mut self,
        label: &'static str,
        text: &'static str,
    ) -> Result<&mut Self, MenuError> {
        self.push(MenuItem::Command { label, text })
    }

    pub fn skip(&mut self) -> Result<&mut Self, MenuError> {
        self.push(MenuItem::Skip)
    }

    pub fn push(&mut self, item: MenuItem) -> Result<&mut Self, MenuError> {
        self.items.push(item).map_err(|_| MenuError::ListFull)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_from_empty_list() {
        let mut items = MenuList::new();
        let _ = items.push(MenuItem::Skip);

        let mut menu = MenuBuilder::new(&mut items);
        assert!(menu.is_empty());
        menu.back("Back").unwrap().skip().unwrap();
        assert_eq!(menu.len(), 2);
        assert_eq!(items[0], MenuItem::Back { label: "Back" });
    }

    #[test]
    fn builder_reports_overflow() {
        let mut items = MenuList::new();
        let mut menu = MenuBuilder::new(&mut items);
        for _ in 0..MAX_MENU_ITEMS {
            menu.skip().unwrap();
        }
        assert_eq!(menu.skip().err(), Some(MenuError::ListFull));
    }

    #[test]
    fn skip_renders_as_unlabelled_placeholder() {
        assert_eq!(MenuItem::Skip.label(), "");
        assert_eq!(MenuItem::Skip.kind(), MenuItemKind::Placeholder);
        assert_eq!(
            MenuItem::Command {
                label: "Init",
                text: "M21"
            }
            .kind(),
            MenuItemKind::Command
        );
    }
}
