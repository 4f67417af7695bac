//! Screen history with a saved cursor per frame.

use heapless::Vec;
use log::{debug, warn};

use crate::{error::MenuError, screen::ScreenId};

pub const MAX_NAV_DEPTH: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame {
    pub screen: ScreenId,
    pub cursor: usize,
}

/// Result of a pop request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopResult {
    /// The top frame was removed; `frame` is the new top.
    Popped { frame: Frame },
    /// Only the root is left; nothing changed.
    AlreadyAtRoot,
}

/// Active screens, root first. Never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavigationStack {
    frames: Vec<Frame, MAX_NAV_DEPTH>,
}

impl NavigationStack {
    pub fn new(root: ScreenId) -> Self {
        let mut frames = Vec::new();
        // Capacity is non-zero, the first push always fits.
        let _ = frames.push(Frame {
            screen: root,
            cursor: 0,
        });
        Self { frames }
    }

    pub fn top(&self) -> Frame {
        self.frames[self.frames.len() - 1]
    }

    pub fn current_screen(&self) -> ScreenId {
        self.top().screen
    }

    pub fn cursor(&self) -> usize {
        self.top().cursor
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn root(&self) -> ScreenId {
        self.frames[0].screen
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Enters `screen` with the cursor on its first row.
    pub fn push(&mut self, screen: ScreenId) -> Result<(), MenuError> {
        self.frames
            .push(Frame { screen, cursor: 0 })
            .map_err(|_| {
                warn!(
                    "ui-nav: push {:?} rejected depth={} status=stack_full",
                    screen,
                    self.frames.len()
                );
                MenuError::StackFull
            })?;
        debug!("ui-nav: push {:?} depth={}", screen, self.frames.len());
        Ok(())
    }

    /// Removes the top frame unless it is the root.
    pub fn pop(&mut self) -> PopResult {
        if self.frames.len() <= 1 {
            debug!("ui-nav: pop ignored, already at root {:?}", self.root());
            return PopResult::AlreadyAtRoot;
        }
        let _ = self.frames.pop();
        let frame = self.top();
        debug!(
            "ui-nav: pop -> {:?} cursor={} depth={}",
            frame.screen,
            frame.cursor,
            self.frames.len()
        );
        PopResult::Popped { frame }
    }

    /// Back navigation: the parent resumes at its saved cursor.
    pub fn activate_back(&mut self) -> PopResult {
        self.pop()
    }

    /// Replaces the top screen, keeping the depth.
    pub fn replace_top(&mut self, screen: ScreenId) {
        let last = self.frames.len() - 1;
        debug!(
            "ui-nav: replace {:?} -> {:?}",
            self.frames[last].screen, screen
        );
        self.frames[last] = Frame { screen, cursor: 0 };
    }

    pub fn save_cursor(&mut self, index: usize) {
        let last = self.frames.len() - 1;
        self.frames[last].cursor = index;
    }

    /// Clamps the saved cursor to a list of `item_count` rows and returns it.
    pub fn clamp_cursor(&mut self, item_count: usize) -> usize {
        let last = self.frames.len() - 1;
        let max_index = item_count.saturating_sub(1);
        let cursor = &mut self.frames[last].cursor;
        if *cursor > max_index {
            debug!("ui-nav: cursor clamped {} -> {}", *cursor, max_index);
            *cursor = max_index;
        }
        *cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_back_restores_parent_cursor() {
        let mut nav = NavigationStack::new(ScreenId::Main);
        nav.save_cursor(4);
        let before = nav.clone();

        nav.push(ScreenId::Temperature).unwrap();
        assert_eq!(nav.current_screen(), ScreenId::Temperature);
        assert_eq!(nav.cursor(), 0);
        nav.save_cursor(2);

        assert_eq!(
            nav.activate_back(),
            PopResult::Popped {
                frame: Frame {
                    screen: ScreenId::Main,
                    cursor: 4,
                }
            }
        );
        assert_eq!(nav, before);
    }

    #[test]
    fn back_at_root_is_idempotent() {
        let mut nav = NavigationStack::new(ScreenId::Main);
        for _ in 0..5 {
            assert_eq!(nav.activate_back(), PopResult::AlreadyAtRoot);
            assert_eq!(nav.depth(), 1);
        }
        assert_eq!(nav.current_screen(), ScreenId::Main);
    }

    #[test]
    fn push_beyond_capacity_is_rejected() {
        let mut nav = NavigationStack::new(ScreenId::Main);
        for _ in 1..MAX_NAV_DEPTH {
            nav.push(ScreenId::Motion).unwrap();
        }
        assert_eq!(nav.push(ScreenId::Tune), Err(MenuError::StackFull));
        assert_eq!(nav.depth(), MAX_NAV_DEPTH);
        assert_eq!(nav.current_screen(), ScreenId::Motion);
    }

    #[test]
    fn clamp_follows_shrinking_list() {
        let mut nav = NavigationStack::new(ScreenId::Main);
        nav.save_cursor(9);
        assert_eq!(nav.clamp_cursor(6), 5);
        assert_eq!(nav.clamp_cursor(10), 5);
        assert_eq!(nav.clamp_cursor(0), 0);
    }

    #[test]
    fn replace_top_keeps_depth() {
        let mut nav = NavigationStack::new(ScreenId::Main);
        nav.push(ScreenId::Tune).unwrap();
        nav.save_cursor(3);
        nav.replace_top(ScreenId::Motion);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.top(), Frame { screen: ScreenId::Motion, cursor: 0 });
    }
}
