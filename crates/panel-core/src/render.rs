//! View models handed to the display renderer, plus transition metadata.

use crate::screen::ScreenId;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuItemKind {
    Back,
    Action,
    Submenu,
    Command,
    Placeholder,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuItemView<'a> {
    pub label: &'a str,
    pub kind: MenuItemKind,
}

impl Default for MenuItemView<'_> {
    fn default() -> Self {
        Self {
            label: "",
            kind: MenuItemKind::Placeholder,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
    Fade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// One menu screen as the renderer sees it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuView<'a> {
    pub screen: ScreenId,
    pub title: &'static str,
    pub items: &'a [MenuItemView<'a>],
    pub cursor: usize,
    /// Question shown above a confirmation screen.
    pub prompt: Option<&'static str>,
    pub animation: Option<AnimationFrame>,
}
