impl<M, IN> MenuApp<M, IN>
where
    M: StatusSource + ControlActions + CommandQueue,
    IN: InputProvider,
{
    /// Captures a fresh snapshot and rebuilds the visible list from it.
    fn refresh(&mut self) {
        self.snapshot = self.machine.snapshot();
        self.cursor_clamped = false;
        self.rebuild();
    }

    /// Rebuilds the top screen against the current snapshot and clamps the
    /// cursor to the new length.
    fn rebuild(&mut self) {
        let screen = self.nav.current_screen();
        let mut fresh = MenuList::new();
        if self
            .registry
            .build(screen, &self.snapshot, &self.caps, &mut fresh)
            .is_err()
        {
            warn!(
                "ui-menu: {:?} truncated at {} items",
                screen, MAX_MENU_ITEMS
            );
        }

        if fresh != self.items {
            debug!(
                "ui-menu: rebuilt {:?} items={} (was {})",
                screen,
                fresh.len(),
                self.items.len()
            );
            self.items = fresh;
            self.pending_redraw = true;
        }

        let cursor = self.nav.cursor();
        if self.nav.clamp_cursor(self.items.len()) != cursor {
            self.cursor_clamped = true;
            self.pending_redraw = true;
        }
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<crate::render::AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }
}
