impl<M, IN> MenuApp<M, IN>
where
    M: StatusSource + ControlActions + CommandQueue,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("ui-menu: input provider error, skipping remaining events");
                    self.pending_redraw = true;
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::RotateCw => {
                let last = self.items.len().saturating_sub(1);
                self.move_cursor(self.nav.cursor().saturating_add(1).min(last));
            }
            InputEvent::RotateCcw => {
                self.move_cursor(self.nav.cursor().saturating_sub(1));
            }
            InputEvent::Press => self.activate(now_ms),
        }
    }

    fn move_cursor(&mut self, next: usize) {
        if next != self.nav.cursor() {
            self.nav.save_cursor(next);
            self.cursor_clamped = false;
            self.pending_redraw = true;
        }
    }

    fn activate(&mut self, now_ms: u64) {
        if self.cursor_clamped {
            debug!("ui-menu: press ignored, list changed under cursor");
            self.cursor_clamped = false;
            return;
        }
        let Some(item) = self.items.get(self.nav.cursor()).copied() else {
            debug!("ui-menu: press ignored, empty list");
            return;
        };

        let depth_before = self.nav.depth();
        let screen_before = self.nav.current_screen();
        let outcome =
            self.dispatcher
                .dispatch(&item, &mut self.nav, &self.registry, &mut self.machine);
        self.last_dispatch = Some(outcome);

        if self.nav.depth() != depth_before || self.nav.current_screen() != screen_before {
            let kind = match outcome {
                DispatchOutcome::Confirmed(_) | DispatchOutcome::Rejected => AnimationKind::Fade,
                _ if self.nav.depth() > depth_before => AnimationKind::SlideLeft,
                _ => AnimationKind::SlideRight,
            };
            let duration = match kind {
                AnimationKind::SlideLeft => ANIM_PUSH_MS,
                AnimationKind::SlideRight => ANIM_BACK_MS,
                AnimationKind::Fade => ANIM_CONFIRM_MS,
            };
            self.start_transition(kind, now_ms, duration);
            self.rebuild();
            self.pending_redraw = true;
        }
    }
}
