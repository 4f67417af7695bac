impl<M, IN> MenuApp<M, IN>
where
    M: StatusSource + ControlActions + CommandQueue,
    IN: InputProvider,
{
    /// Validates `registry` against `caps` and opens its root screen.
    pub fn new(
        machine: M,
        input: IN,
        registry: ScreenRegistry,
        caps: CapabilitySet,
    ) -> Result<Self, ConfigError> {
        registry.validate(&caps)?;

        let snapshot = machine.snapshot();
        let nav = NavigationStack::new(registry.root());
        let mut app = Self {
            machine,
            input,
            registry,
            caps,
            nav,
            dispatcher: ActionDispatcher::new(),
            snapshot,
            items: MenuList::new(),
            pending_redraw: true,
            cursor_clamped: false,
            transition: None,
            last_dispatch: None,
        };
        app.rebuild();
        info!(
            "ui-menu: started root={:?} items={}",
            app.nav.current_screen(),
            app.items.len()
        );
        Ok(app)
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.refresh();
        self.process_inputs(now_ms);

        let rendered = if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(MenuView<'_>),
    {
        let mut views = [MenuItemView::default(); MAX_MENU_ITEMS];
        for (view, item) in views.iter_mut().zip(self.items.iter()) {
            *view = MenuItemView {
                label: item.label(),
                kind: item.kind(),
            };
        }

        let screen = self.nav.current_screen();
        let def = self.registry.get(screen);
        let prompt = match def.map(|def| def.kind) {
            Some(ScreenKind::Confirm(_)) => self.dispatcher.gate().prompt(),
            _ => None,
        };

        f(MenuView {
            screen,
            title: def.map_or("", |def| def.title),
            items: &views[..self.items.len()],
            cursor: self.nav.cursor(),
            prompt,
            animation: self.transition_frame(now_ms),
        });
    }

    pub fn current_screen(&self) -> ScreenId {
        self.nav.current_screen()
    }

    pub fn cursor(&self) -> usize {
        self.nav.cursor()
    }

    pub fn depth(&self) -> usize {
        self.nav.depth()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn snapshot(&self) -> &StateSnapshot {
        &self.snapshot
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.caps
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.nav
    }

    pub fn confirmation_pending(&self) -> bool {
        self.dispatcher.gate().is_pending()
    }

    /// Outcome of the most recent press, if any.
    pub fn last_dispatch(&self) -> Option<DispatchOutcome> {
        self.last_dispatch
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut M {
        &mut self.machine
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }
}
