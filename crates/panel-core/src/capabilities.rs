//! Startup-resolved feature and layout flags.

/// Built-in games that can be entered from the main menu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Game {
    Brickout,
    Invaders,
    Snake,
    Maze,
}

/// How the games entry is presented.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameEntry {
    /// More than one game: show a games submenu.
    Menu,
    /// Exactly one game: enter it directly.
    Single(Game),
}

/// Filament change flavour offered from the main menu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilamentChangeMode {
    /// One extruder: change directly when the hotend is hot, otherwise go
    /// through the preheat screen.
    SingleExtruder,
    /// Several extruders: always open the change-filament submenu.
    MultiExtruder,
}

/// Order in which the media block is placed relative to the resume item.
///
/// Presentation only, never affects which items exist.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaLayout {
    /// Media items before resume/motion; media submenu before the change command.
    BeforeResume,
    /// Media items near the end of the menu; change command before the media submenu.
    AfterPower,
}

pub const MAX_SERVICE_INTERVALS: usize = 3;

/// Feature set the menus are built against. Immutable after startup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CapabilitySet {
    pub sd_support: bool,
    /// Media-detect hardware is present.
    pub sd_detect_pin: bool,
    pub menu_autostart: bool,
    pub host_prompt_support: bool,
    pub park_head_on_pause: bool,
    pub action_on_pause: bool,
    pub action_on_cancel: bool,
    pub encoder_wheel: bool,
    pub cutter: bool,
    pub mixing_extruder: bool,
    pub mmu_menus: bool,
    /// Title of the custom user menu when enabled.
    pub custom_user_menu: Option<&'static str>,
    pub filament_change: Option<FilamentChangeMode>,
    pub info_menu: bool,
    pub led_control_menu: bool,
    pub power_switch: bool,
    /// Display names of configured service intervals.
    pub service_intervals: [Option<&'static str>; MAX_SERVICE_INTERVALS],
    pub games: Option<GameEntry>,
    pub games_easter_egg: bool,
}

impl Default for CapabilitySet {
    fn default() -> Self {
        Self {
            sd_support: true,
            sd_detect_pin: true,
            menu_autostart: false,
            host_prompt_support: false,
            park_head_on_pause: false,
            action_on_pause: false,
            action_on_cancel: false,
            encoder_wheel: false,
            cutter: false,
            mixing_extruder: false,
            mmu_menus: false,
            custom_user_menu: None,
            filament_change: None,
            info_menu: false,
            led_control_menu: false,
            power_switch: false,
            service_intervals: [None; MAX_SERVICE_INTERVALS],
            games: None,
            games_easter_egg: false,
        }
    }
}

impl CapabilitySet {
    /// Everything disabled, including media support.
    pub const fn minimal() -> Self {
        Self {
            sd_support: false,
            sd_detect_pin: false,
            menu_autostart: false,
            host_prompt_support: false,
            park_head_on_pause: false,
            action_on_pause: false,
            action_on_cancel: false,
            encoder_wheel: false,
            cutter: false,
            mixing_extruder: false,
            mmu_menus: false,
            custom_user_menu: None,
            filament_change: None,
            info_menu: false,
            led_control_menu: false,
            power_switch: false,
            service_intervals: [None; MAX_SERVICE_INTERVALS],
            games: None,
            games_easter_egg: false,
        }
    }

    pub const fn with_sd_support(mut self, sd_support: bool) -> Self {
        self.sd_support = sd_support;
        self
    }

    pub const fn with_sd_detect_pin(mut self, sd_detect_pin: bool) -> Self {
        self.sd_detect_pin = sd_detect_pin;
        self
    }

    pub const fn with_menu_autostart(mut self, menu_autostart: bool) -> Self {
        self.menu_autostart = menu_autostart;
        self
    }

    pub const fn with_host_prompt_support(mut self, host_prompt_support: bool) -> Self {
        self.host_prompt_support = host_prompt_support;
        self
    }

    pub const fn with_park_head_on_pause(mut self, park_head_on_pause: bool) -> Self {
        self.park_head_on_pause = park_head_on_pause;
        self
    }

    pub const fn with_action_on_pause(mut self, action_on_pause: bool) -> Self {
        self.action_on_pause = action_on_pause;
        self
    }

    pub const fn with_action_on_cancel(mut self, action_on_cancel: bool) -> Self {
        self.action_on_cancel = action_on_cancel;
        self
    }

    pub const fn with_encoder_wheel(mut self, encoder_wheel: bool) -> Self {
        self.encoder_wheel = encoder_wheel;
        self
    }

    pub const fn with_cutter(mut self, cutter: bool) -> Self {
        self.cutter = cutter;
        self
    }

    pub const fn with_mixing_extruder(mut self, mixing_extruder: bool) -> Self {
        self.mixing_extruder = mixing_extruder;
        self
    }

    pub const fn with_mmu_menus(mut self, mmu_menus: bool) -> Self {
        self.mmu_menus = mmu_menus;
        self
    }

    pub const fn with_custom_user_menu(mut self, title: Option<&'static str>) -> Self {
        self.custom_user_menu = title;
        self
    }

    pub const fn with_filament_change(mut self, mode: Option<FilamentChangeMode>) -> Self {
        self.filament_change = mode;
        self
    }

    pub const fn with_info_menu(mut self, info_menu: bool) -> Self {
        self.info_menu = info_menu;
        self
    }

    pub const fn with_led_control_menu(mut self, led_control_menu: bool) -> Self {
        self.led_control_menu = led_control_menu;
        self
    }

    pub const fn with_power_switch(mut self, power_switch: bool) -> Self {
        self.power_switch = power_switch;
        self
    }

    pub const fn with_service_intervals(
        mut self,
        names: [Option<&'static str>; MAX_SERVICE_INTERVALS],
    ) -> Self {
        self.service_intervals = names;
        self
    }

    pub const fn with_games(mut self, games: Option<GameEntry>) -> Self {
        self.games = games;
        self
    }

    pub const fn with_games_easter_egg(mut self, games_easter_egg: bool) -> Self {
        self.games_easter_egg = games_easter_egg;
        self
    }

    /// A running job can be paused from the panel.
    pub const fn can_pause(&self) -> bool {
        self.sd_support || self.host_prompt_support || self.park_head_on_pause || self.action_on_pause
    }

    /// A running job can be stopped from the panel.
    pub const fn can_stop(&self) -> bool {
        self.sd_support || self.host_prompt_support || self.action_on_cancel
    }

    /// The info menu takes the games slot.
    pub const fn games_visible(&self) -> bool {
        self.games.is_some() && !self.info_menu
    }

    pub const fn media_layout(&self) -> MediaLayout {
        if self.encoder_wheel {
            MediaLayout::AfterPower
        } else {
            MediaLayout::BeforeResume
        }
    }

    pub fn service_interval_count(&self) -> usize {
        self.service_intervals
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }
}
