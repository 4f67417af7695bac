//! Item labels (English only).

pub const WATCH: &str = "Info Screen";
pub const BACK: &str = "Back";
pub const MAIN: &str = "Main";

pub const PAUSE_PRINT: &str = "Pause Print";
pub const RESUME_PRINT: &str = "Resume Print";
pub const STOP_PRINT: &str = "Stop Print";
pub const STOP: &str = "Stop";
pub const TUNE: &str = "Tune";

pub const AUTOSTART: &str = "Autostart";
pub const MEDIA_MENU: &str = "Print from Media";
pub const CHANGE_MEDIA: &str = "Change Media";
pub const RELEASE_MEDIA: &str = "Release Media";
pub const NO_MEDIA: &str = "No Media";
pub const INIT_MEDIA: &str = "Init. Media";
pub const MEDIA_RELEASED: &str = "Media Released";

pub const MOTION: &str = "Motion";
pub const CUTTER: &str = "Spindle/Laser";
pub const TEMPERATURE: &str = "Temperature";
pub const MIXER: &str = "Mixer";
pub const MMU: &str = "MMU";
pub const CONFIGURATION: &str = "Configuration";
pub const USER_MENU: &str = "Custom Commands";
pub const FILAMENT_CHANGE: &str = "Change Filament";
pub const FILAMENT_PREHEAT: &str = "Preheat for Load";
pub const INFO: &str = "About Printer";
pub const LED_CONTROL: &str = "LED Control";
pub const SWITCH_PS_ON: &str = "Switch Power On";
pub const SWITCH_PS_OFF: &str = "Switch Power Off";
pub const GAMES: &str = "Games";

pub const STOP_PRINT_PROMPT: &str = "Stop Print?";

// Commands sent verbatim to the command queue.
pub const CMD_INIT_MEDIA: &str = "M21";
pub const CMD_RELEASE_MEDIA: &str = "M22";
pub const CMD_FILAMENT_CHANGE: &str = "M600 B0";
pub const CMD_POWER_ON: &str = "M80";
pub const CMD_POWER_OFF: &str = "M81";
