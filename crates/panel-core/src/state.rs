//! Per-tick machine status snapshot.

/// Read-only machine status captured once at the start of a tick.
///
/// Plain values only; it never aliases live state, so a background writer can
/// not be observed mid-update while a list is being built.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StateSnapshot {
    /// A job is actively printing.
    pub printing: bool,
    /// A job is paused.
    pub paused: bool,
    pub media_mounted: bool,
    /// A file on the media is open.
    pub media_open: bool,
    pub power_on: bool,
    /// The active hotend is hot enough to extrude.
    pub hotend_ready: bool,
}

impl StateSnapshot {
    /// Number of boolean fields, used to enumerate every snapshot.
    pub const FIELD_COUNT: u32 = 6;

    pub const fn idle() -> Self {
        Self {
            printing: false,
            paused: false,
            media_mounted: false,
            media_open: false,
            power_on: false,
            hotend_ready: false,
        }
    }

    pub const fn with_printing(mut self, printing: bool) -> Self {
        self.printing = printing;
        self
    }

    pub const fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub const fn with_media(mut self, mounted: bool, open: bool) -> Self {
        self.media_mounted = mounted;
        self.media_open = open;
        self
    }

    pub const fn with_power_on(mut self, power_on: bool) -> Self {
        self.power_on = power_on;
        self
    }

    pub const fn with_hotend_ready(mut self, hotend_ready: bool) -> Self {
        self.hotend_ready = hotend_ready;
        self
    }

    pub const fn busy(&self) -> bool {
        self.printing
    }

    /// An open file only counts while the media is mounted.
    pub const fn media_file_open(&self) -> bool {
        self.media_mounted && self.media_open
    }

    /// Snapshot whose fields are taken from the low bits of `bits`.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            printing: bits & 0b00_0001 != 0,
            paused: bits & 0b00_0010 != 0,
            media_mounted: bits & 0b00_0100 != 0,
            media_open: bits & 0b00_1000 != 0,
            power_on: bits & 0b01_0000 != 0,
            hotend_ready: bits & 0b10_0000 != 0,
        }
    }

    /// Every distinct snapshot.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..(1u32 << Self::FIELD_COUNT)).map(Self::from_bits)
    }
}
