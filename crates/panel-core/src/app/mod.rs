//! Tick-driven menu application: snapshot, rebuild, input, dispatch.

use log::{debug, info, warn};

use crate::{
    capabilities::CapabilitySet,
    dispatch::{ActionDispatcher, DispatchOutcome},
    error::ConfigError,
    input::{InputEvent, InputProvider},
    item::{MAX_MENU_ITEMS, MenuItem, MenuList},
    machine::{CommandQueue, ControlActions, StatusSource},
    navigation::NavigationStack,
    render::{AnimationKind, AnimationSpec, MenuItemView, MenuView},
    screen::{ScreenId, ScreenKind, ScreenRegistry},
    state::StateSnapshot,
};

const ANIM_PUSH_MS: u16 = 180;
const ANIM_BACK_MS: u16 = 160;
const ANIM_CONFIRM_MS: u16 = 220;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

pub struct MenuApp<M, IN>
where
    M: StatusSource + ControlActions + CommandQueue,
    IN: InputProvider,
{
    machine: M,
    input: IN,
    registry: ScreenRegistry,
    caps: CapabilitySet,
    nav: NavigationStack,
    dispatcher: ActionDispatcher,
    snapshot: StateSnapshot,
    items: MenuList,
    pending_redraw: bool,
    /// Cursor was clamped by this tick's rebuild; presses are held back.
    cursor_clamped: bool,
    transition: Option<AnimationSpec>,
    last_dispatch: Option<DispatchOutcome>,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
