use crate::{
    capabilities::{CapabilitySet, FilamentChangeMode, GameEntry, MediaLayout},
    error::MenuError,
    item::{Handler, MenuBuilder},
    labels,
    machine::ControlAction,
    screen::ScreenId,
    state::StateSnapshot,
};

/// Root screen of the panel.
pub fn main_menu(
    snapshot: &StateSnapshot,
    caps: &CapabilitySet,
    menu: &mut MenuBuilder<'_>,
) -> Result<(), MenuError> {
    let busy = snapshot.busy();
    let layout = caps.media_layout();

    menu.back(labels::WATCH)?;

    if busy {
        if caps.can_pause() {
            menu.control(labels::PAUSE_PRINT, ControlAction::Pause)?;
        }
        if caps.can_stop() {
            menu.submenu(labels::STOP_PRINT, ScreenId::AbortConfirm)?;
        }
        menu.submenu(labels::TUNE, ScreenId::Tune)?;
    } else {
        if caps.sd_support && layout == MediaLayout::BeforeResume {
            media_items(snapshot, caps, layout, menu)?;
        }
        if caps.can_pause() && snapshot.paused {
            menu.control(labels::RESUME_PRINT, ControlAction::Resume)?;
        }
        menu.submenu(labels::MOTION, ScreenId::Motion)?;
    }

    if caps.cutter {
        menu.submenu(labels::CUTTER, ScreenId::Cutter)?;
    }

    menu.submenu(labels::TEMPERATURE, ScreenId::Temperature)?;

    if caps.mixing_extruder {
        menu.submenu(labels::MIXER, ScreenId::Mixer)?;
    }

    if caps.mmu_menus && !busy {
        menu.submenu(labels::MMU, ScreenId::Mmu)?;
    }

    menu.submenu(labels::CONFIGURATION, ScreenId::Configuration)?;

    if let Some(title) = caps.custom_user_menu {
        menu.submenu(title, ScreenId::UserMenu)?;
    }

    match caps.filament_change {
        Some(FilamentChangeMode::SingleExtruder) if snapshot.hotend_ready => {
            menu.command(labels::FILAMENT_CHANGE, labels::CMD_FILAMENT_CHANGE)?;
        }
        Some(FilamentChangeMode::SingleExtruder) => {
            menu.submenu(labels::FILAMENT_CHANGE, ScreenId::FilamentPreheat)?;
        }
        Some(FilamentChangeMode::MultiExtruder) => {
            menu.submenu(labels::FILAMENT_CHANGE, ScreenId::FilamentChange)?;
        }
        None => {}
    }

    if caps.info_menu {
        menu.submenu(labels::INFO, ScreenId::Info)?;
    }

    if caps.led_control_menu {
        menu.submenu(labels::LED_CONTROL, ScreenId::Led)?;
    }

    if caps.power_switch {
        if snapshot.power_on {
            menu.command(labels::SWITCH_PS_OFF, labels::CMD_POWER_OFF)?;
        } else {
            menu.command(labels::SWITCH_PS_ON, labels::CMD_POWER_ON)?;
        }
    }

    if caps.sd_support && layout == MediaLayout::AfterPower && !busy {
        media_items(snapshot, caps, layout, menu)?;
    }

    for (slot, name) in caps.service_intervals.iter().enumerate() {
        if let Some(name) = *name {
            menu.submenu(name, ScreenId::ServiceInterval(slot as u8))?;
        }
    }

    if caps.games_visible() {
        if caps.games_easter_egg {
            menu.skip()?.skip()?;
        }
        match caps.games {
            Some(GameEntry::Menu) => {
                menu.submenu(labels::GAMES, ScreenId::GameMenu)?;
            }
            Some(GameEntry::Single(game)) => {
                menu.control(labels::GAMES, ControlAction::EnterGame(game))?;
            }
            None => {}
        }
    }

    Ok(())
}

/// Autostart slot plus mount-dependent media entries. Only used while idle.
fn media_items(
    snapshot: &StateSnapshot,
    caps: &CapabilitySet,
    layout: MediaLayout,
    menu: &mut MenuBuilder<'_>,
) -> Result<(), MenuError> {
    if caps.menu_autostart {
        menu.control(labels::AUTOSTART, ControlAction::Autostart)?;
    } else {
        menu.skip()?;
    }

    if snapshot.media_mounted {
        if snapshot.media_file_open() {
            return Ok(());
        }
        let (label, text) = if caps.sd_detect_pin {
            (labels::CHANGE_MEDIA, labels::CMD_INIT_MEDIA)
        } else {
            (labels::RELEASE_MEDIA, labels::CMD_RELEASE_MEDIA)
        };
        match layout {
            MediaLayout::BeforeResume => {
                menu.submenu(labels::MEDIA_MENU, ScreenId::Media)?
                    .command(label, text)?;
            }
            MediaLayout::AfterPower => {
                menu.command(label, text)?
                    .submenu(labels::MEDIA_MENU, ScreenId::Media)?;
            }
        }
    } else if caps.sd_detect_pin {
        menu.action(labels::NO_MEDIA, Handler::Inert)?;
    } else {
        menu.command(labels::INIT_MEDIA, labels::CMD_INIT_MEDIA)?
            .action(labels::MEDIA_RELEASED, Handler::Inert)?;
    }

    Ok(())
}
