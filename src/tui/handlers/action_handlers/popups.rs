// Popup action handlers

use crate::tui::{AppState, HelpOverlayState};
use anyhow::Result;

/// Handle toggle help action
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    state.help = match state.help {
        Some(_) => None,
        None => Some(HelpOverlayState::new()),
    };
    Ok(false)
}

/// Apply a scroll operation to the open help overlay
pub fn handle_scroll(
    state: &mut AppState,
    scroll: impl FnOnce(&mut HelpOverlayState),
) -> Result<bool> {
    if let Some(help) = state.help.as_mut() {
        scroll(help);
    }
    Ok(false)
}
