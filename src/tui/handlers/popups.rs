//! Popup input handlers.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::contexts;
use crate::tui::AppState;

/// Handle input while the help overlay is open
pub fn handle_help_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(contexts::HELP, key) {
        super::dispatch_action(state, action)
    } else {
        Ok(false)
    }
}
