//! Action dispatch.

use anyhow::Result;
use tracing::trace;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{coloring, navigation, popups};

/// Dispatch an action to its handler.
///
/// Returns `Ok(true)` when the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    trace!(action = action.id(), "dispatch");
    match action {
        // Navigation
        Action::NavigateUp => navigation::handle_navigate_up(state),
        Action::NavigateDown => navigation::handle_navigate_down(state),
        Action::NavigateLeft => navigation::handle_navigate_left(state),
        Action::NavigateRight => navigation::handle_navigate_right(state),
        Action::JumpToFirst => navigation::handle_jump_to_first(state),
        Action::JumpToLast => navigation::handle_jump_to_last(state),

        // Palette
        Action::SelectColorSlot(slot) => coloring::handle_select_slot(state, slot),
        Action::NextColor => coloring::handle_cycle_color(state, true),
        Action::PreviousColor => coloring::handle_cycle_color(state, false),
        Action::ClearSelection => coloring::handle_clear_selection(state),

        // Coloring
        Action::ColorRegion => coloring::handle_color_region(state),
        Action::AutoColor => coloring::handle_auto_color(state),
        Action::Reset => coloring::handle_reset(state),

        // Help overlay
        Action::ToggleHelp => popups::handle_toggle_help(state),
        Action::ScrollUp => popups::handle_scroll(state, |h| h.scroll_up()),
        Action::ScrollDown => popups::handle_scroll(state, |h| h.scroll_down()),
        Action::PageUp => popups::handle_scroll(state, |h| h.page_up(10)),
        Action::PageDown => popups::handle_scroll(state, |h| h.page_down(10)),

        Action::Quit => Ok(true),
    }
}
