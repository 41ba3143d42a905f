// Navigation action handlers

use crate::tui::map_view::grid_columns;
use crate::tui::AppState;
use anyhow::Result;

fn columns(state: &AppState) -> usize {
    grid_columns(state.graph.regions().len())
}

/// Handle navigate up action
pub fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    let cols = columns(state);
    if state.cursor >= cols {
        state.cursor -= cols;
        state.clear_status();
    }
    Ok(false)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    let cols = columns(state);
    if state.cursor + cols < state.graph.regions().len() {
        state.cursor += cols;
        state.clear_status();
    }
    Ok(false)
}

/// Handle navigate left action
pub fn handle_navigate_left(state: &mut AppState) -> Result<bool> {
    if state.cursor % columns(state) > 0 {
        state.cursor -= 1;
        state.clear_status();
    }
    Ok(false)
}

/// Handle navigate right action
pub fn handle_navigate_right(state: &mut AppState) -> Result<bool> {
    let next = state.cursor + 1;
    if next < state.graph.regions().len() && next % columns(state) != 0 {
        state.cursor = next;
        state.clear_status();
    }
    Ok(false)
}

/// Handle jump to first region
pub fn handle_jump_to_first(state: &mut AppState) -> Result<bool> {
    state.cursor = 0;
    state.clear_status();
    Ok(false)
}

/// Handle jump to last region
pub fn handle_jump_to_last(state: &mut AppState) -> Result<bool> {
    state.cursor = state.graph.regions().len().saturating_sub(1);
    state.clear_status();
    Ok(false)
}
