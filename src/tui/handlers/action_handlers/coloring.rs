// Coloring action handlers

use crate::engine::VisitOrder;
use crate::session::Action as SessionAction;
use crate::tui::AppState;
use anyhow::Result;
use tracing::info;

/// Handle selecting a palette color by slot
pub fn handle_select_slot(state: &mut AppState, slot: usize) -> Result<bool> {
    match state.graph.palette().color_at(slot) {
        Some(color) => {
            state.apply(SessionAction::SelectColor(color));
            state.clear_status();
        }
        None => state.set_status(format!("No color {} in this palette", slot + 1)),
    }
    Ok(false)
}

/// Handle cycling through the palette
pub fn handle_cycle_color(state: &mut AppState, forward: bool) -> Result<bool> {
    let palette = state.graph.palette();
    let len = palette.len();
    if len == 0 {
        return Ok(false);
    }

    let current = state
        .session
        .selected_color()
        .and_then(|c| palette.index_of(c));
    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    };

    handle_select_slot(state, next)
}

/// Handle clearing the selected color
pub fn handle_clear_selection(state: &mut AppState) -> Result<bool> {
    if state.session.selected_color().is_some() {
        state.apply(SessionAction::ClearSelection);
        state.set_status("Color selection cleared");
    }
    Ok(false)
}

/// Handle coloring the region under the cursor
pub fn handle_color_region(state: &mut AppState) -> Result<bool> {
    if let Some(region) = state.current_region().cloned() {
        state.apply(SessionAction::ColorRegion(region));
        state.clear_status();
    }
    Ok(false)
}

/// Handle greedy auto-coloring with a fresh random order
pub fn handle_auto_color(state: &mut AppState) -> Result<bool> {
    let seed: u64 = rand::random();
    let order = VisitOrder::shuffled(&state.graph, seed);
    info!(seed, "auto-coloring");

    state.last_seed = Some(seed);
    state.apply(SessionAction::AutoColor(order));
    state.set_status(format!("Greedy run with seed {seed} (replay: mapcolor auto --seed {seed})"));
    Ok(false)
}

/// Handle reset
pub fn handle_reset(state: &mut AppState) -> Result<bool> {
    state.apply(SessionAction::Reset);
    state.last_seed = None;
    state.set_status("Map cleared");
    Ok(false)
}
