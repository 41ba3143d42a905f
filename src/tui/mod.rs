//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod handlers;
pub mod help_overlay;
pub mod map_view;
pub mod palette_bar;
pub mod status_bar;
pub mod theme;
pub mod toast;
pub mod trace_panel;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::Config;
use crate::models::{GraphModel, Region};
use crate::session::{self, Session};
use crate::shortcuts::ShortcutRegistry;

// Re-export TUI components
pub use help_overlay::HelpOverlayState;
pub use map_view::{MapView, NeighborsPanel};
pub use palette_bar::PaletteBar;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use toast::ToastQueue;
pub use trace_panel::{ComparisonPanel, StatsPanel, TracePanel};

/// Application state - single source of truth
///
/// The session holds everything the coloring rules care about; the rest is
/// view state (cursor, overlays, messages).
pub struct AppState {
    // Map and coloring
    /// Map being colored (never mutated)
    pub graph: GraphModel,
    /// Selection, assignment, trace, and comparison
    pub session: Session,

    // UI state
    /// Index of the highlighted region in declared order
    pub cursor: usize,
    /// Live toast notifications
    pub toasts: ToastQueue,
    /// Help overlay, when open
    pub help: Option<HelpOverlayState>,
    /// Persistent status line text
    pub status_message: String,
    /// Seed of the last automatic run
    pub last_seed: Option<u64>,
    /// Active color theme
    pub theme: Theme,

    // System
    /// Loaded configuration
    pub config: Config,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Set to leave the main loop
    pub should_quit: bool,
}

impl AppState {
    /// Create a new `AppState`, resolving the theme from the config.
    #[must_use]
    pub fn new(graph: GraphModel, config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self::with_theme(graph, config, theme)
    }

    /// Create a new `AppState` with an explicit theme.
    #[must_use]
    pub fn with_theme(graph: GraphModel, config: Config, theme: Theme) -> Self {
        let toasts = ToastQueue::new(Duration::from_millis(config.ui.toast_duration_ms));
        let help = config.ui.show_help_on_startup.then(HelpOverlayState::new);

        Self {
            graph,
            session: Session::new(),
            cursor: 0,
            toasts,
            help,
            status_message: String::new(),
            last_seed: None,
            theme,
            config,
            shortcuts: ShortcutRegistry::new(),
            should_quit: false,
        }
    }

    /// Region under the cursor.
    #[must_use]
    pub fn current_region(&self) -> Option<&Region> {
        self.graph.regions().get(self.cursor)
    }

    /// Applies a session action, routing notifications to the toast queue.
    pub fn apply(&mut self, action: session::Action) {
        if let Some(result) = self.session.dispatch(&self.graph, action, &mut self.toasts) {
            info!(%result, "comparison changed");
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message.clear();
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.toasts.prune(Instant::now());

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout; resize just re-renders
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(6), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    state.toasts.render(f, chunks[1], &state.theme);

    if let Some(help) = &state.help {
        help.render(f, f.area(), &state.theme);
    }
}

/// Render title bar with the map summary
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let stats = state.session.stats(&state.graph);
    let title = Line::from(vec![
        Span::styled(
            " Map Coloring ",
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "- {} regions, {} colors in palette",
                stats.region_count, stats.palette_size
            ),
            Style::default().fg(state.theme.text_secondary),
        ),
    ]);

    let title_widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(title_widget, area);
}

/// Render main content: map and palette on the left, panels on the right
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(columns[0]);

    MapView::render(f, left[0], state);
    PaletteBar::render(f, left[1], state);

    let neighbor_height = state.graph.max_degree() as u16 + 5;
    let right = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),               // Progress
            Constraint::Length(neighbor_height), // Neighbors
            Constraint::Min(4),                  // Trace
            Constraint::Length(4),               // Comparison
        ])
        .split(columns[1]);

    StatsPanel::render(f, right[0], state);
    NeighborsPanel::render(f, right[1], state);
    TracePanel::render(f, right[2], state);
    ComparisonPanel::render(f, right[3], state);
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // Ignore key release/repeat events reported by some terminals
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    if state.help.is_some() {
        return handlers::handle_help_input(state, key);
    }

    handlers::handle_main_input(state, key)
}
