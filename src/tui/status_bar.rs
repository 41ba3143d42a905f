//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::shortcuts::{HelpEntry, HELP_OVERLAY_HINTS, MAIN_HELP};

/// Main-view shortcuts listed in the help line; "?" is always appended.
const STATUS_HINT_KEYS: &[&str] = &["1-9", "Enter / Space", "a", "r", "q / Ctrl+Q"];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        // First line: status message or the selection summary
        if state.status_message.is_empty() {
            content_lines.push(Self::selection_line(state, theme));
        } else {
            content_lines.push(Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            )));
        }

        if let Some(region) = state.current_region() {
            let color = state
                .session
                .assignment()
                .get(region)
                .map_or_else(|| "uncolored".to_string(), |c| state.graph.display_name(c));
            content_lines.push(Line::from(vec![
                Span::styled("Region: ", Style::default().fg(theme.primary)),
                Span::styled(region.name().to_string(), Style::default().fg(theme.text)),
                Span::styled(format!(" ({color})"), Style::default().fg(theme.text_muted)),
            ]));
        }

        // 6 height - 2 for borders = 4 lines, minus 1 for help = 3 for content
        const MAX_CONTENT_LINES: usize = 3;

        let padding_needed = MAX_CONTENT_LINES.saturating_sub(content_lines.len());
        let mut status_text: Vec<Line> =
            content_lines.into_iter().take(MAX_CONTENT_LINES).collect();
        for _ in 0..padding_needed {
            status_text.push(Line::from(""));
        }
        status_text.push(Self::get_contextual_help_line(state, theme));

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn selection_line(state: &AppState, theme: &Theme) -> Line<'static> {
        match state.session.selected_color() {
            Some(color) => Line::from(vec![
                Span::styled("Selected: ", Style::default().fg(theme.primary)),
                Span::styled("■ ", Style::default().fg(color.to_ratatui_color())),
                Span::styled(
                    state.graph.display_name(color),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::from(Span::styled(
                "No color selected. Press 1-9 to pick one.",
                Style::default().fg(theme.text_muted),
            )),
        }
    }

    /// Get contextual help line (bottom help line)
    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: Vec<&HelpEntry> = if state.help.is_some() {
            HELP_OVERLAY_HINTS.iter().collect()
        } else {
            MAIN_HELP
                .iter()
                .flat_map(|(_, entries)| entries.iter())
                .filter(|e| STATUS_HINT_KEYS.contains(&e.keys))
                .collect()
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, entry) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(entry.keys, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(entry.hint));
        }

        if state.help.is_none() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("?", Style::default().fg(theme.accent)));
            spans.push(Span::raw(": Help"));
        }

        Line::from(spans)
    }
}
