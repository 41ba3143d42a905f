//! Side panels: session counters, the auto-coloring trace, and the
//! comparison with the greedy baseline.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::AppState;

/// Colors used, regions colored.
pub struct StatsPanel;

impl StatsPanel {
    /// Render the counters
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let stats = state.session.stats(&state.graph);

        let label = Style::default().fg(theme.text_secondary);
        let value = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(vec![
                Span::styled("Colors used:     ", label),
                Span::styled(
                    format!("{} / {}", stats.colors_used, stats.palette_size),
                    value,
                ),
            ]),
            Line::from(vec![
                Span::styled("Regions colored: ", label),
                Span::styled(
                    format!("{} / {}", stats.regions_colored, stats.region_count),
                    value,
                ),
            ]),
        ];

        let panel = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(" Progress ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(panel, area);
    }
}

/// Step-by-step explanation of the last automatic run.
pub struct TracePanel;

impl TracePanel {
    /// Render the trace of the last auto-coloring
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let log = state.session.log();

        let mut lines = Vec::new();
        if log.is_empty() {
            lines.push(Line::from(Span::styled(
                "Press 'a' to watch the greedy algorithm color the map.",
                Style::default().fg(theme.text_muted),
            )));
        }

        for entry in log {
            lines.push(Line::from(vec![
                Span::styled("✅ ", Style::default().fg(theme.success)),
                Span::styled(
                    entry.region.name().to_string(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("   → color: ", Style::default().fg(theme.text_secondary)),
                Span::styled("■ ", Style::default().fg(entry.color.to_ratatui_color())),
                Span::styled(entry.color_name.clone(), Style::default().fg(theme.text)),
            ]));

            let used = if entry.used_neighbors.is_empty() {
                "none".to_string()
            } else {
                entry
                    .used_neighbors
                    .iter()
                    .map(|n| format!("{} ({})", n.name, n.color_name))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            lines.push(Line::from(Span::styled(
                format!("   → colored neighbors: {used}"),
                Style::default().fg(theme.text_secondary),
            )));
        }

        let title = match state.last_seed {
            Some(seed) if !log.is_empty() => format!(" Greedy trace (seed {seed}) "),
            _ => " Greedy trace ".to_string(),
        };

        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(panel, area);
    }
}

/// Persistent comparison with the greedy baseline.
pub struct ComparisonPanel;

impl ComparisonPanel {
    /// Render the comparison panel
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let result = state.session.comparison();

        let panel = Paragraph::new(result.summary())
            .wrap(Wrap { trim: true })
            .style(
                Style::default()
                    .fg(theme.comparison_color(result))
                    .bg(theme.background),
            )
            .block(
                Block::default()
                    .title(" Comparison ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.comparison_color(result))),
            );
        f.render_widget(panel, area);
    }
}
