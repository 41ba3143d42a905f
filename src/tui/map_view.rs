//! Map widget: regions drawn as a grid of colored cells, plus the neighbor
//! panel for the region under the cursor.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::AppState;
use crate::engine::conflict_preview;
use crate::models::Region;

/// Number of grid columns used to lay out `count` regions.
#[must_use]
pub fn grid_columns(count: usize) -> usize {
    let mut cols = 1;
    while cols * cols < count {
        cols += 1;
    }
    cols
}

/// Map widget renders the region grid.
pub struct MapView;

impl MapView {
    /// Render the region grid
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let regions = state.graph.regions();

        let block = Block::default()
            .title(" Map ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if regions.is_empty() {
            let empty = Paragraph::new("This map has no regions")
                .style(Style::default().fg(theme.text_muted));
            f.render_widget(empty, inner);
            return;
        }

        let cols = grid_columns(regions.len());
        let rows = regions.len().div_ceil(cols);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(inner);

        for (row, row_area) in row_areas.iter().enumerate() {
            let cell_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
                .split(*row_area);

            for (col, cell_area) in cell_areas.iter().enumerate() {
                let index = row * cols + col;
                if let Some(region) = regions.get(index) {
                    Self::render_cell(f, *cell_area, state, index, region);
                }
            }
        }
    }

    fn render_cell(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        index: usize,
        region: &Region,
    ) {
        let theme = &state.theme;
        let is_selected = index == state.cursor;
        let color = state.session.assignment().get(region);

        let (fill, text_color, label) = match color {
            Some(c) => (
                c.to_ratatui_color(),
                c.contrast_text().to_ratatui_color(),
                state.graph.display_name(c),
            ),
            None => (theme.surface, theme.text_muted, "·".to_string()),
        };

        let border_style = if is_selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.inactive)
        };
        let title = if is_selected {
            format!(" ▶ {} ", index + 1)
        } else {
            format!(" {} ", index + 1)
        };

        let text = vec![
            Line::from(Span::styled(
                region.name().to_string(),
                Style::default().fg(text_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(text_color))),
        ];

        // Push the text towards the vertical middle of the cell
        let padding = area.height.saturating_sub(4) / 2;
        let mut lines = vec![Line::from(""); padding as usize];
        lines.extend(text);

        let cell = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(fill))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(cell, area);
    }
}

/// Neighbors of the highlighted region and a preview of the selected color.
pub struct NeighborsPanel;

impl NeighborsPanel {
    /// Render the neighbor panel
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let Some(region) = state.current_region() else {
            return;
        };
        let assignment = state.session.assignment();

        let mut lines = Vec::new();
        let neighbors = state.graph.neighbors_of(region);
        if neighbors.is_empty() {
            lines.push(Line::from(Span::styled(
                "No neighbors",
                Style::default().fg(theme.text_muted),
            )));
        }
        for neighbor in neighbors {
            let (swatch, name) = match assignment.get(neighbor) {
                Some(c) => (
                    Span::styled("■ ", Style::default().fg(c.to_ratatui_color())),
                    state.graph.display_name(c),
                ),
                None => (
                    Span::styled("□ ", Style::default().fg(theme.text_muted)),
                    "uncolored".to_string(),
                ),
            };
            lines.push(Line::from(vec![
                swatch,
                Span::styled(neighbor.name().to_string(), Style::default().fg(theme.text)),
                Span::styled(format!("  {name}"), Style::default().fg(theme.text_secondary)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Self::preview_line(state, region));

        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(format!(" Neighbors of {region} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(panel, area);
    }

    fn preview_line(state: &AppState, region: &Region) -> Line<'static> {
        let theme = &state.theme;
        let assignment = state.session.assignment();

        if let Some(current) = assignment.get(region) {
            return Line::from(Span::styled(
                format!("Already {}", state.graph.display_name(current)),
                Style::default().fg(theme.text_secondary),
            ));
        }

        let Some(selected) = state.session.selected_color() else {
            return Line::from(Span::styled(
                "Pick a color to preview",
                Style::default().fg(theme.text_muted),
            ));
        };
        let color_name = state.graph.display_name(selected);

        match conflict_preview(&state.graph, assignment, region, selected) {
            Some(neighbor) => Line::from(Span::styled(
                format!("✗ {color_name} clashes with {neighbor}"),
                Style::default().fg(theme.error),
            )),
            None => Line::from(Span::styled(
                format!("✓ {color_name} fits here"),
                Style::default().fg(theme.success),
            )),
        }
    }
}
