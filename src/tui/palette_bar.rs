//! Palette bar: numbered color swatches with the current selection.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Palette widget
pub struct PaletteBar;

impl PaletteBar {
    /// Render the palette as one line of swatches
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let selected = state.session.selected_color();

        let mut spans = Vec::new();
        for (i, entry) in state.graph.palette().entries().iter().enumerate() {
            let name = state.graph.display_name(entry.hex);
            let is_selected = selected == Some(entry.hex);

            let swatch = Style::default()
                .bg(entry.hex.to_ratatui_color())
                .fg(entry.hex.contrast_text().to_ratatui_color());
            let label = if is_selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text_secondary)
            };

            spans.push(Span::styled(format!(" {} ", i + 1), swatch));
            spans.push(Span::styled(format!(" {name} "), label));
            spans.push(Span::raw(" "));
        }

        let title = match selected {
            Some(color) => format!(" Palette: {} ", state.graph.display_name(color)),
            None => " Palette: no color selected ".to_string(),
        };

        let bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(bar, area);
    }
}
