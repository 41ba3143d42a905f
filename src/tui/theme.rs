//! Theme system for consistent UI colors across dark and light modes.
//!
//! The theme follows the configured [`ThemeMode`]; `Auto` asks the OS
//! whether it is in dark or light mode.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::engine::ComparisonResult;
use crate::session::Severity;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights and the region cursor
    pub accent: Color,
    /// Success state color
    pub success: Color,
    /// Error state color
    pub error: Color,
    /// Warning state color
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels
    pub text_secondary: Color,
    /// Muted text color for hints and uncolored regions
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Surface color for panels and toasts
    pub surface: Color,

    // State indicators
    /// Active/focused element color
    pub active: Color,
    /// Inactive element color
    pub inactive: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for a configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(30, 30, 30),

            active: Color::Yellow,
            inactive: Color::Gray,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(245, 245, 245),

            active: Color::Rgb(180, 100, 0),
            inactive: Color::Rgb(180, 180, 180),
        }
    }

    /// Border/text color for a notification severity.
    #[must_use]
    pub const fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.primary,
            Severity::Success => self.success,
            Severity::Error => self.error,
        }
    }

    /// Color of the comparison panel.
    #[must_use]
    pub const fn comparison_color(&self, result: ComparisonResult) -> Color {
        match result {
            ComparisonResult::Unknown => self.text_muted,
            ComparisonResult::Match => self.success,
            ComparisonResult::Mismatch => self.warning,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Yellow is too bright for a light background
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_from_explicit_mode() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_severity_colors_distinct() {
        let theme = Theme::dark();
        assert_ne!(
            theme.severity_color(Severity::Success),
            theme.severity_color(Severity::Error)
        );
        assert_eq!(
            theme.comparison_color(ComparisonResult::Match),
            theme.success
        );
    }
}
