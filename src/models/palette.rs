//! The ordered set of colors available for assignment.
//!
//! Palette order is load-bearing: greedy coloring picks the first entry
//! not excluded by an already-colored neighbor.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// A single palette color with an optional human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// The color value (serialized as "#RRGGBB").
    pub hex: RgbColor,
    /// Display name (e.g., "đỏ"). Falls back to the hex string when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PaletteEntry {
    /// Creates a named palette entry.
    #[must_use]
    pub fn named(hex: RgbColor, name: impl Into<String>) -> Self {
        Self {
            hex,
            name: Some(name.into()),
        }
    }
}

/// Ordered color palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Creates a palette from entries in preference order.
    #[must_use]
    pub const fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Entries in preference order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Colors in preference order.
    pub fn colors(&self) -> impl Iterator<Item = RgbColor> + '_ {
        self.entries.iter().map(|e| e.hex)
    }

    /// Number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color at `index` in palette order.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<RgbColor> {
        self.entries.get(index).map(|e| e.hex)
    }

    /// Position of `color` in palette order.
    #[must_use]
    pub fn index_of(&self, color: RgbColor) -> Option<usize> {
        self.entries.iter().position(|e| e.hex == color)
    }

    /// Human-readable name of `color`, or its hex string if none is registered.
    #[must_use]
    pub fn display_name(&self, color: RgbColor) -> String {
        self.entries
            .iter()
            .find(|e| e.hex == color)
            .and_then(|e| e.name.clone())
            .unwrap_or_else(|| color.to_hex())
    }

    /// Resolves user input to a color: a display name (case-insensitive) or a hex code.
    ///
    /// Hex codes are accepted even when they are not part of the palette.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Option<RgbColor> {
        let text = text.trim();
        let wanted = text.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name.as_deref().is_some_and(|n| n.to_lowercase() == wanted))
            .map(|e| e.hex)
            .or_else(|| RgbColor::from_hex(text).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette::new(vec![
            PaletteEntry::named(RgbColor::new(0xf8, 0x71, 0x71), "đỏ"),
            PaletteEntry {
                hex: RgbColor::new(0x60, 0xa5, 0xfa),
                name: None,
            },
        ])
    }

    #[test]
    fn test_display_name_registered() {
        let palette = sample();
        assert_eq!(palette.display_name(RgbColor::new(0xf8, 0x71, 0x71)), "đỏ");
    }

    #[test]
    fn test_display_name_falls_back_to_hex() {
        let palette = sample();
        // Entry without a name
        assert_eq!(
            palette.display_name(RgbColor::new(0x60, 0xa5, 0xfa)),
            "#60A5FA"
        );
        // Color not in the palette at all
        assert_eq!(palette.display_name(RgbColor::new(1, 2, 3)), "#010203");
    }

    #[test]
    fn test_resolve_by_name_and_hex() {
        let palette = sample();
        assert_eq!(
            palette.resolve("ĐỎ"),
            Some(RgbColor::new(0xf8, 0x71, 0x71))
        );
        assert_eq!(
            palette.resolve("#60a5fa"),
            Some(RgbColor::new(0x60, 0xa5, 0xfa))
        );
        assert_eq!(palette.resolve("purple"), None);
    }

    #[test]
    fn test_order_is_preserved() {
        let palette = sample();
        assert_eq!(palette.color_at(0), Some(RgbColor::new(0xf8, 0x71, 0x71)));
        assert_eq!(palette.index_of(RgbColor::new(0x60, 0xa5, 0xfa)), Some(1));
        assert_eq!(palette.len(), 2);
    }
}
