//! Static map topology: regions, adjacency lists, and the color palette.
//!
//! A `GraphModel` is built once at startup and never mutated. The built-in
//! reference map is constructed unconditionally; custom maps are read from
//! TOML files:
//!
//! ```toml
//! regions = ["A", "B", "C"]
//!
//! [neighbors]
//! A = ["B"]
//! B = ["A", "C"]
//! C = ["B"]
//!
//! [[palette]]
//! hex = "#f87171"
//! name = "red"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{Palette, PaletteEntry, Region, RgbColor};

/// Regions, adjacency, and palette of one coloring exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphModel {
    regions: Vec<Region>,
    #[serde(default)]
    neighbors: HashMap<Region, Vec<Region>>,
    palette: Palette,
}

impl GraphModel {
    /// Builds a model from its parts. No validation is performed.
    #[must_use]
    pub fn new(
        regions: Vec<Region>,
        neighbors: HashMap<Region, Vec<Region>>,
        palette: Palette,
    ) -> Self {
        Self {
            regions,
            neighbors,
            palette,
        }
    }

    /// The five-region reference map (Việt Nam, Lào, Campuchia, Thái Lan, Trung Quốc).
    #[must_use]
    pub fn reference() -> Self {
        const REGIONS: [&str; 5] = ["Việt Nam", "Lào", "Campuchia", "Thái Lan", "Trung Quốc"];
        const ADJACENCY: [(&str, &[&str]); 5] = [
            ("Việt Nam", &["Lào", "Campuchia", "Trung Quốc"]),
            ("Lào", &["Việt Nam", "Thái Lan", "Trung Quốc"]),
            ("Campuchia", &["Việt Nam", "Thái Lan"]),
            ("Thái Lan", &["Lào", "Campuchia"]),
            ("Trung Quốc", &["Việt Nam", "Lào"]),
        ];
        const COLORS: [((u8, u8, u8), &str); 6] = [
            ((0xf8, 0x71, 0x71), "đỏ"),
            ((0x60, 0xa5, 0xfa), "xanh dương"),
            ((0x34, 0xd3, 0x99), "xanh lá"),
            ((0xfa, 0xcc, 0x15), "vàng"),
            ((0xa7, 0x8b, 0xfa), "tím"),
            ((0xfb, 0x92, 0x3c), "cam"),
        ];

        let regions = REGIONS.iter().map(|&name| Region::new(name)).collect();
        let neighbors = ADJACENCY
            .iter()
            .map(|(region, list)| {
                (
                    Region::new(*region),
                    list.iter().map(|&n| Region::new(n)).collect(),
                )
            })
            .collect();
        let palette = Palette::new(
            COLORS
                .iter()
                .map(|&((r, g, b), name)| PaletteEntry::named(RgbColor::new(r, g, b), name))
                .collect(),
        );

        Self::new(regions, neighbors, palette)
    }

    /// Parses a map from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let model: Self = toml::from_str(content).context("Failed to parse map definition")?;
        Ok(model)
    }

    /// Loads a map from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read map file: {}", path.display()))?;
        Self::from_toml_str(&content).context(format!("Invalid map file: {}", path.display()))
    }

    /// Regions in declared order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Whether `region` is part of this map.
    #[must_use]
    pub fn contains(&self, region: &Region) -> bool {
        self.regions.contains(region)
    }

    /// Looks up a region by name.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&Region> {
        let name = name.trim();
        self.regions.iter().find(|r| r.name() == name)
    }

    /// Neighbors of `region`; empty when none are declared.
    #[must_use]
    pub fn neighbors_of(&self, region: &Region) -> &[Region] {
        self.neighbors.get(region).map_or(&[], Vec::as_slice)
    }

    /// The color palette in preference order.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Display name of `color`, falling back to its hex string.
    #[must_use]
    pub fn display_name(&self, color: RgbColor) -> String {
        self.palette.display_name(color)
    }

    /// Largest neighbor count over all regions.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.regions
            .iter()
            .map(|r| self.neighbors_of(r).len())
            .max()
            .unwrap_or(0)
    }

    /// Adjacency entries `(a, b)` where `b` lists no edge back to `a`.
    ///
    /// Coloring never consults this; it only feeds startup warnings.
    #[must_use]
    pub fn asymmetric_edges(&self) -> Vec<(Region, Region)> {
        let mut missing = Vec::new();
        for region in &self.regions {
            for neighbor in self.neighbors_of(region) {
                if !self.neighbors_of(neighbor).contains(region) {
                    missing.push((region.clone(), neighbor.clone()));
                }
            }
        }
        missing
    }
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::reference()
    }
}
