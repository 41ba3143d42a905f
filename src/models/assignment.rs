//! Region → color assignments.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{GraphModel, Region, RgbColor};

/// Mapping from region to its assigned color.
///
/// New entries are only added through the coloring engine, which keeps
/// adjacent regions on distinct colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    colors: BTreeMap<Region, RgbColor>,
}

impl Assignment {
    /// An empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Color assigned to `region`, if any.
    #[must_use]
    pub fn get(&self, region: &Region) -> Option<RgbColor> {
        self.colors.get(region).copied()
    }

    /// Whether `region` already has a color.
    #[must_use]
    pub fn is_colored(&self, region: &Region) -> bool {
        self.colors.contains_key(region)
    }

    /// Number of colored regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether nothing is colored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colored regions and their colors, ordered by region name.
    pub fn iter(&self) -> impl Iterator<Item = (&Region, RgbColor)> {
        self.colors.iter().map(|(r, c)| (r, *c))
    }

    /// Number of distinct colors in use.
    #[must_use]
    pub fn distinct_color_count(&self) -> usize {
        self.colors.values().collect::<BTreeSet<_>>().len()
    }

    /// Whether every region of `graph` has a color.
    #[must_use]
    pub fn is_complete(&self, graph: &GraphModel) -> bool {
        graph.regions().iter().all(|r| self.is_colored(r))
    }

    /// Adjacent pairs sharing a color, each reported once per direction it is declared.
    #[must_use]
    pub fn conflicts(&self, graph: &GraphModel) -> Vec<(Region, Region)> {
        let mut found = Vec::new();
        for (region, color) in &self.colors {
            for neighbor in graph.neighbors_of(region) {
                if self.colors.get(neighbor) == Some(color) {
                    found.push((region.clone(), neighbor.clone()));
                }
            }
        }
        found
    }

    /// Whether no two adjacent regions share a color.
    #[must_use]
    pub fn is_conflict_free(&self, graph: &GraphModel) -> bool {
        self.conflicts(graph).is_empty()
    }

    pub(crate) fn with(mut self, region: Region, color: RgbColor) -> Self {
        self.colors.insert(region, color);
        self
    }

    pub(crate) fn insert(&mut self, region: Region, color: RgbColor) {
        self.colors.insert(region, color);
    }
}
