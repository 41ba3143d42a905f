//! Validated manual coloring.

use std::fmt;
use tracing::debug;

use crate::models::{Assignment, GraphModel, Region, RgbColor};

/// Why a manual coloring attempt was rejected. The assignment is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// No palette color is selected.
    NoColorSelected,
    /// The region is not part of the map.
    UnknownRegion(Region),
    /// The region already holds a color; only a reset clears it.
    AlreadyColored {
        /// Region the user tried to color
        region: Region,
        /// Color it already has
        current: RgbColor,
    },
    /// An adjacent region already uses the chosen color.
    ColorConflict {
        /// Region the user tried to color
        region: Region,
        /// First neighbor (in adjacency order) holding the color
        neighbor: Region,
        /// The rejected color
        color: RgbColor,
        /// Display name of the rejected color
        color_name: String,
    },
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColorSelected => write!(f, "Select a color before coloring a region."),
            Self::UnknownRegion(region) => write!(f, "{region} is not on this map."),
            Self::AlreadyColored { region, .. } => write!(f, "{region} is already colored!"),
            Self::ColorConflict {
                region,
                neighbor,
                color_name,
                ..
            } => write!(
                f,
                "Cannot color {region} {color_name}: neighbor {neighbor} already uses it!"
            ),
        }
    }
}

impl std::error::Error for AssignError {}

/// Tries to give `region` the selected `color`.
///
/// On success returns a new assignment with `region -> color` added; the
/// input is left untouched either way. Checks run in order: selection,
/// membership, already-colored, neighbor conflict.
pub fn attempt_manual_assign(
    graph: &GraphModel,
    assignment: &Assignment,
    region: &Region,
    color: Option<RgbColor>,
) -> Result<Assignment, AssignError> {
    let color = color.ok_or(AssignError::NoColorSelected)?;

    if !graph.contains(region) {
        return Err(AssignError::UnknownRegion(region.clone()));
    }

    if let Some(current) = assignment.get(region) {
        return Err(AssignError::AlreadyColored {
            region: region.clone(),
            current,
        });
    }

    if let Some(neighbor) = conflict_preview(graph, assignment, region, color) {
        return Err(AssignError::ColorConflict {
            region: region.clone(),
            neighbor: neighbor.clone(),
            color,
            color_name: graph.display_name(color),
        });
    }

    debug!(%region, color = %color, "manual assignment accepted");
    Ok(assignment.clone().with(region.clone(), color))
}

/// First neighbor of `region` that already holds `color`, if any.
#[must_use]
pub fn conflict_preview<'g>(
    graph: &'g GraphModel,
    assignment: &Assignment,
    region: &Region,
    color: RgbColor,
) -> Option<&'g Region> {
    graph
        .neighbors_of(region)
        .iter()
        .find(|n| assignment.get(n) == Some(color))
}
