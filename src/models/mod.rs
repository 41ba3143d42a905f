//! Data models for the coloring exercise.
//!
//! This module contains the graph model (regions, adjacency, palette) and
//! the assignment type shared by the engine and the user interfaces.
//! Models are independent of UI and coloring logic.

pub mod assignment;
pub mod graph;
pub mod palette;
pub mod region;
pub mod rgb;

// Re-export all model types
pub use assignment::Assignment;
pub use graph::GraphModel;
pub use palette::{Palette, PaletteEntry};
pub use region::Region;
pub use rgb::RgbColor;
