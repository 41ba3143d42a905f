//! Map Coloring Library
//!
//! Core of a small graph-coloring exercise: a fixed map of regions with
//! adjacency and a palette, validated manual coloring, greedy auto-coloring
//! with a readable trace, and comparison of a finished coloring against the
//! greedy baseline.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod logging;
pub mod models;
pub mod session;
pub mod shortcuts;
pub mod tui;
