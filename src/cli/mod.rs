//! CLI command handlers for mapcolor.
//!
//! Headless, scriptable access to the coloring engine for automation,
//! grading, and testing.

pub mod auto;
pub mod check;
pub mod common;
pub mod map;

// Re-export types used by main.rs and tests
pub use auto::AutoArgs;
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use map::MapArgs;
