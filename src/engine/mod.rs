//! Coloring engine.
//!
//! Pure, deterministic operations over a [`GraphModel`](crate::models::GraphModel)
//! and an [`Assignment`](crate::models::Assignment): validated manual coloring,
//! greedy auto-coloring with a trace, and comparison against the greedy baseline.

pub mod compare;
pub mod greedy;
pub mod manual;

pub use compare::{evaluate_completion, ComparisonResult};
pub use greedy::{
    compute_greedy_baseline, run_greedy_auto_color, ColoringLogEntry, GreedyRun, NeighborColor,
    VisitOrder,
};
pub use manual::{attempt_manual_assign, conflict_preview, AssignError};
