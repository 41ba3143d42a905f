//! Comparison of a finished manual coloring with the greedy baseline.

use serde::Serialize;
use std::fmt;

use super::greedy::compute_greedy_baseline;
use crate::models::{Assignment, GraphModel};

/// Outcome of comparing a manual solution against greedy coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonResult {
    /// No complete manual solution to compare
    #[default]
    Unknown,
    /// Same number of distinct colors as the greedy baseline
    Match,
    /// Different number of distinct colors
    Mismatch,
}

impl ComparisonResult {
    /// Sentence shown to the learner for this outcome.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Unknown => "Finish coloring the map to compare with greedy.",
            Self::Match => "🎉 Your coloring uses as many colors as the greedy algorithm!",
            Self::Mismatch => "⚠ Your coloring differs from the greedy algorithm. Try again!",
        }
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unknown => "unknown",
            Self::Match => "match",
            Self::Mismatch => "mismatch",
        };
        f.write_str(text)
    }
}

/// Compares the color count of a complete `assignment` with a freshly computed baseline.
///
/// Only the number of distinct colors is compared, not which region got which
/// color. Returns `Unknown` for an incomplete assignment.
#[must_use]
pub fn evaluate_completion(graph: &GraphModel, assignment: &Assignment) -> ComparisonResult {
    if !assignment.is_complete(graph) {
        return ComparisonResult::Unknown;
    }

    let baseline = compute_greedy_baseline(graph);
    if assignment.distinct_color_count() == baseline.distinct_color_count() {
        ComparisonResult::Match
    } else {
        ComparisonResult::Mismatch
    }
}
