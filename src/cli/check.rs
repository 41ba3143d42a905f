//! Replays a manual coloring and compares it with the greedy baseline.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::engine::{compute_greedy_baseline, ComparisonResult};
use crate::models::{GraphModel, Region, RgbColor};
use crate::session::{Action, Effect, Notification, Session, Severity};
use clap::Args;
use serde::Serialize;

/// Check a manual coloring against the adjacency rules and the greedy baseline
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Comma-separated `Region=color` pairs, applied in order.
    /// Colors may be palette names or hex codes.
    #[arg(short, long, value_name = "PAIRS")]
    pub assign: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StepReport {
    region: Region,
    color: RgbColor,
    accepted: bool,
    notifications: Vec<Notification>,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    steps: Vec<StepReport>,
    complete: bool,
    colors_used: usize,
    baseline_colors: usize,
    comparison: ComparisonResult,
}

impl CheckResponse {
    fn passed(&self) -> bool {
        self.steps.iter().all(|s| s.accepted) && self.comparison == ComparisonResult::Match
    }
}

/// Parses `Region=color,Region=color` against the map and its palette.
pub fn parse_pairs(graph: &GraphModel, text: &str) -> CliResult<Vec<(Region, RgbColor)>> {
    text.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, color) = pair.split_once('=').ok_or_else(|| {
                CliError::validation(format!("Expected Region=color, got '{pair}'"))
            })?;
            let region = Region::new(name.trim());
            let color = graph.palette().resolve(color).ok_or_else(|| {
                CliError::validation(format!("Unknown color '{}'", color.trim()))
            })?;
            Ok((region, color))
        })
        .collect()
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, graph: &GraphModel) -> CliResult<()> {
        let pairs = parse_pairs(graph, &self.assign)?;
        if pairs.is_empty() {
            return Err(CliError::validation("No assignments given"));
        }

        let mut session = Session::new();
        let mut steps = Vec::with_capacity(pairs.len());

        for (region, color) in pairs {
            let (selected, _) = session.update(graph, Action::SelectColor(color));
            let (next, effects) = selected.update(graph, Action::ColorRegion(region.clone()));
            session = next;

            let notifications: Vec<Notification> = effects
                .into_iter()
                .filter_map(|e| match e {
                    Effect::Notify(n) => Some(n),
                    Effect::ComparisonChanged(_) => None,
                })
                .collect();
            let accepted = notifications
                .first()
                .is_some_and(|n| n.severity == Severity::Success);

            steps.push(StepReport {
                region,
                color,
                accepted,
                notifications,
            });
        }

        let response = CheckResponse {
            steps,
            complete: session.assignment().is_complete(graph),
            colors_used: session.assignment().distinct_color_count(),
            baseline_colors: compute_greedy_baseline(graph).distinct_color_count(),
            comparison: session.comparison(),
        };

        if self.json {
            print_json(&response)?;
        } else {
            for step in &response.steps {
                let mark = if step.accepted { "✓" } else { "✗" };
                let messages: Vec<String> =
                    step.notifications.iter().map(ToString::to_string).collect();
                println!(
                    "{mark} {} = {}: {}",
                    step.region,
                    graph.display_name(step.color),
                    messages.join(" ")
                );
            }
            println!();
            println!(
                "Colors used: {} (greedy baseline: {})",
                response.colors_used, response.baseline_colors
            );
            println!("{}", response.comparison.summary());
        }

        if response.passed() {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "Check failed: comparison is {}",
                response.comparison
            )))
        }
    }
}
