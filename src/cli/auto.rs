//! Greedy auto-coloring from the command line.

use crate::cli::common::{print_json, CliResult};
use crate::engine::{run_greedy_auto_color, ColoringLogEntry, VisitOrder};
use crate::models::{GraphModel, Region};
use clap::Args;
use serde::Serialize;
use tracing::info;

/// Run greedy auto-coloring and print its trace
#[derive(Debug, Clone, Args)]
pub struct AutoArgs {
    /// Seed for the shuffled visit order (random when omitted)
    #[arg(long, value_name = "N", conflicts_with = "natural")]
    pub seed: Option<u64>,

    /// Visit regions in declared order instead of shuffling
    #[arg(long)]
    pub natural: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AssignedColor {
    region: Region,
    hex: String,
    color_name: String,
}

#[derive(Debug, Serialize)]
struct AutoResponse {
    seed: Option<u64>,
    order: Vec<Region>,
    log: Vec<ColoringLogEntry>,
    skipped: Vec<Region>,
    assignment: Vec<AssignedColor>,
    colors_used: usize,
}

impl AutoArgs {
    /// Execute the auto command
    pub fn execute(&self, graph: &GraphModel) -> CliResult<()> {
        let (seed, order) = if self.natural {
            (None, VisitOrder::natural(graph))
        } else {
            let seed = self.seed.unwrap_or_else(rand::random);
            (Some(seed), VisitOrder::shuffled(graph, seed))
        };
        info!(?seed, "running greedy auto-coloring");

        let run = run_greedy_auto_color(graph, &order);

        // Report the assignment in declared region order
        let assignment = graph
            .regions()
            .iter()
            .filter_map(|r| {
                run.assignment.get(r).map(|c| AssignedColor {
                    region: r.clone(),
                    hex: c.to_hex(),
                    color_name: graph.display_name(c),
                })
            })
            .collect();

        let response = AutoResponse {
            seed,
            colors_used: run.assignment.distinct_color_count(),
            order,
            log: run.log,
            skipped: run.skipped,
            assignment,
        };

        if self.json {
            return print_json(&response);
        }

        match response.seed {
            Some(seed) => println!("Greedy auto-coloring (seed {seed})"),
            None => println!("Greedy auto-coloring (declared order)"),
        }
        let order: Vec<&str> = response.order.iter().map(Region::name).collect();
        println!("Visit order: {}", order.join(" → "));
        println!();

        for entry in &response.log {
            println!("✅ {}", entry.region);
            println!("   → color: {} ({})", entry.color_name, entry.color);
            if entry.used_neighbors.is_empty() {
                println!("   → colored neighbors: none");
            } else {
                let used: Vec<String> = entry
                    .used_neighbors
                    .iter()
                    .map(|n| format!("{} ({})", n.name, n.color_name))
                    .collect();
                println!("   → colored neighbors: {}", used.join(", "));
            }
        }

        for region in &response.skipped {
            println!("⚠ {region}: no color available");
        }

        println!();
        println!(
            "Colored {}/{} regions with {} colors.",
            response.assignment.len(),
            graph.regions().len(),
            response.colors_used
        );
        Ok(())
    }
}
