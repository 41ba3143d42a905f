//! Prints the active map: regions, adjacency, and palette.

use crate::cli::common::{print_json, CliResult};
use crate::models::{GraphModel, Region};
use clap::Args;
use serde::Serialize;

/// Show the regions, neighbors, and palette of the active map
#[derive(Debug, Clone, Args)]
pub struct MapArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RegionInfo {
    name: Region,
    neighbors: Vec<Region>,
}

#[derive(Debug, Serialize)]
struct ColorInfo {
    hex: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct AsymmetricEdge {
    from: Region,
    to: Region,
}

#[derive(Debug, Serialize)]
struct MapResponse {
    regions: Vec<RegionInfo>,
    palette: Vec<ColorInfo>,
    max_degree: usize,
    asymmetric_edges: Vec<AsymmetricEdge>,
}

impl MapArgs {
    /// Execute the map command
    pub fn execute(&self, graph: &GraphModel) -> CliResult<()> {
        let response = MapResponse {
            regions: graph
                .regions()
                .iter()
                .map(|r| RegionInfo {
                    name: r.clone(),
                    neighbors: graph.neighbors_of(r).to_vec(),
                })
                .collect(),
            palette: graph
                .palette()
                .colors()
                .map(|c| ColorInfo {
                    hex: c.to_hex(),
                    name: graph.display_name(c),
                })
                .collect(),
            max_degree: graph.max_degree(),
            asymmetric_edges: graph
                .asymmetric_edges()
                .into_iter()
                .map(|(from, to)| AsymmetricEdge { from, to })
                .collect(),
        };

        if self.json {
            return print_json(&response);
        }

        println!("Regions ({}):", response.regions.len());
        for region in &response.regions {
            let neighbors: Vec<&str> = region.neighbors.iter().map(Region::name).collect();
            if neighbors.is_empty() {
                println!("  {}: (no neighbors)", region.name);
            } else {
                println!("  {}: {}", region.name, neighbors.join(", "));
            }
        }

        println!();
        println!("Palette ({} colors):", response.palette.len());
        for (i, color) in response.palette.iter().enumerate() {
            println!("  {}. {} {}", i + 1, color.hex, color.name);
        }

        println!();
        println!("Max degree: {}", response.max_degree);

        for edge in &response.asymmetric_edges {
            println!("⚠ {} lists {} as a neighbor, but not the reverse", edge.from, edge.to);
        }

        Ok(())
    }
}
