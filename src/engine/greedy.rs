//! Greedy first-fit coloring with an execution trace.
//!
//! Regions are visited once, in a caller-supplied order. Each region takes the
//! first palette color not used by a neighbor colored earlier in the same run;
//! neighbors visited later are treated as uncolored. There is no backtracking.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, warn};

use crate::models::{Assignment, GraphModel, Region, RgbColor};

/// A neighbor that was already colored when a region was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborColor {
    /// Neighbor region
    pub name: Region,
    /// Display name of the neighbor's color
    pub color_name: String,
}

/// One step of an automatic run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoringLogEntry {
    /// Region colored at this step
    pub region: Region,
    /// Chosen color
    pub color: RgbColor,
    /// Display name of the chosen color
    pub color_name: String,
    /// Neighbors colored before this step, in adjacency order
    pub used_neighbors: Vec<NeighborColor>,
}

/// Result of an automatic run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GreedyRun {
    /// Conflict-free assignment produced by the run
    pub assignment: Assignment,
    /// One entry per colored region, in visit order
    pub log: Vec<ColoringLogEntry>,
    /// Regions left uncolored because every palette color was excluded
    pub skipped: Vec<Region>,
}

/// Region visit orders for automatic runs.
pub struct VisitOrder;

impl VisitOrder {
    /// Regions in declared order.
    #[must_use]
    pub fn natural(graph: &GraphModel) -> Vec<Region> {
        graph.regions().to_vec()
    }

    /// Regions shuffled deterministically from `seed`.
    ///
    /// Seed from an entropy source at the call site to get a fresh order per run.
    #[must_use]
    pub fn shuffled(graph: &GraphModel, seed: u64) -> Vec<Region> {
        let mut order = Self::natural(graph);
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);
        order
    }
}

/// Colors regions greedily in `order`, recording each decision.
///
/// Regions that are unknown to `graph` or repeated in `order` are ignored.
pub fn run_greedy_auto_color(graph: &GraphModel, order: &[Region]) -> GreedyRun {
    let mut run = GreedyRun::default();

    for region in order {
        if !graph.contains(region) || run.assignment.is_colored(region) {
            continue;
        }

        let excluded: BTreeSet<RgbColor> = graph
            .neighbors_of(region)
            .iter()
            .filter_map(|n| run.assignment.get(n))
            .collect();

        let Some(color) = graph.palette().colors().find(|c| !excluded.contains(c)) else {
            warn!(%region, "no color available, leaving region uncolored");
            run.skipped.push(region.clone());
            continue;
        };

        run.assignment.insert(region.clone(), color);

        let used_neighbors = graph
            .neighbors_of(region)
            .iter()
            .filter_map(|n| {
                run.assignment.get(n).map(|c| NeighborColor {
                    name: n.clone(),
                    color_name: graph.display_name(c),
                })
            })
            .collect();

        run.log.push(ColoringLogEntry {
            region: region.clone(),
            color,
            color_name: graph.display_name(color),
            used_neighbors,
        });
    }

    info!(
        colored = run.assignment.len(),
        skipped = run.skipped.len(),
        colors = run.assignment.distinct_color_count(),
        "greedy run finished"
    );
    run
}

/// Greedy coloring over the declared region order, without a trace.
///
/// Serves as the baseline that manual solutions are compared against.
#[must_use]
pub fn compute_greedy_baseline(graph: &GraphModel) -> Assignment {
    run_greedy_auto_color(graph, graph.regions()).assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Palette, PaletteEntry};
    use std::collections::HashMap;

    fn names(regions: &[Region]) -> Vec<&str> {
        regions.iter().map(Region::name).collect()
    }

    #[test]
    fn test_baseline_uses_three_colors() {
        let graph = GraphModel::reference();
        let baseline = compute_greedy_baseline(&graph);

        assert!(baseline.is_complete(&graph));
        assert!(baseline.is_conflict_free(&graph));
        assert_eq!(baseline.distinct_color_count(), 3);

        let palette = graph.palette();
        assert_eq!(baseline.get(&Region::new("Việt Nam")), palette.color_at(0));
        assert_eq!(baseline.get(&Region::new("Lào")), palette.color_at(1));
        assert_eq!(baseline.get(&Region::new("Campuchia")), palette.color_at(1));
        assert_eq!(baseline.get(&Region::new("Thái Lan")), palette.color_at(0));
        assert_eq!(baseline.get(&Region::new("Trung Quốc")), palette.color_at(2));
    }

    #[test]
    fn test_log_records_only_earlier_neighbors() {
        let graph = GraphModel::reference();
        let run = run_greedy_auto_color(&graph, &VisitOrder::natural(&graph));

        assert_eq!(run.log.len(), 5);
        assert!(run.skipped.is_empty());

        // First region sees no colored neighbors
        assert_eq!(run.log[0].region.name(), "Việt Nam");
        assert!(run.log[0].used_neighbors.is_empty());
        assert_eq!(run.log[0].color_name, "đỏ");

        // Lào sees only Việt Nam; Thái Lan and Trung Quốc come later
        let lao = &run.log[1];
        assert_eq!(lao.region.name(), "Lào");
        assert_eq!(
            lao.used_neighbors,
            vec![NeighborColor {
                name: Region::new("Việt Nam"),
                color_name: "đỏ".to_string(),
            }]
        );
        assert_eq!(lao.color_name, "xanh dương");

        // Trung Quốc sees both of its neighbors
        let tq = &run.log[4];
        assert_eq!(tq.used_neighbors.len(), 2);
        assert_eq!(tq.color_name, "xanh lá");
    }

    #[test]
    fn test_shuffled_is_reproducible_permutation() {
        let graph = GraphModel::reference();
        let a = VisitOrder::shuffled(&graph, 7);
        let b = VisitOrder::shuffled(&graph, 7);
        assert_eq!(a, b);

        let mut sorted = names(&a);
        sorted.sort_unstable();
        let mut expected = names(graph.regions());
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_exhausted_palette_skips_region() {
        // Triangle with only two colors: the third region visited cannot be colored
        let regions: Vec<Region> = ["A", "B", "C"].into_iter().map(Region::new).collect();
        let mut neighbors = HashMap::new();
        neighbors.insert(Region::new("A"), vec![Region::new("B"), Region::new("C")]);
        neighbors.insert(Region::new("B"), vec![Region::new("A"), Region::new("C")]);
        neighbors.insert(Region::new("C"), vec![Region::new("A"), Region::new("B")]);
        let palette = Palette::new(vec![
            PaletteEntry::named(RgbColor::new(255, 0, 0), "red"),
            PaletteEntry::named(RgbColor::new(0, 0, 255), "blue"),
        ]);
        let graph = GraphModel::new(regions, neighbors, palette);

        let run = run_greedy_auto_color(&graph, graph.regions());

        assert_eq!(run.assignment.len(), 2);
        assert_eq!(run.log.len(), 2);
        assert_eq!(names(&run.skipped), ["C"]);
        assert!(!run.assignment.is_colored(&Region::new("C")));
        assert!(run.assignment.is_conflict_free(&graph));
    }

    #[test]
    fn test_duplicates_and_unknown_regions_ignored() {
        let graph = GraphModel::reference();
        let order = vec![
            Region::new("Lào"),
            Region::new("Atlantis"),
            Region::new("Lào"),
            Region::new("Thái Lan"),
        ];
        let run = run_greedy_auto_color(&graph, &order);
        let visited: Vec<&str> = run.log.iter().map(|e| e.region.name()).collect();
        assert_eq!(visited, ["Lào", "Thái Lan"]);
        assert!(run.skipped.is_empty());
    }
}
