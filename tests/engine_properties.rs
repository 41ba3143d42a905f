//! Property tests for the coloring engine and session transitions.

use mapcolor::engine::{
    attempt_manual_assign, compute_greedy_baseline, evaluate_completion, run_greedy_auto_color,
    AssignError, ComparisonResult, VisitOrder,
};
use mapcolor::models::{Assignment, GraphModel, Region};
use mapcolor::session::{Action, Effect, Session, Severity};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

mod fixtures;
use fixtures::*;

/// All orderings of `items` (Heap's algorithm).
fn permutations(items: &[Region]) -> Vec<Vec<Region>> {
    fn heap(k: usize, items: &mut [Region], out: &mut Vec<Vec<Region>>) {
        if k <= 1 {
            out.push(items.to_vec());
            return;
        }
        heap(k - 1, items, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
            heap(k - 1, items, out);
        }
    }

    let mut items = items.to_vec();
    let mut out = Vec::new();
    heap(items.len(), &mut items, &mut out);
    out
}

// ============================================================================
// Greedy Auto-Coloring
// ============================================================================

#[test]
fn test_every_visit_order_yields_valid_first_fit_coloring() {
    let graph = GraphModel::reference();
    let orders = permutations(graph.regions());
    assert_eq!(orders.len(), 120);

    let mut seen_counts = HashSet::new();
    for order in orders {
        let run = run_greedy_auto_color(&graph, &order);

        assert!(run.assignment.is_complete(&graph), "order {order:?}");
        assert!(run.assignment.is_conflict_free(&graph), "order {order:?}");
        assert!(run.skipped.is_empty());
        assert!(run.assignment.distinct_color_count() <= graph.max_degree() + 1);
        assert_eq!(run.log.len(), order.len());

        // Replay first-fit and check every decision and its explanation
        let mut partial = Assignment::new();
        for (step, entry) in run.log.iter().enumerate() {
            assert_eq!(entry.region, order[step]);

            let earlier: Vec<&Region> = order[..step].iter().collect();
            let used: Vec<_> = graph
                .neighbors_of(&entry.region)
                .iter()
                .filter(|n| earlier.contains(n))
                .filter_map(|n| run.assignment.get(n))
                .collect();
            let expected = graph
                .palette()
                .colors()
                .find(|c| !used.contains(c))
                .unwrap();
            assert_eq!(entry.color, expected);
            assert_eq!(entry.color_name, graph.display_name(expected));

            for neighbor in &entry.used_neighbors {
                assert!(
                    earlier.contains(&&neighbor.name),
                    "{} listed before it was visited",
                    neighbor.name
                );
            }

            partial = attempt_manual_assign(&graph, &partial, &entry.region, Some(entry.color))
                .expect("greedy choice must be a legal manual move");
        }
        assert_eq!(partial, run.assignment);

        seen_counts.insert(run.assignment.distinct_color_count());
    }

    // Some orders need a third color, none need more than four
    assert!(seen_counts.contains(&3));
    assert!(seen_counts.iter().all(|&n| (3..=4).contains(&n)));
}

#[test]
fn test_seeded_order_is_reproducible() {
    let graph = GraphModel::reference();
    for seed in [0_u64, 7, 42, u64::MAX] {
        let a = run_greedy_auto_color(&graph, &VisitOrder::shuffled(&graph, seed));
        let b = run_greedy_auto_color(&graph, &VisitOrder::shuffled(&graph, seed));
        assert_eq!(a, b);
    }
}

#[test]
fn test_baseline_is_deterministic() {
    let graph = GraphModel::reference();
    let first = compute_greedy_baseline(&graph);
    for _ in 0..10 {
        assert_eq!(compute_greedy_baseline(&graph), first);
    }
    assert_eq!(first.distinct_color_count(), 3);
}

#[test]
fn test_palette_too_small_skips_region() {
    let graph = triangle_two_colors();
    let run = run_greedy_auto_color(&graph, &VisitOrder::natural(&graph));

    assert_eq!(run.assignment.len(), 2);
    assert_eq!(run.skipped, vec![Region::new("C")]);
    assert!(run.assignment.is_conflict_free(&graph));
}

#[test]
fn test_island_gets_first_color() {
    let graph = path_with_island();
    let run = run_greedy_auto_color(&graph, &VisitOrder::natural(&graph));

    let island = Region::new("Island");
    assert_eq!(
        run.assignment.get(&island),
        graph.palette().color_at(0)
    );
    let entry = run.log.iter().find(|e| e.region == island).unwrap();
    assert!(entry.used_neighbors.is_empty());
}

// ============================================================================
// Manual Coloring
// ============================================================================

#[test]
fn test_island_accepts_any_color() {
    let graph = path_with_island();
    let island = Region::new("Island");
    for color in graph.palette().colors() {
        let result = attempt_manual_assign(&graph, &Assignment::new(), &island, Some(color));
        assert!(result.is_ok());
    }
}

#[test]
fn test_already_colored_wins_over_conflict() {
    let graph = GraphModel::reference();
    let red = graph.palette().color_at(0).unwrap();
    let blue = graph.palette().color_at(1).unwrap();

    let a = attempt_manual_assign(&graph, &Assignment::new(), &Region::new("Lào"), Some(red))
        .unwrap();
    let a = attempt_manual_assign(&graph, &a, &Region::new("Việt Nam"), Some(blue)).unwrap();

    // Lào is colored; trying a neighbor's color reports "already colored"
    let err = attempt_manual_assign(&graph, &a, &Region::new("Lào"), Some(blue)).unwrap_err();
    assert!(matches!(err, AssignError::AlreadyColored { .. }));
}

#[test]
fn test_random_manual_sequences_keep_invariants() {
    let graph = GraphModel::reference();
    let regions = graph.regions().to_vec();
    let colors: Vec<_> = graph.palette().colors().collect();

    for seed in 0..64_u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new();

        for _ in 0..30 {
            let region = regions[rng.gen_range(0..regions.len())].clone();
            let color = colors[rng.gen_range(0..colors.len())];

            let before = session.assignment().clone();
            let (selected, _) = session.update(&graph, Action::SelectColor(color));
            let (next, effects) = selected.update(&graph, Action::ColorRegion(region.clone()));
            session = next;

            let after = session.assignment();
            assert!(after.is_conflict_free(&graph), "seed {seed}");

            // Existing colors never change
            for (r, c) in before.iter() {
                assert_eq!(after.get(r), Some(c), "seed {seed}");
            }

            let first = effects.iter().find_map(|e| match e {
                Effect::Notify(n) => Some(n),
                Effect::ComparisonChanged(_) => None,
            });
            let first = first.expect("every attempt notifies");
            if first.severity == Severity::Success {
                assert_eq!(after.len(), before.len() + 1);
                assert_eq!(after.get(&region), Some(color));
            } else {
                assert_eq!(after, &before);
            }

            if !after.is_complete(&graph) {
                assert_eq!(session.comparison(), ComparisonResult::Unknown);
            }
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_completion_compares_counts_only() {
    let graph = GraphModel::reference();
    let baseline = compute_greedy_baseline(&graph);

    // Every complete greedy result is a legal manual solution
    for seed in 0..32_u64 {
        let run = run_greedy_auto_color(&graph, &VisitOrder::shuffled(&graph, seed));
        let expected = if run.assignment.distinct_color_count() == baseline.distinct_color_count()
        {
            ComparisonResult::Match
        } else {
            ComparisonResult::Mismatch
        };
        assert_eq!(evaluate_completion(&graph, &run.assignment), expected);
    }
}

#[test]
fn test_reset_restores_initial_session() {
    let graph = GraphModel::reference();
    let (session, _) =
        Session::new().update(&graph, Action::AutoColor(VisitOrder::natural(&graph)));
    let (session, effects) = session.update(&graph, Action::Reset);

    assert_eq!(session, Session::new());
    assert!(effects.is_empty(), "comparison was already unknown");
}
