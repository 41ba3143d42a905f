//! Interactive coloring session.
//!
//! Every user action is an explicit state transition
//! `(Session, Action) -> (Session, Vec<Effect>)`. The transition is pure; the
//! effects describe what the user should be told, and a [`Notifier`] decides
//! how to show it.

pub mod notify;

use std::time::Duration;
use tracing::debug;

use crate::engine::{
    attempt_manual_assign, evaluate_completion, run_greedy_auto_color, AssignError,
    ColoringLogEntry, ComparisonResult,
};
use crate::models::{Assignment, GraphModel, Region, RgbColor};

pub use notify::{Notification, Notifier, Severity};

/// How long completion and auto-run messages stay visible.
pub const LONG_NOTIFICATION: Duration = Duration::from_secs(5);

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Choose the color used for manual coloring
    SelectColor(RgbColor),
    /// Drop the current color choice
    ClearSelection,
    /// Color a region with the selected color
    ColorRegion(Region),
    /// Replace the assignment with a greedy run over the given visit order
    AutoColor(Vec<Region>),
    /// Clear everything
    Reset,
}

/// An outcome the user should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Transient message
    Notify(Notification),
    /// The persistent comparison panel changed
    ComparisonChanged(ComparisonResult),
}

/// Counters shown next to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Distinct colors in the assignment
    pub colors_used: usize,
    /// Colors available in the palette
    pub palette_size: usize,
    /// Regions with a color
    pub regions_colored: usize,
    /// Regions on the map
    pub region_count: usize,
}

/// State of one coloring session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    selected_color: Option<RgbColor>,
    assignment: Assignment,
    log: Vec<ColoringLogEntry>,
    comparison: ComparisonResult,
}

impl Session {
    /// A fresh session with nothing colored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected color.
    #[must_use]
    pub const fn selected_color(&self) -> Option<RgbColor> {
        self.selected_color
    }

    /// Current assignment.
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Trace of the last automatic run.
    #[must_use]
    pub fn log(&self) -> &[ColoringLogEntry] {
        &self.log
    }

    /// Latest comparison with the greedy baseline.
    #[must_use]
    pub const fn comparison(&self) -> ComparisonResult {
        self.comparison
    }

    /// Counters for the stats panel.
    #[must_use]
    pub fn stats(&self, graph: &GraphModel) -> SessionStats {
        SessionStats {
            colors_used: self.assignment.distinct_color_count(),
            palette_size: graph.palette().len(),
            regions_colored: self.assignment.len(),
            region_count: graph.regions().len(),
        }
    }

    /// Applies `action` and returns the next state with the effects to present.
    #[must_use]
    pub fn update(self, graph: &GraphModel, action: Action) -> (Self, Vec<Effect>) {
        debug!(?action, "session action");
        let previous = self.comparison;
        let mut effects = Vec::new();

        let next = match action {
            Action::SelectColor(color) => Self {
                selected_color: Some(color),
                ..self
            },
            Action::ClearSelection => Self {
                selected_color: None,
                ..self
            },
            Action::ColorRegion(region) => self.color_region(graph, &region, &mut effects),
            Action::AutoColor(order) => self.auto_color(graph, &order, &mut effects),
            Action::Reset => Self::new(),
        };

        if next.comparison != previous {
            effects.push(Effect::ComparisonChanged(next.comparison));
        }
        (next, effects)
    }

    /// Applies `action` in place and forwards notifications to `notifier`.
    ///
    /// Returns the new comparison result when it changed.
    pub fn dispatch(
        &mut self,
        graph: &GraphModel,
        action: Action,
        notifier: &mut impl Notifier,
    ) -> Option<ComparisonResult> {
        let (next, effects) = std::mem::take(self).update(graph, action);
        *self = next;

        let mut changed = None;
        for effect in effects {
            match effect {
                Effect::Notify(notification) => notifier.notify(notification),
                Effect::ComparisonChanged(result) => changed = Some(result),
            }
        }
        changed
    }

    fn color_region(self, graph: &GraphModel, region: &Region, effects: &mut Vec<Effect>) -> Self {
        match attempt_manual_assign(graph, &self.assignment, region, self.selected_color) {
            Ok(assignment) => {
                effects.push(Effect::Notify(
                    Notification::success(format!("Colored {region} successfully!"))
                        .with_icon("🎨"),
                ));

                let comparison = if assignment.is_complete(graph) {
                    effects.push(Effect::Notify(
                        Notification::success(format!(
                            "Congratulations! You colored all {} regions!",
                            graph.regions().len()
                        ))
                        .with_icon("🎉")
                        .with_duration(LONG_NOTIFICATION),
                    ));
                    evaluate_completion(graph, &assignment)
                } else {
                    ComparisonResult::Unknown
                };

                Self {
                    assignment,
                    comparison,
                    ..self
                }
            }
            Err(err) => {
                effects.push(Effect::Notify(rejection_notice(&err)));
                self
            }
        }
    }

    fn auto_color(self, graph: &GraphModel, order: &[Region], effects: &mut Vec<Effect>) -> Self {
        let run = run_greedy_auto_color(graph, order);

        effects.push(Effect::Notify(
            Notification::success(format!(
                "Done! Auto-colored {} regions.",
                run.assignment.len()
            ))
            .with_icon("🎉")
            .with_duration(LONG_NOTIFICATION),
        ));
        if !run.skipped.is_empty() {
            let names: Vec<&str> = run.skipped.iter().map(Region::name).collect();
            effects.push(Effect::Notify(Notification::info(format!(
                "No color available for: {}",
                names.join(", ")
            ))));
        }

        Self {
            assignment: run.assignment,
            log: run.log,
            comparison: ComparisonResult::Unknown,
            ..self
        }
    }
}

/// Notification for a rejected manual attempt.
#[must_use]
pub fn rejection_notice(err: &AssignError) -> Notification {
    match err {
        AssignError::AlreadyColored { .. } => Notification::info(err.to_string()).with_icon("ℹ️"),
        AssignError::ColorConflict { .. } => Notification::error(err.to_string()).with_icon("⚠️"),
        AssignError::NoColorSelected | AssignError::UnknownRegion(_) => {
            Notification::error(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::VisitOrder;

    fn notifications(effects: &[Effect]) -> Vec<&Notification> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(n) => Some(n),
                Effect::ComparisonChanged(_) => None,
            })
            .collect()
    }

    fn color(graph: &GraphModel, index: usize) -> RgbColor {
        graph.palette().color_at(index).unwrap()
    }

    #[test]
    fn test_color_without_selection() {
        let graph = GraphModel::reference();
        let (session, effects) =
            Session::new().update(&graph, Action::ColorRegion(Region::new("Lào")));

        assert!(session.assignment().is_empty());
        let notes = notifications(&effects);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Error);
    }

    #[test]
    fn test_successful_color_notifies_success() {
        let graph = GraphModel::reference();
        let (session, _) = Session::new().update(&graph, Action::SelectColor(color(&graph, 0)));
        let (session, effects) = session.update(&graph, Action::ColorRegion(Region::new("Lào")));

        assert_eq!(session.assignment().len(), 1);
        let notes = notifications(&effects);
        assert_eq!(notes[0].severity, Severity::Success);
        assert!(notes[0].message.contains("Lào"));
        assert_eq!(session.comparison(), ComparisonResult::Unknown);
    }

    #[test]
    fn test_already_colored_is_info() {
        let graph = GraphModel::reference();
        let (session, _) = Session::new().update(&graph, Action::SelectColor(color(&graph, 0)));
        let (session, _) = session.update(&graph, Action::ColorRegion(Region::new("Lào")));
        let (after, effects) = session
            .clone()
            .update(&graph, Action::ColorRegion(Region::new("Lào")));

        assert_eq!(after, session);
        assert_eq!(notifications(&effects)[0].severity, Severity::Info);
    }

    #[test]
    fn test_conflict_is_error_with_neighbor_and_color() {
        let graph = GraphModel::reference();
        let (session, _) = Session::new().update(&graph, Action::SelectColor(color(&graph, 0)));
        let (session, _) = session.update(&graph, Action::ColorRegion(Region::new("Lào")));
        let (session, effects) =
            session.update(&graph, Action::ColorRegion(Region::new("Trung Quốc")));

        assert_eq!(session.assignment().len(), 1);
        let note = notifications(&effects)[0];
        assert_eq!(note.severity, Severity::Error);
        assert!(note.message.contains("Lào"));
        assert!(note.message.contains("đỏ"));
    }

    #[test]
    fn test_completion_sets_comparison() {
        let graph = GraphModel::reference();
        let plan = [
            ("Lào", 0),
            ("Trung Quốc", 1),
            ("Việt Nam", 2),
            ("Thái Lan", 1),
            ("Campuchia", 0),
        ];

        let mut session = Session::new();
        let mut notes = Vec::new();
        let mut changed = None;
        for (name, index) in plan {
            session.dispatch(&graph, Action::SelectColor(color(&graph, index)), &mut notes);
            changed = session.dispatch(&graph, Action::ColorRegion(Region::new(name)), &mut notes);
        }

        assert_eq!(changed, Some(ComparisonResult::Match));
        assert_eq!(session.comparison(), ComparisonResult::Match);
        let last = notes.last().unwrap();
        assert!(last.message.contains("Congratulations"));
        assert_eq!(last.duration, Some(LONG_NOTIFICATION));
    }

    #[test]
    fn test_auto_color_replaces_assignment_and_log() {
        let graph = GraphModel::reference();
        let (session, _) = Session::new().update(&graph, Action::SelectColor(color(&graph, 3)));
        let (session, _) = session.update(&graph, Action::ColorRegion(Region::new("Lào")));

        let order = VisitOrder::shuffled(&graph, 42);
        let (session, effects) = session.update(&graph, Action::AutoColor(order));

        assert!(session.assignment().is_complete(&graph));
        assert!(session.assignment().is_conflict_free(&graph));
        assert_eq!(session.log().len(), 5);
        assert_eq!(session.comparison(), ComparisonResult::Unknown);
        // Selection survives an automatic run
        assert_eq!(session.selected_color(), Some(color(&graph, 3)));
        assert!(notifications(&effects)[0].message.contains('5'));
    }

    #[test]
    fn test_reset_clears_everything() {
        let graph = GraphModel::reference();
        let (session, _) = Session::new().update(&graph, Action::SelectColor(color(&graph, 0)));
        let (session, _) = session.update(&graph, Action::AutoColor(VisitOrder::natural(&graph)));
        let (session, _) = session.update(&graph, Action::Reset);

        assert_eq!(session, Session::new());
        assert!(session.selected_color().is_none());
        assert!(session.log().is_empty());
        assert_eq!(session.comparison(), ComparisonResult::Unknown);
    }

    #[test]
    fn test_reset_after_completion_reports_unknown() {
        let graph = GraphModel::reference();
        let mut session = Session::new();
        let mut notes = Vec::new();
        for region in graph.regions() {
            // Greedy baseline colors, applied by hand
            let baseline = crate::engine::compute_greedy_baseline(&graph);
            session.dispatch(
                &graph,
                Action::SelectColor(baseline.get(region).unwrap()),
                &mut notes,
            );
            session.dispatch(&graph, Action::ColorRegion(region.clone()), &mut notes);
        }
        assert_eq!(session.comparison(), ComparisonResult::Match);

        let changed = session.dispatch(&graph, Action::Reset, &mut notes);
        assert_eq!(changed, Some(ComparisonResult::Unknown));
    }

    #[test]
    fn test_stats() {
        let graph = GraphModel::reference();
        let (session, _) =
            Session::new().update(&graph, Action::AutoColor(VisitOrder::natural(&graph)));
        let stats = session.stats(&graph);
        assert_eq!(stats.colors_used, 3);
        assert_eq!(stats.palette_size, 6);
        assert_eq!(stats.regions_colored, 5);
        assert_eq!(stats.region_count, 5);
    }
}
