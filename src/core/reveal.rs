//! Scroll-reveal bookkeeping
//!
//! Decides what happens when an observed element first scrolls into view:
//! the reveal marker, staggered children for grid containers, and the
//! statistics kick-off for the stats grid. The observer wiring is in
//! `ui::reveal`.

use std::collections::HashSet;
use std::hash::Hash;

/// Class added to an element once it has been seen
pub const REVEAL_CLASS: &str = "animate";

/// Every element watched for visibility
pub const OBSERVED_SELECTOR: &str =
    ".section-header, .first-aid-grid, .disasters-grid, .stats-grid, .quiz-container, .emergency-grid";

/// Children of a grid container revealed one after another
pub const STAGGER_CHILD_SELECTOR: &str = ".first-aid-card, .disaster-card, .stat-card, .quiz-card, .flashcards-container, .emergency-card";

const GRID_CLASSES: [&str; 5] = [
    "first-aid-grid",
    "disasters-grid",
    "stats-grid",
    "quiz-container",
    "emergency-grid",
];

const STATS_CLASS: &str = "stats-grid";

/// How an observed element reacts to its first sighting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    /// Only the reveal marker
    Plain,
    /// Marker plus staggered children
    Grid,
    /// Grid that also starts counters and risk bars
    Stats,
}

impl RevealKind {
    /// Classify an element by its class list
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut kind = RevealKind::Plain;
        for class in classes {
            if class == STATS_CLASS {
                return RevealKind::Stats;
            }
            if GRID_CLASSES.contains(&class) {
                kind = RevealKind::Grid;
            }
        }
        kind
    }

    pub fn staggers_children(&self) -> bool {
        matches!(self, RevealKind::Grid | RevealKind::Stats)
    }

    pub fn starts_statistics(&self) -> bool {
        matches!(self, RevealKind::Stats)
    }
}

/// Work to perform for one element entering the viewport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealPlan {
    pub kind: RevealKind,
    /// Delay for each child in DOM order; empty for plain elements
    pub child_delays_ms: Vec<u32>,
}

impl RevealPlan {
    pub fn start_statistics(&self) -> bool {
        self.kind.starts_statistics()
    }
}

/// Delays of `count` staggered children, `step_ms` apart starting at zero
pub fn stagger_delays(count: usize, step_ms: u32) -> Vec<u32> {
    (0..count as u32).map(|i| i * step_ms).collect()
}

/// Remembers which elements were already revealed so re-entries are ignored
#[derive(Debug)]
pub struct RevealTracker<K> {
    revealed: HashSet<K>,
    stagger_step_ms: u32,
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new(stagger_step_ms: u32) -> Self {
        Self {
            revealed: HashSet::new(),
            stagger_step_ms,
        }
    }

    /// Plan for `key` becoming visible, or `None` if it was revealed before
    pub fn on_visible(&mut self, key: K, kind: RevealKind, child_count: usize) -> Option<RevealPlan> {
        if !self.revealed.insert(key) {
            return None;
        }
        let child_delays_ms = if kind.staggers_children() {
            stagger_delays(child_count, self.stagger_step_ms)
        } else {
            Vec::new()
        };
        Some(RevealPlan {
            kind,
            child_delays_ms,
        })
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(RevealKind::from_classes(["section-header"]), RevealKind::Plain);
        assert_eq!(
            RevealKind::from_classes(["disasters-grid", "wide"]),
            RevealKind::Grid
        );
        assert_eq!(RevealKind::from_classes(["quiz-container"]), RevealKind::Grid);
        assert_eq!(RevealKind::from_classes(["grid", "stats-grid"]), RevealKind::Stats);
        assert_eq!(RevealKind::from_classes(std::iter::empty::<&str>()), RevealKind::Plain);
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(stagger_delays(4, 100), [0, 100, 200, 300]);
        assert!(stagger_delays(0, 100).is_empty());
    }

    #[test]
    fn test_reveal_once_per_element() {
        let mut tracker = RevealTracker::new(100);
        let plan = tracker.on_visible(1u32, RevealKind::Grid, 3).unwrap();
        assert_eq!(plan.child_delays_ms, [0, 100, 200]);
        assert!(!plan.start_statistics());

        assert!(tracker.on_visible(1, RevealKind::Grid, 3).is_none());
        assert!(tracker.is_revealed(&1));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_stats_starts_once() {
        let mut tracker = RevealTracker::new(100);
        let plan = tracker.on_visible("stats", RevealKind::Stats, 4).unwrap();
        assert!(plan.start_statistics());
        assert_eq!(plan.child_delays_ms.len(), 4);
        assert!(tracker.on_visible("stats", RevealKind::Stats, 4).is_none());
    }

    #[test]
    fn test_plain_elements_have_no_children() {
        let mut tracker = RevealTracker::new(100);
        let plan = tracker.on_visible(0u32, RevealKind::Plain, 5).unwrap();
        assert!(plan.child_delays_ms.is_empty());
    }
}
