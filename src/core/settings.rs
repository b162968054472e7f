//! Timing and threshold settings for the page animations.
//!
//! Provided once as Leptos context so every widget reads the same values.

/// Tunables for the interactive parts of the page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSettings {
    /// Total count-up time of a statistic counter
    pub counter_duration_ms: u32,
    /// Interval between counter updates (~60 per second)
    pub counter_tick_ms: u32,
    /// Delay between two staggered grid children
    pub stagger_step_ms: u32,
    /// Delay before risk bars grow back to their width
    pub risk_bar_delay_ms: u32,
    /// Scroll offset above which the navbar turns opaque
    pub navbar_scroll_threshold: f64,
    /// Height of the fixed navbar, subtracted from scroll targets
    pub header_offset: f64,
    /// Haptic pulse when a flashcard flips
    pub vibration_ms: u32,
    /// Fraction of an element that must be visible to reveal it
    pub reveal_threshold: f64,
    /// Observer root margin; the negative bottom reveals slightly early
    pub reveal_root_margin: &'static str,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            stagger_step_ms: 100,
            risk_bar_delay_ms: 500,
            navbar_scroll_threshold: 100.0,
            header_offset: 70.0,
            vibration_ms: 50,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px",
        }
    }
}
