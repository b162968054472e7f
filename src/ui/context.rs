//! Page-wide context shared between widgets

use leptos::prelude::*;

use crate::core::settings::PageSettings;

/// Provide the animation settings to the component tree
pub fn provide_page_settings(settings: PageSettings) {
    provide_context(settings);
}

/// Settings from context, or the defaults when none were provided
pub fn use_page_settings() -> PageSettings {
    use_context::<PageSettings>().unwrap_or_default()
}

/// Flips to `true` the first time the statistics grid becomes visible.
///
/// Counters and risk bars start from this signal; it never flips back.
#[derive(Clone, Copy)]
pub struct StatsTrigger {
    visible: RwSignal<bool>,
}

impl StatsTrigger {
    pub fn fire(&self) {
        if !self.visible.get_untracked() {
            self.visible.set(true);
        }
    }

    pub fn is_fired(&self) -> bool {
        self.visible.get()
    }
}

pub fn provide_stats_trigger() -> StatsTrigger {
    let trigger = StatsTrigger {
        visible: RwSignal::new(false),
    };
    provide_context(trigger);
    trigger
}

pub fn use_stats_trigger() -> StatsTrigger {
    use_context::<StatsTrigger>().expect("StatsTrigger should be provided")
}
