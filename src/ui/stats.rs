//! Statistic counters and risk bars
//!
//! Both stay idle until the stats grid is first revealed, then animate once.

use leptos::prelude::*;

use crate::core::content::{RiskLevel, Statistic};
use crate::core::counter::format_count;
use crate::ui::context::{use_page_settings, use_stats_trigger};

/// Number counting up from zero to its target
#[component]
pub fn StatCounter(stat: Statistic) -> impl IntoView {
    let settings = use_page_settings();
    let trigger = use_stats_trigger();
    let text = RwSignal::new(format_count(0, stat.target));

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::time::Duration;

        use crate::core::counter::CounterAnimation;

        let interval = StoredValue::new(None::<IntervalHandle>);

        Effect::new(move |started: Option<bool>| {
            if started == Some(true) || !trigger.is_fired() {
                return started.unwrap_or(false);
            }

            let animation = CounterAnimation::new(
                stat.target,
                settings.counter_duration_ms,
                settings.counter_tick_ms,
            );
            if animation.is_finished() {
                text.set(animation.display());
                return true;
            }

            let animation = Rc::new(RefCell::new(animation));
            let tick = move || {
                let mut animation = animation.borrow_mut();
                let done = animation.tick();
                text.set(animation.display());
                if done {
                    if let Some(handle) = interval.get_value() {
                        handle.clear();
                    }
                }
            };

            match set_interval_with_handle(
                tick,
                Duration::from_millis(settings.counter_tick_ms as u64),
            ) {
                Ok(handle) => interval.set_value(Some(handle)),
                Err(e) => leptos::logging::warn!("Counter for {} not started: {:?}", stat.label, e),
            }
            true
        });

        on_cleanup(move || {
            if let Some(handle) = interval.try_get_value().flatten() {
                handle.clear();
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (settings, trigger);
    }

    view! {
        <div class="stat-card">
            <span class="stat-number" data-target=stat.target.to_string()>
                {move || text.get()}
            </span>
            <p class="stat-label">{stat.label}</p>
        </div>
    }
}

/// Horizontal bar whose fill grows from zero to the risk level
#[component]
pub fn RiskBar(level: RiskLevel) -> impl IntoView {
    let settings = use_page_settings();
    let trigger = use_stats_trigger();
    let width = RwSignal::new(level.width());

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        Effect::new(move |started: Option<bool>| {
            if started == Some(true) || !trigger.is_fired() {
                return started.unwrap_or(false);
            }
            width.set("0%".to_string());
            let delay = settings.risk_bar_delay_ms;
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                // The component may be gone by now
                let _ = width.try_set(level.width());
            });
            true
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (settings, trigger);
    }

    view! {
        <div class="risk-item">
            <div class="risk-label">
                <span>{level.hazard}</span>
                <span>{level.width()}</span>
            </div>
            <div class="risk-bar">
                <div class="risk-fill" style:width=move || width.get()></div>
            </div>
        </div>
    }
}
