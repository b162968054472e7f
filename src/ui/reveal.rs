//! Scroll-triggered reveal animations
//!
//! Watches section headers and grid containers with an `IntersectionObserver`.
//! The first time one enters the viewport it gets the reveal marker, its
//! cards fade in one after another, and the stats grid starts its counters.

use leptos::prelude::*;

use crate::ui::context::{StatsTrigger, use_page_settings, use_stats_trigger};

#[cfg(not(feature = "ssr"))]
pub use watcher::RevealWatcher;

#[cfg(not(feature = "ssr"))]
mod watcher {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::error::SiteResult;
    use crate::core::reveal::{
        OBSERVED_SELECTOR, REVEAL_CLASS, RevealKind, RevealPlan, RevealTracker, STAGGER_CHILD_SELECTOR,
    };
    use crate::core::settings::PageSettings;
    use crate::ui::context::StatsTrigger;
    use crate::ui::dom::{js_error, query_all, query_all_in};

    const KEY_ATTR: &str = "data-reveal-key";

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live observer; disconnects when stopped or dropped
    pub struct RevealWatcher {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl RevealWatcher {
        /// Observe every revealable element currently in the document
        pub fn start(settings: PageSettings, stats: StatsTrigger) -> SiteResult<Self> {
            let tracker = Rc::new(RefCell::new(RevealTracker::<u32>::new(settings.stagger_step_ms)));

            let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(key) = reveal_key(&target) else {
                        continue;
                    };
                    let kind = RevealKind::from_classes(class_names(&target).iter().map(String::as_str));
                    let children = if kind.staggers_children() {
                        query_all_in(&target, STAGGER_CHILD_SELECTOR).unwrap_or_default()
                    } else {
                        Vec::new()
                    };

                    let plan = tracker.borrow_mut().on_visible(key, kind, children.len());
                    if let Some(plan) = plan {
                        apply_plan(&target, children, &plan, stats);
                    }
                }
            });

            let init = IntersectionObserverInit::new();
            init.set_threshold(&settings.reveal_threshold.into());
            init.set_root_margin(settings.reveal_root_margin);
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(js_error)?;

            let targets = query_all(OBSERVED_SELECTOR)?;
            for (key, element) in targets.iter().enumerate() {
                element.set_attribute(KEY_ATTR, &key.to_string()).map_err(js_error)?;
                observer.observe(element);
            }
            leptos::logging::log!("Reveal watcher observing {} elements", targets.len());

            Ok(Self {
                observer,
                _callback: callback,
            })
        }

        pub fn stop(&self) {
            self.observer.disconnect();
        }
    }

    impl Drop for RevealWatcher {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    fn reveal_key(element: &Element) -> Option<u32> {
        element.get_attribute(KEY_ATTR)?.parse().ok()
    }

    fn class_names(element: &Element) -> Vec<String> {
        let list = element.class_list();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn apply_plan(target: &Element, children: Vec<HtmlElement>, plan: &RevealPlan, stats: StatsTrigger) {
        let _ = target.class_list().add_1(REVEAL_CLASS);

        for (child, delay) in children.into_iter().zip(plan.child_delays_ms.iter().copied()) {
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                let style = child.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "translateY(0)");
            });
        }

        if plan.start_statistics() {
            stats.fire();
        }
    }
}

/// Starts the reveal observer once the page is mounted and stops it on cleanup
#[component]
pub fn RevealObserver() -> impl IntoView {
    let settings = use_page_settings();
    let stats: StatsTrigger = use_stats_trigger();

    #[cfg(not(feature = "ssr"))]
    {
        let watcher = StoredValue::new_local(None::<RevealWatcher>);

        Effect::new(move |_| match RevealWatcher::start(settings, stats) {
            Ok(w) => watcher.set_value(Some(w)),
            Err(e) => leptos::logging::warn!("Scroll reveal disabled: {}", e),
        });

        on_cleanup(move || {
            if let Some(w) = watcher.try_update_value(|w| w.take()).flatten() {
                w.stop();
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (settings, stats);
    }

    view! {
        // Nothing visible; the observer works on the surrounding sections
        <div class="hidden" aria-hidden="true"></div>
    }
}
