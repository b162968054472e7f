//! Hero banner with the cycling disaster background

use leptos::prelude::*;

use crate::core::cycler::{AnimationVariant, hero_class};
use crate::ui::nav::SectionLink;

#[cfg(not(feature = "ssr"))]
pub use task::CycleTask;

#[cfg(not(feature = "ssr"))]
mod task {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};

    use crate::core::cycler::{AnimationCycle, AnimationVariant};

    struct CycleState {
        cycle: RefCell<AnimationCycle>,
        pending: Cell<Option<TimeoutHandle>>,
        stopped: Cell<bool>,
        on_switch: Box<dyn Fn(AnimationVariant)>,
    }

    /// Repeating variant switch, each step scheduled after the previous
    /// variant's own duration. Runs until [`CycleTask::stop`].
    pub struct CycleTask {
        state: Rc<CycleState>,
    }

    impl CycleTask {
        /// Apply the first variant now and keep cycling
        pub fn start(cycle: AnimationCycle, on_switch: impl Fn(AnimationVariant) + 'static) -> Self {
            let state = Rc::new(CycleState {
                cycle: RefCell::new(cycle),
                pending: Cell::new(None),
                stopped: Cell::new(false),
                on_switch: Box::new(on_switch),
            });
            switch(&state);
            Self { state }
        }

        pub fn stop(&self) {
            self.state.stopped.set(true);
            if let Some(handle) = self.state.pending.take() {
                handle.clear();
            }
        }
    }

    fn switch(state: &Rc<CycleState>) {
        if state.stopped.get() {
            return;
        }
        let Some(variant) = state.cycle.borrow_mut().advance() else {
            return;
        };
        (state.on_switch)(variant);

        let next = Rc::clone(state);
        match set_timeout_with_handle(
            move || switch(&next),
            Duration::from_millis(variant.duration_ms as u64),
        ) {
            Ok(handle) => state.pending.set(Some(handle)),
            Err(e) => leptos::logging::warn!("Background cycle halted: {:?}", e),
        }
    }
}

/// Landing banner; the decorative layer swaps disaster variants forever
#[component]
pub fn HeroBanner(#[prop(into)] title: String) -> impl IntoView {
    let active = RwSignal::new(None::<AnimationVariant>);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::cycler::AnimationCycle;

        let task = StoredValue::new_local(None::<CycleTask>);

        Effect::new(move |_| {
            let cycle = CycleTask::start(AnimationCycle::disaster(), move |variant| {
                let _ = active.try_set(Some(variant));
            });
            task.set_value(Some(cycle));
        });

        on_cleanup(move || {
            if let Some(cycle) = task.try_update_value(|t| t.take()).flatten() {
                cycle.stop();
            }
        });
    }

    view! {
        <section id="home" class="hero">
            <div class=move || hero_class(active.get().as_ref()) aria-hidden="true"></div>
            <div class="hero-content">
                <h1 class="hero-title">{title}</h1>
                <p class="hero-subtitle">
                    "Know the risks. Learn the response. Be ready before disaster strikes."
                </p>
                <div class="hero-actions">
                    <SectionLink target="disasters" class="btn btn-primary">
                        "Learn the Basics"
                    </SectionLink>
                    <SectionLink target="quiz" class="btn btn-secondary">
                        "Test Yourself"
                    </SectionLink>
                </div>
            </div>
        </section>
    }
}
