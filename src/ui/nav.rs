//! Navigation bar and in-page links
//!
//! The mobile menu opens and closes from the toggle, closes on any link
//! click, and the bar turns more opaque once the page is scrolled.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::content::NAV_SECTIONS;
use crate::core::nav::{NAVBAR_DEFAULT, NavMenu};
use crate::ui::context::use_page_settings;

/// Intercept a click on an `#id` link and scroll smoothly to the section
pub fn follow_anchor(ev: &MouseEvent, href: &str, header_offset: f64) {
    if !href.starts_with('#') {
        return;
    }
    ev.prevent_default();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::nav::anchor_target;

        if let Some(id) = anchor_target(href) {
            if let Err(e) = crate::ui::dom::scroll_to_element(id, header_offset) {
                leptos::logging::warn!("Scroll to #{} failed: {}", id, e);
            }
        }
    }

    #[cfg(feature = "ssr")]
    {
        let _ = header_offset;
    }
}

/// Anchor that scrolls smoothly to a section of this page
#[component]
pub fn SectionLink(
    /// Target element id, without `#`
    target: &'static str,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let header_offset = use_page_settings().header_offset;
    let href = format!("#{}", target);
    let href_click = href.clone();

    view! {
        <a href=href class=class on:click=move |ev| follow_anchor(&ev, &href_click, header_offset)>
            {children()}
        </a>
    }
}

#[component]
pub fn NavBar(#[prop(into)] title: String) -> impl IntoView {
    let settings = use_page_settings();
    let menu = RwSignal::new(NavMenu::default());
    let treatment = RwSignal::new(NAVBAR_DEFAULT);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::nav::navbar_treatment;

        let threshold = settings.navbar_scroll_threshold;
        let listener = window_event_listener(leptos::ev::scroll, move |_| {
            let next = navbar_treatment(crate::ui::dom::scroll_y(), threshold);
            if treatment.get_untracked() != next {
                treatment.set(next);
            }
        });
        on_cleanup(move || listener.remove());
    }

    let open_class = move |base: &'static str| {
        if menu.get().is_open() {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    };

    view! {
        <nav class="navbar" style=move || treatment.get().style()>
            <div class="nav-container">
                <SectionLink target="home" class="nav-logo">
                    {title}
                </SectionLink>

                <ul class=move || open_class("nav-links")>
                    {NAV_SECTIONS
                        .iter()
                        .map(|(id, label)| {
                            let href = format!("#{}", id);
                            let href_click = href.clone();
                            let header_offset = settings.header_offset;
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="nav-link"
                                        on:click=move |ev| {
                                            menu.update(NavMenu::close);
                                            follow_anchor(&ev, &href_click, header_offset);
                                        }
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <button
                    class=move || open_class("nav-toggle")
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(NavMenu::toggle)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
