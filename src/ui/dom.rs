//! Thin helpers over `web_sys` used by the interactive widgets.
//!
//! Only compiled for the browser.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::core::error::{SiteError, SiteResult};
use crate::core::nav::scroll_target;
use crate::core::settings::PageSettings;

pub(crate) fn js_error(err: JsValue) -> SiteError {
    SiteError::Browser(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

pub fn window() -> SiteResult<Window> {
    web_sys::window().ok_or(SiteError::MissingElement("window"))
}

pub fn document() -> SiteResult<Document> {
    window()?
        .document()
        .ok_or(SiteError::MissingElement("document"))
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// All HTML elements in the document matching `selector`, in DOM order
pub fn query_all(selector: &str) -> SiteResult<Vec<HtmlElement>> {
    let list = document()?.query_selector_all(selector).map_err(js_error)?;
    Ok(html_elements(list))
}

/// Descendants of `root` matching `selector`, in DOM order
pub fn query_all_in(root: &Element, selector: &str) -> SiteResult<Vec<HtmlElement>> {
    let list = root.query_selector_all(selector).map_err(js_error)?;
    Ok(html_elements(list))
}

/// Smoothly scroll so the element with `id` sits just below the fixed header.
///
/// Returns `false` when no such element exists.
pub fn scroll_to_element(id: &str, header_offset: f64) -> SiteResult<bool> {
    let Some(target) = document()?.get_element_by_id(id) else {
        return Ok(false);
    };
    let target: HtmlElement = target
        .dyn_into()
        .map_err(|_| SiteError::MissingElement("scroll target is not an HTML element"))?;

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(target.offset_top() as f64, header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

/// Scroll to a section by id. Exported for markup outside the Leptos tree.
#[wasm_bindgen]
pub fn scroll_to_section(section_id: &str) {
    let offset = PageSettings::default().header_offset;
    if let Err(e) = scroll_to_element(section_id, offset) {
        leptos::logging::warn!("scroll_to_section({}) failed: {}", section_id, e);
    }
}

/// Short haptic pulse; silently skipped where `navigator.vibrate` is missing
pub fn vibrate(duration_ms: u32) {
    let Ok(window) = window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
    if supported {
        let _ = navigator.vibrate_with_duration(duration_ms);
    }
}

/// Current vertical scroll offset
pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().map_err(js_error))
        .unwrap_or(0.0)
}
