//! Small DOM helpers: scrolling, measuring and inline styles.
//!
//! Lookups that fail are logged and ignored; nothing here panics.

use folio::scroll::Bounds;
use folio::{SectionId, StyleFrame};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Attribute naming the animation target an element belongs to.
pub const ANIM_ATTR: &str = "data-anim";

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    gloo_utils::window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Smooth-scroll to a section anchor.
pub fn scroll_to_section(section: SectionId) {
    match gloo_utils::document().get_element_by_id(section.anchor()) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("⚠️ No element with id '{}'", section.anchor()),
    }
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    gloo_utils::window().scroll_to_with_scroll_to_options(&options);
}

pub fn element_by_id(id: &str) -> Option<Element> {
    gloo_utils::document().get_element_by_id(id)
}

/// Document-space bounds of an element, or `None` when it is detached.
pub fn measure(element: &Element) -> Option<Bounds> {
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    Some(Bounds::new(rect.top() + scroll_y(), rect.height()))
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = gloo_utils::document().body() {
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("Could not set body overflow: {:?}", e);
        }
    }
}

/// Write a frame's declarations as inline styles.
pub fn apply_frame(element: &HtmlElement, frame: &StyleFrame) {
    let style = element.style();
    for (name, value) in frame.css() {
        if let Err(e) = style.set_property(name, &value) {
            log::debug!("Could not set {} on element: {:?}", name, e);
        }
    }
}

/// Every element under `root` tagged `data-anim="{target}"` (root included).
pub fn anim_targets(root: &Element, target: &str) -> Vec<HtmlElement> {
    let mut found = Vec::new();
    if root.get_attribute(ANIM_ATTR).as_deref() == Some(target) {
        if let Some(element) = root.dyn_ref::<HtmlElement>() {
            found.push(element.clone());
        }
    }

    let selector = format!("[{}='{}']", ANIM_ATTR, target);
    if let Ok(list) = root.query_selector_all(&selector) {
        for i in 0..list.length() {
            if let Some(element) = list.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                found.push(element);
            }
        }
    }
    found
}

/// Direct children of `element` that are HTML elements.
pub fn child_elements(element: &Element) -> Vec<HtmlElement> {
    let children = element.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .collect()
}
