//! Flower construction and removal.
//!
//! A flower is a plain div carrying the `flower` class plus one color variant
//! class; the petal and stem structure is styled entirely by the host page's
//! CSS. Each flower owns its removal: a click on it wilts it away without
//! replanting underneath.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::{SHRINK_MS, Shared, timer};

// The visual anchor sits left of and above the click point so the stem
// appears rooted where the pointer landed.
const ANCHOR_DX: f64 = -20.0;
const ANCHOR_DY: f64 = -60.0;

// The grow-in keyframes played backwards.
const SHRINK_ANIMATION: &str = "grow 0.3s ease-in reverse";

const FLOWER_MARKUP: &str = "\
<div class=\"petals\">\
<div class=\"petal\"></div>\
<div class=\"petal\"></div>\
<div class=\"petal\"></div>\
<div class=\"petal\"></div>\
<div class=\"petal\"></div>\
<div class=\"petal\"></div>\
<div class=\"center\"></div>\
</div>\
<div class=\"stem\"></div>";

/// Build a flower anchored at the given surface-relative point. The caller
/// appends it to the surface; the removal click handler is wired here.
pub(super) fn create(
    doc: &Document,
    state: &Shared,
    x: f64,
    y: f64,
    variant: &str,
) -> Result<HtmlElement, JsValue> {
    let flower: HtmlElement = doc.create_element("div")?.dyn_into()?;
    flower.set_class_name(&format!("flower {variant}"));
    let style = flower.style();
    style.set_property("left", &format!("{}px", x + ANCHOR_DX))?;
    style.set_property("top", &format!("{}px", y + ANCHOR_DY))?;
    flower.set_inner_html(FLOWER_MARKUP);

    {
        let shared = state.clone();
        let el = flower.clone();
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            // Keep the click from reaching the surface and planting anew.
            evt.stop_propagation();
            remove(&shared, &el);
        }) as Box<dyn FnMut(_)>);
        flower.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(flower)
}

/// Wilt and detach, then decrement the count (floored at zero) and refresh
/// the display. A flower already wilting ignores further removal requests.
pub(super) fn remove(state: &Shared, flower: &HtmlElement) {
    if !mark_wilting(flower) {
        return;
    }
    let shared = state.clone();
    let el = flower.clone();
    if let Ok(handle) = timer::after(SHRINK_MS, move || {
        el.remove();
        {
            let mut st = shared.borrow_mut();
            st.flower_count = st.flower_count.saturating_sub(1);
        }
        if let Err(err) = super::refresh_count(&shared) {
            web_sys::console::error_1(&err);
        }
    }) {
        handle.forget();
    }
}

/// Sweep path: wilt and detach without touching the counter; the sweep's
/// final reset settles the count once the cascade is done.
pub(super) fn remove_uncounted(flower: &HtmlElement) {
    if !mark_wilting(flower) {
        return;
    }
    let el = flower.clone();
    if let Ok(handle) = timer::after(SHRINK_MS, move || el.remove()) {
        handle.forget();
    }
}

// Marks the flower as mid-removal and starts the shrink-out. Returns false
// when a removal is already in flight.
fn mark_wilting(flower: &HtmlElement) -> bool {
    let classes = flower.class_list();
    if classes.contains("wilting") {
        return false;
    }
    classes.add_1("wilting").ok();
    flower
        .style()
        .set_property("animation", SHRINK_ANIMATION)
        .ok();
    true
}
