//! Garden surface controller.
//!
//! Owns the flower count and wires the three input paths — planting clicks on
//! the surface, the clear control, and the document-wide key listener for the
//! hidden sequence — to the flower factory, the decorations, and the delayed
//! animation steps. All mutable state lives in one [`GardenState`] value
//! shared by the event closures; nothing is kept in module globals.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, window};

mod decor;
mod flower;
mod geometry;
mod konami;
mod rng;
mod timer;

// --- Cfg ---------------------------------------------------------------------

/// Per-item delay used to sequence staggered effects (sweep and burst).
const STAGGER_MS: u32 = 50;
/// Duration of the shrink-out a flower plays before it detaches.
const SHRINK_MS: i32 = 300;
/// Deferral before the counter pop animation is re-applied; re-setting the
/// same animation name back-to-back does not retrigger it without a reset.
const POP_RESTART_MS: i32 = 10;
/// Ring size of the celebration burst.
const BURST_FLOWERS: u32 = 20;
/// When the burst's single display refresh fires.
const BURST_SETTLE_MS: i32 = 1000;

// --- State -------------------------------------------------------------------

/// Runtime garden state, one value per started garden.
struct GardenState {
    surface: HtmlElement,
    count_display: HtmlElement,
    flower_count: u32,
    rng: rng::Lcg,
    secret: konami::SequenceDetector,
    // Pending pop re-application; replaced (and thereby cancelled) on every
    // refresh so only the newest one fires.
    pop_timer: Option<timer::TimerHandle>,
    // Outstanding sweep steps; a newer sweep supersedes them wholesale.
    sweep_timers: Vec<timer::TimerHandle>,
}

type Shared = Rc<RefCell<GardenState>>;

fn document() -> Result<Document, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

// --- Startup -----------------------------------------------------------------

pub(crate) fn start() -> Result<(), JsValue> {
    let doc = document()?;
    let surface: HtmlElement = doc
        .get_element_by_id("garden")
        .ok_or_else(|| JsValue::from_str("no #garden element"))?
        .dyn_into()?;
    let clear_btn: HtmlElement = doc
        .get_element_by_id("clearBtn")
        .ok_or_else(|| JsValue::from_str("no #clearBtn element"))?
        .dyn_into()?;
    let count_display: HtmlElement = doc
        .get_element_by_id("count")
        .ok_or_else(|| JsValue::from_str("no #count element"))?
        .dyn_into()?;

    decor::inject_ripple_keyframes(&doc)?;

    let mut rng = rng::Lcg::new(rng::entropy_seed());
    decor::add_clouds(&doc, &surface, &mut rng)?;

    let state: Shared = Rc::new(RefCell::new(GardenState {
        surface: surface.clone(),
        count_display,
        flower_count: 0,
        rng,
        secret: konami::SequenceDetector::new(crate::SECRET_SEQUENCE),
        pop_timer: None,
        sweep_timers: Vec::new(),
    }));

    // Planting clicks on the surface
    {
        let shared = state.clone();
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            if let Err(err) = on_surface_click(&shared, &evt) {
                web_sys::console::error_1(&err);
            }
        }) as Box<dyn FnMut(_)>);
        surface.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Clear control
    {
        let shared = state.clone();
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            if let Err(err) = on_clear_click(&shared) {
                web_sys::console::error_1(&err);
            }
        }) as Box<dyn FnMut(_)>);
        clear_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Hidden sequence listens document-wide
    {
        let shared = state.clone();
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            let matched = shared.borrow_mut().secret.observe(&evt.key());
            if matched {
                if let Err(err) = trigger_burst(&shared) {
                    web_sys::console::error_1(&err);
                }
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    web_sys::console::log_1(&"flower garden ready".into());
    Ok(())
}

// --- Planting ----------------------------------------------------------------

fn on_surface_click(state: &Shared, evt: &MouseEvent) -> Result<(), JsValue> {
    if let Some(target) = evt.target().and_then(|t| t.dyn_into::<Element>().ok()) {
        // Clicks on an existing flower or a control button never plant.
        if target.closest(".flower")?.is_some() || target.closest(".btn")?.is_some() {
            return Ok(());
        }
    }

    let (x, y, variant) = {
        let mut st = state.borrow_mut();
        let rect = st.surface.get_bounding_client_rect();
        let x = f64::from(evt.client_x()) - rect.left();
        let y = f64::from(evt.client_y()) - rect.top();
        if !geometry::in_ground_band(y, rect.height()) {
            return Ok(());
        }
        let variant = crate::FLOWER_COLORS[st.rng.pick(crate::FLOWER_COLORS.len())];
        (x, y, variant)
    };

    let doc = document()?;
    let planted = flower::create(&doc, state, x, y, variant)?;
    state.borrow().surface.append_child(&planted)?;
    state.borrow_mut().flower_count += 1;
    refresh_count(state)?;
    decor::spawn_ripple(&doc, &state.borrow().surface, x, y)?;
    Ok(())
}

// --- Clearing ----------------------------------------------------------------

fn on_clear_click(state: &Shared) -> Result<(), JsValue> {
    let doc = document()?;
    let flowers = doc.query_selector_all(".flower")?;
    let n = flowers.length();

    let mut st = state.borrow_mut();
    // A newer sweep supersedes whatever is still pending from the last one.
    st.sweep_timers.clear();
    if n == 0 {
        return Ok(());
    }

    for i in 0..n {
        let Some(node) = flowers.item(i) else { continue };
        let el: HtmlElement = node.dyn_into()?;
        let handle = timer::after((i * STAGGER_MS) as i32, move || {
            flower::remove_uncounted(&el);
        })?;
        st.sweep_timers.push(handle);
    }

    // The reset fires unconditionally once the cascade has played out, even
    // if flowers were planted or individually removed in the meantime.
    let shared = state.clone();
    let handle = timer::after(geometry::sweep_reset_delay(n), move || {
        shared.borrow_mut().flower_count = 0;
        if let Err(err) = refresh_count(&shared) {
            web_sys::console::error_1(&err);
        }
    })?;
    st.sweep_timers.push(handle);
    Ok(())
}

// --- Counter display ---------------------------------------------------------

/// Write the count into the display and replay its pop animation.
fn refresh_count(state: &Shared) -> Result<(), JsValue> {
    let mut st = state.borrow_mut();
    let count = st.flower_count;
    st.count_display.set_text_content(Some(&count.to_string()));
    st.count_display.style().set_property("animation", "none")?;
    let display = st.count_display.clone();
    st.pop_timer = Some(timer::after(POP_RESTART_MS, move || {
        display
            .style()
            .set_property("animation", "centerPop 0.3s ease")
            .ok();
    })?);
    Ok(())
}

// --- Celebration burst -------------------------------------------------------

/// Plant up to [`BURST_FLOWERS`] flowers on a ring low on the surface,
/// staggered so they pop up one after another.
fn trigger_burst(state: &Shared) -> Result<(), JsValue> {
    let (center, height) = {
        let st = state.borrow();
        let rect = st.surface.get_bounding_client_rect();
        (
            geometry::burst_center(rect.width(), rect.height()),
            rect.height(),
        )
    };

    for i in 0..BURST_FLOWERS {
        let shared = state.clone();
        timer::after((i * STAGGER_MS) as i32, move || {
            if let Err(err) = burst_tick(&shared, center, i, height) {
                web_sys::console::error_1(&err);
            }
        })?
        .forget();
    }

    // One display refresh after the whole ring has had its chance.
    let shared = state.clone();
    timer::after(BURST_SETTLE_MS, move || {
        if let Err(err) = refresh_count(&shared) {
            web_sys::console::error_1(&err);
        }
    })?
    .forget();
    Ok(())
}

fn burst_tick(state: &Shared, center: (f64, f64), i: u32, height: f64) -> Result<(), JsValue> {
    let (x, y, variant) = {
        let mut st = state.borrow_mut();
        let radius = st.rng.range_f64(100.0, 200.0);
        let (x, y) = geometry::burst_point(center, i, BURST_FLOWERS, radius);
        // Ring points outside the ground band are skipped, no substitution.
        if !geometry::in_ground_band(y, height) || y >= height {
            return Ok(());
        }
        let variant = crate::FLOWER_COLORS[st.rng.pick(crate::FLOWER_COLORS.len())];
        (x, y, variant)
    };

    let doc = document()?;
    let planted = flower::create(&doc, state, x, y, variant)?;
    state.borrow().surface.append_child(&planted)?;
    // The display catches up in one refresh once the burst settles.
    state.borrow_mut().flower_count += 1;
    Ok(())
}
