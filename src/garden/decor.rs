//! Cosmetic pieces: drifting clouds, the planting-click ripple, and the
//! ripple keyframes injected once per page. None of these are tracked after
//! creation.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{rng, timer};

const CLOUD_COUNT: u32 = 3;
const CLOUD_DELAY_STEP_S: u32 = 7;
const RIPPLE_LIFETIME_MS: i32 = 600;
const KEYFRAMES_ID: &str = "flower-garden-keyframes";

const RIPPLE_KEYFRAMES: &str = "\
@keyframes ripple {
    0% { width: 0; height: 0; opacity: 1; }
    100% { width: 60px; height: 60px; opacity: 0; }
}";

/// Install the ripple animation rule. Safe to call again; the element id
/// guards against duplicates.
pub(super) fn inject_ripple_keyframes(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id(KEYFRAMES_ID).is_some() {
        return Ok(());
    }
    let style = doc.create_element("style")?;
    style.set_id(KEYFRAMES_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    let head = doc
        .head()
        .ok_or_else(|| JsValue::from_str("no document head"))?;
    head.append_child(&style)?;
    Ok(())
}

/// Scatter a few drifting clouds over the surface. Size, position and timing
/// are randomized once; the clouds are never touched again.
pub(super) fn add_clouds(
    doc: &Document,
    surface: &HtmlElement,
    rng: &mut rng::Lcg,
) -> Result<(), JsValue> {
    for i in 0..CLOUD_COUNT {
        let cloud = doc.create_element("div")?;
        cloud.set_class_name("cloud");
        let size = rng.range_f64(40.0, 80.0);
        let top = rng.range_f64(20.0, 120.0);
        let left = rng.range_f64(0.0, 100.0);
        let duration = rng.range_f64(20.0, 30.0);
        cloud.set_attribute(
            "style",
            &format!(
                "width:{size:.0}px; height:{:.0}px; top:{top:.0}px; left:{left:.1}%; \
                 animation-delay:{}s; animation-duration:{duration:.1}s",
                size * 0.6,
                i * CLOUD_DELAY_STEP_S,
            ),
        )?;

        // Two offset puffs give the cloud its lumpy outline.
        let puff = doc.create_element("div")?;
        puff.set_attribute(
            "style",
            &format!(
                "width:{0:.0}px; height:{0:.0}px; top:{1:.0}px; left:{2:.0}px",
                size * 0.7,
                -size * 0.3,
                size * 0.2,
            ),
        )?;
        cloud.append_child(&puff)?;

        let puff = doc.create_element("div")?;
        puff.set_attribute(
            "style",
            &format!(
                "width:{0:.0}px; height:{0:.0}px; top:{1:.0}px; right:{2:.0}px",
                size * 0.7,
                -size * 0.2,
                size * 0.2,
            ),
        )?;
        cloud.append_child(&puff)?;

        surface.append_child(&cloud)?;
    }
    Ok(())
}

/// Expanding circle marking where a flower was planted; removes itself once
/// the animation has run.
pub(super) fn spawn_ripple(
    doc: &Document,
    surface: &HtmlElement,
    x: f64,
    y: f64,
) -> Result<(), JsValue> {
    let ripple: Element = doc.create_element("div")?;
    ripple.set_attribute(
        "style",
        &format!(
            "position:absolute; left:{x}px; top:{y}px; width:0; height:0; \
             border-radius:50%; border:2px solid rgba(255,255,255,0.6); \
             transform:translate(-50%,-50%); animation:ripple 0.6s ease-out; \
             pointer-events:none"
        ),
    )?;
    surface.append_child(&ripple)?;

    if let Ok(handle) = timer::after(RIPPLE_LIFETIME_MS, move || ripple.remove()) {
        handle.forget();
    }
    Ok(())
}
