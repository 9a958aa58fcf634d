//! Flower Garden core crate.
//!
//! A small decorative toy: clicks on the lower "ground" band of the garden
//! surface plant flowers, clicking a flower wilts it away, a control clears
//! the whole garden in a staggered cascade, and a hidden key sequence sets
//! off a celebratory burst. All state lives in the garden controller started
//! by `start_garden()`; the shared palette and key-sequence datasets below
//! stay public for host pages and tests.

use wasm_bindgen::prelude::*;

mod garden;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Shared datasets
// -----------------------------------------------------------------------------

/// Color variants a freshly planted flower may take, applied as a CSS class
/// next to `flower`. Picked uniformly at random per plant.
pub const FLOWER_COLORS: &[&str] = &["pink", "red", "purple", "blue", "orange", "yellow"];

/// The hidden key sequence (KeyboardEvent.key names, in order) that triggers
/// the flower burst.
pub const SECRET_SEQUENCE: &[&str] = &[
    "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
    "ArrowRight", "b", "a",
];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Wire the garden up to the host page. Expects `#garden`, `#clearBtn` and
/// `#count` to exist; call once the DOM is ready.
#[wasm_bindgen]
pub fn start_garden() -> Result<(), JsValue> {
    garden::start()
}
