// Browser smoke tests; run with `wasm-pack test --headless --firefox`.
// Native `cargo test` skips this file entirely.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn install_host_elements() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let body = doc.body().unwrap();
    body.set_inner_html(
        "<div id=\"garden\"><button id=\"clearBtn\" class=\"btn\">Clear</button>\
         <span id=\"count\">0</span></div>",
    );
}

#[wasm_bindgen_test]
fn start_garden_populates_decorations() {
    install_host_elements();
    flower_garden::start_garden().unwrap();

    let doc = web_sys::window().unwrap().document().unwrap();
    let clouds = doc.query_selector_all(".cloud").unwrap();
    assert_eq!(clouds.length(), 3);
    assert!(doc.get_element_by_id("flower-garden-keyframes").is_some());
}

#[wasm_bindgen_test]
fn keyframes_rule_installs_once() {
    install_host_elements();
    flower_garden::start_garden().unwrap();
    flower_garden::start_garden().unwrap();

    let doc = web_sys::window().unwrap().document().unwrap();
    let styles = doc.query_selector_all("#flower-garden-keyframes").unwrap();
    assert_eq!(styles.length(), 1);
}
