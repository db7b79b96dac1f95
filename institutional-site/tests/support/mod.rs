// Copyright 2025 Atlantica Advisory Group
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for institutional-site integration tests.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Render a Dioxus component into the given mount element.
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Yield to the browser event loop so Dioxus can process its render work.
pub async fn yield_now() {
    for _ in 0..2 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

/// Dispatch a native click on the first element matching `selector`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    let element = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matching {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    element.click();
}
