// Copyright 2025 Atlantica Advisory Group
// Licensed under MIT OR Apache-2.0
//
// Component tests for the SchedulingModal: open/close transitions and
// residue-free re-opening.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, count, create_mount_point, render_into, yield_now};
use wasm_bindgen_test::*;

use atlantica_ui::components::scheduling_modal::SchedulingModal;
use dioxus::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const BOOKING_URL: &str = "https://example.com/book/atlantica";

/// Page-like harness: owns the open flag the way a real page does.
fn harness() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        button {
            class: "open-trigger",
            onclick: move |_| open.set(true),
            "Book"
        }
        SchedulingModal {
            url: BOOKING_URL,
            open: *open.read(),
            on_close: move |_| open.set(false),
        }
    }
}

#[wasm_bindgen_test]
async fn closed_modal_renders_nothing() {
    let mount = create_mount_point();
    render_into(&mount, harness);
    yield_now().await;

    assert_eq!(count(&mount, ".scheduling-modal-backdrop"), 0);
    assert_eq!(count(&mount, "iframe"), 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn opening_shows_the_widget_at_the_supplied_url() {
    let mount = create_mount_point();
    render_into(&mount, harness);
    yield_now().await;

    click(&mount, ".open-trigger");
    yield_now().await;

    assert_eq!(count(&mount, ".scheduling-modal-backdrop"), 1);
    let iframe = mount.query_selector("iframe").unwrap().unwrap();
    assert_eq!(iframe.get_attribute("src").as_deref(), Some(BOOKING_URL));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn backdrop_click_closes_even_before_the_widget_loads() {
    let mount = create_mount_point();
    render_into(&mount, harness);
    yield_now().await;

    click(&mount, ".open-trigger");
    yield_now().await;
    // The iframe never gets a chance to load anything in this test; closing
    // must still work.
    click(&mount, ".scheduling-modal-backdrop");
    yield_now().await;

    assert_eq!(count(&mount, ".scheduling-modal-backdrop"), 0);
    assert_eq!(count(&mount, "iframe"), 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn close_button_closes_without_the_backdrop_handler_firing_twice() {
    let mount = create_mount_point();
    render_into(&mount, harness);
    yield_now().await;

    click(&mount, ".open-trigger");
    yield_now().await;
    click(&mount, ".scheduling-modal-close");
    yield_now().await;

    assert_eq!(count(&mount, ".scheduling-modal-backdrop"), 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn reopening_leaves_no_residue_from_the_previous_cycle() {
    let mount = create_mount_point();
    render_into(&mount, harness);
    yield_now().await;

    click(&mount, ".open-trigger");
    yield_now().await;
    click(&mount, ".scheduling-modal-backdrop");
    yield_now().await;
    click(&mount, ".open-trigger");
    yield_now().await;

    // Exactly one backdrop and one widget frame; nothing stacked up.
    assert_eq!(count(&mount, ".scheduling-modal-backdrop"), 1);
    assert_eq!(count(&mount, "iframe"), 1);

    cleanup(&mount);
}
