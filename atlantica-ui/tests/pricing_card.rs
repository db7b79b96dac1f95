// Copyright 2025 Atlantica Advisory Group
// Licensed under MIT OR Apache-2.0
//
// Component tests for PricingCard: the highlight badge contract and the
// pass-through select handler.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::Cell;
use support::{cleanup, click, count, create_mount_point, render_into, yield_now};
use wasm_bindgen_test::*;

use atlantica_ui::components::pricing_card::PricingCard;
use dioxus::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static SELECTED: Cell<u32> = const { Cell::new(0) };
}

fn plan(highlighted: bool) -> Element {
    rsx! {
        PricingCard {
            name: "Advisory",
            price: "490",
            period: "month",
            description: "Ongoing support for growing teams",
            features: vec![
                String::from("Quarterly strategy reviews"),
                String::from("Application drafting"),
                String::from("Priority email support"),
            ],
            highlighted,
            button_label: "Choose Advisory",
            on_select: move |_| SELECTED.with(|c| c.set(c.get() + 1)),
        }
    }
}

#[wasm_bindgen_test]
async fn highlighted_card_shows_exactly_one_badge() {
    fn wrapper() -> Element {
        plan(true)
    }

    let mount = create_mount_point();
    render_into(&mount, wrapper);
    yield_now().await;

    assert_eq!(count(&mount, ".pricing-badge"), 1);
    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Most popular"));
    assert_eq!(count(&mount, ".pricing-card-highlighted"), 1);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn plain_card_has_no_badge() {
    fn wrapper() -> Element {
        plan(false)
    }

    let mount = create_mount_point();
    render_into(&mount, wrapper);
    yield_now().await;

    assert_eq!(count(&mount, ".pricing-badge"), 0);
    assert_eq!(count(&mount, ".pricing-card-highlighted"), 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn features_render_as_a_checked_list() {
    fn wrapper() -> Element {
        plan(false)
    }

    let mount = create_mount_point();
    render_into(&mount, wrapper);
    yield_now().await;

    assert_eq!(count(&mount, ".pricing-feature"), 3);
    assert_eq!(count(&mount, ".pricing-feature svg"), 3);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn embedded_button_invokes_the_select_handler() {
    fn wrapper() -> Element {
        plan(false)
    }

    SELECTED.with(|c| c.set(0));
    let mount = create_mount_point();
    render_into(&mount, wrapper);
    yield_now().await;

    click(&mount, "button");
    yield_now().await;
    assert_eq!(SELECTED.with(|c| c.get()), 1);

    cleanup(&mount);
}
