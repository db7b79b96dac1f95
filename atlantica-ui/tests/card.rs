// Copyright 2025 Atlantica Advisory Group
// Licensed under MIT OR Apache-2.0
//
// Component tests for the Card family.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, create_mount_point, render_into, yield_now};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use atlantica_tokens::{CardPadding, CardVariant};
use atlantica_ui::components::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use dioxus::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn variant_and_padding_drive_the_class_list() {
    fn wrapper() -> Element {
        rsx! {
            Card { variant: CardVariant::Elevated, padding: CardPadding::Lg,
                "Body"
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, wrapper);
    yield_now().await;

    let card = mount
        .query_selector(".card")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    let classes = card.class_list();
    assert!(classes.contains("card-elevated"));
    assert!(classes.contains("card-pad-lg"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn slots_wrap_their_children_in_order() {
    fn wrapper() -> Element {
        rsx! {
            Card {
                CardHeader {
                    CardTitle { "Residency planning" }
                    CardDescription { "From first call to final filing." }
                }
                CardContent { p { "Full service." } }
                CardFooter { "Talk to us" }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, wrapper);
    yield_now().await;

    let title = mount.query_selector(".card-title").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), "Residency planning");
    assert!(mount.query_selector(".card-header .card-description").unwrap().is_some());
    assert!(mount.query_selector(".card-content p").unwrap().is_some());
    assert!(mount.query_selector(".card-footer").unwrap().is_some());

    cleanup(&mount);
}
