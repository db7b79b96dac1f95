// Copyright 2025 Atlantica Advisory Group
// Licensed under MIT OR Apache-2.0
//
// Component tests for the ConsentBanner against real browser localStorage.
// Each test restores the first-visit state so tests don't leak into each
// other.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, count, create_mount_point, render_into, yield_now};
use wasm_bindgen_test::*;

use atlantica_ui::components::consent_banner::ConsentBanner;
use atlantica_ui::consent::{clear_consent_for_tests, load_consent, save_consent};
use dioxus::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn wrapper() -> Element {
    rsx! {
        ConsentBanner {}
    }
}

#[wasm_bindgen_test]
async fn first_visit_shows_the_banner() {
    clear_consent_for_tests();
    let mount = create_mount_point();
    render_into(&mount, wrapper);
    yield_now().await;

    assert_eq!(count(&mount, ".consent-banner"), 1);
    assert!(!load_consent());

    cleanup(&mount);
    clear_consent_for_tests();
}

#[wasm_bindgen_test]
async fn accepting_hides_the_banner_and_persists_the_flag() {
    clear_consent_for_tests();
    let mount = create_mount_point();
    render_into(&mount, wrapper);
    yield_now().await;

    click(&mount, ".consent-banner button");
    yield_now().await;

    assert_eq!(count(&mount, ".consent-banner"), 0);
    assert!(load_consent(), "accept must persist the consent flag");

    cleanup(&mount);
    clear_consent_for_tests();
}

#[wasm_bindgen_test]
async fn banner_never_returns_once_the_flag_is_present() {
    clear_consent_for_tests();
    save_consent();

    let mount = create_mount_point();
    render_into(&mount, wrapper);
    yield_now().await;

    assert_eq!(count(&mount, ".consent-banner"), 0);

    cleanup(&mount);
    clear_consent_for_tests();
}
