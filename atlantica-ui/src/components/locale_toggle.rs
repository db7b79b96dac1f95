/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! EN/PT switch for the bilingual pages.

use crate::components::icons::GlobeIcon;
use crate::theme::LocaleCtx;
use dioxus::prelude::*;

/// Offers the language the page is not currently showing. Only an explicit
/// click changes the locale; the browser language is never consulted.
#[component]
pub fn LocaleToggle() -> Element {
    let mut locale = use_context::<LocaleCtx>();
    let other = locale.read().toggled();

    rsx! {
        button {
            class: "locale-toggle",
            aria_label: "Switch language to {other.label()}",
            onclick: move |_| {
                let next = locale.read().toggled();
                locale.set(next);
            },
            GlobeIcon {}
            span { class: "locale-toggle-label", "{other.label()}" }
        }
    }
}
