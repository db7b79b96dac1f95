/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! One-time cookie notice.

use crate::components::button::Button;
use crate::consent::{load_consent, save_consent};
use crate::theme::use_theme_mode;
use atlantica_tokens::{ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Shown until accepted, then never again in this storage scope. There is no
/// decline control; the only way out is accepting.
#[component]
pub fn ConsentBanner(
    #[props(default = String::from(
        "We use cookies to understand how visitors use this site."
    ))]
    message: String,
    #[props(default = String::from("Accept"))] accept_label: String,
) -> Element {
    let theme = use_theme_mode();
    let mut visible = use_signal(|| !load_consent());

    if !*visible.read() {
        return rsx! {};
    }

    rsx! {
        div { class: "consent-banner {theme.as_class()}", role: "region", aria_label: "Cookie notice",
            p { class: "consent-message", "{message}" }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Sm,
                onclick: move |_| {
                    save_consent();
                    visible.set(false);
                },
                "{accept_label}"
            }
        }
    }
}
