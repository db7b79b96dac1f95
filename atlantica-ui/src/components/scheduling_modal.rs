/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! Overlay hosting the third-party booking widget.
//!
//! Pure open/closed presentation: the page owns the flag, the modal renders
//! the widget iframe at the caller-supplied URL and never looks at what
//! happens inside it. Closing is always safe, loaded widget or not.

use crate::components::icons::CloseIcon;
use dioxus::prelude::*;

#[component]
pub fn SchedulingModal(
    /// Booking page URL, passed through to the embed untouched.
    #[props(into)]
    url: String,
    open: bool,
    on_close: EventHandler<MouseEvent>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "scheduling-modal-backdrop",
            onclick: move |evt| on_close.call(evt),
            div {
                class: "scheduling-modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "scheduling-modal-close",
                    aria_label: "Close",
                    onclick: move |evt| on_close.call(evt),
                    CloseIcon {}
                }
                div { class: "scheduling-modal-frame",
                    iframe {
                        src: "{url}",
                        title: "Book a consultation",
                        loading: "lazy",
                    }
                }
            }
        }
    }
}
