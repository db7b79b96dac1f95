/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! Labeled text field.
//!
//! Every instance mints a stable id so the label, the field, and the
//! error/helper line stay linked for assistive technology. An error displaces
//! the helper text and marks the field invalid.

use crate::theme::use_theme_mode;
use atlantica_tokens::style_map;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(0);

#[component]
pub fn Input(
    #[props(default)] label: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] helper_text: Option<String>,
    #[props(default)] full_width: bool,
    #[props(default = String::from("text"))] input_type: String,
    #[props(default)] name: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] value: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] oninput: Option<EventHandler<Event<FormData>>>,
) -> Element {
    let theme = use_theme_mode();
    let instance = use_hook(|| NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed));
    let field_id = format!("atl-field-{instance}");
    let note_id = format!("atl-field-{instance}-note");

    let invalid = error.is_some();
    let class = style_map::input_class(theme, invalid, full_width);
    let has_note = invalid || helper_text.is_some();

    // Error displaces helper; at most one note renders, under the same id
    // the field points at.
    let note = if let Some(error) = error.as_ref() {
        Some(rsx! {
            p { id: "{note_id}", class: "field-error", role: "alert", "{error}" }
        })
    } else {
        helper_text.as_ref().map(|helper| {
            rsx! {
                p { id: "{note_id}", class: "field-helper", "{helper}" }
            }
        })
    };

    rsx! {
        div { class: if full_width { "field field-block" } else { "field" },
            if let Some(label) = label.as_ref() {
                label { r#for: "{field_id}", class: "field-label", "{label}" }
            }
            input {
                id: "{field_id}",
                class: "{class}",
                r#type: "{input_type}",
                name: name,
                placeholder: placeholder,
                value: value,
                required: required,
                aria_invalid: if invalid { "true" } else { "false" },
                aria_describedby: if has_note { Some(note_id.clone()) } else { None },
                oninput: move |evt| {
                    if let Some(handler) = &oninput {
                        handler.call(evt);
                    }
                },
            }
            {note}
        }
    }
}
