/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! The shared button primitive.

use crate::theme::use_theme_mode;
use atlantica_tokens::style_map;
use atlantica_tokens::{ButtonSize, ButtonState, ButtonVariant};
use dioxus::prelude::*;

/// Stateless button. A disabled or loading button never fires `onclick`;
/// while loading a spinner affordance replaces the leading edge of the label.
#[component]
pub fn Button(
    children: Element,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] loading: bool,
    #[props(default)] full_width: bool,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let theme = use_theme_mode();
    let inert = disabled || loading;
    let class = style_map::button_class(
        theme,
        variant,
        size,
        ButtonState {
            disabled,
            loading,
            full_width,
        },
    );

    rsx! {
        button {
            class: "{class}",
            disabled: inert,
            onclick: move |evt| {
                // The disabled attribute already suppresses native clicks;
                // the guard also covers synthetic activation while loading.
                if inert {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "btn-spinner", aria_hidden: "true" }
            }
            span { class: "btn-label", {children} }
        }
    }
}
