/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! Card container and its composition slots.
//!
//! The slots only apply spacing and typography; none of them holds state or
//! interferes with the children it wraps.

use crate::theme::use_theme_mode;
use atlantica_tokens::style_map;
use atlantica_tokens::{CardPadding, CardVariant};
use dioxus::prelude::*;

#[component]
pub fn Card(
    children: Element,
    #[props(default)] variant: CardVariant,
    #[props(default)] padding: CardPadding,
) -> Element {
    let theme = use_theme_mode();
    let class = style_map::card_class(theme, variant, padding);

    rsx! {
        div { class: "{class}", {children} }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}
