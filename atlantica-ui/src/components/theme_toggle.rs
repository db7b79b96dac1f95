/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! Manual light/dark switch.

use crate::components::icons::{MoonIcon, SunIcon};
use crate::theme::ThemeCtx;
use atlantica_types::ThemeMode;
use dioxus::prelude::*;

/// Flips the page theme and pins the choice until reload. Requires the theme
/// context from `use_theme_provider`.
#[component]
pub fn ThemeToggle() -> Element {
    let mut pref = use_context::<ThemeCtx>();
    let mode = pref.read().resolved();
    let label = match mode {
        ThemeMode::Dark => "Switch to light mode",
        ThemeMode::Light => "Switch to dark mode",
    };

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "{label}",
            onclick: move |_| pref.write().toggle(),
            if mode == ThemeMode::Dark {
                SunIcon {}
            } else {
                MoonIcon {}
            }
        }
    }
}
