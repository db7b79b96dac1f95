/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! Site header shell.

use crate::theme::use_theme_mode;
use atlantica_types::ThemeMode;
use dioxus::prelude::*;

/// One navigation entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Presentational header: brand mark, flat link list, one call-to-action
/// slot. Without a logo the brand name renders as text; nothing here fails
/// on missing props.
#[component]
pub fn Header(
    #[props(into)] brand: String,
    #[props(default)] logo_light: Option<String>,
    #[props(default)] logo_dark: Option<String>,
    #[props(default)] links: Vec<NavLink>,
    #[props(default)] cta: Option<Element>,
) -> Element {
    let theme = use_theme_mode();
    // Theme-appropriate asset pair; a missing file is a broken image by
    // contract, not an error path.
    let logo = match theme {
        ThemeMode::Dark => logo_dark.clone(),
        ThemeMode::Light => logo_light.clone(),
    };
    let brand_mark = match logo.as_ref() {
        Some(src) => rsx! {
            img { class: "site-logo", src: "{src}", alt: "{brand}" }
        },
        None => rsx! {
            span { class: "site-brand-name", "{brand}" }
        },
    };

    rsx! {
        header { class: "site-header {theme.as_class()}",
            a { class: "site-brand", href: "/", {brand_mark} }
            nav { class: "site-nav",
                for link in links.iter() {
                    a { class: "site-nav-link", href: "{link.href}", "{link.label}" }
                }
            }
            div { class: "site-header-actions",
                if let Some(cta) = cta {
                    {cta}
                }
            }
        }
    }
}
