/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! Site footer shell.

use crate::components::header::NavLink;
use crate::theme::use_theme_mode;
use atlantica_types::ThemeMode;
use dioxus::prelude::*;

/// A named group of footer links.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<NavLink>,
}

impl FooterSection {
    pub fn new(title: &str, links: Vec<NavLink>) -> Self {
        Self {
            title: title.to_string(),
            links,
        }
    }
}

#[component]
pub fn Footer(
    #[props(into)] brand: String,
    #[props(default)] logo_light: Option<String>,
    #[props(default)] logo_dark: Option<String>,
    #[props(default)] sections: Vec<FooterSection>,
    #[props(default)] tagline: Option<String>,
) -> Element {
    let theme = use_theme_mode();
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
        footer { class: "site-footer {theme.as_class()}",
            div { class: "site-footer-brand",
                {brand_mark}
                if let Some(tagline) = tagline.as_ref() {
                    p { class: "site-footer-tagline", "{tagline}" }
                }
            }
            div { class: "site-footer-sections",
                for section in sections.iter() {
                    div { class: "site-footer-section",
                        h4 { class: "site-footer-section-title", "{section.title}" }
                        ul {
                            for link in section.links.iter() {
                                li {
                                    a { class: "site-footer-link", href: "{link.href}", "{link.label}" }
                                }
                            }
                        }
                    }
                }
            }
            p { class: "site-footer-legal", "© 2025 {brand}. All rights reserved." }
        }
    }
}
