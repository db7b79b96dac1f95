// SPDX-License-Identifier: MIT OR Apache-2.0

//! App shell: providers, design tokens, config check, router.

use atlantica_tokens::TokenSet;
use atlantica_ui::components::config_error::ConfigError;
use atlantica_ui::config::site_config;
use atlantica_ui::observer::MediaQuerySource;
use atlantica_ui::theme::use_theme_provider;
use dioxus::prelude::*;

use crate::routing::Route;

#[component]
fn RouteSwitch() -> Element {
    if let Err(e) = site_config() {
        return rsx! {
            ConfigError { message: e }
        };
    }

    rsx! {
        Router::<Route> {}
    }
}

#[component]
pub fn App() -> Element {
    use_theme_provider(MediaQuerySource);
    let tokens = use_hook(|| TokenSet::default().css_variables());

    rsx! {
        style { "{tokens}" }
        RouteSwitch {}
    }
}
