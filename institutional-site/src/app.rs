// SPDX-License-Identifier: MIT OR Apache-2.0

//! App shell: providers, design tokens, router.

use atlantica_tokens::TokenSet;
use atlantica_ui::observer::MediaQuerySource;
use atlantica_ui::theme::{use_locale_provider, use_theme_provider};
use dioxus::prelude::*;

use crate::routing::Route;

#[component]
pub fn App() -> Element {
    use_theme_provider(MediaQuerySource);
    use_locale_provider();
    let tokens = use_hook(|| TokenSet::default().css_variables());

    rsx! {
        style { "{tokens}" }
        Router::<Route> {}
    }
}
