// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use atlantica_ui::components::footer::Footer;
use atlantica_ui::components::header::Header;
use atlantica_ui::components::locale_toggle::LocaleToggle;
use atlantica_ui::components::theme_toggle::ThemeToggle;
use atlantica_ui::theme::use_locale;

use crate::content;

#[component]
pub fn Privacy() -> Element {
    let locale = use_locale();
    let copy = content::copy(locale);

    rsx! {
        Header {
            brand: "Atlantica Group",
            cta: Some(rsx! {
                LocaleToggle {}
                ThemeToggle {}
            }),
        }
        main { class: "legal",
            h1 { class: "section-title", "{copy.privacy_title}" }
            for paragraph in copy.privacy_paragraphs.iter() {
                p { class: "legal-paragraph", "{paragraph}" }
            }
        }
        Footer { brand: "Atlantica Group" }
    }
}
