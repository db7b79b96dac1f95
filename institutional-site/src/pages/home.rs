/*
 * Copyright 2025 Atlantica Advisory Group
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use dioxus::prelude::*;

use atlantica_tokens::{ButtonSize, ButtonVariant, CardPadding, CardVariant};
use atlantica_ui::components::button::Button;
use atlantica_ui::components::card::{Card, CardContent, CardDescription, CardTitle};
use atlantica_ui::components::consent_banner::ConsentBanner;
use atlantica_ui::components::footer::{Footer, FooterSection};
use atlantica_ui::components::header::{Header, NavLink};
use atlantica_ui::components::locale_toggle::LocaleToggle;
use atlantica_ui::components::theme_toggle::ThemeToggle;
use atlantica_ui::theme::use_locale;

use crate::content;

const CONTACT_EMAIL: &str = "hello@atlantica.pt";

#[component]
pub fn Home() -> Element {
    let locale = use_locale();
    let copy = content::copy(locale);

    let write_to_us = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url(&format!("mailto:{CONTACT_EMAIL}"));
        }
    };

    rsx! {
        Header {
            brand: "Atlantica Group",
            logo_light: Some(String::from("/images/atlantica-on-light.svg")),
            logo_dark: Some(String::from("/images/atlantica-on-dark.svg")),
            links: vec![
                NavLink::new(copy.nav_services, "#services"),
                NavLink::new(copy.nav_approach, "#approach"),
                NavLink::new(copy.nav_contact, "#contact"),
            ],
            cta: Some(rsx! {
                LocaleToggle {}
                ThemeToggle {}
            }),
        }

        main {
            section { class: "hero",
                h1 { class: "hero-title", "{copy.hero_title}" }
                p { class: "hero-lead", "{copy.hero_lead}" }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Lg,
                    onclick: write_to_us,
                    "{copy.hero_cta}"
                }
            }

            section { id: "services", class: "services",
                h2 { class: "section-title", "{copy.services_title}" }
                div { class: "services-grid",
                    for service in copy.services.iter() {
                        Card { variant: CardVariant::Bordered, padding: CardPadding::Lg,
                            CardTitle { "{service.title}" }
                            CardDescription { "{service.body}" }
                            CardContent {
                                a { class: "service-link", href: "{service.href}", "→" }
                            }
                        }
                    }
                }
            }

            section { id: "approach", class: "approach",
                h2 { class: "section-title", "{copy.approach_title}" }
                for paragraph in copy.approach_paragraphs.iter() {
                    p { class: "approach-paragraph", "{paragraph}" }
                }
            }

            section { id: "contact", class: "contact",
                h2 { class: "section-title", "{copy.contact_title}" }
                p { class: "contact-lead", "{copy.contact_lead}" }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Md,
                    onclick: write_to_us,
                    "{copy.contact_cta}"
                }
            }
        }

        Footer {
            brand: "Atlantica Group",
            logo_light: Some(String::from("/images/atlantica-on-light.svg")),
            logo_dark: Some(String::from("/images/atlantica-on-dark.svg")),
            tagline: Some(copy.footer_tagline.to_string()),
            sections: vec![
                FooterSection::new(
                    copy.footer_group_title,
                    copy.services
                        .iter()
                        .map(|s| NavLink::new(s.title, s.href))
                        .collect(),
                ),
                FooterSection::new(
                    copy.footer_legal_title,
                    vec![NavLink::new(copy.footer_privacy, "/privacy")],
                ),
            ],
        }

        ConsentBanner {
            message: copy.consent_message.to_string(),
            accept_label: copy.consent_accept.to_string(),
        }
    }
}
