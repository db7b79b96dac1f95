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
use atlantica_ui::components::card::{Card, CardDescription, CardTitle};
use atlantica_ui::components::consent_banner::ConsentBanner;
use atlantica_ui::components::estimator_panel::EstimatorPanel;
use atlantica_ui::components::footer::{Footer, FooterSection};
use atlantica_ui::components::header::{Header, NavLink};
use atlantica_ui::components::scheduling_modal::SchedulingModal;
use atlantica_ui::components::theme_toggle::ThemeToggle;
use atlantica_ui::config::scheduler_url;

use crate::content;

#[component]
pub fn Home() -> Element {
    let mut booking_open = use_signal(|| false);
    // Config is validated before routing; an empty URL here only means the
    // widget shows the scheduler's own error page.
    let booking_url = use_hook(|| {
        scheduler_url().unwrap_or_else(|e| {
            log::warn!("scheduler URL unavailable: {e}");
            String::new()
        })
    });

    rsx! {
        Header {
            brand: "Atlantica Wealth",
            logo_light: Some(String::from("/images/wealth-on-light.svg")),
            logo_dark: Some(String::from("/images/wealth-on-dark.svg")),
            links: vec![
                NavLink::new("Estimate", "#estimate"),
                NavLink::new("How it works", "#how-it-works"),
            ],
            cta: Some(rsx! {
                ThemeToggle {}
            }),
        }

        main {
            section { class: "hero",
                h1 { class: "hero-title", "{content::HERO_TITLE}" }
                p { class: "hero-lead", "{content::HERO_LEAD}" }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Lg,
                    onclick: move |_| booking_open.set(true),
                    "{content::HERO_CTA}"
                }
            }

            section { id: "estimate", class: "estimate",
                h2 { class: "section-title", "{content::ESTIMATOR_TITLE}" }
                p { class: "section-lead", "{content::ESTIMATOR_LEAD}" }
                EstimatorPanel {}
            }

            section { id: "how-it-works", class: "steps",
                h2 { class: "section-title", "{content::STEPS_TITLE}" }
                div { class: "steps-grid",
                    for step in content::STEPS.iter() {
                        Card { variant: CardVariant::Elevated, padding: CardPadding::Md,
                            CardTitle { "{step.title}" }
                            CardDescription { "{step.body}" }
                        }
                    }
                }
            }

            section { class: "booking",
                h2 { class: "section-title", "{content::BOOKING_TITLE}" }
                p { class: "section-lead", "{content::BOOKING_LEAD}" }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Md,
                    onclick: move |_| booking_open.set(true),
                    "{content::HERO_CTA}"
                }
            }
        }

        Footer {
            brand: "Atlantica Wealth",
            tagline: Some(String::from("Relocation and residency planning.")),
            sections: vec![FooterSection::new(
                "Group",
                vec![
                    NavLink::new("Atlantica Group", "https://atlantica.pt"),
                    NavLink::new("Funding", "https://funding.atlantica.pt"),
                    NavLink::new("Grants", "https://grants.atlantica.pt"),
                ],
            )],
        }

        SchedulingModal {
            url: booking_url,
            open: *booking_open.read(),
            on_close: move |_| booking_open.set(false),
        }
        ConsentBanner {}
    }
}
