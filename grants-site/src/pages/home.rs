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
use atlantica_ui::components::footer::{Footer, FooterSection};
use atlantica_ui::components::header::{Header, NavLink};
use atlantica_ui::components::newsletter_form::NewsletterForm;
use atlantica_ui::components::pricing_card::PricingCard;
use atlantica_ui::components::scheduling_modal::SchedulingModal;
use atlantica_ui::components::theme_toggle::ThemeToggle;
use atlantica_ui::config::{relay_settings, scheduler_url};

use crate::content;

#[component]
pub fn Home() -> Element {
    let mut booking_open = use_signal(|| false);
    let booking_url = use_hook(|| {
        scheduler_url().unwrap_or_else(|e| {
            log::warn!("scheduler URL unavailable: {e}");
            String::new()
        })
    });
    let (relay_endpoint, relay_key) = use_hook(|| {
        relay_settings().unwrap_or_else(|e| {
            log::warn!("relay settings unavailable: {e}");
            (String::new(), String::new())
        })
    });

    rsx! {
        Header {
            brand: "Atlantica Grants",
            logo_light: Some(String::from("/images/grants-on-light.svg")),
            logo_dark: Some(String::from("/images/grants-on-dark.svg")),
            links: vec![
                NavLink::new("Programmes", "#programmes"),
                NavLink::new("Fees", "#fees"),
                NavLink::new("Calendar", "#calendar"),
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

            section { id: "programmes", class: "programmes",
                h2 { class: "section-title", "{content::PROGRAMMES_TITLE}" }
                div { class: "programmes-grid",
                    for programme in content::PROGRAMMES.iter() {
                        Card { variant: CardVariant::Default, padding: CardPadding::Md,
                            CardTitle { "{programme.title}" }
                            CardDescription { "{programme.body}" }
                        }
                    }
                }
            }

            section { id: "fees", class: "pricing",
                h2 { class: "section-title", "{content::PRICING_TITLE}" }
                p { class: "section-lead", "{content::PRICING_LEAD}" }
                div { class: "pricing-grid",
                    for plan in content::PLANS.iter() {
                        PricingCard {
                            name: plan.name,
                            price: plan.price,
                            period: plan.period,
                            description: plan.description,
                            features: plan.features.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
                            highlighted: plan.highlighted,
                            button_label: plan.button_label,
                            on_select: move |_| booking_open.set(true),
                        }
                    }
                }
            }

            section { id: "calendar", class: "newsletter",
                h2 { class: "section-title", "{content::NEWSLETTER_TITLE}" }
                p { class: "section-lead", "{content::NEWSLETTER_LEAD}" }
                NewsletterForm {
                    endpoint: relay_endpoint.clone(),
                    access_key: relay_key.clone(),
                    subject: "Programme calendar signup",
                    from_name: "Atlantica Grants",
                    submit_label: "Get the calendar",
                }
            }
        }

        Footer {
            brand: "Atlantica Grants",
            tagline: Some(String::from("Incentives found, written, and managed.")),
            sections: vec![FooterSection::new(
                "Group",
                vec![
                    NavLink::new("Atlantica Group", "https://atlantica.pt"),
                    NavLink::new("Funding", "https://funding.atlantica.pt"),
                    NavLink::new("Wealth", "https://wealth.atlantica.pt"),
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
