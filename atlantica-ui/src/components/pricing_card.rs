/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! Pricing plan card.

use crate::components::button::Button;
use crate::components::icons::CheckIcon;
use crate::theme::use_theme_mode;
use atlantica_tokens::style_map;
use atlantica_tokens::{ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// One plan in a pricing grid. The card itself is stateless: the embedded
/// button forwards straight to `on_select`, and `highlighted` only switches
/// the badge and emphasis treatment on.
#[component]
pub fn PricingCard(
    #[props(into)] name: String,
    #[props(into)] price: String,
    #[props(default = String::from("€"))] currency: String,
    #[props(into)] period: String,
    #[props(into)] description: String,
    features: Vec<String>,
    #[props(default)] highlighted: bool,
    #[props(into)] button_label: String,
    #[props(default)] on_select: Option<EventHandler<MouseEvent>>,
) -> Element {
    let theme = use_theme_mode();
    let class = style_map::pricing_card_class(theme, highlighted);
    let variant = if highlighted {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    rsx! {
        div { class: "{class}",
            if highlighted {
                span { class: "pricing-badge", "Most popular" }
            }
            div { class: "pricing-card-head",
                h3 { class: "pricing-name", "{name}" }
                p { class: "pricing-description", "{description}" }
            }
            div { class: "pricing-price",
                span { class: "pricing-currency", "{currency}" }
                span { class: "pricing-amount", "{price}" }
                span { class: "pricing-period", "/{period}" }
            }
            ul { class: "pricing-features",
                for feature in features.iter() {
                    li { class: "pricing-feature",
                        span { class: "pricing-feature-check", CheckIcon {} }
                        span { "{feature}" }
                    }
                }
            }
            Button {
                variant,
                size: ButtonSize::Lg,
                full_width: true,
                onclick: move |evt| {
                    if let Some(handler) = &on_select {
                        handler.call(evt);
                    }
                },
                "{button_label}"
            }
        }
    }
}
