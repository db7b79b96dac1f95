/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! Interactive tax-savings comparison.
//!
//! All state is component-local and the three totals are recomputed
//! synchronously on every keystroke or country change. The arithmetic lives
//! in `atlantica_types::estimator`; this panel only wires fields to it and
//! formats the results.

use crate::components::input::Input;
use crate::theme::use_theme_mode;
use atlantica_types::estimator::{estimate, parse_amount, EstimateInput, ReferenceCountry};
use atlantica_types::format_eur;
use dioxus::prelude::*;

#[component]
pub fn EstimatorPanel() -> Element {
    let theme = use_theme_mode();
    let mut income = use_signal(String::new);
    let mut gain = use_signal(String::new);
    let mut country = use_signal(|| ReferenceCountry::UnitedKingdom);

    let result = estimate(EstimateInput {
        income: parse_amount(&income.read()),
        secondary_gain: parse_amount(&gain.read()),
        reference_country: *country.read(),
    });
    let baseline = format_eur(result.baseline_tax);
    let regime = format_eur(result.flat_regime_tax);
    let savings = format_eur(result.savings);
    let selected_country = *country.read();

    rsx! {
        div { class: "estimator {theme.as_class()}",
            div { class: "estimator-fields",
                Input {
                    label: Some(String::from("Annual income")),
                    input_type: String::from("number"),
                    placeholder: Some(String::from("120000")),
                    helper_text: Some(String::from("Gross, in euros")),
                    full_width: true,
                    value: Some(income.read().clone()),
                    oninput: move |evt: Event<FormData>| income.set(evt.value()),
                }
                Input {
                    label: Some(String::from("Capital gains")),
                    input_type: String::from("number"),
                    placeholder: Some(String::from("0")),
                    helper_text: Some(String::from("Crypto, securities, and similar")),
                    full_width: true,
                    value: Some(gain.read().clone()),
                    oninput: move |evt: Event<FormData>| gain.set(evt.value()),
                }
                div { class: "field field-block",
                    label { r#for: "estimator-country", class: "field-label", "Where you pay tax today" }
                    select {
                        id: "estimator-country",
                        class: "field-input",
                        onchange: move |evt: Event<FormData>| {
                            if let Some(picked) = ReferenceCountry::from_code(&evt.value()) {
                                country.set(picked);
                            }
                        },
                        for option_country in ReferenceCountry::ALL {
                            option {
                                value: option_country.code(),
                                selected: selected_country == option_country,
                                "{option_country.label()}"
                            }
                        }
                    }
                }
            }
            dl { class: "estimator-results",
                div { class: "estimator-row",
                    dt { "Estimated tax at home" }
                    dd { class: "estimator-baseline", "{baseline}" }
                }
                div { class: "estimator-row",
                    dt { "Estimated tax in Portugal" }
                    dd { class: "estimator-regime", "{regime}" }
                }
                div { class: "estimator-row estimator-row-savings",
                    dt { "What stays with you" }
                    dd { class: "estimator-savings", "{savings}" }
                }
            }
        }
    }
}
