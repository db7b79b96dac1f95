// SPDX-License-Identifier: MIT OR Apache-2.0

//! Centralized style selection.
//!
//! Every themable primitive in the component package computes its class list
//! here, from `(theme, variant, state)` alone. Keeping the mapping in one
//! table makes the selection testable without rendering anything, and keeps
//! theme-conditional class composition out of the component bodies.

use atlantica_types::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Interaction state that affects a button's class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Bordered,
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

fn variant_token(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "btn-primary",
        ButtonVariant::Secondary => "btn-secondary",
        ButtonVariant::Outline => "btn-outline",
        ButtonVariant::Ghost => "btn-ghost",
    }
}

fn size_token(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Sm => "btn-sm",
        ButtonSize::Md => "btn-md",
        ButtonSize::Lg => "btn-lg",
    }
}

pub fn button_class(theme: ThemeMode, variant: ButtonVariant, size: ButtonSize, state: ButtonState) -> String {
    let mut class = format!(
        "btn {} {} {}",
        variant_token(variant),
        size_token(size),
        theme.as_class()
    );
    if state.full_width {
        class.push_str(" btn-block");
    }
    if state.loading {
        class.push_str(" is-loading");
    }
    if state.disabled {
        class.push_str(" is-disabled");
    }
    class
}

pub fn card_class(theme: ThemeMode, variant: CardVariant, padding: CardPadding) -> String {
    let variant_token = match variant {
        CardVariant::Default => "card",
        CardVariant::Bordered => "card card-bordered",
        CardVariant::Elevated => "card card-elevated",
    };
    let padding_token = match padding {
        CardPadding::None => "card-pad-none",
        CardPadding::Sm => "card-pad-sm",
        CardPadding::Md => "card-pad-md",
        CardPadding::Lg => "card-pad-lg",
    };
    format!("{variant_token} {padding_token} {}", theme.as_class())
}

pub fn pricing_card_class(theme: ThemeMode, highlighted: bool) -> String {
    if highlighted {
        format!("pricing-card pricing-card-highlighted {}", theme.as_class())
    } else {
        format!("pricing-card {}", theme.as_class())
    }
}

pub fn input_class(theme: ThemeMode, invalid: bool, full_width: bool) -> String {
    let mut class = format!("field-input {}", theme.as_class());
    if invalid {
        class.push_str(" is-invalid");
    }
    if full_width {
        class.push_str(" field-block");
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEMES: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];
    const VARIANTS: [ButtonVariant; 4] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
    ];
    const SIZES: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    #[test]
    fn button_selection_is_deterministic_over_the_full_axis_grid() {
        for theme in THEMES {
            for variant in VARIANTS {
                for size in SIZES {
                    for disabled in [false, true] {
                        for loading in [false, true] {
                            let state = ButtonState {
                                disabled,
                                loading,
                                full_width: false,
                            };
                            let first = button_class(theme, variant, size, state);
                            let second = button_class(theme, variant, size, state);
                            assert_eq!(first, second);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn distinct_axes_produce_distinct_button_classes() {
        let mut seen = std::collections::HashSet::new();
        for theme in THEMES {
            for variant in VARIANTS {
                for size in SIZES {
                    let class = button_class(theme, variant, size, ButtonState::default());
                    assert!(seen.insert(class.clone()), "collision on {class}");
                }
            }
        }
    }

    #[test]
    fn button_state_tokens_are_present_exactly_when_set() {
        let state = ButtonState {
            disabled: true,
            loading: true,
            full_width: true,
        };
        let class = button_class(
            ThemeMode::Light,
            ButtonVariant::Primary,
            ButtonSize::Md,
            state,
        );
        assert!(class.contains("is-disabled"));
        assert!(class.contains("is-loading"));
        assert!(class.contains("btn-block"));

        let idle = button_class(
            ThemeMode::Light,
            ButtonVariant::Primary,
            ButtonSize::Md,
            ButtonState::default(),
        );
        assert!(!idle.contains("is-disabled"));
        assert!(!idle.contains("is-loading"));
        assert!(!idle.contains("btn-block"));
    }

    #[test]
    fn theme_token_always_appears_once() {
        let class = card_class(ThemeMode::Dark, CardVariant::Elevated, CardPadding::Lg);
        assert_eq!(class.matches("theme-dark").count(), 1);
        assert!(!class.contains("theme-light"));
    }

    #[test]
    fn highlighted_pricing_card_gets_the_emphasis_token() {
        let plain = pricing_card_class(ThemeMode::Light, false);
        let emphasized = pricing_card_class(ThemeMode::Light, true);
        assert!(!plain.contains("pricing-card-highlighted"));
        assert!(emphasized.contains("pricing-card-highlighted"));
    }

    #[test]
    fn invalid_input_gets_the_invalid_token() {
        assert!(input_class(ThemeMode::Light, true, false).contains("is-invalid"));
        assert!(!input_class(ThemeMode::Light, false, false).contains("is-invalid"));
    }
}
