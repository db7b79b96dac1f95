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

//! The Atlantica design-token package.
//!
//! One canonical token set (color scales, typography, motion) shared by all
//! four sites. Sites merge this set into their own styling configuration via
//! [`TokenSet::extend`] instead of redefining values, so a change here reaches
//! every deployment without per-site edits.
//!
//! [`style_map`] is the other half of the contract: the centralized mapping
//! from `(theme, variant, state)` to class strings that every primitive in
//! `atlantica-ui` renders with.

pub mod color;
pub mod motion;
pub mod style_map;
pub mod typography;

pub use color::{ColorScale, SemanticColors};
pub use motion::MotionTokens;
pub use style_map::{ButtonSize, ButtonState, ButtonVariant, CardPadding, CardVariant};
pub use typography::TypographyTokens;

/// The full token set a site merges into its styling configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSet {
    pub scales: Vec<ColorScale>,
    pub semantic: SemanticColors,
    pub typography: TypographyTokens,
    pub motion: MotionTokens,
}

impl Default for TokenSet {
    fn default() -> Self {
        Self {
            scales: vec![color::AZORES, color::BASALT, color::SALT],
            semantic: SemanticColors::default(),
            typography: TypographyTokens::default(),
            motion: MotionTokens::default(),
        }
    }
}

impl TokenSet {
    /// Merge site-local scales on top of the canonical set. A scale with a
    /// name already present replaces it; new names are appended. Sites extend,
    /// they never fork.
    pub fn extend(mut self, extra: &[ColorScale]) -> Self {
        for scale in extra {
            match self.scales.iter_mut().find(|s| s.name == scale.name) {
                Some(existing) => *existing = scale.clone(),
                None => self.scales.push(scale.clone()),
            }
        }
        self
    }

    pub fn scale(&self, name: &str) -> Option<&ColorScale> {
        self.scales.iter().find(|s| s.name == name)
    }

    /// Emit the set as a `:root` custom-property block. Each site injects
    /// this once at its app root; primitives only ever reference the
    /// variables.
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root{");
        for scale in &self.scales {
            for (step, value) in scale.steps {
                css.push_str(&format!("--{}-{}:{};", scale.name, step, value));
            }
        }
        for (name, value) in self.semantic.entries() {
            css.push_str(&format!("--{name}:{value};"));
        }
        for (name, value) in self.typography.entries() {
            css.push_str(&format!("--{name}:{value};"));
        }
        for (name, value) in self.motion.entries() {
            css.push_str(&format!("--{name}:{value};"));
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_carries_the_three_brand_scales() {
        let tokens = TokenSet::default();
        for name in ["azores", "basalt", "salt"] {
            assert!(tokens.scale(name).is_some(), "missing scale {name}");
        }
    }

    #[test]
    fn extend_replaces_by_name_and_appends_new_scales() {
        let site_scale = ColorScale {
            name: "harvest",
            steps: &[(500, "#d4a017")],
        };
        let azores_override = ColorScale {
            name: "azores",
            steps: &[(500, "#123456")],
        };

        let tokens = TokenSet::default().extend(&[site_scale.clone(), azores_override]);
        assert_eq!(tokens.scale("harvest"), Some(&site_scale));
        assert_eq!(tokens.scale("azores").unwrap().step(500), Some("#123456"));
        // Replacement, not duplication.
        assert_eq!(
            tokens.scales.iter().filter(|s| s.name == "azores").count(),
            1
        );
    }

    #[test]
    fn css_block_contains_every_scale_step_and_semantic_color() {
        let css = TokenSet::default().css_variables();
        assert!(css.starts_with(":root{"));
        assert!(css.ends_with('}'));
        assert!(css.contains("--azores-500:"));
        assert!(css.contains("--basalt-900:"));
        assert!(css.contains("--color-success:"));
        assert!(css.contains("--font-sans:"));
        assert!(css.contains("--duration-base:"));
    }
}
