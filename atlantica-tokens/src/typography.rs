// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typography scale.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypographyTokens {
    pub font_sans: &'static str,
    pub font_display: &'static str,
    /// (token suffix, size) pairs, smallest first.
    pub sizes: &'static [(&'static str, &'static str)],
    pub weight_regular: u16,
    pub weight_medium: u16,
    pub weight_semibold: u16,
    pub weight_bold: u16,
    pub tracking_tight: &'static str,
    pub tracking_wide: &'static str,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_sans: "'Inter', 'Helvetica Neue', Arial, sans-serif",
            font_display: "'Fraunces', Georgia, serif",
            sizes: &[
                ("xs", "0.75rem"),
                ("sm", "0.875rem"),
                ("base", "1rem"),
                ("lg", "1.125rem"),
                ("xl", "1.25rem"),
                ("2xl", "1.5rem"),
                ("3xl", "1.875rem"),
                ("4xl", "2.25rem"),
                ("5xl", "3rem"),
            ],
            weight_regular: 400,
            weight_medium: 500,
            weight_semibold: 600,
            weight_bold: 700,
            tracking_tight: "-0.02em",
            tracking_wide: "0.08em",
        }
    }
}

impl TypographyTokens {
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = vec![
            ("font-sans".to_string(), self.font_sans.to_string()),
            ("font-display".to_string(), self.font_display.to_string()),
            (
                "weight-regular".to_string(),
                self.weight_regular.to_string(),
            ),
            ("weight-medium".to_string(), self.weight_medium.to_string()),
            (
                "weight-semibold".to_string(),
                self.weight_semibold.to_string(),
            ),
            ("weight-bold".to_string(), self.weight_bold.to_string()),
            (
                "tracking-tight".to_string(),
                self.tracking_tight.to_string(),
            ),
            ("tracking-wide".to_string(), self.tracking_wide.to_string()),
        ];
        for (suffix, size) in self.sizes {
            out.push((format!("text-{suffix}"), size.to_string()));
        }
        out
    }
}
