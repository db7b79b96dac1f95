// SPDX-License-Identifier: MIT OR Apache-2.0

//! Brand color scales.
//!
//! Three scales cover the whole visual language: `azores` (the teal brand
//! accent), `basalt` (dark neutrals), `salt` (near-whites). Numbered steps
//! follow the usual 50–900 tint/shade convention so designers and CSS agree
//! on names.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScale {
    pub name: &'static str,
    pub steps: &'static [(u16, &'static str)],
}

impl ColorScale {
    pub fn step(&self, step: u16) -> Option<&'static str> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, value)| *value)
    }
}

/// Brand accent.
pub const AZORES: ColorScale = ColorScale {
    name: "azores",
    steps: &[
        (50, "#eefbfa"),
        (100, "#d6f5f2"),
        (200, "#b0eae6"),
        (300, "#7cd9d5"),
        (400, "#43bfbd"),
        (500, "#27a4a4"),
        (600, "#1d8387"),
        (700, "#1b696e"),
        (800, "#1a5458"),
        (900, "#1a464b"),
    ],
};

/// Dark neutrals, page backgrounds in dark mode.
pub const BASALT: ColorScale = ColorScale {
    name: "basalt",
    steps: &[
        (50, "#f4f6f7"),
        (100, "#e3e7ea"),
        (200, "#cad2d7"),
        (300, "#a5b2bb"),
        (400, "#798a97"),
        (500, "#5e6f7c"),
        (600, "#515e69"),
        (700, "#464f58"),
        (800, "#3e454c"),
        (900, "#14181d"),
    ],
};

/// Near-whites, page backgrounds in light mode.
pub const SALT: ColorScale = ColorScale {
    name: "salt",
    steps: &[
        (50, "#ffffff"),
        (100, "#fcfdfd"),
        (200, "#f7f9fa"),
        (300, "#f1f4f6"),
        (400, "#e9eef1"),
        (500, "#dfe6eb"),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticColors {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            success: "#15803d",
            error: "#b91c1c",
            warning: "#b45309",
            info: "#1d4ed8",
        }
    }
}

impl SemanticColors {
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("color-success", self.success),
            ("color-error", self.error),
            ("color-warning", self.warning),
            ("color-info", self.info),
        ]
    }
}
