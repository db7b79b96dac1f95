// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display locale for the bilingual pages.
//!
//! Only the institutional and legal pages are bilingual. The locale never
//! tracks the browser language: Portuguese is the launch default and only an
//! explicit visitor action changes it, for that page load only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    En,
    #[default]
    Pt,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Pt];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }

    /// Native-language name, used by the language switch.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Pt => "Português",
        }
    }

    pub fn toggled(&self) -> Locale {
        match self {
            Locale::En => Locale::Pt,
            Locale::Pt => Locale::En,
        }
    }
}
