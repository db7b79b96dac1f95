// SPDX-License-Identifier: MIT OR Apache-2.0

//! Light/dark theme state.
//!
//! The resolution rule lives here as a pure state machine so it can be
//! exercised without a browser: the OS preference seeds the theme and keeps
//! driving it until the visitor toggles manually, after which the manual
//! choice wins for the rest of the page's life. Nothing is persisted across
//! reloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Class token applied at the app root; primitives select their palette
    /// through it.
    pub fn as_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> ThemeMode {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

/// Theme resolution state for one page load.
///
/// `system` tracks the OS preference (updated on every media-query change
/// notification); `overridden` is set by the visitor's explicit toggle and,
/// once set, takes precedence over all later system updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    system: ThemeMode,
    overridden: Option<ThemeMode>,
}

impl ThemePreference {
    pub fn seeded(system: ThemeMode) -> Self {
        Self {
            system,
            overridden: None,
        }
    }

    /// The mode the page should render with right now.
    pub fn resolved(&self) -> ThemeMode {
        self.overridden.unwrap_or(self.system)
    }

    /// Apply an OS-level preference-change notification. Ignored for display
    /// purposes while a manual override is in effect.
    pub fn system_changed(&mut self, system: ThemeMode) {
        self.system = system;
    }

    /// Visitor toggled the theme switch: flip whatever is currently shown and
    /// pin it for the rest of the page's life.
    pub fn toggle(&mut self) {
        self.overridden = Some(self.resolved().toggled());
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden.is_some()
    }
}
