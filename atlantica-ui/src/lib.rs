// SPDX-License-Identifier: MIT OR Apache-2.0

//! atlantica-ui library root.
//!
//! The shared component package behind the Atlantica marketing sites: theme
//! and locale controllers, the visual primitives, the scheduling modal, the
//! consent banner, and the newsletter form. Re-exports public modules so that
//! integration tests (under `tests/`) can import components.

pub mod components;
pub mod config;
pub mod consent;
pub mod observer;
pub mod theme;

pub use atlantica_tokens::{ButtonSize, ButtonState, ButtonVariant, CardPadding, CardVariant};
pub use atlantica_types::{Locale, ThemeMode};
