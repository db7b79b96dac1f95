// SPDX-License-Identifier: MIT OR Apache-2.0

//! Theme and locale controllers.
//!
//! Each page provides both contexts at its root; primitives read them and
//! recompute their class lists synchronously, so a toggle never flashes.
//! Neither choice is persisted: a reload starts from the OS preference and
//! the Portuguese default again.

use crate::observer::ColorSchemeSource;
use atlantica_types::{Locale, ThemeMode, ThemePreference};
use dioxus::prelude::*;
use std::rc::Rc;

/// Theme context: the per-page preference state machine.
pub type ThemeCtx = Signal<ThemePreference>;

/// Locale context, present on bilingual pages only.
pub type LocaleCtx = Signal<Locale>;

/// Provide the theme context for this page, seeded from `source` and kept in
/// sync with OS preference changes for as long as the calling component
/// lives. Call once at the app root.
pub fn use_theme_provider<S: ColorSchemeSource + 'static>(source: S) -> ThemeCtx {
    let seed = source.current();
    let mut pref = use_signal(move || ThemePreference::seeded(seed));
    use_context_provider(|| pref);

    // The subscription guard lives in hook state; unmounting the root drops
    // it and detaches the listener.
    use_hook(move || {
        Rc::new(source.subscribe(Box::new(move |mode| {
            pref.write().system_changed(mode);
        })))
    });

    pref
}

/// The mode to render with right now. Components without a provider (bare
/// test mounts) fall back to light.
pub fn use_theme_mode() -> ThemeMode {
    try_consume_context::<ThemeCtx>()
        .map(|pref| pref.read().resolved())
        .unwrap_or(ThemeMode::Light)
}

/// Provide the locale context for a bilingual page. Portuguese until the
/// visitor says otherwise.
pub fn use_locale_provider() -> LocaleCtx {
    let locale = use_signal(Locale::default);
    use_context_provider(|| locale);
    locale
}

/// Current locale; monolingual pages and bare mounts read Portuguese.
pub fn use_locale() -> Locale {
    try_consume_context::<LocaleCtx>()
        .map(|locale| *locale.read())
        .unwrap_or_default()
}
