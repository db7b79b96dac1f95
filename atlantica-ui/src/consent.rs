// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cookie-consent flag.
//!
//! One boolean under one fixed `localStorage` key. Absence means "not yet
//! consented"; the application writes the flag once on accept and never
//! clears it.

const CONSENT_KEY: &str = "atl_cookie_consent";

/// Read the persisted consent flag. Any storage failure reads as "no
/// consent yet".
pub fn load_consent() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONSENT_KEY).ok().flatten())
        .is_some()
}

/// Persist the consent flag.
pub fn save_consent() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(CONSENT_KEY, "true");
    }
}

/// Test helper: return storage to the first-visit state.
#[doc(hidden)]
pub fn clear_consent_for_tests() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(CONSENT_KEY);
    }
}
