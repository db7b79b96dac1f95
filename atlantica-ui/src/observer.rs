// SPDX-License-Identifier: MIT OR Apache-2.0

//! OS color-scheme observation.
//!
//! The theme controller never reads the media query directly; it goes through
//! [`ColorSchemeSource`] so tests can script preference changes without a
//! real OS signal.

use atlantica_types::ThemeMode;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryList;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Where the page learns the OS light/dark preference.
pub trait ColorSchemeSource {
    /// The preference right now, used once to seed the theme.
    fn current(&self) -> ThemeMode;

    /// Register for preference changes. The registration lives as long as the
    /// returned guard; dropping it unhooks the callback.
    fn subscribe(&self, on_change: Box<dyn FnMut(ThemeMode)>) -> SchemeSubscription;
}

/// Guard for an active preference subscription.
///
/// Holds whatever keeps the underlying callback alive and detaches it on
/// drop, so a subscription can never outlive the component that created it.
pub struct SchemeSubscription {
    _cleanup: Option<Box<dyn std::any::Any>>,
}

struct MediaQueryRegistration {
    query: MediaQueryList,
    closure: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl Drop for MediaQueryRegistration {
    fn drop(&mut self) {
        let _ = self.query.remove_event_listener_with_callback(
            "change",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

/// Production source backed by `window.matchMedia`.
#[derive(Clone, Copy, Default)]
pub struct MediaQuerySource;

impl MediaQuerySource {
    fn query() -> Option<MediaQueryList> {
        web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
    }
}

impl ColorSchemeSource for MediaQuerySource {
    fn current(&self) -> ThemeMode {
        // No matchMedia support reads as light; same fallback the previous
        // generation of the sites shipped with.
        Self::query()
            .map(|q| ThemeMode::from_prefers_dark(q.matches()))
            .unwrap_or(ThemeMode::Light)
    }

    fn subscribe(&self, mut on_change: Box<dyn FnMut(ThemeMode)>) -> SchemeSubscription {
        let Some(query) = Self::query() else {
            return SchemeSubscription { _cleanup: None };
        };

        let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            on_change(ThemeMode::from_prefers_dark(event.matches()));
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);

        if let Err(e) =
            query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to observe color-scheme changes: {e:?}");
        }

        SchemeSubscription {
            _cleanup: Some(Box::new(MediaQueryRegistration { query, closure })),
        }
    }
}

/// Scriptable source for tests: seed a preference, then emit changes.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    state: Rc<ScriptedState>,
}

#[derive(Default)]
struct ScriptedState {
    current: RefCell<Option<ThemeMode>>,
    listener: RefCell<Option<Box<dyn FnMut(ThemeMode)>>>,
}

impl ScriptedSource {
    pub fn with_preference(mode: ThemeMode) -> Self {
        let source = Self::default();
        *source.state.current.borrow_mut() = Some(mode);
        source
    }

    /// Simulate an OS preference change notification.
    pub fn emit(&self, mode: ThemeMode) {
        *self.state.current.borrow_mut() = Some(mode);
        if let Some(listener) = self.state.listener.borrow_mut().as_mut() {
            listener(mode);
        }
    }
}

struct ScriptedRegistration {
    state: Rc<ScriptedState>,
}

impl Drop for ScriptedRegistration {
    fn drop(&mut self) {
        self.state.listener.borrow_mut().take();
    }
}

impl ColorSchemeSource for ScriptedSource {
    fn current(&self) -> ThemeMode {
        (*self.state.current.borrow()).unwrap_or(ThemeMode::Light)
    }

    fn subscribe(&self, on_change: Box<dyn FnMut(ThemeMode)>) -> SchemeSubscription {
        *self.state.listener.borrow_mut() = Some(on_change);
        SchemeSubscription {
            _cleanup: Some(Box::new(ScriptedRegistration {
                state: Rc::clone(&self.state),
            })),
        }
    }
}
