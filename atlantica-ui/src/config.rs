// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-site runtime configuration.
//!
//! Deployments freeze a `window.__SITE_CONFIG` object into the page; the app
//! reads it once at startup. Which fields a site needs depends on what it
//! embeds: forms need the relay pair, booking pages need the scheduler URL.

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(rename = "relayEndpoint")]
    #[serde(default)]
    pub relay_endpoint: Option<String>,
    #[serde(rename = "relayAccessKey")]
    #[serde(default)]
    pub relay_access_key: Option<String>,
    #[serde(rename = "schedulerUrl")]
    #[serde(default)]
    pub scheduler_url: Option<String>,
}

pub fn site_config() -> Result<SiteConfig, String> {
    let win = window().expect("window");
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__SITE_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__SITE_CONFIG missing)".to_string());
    }
    from_js_value::<SiteConfig>(config).map_err(|e| format!("Failed to parse __SITE_CONFIG: {e:?}"))
}

/// The relay endpoint/access-key pair, required by sites that ship a form.
pub fn relay_settings() -> Result<(String, String), String> {
    let config = site_config()?;
    match (config.relay_endpoint, config.relay_access_key) {
        (Some(endpoint), Some(key)) => Ok((endpoint, key)),
        _ => Err("Relay settings missing from __SITE_CONFIG".to_string()),
    }
}

/// Booking page URL for the scheduling modal.
pub fn scheduler_url() -> Result<String, String> {
    site_config()?
        .scheduler_url
        .ok_or_else(|| "Scheduler URL missing from __SITE_CONFIG".to_string())
}
