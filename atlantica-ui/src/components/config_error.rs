/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

/// Full-page surface shown instead of the app when the runtime configuration
/// is missing or malformed.
#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container",
            p { class: "error-message", "{message}" }
            p {
                "Deployment docs: "
                a {
                    href: "https://github.com/atlantica-group/atlantica-web",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "atlantica-group/atlantica-web"
                }
            }
        }
    }
}
