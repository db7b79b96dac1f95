// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application route definitions.

use dioxus::prelude::*;

use crate::pages::home::Home;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/404")]
    NotFound {},
}

/// Simple 404 page component.
#[component]
fn NotFound() -> Element {
    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "Page not found" }
            a { href: "/", "Atlantica Grants" }
        }
    }
}
