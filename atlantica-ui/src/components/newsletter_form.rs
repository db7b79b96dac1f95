/*
 * Copyright 2025 Atlantica Advisory Group
 * Licensed under MIT OR Apache-2.0
 */

//! Newsletter/contact form backed by the mail relay.
//!
//! The submission and the status-banner timer both run inside a task spawned
//! on this component's scope, so neither can fire after unmount.

use crate::components::button::Button;
use crate::components::input::Input;
use crate::theme::use_theme_mode;
use atlantica_relay_client::{RelayClient, Submission};
use atlantica_tokens::{ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// How long a success/error banner stays up.
const STATUS_CLEAR_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

#[component]
pub fn NewsletterForm(
    /// Relay endpoint URL.
    #[props(into)]
    endpoint: String,
    /// Relay account access key.
    #[props(into)]
    access_key: String,
    /// Subject line stamped on every submission from this form.
    #[props(into)]
    subject: String,
    /// Sender name the relay shows, usually the site name.
    #[props(into)]
    from_name: String,
    #[props(into, default = String::from("Subscribe"))] submit_label: String,
) -> Element {
    let theme = use_theme_mode();
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| SubmitStatus::Idle);

    let onsubmit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if *status.read() == SubmitStatus::Sending {
            return;
        }

        let client = RelayClient::new(&endpoint, &access_key);
        let submission = Submission {
            subject: subject.clone(),
            from_name: from_name.clone(),
            email: email.read().clone(),
            message: message.read().clone(),
        };

        spawn(async move {
            status.set(SubmitStatus::Sending);
            let outcome = client.submit(submission).await;
            match outcome {
                Ok(()) => status.set(SubmitStatus::Sent),
                Err(e) => {
                    log::warn!("newsletter submission failed: {e}");
                    status.set(SubmitStatus::Failed);
                }
            }
            TimeoutFuture::new(STATUS_CLEAR_MS).await;
            status.set(SubmitStatus::Idle);
        });
    };

    let sending = *status.read() == SubmitStatus::Sending;
    let sent = *status.read() == SubmitStatus::Sent;
    let failed = *status.read() == SubmitStatus::Failed;

    rsx! {
        form { class: "newsletter-form {theme.as_class()}", onsubmit: onsubmit,
            Input {
                label: Some(String::from("Email")),
                input_type: String::from("email"),
                name: Some(String::from("email")),
                placeholder: Some(String::from("you@example.com")),
                required: true,
                full_width: true,
                value: Some(email.read().clone()),
                oninput: move |evt: Event<FormData>| email.set(evt.value()),
            }
            Input {
                label: Some(String::from("Message")),
                name: Some(String::from("message")),
                placeholder: Some(String::from("What would you like to hear about?")),
                full_width: true,
                value: Some(message.read().clone()),
                oninput: move |evt: Event<FormData>| message.set(evt.value()),
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Md,
                loading: sending,
                full_width: true,
                "{submit_label}"
            }
            if sent {
                p { class: "form-status form-status-success", role: "status",
                    "Thank you, you are on the list."
                }
            }
            if failed {
                p { class: "form-status form-status-error", role: "status",
                    "Something went wrong. Please try again."
                }
            }
        }
    }
}
