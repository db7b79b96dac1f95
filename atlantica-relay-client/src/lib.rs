/*
 * Copyright 2025 Atlantica Advisory Group
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Client for the third-party mail relay behind the site contact and
//! newsletter forms.
//!
//! Works on WASM (browser) and native targets via [`reqwest`]. The relay
//! contract is a single JSON `POST`; delivery is acknowledged with
//! `{"success": true}` and anything else is a rejection.
//!
//! # Example
//!
//! ```no_run
//! use atlantica_relay_client::{RelayClient, Submission};
//!
//! # async fn example() -> Result<(), atlantica_relay_client::RelayError> {
//! let client = RelayClient::new("https://relay.example.com/submit", "key-123");
//! client
//!     .submit(Submission {
//!         subject: "Newsletter signup".into(),
//!         from_name: "Atlantica Funding".into(),
//!         email: "visitor@example.com".into(),
//!         message: "Please add me to the list.".into(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use error::RelayError;

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// One form submission, as the relay expects it minus the access key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub subject: String,
    pub from_name: String,
    pub email: String,
    pub message: String,
}

/// Wire body: the submission plus the account's access key.
#[derive(Debug, Serialize)]
struct RelayBody<'a> {
    access_key: &'a str,
    #[serde(flatten)]
    submission: &'a Submission,
}

/// Relay acknowledgement.
#[derive(Debug, Deserialize)]
struct RelayAck {
    success: bool,
}

/// A typed client for the mail-relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    endpoint: String,
    access_key: String,
    http: Client,
}

impl RelayClient {
    /// Create a client for the given relay endpoint and account access key.
    pub fn new(endpoint: &str, access_key: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            access_key: access_key.to_string(),
            http: Client::new(),
        }
    }

    /// Submit one form. Success means the relay acknowledged delivery;
    /// every other outcome is a [`RelayError`].
    pub async fn submit(&self, submission: Submission) -> Result<(), RelayError> {
        let body = RelayBody {
            access_key: &self.access_key,
            submission: &submission,
        };
        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            log::warn!("relay returned status {status}");
            return Err(RelayError::Rejected { status });
        }

        let ack: RelayAck = response.json().await?;
        if ack.success {
            Ok(())
        } else {
            log::warn!("relay acknowledged with success=false");
            Err(RelayError::Rejected { status })
        }
    }
}
