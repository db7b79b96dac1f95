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

//! Error types for the relay client.

use thiserror::Error;

/// Errors returned by [`RelayClient`](crate::RelayClient) methods.
///
/// The site forms collapse every variant into one user-visible failure state;
/// the split exists for logging.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The relay answered but did not accept the submission
    /// (`success: false` or a non-2xx status).
    #[error("Relay rejected the submission (status {status})")]
    Rejected { status: u16 },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
