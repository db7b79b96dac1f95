// SPDX-License-Identifier: MIT OR Apache-2.0

//! wealth-site library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import the app shell and pages. The binary entry-point lives in `main.rs`.

pub mod app;
pub mod content;
pub mod pages;
pub mod routing;
