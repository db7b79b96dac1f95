// SPDX-License-Identifier: MIT OR Apache-2.0

//! grants-site library root.

pub mod app;
pub mod content;
pub mod pages;
pub mod routing;
