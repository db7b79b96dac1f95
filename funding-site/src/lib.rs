// SPDX-License-Identifier: MIT OR Apache-2.0

//! funding-site library root.

pub mod app;
pub mod content;
pub mod pages;
pub mod routing;
