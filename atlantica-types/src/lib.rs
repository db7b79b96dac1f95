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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Types shared by every Atlantica site crate and the component package.
//!
//! Everything in here is plain data: no browser APIs, no rendering. That
//! keeps this crate testable with a bare `cargo test` on any host.

pub mod estimator;
pub mod format;
pub mod locale;
pub mod theme;

pub use estimator::{estimate, EstimateInput, ReferenceCountry, TaxEstimate};
pub use format::format_eur;
pub use locale::Locale;
pub use theme::{ThemeMode, ThemePreference};
