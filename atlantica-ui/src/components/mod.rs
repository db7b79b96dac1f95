// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod button;
pub mod card;
pub mod config_error;
pub mod consent_banner;
pub mod estimator_panel;
pub mod footer;
pub mod header;
pub mod icons;
pub mod input;
pub mod locale_toggle;
pub mod newsletter_form;
pub mod pricing_card;
pub mod scheduling_modal;
pub mod theme_toggle;
