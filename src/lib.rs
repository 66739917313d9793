// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a single-window brochure application built with the
//! Iced GUI framework.
//!
//! It renders an informational page with animated section reveals,
//! statistics counters, lazy-loaded gallery images, a validating
//! contact form, toast notifications, and a compact navigation menu
//! with keyboard focus containment.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod ui;
pub mod validation;
