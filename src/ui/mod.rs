// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod state;
pub mod styles;
pub mod theming;
