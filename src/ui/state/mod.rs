// SPDX-License-Identifier: MPL-2.0
//! Reusable state management for page behaviors.
//!
//! Each behavior owns its state here instead of sharing module-level
//! globals: scrolling owns its offset and animation, the menu owns its
//! focus trap, every counter owns its own start time.

pub mod counter;
pub mod focus_trap;
pub mod lazy_image;
pub mod scroll;
pub mod throttle;
pub mod typewriter;

pub use counter::Counter;
pub use focus_trap::{FocusTrap, TabDirection, TabOutcome};
pub use lazy_image::LazyImage;
pub use scroll::{ScrollAnimation, ScrollState};
pub use throttle::Throttle;
pub use typewriter::Typewriter;
