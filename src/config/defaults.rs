// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Compact-width breakpoint and scroll thresholds
//! - **Notifications**: Toast entrance/display/exit timing
//! - **Motion**: Typing speed, counter cadence, smooth-scroll duration
//! - **Visibility**: Intersection thresholds for reveal/counter/lazy triggers

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width at or below which the navbar collapses to a hamburger menu
/// (in logical pixels). Every width-dependent branch shares this constant.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Scroll offset beyond which the header gains its elevated (shadow) style.
pub const HEADER_ELEVATION_OFFSET: f32 = 50.0;

/// Scroll offset beyond which the scroll-to-top control is shown.
pub const SCROLL_TOP_VISIBLE_OFFSET: f32 = 300.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay before a freshly inserted toast becomes visible (in milliseconds).
/// Gives the entrance transition a hidden start state.
pub const DEFAULT_NOTIFICATION_SHOW_DELAY_MS: u64 = 100;

/// How long a toast stays visible before auto-dismissing (in milliseconds).
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u64 = 5_000;

/// Minimum configurable display duration (in milliseconds).
pub const MIN_NOTIFICATION_DISPLAY_MS: u64 = 1_000;

/// Maximum configurable display duration (in milliseconds).
pub const MAX_NOTIFICATION_DISPLAY_MS: u64 = 30_000;

/// Exit transition length before a dismissed toast is removed (in milliseconds).
pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 300;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Interval between revealed characters in the hero typing effect (in milliseconds).
pub const DEFAULT_TYPING_SPEED_MS: u64 = 75;

/// Duration of a smooth scroll to an anchor or back to the top (in milliseconds).
pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 400;

/// Fallback counter animation duration when a stat does not specify one
/// (in milliseconds).
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2_000;

/// Minimum interval between scroll-driven visibility recomputations
/// (in milliseconds).
pub const SCROLL_THROTTLE_MS: u64 = 100;

/// Cadence of the shared animation tick subscription (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Visibility Defaults
// ==========================================================================

/// Fraction of a section that must intersect the viewport before it is
/// revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Bottom margin subtracted from the viewport when testing reveals
/// (in logical pixels), so sections reveal slightly before fully entering.
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// Fraction of a stats row that must intersect before counters start.
pub const COUNTER_THRESHOLD: f32 = 0.5;
