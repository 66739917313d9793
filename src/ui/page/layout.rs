// SPDX-License-Identifier: MPL-2.0
//! Section geometry and viewport intersection.
//!
//! Sections have fixed design heights, so every section's position in
//! the scrollable is known up front. Scroll-linked behaviors (reveals,
//! counters, lazy loads) compare those positions against the viewport
//! instead of measuring widgets.

use crate::config::defaults;
use crate::content::{Page, SectionBody, SectionId};
use crate::ui::design_tokens::sizing;

/// Position of one section inside the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    pub id: SectionId,
    /// Offset of the section's top edge from the top of the content.
    pub top: f32,
    pub height: f32,
}

/// Design height of a section, by body kind.
pub fn section_height(body: &SectionBody) -> f32 {
    match body {
        SectionBody::Prose(_) => sizing::PROSE_SECTION_HEIGHT,
        SectionBody::Stats(_) => sizing::STATS_SECTION_HEIGHT,
        SectionBody::Gallery(_) => sizing::GALLERY_SECTION_HEIGHT,
        SectionBody::Contact => sizing::CONTACT_SECTION_HEIGHT,
    }
}

/// Computes the position of every section, hero first.
pub fn section_layouts(page: &Page) -> Vec<SectionLayout> {
    let mut top = sizing::HERO_HEIGHT;
    page.sections
        .iter()
        .map(|section| {
            let height = section_height(&section.body);
            let layout = SectionLayout {
                id: section.id,
                top,
                height,
            };
            top += height;
            layout
        })
        .collect()
}

/// Scroll offset that puts the section's top edge at the top of the
/// viewport, just below the fixed header.
pub fn scroll_target(layouts: &[SectionLayout], id: SectionId) -> Option<f32> {
    layouts
        .iter()
        .find(|layout| layout.id == id)
        .map(|layout| layout.top)
}

/// Fraction of the element visible in the viewport, in `0.0..=1.0`.
pub fn visible_ratio(top: f32, height: f32, scroll_offset: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let viewport_bottom = scroll_offset + viewport_height;
    let bottom = top + height;
    let overlap = bottom.min(viewport_bottom) - top.max(scroll_offset);
    (overlap / height).clamp(0.0, 1.0)
}

/// Whether a section has scrolled far enough into view to fade in.
///
/// The viewport bottom is pulled up by a margin so sections reveal a
/// little after they enter, not at the very first pixel.
pub fn is_revealed(layout: SectionLayout, scroll_offset: f32, viewport_height: f32) -> bool {
    let effective_height = (viewport_height - defaults::REVEAL_BOTTOM_MARGIN).max(0.0);
    visible_ratio(layout.top, layout.height, scroll_offset, effective_height)
        >= defaults::REVEAL_THRESHOLD
}

/// Whether the stats section is visible enough to start its counters.
pub fn triggers_counters(layout: SectionLayout, scroll_offset: f32, viewport_height: f32) -> bool {
    visible_ratio(layout.top, layout.height, scroll_offset, viewport_height)
        >= defaults::COUNTER_THRESHOLD
}

/// Whether the gallery intersects the viewport at all, which starts
/// its image loads.
pub fn intersects_viewport(
    layout: SectionLayout,
    scroll_offset: f32,
    viewport_height: f32,
) -> bool {
    visible_ratio(layout.top, layout.height, scroll_offset, viewport_height) > 0.0
}
