// SPDX-License-Identifier: MPL-2.0
//! Deferred loading of gallery images.

use iced::widget::image::Handle;

/// Loading lifecycle of one gallery image.
///
/// An image stays [`LazyImage::NotLoaded`] until its slot scrolls into
/// view, loads exactly once, and keeps whatever outcome it reached. A
/// failed load degrades to a persistent placeholder instead of retrying.
#[derive(Debug, Clone, Default)]
pub enum LazyImage {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Handle),
    Failed,
}

impl LazyImage {
    /// Requests the load. Returns `true` the first time, when the
    /// caller should spawn the read; later calls are no-ops.
    pub fn request(&mut self) -> bool {
        if matches!(self, Self::NotLoaded) {
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    /// Records the outcome of a spawned load. Outcomes arriving in any
    /// other state are ignored.
    pub fn resolve(&mut self, handle: Option<Handle>) {
        if matches!(self, Self::Loading) {
            *self = match handle {
                Some(handle) => Self::Loaded(handle),
                None => Self::Failed,
            };
        }
    }

    /// The decoded image, if the load succeeded.
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            Self::Loaded(handle) => Some(handle),
            _ => None,
        }
    }
}
