// SPDX-License-Identifier: MPL-2.0
//! Keyboard focus containment for the compact menu panel.
//!
//! While the panel is open, Tab cycles through the panel's entries and
//! wraps at both ends instead of escaping into the rest of the window.
//! A trap is created when the panel opens and dropped when it closes,
//! so every open/close cycle starts from the first entry again.

/// Direction of a Tab key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    /// Plain Tab.
    Forward,
    /// Shift+Tab.
    Backward,
}

/// Result of feeding a Tab press to the trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome<T> {
    /// Focus was at a boundary; the trap consumed the key and wrapped
    /// focus to the entry. The caller must not run the default move.
    Wrapped(T),
    /// Focus was inside the cycle; the caller performs the default
    /// one-step move via [`FocusTrap::step`].
    PassThrough,
}

/// Focus cycle over the entries of an open menu panel.
#[derive(Debug, Clone)]
pub struct FocusTrap<T> {
    entries: Vec<T>,
    focused: Option<usize>,
}

impl<T: Copy + PartialEq> FocusTrap<T> {
    /// Creates a trap for a freshly opened panel, with focus on the
    /// first entry. An empty entry list yields an inert trap whose
    /// operations are all no-ops.
    pub fn open(entries: Vec<T>) -> Self {
        let focused = if entries.is_empty() { None } else { Some(0) };
        Self { entries, focused }
    }

    /// The currently focused entry, if any.
    pub fn focused(&self) -> Option<T> {
        self.focused.map(|index| self.entries[index])
    }

    /// Handles a Tab press at the boundaries of the cycle.
    ///
    /// Wraps from the last entry to the first on [`TabDirection::Forward`]
    /// and from the first to the last on [`TabDirection::Backward`]. Any
    /// other position returns [`TabOutcome::PassThrough`] and leaves the
    /// move to the caller.
    pub fn handle_tab(&mut self, direction: TabDirection) -> TabOutcome<T> {
        let Some(focused) = self.focused else {
            return TabOutcome::PassThrough;
        };
        let last = self.entries.len() - 1;

        match direction {
            TabDirection::Forward if focused == last => {
                self.focused = Some(0);
                TabOutcome::Wrapped(self.entries[0])
            }
            TabDirection::Backward if focused == 0 => {
                self.focused = Some(last);
                TabOutcome::Wrapped(self.entries[last])
            }
            _ => TabOutcome::PassThrough,
        }
    }

    /// Performs the default one-step move after a
    /// [`TabOutcome::PassThrough`].
    pub fn step(&mut self, direction: TabDirection) {
        let Some(focused) = self.focused else {
            return;
        };
        let last = self.entries.len() - 1;
        self.focused = Some(match direction {
            TabDirection::Forward => focused.saturating_add(1).min(last),
            TabDirection::Backward => focused.saturating_sub(1),
        });
    }

    /// Moves focus directly to `entry` if it belongs to the cycle.
    pub fn focus(&mut self, entry: T) {
        if let Some(index) = self.entries.iter().position(|e| *e == entry) {
            self.focused = Some(index);
        }
    }
}
