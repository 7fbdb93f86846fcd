// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the arbiter: scroll snapshots, touch intent, states, and writes.
//!
//! ## Overview
//!
//! These types describe what the arbiter reads from the list surface and what it
//! asks the sheet to do. They are consumed by the [`arbiter`](crate::arbiter) and by
//! host adapters.

/// Read-only snapshot of a list's scroll state.
///
/// Recomputed by the list surface on every layout pass. The arbiter reads it and
/// never mutates it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScrollPosition {
    /// Index of the first item intersecting the viewport.
    pub first_visible_index: usize,
    /// Pixels of the first visible item scrolled out above the viewport.
    pub first_visible_offset: u32,
    /// Whether the list content is taller than its viewport at all.
    pub can_scroll: bool,
}

impl ScrollPosition {
    /// The resting position of a list that is scrolled to its first item.
    pub const TOP: Self = Self {
        first_visible_index: 0,
        first_visible_offset: 0,
        can_scroll: false,
    };

    /// Create a snapshot.
    pub const fn new(
        first_visible_index: usize,
        first_visible_offset: u32,
        can_scroll: bool,
    ) -> Self {
        Self {
            first_visible_index,
            first_visible_offset,
            can_scroll,
        }
    }

    /// Returns `true` when the list shows its first item with at most `tolerance`
    /// pixels scrolled away.
    ///
    /// With the default tolerance of `0` only index 0 at offset 0 counts as top.
    pub const fn is_top(&self, tolerance: u32) -> bool {
        self.first_visible_index == 0 && self.first_visible_offset <= tolerance
    }
}

/// Where the active touch sequence started.
///
/// Reset at every press-down on the outer region, then upgraded to [`Inner`](Self::Inner)
/// if the same press also lands in the list.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TouchIntent {
    /// The sequence began outside the list (or no sequence has started yet).
    #[default]
    Outer,
    /// The sequence began inside the list.
    Inner,
}

/// Arbiter state for the active touch sequence.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ArbiterState {
    /// No touch in progress.
    #[default]
    Idle,
    /// The press began on the sheet outside the list.
    OuterOnly,
    /// The press began on the list.
    InnerEngaged,
}

/// A flag write the host must apply to the sheet: `set_draggable(value)`.
///
/// Returned by the [`GestureArbiter`](crate::arbiter::GestureArbiter) operations.
/// Writes are idempotent, so applying a redundant one is harmless.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DragWrite(pub bool);

impl DragWrite {
    /// The value to pass to `set_draggable`.
    pub const fn enabled(self) -> bool {
        self.0
    }
}
