// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List metrics: turning list layout information into [`ScrollPosition`] snapshots.
//!
//! ## Overview
//!
//! Hosts rarely know the full content height of a virtualized list. They do know
//! the viewport and the items laid out in it. [`ListLayout`] captures that per
//! layout pass and derives "can this list scroll at all" from the visible items.
//!
//! [`UniformList`] models a list of fixed-height rows with known length. It is
//! handy for tests, demos, and hosts whose rows really are uniform.

use alloc::vec::Vec;

use crate::host::ScrollSource;
use crate::types::ScrollPosition;

/// Layout of a list after one layout pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListLayout {
    /// Height of the viewport in pixels.
    pub viewport_extent: u32,
    /// Index of the first item intersecting the viewport.
    pub first_visible_index: usize,
    /// Pixels of the first visible item above the viewport.
    pub first_visible_offset: u32,
    /// Full heights of the laid-out items, in order, starting at the first visible one.
    pub visible_item_extents: Vec<u32>,
}

impl ListLayout {
    /// Whether the visible items overflow the viewport.
    ///
    /// Items are summed at their full height, including the part of the first item
    /// scrolled out of view. A viewport filled exactly to its edge reports `false`.
    pub fn can_scroll(&self) -> bool {
        let viewport = u64::from(self.viewport_extent);
        let mut total = 0_u64;
        for &extent in &self.visible_item_extents {
            total += u64::from(extent);
            if total > viewport {
                return true;
            }
        }
        false
    }

    /// Snapshot for the arbiter.
    pub fn scroll_position(&self) -> ScrollPosition {
        ScrollPosition::new(
            self.first_visible_index,
            self.first_visible_offset,
            self.can_scroll(),
        )
    }
}

/// A list of `item_count` rows, each `item_extent` pixels tall, in a fixed viewport.
///
/// ```
/// use tether_arbiter::host::ScrollSource;
/// use tether_arbiter::list::UniformList;
///
/// // 100 rows of 48px in a viewport that fits 10 of them.
/// let mut list = UniformList::new(100, 48, 480);
/// assert!(list.scroll_position().is_top(0));
/// list.scroll_to_item(5);
/// let pos = list.scroll_position();
/// assert_eq!((pos.first_visible_index, pos.first_visible_offset), (5, 0));
/// assert!(pos.can_scroll);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UniformList {
    item_count: usize,
    item_extent: u32,
    viewport_extent: u32,
    scroll: u64,
}

impl UniformList {
    /// Create a list scrolled to its top.
    pub fn new(item_count: usize, item_extent: u32, viewport_extent: u32) -> Self {
        Self {
            item_count,
            item_extent,
            viewport_extent,
            scroll: 0,
        }
    }

    /// Number of rows.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Height of every row.
    pub fn item_extent(&self) -> u32 {
        self.item_extent
    }

    /// Height of the viewport.
    pub fn viewport_extent(&self) -> u32 {
        self.viewport_extent
    }

    /// Height of all rows together.
    pub fn content_extent(&self) -> u64 {
        self.item_count as u64 * u64::from(self.item_extent)
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> u64 {
        self.content_extent()
            .saturating_sub(u64::from(self.viewport_extent))
    }

    /// Current scroll offset in pixels from the top of the content.
    pub fn scroll_offset(&self) -> u64 {
        self.scroll
    }

    /// Whether the content is taller than the viewport.
    pub fn can_scroll(&self) -> bool {
        self.max_scroll() > 0
    }

    /// Scroll to an absolute offset, clamped to the valid range.
    ///
    /// Returns whether the offset changed.
    pub fn scroll_to(&mut self, offset: u64) -> bool {
        let clamped = offset.min(self.max_scroll());
        let changed = clamped != self.scroll;
        self.scroll = clamped;
        changed
    }

    /// Scroll by a signed delta; positive moves content up (towards later rows).
    ///
    /// Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        let target = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(target)
    }

    /// Scroll so that `index` is the first visible row, as far as the range allows.
    pub fn scroll_to_item(&mut self, index: usize) -> bool {
        self.scroll_to(index as u64 * u64::from(self.item_extent))
    }

    /// The rows currently intersecting the viewport.
    pub fn layout(&self) -> ListLayout {
        let (first, offset) = self.first_visible();
        let mut extents = Vec::new();
        if self.item_extent > 0 {
            let needed = u64::from(self.viewport_extent) + u64::from(offset);
            let mut covered = 0_u64;
            let mut index = first;
            while index < self.item_count && covered < needed {
                extents.push(self.item_extent);
                covered += u64::from(self.item_extent);
                index += 1;
            }
        }
        ListLayout {
            viewport_extent: self.viewport_extent,
            first_visible_index: first,
            first_visible_offset: offset,
            visible_item_extents: extents,
        }
    }

    fn first_visible(&self) -> (usize, u32) {
        if self.item_extent == 0 {
            return (0, 0);
        }
        let extent = u64::from(self.item_extent);
        let index = usize::try_from(self.scroll / extent).unwrap_or(usize::MAX);
        // The remainder is smaller than `item_extent`, so it fits.
        let offset = u32::try_from(self.scroll % extent).unwrap_or(0);
        (index, offset)
    }
}

impl ScrollSource for UniformList {
    fn scroll_position(&self) -> ScrollPosition {
        let (index, offset) = self.first_visible();
        ScrollPosition::new(index, offset, self.can_scroll())
    }
}
