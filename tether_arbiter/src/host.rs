// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side seams: what the arbiter needs from the sheet and the list.
//!
//! Implement these on your toolkit's sheet behavior and list state and hand them
//! to an adapter. Both are single-threaded; no `Send`/`Sync` bounds are required.

use crate::types::ScrollPosition;

/// The outer draggable container.
pub trait DragTarget {
    /// Enable or disable dragging the container.
    ///
    /// Must be idempotent: calling it twice with the same value has the same
    /// effect as calling it once.
    fn set_draggable(&mut self, enabled: bool);
}

/// The inner scrollable list.
pub trait ScrollSource {
    /// Snapshot of the list's current scroll state.
    fn scroll_position(&self) -> ScrollPosition;
}

impl<T: DragTarget + ?Sized> DragTarget for &mut T {
    fn set_draggable(&mut self, enabled: bool) {
        (**self).set_draggable(enabled);
    }
}

impl<S: ScrollSource + ?Sized> ScrollSource for &S {
    fn scroll_position(&self) -> ScrollPosition {
        (**self).scroll_position()
    }
}

/// A fixed snapshot is a valid source, mostly useful in tests.
impl ScrollSource for ScrollPosition {
    fn scroll_position(&self) -> ScrollPosition {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Flag {
        value: Option<bool>,
        calls: u32,
    }

    impl DragTarget for Flag {
        fn set_draggable(&mut self, enabled: bool) {
            self.value = Some(enabled);
            self.calls += 1;
        }
    }

    #[test]
    fn redundant_writes_are_observably_equal() {
        let mut once = Flag::default();
        once.set_draggable(true);
        let mut twice = Flag::default();
        twice.set_draggable(true);
        twice.set_draggable(true);
        assert_eq!(once.value, twice.value);
        assert_eq!(twice.calls, 2);
    }

    #[test]
    fn references_forward() {
        fn disable<T: DragTarget>(mut target: T) {
            target.set_draggable(false);
        }
        fn read<S: ScrollSource>(source: S) -> ScrollPosition {
            source.scroll_position()
        }

        let mut flag = Flag::default();
        disable(&mut flag);
        assert_eq!(flag.value, Some(false));

        let pos = ScrollPosition::new(4, 2, true);
        assert_eq!(read(&pos), pos);
    }
}
