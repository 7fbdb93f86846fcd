// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture arbiter implementation.
//!
//! ## Overview
//!
//! Decides whether the outer sheet may currently be dragged while a nested list
//! is on screen. The arbiter observes three kinds of events and answers each with
//! an optional [`DragWrite`]:
//!
//! - press-down on the sheet ([`GestureArbiter::outer_press_down`]),
//! - press-down on the list ([`GestureArbiter::inner_press_down`]),
//! - list scroll changes ([`GestureArbiter::scroll_position_changed`]).
//!
//! A settle timer restores the default after scrolling pauses; drive it with
//! [`GestureArbiter::poll`].
//!
//! ## Decision rules
//!
//! - A press on the sheet after a list-initiated sequence re-enables the sheet and
//!   drops that sequence's pending settle.
//! - A press on the list blocks the sheet when the list is scrollable and away
//!   from its top edge. It also arms the settle, so a finger held still does not
//!   keep the sheet locked after release.
//! - A scroll change during a list-initiated sequence sets the flag to "list is at
//!   top", then re-enables the sheet after the settle delay. Each change restarts
//!   the delay.
//! - A scroll change during a sheet-initiated sequence re-enables the sheet at once.
//! - Release does not touch the flag. A pending settle still fires afterwards.
//!
//! ## See Also
//!
//! [`settle`](crate::settle) for the timer semantics.

use core::time::Duration;

use crate::config::ArbiterConfig;
use crate::settle::SettleTimer;
use crate::types::{ArbiterState, DragWrite, ScrollPosition, TouchIntent};

/// Single decision authority for the sheet's drag flag.
///
/// Pure: it never talks to a host. Apply every returned [`DragWrite`] to the sheet,
/// or let the `SheetAdapter` in `tether_responder` do it.
///
/// ## Example
///
/// ```
/// use core::time::Duration;
/// use tether_arbiter::arbiter::GestureArbiter;
/// use tether_arbiter::types::{DragWrite, ScrollPosition};
///
/// let ms = Duration::from_millis;
/// let mut arbiter = GestureArbiter::default();
///
/// // Finger lands on a list scrolled to item 5.
/// assert_eq!(arbiter.outer_press_down(), None);
/// let w = arbiter.inner_press_down(ScrollPosition::new(5, 0, true), ms(0));
/// assert_eq!(w, Some(DragWrite(false)));
///
/// // The list scrolls; the sheet stays locked until scrolling pauses.
/// arbiter.scroll_position_changed(ScrollPosition::new(4, 12, true), ms(20));
/// assert_eq!(arbiter.poll(ms(100)), None);
/// assert_eq!(arbiter.poll(ms(120)), Some(DragWrite(true)));
/// ```
#[derive(Clone, Debug)]
pub struct GestureArbiter {
    config: ArbiterConfig,
    state: ArbiterState,
    intent: TouchIntent,
    drag_allowed: bool,
    settle: SettleTimer,
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new(ArbiterConfig::default())
    }
}

impl GestureArbiter {
    /// Create an arbiter at rest: idle, sheet draggable.
    pub fn new(config: ArbiterConfig) -> Self {
        Self {
            config,
            state: ArbiterState::Idle,
            intent: TouchIntent::Outer,
            drag_allowed: true,
            settle: SettleTimer::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    /// Last value written to the drag flag.
    pub fn drag_allowed(&self) -> bool {
        self.drag_allowed
    }

    /// Current touch-sequence state.
    pub fn state(&self) -> ArbiterState {
        self.state
    }

    /// Where the current (or most recent) touch sequence began.
    pub fn intent(&self) -> TouchIntent {
        self.intent
    }

    /// Deadline of the pending settle, if one is armed.
    pub fn settle_deadline(&self) -> Option<Duration> {
        self.settle.deadline()
    }

    /// A new touch sequence began somewhere on the sheet, the list included.
    ///
    /// Clears the touch intent. If the previous sequence began on the list, its
    /// pending settle is dropped and the sheet is made draggable again. If the press
    /// also landed on the list, [`inner_press_down`](Self::inner_press_down) follows.
    pub fn outer_press_down(&mut self) -> Option<DragWrite> {
        let was_inner = self.intent == TouchIntent::Inner;
        self.intent = TouchIntent::Outer;
        self.state = ArbiterState::OuterOnly;
        if was_inner {
            self.settle.cancel();
            Some(self.write(true))
        } else {
            None
        }
    }

    /// The new touch sequence began inside the list.
    ///
    /// Blocks the sheet if the list can scroll and is away from its top edge, and
    /// arms the settle at `now + settle_delay` so a finger held still still gets the
    /// sheet back. A press that does not change the intent leaves the settle alone.
    pub fn inner_press_down(
        &mut self,
        position: ScrollPosition,
        now: Duration,
    ) -> Option<DragWrite> {
        if self.intent == TouchIntent::Outer {
            self.settle.schedule(now, self.config.settle_delay());
        }
        self.intent = TouchIntent::Inner;
        self.state = ArbiterState::InnerEngaged;
        if position.can_scroll && !position.is_top(self.config.top_edge_tolerance) {
            Some(self.write(false))
        } else {
            None
        }
    }

    /// The list's scroll position changed (by touch, fling, or programmatically).
    pub fn scroll_position_changed(
        &mut self,
        position: ScrollPosition,
        now: Duration,
    ) -> DragWrite {
        match self.intent {
            TouchIntent::Inner => {
                let top = position.is_top(self.config.top_edge_tolerance);
                self.settle.schedule(now, self.config.settle_delay());
                self.write(top)
            }
            TouchIntent::Outer => {
                self.settle.cancel();
                self.write(true)
            }
        }
    }

    /// The touch sequence ended.
    ///
    /// The flag keeps its last value; a pending settle restores it.
    pub fn release(&mut self) {
        self.state = ArbiterState::Idle;
    }

    /// Fire the settle if its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<DragWrite> {
        if self.settle.fire_due(now) {
            Some(self.write(true))
        } else {
            None
        }
    }

    /// Discard a pending settle without applying it.
    pub fn cancel_settle(&mut self) -> bool {
        self.settle.cancel()
    }

    /// Return to rest: idle, no pending settle, sheet draggable.
    pub fn reset(&mut self) -> DragWrite {
        self.settle.cancel();
        self.state = ArbiterState::Idle;
        self.intent = TouchIntent::Outer;
        self.write(true)
    }

    fn write(&mut self, enabled: bool) -> DragWrite {
        log::trace!("drag allowed -> {enabled} ({:?})", self.state);
        self.drag_allowed = enabled;
        DragWrite(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn at(index: usize, offset: u32) -> ScrollPosition {
        ScrollPosition::new(index, offset, true)
    }

    /// A press on the list: the sheet sees it first, then the list.
    fn press_list(
        a: &mut GestureArbiter,
        pos: ScrollPosition,
        now: Duration,
    ) -> Option<DragWrite> {
        let outer = a.outer_press_down();
        a.inner_press_down(pos, now).or(outer)
    }

    #[test]
    fn starts_at_rest() {
        let a = GestureArbiter::default();
        assert!(a.drag_allowed());
        assert_eq!(a.state(), ArbiterState::Idle);
        assert_eq!(a.intent(), TouchIntent::Outer);
        assert_eq!(a.settle_deadline(), None);
    }

    #[test]
    fn press_on_list_at_top_keeps_sheet_draggable() {
        let mut a = GestureArbiter::default();
        assert_eq!(press_list(&mut a, at(0, 0), ms(0)), None);
        assert!(a.drag_allowed());
        assert_eq!(a.state(), ArbiterState::InnerEngaged);
        assert_eq!(a.intent(), TouchIntent::Inner);
        assert_eq!(a.settle_deadline(), Some(ms(100)));
    }

    #[test]
    fn press_on_scrolled_list_blocks_sheet() {
        let mut a = GestureArbiter::default();
        assert_eq!(press_list(&mut a, at(5, 0), ms(0)), Some(DragWrite(false)));
        assert!(!a.drag_allowed());

        let mut a = GestureArbiter::default();
        assert_eq!(press_list(&mut a, at(0, 3), ms(0)), Some(DragWrite(false)));
    }

    #[test]
    fn press_on_unscrollable_list_never_blocks() {
        let mut a = GestureArbiter::default();
        let pos = ScrollPosition::new(2, 10, false);
        assert_eq!(press_list(&mut a, pos, ms(0)), None);
        assert!(a.drag_allowed());
    }

    #[test]
    fn press_outside_list_keeps_sheet_draggable() {
        let mut a = GestureArbiter::default();
        assert_eq!(a.outer_press_down(), None);
        assert_eq!(a.state(), ArbiterState::OuterOnly);
        assert_eq!(a.scroll_position_changed(at(3, 0), ms(0)), DragWrite(true));
        assert_eq!(a.scroll_position_changed(at(4, 20), ms(5)), DragWrite(true));
        assert_eq!(a.settle_deadline(), None);
        a.release();
        assert!(a.drag_allowed());
        assert_eq!(a.state(), ArbiterState::Idle);
    }

    #[test]
    fn scroll_during_list_touch_tracks_top_then_settles() {
        let mut a = GestureArbiter::default();
        press_list(&mut a, at(0, 0), ms(0));

        assert_eq!(a.scroll_position_changed(at(1, 8), ms(0)), DragWrite(false));
        assert_eq!(a.settle_deadline(), Some(ms(100)));
        assert_eq!(a.poll(ms(99)), None);
        assert!(!a.drag_allowed());
        assert_eq!(a.poll(ms(100)), Some(DragWrite(true)));
        assert!(a.drag_allowed());
        assert_eq!(a.poll(ms(200)), None);
    }

    #[test]
    fn scrolling_back_to_top_allows_drag_immediately() {
        let mut a = GestureArbiter::default();
        press_list(&mut a, at(2, 0), ms(0));
        assert_eq!(a.scroll_position_changed(at(0, 0), ms(0)), DragWrite(true));
        // The settle is still armed and writes `true` again.
        assert_eq!(a.poll(ms(100)), Some(DragWrite(true)));
    }

    #[test]
    fn each_scroll_change_restarts_the_delay() {
        let mut a = GestureArbiter::default();
        press_list(&mut a, at(0, 0), ms(0));
        a.scroll_position_changed(at(0, 30), ms(0));
        a.scroll_position_changed(at(1, 0), ms(60));
        a.scroll_position_changed(at(1, 40), ms(120));
        assert_eq!(a.poll(ms(150)), None);
        assert_eq!(a.poll(ms(219)), None);
        assert_eq!(a.poll(ms(220)), Some(DragWrite(true)));
    }

    #[test]
    fn release_does_not_force_drag() {
        let mut a = GestureArbiter::default();
        press_list(&mut a, at(3, 0), ms(0));
        a.scroll_position_changed(at(4, 0), ms(0));
        a.release();
        assert_eq!(a.state(), ArbiterState::Idle);
        assert!(!a.drag_allowed());
        // Fling continues after release; still treated as a list gesture.
        assert_eq!(a.scroll_position_changed(at(6, 0), ms(30)), DragWrite(false));
        assert_eq!(a.poll(ms(130)), Some(DragWrite(true)));
    }

    #[test]
    fn outer_press_resets_intent_and_next_scroll_allows_drag() {
        let mut a = GestureArbiter::default();
        press_list(&mut a, at(3, 0), ms(0));
        a.scroll_position_changed(at(4, 0), ms(0));
        a.release();

        assert_eq!(a.outer_press_down(), Some(DragWrite(true)));
        assert_eq!(a.intent(), TouchIntent::Outer);
        assert_eq!(a.settle_deadline(), None);
        assert_eq!(a.scroll_position_changed(at(4, 5), ms(10)), DragWrite(true));
        assert_eq!(a.poll(ms(1_000)), None);
    }

    #[test]
    fn header_press_after_stationary_list_press_unlocks_at_once() {
        let mut a = GestureArbiter::default();
        assert_eq!(press_list(&mut a, at(5, 0), ms(0)), Some(DragWrite(false)));
        a.release();
        assert!(!a.drag_allowed());

        assert_eq!(a.outer_press_down(), Some(DragWrite(true)));
        assert!(a.drag_allowed());
        assert_eq!(a.settle_deadline(), None);
        a.release();
        assert_eq!(a.poll(ms(10_000)), None);
        assert!(a.drag_allowed());
    }

    #[test]
    fn stationary_press_on_scrolled_list_unlocks_after_delay() {
        let mut a = GestureArbiter::default();
        assert_eq!(press_list(&mut a, at(5, 0), ms(40)), Some(DragWrite(false)));
        assert_eq!(a.settle_deadline(), Some(ms(140)));
        a.release();
        assert_eq!(a.poll(ms(139)), None);
        assert!(!a.drag_allowed());
        assert_eq!(a.poll(ms(140)), Some(DragWrite(true)));
        assert!(a.drag_allowed());
    }

    #[test]
    fn list_press_without_intent_change_keeps_settle() {
        let mut a = GestureArbiter::default();
        press_list(&mut a, at(0, 0), ms(0));
        a.scroll_position_changed(at(5, 0), ms(0));
        // A second list press seen without the sheet's press-down.
        assert_eq!(a.inner_press_down(at(5, 0), ms(50)), Some(DragWrite(false)));
        assert_eq!(a.settle_deadline(), Some(ms(100)));
        assert_eq!(a.poll(ms(100)), Some(DragWrite(true)));
    }

    #[test]
    fn sheet_is_draggable_at_rest_after_any_sequence() {
        #[derive(Copy, Clone, Debug)]
        enum Press {
            Sheet,
            List,
        }

        let positions = [at(0, 0), at(0, 9), at(7, 0), at(7, 30)];
        let mut cases = 0;
        for press in [Press::Sheet, Press::List] {
            for scroll in [None, Some(at(0, 0)), Some(at(3, 12))] {
                for &start in &positions {
                    let mut a = GestureArbiter::default();
                    match press {
                        Press::Sheet => {
                            a.outer_press_down();
                        }
                        Press::List => {
                            press_list(&mut a, start, ms(0));
                        }
                    }
                    if let Some(pos) = scroll {
                        a.scroll_position_changed(pos, ms(30));
                    }
                    a.release();
                    a.poll(ms(30) + a.config().settle_delay());
                    assert!(a.drag_allowed(), "{press:?} {scroll:?} {start:?} after settle");
                    a.outer_press_down();
                    assert!(a.drag_allowed(), "{press:?} {scroll:?} {start:?} next press");
                    cases += 1;
                }
            }
        }
        assert_eq!(cases, 24);
    }

    #[test]
    fn tolerance_widens_top_edge() {
        let cfg = ArbiterConfig::default().with_top_edge_tolerance(4);
        let mut a = GestureArbiter::new(cfg);
        assert_eq!(press_list(&mut a, at(0, 4), ms(0)), None);
        assert_eq!(a.scroll_position_changed(at(0, 3), ms(0)), DragWrite(true));
        assert_eq!(a.scroll_position_changed(at(0, 5), ms(1)), DragWrite(false));
    }

    #[test]
    fn custom_settle_delay() {
        let mut a = GestureArbiter::new(ArbiterConfig::default().with_settle_delay_ms(30));
        press_list(&mut a, at(0, 0), ms(0));
        a.scroll_position_changed(at(2, 0), ms(10));
        assert_eq!(a.poll(ms(39)), None);
        assert_eq!(a.poll(ms(40)), Some(DragWrite(true)));
    }

    #[test]
    fn cancel_and_reset() {
        let mut a = GestureArbiter::default();
        press_list(&mut a, at(2, 0), ms(0));
        a.scroll_position_changed(at(3, 0), ms(0));
        assert!(a.cancel_settle());
        assert_eq!(a.poll(ms(1_000)), None);
        assert!(!a.drag_allowed());

        assert_eq!(a.reset(), DragWrite(true));
        assert!(a.drag_allowed());
        assert_eq!(a.state(), ArbiterState::Idle);
        assert_eq!(a.intent(), TouchIntent::Outer);
    }
}
