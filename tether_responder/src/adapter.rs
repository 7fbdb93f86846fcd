// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet adapter: forwards host press and scroll callbacks into the arbiter and
//! applies its decisions back to the host.
//!
//! ## Lifecycle
//!
//! 1) Build a [`Router`] describing the sheet and its list.
//! 2) [`SheetAdapter::attach`] the host's drag target and scroll source when the
//!    sheet is shown. The sheet starts out draggable.
//! 3) Forward press-down, press-up, and scroll-change callbacks, and call
//!    [`SheetAdapter::advance`] from the frame loop.
//! 4) [`SheetAdapter::detach`] when the sheet goes away. A pending settle is dropped.
//!
//! While detached, the arbiter is left untouched and no write reaches a host.
//!
//! ## Press handling
//!
//! Presses are routed with [`Router::route_press`]. The capture step on
//! [`Region::Sheet`] starts a sheet sequence; the capture step on [`Region::List`]
//! (which follows it on the same path) marks the sequence as list-initiated. Rows
//! nested in the list therefore count as list presses. Writes made along the path
//! are coalesced, so the host sees at most one `set_draggable` per press. The
//! adapter never consumes a press; the returned dispatch sequence is the host's to
//! deliver.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;
use tether_arbiter::arbiter::GestureArbiter;
use tether_arbiter::config::ArbiterConfig;
use tether_arbiter::host::{DragTarget, ScrollSource};
use tether_arbiter::types::{DragWrite, ScrollPosition};

use crate::router::Router;
use crate::types::{Dispatch, Phase, Region};

struct Host<T, S> {
    target: T,
    source: S,
}

/// Thin adapter between a host toolkit and a [`GestureArbiter`].
pub struct SheetAdapter<T, S> {
    arbiter: GestureArbiter,
    router: Router,
    host: Option<Host<T, S>>,
}

impl<T, S> core::fmt::Debug for SheetAdapter<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SheetAdapter")
            .field("arbiter", &self.arbiter)
            .field("router", &self.router)
            .field("attached", &self.host.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: DragTarget, S: ScrollSource> SheetAdapter<T, S> {
    /// Create a detached adapter.
    pub fn new(config: ArbiterConfig, router: Router) -> Self {
        Self {
            arbiter: GestureArbiter::new(config),
            router,
            host: None,
        }
    }

    /// Take ownership of the host's sheet and list and make the sheet draggable.
    ///
    /// Attaching over an existing host replaces it; the old pair is returned.
    pub fn attach(&mut self, target: T, source: S) -> Option<(T, S)> {
        let previous = self.detach();
        self.host = Some(Host { target, source });
        let write = self.arbiter.reset();
        self.apply(write);
        previous
    }

    /// Release the host objects and drop any pending settle.
    pub fn detach(&mut self) -> Option<(T, S)> {
        if self.arbiter.cancel_settle() {
            log::debug!("pending settle discarded on detach");
        }
        self.host.take().map(|h| (h.target, h.source))
    }

    /// Whether a host is attached.
    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    /// The arbiter, for inspection.
    pub fn arbiter(&self) -> &GestureArbiter {
        &self.arbiter
    }

    /// The region router.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Mutable access to the router, for layout updates.
    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    /// The attached drag target.
    pub fn target(&self) -> Option<&T> {
        self.host.as_ref().map(|h| &h.target)
    }

    /// The attached scroll source.
    pub fn source(&self) -> Option<&S> {
        self.host.as_ref().map(|h| &h.source)
    }

    /// Mutable access to the attached scroll source, e.g. to scroll it in place.
    ///
    /// Report the change with [`scroll_changed`](Self::scroll_changed) afterwards.
    pub fn source_mut(&mut self) -> Option<&mut S> {
        self.host.as_mut().map(|h| &mut h.source)
    }

    /// A press went down at `point` (in router space) at time `now`.
    ///
    /// Returns the dispatch sequence for the host to deliver. While detached the
    /// press is routed but the arbiter is not consulted.
    pub fn pointer_down(&mut self, point: Point, now: Duration) -> Vec<Dispatch> {
        let seq = self.router.route_press(point);
        let Some(position) = self.source().map(ScrollSource::scroll_position) else {
            log::debug!("press ignored: sheet not attached");
            return seq;
        };
        let mut last = None;
        for d in seq.iter().filter(|d| d.phase == Phase::Capture) {
            let write = match d.region {
                Region::Sheet => self.arbiter.outer_press_down(),
                Region::List => self.arbiter.inner_press_down(position, now),
                Region::Content(_) => None,
            };
            last = write.or(last);
        }
        if let Some(write) = last {
            self.apply(write);
        }
        seq
    }

    /// The press was released or cancelled.
    pub fn pointer_up(&mut self) {
        self.arbiter.release();
    }

    /// The list reported a scroll change; reads the new position from the source.
    pub fn scroll_changed(&mut self, now: Duration) {
        let Some(position) = self.source().map(ScrollSource::scroll_position) else {
            log::debug!("scroll change ignored: sheet not attached");
            return;
        };
        self.scroll_changed_to(position, now);
    }

    /// The list reported a scroll change with its new position.
    pub fn scroll_changed_to(&mut self, position: ScrollPosition, now: Duration) {
        if !self.is_attached() {
            log::debug!("scroll change ignored: sheet not attached");
            return;
        }
        let write = self.arbiter.scroll_position_changed(position, now);
        self.apply(write);
    }

    /// Fire a due settle. Call from the host's frame or timer loop.
    pub fn advance(&mut self, now: Duration) {
        if !self.is_attached() {
            return;
        }
        if let Some(write) = self.arbiter.poll(now) {
            self.apply(write);
        }
    }

    /// The only path from arbiter decisions to the host.
    fn apply(&mut self, write: DragWrite) {
        match &mut self.host {
            Some(host) => {
                log::debug!("set_draggable({})", write.enabled());
                host.target.set_draggable(write.enabled());
            }
            None => log::debug!("set_draggable({}) dropped: sheet not attached", write.enabled()),
        }
    }
}
