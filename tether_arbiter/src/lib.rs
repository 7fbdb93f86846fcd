// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Arbiter: a deterministic, `no_std` gesture arbiter for a sheet hosting a scrollable list.
//!
//! ## Overview
//!
//! A draggable bottom sheet that contains a scrollable list has two candidates for
//! every vertical drag. This crate decides which one wins: touches on the list
//! scroll the list while it is away from its top edge, and drag the sheet otherwise.
//!
//! The decision is a single boolean, "the sheet may be dragged", that the host
//! applies to its sheet behavior. [`GestureArbiter`](crate::arbiter::GestureArbiter)
//! computes it from three inputs:
//!
//! - press-down on the sheet, which starts a new touch sequence,
//! - press-down on the list, which marks the sequence as list-initiated,
//! - scroll changes reported by the list, with a short settle delay.
//!
//! ## Time
//!
//! Nothing here reads a clock or spawns a timer. Time-dependent calls take a
//! monotonic `now` ([`core::time::Duration`] since any epoch) and the host polls
//! [`GestureArbiter::poll`](crate::arbiter::GestureArbiter::poll) from its frame loop.
//! See [`settle`](crate::settle).
//!
//! ## Layering
//!
//! The arbiter is pure and returns [`DragWrite`](crate::types::DragWrite) values.
//! Host seams live in [`host`](crate::host); list helpers in [`list`](crate::list).
//! Routing presses to the sheet or the list, and applying writes to a host, is the
//! job of `tether_responder`.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use tether_arbiter::arbiter::GestureArbiter;
//! use tether_arbiter::host::ScrollSource;
//! use tether_arbiter::list::UniformList;
//!
//! let ms = Duration::from_millis;
//! let mut list = UniformList::new(100, 48, 480);
//! let mut arbiter = GestureArbiter::default();
//!
//! // Press on the list at its top: the sheet stays draggable.
//! arbiter.outer_press_down();
//! assert_eq!(arbiter.inner_press_down(list.scroll_position(), ms(0)), None);
//!
//! // Scroll to row 5: the sheet locks, then unlocks once scrolling pauses.
//! list.scroll_to_item(5);
//! assert!(!arbiter.scroll_position_changed(list.scroll_position(), ms(10)).enabled());
//! arbiter.release();
//! assert!(arbiter.poll(ms(110)).is_some());
//! assert!(arbiter.drag_allowed());
//!
//! // Press again on the scrolled list: the sheet locks at once.
//! arbiter.outer_press_down();
//! assert!(arbiter.inner_press_down(list.scroll_position(), ms(500)).is_some());
//! assert!(!arbiter.drag_allowed());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod arbiter;
pub mod config;
pub mod host;
pub mod list;
pub mod settle;
pub mod types;
