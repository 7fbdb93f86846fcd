// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Responder: press routing for a sheet with a nested list, plus the host adapter.
//!
//! ## Overview
//!
//! The [`tether_arbiter`] crate decides whether a sheet may be dragged, but it needs
//! to know whether each press began on the sheet or on its list. This crate answers
//! that with a small, deterministic router over nested regions, and wires the router,
//! the arbiter, and the host together in [`SheetAdapter`](crate::adapter::SheetAdapter).
//!
//! ## Routing
//!
//! Regions ([`Region`](crate::types::Region)) carry `kurbo` bounds, a parent, a z-index
//! and [`RegionFlags`](crate::types::RegionFlags). [`Router`](crate::router::Router)
//! selects the topmost region under a press and emits a capture → target → bubble
//! sequence for its root→target path. See [`router`](crate::router) for the rules.
//!
//! ## Adapter
//!
//! [`SheetAdapter`](crate::adapter::SheetAdapter) owns the arbiter and, while attached,
//! the host's [`DragTarget`](tether_arbiter::host::DragTarget) and
//! [`ScrollSource`](tether_arbiter::host::ScrollSource). Calls made while detached
//! leave the arbiter alone.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect};
//! use tether_arbiter::config::ArbiterConfig;
//! use tether_arbiter::host::DragTarget;
//! use tether_arbiter::list::UniformList;
//! use tether_responder::adapter::SheetAdapter;
//! use tether_responder::router::Router;
//! use tether_responder::types::{Region, RegionNode};
//!
//! struct Sheet { draggable: bool }
//! impl DragTarget for Sheet {
//!     fn set_draggable(&mut self, enabled: bool) { self.draggable = enabled; }
//! }
//!
//! let mut router = Router::new();
//! router.insert(None, Region::Sheet, RegionNode::new(Rect::new(0.0, 0.0, 400.0, 800.0)));
//! let list = Rect::new(0.0, 200.0, 400.0, 680.0);
//! router.insert(Some(Region::Sheet), Region::List, RegionNode::new(list));
//!
//! let mut adapter = SheetAdapter::new(ArbiterConfig::default(), router);
//! adapter.attach(Sheet { draggable: false }, UniformList::new(100, 48, 480));
//! assert!(adapter.target().unwrap().draggable);
//!
//! // Scroll the list away from its top, then press on it.
//! adapter.source_mut().unwrap().scroll_to_item(5);
//! adapter.scroll_changed(Duration::from_millis(0));
//! adapter.pointer_down(Point::new(50.0, 300.0), Duration::from_millis(16));
//! assert!(!adapter.target().unwrap().draggable);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapter;
pub mod router;
pub mod types;
