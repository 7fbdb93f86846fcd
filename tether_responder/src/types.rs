// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for press routing: regions, flags, phases, and dispatch.
//!
//! ## Overview
//!
//! These types describe the nested surfaces a press can land on and the
//! propagation sequence produced for it. They are referenced by the
//! [`router`](crate::router) and consumed by the [`adapter`](crate::adapter).

use bitflags::bitflags;
use kurbo::{Point, Rect};

/// Phases of press propagation.
///
/// Appears on each [`Dispatch`] item produced by
/// [`Router::route_press`](crate::router::Router::route_press).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Root-to-target traversal.
    Capture,
    /// Target region.
    Target,
    /// Target-to-root traversal.
    Bubble,
}

/// A surface that can receive a press.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Region {
    /// The outer draggable sheet.
    Sheet,
    /// The inner scrollable list.
    List,
    /// Any other content region, keyed by a caller-chosen id.
    ///
    /// Headers, handles, and list rows are typical. A content region nested in the
    /// list still routes through the list.
    Content(u32),
}

bitflags! {
    /// Region flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Region is shown. Hidden regions hide their descendants from routing too.
        const VISIBLE  = 0b0000_0001;
        /// Region can become a press target.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Geometry and flags for one region.
///
/// Bounds are in a single shared space (usually the sheet's), not relative to
/// the parent. Move them with [`Router::set_bounds`](crate::router::Router::set_bounds)
/// when the host lays out again.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegionNode {
    /// Bounds of the region.
    pub bounds: Rect,
    /// Stacking order among overlapping regions. Higher is on top.
    pub z_index: i32,
    /// Visibility and picking flags.
    pub flags: RegionFlags,
}

impl Default for RegionNode {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            z_index: 0,
            flags: RegionFlags::default(),
        }
    }
}

impl RegionNode {
    /// A visible, pickable region at z 0.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }
}

/// A single dispatch item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dispatch {
    /// Propagation phase for this step.
    pub phase: Phase,
    /// Region receiving this step.
    pub region: Region,
    /// The press position relative to the region's top-left corner.
    pub local: Point,
}
