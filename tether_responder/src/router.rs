// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Hit-tests a press against nested regions, reconstructs the root→target path,
//! and emits a capture → target → bubble sequence for the selected target.
//!
//! ## Target Selection
//!
//! - Candidates are visible, pickable regions whose bounds contain the point and
//!   whose ancestors are all visible.
//! - Higher `z_index` wins. On equal z the deeper region wins, so a list beats
//!   the sheet it sits in.
//! - Remaining ties are stable and the last inserted wins.
//!
//! ## See Also
//!
//! [`adapter`](crate::adapter) for turning the sequence into arbiter calls.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::types::{Dispatch, Phase, Region, RegionFlags, RegionNode};

#[derive(Clone, Debug)]
struct Entry {
    region: Region,
    parent: Option<Region>,
    node: RegionNode,
}

/// Deterministic press router over a small tree of regions.
///
/// ## Usage
///
/// - [`Router::insert`] the sheet as a root, then the list and any content
///   regions under it.
/// - Keep bounds current with [`Router::set_bounds`] after layout.
/// - Call [`Router::route_press`] on each press-down.
///
/// ```
/// use kurbo::{Point, Rect};
/// use tether_responder::router::Router;
/// use tether_responder::types::{Phase, Region, RegionNode};
///
/// let mut router = Router::new();
/// router.insert(None, Region::Sheet, RegionNode::new(Rect::new(0.0, 0.0, 400.0, 800.0)));
/// router.insert(Some(Region::Sheet), Region::List, RegionNode::new(Rect::new(0.0, 200.0, 400.0, 800.0)));
///
/// let seq = router.route_press(Point::new(50.0, 300.0));
/// let steps: Vec<_> = seq.iter().map(|d| (d.phase, d.region)).collect();
/// assert_eq!(steps, [
///     (Phase::Capture, Region::Sheet),
///     (Phase::Capture, Region::List),
///     (Phase::Target, Region::List),
///     (Phase::Bubble, Region::List),
///     (Phase::Bubble, Region::Sheet),
/// ]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Router {
    entries: Vec<Entry>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a region, or replace it if already present.
    ///
    /// A replaced region moves to the end of the insertion order. `parent` should
    /// already be present; an unknown parent ends the path at this region.
    pub fn insert(&mut self, parent: Option<Region>, region: Region, node: RegionNode) {
        self.entries.retain(|e| e.region != region);
        self.entries.push(Entry {
            region,
            parent,
            node,
        });
    }

    /// Remove a region. Its children stay but lose their path above it.
    pub fn remove(&mut self, region: Region) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.region != region);
        before != self.entries.len()
    }

    /// Whether the region is present.
    pub fn contains(&self, region: Region) -> bool {
        self.entry(region).is_some()
    }

    /// Update a region's bounds. Returns `false` for an unknown region.
    pub fn set_bounds(&mut self, region: Region, bounds: Rect) -> bool {
        match self.entry_mut(region) {
            Some(e) => {
                e.node.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Update a region's flags. Returns `false` for an unknown region.
    pub fn set_flags(&mut self, region: Region, flags: RegionFlags) -> bool {
        match self.entry_mut(region) {
            Some(e) => {
                e.node.flags = flags;
                true
            }
            None => false,
        }
    }

    /// Geometry and flags of a region.
    pub fn node(&self, region: Region) -> Option<&RegionNode> {
        self.entry(region).map(|e| &e.node)
    }

    /// Parent of a region, if it has one.
    pub fn parent_of(&self, region: Region) -> Option<Region> {
        self.entry(region).and_then(|e| e.parent)
    }

    /// The topmost region under `point`, if any.
    pub fn hit_test(&self, point: Point) -> Option<Region> {
        // Single pass; only strictly lower keys are skipped, so ties go to the last entry.
        let mut best: Option<(i32, usize, Region)> = None;
        for e in &self.entries {
            if !e.node.flags.contains(RegionFlags::VISIBLE | RegionFlags::PICKABLE)
                || !e.node.bounds.contains(point)
            {
                continue;
            }
            let Some(depth) = self.visible_depth(e.region) else {
                continue;
            };
            let key = (e.node.z_index, depth);
            if let Some((z, d, _)) = best
                && key < (z, d)
            {
                continue;
            }
            best = Some((key.0, key.1, e.region));
        }
        best.map(|(_, _, region)| region)
    }

    /// Route a press and produce a propagation sequence.
    ///
    /// Returns an empty sequence when the press hits no region.
    pub fn route_press(&self, point: Point) -> Vec<Dispatch> {
        let Some(target) = self.hit_test(point) else {
            log::trace!("press at {point:?} hit no region");
            return Vec::new();
        };
        let path = self.reconstruct_path(target);
        log::trace!("press at {point:?} routed to {target:?} via {path:?}");
        self.emit_path(&path, point)
    }

    fn entry(&self, region: Region) -> Option<&Entry> {
        self.entries.iter().find(|e| e.region == region)
    }

    fn entry_mut(&mut self, region: Region) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.region == region)
    }

    /// Number of ancestors, or `None` if any ancestor is hidden.
    fn visible_depth(&self, region: Region) -> Option<usize> {
        let mut depth = 0;
        let mut cur = self.parent_of(region);
        while let Some(p) = cur {
            // A parent chain longer than the tree is a cycle.
            if depth >= self.entries.len() {
                break;
            }
            match self.entry(p) {
                Some(e) if !e.node.flags.contains(RegionFlags::VISIBLE) => return None,
                Some(e) => cur = e.parent,
                None => break,
            }
            depth += 1;
        }
        Some(depth)
    }

    fn reconstruct_path(&self, target: Region) -> Vec<Region> {
        let mut out = Vec::new();
        let mut cur = target;
        loop {
            out.push(cur);
            match self.parent_of(cur) {
                Some(p) if self.contains(p) && !out.contains(&p) => cur = p,
                _ => break,
            }
        }
        out.reverse();
        out
    }

    fn emit_path(&self, path: &[Region], point: Point) -> Vec<Dispatch> {
        let mut out = Vec::with_capacity(path.len() * 2 + 1);
        // Capture: root→target
        for &r in path {
            out.push(self.make_dispatch(Phase::Capture, r, point));
        }
        // Target
        if let Some(&target) = path.last() {
            out.push(self.make_dispatch(Phase::Target, target, point));
        }
        // Bubble: target→root
        for &r in path.iter().rev() {
            out.push(self.make_dispatch(Phase::Bubble, r, point));
        }
        out
    }

    fn make_dispatch(&self, phase: Phase, region: Region, point: Point) -> Dispatch {
        let origin = self
            .node(region)
            .map(|n| n.bounds.origin().to_vec2())
            .unwrap_or_default();
        Dispatch {
            phase,
            region,
            local: point - origin,
        }
    }
}
