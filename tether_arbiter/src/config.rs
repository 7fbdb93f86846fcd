// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbiter tuning.

use core::time::Duration;

/// Default grace period after a list scroll before the sheet may be dragged again.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 100;

/// Tunable constants for a [`GestureArbiter`](crate::arbiter::GestureArbiter).
///
/// With the `serde` feature the keys are `settleDelayMs` and `topEdgeTolerance`;
/// missing keys keep their defaults.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ArbiterConfig {
    /// Milliseconds without a scroll change before the sheet becomes draggable again.
    pub settle_delay_ms: u64,
    /// Largest first-item offset, in pixels, still treated as the top edge.
    pub top_edge_tolerance: u32,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            top_edge_tolerance: 0,
        }
    }
}

impl ArbiterConfig {
    /// The settle delay as a [`Duration`].
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Return a copy with a different settle delay.
    #[must_use]
    pub const fn with_settle_delay_ms(mut self, ms: u64) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// Return a copy with a different top edge tolerance.
    #[must_use]
    pub const fn with_top_edge_tolerance(mut self, px: u32) -> Self {
        self.top_edge_tolerance = px;
        self
    }
}
