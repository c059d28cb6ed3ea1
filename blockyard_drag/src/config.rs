// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning for a [`DragController`](crate::DragController).
///
/// ```
/// use blockyard_drag::DragConfig;
///
/// let config = DragConfig::default()
///     .with_hit_test_interval(16)
///     .with_drag_threshold(3.0);
/// assert_eq!(config.hit_test_interval_ms, 16);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragConfig {
    /// Milliseconds between hit-tests while dragging.
    pub hit_test_interval_ms: u64,
    /// Minimum pointer travel, in surface units, before a press becomes a drag.
    ///
    /// At `0.0` the first move after a press starts the drag.
    pub drag_threshold: f64,
}

impl DragConfig {
    /// Default hit-test interval in milliseconds.
    pub const DEFAULT_HIT_TEST_INTERVAL_MS: u64 = 20;

    /// Set the hit-test interval.
    #[must_use]
    pub const fn with_hit_test_interval(mut self, ms: u64) -> Self {
        self.hit_test_interval_ms = ms;
        self
    }

    /// Set the drag threshold. Negative values behave like `0.0`.
    #[must_use]
    pub const fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Returns `true` if travelling `distance_squared` turns a press into a drag.
    pub(crate) fn exceeds_threshold(&self, distance_squared: f64) -> bool {
        let threshold = self.drag_threshold.max(0.0);
        distance_squared >= threshold * threshold
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            hit_test_interval_ms: Self::DEFAULT_HIT_TEST_INTERVAL_MS,
            drag_threshold: 0.0,
        }
    }
}
