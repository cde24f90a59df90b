// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag thresholds: decide when a press has moved far enough to become a drag.
//!
//! ## Usage
//!
//! 1) Record the press position (see [`PointerState::press_at`](crate::pointer::PointerState::press_at)).
//! 2) On each move, compute the per-axis displacement from the press position
//!    with [`displacement`] (or [`PointerState::displacement`](crate::pointer::PointerState::displacement)).
//! 3) Ask the container's [`DragThreshold`] whether that displacement crosses it.
//!
//! Either axis crossing its threshold is enough.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tessera_event_state::drag::{DragThreshold, displacement};
//!
//! let threshold = DragThreshold::new(5.0, 10.0);
//! let moved = displacement(Point::new(100.0, 100.0), Point::new(96.0, 109.0));
//! assert_eq!(moved.x, 4.0);
//! assert_eq!(moved.y, 9.0);
//! assert!(!threshold.is_exceeded(moved));
//!
//! let moved = displacement(Point::new(100.0, 100.0), Point::new(95.0, 100.0));
//! assert!(threshold.is_exceeded(moved));
//! ```

use kurbo::{Point, Vec2};

/// Minimum pointer displacement, per axis, before a press is promoted to a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragThreshold {
    /// Minimum horizontal displacement.
    pub x: f64,
    /// Minimum vertical displacement.
    pub y: f64,
}

impl DragThreshold {
    /// Create a threshold from per-axis minimum displacements.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if `displacement` reaches the threshold on either axis.
    ///
    /// `displacement` is expected to hold absolute values, as returned by
    /// [`displacement`].
    pub fn is_exceeded(&self, displacement: Vec2) -> bool {
        displacement.x >= self.x || displacement.y >= self.y
    }
}

impl Default for DragThreshold {
    /// One unit on both axes: a press becomes a drag once the pointer actually moves.
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Absolute per-axis distance between the press position and the current position.
pub fn displacement(initial: Point, current: Point) -> Vec2 {
    let d = current - initial;
    Vec2::new(d.x.abs(), d.y.abs())
}
