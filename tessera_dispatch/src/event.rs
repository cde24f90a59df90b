// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer events as delivered by the event source.

use kurbo::{Point, Vec2};
use tessera_tree::PointerButton;

/// Axis a scroll event moves along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// Vertical wheel or swipe.
    #[default]
    Vertical,
    /// Horizontal wheel or swipe.
    Horizontal,
}

/// Scroll payload of a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDelta {
    /// Axis of the motion.
    pub axis: ScrollAxis,
    /// Signed amount as reported by the source.
    pub delta: f64,
    /// The scroll came from a pointer device (wheel) rather than, say, a touchpad.
    pub from_pointer_device: bool,
}

impl ScrollDelta {
    /// A vertical scroll from a pointer device.
    pub const fn vertical(delta: f64) -> Self {
        Self {
            axis: ScrollAxis::Vertical,
            delta,
            from_pointer_device: true,
        }
    }

    /// A horizontal scroll from a pointer device.
    pub const fn horizontal(delta: f64) -> Self {
        Self {
            axis: ScrollAxis::Horizontal,
            delta,
            from_pointer_device: true,
        }
    }

    /// Mark whether the scroll came from a pointer device.
    #[must_use]
    pub const fn with_pointer_device(mut self, from_pointer_device: bool) -> Self {
        self.from_pointer_device = from_pointer_device;
        self
    }

    /// The vector handed to fine-scroll hooks: the delta negated, on its axis.
    ///
    /// Horizontal input lands in `x`. Sources that only report a wheel
    /// amount should build a [`vertical`](Self::vertical) delta, which
    /// always routes to `y` with `x` left at zero.
    ///
    /// ```
    /// use kurbo::Vec2;
    /// use tessera_dispatch::ScrollDelta;
    ///
    /// assert_eq!(ScrollDelta::vertical(3.0).handler_delta(), Vec2::new(0.0, -3.0));
    /// assert_eq!(ScrollDelta::horizontal(-2.0).handler_delta(), Vec2::new(2.0, 0.0));
    /// ```
    pub fn handler_delta(&self) -> Vec2 {
        match self.axis {
            ScrollAxis::Vertical => Vec2::new(0.0, -self.delta),
            ScrollAxis::Horizontal => Vec2::new(-self.delta, 0.0),
        }
    }
}

/// What happened at the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEventKind {
    /// A button went down.
    Press(PointerButton),
    /// A button went up.
    Release(PointerButton),
    /// Scroll input. Never gated by button.
    Scroll(ScrollDelta),
}

/// A button or scroll event at a position in tree coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position.
    pub position: Point,
    /// Payload.
    pub kind: PointerEventKind,
}

impl PointerEvent {
    /// A button press at `position`.
    pub fn press(position: impl Into<Point>, button: PointerButton) -> Self {
        Self {
            position: position.into(),
            kind: PointerEventKind::Press(button),
        }
    }

    /// A button release at `position`.
    pub fn release(position: impl Into<Point>, button: PointerButton) -> Self {
        Self {
            position: position.into(),
            kind: PointerEventKind::Release(button),
        }
    }

    /// Scroll input at `position`.
    pub fn scroll(position: impl Into<Point>, delta: ScrollDelta) -> Self {
        Self {
            position: position.into(),
            kind: PointerEventKind::Scroll(delta),
        }
    }

    /// The button involved, if this is a button event.
    pub fn button(&self) -> Option<PointerButton> {
        match self.kind {
            PointerEventKind::Press(b) | PointerEventKind::Release(b) => Some(b),
            PointerEventKind::Scroll(_) => None,
        }
    }

    /// The scroll payload, if this is scroll input.
    pub fn scroll_delta(&self) -> Option<ScrollDelta> {
        match self.kind {
            PointerEventKind::Scroll(delta) => Some(delta),
            _ => None,
        }
    }
}

/// Whether a dispatcher acted on an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DispatchOutcome {
    /// The event was processed.
    Dispatched,
    /// The event was dropped: the tree has no root, or a release named an
    /// unrecognized button.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_events_carry_no_button() {
        let ev = PointerEvent::scroll((1.0, 2.0), ScrollDelta::vertical(1.0));
        assert_eq!(ev.button(), None);
        assert_eq!(ev.position, Point::new(1.0, 2.0));
        assert!(ev.scroll_delta().is_some_and(|d| d.from_pointer_device));
    }

    #[test]
    fn button_events_carry_their_button() {
        let ev = PointerEvent::release((0.0, 0.0), PointerButton::Right);
        assert_eq!(ev.button(), Some(PointerButton::Right));
        assert_eq!(ev.scroll_delta(), None);
    }

    #[test]
    fn touchpad_scroll_keeps_axis() {
        let d = ScrollDelta::horizontal(4.0).with_pointer_device(false);
        assert!(!d.from_pointer_device);
        assert_eq!(d.handler_delta(), Vec2::new(-4.0, 0.0));
    }
}
