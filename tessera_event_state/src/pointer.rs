// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer buttons and the pointer record kept for the root of a tree.

use kurbo::{Point, Vec2};

use crate::drag::displacement;

/// Linux evdev code of the left mouse button.
pub const BTN_LEFT: u16 = 0x110;
/// Linux evdev code of the right mouse button.
pub const BTN_RIGHT: u16 = 0x111;
/// Linux evdev code of the middle mouse button.
pub const BTN_MIDDLE: u16 = 0x112;

/// A pointer button.
///
/// Only [`Left`](Self::Left), [`Right`](Self::Right) and [`Middle`](Self::Middle)
/// are *recognized*: presses and releases of any other button do not change
/// interaction state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Auxiliary (wheel) button.
    Middle,
    /// Any other button, by raw code.
    Other(u16),
}

impl PointerButton {
    /// Map a Linux evdev button code to a button.
    pub const fn from_code(code: u16) -> Self {
        match code {
            BTN_LEFT => Self::Left,
            BTN_RIGHT => Self::Right,
            BTN_MIDDLE => Self::Middle,
            other => Self::Other(other),
        }
    }

    /// The Linux evdev code for this button.
    pub const fn code(self) -> u16 {
        match self {
            Self::Left => BTN_LEFT,
            Self::Right => BTN_RIGHT,
            Self::Middle => BTN_MIDDLE,
            Self::Other(code) => code,
        }
    }

    /// Returns `true` for the three buttons that drive press/release state.
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Returns `true` for the primary button.
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Left)
    }
}

/// Pointer positions recorded for the root of a tree.
///
/// - `current` follows every event.
/// - `previous` holds the `current` value from before the last motion event.
/// - `initial` is where the last press happened; drags measure against it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Position before the latest motion event.
    pub previous: Point,
    /// Latest known position.
    pub current: Point,
    /// Position of the latest press.
    pub initial: Point,
    /// The primary button is held down.
    pub left_mouse_down: bool,
}

impl PointerState {
    /// Record a motion event.
    pub fn move_to(&mut self, pos: Point) {
        self.previous = self.current;
        self.current = pos;
    }

    /// Record a press at `pos`.
    pub fn press_at(&mut self, pos: Point, button: PointerButton) {
        if button.is_primary() {
            self.left_mouse_down = true;
        }
        self.anchor_at(pos);
    }

    /// Move both the press anchor and the current position to `pos`.
    ///
    /// Scroll input does this without touching the button state.
    pub fn anchor_at(&mut self, pos: Point) {
        self.initial = pos;
        self.current = pos;
    }

    /// Record a release at `pos`.
    pub fn release_at(&mut self, pos: Point, button: PointerButton) {
        if button.is_primary() {
            self.left_mouse_down = false;
        }
        self.current = pos;
    }

    /// Absolute per-axis distance from the last press to the current position.
    pub fn displacement(&self) -> Vec2 {
        displacement(self.initial, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evdev_codes_round_trip_for_recognized_buttons() {
        for button in [PointerButton::Left, PointerButton::Right, PointerButton::Middle] {
            assert_eq!(PointerButton::from_code(button.code()), button);
            assert!(button.is_recognized());
        }
    }

    #[test]
    fn side_button_is_not_recognized() {
        let side = PointerButton::from_code(0x113);
        assert_eq!(side, PointerButton::Other(0x113));
        assert!(!side.is_recognized());
        assert_eq!(side.code(), 0x113);
    }

    #[test]
    fn move_tracks_previous() {
        let mut pointer = PointerState::default();
        pointer.move_to(Point::new(1.0, 2.0));
        pointer.move_to(Point::new(3.0, 4.0));
        assert_eq!(pointer.previous, Point::new(1.0, 2.0));
        assert_eq!(pointer.current, Point::new(3.0, 4.0));
    }

    #[test]
    fn only_primary_button_sets_left_mouse_down() {
        let mut pointer = PointerState::default();
        pointer.press_at(Point::new(5.0, 5.0), PointerButton::Right);
        assert!(!pointer.left_mouse_down);
        assert_eq!(pointer.initial, Point::new(5.0, 5.0));

        pointer.press_at(Point::new(6.0, 6.0), PointerButton::Left);
        assert!(pointer.left_mouse_down);

        pointer.release_at(Point::new(7.0, 7.0), PointerButton::Middle);
        assert!(pointer.left_mouse_down, "middle release leaves the primary held");

        pointer.release_at(Point::new(8.0, 8.0), PointerButton::Left);
        assert!(!pointer.left_mouse_down);
        assert_eq!(pointer.current, Point::new(8.0, 8.0));
    }

    #[test]
    fn press_does_not_touch_previous() {
        let mut pointer = PointerState::default();
        pointer.move_to(Point::new(1.0, 1.0));
        pointer.press_at(Point::new(9.0, 9.0), PointerButton::Left);
        assert_eq!(pointer.previous, Point::ZERO);
        assert_eq!(pointer.current, Point::new(9.0, 9.0));
    }

    #[test]
    fn displacement_measures_from_press() {
        let mut pointer = PointerState::default();
        pointer.press_at(Point::new(10.0, 10.0), PointerButton::Left);
        pointer.move_to(Point::new(4.0, 13.0));
        assert_eq!(pointer.displacement(), Vec2::new(6.0, 3.0));
    }
}
