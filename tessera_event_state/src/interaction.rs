// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction flags tracked for every container.
//!
//! A container becomes *concerned* when the dispatcher starts tracking it
//! (the pointer entered it, or it received a press), and stops being concerned
//! once it is released or left. While concerned it may additionally be
//! hovered, pressed, or dragged.

use crate::pointer::PointerButton;

/// Interaction state of a single container.
///
/// `mouse_dragging` is only ever set while `mouse_pressing` is set, and both are
/// cleared together on release or [`reset`](Self::reset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// The dispatcher is tracking this container.
    pub concerned: bool,
    /// The pointer is over this container.
    pub mouse_hovering: bool,
    /// A recognized button went down on this container and has not been released.
    pub mouse_pressing: bool,
    /// The press moved further than the container's drag threshold.
    pub mouse_dragging: bool,
    /// Button of the current press, if any.
    pub mouse_button_pressed: Option<PointerButton>,
}

impl InteractionState {
    /// Record a press with `button`. A pressed container is also hovered.
    pub fn press(&mut self, button: PointerButton) {
        self.mouse_hovering = true;
        self.mouse_pressing = true;
        self.mouse_button_pressed = Some(button);
    }

    /// Returns `true` while a press or drag is in progress.
    pub fn is_pressed(&self) -> bool {
        self.mouse_pressing || self.mouse_dragging
    }

    /// Clear the press-related flags and stop tracking.
    ///
    /// Unlike [`reset`](Self::reset), this keeps the last pressed button around
    /// for inspection after a release.
    pub fn release(&mut self) {
        self.mouse_pressing = false;
        self.mouse_dragging = false;
        self.mouse_hovering = false;
        self.concerned = false;
    }

    /// Clear every flag, including `concerned` and the pressed button.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_implies_hover() {
        let mut state = InteractionState::default();
        state.press(PointerButton::Right);
        assert!(state.mouse_hovering, "a pressed container is hovered");
        assert!(state.mouse_pressing);
        assert_eq!(state.mouse_button_pressed, Some(PointerButton::Right));
        assert!(state.is_pressed());
    }

    #[test]
    fn dragging_alone_counts_as_pressed() {
        let state = InteractionState {
            mouse_dragging: true,
            ..InteractionState::default()
        };
        assert!(state.is_pressed());
    }

    #[test]
    fn release_keeps_button() {
        let mut state = InteractionState {
            concerned: true,
            ..InteractionState::default()
        };
        state.press(PointerButton::Left);
        state.mouse_dragging = true;

        state.release();

        assert!(!state.concerned);
        assert!(!state.is_pressed());
        assert!(!state.mouse_hovering);
        assert_eq!(state.mouse_button_pressed, Some(PointerButton::Left));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = InteractionState {
            concerned: true,
            ..InteractionState::default()
        };
        state.press(PointerButton::Middle);
        state.mouse_dragging = true;

        state.reset();

        assert_eq!(state, InteractionState::default());
    }
}
