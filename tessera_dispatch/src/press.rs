// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;
use tessera_tree::{ContainerFlags, ContainerTree, HandlerSlot};

use crate::active::set_active;
use crate::event::{DispatchOutcome, PointerEvent};
use crate::motion::handle_mouse_motion;
use crate::obstruction::{may_receive, top_parent};

/// Dispatch a button press or scroll input.
///
/// Records the press position, then walks the hit containers from the top,
/// honoring the obstruction flags. Every container reached becomes concerned.
///
/// - Scroll input calls each reached container's fine-scroll hook with the
///   negated delta and re-runs motion dispatch after each hook, since
///   scrolling may move content under the pointer. No press state changes.
/// - Unrecognized buttons stop at marking containers concerned.
/// - Recognized buttons mark the container hovered and pressed. Containers
///   with a `MouseDown` hook, or flagged
///   [`WANTS_KEY_EVENTS`](ContainerFlags::WANTS_KEY_EVENTS), are collected
///   and their hook runs.
///
/// Finally the collected containers become exactly the active ones (see
/// [`set_active`]). Scroll input collects nothing, and so clears it.
pub fn handle_mouse_button_press(tree: &mut ContainerTree, event: &PointerEvent) -> DispatchOutcome {
    if tree.root().is_none() {
        return DispatchOutcome::Ignored;
    }
    let position = event.position;
    let _span = tracing::trace_span!("handle_mouse_button_press", x = position.x, y = position.y).entered();
    match event.button() {
        Some(button) => tree.pointer_mut().press_at(position, button),
        None => tree.pointer_mut().anchor_at(position),
    }
    let pierced = tree.pierced_containers(position);
    let top_parent = top_parent(tree, &pierced);
    let mut downed = HashSet::new();

    for (index, &p) in pierced.iter().enumerate() {
        if !may_receive(tree, &pierced, index, top_parent) {
            continue;
        }
        let Some(container) = tree.get_mut(p) else {
            continue;
        };
        container.state.concerned = true;

        if let Some(scroll) = event.scroll_delta() {
            if tree.invoke_fine_scroll(p, scroll.handler_delta(), scroll.from_pointer_device) {
                tracing::trace!(?p, delta = scroll.delta, "fine scroll");
                handle_mouse_motion(tree, position);
            }
            continue;
        }
        let Some(button) = event.button().filter(|b| b.is_recognized()) else {
            continue;
        };

        container.state.press(button);
        let wants_keys = container.flags.contains(ContainerFlags::WANTS_KEY_EVENTS);
        if wants_keys || tree.has_handler(p, HandlerSlot::MouseDown) {
            downed.insert(p);
            tracing::debug!(?p, ?button, "mouse down");
            tree.invoke(p, HandlerSlot::MouseDown);
        }
    }

    set_active(tree, &downed);
    DispatchOutcome::Dispatched
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use kurbo::{Point, Rect};
    use tessera_tree::{Callbacks, Container, PointerButton};

    use crate::event::ScrollDelta;

    #[test]
    fn press_marks_topmost_pressed_and_active() {
        let mut tree = ContainerTree::new();
        let root = tree.insert(None, Container::with_bounds(Rect::new(0.0, 0.0, 100.0, 100.0))).unwrap();
        let field = tree
            .insert(
                Some(root),
                Container::with_bounds(Rect::new(0.0, 0.0, 50.0, 50.0))
                    .with_flags(ContainerFlags::WANTS_KEY_EVENTS),
            )
            .unwrap();

        let outcome = handle_mouse_button_press(&mut tree, &PointerEvent::press((5.0, 5.0), PointerButton::Left));
        assert_eq!(outcome, DispatchOutcome::Dispatched);

        let state = tree.get(field).unwrap().state;
        assert!(state.concerned && state.mouse_pressing && state.mouse_hovering);
        assert_eq!(state.mouse_button_pressed, Some(PointerButton::Left));
        assert!(tree.get(field).unwrap().active, "key-event containers capture presses");
        assert!(!tree.get(root).unwrap().state.concerned, "root is obstructed");
        assert!(tree.pointer().left_mouse_down);
        assert_eq!(tree.pointer().initial, Point::new(5.0, 5.0));
    }

    #[test]
    fn unrecognized_button_only_concerns() {
        let mut tree = ContainerTree::new();
        let root = tree.insert(None, Container::with_bounds(Rect::new(0.0, 0.0, 10.0, 10.0))).unwrap();
        handle_mouse_button_press(
            &mut tree,
            &PointerEvent::press((5.0, 5.0), PointerButton::from_code(0x113)),
        );
        let state = tree.get(root).unwrap().state;
        assert!(state.concerned);
        assert!(!state.mouse_pressing);
        assert!(!tree.pointer().left_mouse_down);
    }

    #[test]
    fn scroll_hands_negated_delta_and_presses_nothing() {
        let got = Rc::new(Cell::new(None));
        let sink = got.clone();
        let mut tree = ContainerTree::new();
        let root = tree
            .insert(
                None,
                Container::with_bounds(Rect::new(0.0, 0.0, 10.0, 10.0)).with_callbacks(
                    Callbacks::default()
                        .with_fine_scroll(move |_, _, delta, from_device| sink.set(Some((delta, from_device)))),
                ),
            )
            .unwrap();

        handle_mouse_button_press(&mut tree, &PointerEvent::scroll((5.0, 5.0), ScrollDelta::vertical(2.5)));
        assert_eq!(got.get(), Some((kurbo::Vec2::new(0.0, -2.5), true)));
        let state = tree.get(root).unwrap().state;
        assert!(state.concerned, "scroll targets become concerned");
        assert!(!state.mouse_pressing && !state.mouse_dragging);
    }

    #[test]
    fn no_root_is_ignored() {
        let mut tree = ContainerTree::new();
        assert_eq!(
            handle_mouse_button_press(&mut tree, &PointerEvent::press((0.0, 0.0), PointerButton::Left)),
            DispatchOutcome::Ignored
        );
    }
}
