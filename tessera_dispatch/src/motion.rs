// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion dispatch: enter, motion, leave, drag start, and drag.

use kurbo::Point;
use tessera_tree::{ContainerTree, HandlerSlot};

use crate::obstruction::{may_receive, top_parent};

/// Dispatch pointer motion to `position`.
///
/// Updates the pointer record, then runs two passes:
///
/// 1. Every concerned container is updated. Pressed containers promote to a
///    drag (`DragStart`) once the displacement from the press crosses their
///    threshold on either axis, and dragging ones receive `Drag`. Otherwise a
///    container still under the pointer receives `MouseMotion`, and one that
///    is not receives `MouseLeaves` and loses all interaction state.
/// 2. Hit containers that may receive events (see the obstruction flags) and
///    are not concerned yet become concerned and hovered, and receive
///    `MouseEnters`. While any concerned container is pressed, only
///    containers that are already concerned pass this step.
///
/// Containers removed by a hook are skipped for the rest of the call. A tree
/// without a root is left untouched.
///
/// ```
/// use core::cell::Cell;
/// use std::rc::Rc;
///
/// use kurbo::{Point, Rect};
/// use tessera_dispatch::handle_mouse_motion;
/// use tessera_tree::{Callbacks, Container, ContainerTree, HandlerSlot};
///
/// let entered = Rc::new(Cell::new(0));
/// let seen = entered.clone();
/// let mut tree = ContainerTree::new();
/// tree.insert(
///     None,
///     Container::with_bounds(Rect::new(0.0, 0.0, 10.0, 10.0)).with_callbacks(
///         Callbacks::default().with(HandlerSlot::MouseEnters, move |_, _| seen.set(seen.get() + 1)),
///     ),
/// )
/// .unwrap();
///
/// handle_mouse_motion(&mut tree, Point::new(5.0, 5.0));
/// handle_mouse_motion(&mut tree, Point::new(6.0, 5.0));
/// assert_eq!(entered.get(), 1);
/// ```
pub fn handle_mouse_motion(tree: &mut ContainerTree, position: Point) {
    if tree.root().is_none() {
        return;
    }
    let _span = tracing::trace_span!("handle_mouse_motion", x = position.x, y = position.y).entered();
    tree.pointer_mut().move_to(position);
    let pierced = tree.pierced_containers(position);
    let top_parent = top_parent(tree, &pierced);
    let concerned = tree.concerned_containers();

    for &c in &concerned {
        let Some(container) = tree.get(c) else {
            tracing::trace!(?c, "concerned container removed earlier in this pass");
            continue;
        };
        let state = container.state;
        let threshold = container.drag_threshold;
        if state.is_pressed() {
            if !threshold.is_exceeded(tree.pointer().displacement()) {
                continue;
            }
            if state.mouse_dragging {
                tree.invoke(c, HandlerSlot::Drag);
            } else if let Some(container) = tree.get_mut(c) {
                container.state.mouse_dragging = true;
                tracing::debug!(?c, "drag start");
                tree.invoke(c, HandlerSlot::DragStart);
            }
        } else if pierced.contains(&c) {
            tree.invoke(c, HandlerSlot::MouseMotion);
        } else {
            if let Some(container) = tree.get_mut(c) {
                container.state.mouse_hovering = false;
            }
            tracing::debug!(?c, "mouse leaves");
            tree.invoke(c, HandlerSlot::MouseLeaves);
            if let Some(container) = tree.get_mut(c) {
                container.state.reset();
            }
        }
    }

    let any_pressed = concerned
        .iter()
        .any(|&c| tree.get(c).is_some_and(|c| c.state.is_pressed()));

    for (index, &p) in pierced.iter().enumerate() {
        let Some(container) = tree.get(p) else {
            continue;
        };
        let already = container.state.concerned;
        if any_pressed && !already {
            continue;
        }
        if !may_receive(tree, &pierced, index, top_parent) || already {
            continue;
        }
        if let Some(container) = tree.get_mut(p) {
            container.state.concerned = true;
            container.state.mouse_hovering = true;
        }
        tracing::debug!(?p, "mouse enters");
        tree.invoke(p, HandlerSlot::MouseEnters);
    }
}

/// The pointer entered the surface at `position`.
pub fn pointer_entered(tree: &mut ContainerTree, position: Point) {
    handle_mouse_motion(tree, position);
}

/// The pointer moved to `position`.
pub fn pointer_moved(tree: &mut ContainerTree, position: Point) {
    handle_mouse_motion(tree, position);
}

/// The pointer left the surface.
///
/// Runs motion dispatch at a point outside every finite rectangle, so every
/// hovered container that is not pressed receives `MouseLeaves`.
pub fn pointer_left(tree: &mut ContainerTree) {
    handle_mouse_motion(tree, Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY));
}
