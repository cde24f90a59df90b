// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tessera_tree::{ContainerFlags, ContainerTree, HandlerSlot};

use crate::event::{DispatchOutcome, PointerEvent};
use crate::motion::handle_mouse_motion;

/// Dispatch a button release.
///
/// Releases of unrecognized buttons (and scroll input) are ignored. Otherwise
/// each concerned container, in turn:
///
/// 1. receives `MouseLeaves` if the pointer is no longer over it,
/// 2. receives `DragEnd` if it was dragging,
/// 3. receives `Clicked` if it was not dragging, or if it was, is still under
///    the pointer, and is flagged [`DRAG_END_IS_CLICK`](ContainerFlags::DRAG_END_IS_CLICK),
/// 4. drops its press, drag, hover, and concern state.
///
/// A container removed by one of its own hooks is skipped from that point on
/// while the others are still processed. Motion dispatch then runs at the
/// release position.
pub fn handle_mouse_button_release(tree: &mut ContainerTree, event: &PointerEvent) -> DispatchOutcome {
    let Some(button) = event.button().filter(|b| b.is_recognized()) else {
        return DispatchOutcome::Ignored;
    };
    if tree.root().is_none() {
        return DispatchOutcome::Ignored;
    }
    let position = event.position;
    let _span = tracing::trace_span!("handle_mouse_button_release", x = position.x, y = position.y).entered();
    tree.pointer_mut().release_at(position, button);
    let concerned = tree.concerned_containers();
    let pierced = tree.pierced_containers(position);

    for &c in &concerned {
        if !tree.is_alive(c) {
            continue;
        }
        let under_pointer = pierced.contains(&c);
        if !under_pointer {
            tree.invoke(c, HandlerSlot::MouseLeaves);
        }

        let Some(dragging) = tree.get(c).map(|c| c.state.mouse_dragging) else {
            tracing::debug!(?c, "container removed by its leave hook");
            continue;
        };
        if dragging {
            tracing::debug!(?c, "drag end");
            tree.invoke(c, HandlerSlot::DragEnd);
        }

        let Some(container) = tree.get(c) else {
            tracing::debug!(?c, "container removed by its drag end hook");
            continue;
        };
        let dragging = container.state.mouse_dragging;
        let click_on_drag_end = container.flags.contains(ContainerFlags::DRAG_END_IS_CLICK);
        if (!dragging || (click_on_drag_end && under_pointer)) && tree.invoke(c, HandlerSlot::Clicked) {
            tracing::debug!(?c, "clicked");
        }

        let Some(container) = tree.get_mut(c) else {
            tracing::debug!(?c, "container removed by its click hook");
            continue;
        };
        container.state.release();
    }

    handle_mouse_motion(tree, position);
    DispatchOutcome::Dispatched
}
