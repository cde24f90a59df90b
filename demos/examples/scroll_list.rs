// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scrolling list with a scrollbar, driven by a scripted pointer session.
//!
//! Shows:
//! - a scroll composite whose right companion (the scrollbar) takes the
//!   right edge away from the rows,
//! - wheel input moving the rows under a still pointer, with enter/leave
//!   re-evaluated after each step,
//! - dragging the scrollbar thumb, and clicking a row,
//! - the paint order of the visible rows.
//!
//! Run:
//! - `RUST_LOG=tessera_dispatch=debug cargo run -p tessera_demos --example scroll_list`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect, Vec2};
use tessera_dispatch::{PointerEvent, ScrollDelta, dispatch, pointer_left, pointer_moved};
use tessera_tree::{Callbacks, Container, ContainerTree, HandlerSlot, NodeId, PointerButton, Side};
use tracing_subscriber::EnvFilter;

const ROW_HEIGHT: f64 = 24.0;
const ROWS: usize = 20;
const VIEW: Rect = Rect::new(0.0, 0.0, 200.0, 120.0);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let offset = Rc::new(Cell::new(0.0_f64));
    let mut tree = ContainerTree::new();
    let window = tree
        .insert(None, Container::with_bounds(Rect::new(0.0, 0.0, 400.0, 300.0)).labeled("window"))
        .expect("fresh tree");

    let scroll_offset = offset.clone();
    let (list, _) = tree
        .insert_scroll(
            Some(window),
            Container::with_bounds(VIEW)
                .labeled("list")
                .with_flags(tessera_tree::ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED)
                .with_callbacks(Callbacks::default().with_fine_scroll(move |tree, list, delta, _| {
                    scroll_by(tree, list, &scroll_offset, delta.y * ROW_HEIGHT);
                })),
        )
        .expect("window is alive");

    for i in 0..ROWS {
        let y = i as f64 * ROW_HEIGHT;
        let row = Container::with_bounds(Rect::new(0.0, y, VIEW.x1, y + ROW_HEIGHT))
            .labeled(format!("row {i}"))
            .with_callbacks(
                Callbacks::default()
                    .with(HandlerSlot::MouseEnters, |tree, id| {
                        tracing::info!(row = label(tree, id), "hover");
                    })
                    .with(HandlerSlot::Clicked, |tree, id| {
                        tracing::info!(row = label(tree, id), "clicked");
                    })
                    .with(HandlerSlot::Paint, |tree, id| {
                        tracing::debug!(row = label(tree, id), "paint");
                    }),
            );
        tree.insert(Some(list), row).expect("list is alive");
    }

    let drag_offset = offset.clone();
    let thumb_offset = offset.clone();
    let start = Rc::new(Cell::new(0.0_f64));
    let drag_start = start.clone();
    let bar = Container::with_bounds(Rect::new(VIEW.x1 - 12.0, VIEW.y0, VIEW.x1, VIEW.y1))
        .labeled("scrollbar")
        .with_callbacks(
            Callbacks::default()
                .with(HandlerSlot::MouseDown, move |_, _| drag_start.set(drag_offset.get()))
                .with(HandlerSlot::Drag, move |tree, _| {
                    let pointer = *tree.pointer();
                    let Some(list) = tree.find_by_label("list") else {
                        return;
                    };
                    let content_height = ROWS as f64 * ROW_HEIGHT;
                    let ratio = content_height / VIEW.height();
                    let wanted = start.get() + (pointer.current.y - pointer.initial.y) * ratio;
                    let current = thumb_offset.get();
                    scroll_by(tree, list, &thumb_offset, wanted - current);
                }),
        );
    tree.set_companion(list, Side::Right, Some(bar)).expect("list is a scroll composite");

    // Hover the third row, then wheel down twice without moving.
    pointer_moved(&mut tree, Point::new(50.0, 60.0));
    for _ in 0..2 {
        dispatch(&mut tree, &PointerEvent::scroll((50.0, 60.0), ScrollDelta::vertical(-1.0)));
    }

    // The rows under the scrollbar are not reachable; this hits the bar.
    if let Some(&top) = tree.pierced_containers(Point::new(195.0, 60.0)).first() {
        tracing::info!(top = label(&tree, top), "pierced over the right edge");
    }

    // Drag the thumb down by 30px. The first move only starts the drag.
    pointer_moved(&mut tree, Point::new(195.0, 10.0));
    dispatch(&mut tree, &PointerEvent::press((195.0, 10.0), PointerButton::Left));
    for y in [12.0, 25.0, 40.0] {
        pointer_moved(&mut tree, Point::new(195.0, y));
    }
    dispatch(&mut tree, &PointerEvent::release((195.0, 40.0), PointerButton::Left));

    // Click whatever row is now at the top.
    pointer_moved(&mut tree, Point::new(50.0, 5.0));
    dispatch(&mut tree, &PointerEvent::press((50.0, 5.0), PointerButton::Left));
    dispatch(&mut tree, &PointerEvent::release((50.0, 5.0), PointerButton::Left));
    pointer_left(&mut tree);

    tree.paint_root();
    println!("scrolled to {:.1}px, {} containers alive", offset.get(), tree.len());
}

/// Move every row of `list` up by `dy`, clamped to the content.
fn scroll_by(tree: &mut ContainerTree, list: NodeId, offset: &Cell<f64>, dy: f64) {
    let max = ROWS as f64 * ROW_HEIGHT - VIEW.height();
    let next = (offset.get() + dy).clamp(0.0, max);
    let shift = Vec2::new(0.0, offset.get() - next);
    offset.set(next);
    for row in tree.descent(list).primary {
        if let Some(c) = tree.get_mut(row) {
            c.real_bounds = c.real_bounds + shift;
        }
    }
}

fn label(tree: &ContainerTree, id: NodeId) -> &str {
    tree.get(id).and_then(|c| c.label.as_deref()).unwrap_or("?")
}
