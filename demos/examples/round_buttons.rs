// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-rectangular hit areas, obstruction flags, and active state.
//!
//! A toolbar holds two round buttons and a text field. The toolbar opts into
//! presses that land on its direct children, so it can raise itself; presses
//! on the corners of a round button fall through to the toolbar instead.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p tessera_demos --example round_buttons`

use kurbo::{Circle, Point, Rect};
use tessera_dispatch::{PointerEvent, dispatch, pointer_moved};
use tessera_tree::{
    Callbacks, Container, ContainerFlags, ContainerTree, HandlerSlot, PointerButton, ellipse_pierce,
    shape_pierce,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut tree = ContainerTree::new();
    let toolbar = tree
        .insert(
            None,
            Container::with_bounds(Rect::new(0.0, 0.0, 300.0, 40.0))
                .labeled("toolbar")
                .with_flags(ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED_BY_ONE)
                .with_callbacks(Callbacks::default().with(HandlerSlot::MouseDown, |_, _| {
                    tracing::info!("toolbar raised");
                })),
        )
        .expect("fresh tree");

    let announce = |name: &'static str| {
        Callbacks::default()
            .with(HandlerSlot::Clicked, move |_, _| tracing::info!(name, "clicked"))
            .with(HandlerSlot::ActiveStatusChanged, move |tree, id| {
                let active = tree.get(id).is_some_and(|c| c.active);
                tracing::info!(name, active, "active status");
            })
    };

    let mut play = Container::with_bounds(Rect::new(4.0, 4.0, 36.0, 36.0))
        .labeled("play")
        .with_callbacks(announce("play"));
    play.callbacks.handles_pierced = Some(shape_pierce(Circle::new((16.0, 16.0), 16.0)));
    tree.insert(Some(toolbar), play).expect("toolbar is alive");

    let mut stop = Container::with_bounds(Rect::new(40.0, 4.0, 72.0, 36.0))
        .labeled("stop")
        .with_callbacks(announce("stop"));
    stop.callbacks.handles_pierced = Some(ellipse_pierce());
    tree.insert(Some(toolbar), stop).expect("toolbar is alive");

    let field = tree
        .insert(
            Some(toolbar),
            Container::with_bounds(Rect::new(80.0, 4.0, 296.0, 36.0))
                .labeled("search")
                .with_flags(ContainerFlags::WANTS_KEY_EVENTS)
                .with_callbacks(announce("search")),
        )
        .expect("toolbar is alive");

    for (x, y) in [(20.0, 20.0), (5.0, 5.0), (56.0, 20.0), (150.0, 20.0)] {
        let at = Point::new(x, y);
        let top = tree
            .pierced_containers(at)
            .first()
            .and_then(|&id| tree.get(id))
            .and_then(|c| c.label.clone());
        tracing::info!(x, y, top = top.as_deref().unwrap_or("-"), "clicking");
        pointer_moved(&mut tree, at);
        dispatch(&mut tree, &PointerEvent::press(at, PointerButton::Left));
        dispatch(&mut tree, &PointerEvent::release(at, PointerButton::Left));
    }

    let active: Vec<_> = tree
        .ids()
        .filter_map(|id| tree.get(id).filter(|c| c.active).and_then(|c| c.label.clone()))
        .collect();
    println!("active after the session: {active:?}");
    assert_eq!(tree.find_by_label("search"), Some(field));
}
