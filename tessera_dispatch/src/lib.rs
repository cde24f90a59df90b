// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tessera_dispatch --heading-base-level=0

//! Tessera Dispatch: pointer input for a [`ContainerTree`].
//!
//! ## Overview
//!
//! Each entry point takes the tree and one raw event, recomputes which
//! containers are under the pointer ([`ContainerTree::pierced_containers`])
//! and which are being tracked ([`ContainerTree::concerned_containers`]),
//! and then drives the per-container interaction state, calling hooks on
//! the way:
//!
//! - [`handle_mouse_motion`]: enter, motion, leave, drag start, and drag.
//! - [`handle_mouse_button_press`]: mouse down, scroll, and active state.
//! - [`handle_mouse_button_release`]: leave, drag end, and click.
//! - [`set_active`]: make exactly a given set of containers active.
//! - [`dispatch`]: route a button or scroll event to the right one of the above.
//!
//! ## Obstruction
//!
//! Only the topmost hit container receives enter and press events. A container
//! further down the hit list opts in with
//! [`RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED`](tessera_tree::ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED),
//! or, if it is the direct parent of the topmost hit, with
//! [`RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED_BY_ONE`](tessera_tree::ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED_BY_ONE).
//!
//! ## Hooks may change the tree
//!
//! Hooks get the tree mutably and may remove any container, including the one
//! they run on. Dispatchers hold [`NodeId`](tessera_tree::NodeId)s, which go
//! stale on removal, and check them again after every hook. A removed
//! container simply stops receiving hooks; the rest of the walk goes on.
//!
//! ## Example
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use tessera_dispatch::{DispatchOutcome, PointerEvent, dispatch, pointer_moved};
//! use tessera_tree::{Callbacks, Container, ContainerTree, HandlerSlot, PointerButton};
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//! let mut tree = ContainerTree::new();
//! let window = tree
//!     .insert(None, Container::with_bounds(Rect::new(0.0, 0.0, 640.0, 480.0)))
//!     .unwrap();
//! tree.insert(
//!     Some(window),
//!     Container::with_bounds(Rect::new(10.0, 10.0, 90.0, 40.0)).with_callbacks(
//!         Callbacks::default().with(HandlerSlot::Clicked, move |_, _| counter.set(counter.get() + 1)),
//!     ),
//! )
//! .unwrap();
//!
//! pointer_moved(&mut tree, Point::new(20.0, 20.0));
//! dispatch(&mut tree, &PointerEvent::press((20.0, 20.0), PointerButton::Left));
//! let outcome = dispatch(&mut tree, &PointerEvent::release((20.0, 20.0), PointerButton::Left));
//!
//! assert_eq!(outcome, DispatchOutcome::Dispatched);
//! assert_eq!(clicks.get(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod active;
mod event;
mod motion;
mod obstruction;
mod press;
mod release;

pub use active::set_active;
pub use event::{DispatchOutcome, PointerEvent, PointerEventKind, ScrollAxis, ScrollDelta};
pub use motion::{handle_mouse_motion, pointer_entered, pointer_left, pointer_moved};
pub use press::handle_mouse_button_press;
pub use release::handle_mouse_button_release;

use tessera_tree::ContainerTree;

/// Route a button or scroll event.
///
/// Presses and scroll input go to [`handle_mouse_button_press`], releases to
/// [`handle_mouse_button_release`].
pub fn dispatch(tree: &mut ContainerTree, event: &PointerEvent) -> DispatchOutcome {
    match event.kind {
        PointerEventKind::Press(_) | PointerEventKind::Scroll(_) => handle_mouse_button_press(tree, event),
        PointerEventKind::Release(_) => handle_mouse_button_release(tree, event),
    }
}
