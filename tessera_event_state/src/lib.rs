// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tessera_event_state --heading-base-level=0

//! Tessera Event State: the per-container state the dispatcher mutates.
//!
//! This crate holds the small, plain-data pieces of interaction tracking that
//! every container in a Tessera tree carries, plus the pointer record shared
//! by the whole tree:
//!
//! - [`interaction`]: the `concerned`/hover/press/drag flags of one container.
//! - [`drag`]: per-axis thresholds that promote a press into a drag.
//! - [`pointer`]: pointer buttons and the root's recorded pointer positions.
//!
//! None of these types know about trees or callbacks. The container tree stores
//! them, and the dispatcher in `tessera_dispatch` drives the transitions.
//!
//! ## Press, drag, release
//!
//! ```rust
//! use kurbo::Point;
//! use tessera_event_state::drag::DragThreshold;
//! use tessera_event_state::interaction::InteractionState;
//! use tessera_event_state::pointer::{PointerButton, PointerState};
//!
//! let mut pointer = PointerState::default();
//! let mut state = InteractionState::default();
//! let threshold = DragThreshold::new(4.0, 4.0);
//!
//! pointer.press_at(Point::new(10.0, 10.0), PointerButton::Left);
//! state.press(PointerButton::Left);
//!
//! pointer.move_to(Point::new(12.0, 10.0));
//! assert!(!threshold.is_exceeded(pointer.displacement()));
//!
//! pointer.move_to(Point::new(15.0, 10.0));
//! assert!(threshold.is_exceeded(pointer.displacement()));
//! state.mouse_dragging = true;
//!
//! state.reset();
//! assert!(!state.is_pressed());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod interaction;
pub mod pointer;
