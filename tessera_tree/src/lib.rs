// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tessera_tree --heading-base-level=0

//! Tessera Tree: a retained tree of rectangular containers.
//!
//! This crate owns the data model that the Tessera dispatcher works on:
//!
//! - A generational arena of containers addressed by [`NodeId`]. Ids double as
//!   liveness tokens, so code holding one across a hook can tell whether that
//!   exact container was removed in the meantime.
//! - Scroll composites: a container with a `content` sub-tree holding its
//!   logical children, plus optional right and bottom companion panes that
//!   take the outer edges of its area for themselves.
//! - Optional per-container hooks ([`Callbacks`]) that receive the whole tree
//!   mutably.
//! - The read-only walks the dispatcher is built on:
//!   [`ContainerTree::pierced_containers`] (hit testing, deepest first) and
//!   [`ContainerTree::concerned_containers`].
//! - The paint traversal, [`ContainerTree::paint_root`].
//!
//! ## Not a layout engine
//!
//! Nothing here computes geometry. A layout pass is expected to write each
//! container's `real_bounds`; hit testing and painting only read them.
//!
//! ## One traversal shape
//!
//! All walks ask [`ContainerTree::descent`] how to go below a container. A
//! plain container yields its children; a scroll composite yields its
//! content's children, then its companions, together with the rectangles that
//! gate hit testing and cull painting.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use tessera_tree::{Container, ContainerTree, Side};
//!
//! let mut tree = ContainerTree::new();
//! let window = tree
//!     .insert(None, Container::with_bounds(Rect::new(0.0, 0.0, 200.0, 200.0)))
//!     .unwrap();
//! let (list, _) = tree
//!     .insert_scroll(Some(window), Container::with_bounds(Rect::new(0.0, 0.0, 100.0, 200.0)))
//!     .unwrap();
//! let row = tree
//!     .insert(Some(list), Container::with_bounds(Rect::new(0.0, 0.0, 100.0, 20.0)))
//!     .unwrap();
//! let bar = tree
//!     .set_companion(list, Side::Right, Some(Container::with_bounds(Rect::new(92.0, 0.0, 100.0, 200.0))))
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(tree.pierced_containers(Point::new(10.0, 10.0)), vec![row, list, window]);
//! // The scrollbar takes the right edge away from the rows.
//! assert_eq!(tree.pierced_containers(Point::new(95.0, 10.0)), vec![bar, list, window]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod callbacks;
mod error;
mod paint;
mod shape;
mod tree;
mod types;
mod util;
mod walk;

pub use callbacks::{Callbacks, Handler, HandlerSlot, PierceTest, ScrollHandler};
pub use error::TreeError;
pub use shape::{ellipse_pierce, shape_pierce};
pub use tree::{ContainerTree, Descent};
pub use types::{Container, ContainerFlags, ContainerKind, NodeId, ScrollParts, Side};

pub use tessera_event_state::drag::DragThreshold;
pub use tessera_event_state::interaction::InteractionState;
pub use tessera_event_state::pointer::{PointerButton, PointerState};
