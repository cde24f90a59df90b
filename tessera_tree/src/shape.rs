// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape-based hit predicates.
//!
//! A container is hit when its bounds contain the pointer. These helpers build
//! `handles_pierced` predicates for containers whose visible outline is not a
//! rectangle, such as round buttons or diamond-shaped handles.
//!
//! ```
//! use kurbo::{Circle, Point, Rect};
//! use tessera_tree::{Callbacks, Container, ContainerTree, shape_pierce};
//!
//! let mut tree = ContainerTree::new();
//! let mut knob = Container::with_bounds(Rect::new(100.0, 100.0, 120.0, 120.0));
//! knob.callbacks.handles_pierced = Some(shape_pierce(Circle::new((10.0, 10.0), 10.0)));
//! let knob = tree.insert(None, knob).unwrap();
//!
//! assert_eq!(tree.pierced_containers(Point::new(110.0, 110.0)), vec![knob]);
//! // Inside the bounds, outside the circle.
//! assert!(tree.pierced_containers(Point::new(101.0, 101.0)).is_empty());
//! ```

use alloc::rc::Rc;
use kurbo::{Ellipse, Shape};

use crate::callbacks::PierceTest;

/// Hit test against `shape`, given relative to the container's `real_bounds` origin.
///
/// The shape moves with the container when layout changes its position, but
/// does not scale with it. See [`ellipse_pierce`] for an outline that tracks
/// the bounds' size.
pub fn shape_pierce<S: Shape + 'static>(shape: S) -> PierceTest {
    Rc::new(move |tree, id, point| {
        tree.get(id).is_some_and(|c| {
            let local = point - c.real_bounds.origin().to_vec2();
            shape.contains(local)
        })
    })
}

/// Hit test against the ellipse inscribed in the container's current bounds.
pub fn ellipse_pierce() -> PierceTest {
    Rc::new(|tree, id, point| {
        tree.get(id)
            .is_some_and(|c| Ellipse::from_rect(c.real_bounds).contains(point))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ContainerTree;
    use crate::types::Container;
    use kurbo::{BezPath, Point, Rect};

    #[test]
    fn relative_shape_follows_origin() {
        let mut tree = ContainerTree::new();
        let mut triangle = BezPath::new();
        triangle.move_to((0.0, 0.0));
        triangle.line_to((10.0, 0.0));
        triangle.line_to((0.0, 10.0));
        triangle.close_path();

        let mut c = Container::with_bounds(Rect::new(50.0, 50.0, 60.0, 60.0));
        c.callbacks.handles_pierced = Some(shape_pierce(triangle));
        let id = tree.insert(None, c).unwrap();

        assert!(!tree.pierced_containers(Point::new(52.0, 52.0)).is_empty());
        assert!(tree.pierced_containers(Point::new(58.0, 58.0)).is_empty(), "outside the hypotenuse");

        tree.get_mut(id).unwrap().real_bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(tree.pierced_containers(Point::new(2.0, 2.0)), alloc::vec![id]);
    }

    #[test]
    fn ellipse_tracks_bounds() {
        let mut tree = ContainerTree::new();
        let mut c = Container::with_bounds(Rect::new(0.0, 0.0, 40.0, 20.0));
        c.callbacks.handles_pierced = Some(ellipse_pierce());
        let id = tree.insert(None, c).unwrap();

        assert!(!tree.pierced_containers(Point::new(35.0, 10.0)).is_empty());
        assert!(tree.pierced_containers(Point::new(1.0, 1.0)).is_empty(), "corner is outside");

        tree.get_mut(id).unwrap().real_bounds = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert!(tree.pierced_containers(Point::new(35.0, 10.0)).is_empty());
    }
}
