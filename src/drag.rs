// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Drag gesture state for repositioning a single node.
//!
//! A drag captures the pointer position and the node position at gesture
//! start; every subsequent move maps the pointer delta onto the node. The
//! canvas widget holds at most one active [`Drag`] and clears it on
//! pointer-up or pointer-cancel. No collision avoidance runs during a
//! drag; overlap caused by manual repositioning is allowed.

use kurbo::Point;

use crate::model::NodeId;

/// An in-progress drag of one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    /// The node being dragged
    pub node: NodeId,
    /// Pointer position at gesture start
    pointer_start: Point,
    /// Node position at gesture start
    node_start: Point,
    /// Node position as of the most recent move
    current: Point,
}

impl Drag {
    /// Begin a drag of `node` from its current position
    pub fn begin(node: NodeId, pointer: Point, node_position: Point) -> Self {
        Self {
            node,
            pointer_start: pointer,
            node_start: node_position,
            current: node_position,
        }
    }

    /// Compute the node position for the current pointer position and
    /// remember it
    pub fn update(&mut self, pointer: Point) -> Point {
        self.current = self.node_start + (pointer - self.pointer_start);
        self.current
    }

    /// The node position as of the latest [`Drag::update`]
    pub fn current_position(&self) -> Point {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_follows_pointer_delta() {
        let node = NodeId::next();
        let mut drag = Drag::begin(node, Point::new(200.0, 200.0), Point::new(100.0, 100.0));

        assert_eq!(drag.update(Point::new(210.0, 195.0)), Point::new(110.0, 95.0));
        assert_eq!(drag.update(Point::new(150.0, 260.0)), Point::new(50.0, 160.0));
        assert_eq!(drag.current_position(), Point::new(50.0, 160.0));
    }

    #[test]
    fn zero_delta_keeps_start_position() {
        let node = NodeId::next();
        let mut drag = Drag::begin(node, Point::new(5.0, 5.0), Point::new(40.0, 40.0));
        assert_eq!(drag.update(Point::new(5.0, 5.0)), Point::new(40.0, 40.0));
    }
}
