// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Rectangle collision and non-overlapping placement.
//!
//! Pure functions over `kurbo::Rect`. Placement is a greedy deterministic
//! search: start at the desired origin and nudge by a fixed step vector
//! until the candidate clears every existing rectangle or the attempt
//! budget runs out. Identical inputs always produce identical output.

use kurbo::{Point, Rect, Vec2};

use crate::settings;

/// Test whether two rectangles overlap once each is inflated by `padding`.
///
/// Separating-axis formulation: there is no overlap iff one rectangle sits
/// entirely to the left/right/above/below the other by at least `padding`.
pub fn rects_collide(a: Rect, b: Rect, padding: f64) -> bool {
    let separated = a.x1 + padding <= b.x0
        || b.x1 + padding <= a.x0
        || a.y1 + padding <= b.y0
        || b.y1 + padding <= a.y0;
    !separated
}

/// Find a position for `desired` that does not collide with any rectangle
/// in `existing`.
///
/// The candidate starts at `desired`'s origin and advances by
/// `(STEP_X, STEP_Y)` on any collision. After `MAX_ATTEMPTS` nudges the
/// last candidate is accepted even if it still collides; in pathological
/// dense packings overlap is the accepted fallback rather than
/// non-termination.
pub fn place_non_overlapping(existing: &[Rect], desired: Rect) -> Point {
    let step = Vec2::new(settings::collision::STEP_X, settings::collision::STEP_Y);
    let size = desired.size();
    let mut origin = desired.origin();

    for _ in 0..settings::collision::MAX_ATTEMPTS {
        let candidate = Rect::from_origin_size(origin, size);
        let collides = existing
            .iter()
            .any(|rect| rects_collide(candidate, *rect, settings::collision::PADDING));
        if !collides {
            return origin;
        }
        origin += step;
    }

    tracing::debug!(
        "placement budget exhausted, accepting ({}, {})",
        origin.x,
        origin.y
    );
    origin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin_size(Point::new(x, y), (w, h))
    }

    #[test]
    fn collision_is_symmetric() {
        let a = rect(0.0, 0.0, 100.0, 50.0);
        let b = rect(110.0, 10.0, 100.0, 50.0);
        // 10 units apart: collides with padding 24, not with padding 5
        assert!(rects_collide(a, b, 24.0));
        assert!(rects_collide(b, a, 24.0));
        assert!(!rects_collide(a, b, 5.0));
        assert!(!rects_collide(b, a, 5.0));
    }

    #[test]
    fn padding_inflates_both_axes() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Separated horizontally by exactly the padding: no collision
        assert!(!rects_collide(a, rect(34.0, 0.0, 10.0, 10.0), 24.0));
        // One unit closer: collision
        assert!(rects_collide(a, rect(33.0, 0.0, 10.0, 10.0), 24.0));
        // Same on the vertical axis
        assert!(!rects_collide(a, rect(0.0, 34.0, 10.0, 10.0), 24.0));
        assert!(rects_collide(a, rect(0.0, 33.0, 10.0, 10.0), 24.0));
        // Diagonal separation on one axis is enough
        assert!(!rects_collide(a, rect(40.0, 40.0, 10.0, 10.0), 24.0));
    }

    #[test]
    fn overlapping_rects_collide_with_zero_padding() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(50.0, 50.0, 100.0, 100.0);
        assert!(rects_collide(a, b, 0.0));
    }

    #[test]
    fn empty_canvas_returns_desired_origin() {
        let desired = rect(100.0, 100.0, 320.0, 120.0);
        assert_eq!(
            place_non_overlapping(&[], desired),
            Point::new(100.0, 100.0)
        );
    }

    #[test]
    fn placement_is_deterministic() {
        let existing = vec![rect(100.0, 100.0, 320.0, 180.0)];
        let desired = rect(120.0, 110.0, 320.0, 120.0);
        let first = place_non_overlapping(&existing, desired);
        let second = place_non_overlapping(&existing, desired);
        assert_eq!(first, second);
    }

    #[test]
    fn placement_advances_by_step_vector() {
        let existing = vec![rect(100.0, 100.0, 320.0, 180.0)];
        // Desired collides with the existing node; the result must lie on
        // the ray desired + k * (32, 28) for some k >= 1.
        let desired = rect(100.0, 100.0, 320.0, 120.0);
        let placed = place_non_overlapping(&existing, desired);
        let k = (placed.x - 100.0) / 32.0;
        assert!(k >= 1.0);
        assert_eq!(placed.x, 100.0 + k * 32.0);
        assert_eq!(placed.y, 100.0 + k * 28.0);
        // And the accepted candidate is collision-free
        let candidate = Rect::from_origin_size(placed, (320.0, 120.0));
        assert!(!rects_collide(candidate, existing[0], 24.0));
    }

    #[test]
    fn budget_exhaustion_accepts_final_candidate() {
        // A wall of rectangles covering the whole search ray forces the
        // search to give up after MAX_ATTEMPTS steps.
        let span = 200.0 * 32.0 + 400.0;
        let wall = vec![rect(-1000.0, -1000.0, span + 2000.0, 200.0 * 28.0 + 2000.0)];
        let desired = rect(0.0, 0.0, 320.0, 120.0);
        let placed = place_non_overlapping(&wall, desired);
        // 200 steps of (32, 28) from the origin
        assert_eq!(placed, Point::new(200.0 * 32.0, 200.0 * 28.0));
        let candidate = Rect::from_origin_size(placed, (320.0, 120.0));
        assert!(rects_collide(candidate, wall[0], 24.0));
    }
}
