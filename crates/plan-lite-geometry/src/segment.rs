// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point/segment math: projection, distance, angles, intersection.

use crate::EPSILON;
use nalgebra::{Point2, Vector2};

/// Distance between two points.
#[inline]
pub fn distance(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (b - a).norm()
}

/// Project a point onto a segment, clamped to the segment.
///
/// A degenerate segment (`a == b`) projects everything onto `a`.
#[inline]
pub fn closest_point_on_segment(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> Point2<f64> {
    let v = b - a;
    let len_sq = v.norm_squared();
    if len_sq < EPSILON {
        return *a;
    }

    let t = (p - a).dot(&v) / len_sq;
    if t < 0.0 {
        *a
    } else if t > 1.0 {
        *b
    } else {
        a + v * t
    }
}

/// Distance from a point to a segment (clamped to the endpoints).
#[inline]
pub fn distance_to_segment(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (p - closest_point_on_segment(p, a, b)).norm()
}

/// Signed angle from `v1` to `v2`, both anchored at the origin.
///
/// Returns a value in (-pi, pi]. The sign is negated relative to the
/// usual atan2 convention because the plan plane has y growing
/// downward: positive angles are clockwise turns on screen.
#[inline]
pub fn angle_between(v1: &Vector2<f64>, v2: &Vector2<f64>) -> f64 {
    let dot = v1.x * v2.x + v1.y * v2.y;
    let det = v1.x * v2.y - v1.y * v2.x;
    -det.atan2(dot)
}

/// [`angle_between`] shifted into [0, 2pi).
#[inline]
pub fn angle_2pi(v1: &Vector2<f64>, v2: &Vector2<f64>) -> f64 {
    let theta = angle_between(v1, v2);
    if theta < 0.0 {
        theta + 2.0 * std::f64::consts::PI
    } else {
        theta
    }
}

/// Strict segment intersection test.
///
/// Uses the classic CCW-orientation straddle test: true iff the two
/// segments' endpoints straddle each other. Collinear overlap is NOT
/// reported as an intersection; callers that care about touching
/// endpoints must handle that case themselves.
#[inline]
pub fn segments_intersect(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    p3: &Point2<f64>,
    p4: &Point2<f64>,
) -> bool {
    fn ccw(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> bool {
        (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
    }

    ccw(p1, p3, p4) != ccw(p2, p3, p4) && ccw(p1, p2, p3) != ccw(p1, p2, p4)
}

/// Intersection of two infinite lines given as point + direction.
///
/// Returns `None` when the lines are parallel or nearly so (the miter
/// fallback case for collinear walls).
#[inline]
pub fn line_intersection(
    p1: &Point2<f64>,
    d1: &Vector2<f64>,
    p2: &Point2<f64>,
    d2: &Vector2<f64>,
) -> Option<Point2<f64>> {
    let denom = d1.x * d2.y - d1.y * d2.x;
    if denom.abs() < 1e-6 {
        return None;
    }

    let w = p2 - p1;
    let t = (w.x * d2.y - w.y * d2.x) / denom;
    Some(p1 + d1 * t)
}
