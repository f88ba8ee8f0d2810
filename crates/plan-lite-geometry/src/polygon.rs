// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon predicates: orientation, containment, intersection, area.
//!
//! Polygons are open vertex lists; the closing edge from the last
//! vertex back to the first is implied.

use crate::segment::segments_intersect;
use nalgebra::Point2;

/// Check whether a polygon's vertices wind clockwise.
///
/// The polygon is first shifted so all coordinates are non-negative,
/// then the edge sum `(x2 - x1) * (y2 + y1)` is accumulated over
/// consecutive pairs including the wrap-around edge. A sum >= 0 means
/// clockwise under the y-down screen convention.
///
/// This exact sign convention is load-bearing: room detection keeps
/// counter-clockwise loops as interior faces and discards clockwise
/// ones as the unbounded exterior. Flipping it reverses every
/// orientation decision downstream.
pub fn is_clockwise(points: &[Point2<f64>]) -> bool {
    let sub_x = points.iter().map(|p| p.x).fold(0.0, f64::min);
    let sub_y = points.iter().map(|p| p.y).fold(0.0, f64::min);

    let mut sum = 0.0;
    for i in 0..points.len() {
        let c1 = &points[i];
        let c2 = &points[(i + 1) % points.len()];
        sum += ((c2.x - sub_x) - (c1.x - sub_x)) * ((c2.y - sub_y) + (c1.y - sub_y));
    }
    sum >= 0.0
}

/// Ray-casting point-in-polygon test.
///
/// Casts a ray from `ray_start` to the query point and counts edge
/// crossings; an odd count means inside. When `ray_start` is `None` a
/// point 10cm outside the polygon's min corner (clamped to the
/// negative quadrant) is used, guaranteeing an exterior origin.
///
/// Known fragility: a ray passing exactly through a polygon vertex can
/// double-count the crossing. Callers supplying their own origin must
/// pick one that avoids the vertices.
pub fn point_in_polygon(
    p: &Point2<f64>,
    corners: &[Point2<f64>],
    ray_start: Option<Point2<f64>>,
) -> bool {
    let start = ray_start.unwrap_or_else(|| {
        let min_x = corners.iter().map(|c| c.x).fold(0.0, f64::min);
        let min_y = corners.iter().map(|c| c.y).fold(0.0, f64::min);
        Point2::new(min_x - 10.0, min_y - 10.0)
    });

    let mut intersects = 0;
    for i in 0..corners.len() {
        let c1 = &corners[i];
        let c2 = &corners[(i + 1) % corners.len()];
        if segments_intersect(&start, p, c1, c2) {
            intersects += 1;
        }
    }

    intersects % 2 == 1
}

/// Check whether every vertex of `inner` lies inside `outer`.
pub fn polygon_inside_polygon(
    inner: &[Point2<f64>],
    outer: &[Point2<f64>],
    ray_start: Point2<f64>,
) -> bool {
    inner
        .iter()
        .all(|c| point_in_polygon(c, outer, Some(ray_start)))
}

/// Check whether no vertex of `inner` lies inside `outer`.
pub fn polygon_outside_polygon(
    inner: &[Point2<f64>],
    outer: &[Point2<f64>],
    ray_start: Point2<f64>,
) -> bool {
    !inner
        .iter()
        .any(|c| point_in_polygon(c, outer, Some(ray_start)))
}

/// Check whether a segment crosses any edge of a polygon.
pub fn line_polygon_intersect(a: &Point2<f64>, b: &Point2<f64>, corners: &[Point2<f64>]) -> bool {
    for i in 0..corners.len() {
        let c1 = &corners[i];
        let c2 = &corners[(i + 1) % corners.len()];
        if segments_intersect(a, b, c1, c2) {
            return true;
        }
    }
    false
}

/// Check whether any edge of one polygon crosses an edge of another.
pub fn polygon_polygon_intersect(first: &[Point2<f64>], second: &[Point2<f64>]) -> bool {
    for i in 0..first.len() {
        let c1 = &first[i];
        let c2 = &first[(i + 1) % first.len()];
        if line_polygon_intersect(c1, c2, second) {
            return true;
        }
    }
    false
}

/// Signed shoelace area. Positive for counter-clockwise winding in
/// y-up coordinates; callers that only need magnitude should use
/// [`shoelace_area`].
pub fn signed_shoelace_area(points: &[Point2<f64>]) -> f64 {
    let mut sum = 0.0;
    for i in 0..points.len() {
        let c1 = &points[i];
        let c2 = &points[(i + 1) % points.len()];
        sum += c1.x * c2.y - c2.x * c1.y;
    }
    sum / 2.0
}

/// Absolute polygon area via the shoelace formula.
pub fn shoelace_area(points: &[Point2<f64>]) -> f64 {
    signed_shoelace_area(points).abs()
}

/// Polygon centroid (area-weighted). Falls back to the vertex mean for
/// degenerate (zero-area) polygons so the result stays finite.
pub fn centroid(points: &[Point2<f64>]) -> Point2<f64> {
    if points.is_empty() {
        return Point2::origin();
    }

    let area = signed_shoelace_area(points);
    if area.abs() < 1e-9 {
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sx, sy), p| (sx + p.x, sy + p.y));
        return Point2::new(sx / n, sy / n);
    }

    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..points.len() {
        let c1 = &points[i];
        let c2 = &points[(i + 1) % points.len()];
        let cross = c1.x * c2.y - c2.x * c1.y;
        cx += (c1.x + c2.x) * cross;
        cy += (c1.y + c2.y) * cross;
    }
    Point2::new(cx / (6.0 * area), cy / (6.0 * area))
}
