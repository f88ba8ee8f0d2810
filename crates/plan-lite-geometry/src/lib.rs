// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Plan-Lite Geometry
//!
//! Pure 2D math utilities underlying the floorplan engine: segment
//! projection and intersection, polygon orientation and containment
//! tests, and area/centroid computation.
//!
//! All functions are total: degenerate inputs (zero-length segments,
//! near-parallel lines) produce a finite best-effort result instead of
//! NaN or a panic, so nothing here can poison the render graph.
//!
//! Coordinates are plan-plane centimeters with y growing downward
//! (screen convention). The orientation predicates bake in that sign
//! convention; see [`is_clockwise`].

pub mod polygon;
pub mod segment;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use polygon::{
    centroid, is_clockwise, line_polygon_intersect, point_in_polygon, polygon_inside_polygon,
    polygon_outside_polygon, polygon_polygon_intersect, shoelace_area, signed_shoelace_area,
};
pub use segment::{
    angle_2pi, angle_between, closest_point_on_segment, distance, distance_to_segment,
    line_intersection, segments_intersect,
};

/// Tolerance for degenerate-geometry checks (squared lengths, miter
/// denominators). Coordinates are centimeters, so this is far below
/// anything a user can draw.
pub const EPSILON: f64 = 1e-9;
