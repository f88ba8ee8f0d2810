// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One directed, thickness-offset side of a wall.

use plan_lite_geometry::Point2;
use plan_lite_model::HalfEdgeId;

/// A half-edge: one side of a wall, traversed in one direction.
///
/// Half-edges are derived state. Their offset polygon and room links
/// are recomputed by the floorplan's update pass after every mutation;
/// nothing here is persisted.
///
/// The polygon is four points: the interior (room-side) start/end,
/// offset half the wall thickness toward the room and mitered where an
/// adjacent boundary wall meets the shared corner, and the exterior
/// start/end offset the other way.
#[derive(Clone, Debug)]
pub struct HalfEdge {
    id: HalfEdgeId,
    room: Option<usize>,
    next: Option<HalfEdgeId>,
    prev: Option<HalfEdgeId>,
    interior_start: Point2<f64>,
    interior_end: Point2<f64>,
    exterior_start: Point2<f64>,
    exterior_end: Point2<f64>,
}

impl HalfEdge {
    pub fn new(id: HalfEdgeId) -> Self {
        Self {
            id,
            room: None,
            next: None,
            prev: None,
            interior_start: Point2::origin(),
            interior_end: Point2::origin(),
            exterior_start: Point2::origin(),
            exterior_end: Point2::origin(),
        }
    }

    pub fn id(&self) -> &HalfEdgeId {
        &self.id
    }

    /// Index of the room this half-edge bounds, if any. Set by room
    /// detection; `None` for orphan edges.
    pub fn room(&self) -> Option<usize> {
        self.room
    }

    /// The next half-edge along the room boundary.
    pub fn next(&self) -> Option<&HalfEdgeId> {
        self.next.as_ref()
    }

    /// The previous half-edge along the room boundary.
    pub fn prev(&self) -> Option<&HalfEdgeId> {
        self.prev.as_ref()
    }

    /// The opposite side of the same wall.
    pub fn opposite_id(&self) -> HalfEdgeId {
        self.id.opposite()
    }

    pub fn interior_start(&self) -> Point2<f64> {
        self.interior_start
    }

    pub fn interior_end(&self) -> Point2<f64> {
        self.interior_end
    }

    pub fn exterior_start(&self) -> Point2<f64> {
        self.exterior_start
    }

    pub fn exterior_end(&self) -> Point2<f64> {
        self.exterior_end
    }

    /// The offset polygon, wound interior edge first.
    pub fn corners(&self) -> [Point2<f64>; 4] {
        [
            self.interior_start,
            self.interior_end,
            self.exterior_end,
            self.exterior_start,
        ]
    }

    /// Length of the interior (room-side) edge.
    pub fn interior_length(&self) -> f64 {
        plan_lite_geometry::distance(&self.interior_start, &self.interior_end)
    }

    pub(crate) fn clear_links(&mut self) {
        self.room = None;
        self.next = None;
        self.prev = None;
    }

    pub(crate) fn set_links(
        &mut self,
        room: usize,
        prev: HalfEdgeId,
        next: HalfEdgeId,
    ) {
        self.room = Some(room);
        self.prev = Some(prev);
        self.next = Some(next);
    }

    pub(crate) fn set_geometry(
        &mut self,
        interior_start: Point2<f64>,
        interior_end: Point2<f64>,
        exterior_start: Point2<f64>,
        exterior_end: Point2<f64>,
    ) {
        self.interior_start = interior_start;
        self.interior_end = interior_end;
        self.exterior_start = exterior_start;
        self.exterior_end = exterior_end;
    }
}
