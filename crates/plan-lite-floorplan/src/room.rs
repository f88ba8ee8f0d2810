// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A closed cycle of half-edges enclosing floor area.

use plan_lite_geometry::{centroid, shoelace_area, Point2};
use plan_lite_model::{CornerId, FloorTexture, HalfEdgeId};

/// A detected room.
///
/// Rooms are recomputed wholesale by every topology change; a `Room`
/// is a snapshot of one detection pass, never mutated in place. The
/// corner cycle is stored in walk order (counter-clockwise under the
/// y-down convention) and must be non-self-intersecting for the
/// containment tests and floor normals derived from it to be correct.
#[derive(Clone, Debug)]
pub struct Room {
    corner_ids: Vec<CornerId>,
    polygon: Vec<Point2<f64>>,
    edge_ids: Vec<HalfEdgeId>,
    floor_texture: Option<FloorTexture>,
}

impl Room {
    pub(crate) fn new(
        corner_ids: Vec<CornerId>,
        polygon: Vec<Point2<f64>>,
        edge_ids: Vec<HalfEdgeId>,
    ) -> Self {
        Self {
            corner_ids,
            polygon,
            edge_ids,
            floor_texture: None,
        }
    }

    /// The corner cycle in boundary walk order.
    pub fn corner_ids(&self) -> &[CornerId] {
        &self.corner_ids
    }

    /// Corner positions at detection time, in walk order.
    pub fn polygon(&self) -> &[Point2<f64>] {
        &self.polygon
    }

    /// The bounding half-edges, one per consecutive corner pair.
    pub fn edge_ids(&self) -> &[HalfEdgeId] {
        &self.edge_ids
    }

    /// Identity key for texture reattachment: the sorted corner ids
    /// joined with commas. Stable across re-detection as long as the
    /// same corners bound the room.
    pub fn uuid(&self) -> String {
        let mut ids: Vec<&str> = self.corner_ids.iter().map(|id| id.as_str()).collect();
        ids.sort_unstable();
        ids.join(",")
    }

    /// Floor area in square centimeters (shoelace formula).
    pub fn area(&self) -> f64 {
        shoelace_area(&self.polygon)
    }

    /// Area-weighted center of the floor polygon.
    pub fn centroid(&self) -> Point2<f64> {
        centroid(&self.polygon)
    }

    pub fn floor_texture(&self) -> Option<&FloorTexture> {
        self.floor_texture.as_ref()
    }

    pub(crate) fn set_floor_texture(&mut self, texture: Option<FloorTexture>) {
        self.floor_texture = texture;
    }
}
