// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A movable vertex in the wall graph.

use plan_lite_geometry::Point2;
use plan_lite_model::{CornerId, WallId};

/// A corner: a vertex two or more walls meet at.
///
/// Corners are plain data; graph-aware operations (moving with
/// dependent recompute, merging into a nearby corner) live on
/// [`crate::Floorplan`], which owns the arena and pushes the update.
#[derive(Clone, Debug)]
pub struct Corner {
    id: CornerId,
    position: Point2<f64>,
    wall_ids: Vec<WallId>,
}

impl Corner {
    pub fn new(id: CornerId, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Point2::new(x, y),
            wall_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> &CornerId {
        &self.id
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    /// Ids of the walls incident to this corner, in attach order.
    pub fn wall_ids(&self) -> &[WallId] {
        &self.wall_ids
    }

    pub fn distance_from(&self, p: &Point2<f64>) -> f64 {
        plan_lite_geometry::distance(&self.position, p)
    }

    pub(crate) fn set_position(&mut self, x: f64, y: f64) {
        self.position = Point2::new(x, y);
    }

    pub(crate) fn attach_wall(&mut self, wall: WallId) {
        if !self.wall_ids.contains(&wall) {
            self.wall_ids.push(wall);
        }
    }

    pub(crate) fn detach_wall(&mut self, wall: &WallId) {
        self.wall_ids.retain(|w| w != wall);
    }
}
