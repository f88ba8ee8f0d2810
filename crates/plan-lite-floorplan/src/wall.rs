// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An edge between two corners, with thickness and two textured faces.

use plan_lite_model::{CornerId, HalfEdgeId, WallId, WallTexture};

/// A wall: an undirected edge between two distinct corners.
///
/// Every wall owns exactly two half-edges, created alongside it and
/// identified by [`HalfEdgeId`]; the front half-edge runs
/// corner1 -> corner2. A wall becomes invalid and is removed when
/// either endpoint corner is deleted.
#[derive(Clone, Debug)]
pub struct Wall {
    id: WallId,
    corner1: CornerId,
    corner2: CornerId,
    thickness: f64,
    front_texture: WallTexture,
    back_texture: WallTexture,
}

impl Wall {
    pub fn new(id: WallId, corner1: CornerId, corner2: CornerId, thickness: f64) -> Self {
        Self {
            id,
            corner1,
            corner2,
            thickness,
            front_texture: WallTexture::default(),
            back_texture: WallTexture::default(),
        }
    }

    pub fn id(&self) -> &WallId {
        &self.id
    }

    pub fn corner1(&self) -> &CornerId {
        &self.corner1
    }

    pub fn corner2(&self) -> &CornerId {
        &self.corner2
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn front_edge_id(&self) -> HalfEdgeId {
        HalfEdgeId::new(self.id.clone(), true)
    }

    pub fn back_edge_id(&self) -> HalfEdgeId {
        HalfEdgeId::new(self.id.clone(), false)
    }

    pub fn front_texture(&self) -> &WallTexture {
        &self.front_texture
    }

    pub fn back_texture(&self) -> &WallTexture {
        &self.back_texture
    }

    pub fn set_front_texture(&mut self, texture: WallTexture) {
        self.front_texture = texture;
    }

    pub fn set_back_texture(&mut self, texture: WallTexture) {
        self.back_texture = texture;
    }

    pub fn has_corner(&self, id: &CornerId) -> bool {
        self.corner1 == *id || self.corner2 == *id
    }

    /// The endpoint opposite to `id`, or `None` if `id` is not an
    /// endpoint of this wall.
    pub fn other_corner(&self, id: &CornerId) -> Option<&CornerId> {
        if self.corner1 == *id {
            Some(&self.corner2)
        } else if self.corner2 == *id {
            Some(&self.corner1)
        } else {
            None
        }
    }

    /// Whether this wall connects the same corner pair as another,
    /// in either direction.
    pub fn same_corners(&self, other: &Wall) -> bool {
        (self.corner1 == other.corner1 && self.corner2 == other.corner2)
            || (self.corner1 == other.corner2 && self.corner2 == other.corner1)
    }

    pub(crate) fn replace_corner(&mut self, from: &CornerId, to: CornerId) {
        if self.corner1 == *from {
            self.corner1 = to;
        } else if self.corner2 == *from {
            self.corner2 = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(id: &str, a: &str, b: &str) -> Wall {
        Wall::new(WallId::from(id), CornerId::from(a), CornerId::from(b), 10.0)
    }

    #[test]
    fn test_other_corner() {
        let w = wall("w", "a", "b");
        assert_eq!(w.other_corner(&CornerId::from("a")), Some(&CornerId::from("b")));
        assert_eq!(w.other_corner(&CornerId::from("b")), Some(&CornerId::from("a")));
        assert_eq!(w.other_corner(&CornerId::from("c")), None);
    }

    #[test]
    fn test_same_corners_is_direction_insensitive() {
        assert!(wall("w1", "a", "b").same_corners(&wall("w2", "b", "a")));
        assert!(!wall("w1", "a", "b").same_corners(&wall("w2", "a", "c")));
    }

    #[test]
    fn test_replace_corner() {
        let mut w = wall("w", "a", "b");
        w.replace_corner(&CornerId::from("a"), CornerId::from("c"));
        assert!(w.has_corner(&CornerId::from("c")));
        assert!(!w.has_corner(&CornerId::from("a")));
    }
}
