// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The floorplan arena: owns all corners, walls and half-edges, runs
//! room detection, and notifies observers of every committed edit.

use crate::corner::Corner;
use crate::detect;
use crate::document::{FloorplanDocument, SavedCorner, SavedWall};
use crate::half_edge::HalfEdge;
use crate::room::Room;
use crate::wall::Wall;
use log::{debug, warn};
use plan_lite_geometry::{
    distance_to_segment, line_intersection, Point2, Vector2, EPSILON,
};
use plan_lite_model::{
    Callbacks, CornerId, FloorTexture, HalfEdgeId, PlanConfig, PlanError, Result, WallId,
};
use rustc_hash::FxHashMap;

/// Event fired after every committed edit, once rooms have been
/// re-derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomsUpdated {
    pub room_count: usize,
}

/// Observer registries for floorplan changes. Callbacks fire
/// synchronously on the mutating thread, in registration order.
#[derive(Default, Debug)]
pub struct FloorplanEvents {
    /// A corner was added interactively.
    pub new_corner: Callbacks<CornerId>,
    /// A wall was added interactively.
    pub new_wall: Callbacks<WallId>,
    /// Rooms were re-derived (fires after every committed edit).
    pub updated_rooms: Callbacks<RoomsUpdated>,
}

/// The half-edge planar graph for one design.
///
/// Every public mutating operation commits eagerly: it leaves the
/// graph, the derived half-edge polygons and the room list fully
/// consistent, then fires `events.updated_rooms`. There is no partial
/// or deferred state for consumers to observe.
///
/// The interactive edit cycle for a corner or wall drag is: mutate
/// positions with [`Floorplan::move_corner`] while dragging, then on
/// release call [`Floorplan::merge_with_closest`], which either merges
/// the dragged corner away or leaves it settled in place.
pub struct Floorplan {
    config: PlanConfig,
    corners: FxHashMap<CornerId, Corner>,
    walls: FxHashMap<WallId, Wall>,
    half_edges: FxHashMap<HalfEdgeId, HalfEdge>,
    rooms: Vec<Room>,
    /// Staged floor textures keyed by room identity (sorted corner
    /// ids); reattached to matching rooms on every update. Entries
    /// survive transient topology changes.
    floor_textures: FxHashMap<String, FloorTexture>,
    pub events: FloorplanEvents,
}

impl Floorplan {
    pub fn new(config: PlanConfig) -> Self {
        Self {
            config,
            corners: FxHashMap::default(),
            walls: FxHashMap::default(),
            half_edges: FxHashMap::default(),
            rooms: Vec::new(),
            floor_textures: FxHashMap::default(),
            events: FloorplanEvents::default(),
        }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn corner(&self, id: &CornerId) -> Option<&Corner> {
        self.corners.get(id)
    }

    pub fn corners(&self) -> impl Iterator<Item = &Corner> {
        self.corners.values()
    }

    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    pub fn wall(&self, id: &WallId) -> Option<&Wall> {
        self.walls.get(id)
    }

    pub fn wall_mut(&mut self, id: &WallId) -> Option<&mut Wall> {
        self.walls.get_mut(id)
    }

    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.values()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn half_edge(&self, id: &HalfEdgeId) -> Option<&HalfEdge> {
        self.half_edges.get(id)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Half-edges that bound a room, in arbitrary order.
    pub fn room_edges(&self) -> impl Iterator<Item = &HalfEdge> {
        self.half_edges.values().filter(|e| e.room().is_some())
    }

    /// Front half-edges of walls that bound no room at all; the 3D
    /// view still renders these as free-standing walls.
    pub fn orphan_edges(&self) -> impl Iterator<Item = &HalfEdge> {
        self.half_edges.values().filter(|e| {
            e.id().front
                && e.room().is_none()
                && self
                    .half_edges
                    .get(&e.id().opposite())
                    .map_or(true, |opp| opp.room().is_none())
        })
    }

    /// The corner nearest to a point within the corner-snap tolerance.
    pub fn overlapped_corner(&self, x: f64, y: f64) -> Option<&CornerId> {
        let p = Point2::new(x, y);
        self.corners
            .values()
            .map(|c| (c.id(), c.distance_from(&p)))
            .filter(|(_, d)| *d < self.config.corner_tolerance)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(id, _)| id)
    }

    /// The wall whose centerline passes within the snap tolerance of
    /// a point.
    pub fn overlapped_wall(&self, x: f64, y: f64) -> Option<&WallId> {
        let p = Point2::new(x, y);
        self.walls
            .values()
            .filter_map(|w| {
                let a = self.corners.get(w.corner1())?.position();
                let b = self.corners.get(w.corner2())?.position();
                Some((w.id(), distance_to_segment(&p, &a, &b)))
            })
            .filter(|(_, d)| *d < self.config.corner_tolerance)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(id, _)| id)
    }

    /// Center of the plan's corners; the 3D view targets the camera
    /// here.
    pub fn center(&self) -> Point2<f64> {
        if self.corners.is_empty() {
            return Point2::origin();
        }
        let (min, max) = self.extent();
        Point2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0)
    }

    /// Extent of the plan's corners as a (width, depth) vector.
    pub fn size(&self) -> Vector2<f64> {
        if self.corners.is_empty() {
            return Vector2::zeros();
        }
        let (min, max) = self.extent();
        Vector2::new(max.x - min.x, max.y - min.y)
    }

    fn extent(&self) -> (Point2<f64>, Point2<f64>) {
        let mut min = Point2::new(f64::MAX, f64::MAX);
        let mut max = Point2::new(f64::MIN, f64::MIN);
        for corner in self.corners.values() {
            min.x = min.x.min(corner.x());
            min.y = min.y.min(corner.y());
            max.x = max.x.max(corner.x());
            max.y = max.y.max(corner.y());
        }
        (min, max)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a free corner at the given position.
    pub fn new_corner(&mut self, x: f64, y: f64) -> CornerId {
        let id = CornerId::new();
        self.insert_corner(id.clone(), x, y);
        self.events.new_corner.fire(&id);
        self.update();
        id
    }

    /// Add a wall between two existing corners.
    ///
    /// Fails when either corner is missing or when both endpoints are
    /// the same corner; a wall's endpoints are always distinct.
    pub fn new_wall(&mut self, corner1: &CornerId, corner2: &CornerId) -> Result<WallId> {
        if corner1 == corner2 {
            return Err(PlanError::DegenerateWall);
        }
        if !self.corners.contains_key(corner1) {
            return Err(PlanError::MissingCorner(corner1.clone()));
        }
        if !self.corners.contains_key(corner2) {
            return Err(PlanError::MissingCorner(corner2.clone()));
        }

        let id = self.insert_wall(corner1.clone(), corner2.clone());
        self.events.new_wall.fire(&id);
        self.update();
        Ok(id)
    }

    /// Move a corner and commit the edit (dependent half-edges and
    /// rooms are recomputed before this returns).
    pub fn move_corner(&mut self, id: &CornerId, x: f64, y: f64) {
        match self.corners.get_mut(id) {
            Some(corner) => corner.set_position(x, y),
            None => {
                warn!("move_corner: unknown corner {id}");
                return;
            }
        }
        self.update();
    }

    /// Remove a corner together with every wall attached to it.
    pub fn remove_corner(&mut self, id: &CornerId) {
        let Some(corner) = self.corners.get(id) else {
            warn!("remove_corner: unknown corner {id}");
            return;
        };
        for wall_id in corner.wall_ids().to_vec() {
            self.remove_wall_inner(&wall_id);
        }
        self.corners.remove(id);
        self.update();
    }

    /// Remove a wall. Endpoint corners left with no walls are removed
    /// as well.
    pub fn remove_wall(&mut self, id: &WallId) {
        if !self.walls.contains_key(id) {
            warn!("remove_wall: unknown wall {id}");
            return;
        }
        self.remove_wall_inner(id);
        self.update();
    }

    /// Merge a dragged corner into the closest other corner within the
    /// snap tolerance.
    ///
    /// All walls attached to the dragged corner are re-pointed at the
    /// target; the dragged corner is deleted; and walls made degenerate
    /// or duplicate by the merge are dropped, so no wall ever ends up
    /// with identical endpoints. Returns whether a merge happened.
    pub fn merge_with_closest(&mut self, id: &CornerId) -> bool {
        let Some(corner) = self.corners.get(id) else {
            warn!("merge_with_closest: unknown corner {id}");
            return false;
        };
        let position = corner.position();

        let target = self
            .corners
            .values()
            .filter(|c| c.id() != id)
            .map(|c| (c.id().clone(), c.distance_from(&position)))
            .filter(|(_, d)| *d < self.config.corner_tolerance)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(target_id, _)| target_id);

        let Some(target) = target else {
            return false;
        };

        let attached = self
            .corners
            .get(id)
            .map(|c| c.wall_ids().to_vec())
            .unwrap_or_default();

        for wall_id in attached {
            let becomes_degenerate = self
                .walls
                .get(&wall_id)
                .and_then(|w| w.other_corner(id))
                .map_or(true, |other| *other == target);

            if becomes_degenerate {
                // This wall connected the two corners being merged;
                // it would collapse to zero length.
                self.remove_wall_inner(&wall_id);
                continue;
            }

            if let Some(wall) = self.walls.get_mut(&wall_id) {
                wall.replace_corner(id, target.clone());
            }
            if let Some(target_corner) = self.corners.get_mut(&target) {
                target_corner.attach_wall(wall_id);
            }
        }

        self.corners.remove(id);
        self.remove_duplicate_walls(&target);
        self.update();
        true
    }

    /// Drop everything; observers stay registered.
    pub fn clear(&mut self) {
        self.corners.clear();
        self.walls.clear();
        self.half_edges.clear();
        self.rooms.clear();
        self.floor_textures.clear();
        self.update();
    }

    // ========================================================================
    // Floor textures
    // ========================================================================

    /// Stage a floor texture for the room identified by its sorted
    /// corner-id key (see [`Room::uuid`]). Applied on the next update.
    pub fn set_floor_texture(&mut self, room_uuid: impl Into<String>, texture: FloorTexture) {
        self.floor_textures.insert(room_uuid.into(), texture);
        self.update();
    }

    pub fn get_floor_texture(&self, room_uuid: &str) -> Option<&FloorTexture> {
        self.floor_textures.get(room_uuid)
    }

    pub fn remove_floor_texture(&mut self, room_uuid: &str) {
        self.floor_textures.remove(room_uuid);
        self.update();
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Snapshot the graph as a persistable document section. Rooms and
    /// half-edges are derived state and are not included.
    pub fn to_document(&self) -> FloorplanDocument {
        let corners = self
            .corners
            .values()
            .map(|c| (c.id().to_string(), SavedCorner { x: c.x(), y: c.y() }))
            .collect();

        let mut walls: Vec<SavedWall> = self
            .walls
            .values()
            .map(|w| SavedWall {
                corner1: w.corner1().to_string(),
                corner2: w.corner2().to_string(),
                front_texture: w.front_texture().clone(),
                back_texture: w.back_texture().clone(),
            })
            .collect();
        // Map iteration order is arbitrary; keep the output stable.
        walls.sort_by(|a, b| (&a.corner1, &a.corner2).cmp(&(&b.corner1, &b.corner2)));

        let floor_textures = self
            .floor_textures
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        FloorplanDocument {
            corners,
            walls,
            floor_textures,
        }
    }

    /// Replace the graph with the contents of a document section.
    ///
    /// On error the floorplan is left cleared, never half-loaded; the
    /// caller decides the fallback.
    pub fn load_document(&mut self, doc: &FloorplanDocument) -> Result<()> {
        self.corners.clear();
        self.walls.clear();
        self.half_edges.clear();
        self.rooms.clear();
        self.floor_textures.clear();

        for (id, saved) in &doc.corners {
            self.insert_corner(CornerId::from(id.as_str()), saved.x, saved.y);
        }

        for saved in &doc.walls {
            let corner1 = CornerId::from(saved.corner1.as_str());
            let corner2 = CornerId::from(saved.corner2.as_str());
            if corner1 == corner2 {
                self.clear_silent();
                return Err(PlanError::DegenerateWall);
            }
            for id in [&corner1, &corner2] {
                if !self.corners.contains_key(id) {
                    let missing = id.clone();
                    self.clear_silent();
                    return Err(PlanError::MissingCorner(missing));
                }
            }
            let wall_id = self.insert_wall(corner1, corner2);
            if let Some(wall) = self.walls.get_mut(&wall_id) {
                wall.set_front_texture(saved.front_texture.clone());
                wall.set_back_texture(saved.back_texture.clone());
            }
        }

        for (uuid, texture) in &doc.floor_textures {
            self.floor_textures.insert(uuid.clone(), texture.clone());
        }

        self.update();
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    pub(crate) fn insert_corner(&mut self, id: CornerId, x: f64, y: f64) {
        self.corners.insert(id.clone(), Corner::new(id, x, y));
    }

    fn insert_wall(&mut self, corner1: CornerId, corner2: CornerId) -> WallId {
        let id = WallId::new();
        let wall = Wall::new(
            id.clone(),
            corner1.clone(),
            corner2.clone(),
            self.config.wall_thickness,
        );

        self.half_edges
            .insert(wall.front_edge_id(), HalfEdge::new(wall.front_edge_id()));
        self.half_edges
            .insert(wall.back_edge_id(), HalfEdge::new(wall.back_edge_id()));

        if let Some(c) = self.corners.get_mut(&corner1) {
            c.attach_wall(id.clone());
        }
        if let Some(c) = self.corners.get_mut(&corner2) {
            c.attach_wall(id.clone());
        }

        self.walls.insert(id.clone(), wall);
        id
    }

    /// Remove a wall without committing; shared by the public removal
    /// paths so each commits exactly once.
    fn remove_wall_inner(&mut self, id: &WallId) {
        let Some(wall) = self.walls.remove(id) else {
            return;
        };
        self.half_edges.remove(&wall.front_edge_id());
        self.half_edges.remove(&wall.back_edge_id());

        for corner_id in [wall.corner1(), wall.corner2()] {
            if let Some(corner) = self.corners.get_mut(corner_id) {
                corner.detach_wall(id);
            }
        }
        // A corner with no remaining walls has no remaining purpose.
        for corner_id in [wall.corner1().clone(), wall.corner2().clone()] {
            if self
                .corners
                .get(&corner_id)
                .is_some_and(|c| c.wall_ids().is_empty())
            {
                self.corners.remove(&corner_id);
            }
        }
    }

    /// After a merge, two walls may connect the same corner pair; keep
    /// the first, drop the rest.
    fn remove_duplicate_walls(&mut self, around: &CornerId) {
        let attached = self
            .corners
            .get(around)
            .map(|c| c.wall_ids().to_vec())
            .unwrap_or_default();

        let mut keep: Vec<WallId> = Vec::new();
        let mut drop: Vec<WallId> = Vec::new();
        for wall_id in attached {
            let Some(wall) = self.walls.get(&wall_id) else {
                continue;
            };
            let duplicate = keep
                .iter()
                .filter_map(|k| self.walls.get(k))
                .any(|kept| kept.same_corners(wall));
            if duplicate {
                drop.push(wall_id);
            } else {
                keep.push(wall_id);
            }
        }

        for wall_id in drop {
            debug!("dropping duplicate wall {wall_id} after merge");
            self.remove_wall_inner(&wall_id);
        }
    }

    fn clear_silent(&mut self) {
        self.corners.clear();
        self.walls.clear();
        self.half_edges.clear();
        self.rooms.clear();
        self.floor_textures.clear();
    }

    /// The commit boundary: re-derive everything and notify.
    fn update(&mut self) {
        self.detect_rooms();
        self.compute_edge_geometry();
        self.attach_floor_textures();
        self.events.updated_rooms.fire(&RoomsUpdated {
            room_count: self.rooms.len(),
        });
    }

    /// Re-run face tracing and rebuild the room list and half-edge
    /// boundary links from scratch.
    fn detect_rooms(&mut self) {
        for edge in self.half_edges.values_mut() {
            edge.clear_links();
        }
        self.rooms.clear();

        let loops = detect::find_loops(&self.corners, &self.walls);

        for corner_ids in loops {
            let Some(edge_ids) = self.loop_edges(&corner_ids) else {
                // A loop whose consecutive corners are not actually
                // connected indicates a malformed graph; treated as
                // "no room" rather than published half-built.
                warn!("discarding room walk with missing boundary wall");
                continue;
            };

            let polygon: Vec<Point2<f64>> = corner_ids
                .iter()
                .filter_map(|id| self.corners.get(id).map(Corner::position))
                .collect();
            if polygon.len() != corner_ids.len() {
                warn!("discarding room walk with dangling corner reference");
                continue;
            }

            let room_index = self.rooms.len();
            let n = edge_ids.len();
            for (i, edge_id) in edge_ids.iter().enumerate() {
                let prev = edge_ids[(i + n - 1) % n].clone();
                let next = edge_ids[(i + 1) % n].clone();
                if let Some(edge) = self.half_edges.get_mut(edge_id) {
                    edge.set_links(room_index, prev, next);
                }
            }

            self.rooms
                .push(Room::new(corner_ids, polygon, edge_ids));
        }
    }

    /// Map a corner loop to the half-edges tracing it: for each
    /// consecutive pair the connecting wall's side whose traversal
    /// direction matches the walk.
    fn loop_edges(&self, corner_ids: &[CornerId]) -> Option<Vec<HalfEdgeId>> {
        let n = corner_ids.len();
        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            let a = &corner_ids[i];
            let b = &corner_ids[(i + 1) % n];
            let wall = self
                .corners
                .get(a)?
                .wall_ids()
                .iter()
                .filter_map(|id| self.walls.get(id))
                .find(|w| w.other_corner(a) == Some(b))?;
            let front = wall.corner1() == a;
            edges.push(HalfEdgeId::new(wall.id().clone(), front));
        }
        Some(edges)
    }

    /// Recompute every half-edge's thickness-offset polygon.
    ///
    /// Boundary edges miter against their previous/next room edges at
    /// shared corners; orphan edges and near-parallel joins fall back
    /// to the plain perpendicular offset so a degenerate join can
    /// never produce a non-finite point.
    fn compute_edge_geometry(&mut self) {
        let mut computed: Vec<(HalfEdgeId, [Point2<f64>; 4])> = Vec::new();

        for edge in self.half_edges.values() {
            let Some((start, end)) = self.edge_endpoints(edge.id()) else {
                continue;
            };

            let v = end - start;
            let len = v.norm();
            if len < EPSILON {
                // Zero-length wall (transient during a merge): collapse
                // the polygon onto the corner instead of dividing by it.
                computed.push((edge.id().clone(), [start, end, end, start]));
                continue;
            }
            let dir = v / len;
            let normal = interior_normal(&dir);
            let thickness = self
                .walls
                .get(&edge.id().wall)
                .map_or(0.0, Wall::thickness);
            let offset = normal * (thickness / 2.0);

            let interior_start = self
                .miter_point(edge.prev(), &(start + offset), &dir, 1.0)
                .unwrap_or(start + offset);
            let interior_end = self
                .miter_point(edge.next(), &(start + offset), &dir, 1.0)
                .unwrap_or(end + offset);
            let exterior_start = self
                .miter_point(edge.prev(), &(start - offset), &dir, -1.0)
                .unwrap_or(start - offset);
            let exterior_end = self
                .miter_point(edge.next(), &(start - offset), &dir, -1.0)
                .unwrap_or(end - offset);

            computed.push((
                edge.id().clone(),
                [interior_start, interior_end, exterior_start, exterior_end],
            ));
        }

        for (id, [is, ie, es, ee]) in computed {
            if let Some(edge) = self.half_edges.get_mut(&id) {
                edge.set_geometry(is, ie, es, ee);
            }
        }
    }

    /// Intersect this edge's offset boundary line with a neighbor's;
    /// `side` is +1 for the interior offset, -1 for the exterior.
    /// Returns `None` (caller falls back to the plain offset) for open
    /// ends and near-collinear neighbors.
    fn miter_point(
        &self,
        neighbor: Option<&HalfEdgeId>,
        own_offset_point: &Point2<f64>,
        own_dir: &Vector2<f64>,
        side: f64,
    ) -> Option<Point2<f64>> {
        let neighbor = neighbor?;
        let (n_start, n_end) = self.edge_endpoints(neighbor)?;
        let v = n_end - n_start;
        let len = v.norm();
        if len < EPSILON {
            return None;
        }
        let n_dir = v / len;
        let n_thickness = self.walls.get(&neighbor.wall).map_or(0.0, Wall::thickness);
        let n_offset = interior_normal(&n_dir) * (n_thickness / 2.0) * side;

        line_intersection(own_offset_point, own_dir, &(n_start + n_offset), &n_dir)
    }

    /// Traversal endpoints of a half-edge: corner1 -> corner2 for the
    /// front side, reversed for the back.
    fn edge_endpoints(&self, id: &HalfEdgeId) -> Option<(Point2<f64>, Point2<f64>)> {
        let wall = self.walls.get(&id.wall)?;
        let c1 = self.corners.get(wall.corner1())?.position();
        let c2 = self.corners.get(wall.corner2())?.position();
        if id.front {
            Some((c1, c2))
        } else {
            Some((c2, c1))
        }
    }

    fn attach_floor_textures(&mut self) {
        for room in &mut self.rooms {
            let texture = self.floor_textures.get(&room.uuid()).cloned();
            room.set_floor_texture(texture);
        }
    }
}

/// Normal pointing to the interior (room) side of a traversal
/// direction. Rooms are traced counter-clockwise under the y-down
/// convention, which puts the interior on the left of the walk.
fn interior_normal(dir: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-dir.y, dir.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn rectangle_plan() -> (Floorplan, Vec<CornerId>) {
        let mut plan = Floorplan::new(PlanConfig::default());
        let points = [
            (0.0, 0.0),
            (500.0, 0.0),
            (500.0, 400.0),
            (0.0, 400.0),
        ];
        let ids: Vec<CornerId> = points.iter().map(|(x, y)| plan.new_corner(*x, *y)).collect();
        for i in 0..4 {
            plan.new_wall(&ids[i], &ids[(i + 1) % 4]).unwrap();
        }
        (plan, ids)
    }

    #[test]
    fn test_rectangle_produces_one_room() {
        let (plan, _) = rectangle_plan();
        assert_eq!(plan.rooms().len(), 1);

        let room = &plan.rooms()[0];
        assert!((room.area() - 200_000.0).abs() < 1e-6);
        assert_eq!(room.edge_ids().len(), 4);
        assert_eq!(plan.room_edges().count(), 4);
    }

    #[test]
    fn test_splitting_wall_produces_two_rooms() {
        let (mut plan, ids) = rectangle_plan();

        let top = plan.new_corner(250.0, 0.0);
        let bottom = plan.new_corner(250.0, 400.0);
        // Replace the top and bottom walls with split pairs.
        let top_wall = plan
            .walls()
            .find(|w| w.has_corner(&ids[0]) && w.has_corner(&ids[1]))
            .map(|w| w.id().clone())
            .unwrap();
        let bottom_wall = plan
            .walls()
            .find(|w| w.has_corner(&ids[2]) && w.has_corner(&ids[3]))
            .map(|w| w.id().clone())
            .unwrap();
        plan.remove_wall(&top_wall);
        plan.remove_wall(&bottom_wall);
        plan.new_wall(&ids[0], &top).unwrap();
        plan.new_wall(&top, &ids[1]).unwrap();
        plan.new_wall(&ids[2], &bottom).unwrap();
        plan.new_wall(&bottom, &ids[3]).unwrap();
        plan.new_wall(&top, &bottom).unwrap();

        assert_eq!(plan.rooms().len(), 2);
        for room in plan.rooms() {
            assert!((room.area() - 100_000.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_wall_rejected() {
        let mut plan = Floorplan::new(PlanConfig::default());
        let c = plan.new_corner(0.0, 0.0);
        assert!(matches!(
            plan.new_wall(&c, &c),
            Err(PlanError::DegenerateWall)
        ));
    }

    #[test]
    fn test_remove_corner_removes_attached_walls_and_rooms() {
        let (mut plan, ids) = rectangle_plan();
        plan.remove_corner(&ids[0]);

        assert_eq!(plan.rooms().len(), 0);
        assert_eq!(plan.wall_count(), 2);
        assert!(plan.corner(&ids[0]).is_none());
    }

    #[test]
    fn test_corner_merge_repoints_walls() {
        let (mut plan, ids) = rectangle_plan();

        // Drag a fifth corner with a wall onto an existing corner.
        let extra = plan.new_corner(600.0, 600.0);
        plan.new_wall(&extra, &ids[2]).unwrap();
        plan.move_corner(&extra, 2.0, 3.0);
        assert!(plan.merge_with_closest(&extra));

        assert!(plan.corner(&extra).is_none());
        // The dangling wall now runs corner0 -> corner2.
        assert!(plan
            .walls()
            .any(|w| w.has_corner(&ids[0]) && w.has_corner(&ids[2])));
        // No wall may have collapsed endpoints.
        for wall in plan.walls() {
            assert_ne!(wall.corner1(), wall.corner2());
        }
    }

    #[test]
    fn test_corner_merge_drops_collapsing_and_duplicate_walls() {
        let mut plan = Floorplan::new(PlanConfig::default());
        let a = plan.new_corner(0.0, 0.0);
        let b = plan.new_corner(100.0, 0.0);
        let c = plan.new_corner(100.0, 5.0);
        plan.new_wall(&a, &b).unwrap();
        plan.new_wall(&a, &c).unwrap();
        plan.new_wall(&b, &c).unwrap();

        // Dragging c onto b collapses b-c and duplicates a-b.
        assert!(plan.merge_with_closest(&c));
        assert_eq!(plan.wall_count(), 1);
        let wall = plan.walls().next().unwrap();
        assert!(wall.has_corner(&a) && wall.has_corner(&b));
    }

    #[test]
    fn test_merge_outside_tolerance_is_noop() {
        let (mut plan, _) = rectangle_plan();
        let lone = plan.new_corner(1000.0, 1000.0);
        assert!(!plan.merge_with_closest(&lone));
        assert!(plan.corner(&lone).is_some());
    }

    #[test]
    fn test_updated_rooms_fires_on_every_commit() {
        let mut plan = Floorplan::new(PlanConfig::default());
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        plan.events
            .updated_rooms
            .add(move |_| counter.set(counter.get() + 1));

        let a = plan.new_corner(0.0, 0.0);
        let b = plan.new_corner(100.0, 0.0);
        plan.new_wall(&a, &b).unwrap();
        plan.move_corner(&b, 150.0, 0.0);

        assert_eq!(fired.get(), 4);
    }

    #[test]
    fn test_detection_idempotent_via_move_in_place(){
        let (mut plan, ids) = rectangle_plan();
        let before: Vec<String> = plan.rooms().iter().map(Room::uuid).collect();
        let p = plan.corner(&ids[0]).unwrap().position();
        plan.move_corner(&ids[0], p.x, p.y);
        let after: Vec<String> = plan.rooms().iter().map(Room::uuid).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_floor_texture_reattaches_across_updates() {
        let (mut plan, ids) = rectangle_plan();
        let uuid = plan.rooms()[0].uuid();
        plan.set_floor_texture(uuid.clone(), FloorTexture::default());

        assert!(plan.rooms()[0].floor_texture().is_some());
        // Moving a corner re-runs detection; the texture must follow.
        plan.move_corner(&ids[0], -10.0, -10.0);
        assert_eq!(plan.rooms()[0].uuid(), uuid);
        assert!(plan.rooms()[0].floor_texture().is_some());
    }

    #[test]
    fn test_half_edge_polygons_finite_and_mitered() {
        let (plan, _) = rectangle_plan();
        let thickness = plan.config().wall_thickness;
        for edge in plan.room_edges() {
            for p in edge.corners() {
                assert!(p.x.is_finite() && p.y.is_finite());
            }
            // Mitering at right angles shortens the interior edge by a
            // half-thickness at each end relative to the centerline.
            let wall = plan.wall(&edge.id().wall).unwrap();
            let a = plan.corner(wall.corner1()).unwrap().position();
            let b = plan.corner(wall.corner2()).unwrap().position();
            let centerline = plan_lite_geometry::distance(&a, &b);
            assert!((edge.interior_length() - (centerline - thickness)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_center_and_size() {
        let (plan, _) = rectangle_plan();
        let center = plan.center();
        assert!((center.x - 250.0).abs() < 1e-9);
        assert!((center.y - 200.0).abs() < 1e-9);
        let size = plan.size();
        assert!((size.x - 500.0).abs() < 1e-9);
        assert!((size.y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_queries() {
        let (plan, ids) = rectangle_plan();
        assert_eq!(plan.overlapped_corner(3.0, 4.0), Some(&ids[0]));
        assert_eq!(plan.overlapped_corner(50.0, 50.0), None);
        assert!(plan.overlapped_wall(250.0, 2.0).is_some());
        assert_eq!(plan.overlapped_wall(250.0, 200.0), None);
    }
}
