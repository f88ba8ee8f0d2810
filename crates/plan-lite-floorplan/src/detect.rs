// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room detection: planar face tracing over the wall graph.
//!
//! For every directed corner pair the walk repeatedly chooses, at each
//! corner, the outgoing edge making the smallest clockwise turn from
//! the incoming edge's reverse direction, closing when it returns to
//! its start. Duplicate loops (rotations of an already-found cycle)
//! are removed, and clockwise loops are discarded as the unbounded
//! exterior face; what remains are the interior rooms.
//!
//! Detection is total recompute: every edit re-walks the whole graph.
//! Plans are tens of walls, so O(edges) per edit is fine and the code
//! stays free of incremental-patch state.

use crate::corner::Corner;
use crate::wall::Wall;
use log::debug;
use plan_lite_geometry::{angle_2pi, is_clockwise, Point2};
use plan_lite_model::{CornerId, WallId};
use rustc_hash::{FxHashMap, FxHashSet};

/// Find the corner cycles of all interior rooms, in walk order,
/// sorted deterministically.
pub(crate) fn find_loops(
    corners: &FxHashMap<CornerId, Corner>,
    walls: &FxHashMap<WallId, Wall>,
) -> Vec<Vec<CornerId>> {
    let mut adjacency: FxHashMap<&CornerId, Vec<&CornerId>> = FxHashMap::default();
    for wall in walls.values() {
        if !corners.contains_key(wall.corner1()) || !corners.contains_key(wall.corner2()) {
            // Dangling reference; recovered by skipping the wall.
            debug!("skipping wall {} with missing corner", wall.id());
            continue;
        }
        adjacency.entry(wall.corner1()).or_default().push(wall.corner2());
        adjacency.entry(wall.corner2()).or_default().push(wall.corner1());
    }

    // A closed walk can visit at most every wall once.
    let max_len = walls.len();

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut loops: Vec<Vec<CornerId>> = Vec::new();

    for (first, neighbors) in &adjacency {
        for second in neighbors {
            let Some(found) = tightest_loop(first, second, &adjacency, corners, max_len) else {
                continue;
            };

            let key = canonical_key(&found);
            if !seen.insert(key) {
                continue;
            }

            let polygon: Vec<Point2<f64>> = found
                .iter()
                .filter_map(|id| corners.get(id).map(Corner::position))
                .collect();
            // Clockwise winding marks the exterior face.
            if polygon.len() >= 3 && !is_clockwise(&polygon) {
                loops.push(found);
            }
        }
    }

    loops.sort_by_key(|l| canonical_key(l));
    loops
}

/// Walk from the directed pair `first -> second`, always taking the
/// tightest clockwise turn, until the walk closes back at `first`.
///
/// Returns `None` for dead ends, non-simple walks and walks exceeding
/// the edge count (a malformed graph must never spin forever; the
/// overflow is treated as "no room for this pair").
fn tightest_loop(
    first: &CornerId,
    second: &CornerId,
    adjacency: &FxHashMap<&CornerId, Vec<&CornerId>>,
    corners: &FxHashMap<CornerId, Corner>,
    max_len: usize,
) -> Option<Vec<CornerId>> {
    let mut path = vec![first.clone(), second.clone()];
    let mut visited: FxHashSet<&CornerId> = FxHashSet::default();
    visited.insert(second);

    let mut prev = first;
    let mut curr = second;

    loop {
        if path.len() > max_len {
            debug!("unclosed room walk from {} capped at {} edges", first, max_len);
            return None;
        }

        let prev_pos = corners.get(prev)?.position();
        let curr_pos = corners.get(curr)?.position();

        let mut best: Option<(&CornerId, f64)> = None;
        for next in adjacency.get(curr)? {
            if *next == prev {
                continue;
            }
            if *next != first && visited.contains(*next) {
                continue;
            }

            let next_pos = corners.get(*next)?.position();
            let theta = angle_2pi(&(prev_pos - curr_pos), &(next_pos - curr_pos));
            if best.map_or(true, |(_, t)| theta < t) {
                best = Some((*next, theta));
            }
        }

        let (next, _) = best?;
        if next == first {
            return Some(path);
        }

        visited.insert(next);
        path.push((*next).clone());
        prev = curr;
        curr = next;
    }
}

/// Rotation-invariant (but orientation-sensitive) loop key: the
/// lexicographically smallest rotation of the id sequence. Keeping
/// orientation distinct lets the clockwise filter see both traversals
/// of a boundary and drop only the exterior one.
fn canonical_key(loop_ids: &[CornerId]) -> String {
    let n = loop_ids.len();
    let mut best: Option<String> = None;
    for shift in 0..n {
        let rotated: Vec<&str> = (0..n)
            .map(|i| loop_ids[(i + shift) % n].as_str())
            .collect();
        let key = rotated.join("-");
        if best.as_ref().map_or(true, |b| key < *b) {
            best = Some(key);
        }
    }
    best.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(
        points: &[(&str, f64, f64)],
        edges: &[(&str, &str)],
    ) -> (FxHashMap<CornerId, Corner>, FxHashMap<WallId, Wall>) {
        let mut corners = FxHashMap::default();
        for (id, x, y) in points {
            let cid = CornerId::from(*id);
            corners.insert(cid.clone(), Corner::new(cid, *x, *y));
        }
        let mut walls = FxHashMap::default();
        for (i, (a, b)) in edges.iter().enumerate() {
            let wid = WallId::from(format!("w{i}").as_str());
            walls.insert(
                wid.clone(),
                Wall::new(wid, CornerId::from(*a), CornerId::from(*b), 10.0),
            );
        }
        (corners, walls)
    }

    #[test]
    fn test_rectangle_yields_one_loop() {
        let (corners, walls) = build(
            &[("a", 0.0, 0.0), ("b", 500.0, 0.0), ("c", 500.0, 400.0), ("d", 0.0, 400.0)],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
        );

        let loops = find_loops(&corners, &walls);
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 4);
    }

    #[test]
    fn test_split_rectangle_yields_two_loops() {
        let (corners, walls) = build(
            &[
                ("a", 0.0, 0.0),
                ("b", 250.0, 0.0),
                ("c", 500.0, 0.0),
                ("d", 500.0, 400.0),
                ("e", 250.0, 400.0),
                ("f", 0.0, 400.0),
            ],
            &[
                ("a", "b"),
                ("b", "c"),
                ("c", "d"),
                ("d", "e"),
                ("e", "f"),
                ("f", "a"),
                ("b", "e"),
            ],
        );

        let loops = find_loops(&corners, &walls);
        assert_eq!(loops.len(), 2);
        for l in &loops {
            assert_eq!(l.len(), 4);
        }
    }

    #[test]
    fn test_open_polyline_yields_no_loops() {
        let (corners, walls) = build(
            &[("a", 0.0, 0.0), ("b", 100.0, 0.0), ("c", 100.0, 100.0)],
            &[("a", "b"), ("b", "c")],
        );
        assert!(find_loops(&corners, &walls).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let (corners, walls) = build(
            &[("a", 0.0, 0.0), ("b", 500.0, 0.0), ("c", 500.0, 400.0), ("d", 0.0, 400.0)],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
        );

        let first = find_loops(&corners, &walls);
        let second = find_loops(&corners, &walls);
        let keys = |loops: &[Vec<CornerId>]| {
            loops.iter().map(|l| canonical_key(l)).collect::<Vec<_>>()
        };
        assert_eq!(keys(&first), keys(&second));
    }
}
