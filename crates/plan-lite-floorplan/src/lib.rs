// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Plan-Lite Floorplan
//!
//! The planar wall graph underlying both editor views: corners
//! (vertices), walls (edges), half-edges (directed, thickness-offset
//! wall sides) and rooms (closed half-edge cycles), plus the detection
//! pass that derives rooms from the graph.
//!
//! ## Ownership
//!
//! The [`Floorplan`] is an arena: it owns every corner, wall and
//! half-edge in id-keyed maps, and entities refer to each other by id.
//! Rooms and half-edge room assignments are derived state, regenerated
//! wholesale by every mutating operation; consumers never patch them.
//!
//! ## Edit model
//!
//! All mutation happens synchronously on the calling thread. Every
//! public mutating operation ends with one internal update pass that
//! recomputes half-edge geometry, re-runs room detection, reattaches
//! floor textures and fires the `updated_rooms` callbacks, so
//! observers always see a fully consistent graph.

mod corner;
mod detect;
mod document;
mod floorplan;
mod half_edge;
mod room;
mod wall;

pub use corner::Corner;
pub use document::{FloorplanDocument, SavedCorner, SavedWall};
pub use floorplan::{Floorplan, FloorplanEvents, RoomsUpdated};
pub use half_edge::HalfEdge;
pub use room::Room;
pub use wall::Wall;
