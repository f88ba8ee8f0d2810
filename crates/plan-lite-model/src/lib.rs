// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Plan-Lite Model
//!
//! Shared types and traits for the plan-lite floorplan engine: typed
//! entity ids, texture descriptors, item classification, mesh data,
//! configuration, dimension formatting, synchronous callback
//! registries, and the renderer backend contract.
//!
//! This crate sits at the bottom of the workspace so the graph engine
//! (`plan-lite-floorplan`), the item container (`plan-lite-scene`) and
//! the aggregate root (`plan-lite-design`) can exchange ids and events
//! without depending on each other.

pub mod config;
pub mod error;
pub mod events;
pub mod mesh;
pub mod types;
pub mod units;
pub mod view;

pub use config::PlanConfig;
pub use error::{PlanError, Result};
pub use events::{CallbackId, Callbacks};
pub use mesh::MeshData;
pub use types::{
    guid, CornerId, FloorTexture, HalfEdgeId, ItemId, ItemMetadata, ItemType, WallId, WallTexture,
};
pub use units::{format_cm, DimUnit};
pub use view::{HitTest, PlanView};
