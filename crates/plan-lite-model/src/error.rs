// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types shared across the plan-lite workspace.

use crate::types::{CornerId, ItemId};
use thiserror::Error;

/// Result type alias for plan-lite operations.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors surfaced by the floorplan engine.
///
/// Graph-consistency faults (dangling references, unclosed room walks)
/// are recovered internally and logged; they never appear here. What
/// does appear is what a caller can act on: malformed documents, bad
/// item payloads, failed mesh loads.
#[derive(Error, Debug)]
pub enum PlanError {
    /// A saved design document could not be parsed or rebuilt.
    #[error("invalid design document: {0}")]
    Document(String),

    /// A wall in a document references a corner that does not exist.
    #[error("wall references missing corner {0}")]
    MissingCorner(CornerId),

    /// A wall was given the same corner for both endpoints.
    #[error("wall endpoints must be distinct corners")]
    DegenerateWall,

    /// An item carries a type code outside the known set.
    #[error("unknown item type code {0}")]
    UnknownItemType(u8),

    /// An operation referenced an item not present in the scene.
    #[error("item {0} not found in scene")]
    ItemNotFound(ItemId),

    /// A mesh fetch failed; surfaced through the item load lifecycle.
    #[error("mesh load failed for {url}: {reason}")]
    MeshLoad { url: String, reason: String },
}

impl PlanError {
    /// Create a document error.
    pub fn document(msg: impl Into<String>) -> Self {
        PlanError::Document(msg.into())
    }

    /// Create a mesh load error.
    pub fn mesh_load(url: impl Into<String>, reason: impl Into<String>) -> Self {
        PlanError::MeshLoad {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
