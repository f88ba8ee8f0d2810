// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Plan-Lite Design
//!
//! The aggregate root: one [`Design`] owns one wall graph
//! ([`plan_lite_floorplan::Floorplan`]) and one item container
//! ([`plan_lite_scene::Scene`]) and is the serialization boundary for
//! the whole document.
//!
//! Renderer front-ends (the 2D plan editor and the 3D walkthrough)
//! observe the design through its callback registries rather than
//! being driven by it; [`watch`] wires a per-view [`DirtyFlag`] to
//! every mutation event so each render loop redraws only when
//! something actually changed.

mod design;
mod document;
mod sync;

pub use design::Design;
pub use document::{DesignDocument, SavedItem};
pub use sync::{watch, DirtyFlag};
