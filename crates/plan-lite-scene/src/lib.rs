// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Plan-Lite Scene
//!
//! Placed furniture items and the container that tracks their
//! asynchronous mesh-load lifecycle.
//!
//! ## Load lifecycle
//!
//! [`Scene::add_item`] creates an item in the `Pending` state, fires
//! the `item_loading` callbacks and hands the mesh URL to the host's
//! [`MeshSource`]. The host resolves the fetch on its own schedule and
//! reports back through [`Scene::finish_load`], which transitions the
//! item to `Loaded` (mesh attached, `item_loaded` fired) or removes it
//! (`item_load_error` fired). Completions may arrive in any order;
//! every lifecycle event carries the item's id, so results are always
//! attributed to the item that actually finished. A completion for an
//! item that was removed while its load was in flight is a no-op.
//!
//! All of this happens synchronously on the calling thread; the only
//! asynchronous boundary is the host-driven fetch itself.

mod item;
mod loader;
mod scene;

pub use item::{Item, LoadState};
pub use loader::{MeshSource, NullMeshSource};
pub use scene::{ItemLoadError, Scene, SceneEvents};
