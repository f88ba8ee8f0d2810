// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The mesh-fetching collaborator boundary.

use plan_lite_model::ItemId;

/// Host-side mesh fetcher.
///
/// The scene never fetches anything itself; it hands each new item's
/// model URL to the `MeshSource` and the host later reports the result
/// through [`crate::Scene::finish_load`] with the same item id. The
/// source may resolve requests in any order, and owes no completion at
/// all for items that have since been removed. Timeouts and retries
/// are the source's concern.
pub trait MeshSource {
    /// Begin fetching `url` on behalf of `item`.
    fn request(&mut self, item: &ItemId, url: &str);
}

/// A source that fetches nothing. Items added through it stay
/// `Pending` forever unless the host completes them by hand; useful
/// for tests and for documents whose meshes are resolved elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMeshSource;

impl MeshSource for NullMeshSource {
    fn request(&mut self, _item: &ItemId, _url: &str) {}
}

impl<F> MeshSource for F
where
    F: FnMut(&ItemId, &str),
{
    fn request(&mut self, item: &ItemId, url: &str) {
        self(item, url)
    }
}
