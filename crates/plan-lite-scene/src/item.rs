// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A placed furniture or fixture instance.

use plan_lite_geometry::{Point3, Vector3};
use plan_lite_model::{ItemId, ItemMetadata, ItemType, MeshData};

/// Load lifecycle state of an item's 3D mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Created; mesh fetch in flight.
    Pending,
    /// Mesh resolved and attached.
    Loaded,
    /// Mesh fetch failed; the item is about to be removed.
    LoadFailed,
}

/// One placed item: a 3D model reference with a transform and
/// placement constraints.
///
/// Position is in plan coordinates (centimeters, x/z the floor plane,
/// y up); rotation is about the vertical axis in radians. Scale is
/// per-axis relative to the mesh's native size.
#[derive(Clone, Debug)]
pub struct Item {
    id: ItemId,
    item_type: ItemType,
    model_url: String,
    metadata: ItemMetadata,
    position: Point3<f64>,
    rotation: f64,
    scale: Vector3<f64>,
    fixed: bool,
    state: LoadState,
    mesh: Option<MeshData>,
}

impl Item {
    pub(crate) fn new(
        id: ItemId,
        item_type: ItemType,
        model_url: String,
        metadata: ItemMetadata,
    ) -> Self {
        Self {
            id,
            item_type,
            model_url,
            metadata,
            position: Point3::origin(),
            rotation: 0.0,
            scale: Vector3::new(1.0, 1.0, 1.0),
            fixed: false,
            state: LoadState::Pending,
            mesh: None,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn model_url(&self) -> &str {
        &self.model_url
    }

    pub fn metadata(&self) -> &ItemMetadata {
        &self.metadata
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Rotation about the vertical axis, radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn scale(&self) -> Vector3<f64> {
        self.scale
    }

    /// Fixed items are locked against interactive movement.
    pub fn fixed(&self) -> bool {
        self.fixed
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The resolved mesh, present once the item is `Loaded`.
    pub fn mesh(&self) -> Option<&MeshData> {
        self.mesh.as_ref()
    }

    /// Target dimensions (width, height, depth) in centimeters: the
    /// mesh's native bounds under the current scale. `None` until the
    /// mesh has loaded.
    pub fn dimensions(&self) -> Option<(f64, f64, f64)> {
        let (w, h, d) = self.mesh.as_ref()?.bounds()?;
        Some((w * self.scale.x, h * self.scale.y, d * self.scale.z))
    }

    pub(crate) fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.position = Point3::new(x, y, z);
    }

    pub(crate) fn set_rotation(&mut self, radians: f64) {
        self.rotation = radians;
    }

    pub(crate) fn set_scale(&mut self, x: f64, y: f64, z: f64) {
        self.scale = Vector3::new(x, y, z);
    }

    /// Rescale so the mesh's native bounds reach the given dimensions.
    /// Without a loaded mesh (or with degenerate bounds) the scale is
    /// left untouched.
    pub(crate) fn resize(&mut self, width: f64, height: f64, depth: f64) -> bool {
        let Some((w, h, d)) = self.mesh.as_ref().and_then(MeshData::bounds) else {
            return false;
        };
        if w <= 0.0 || h <= 0.0 || d <= 0.0 {
            return false;
        }
        self.scale = Vector3::new(width / w, height / h, depth / d);
        true
    }

    pub(crate) fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed;
    }

    pub(crate) fn attach_mesh(&mut self, mesh: MeshData) {
        self.mesh = Some(mesh);
        self.state = LoadState::Loaded;
    }

    pub(crate) fn mark_failed(&mut self) {
        self.state = LoadState::LoadFailed;
    }
}
