// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The item container and its load lifecycle.

use crate::item::{Item, LoadState};
use crate::loader::MeshSource;
use log::{debug, warn};
use plan_lite_model::{Callbacks, ItemId, ItemMetadata, ItemType, MeshData};

/// Payload of the `item_load_error` callbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemLoadError {
    pub item_id: ItemId,
    pub reason: String,
}

/// Observer registries for the item load lifecycle. Every event
/// carries the affected item's id; callbacks fire synchronously in
/// registration order.
#[derive(Default, Debug)]
pub struct SceneEvents {
    /// An item was created and its mesh fetch started.
    pub item_loading: Callbacks<ItemId>,
    /// An item's mesh resolved and was attached.
    pub item_loaded: Callbacks<ItemId>,
    /// An item's mesh fetch failed; the item has been removed.
    pub item_load_error: Callbacks<ItemLoadError>,
    /// An item was removed (explicitly or after a failed load).
    pub item_removed: Callbacks<ItemId>,
}

/// The ordered collection of placed items.
///
/// Items keep insertion order; iteration order is stable, which the
/// serializer relies on. The scene exposes a dirty flag the render
/// loop polls: any item mutation or lifecycle transition sets it, and
/// the renderer clears it after drawing.
pub struct Scene {
    items: Vec<Item>,
    needs_update: bool,
    pub events: SceneEvents,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            needs_update: false,
            events: SceneEvents::default(),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items whose mesh has resolved; the set the renderer draws.
    pub fn loaded_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.state() == LoadState::Loaded)
    }

    /// Whether anything changed since the render loop last drew.
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Called by the render loop after drawing.
    pub fn clear_needs_update(&mut self) {
        self.needs_update = false;
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create an item in the `Pending` state and start its mesh fetch.
    ///
    /// Fires `item_loading` before handing the URL to the source, so
    /// observers see the item exist before any completion can race in.
    pub fn add_item(
        &mut self,
        item_type: ItemType,
        model_url: impl Into<String>,
        metadata: ItemMetadata,
        source: &mut dyn MeshSource,
    ) -> ItemId {
        let id = ItemId::new();
        let url = model_url.into();
        self.items
            .push(Item::new(id.clone(), item_type, url.clone(), metadata));
        self.needs_update = true;
        self.events.item_loading.fire(&id);
        source.request(&id, &url);
        id
    }

    /// Report the outcome of an item's mesh fetch.
    ///
    /// Success attaches the mesh and fires `item_loaded`; failure
    /// removes the item and fires `item_load_error`. Only `Pending`
    /// items transition: a completion for an id no longer in the scene
    /// (removed while its load was in flight) or for an item that
    /// already completed is ignored.
    pub fn finish_load(&mut self, id: &ItemId, outcome: Result<MeshData, String>) {
        let Some(index) = self.items.iter().position(|i| i.id() == id) else {
            debug!("ignoring load completion for removed item {id}");
            return;
        };
        if self.items[index].state() != LoadState::Pending {
            debug!("ignoring duplicate load completion for item {id}");
            return;
        }

        match outcome {
            Ok(mesh) => {
                self.items[index].attach_mesh(mesh);
                self.needs_update = true;
                self.events.item_loaded.fire(id);
            }
            Err(reason) => {
                warn!("mesh load failed for item {id}: {reason}");
                self.items[index].mark_failed();
                self.items.remove(index);
                self.needs_update = true;
                self.events.item_load_error.fire(&ItemLoadError {
                    item_id: id.clone(),
                    reason,
                });
                self.events.item_removed.fire(id);
            }
        }
    }

    /// Remove an item explicitly. Any in-flight load completion for it
    /// becomes a no-op.
    pub fn remove_item(&mut self, id: &ItemId) {
        let Some(index) = self.items.iter().position(|i| i.id() == id) else {
            warn!("remove_item: unknown item {id}");
            return;
        };
        self.items.remove(index);
        self.needs_update = true;
        self.events.item_removed.fire(id);
    }

    /// Drop every item without firing per-item events; used when a new
    /// document replaces the scene wholesale.
    pub fn clear(&mut self) {
        self.items.clear();
        self.needs_update = true;
    }

    // ========================================================================
    // Item mutation (routed through the scene so the dirty flag and
    // the fixed-placement constraint are enforced in one place)
    // ========================================================================

    pub fn move_item(&mut self, id: &ItemId, x: f64, y: f64, z: f64) {
        self.mutate(id, |item| {
            if item.fixed() {
                debug!("ignoring move of fixed item {}", item.id());
                return false;
            }
            item.set_position(x, y, z);
            true
        });
    }

    pub fn rotate_item(&mut self, id: &ItemId, radians: f64) {
        self.mutate(id, |item| {
            if item.fixed() {
                debug!("ignoring rotation of fixed item {}", item.id());
                return false;
            }
            item.set_rotation(radians);
            true
        });
    }

    /// Set the raw per-axis scale (used when restoring a document).
    pub fn scale_item(&mut self, id: &ItemId, x: f64, y: f64, z: f64) {
        self.mutate(id, |item| {
            item.set_scale(x, y, z);
            true
        });
    }

    /// Resize to target dimensions; no-op until the mesh has loaded.
    pub fn resize_item(&mut self, id: &ItemId, width: f64, height: f64, depth: f64) {
        self.mutate(id, |item| item.resize(width, height, depth));
    }

    pub fn set_item_fixed(&mut self, id: &ItemId, fixed: bool) {
        self.mutate(id, |item| {
            item.set_fixed(fixed);
            true
        });
    }

    /// Restore transform state from a document without the fixed-item
    /// guard (documents may legitimately position fixed items).
    pub fn restore_transform(
        &mut self,
        id: &ItemId,
        position: (f64, f64, f64),
        rotation: f64,
        scale: (f64, f64, f64),
        fixed: bool,
    ) {
        self.mutate(id, |item| {
            item.set_position(position.0, position.1, position.2);
            item.set_rotation(rotation);
            item.set_scale(scale.0, scale.1, scale.2);
            item.set_fixed(fixed);
            true
        });
    }

    fn mutate(&mut self, id: &ItemId, f: impl FnOnce(&mut Item) -> bool) {
        let Some(item) = self.items.iter_mut().find(|i| i.id() == id) else {
            warn!("unknown item {id}");
            return;
        };
        if f(item) {
            self.needs_update = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::NullMeshSource;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mesh() -> MeshData {
        MeshData {
            positions: vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            normals: vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            indices: vec![],
        }
    }

    fn add(scene: &mut Scene) -> ItemId {
        scene.add_item(
            ItemType::FloorItem,
            "models/chair.json",
            ItemMetadata::default(),
            &mut NullMeshSource,
        )
    }

    #[test]
    fn test_load_success_lifecycle() {
        let mut scene = Scene::new();
        let log: Rc<RefCell<Vec<String>>> = Rc::default();

        let l = log.clone();
        scene
            .events
            .item_loading
            .add(move |id| l.borrow_mut().push(format!("loading {id}")));
        let l = log.clone();
        scene
            .events
            .item_loaded
            .add(move |id| l.borrow_mut().push(format!("loaded {id}")));

        let id = add(&mut scene);
        assert_eq!(scene.item(&id).unwrap().state(), LoadState::Pending);
        assert_eq!(scene.loaded_items().count(), 0);

        scene.finish_load(&id, Ok(mesh()));
        assert_eq!(scene.item(&id).unwrap().state(), LoadState::Loaded);
        assert_eq!(scene.loaded_items().count(), 1);
        assert_eq!(
            *log.borrow(),
            vec![format!("loading {id}"), format!("loaded {id}")]
        );
    }

    #[test]
    fn test_load_failure_removes_item() {
        let mut scene = Scene::new();
        let errors: Rc<RefCell<Vec<ItemLoadError>>> = Rc::default();
        let e = errors.clone();
        scene
            .events
            .item_load_error
            .add(move |err| e.borrow_mut().push(err.clone()));

        let id = add(&mut scene);
        scene.finish_load(&id, Err("404".to_string()));

        assert_eq!(scene.item_count(), 0);
        assert_eq!(
            *errors.borrow(),
            vec![ItemLoadError {
                item_id: id,
                reason: "404".to_string()
            }]
        );
    }

    #[test]
    fn test_out_of_order_completion_attributes_by_id() {
        let mut scene = Scene::new();
        let loaded: Rc<RefCell<Vec<ItemId>>> = Rc::default();
        let l = loaded.clone();
        scene
            .events
            .item_loaded
            .add(move |id| l.borrow_mut().push(id.clone()));

        let first = add(&mut scene);
        let second = add(&mut scene);

        // The later request resolves first; each result must land on
        // the item that actually finished.
        scene.finish_load(&second, Ok(mesh()));
        assert_eq!(*loaded.borrow(), vec![second.clone()]);
        assert_eq!(scene.item(&first).unwrap().state(), LoadState::Pending);

        scene.finish_load(&first, Err("timeout".to_string()));
        assert_eq!(*loaded.borrow(), vec![second.clone()]);
        assert!(scene.item(&first).is_none());
        assert_eq!(scene.item(&second).unwrap().state(), LoadState::Loaded);
    }

    #[test]
    fn test_duplicate_completion_is_noop() {
        let mut scene = Scene::new();
        let loaded: Rc<RefCell<Vec<ItemId>>> = Rc::default();
        let l = loaded.clone();
        scene
            .events
            .item_loaded
            .add(move |id| l.borrow_mut().push(id.clone()));

        let id = add(&mut scene);
        scene.finish_load(&id, Ok(mesh()));
        assert_eq!(loaded.borrow().len(), 1);

        // A stray second completion must not re-fire or, worse,
        // remove the loaded item on a late error.
        scene.finish_load(&id, Ok(mesh()));
        assert_eq!(loaded.borrow().len(), 1);
        scene.finish_load(&id, Err("retry failed".to_string()));
        assert_eq!(scene.item(&id).unwrap().state(), LoadState::Loaded);
        assert_eq!(scene.item_count(), 1);
    }

    #[test]
    fn test_late_completion_for_removed_item_is_noop() {
        let mut scene = Scene::new();
        let id = add(&mut scene);
        scene.remove_item(&id);

        scene.finish_load(&id, Ok(mesh()));
        assert_eq!(scene.item_count(), 0);

        scene.finish_load(&id, Err("too late".to_string()));
        assert_eq!(scene.item_count(), 0);
    }

    #[test]
    fn test_dirty_flag_tracks_mutation() {
        let mut scene = Scene::new();
        let id = add(&mut scene);
        scene.finish_load(&id, Ok(mesh()));
        scene.clear_needs_update();

        scene.move_item(&id, 10.0, 0.0, 20.0);
        assert!(scene.needs_update());
        scene.clear_needs_update();

        scene.set_item_fixed(&id, true);
        assert!(scene.needs_update());
        scene.clear_needs_update();

        // Fixed items ignore movement and leave the flag clear.
        scene.move_item(&id, 99.0, 0.0, 99.0);
        assert!(!scene.needs_update());
        let p = scene.item(&id).unwrap().position();
        assert!((p.x - 10.0).abs() < 1e-9 && (p.z - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_insertion_order_stable() {
        let mut scene = Scene::new();
        let a = add(&mut scene);
        let b = add(&mut scene);
        let c = add(&mut scene);
        scene.remove_item(&b);

        let order: Vec<ItemId> = scene.items().map(|i| i.id().clone()).collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn test_mesh_source_receives_request() {
        let mut scene = Scene::new();
        let requests: Rc<RefCell<Vec<(ItemId, String)>>> = Rc::default();
        let r = requests.clone();
        let mut source = move |id: &ItemId, url: &str| {
            r.borrow_mut().push((id.clone(), url.to_string()));
        };

        let id = scene.add_item(
            ItemType::InWallItem,
            "models/door.json",
            ItemMetadata::default(),
            &mut source,
        );
        assert_eq!(
            *requests.borrow(),
            vec![(id, "models/door.json".to_string())]
        );
    }
}
