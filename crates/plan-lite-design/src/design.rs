// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The aggregate root owning one floorplan and one scene.

use crate::document::{DesignDocument, SavedItem};
use log::warn;
use plan_lite_floorplan::Floorplan;
use plan_lite_model::{
    CornerId, ItemId, ItemMetadata, ItemType, PlanConfig, PlanError, Result,
};
use plan_lite_scene::{MeshSource, Scene};

/// One design: the wall graph plus the placed items.
///
/// This is the serialization boundary. Rooms, half-edge polygons and
/// item load state are derived and never persisted; loading a document
/// rebuilds corners, walls and textures directly, then re-adds every
/// item through the same lifecycle path as interactive placement, so
/// a load failure in a saved item surfaces exactly like one in a
/// manual placement.
pub struct Design {
    floorplan: Floorplan,
    scene: Scene,
}

impl Design {
    pub fn new(config: PlanConfig) -> Self {
        Self {
            floorplan: Floorplan::new(config),
            scene: Scene::new(),
        }
    }

    /// A fresh design seeded with a single rectangular room, the
    /// starting point for new sessions.
    pub fn default_template(config: PlanConfig) -> Self {
        let mut design = Self::new(config);
        let corners = [
            design.floorplan.new_corner(0.0, 0.0),
            design.floorplan.new_corner(500.0, 0.0),
            design.floorplan.new_corner(500.0, 400.0),
            design.floorplan.new_corner(0.0, 400.0),
        ];
        for i in 0..corners.len() {
            let next = &corners[(i + 1) % corners.len()];
            if let Err(err) = design.floorplan.new_wall(&corners[i], next) {
                warn!("skipping template wall: {err}");
            }
        }
        design
    }

    pub fn floorplan(&self) -> &Floorplan {
        &self.floorplan
    }

    pub fn floorplan_mut(&mut self) -> &mut Floorplan {
        &mut self.floorplan
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Snapshot the design as a document. Item order follows scene
    /// insertion order.
    pub fn to_document(&self) -> DesignDocument {
        let items = self
            .scene
            .items()
            .map(|item| {
                let p = item.position();
                let s = item.scale();
                SavedItem {
                    item_name: item.metadata().item_name.clone(),
                    item_type: item.item_type().code(),
                    model_url: item.model_url().to_string(),
                    xpos: p.x,
                    ypos: p.y,
                    zpos: p.z,
                    rotation: item.rotation(),
                    scale_x: s.x,
                    scale_y: s.y,
                    scale_z: s.z,
                    fixed: item.fixed(),
                    resizable: item.metadata().resizable,
                }
            })
            .collect();

        DesignDocument {
            floorplan: self.floorplan.to_document(),
            items,
        }
    }

    /// Replace this design's contents with a document.
    ///
    /// The document is validated before anything is cleared, so a
    /// malformed document leaves the current design untouched. Items
    /// re-enter through [`Scene::add_item`] and come back `Pending`;
    /// the returned ids are in document order, and the host's
    /// [`MeshSource`] drives their loads to completion.
    pub fn load_document(
        &mut self,
        doc: &DesignDocument,
        source: &mut dyn MeshSource,
    ) -> Result<Vec<ItemId>> {
        let mut typed: Vec<(ItemType, &SavedItem)> = Vec::with_capacity(doc.items.len());
        for saved in &doc.items {
            let ty = ItemType::from_code(saved.item_type)
                .ok_or(PlanError::UnknownItemType(saved.item_type))?;
            typed.push((ty, saved));
        }
        for wall in &doc.floorplan.walls {
            if wall.corner1 == wall.corner2 {
                return Err(PlanError::DegenerateWall);
            }
            for id in [&wall.corner1, &wall.corner2] {
                if !doc.floorplan.corners.contains_key(id) {
                    return Err(PlanError::MissingCorner(CornerId::from(id.as_str())));
                }
            }
        }

        self.scene.clear();
        self.floorplan.load_document(&doc.floorplan)?;

        let mut ids = Vec::with_capacity(typed.len());
        for (ty, saved) in typed {
            let metadata = ItemMetadata {
                item_name: saved.item_name.clone(),
                model_url: saved.model_url.clone(),
                resizable: saved.resizable,
            };
            let id = self
                .scene
                .add_item(ty, saved.model_url.clone(), metadata, source);
            self.scene.restore_transform(
                &id,
                (saved.xpos, saved.ypos, saved.zpos),
                saved.rotation,
                (saved.scale_x, saved.scale_y, saved.scale_z),
                saved.fixed,
            );
            ids.push(id);
        }
        Ok(ids)
    }

    /// Serialize the design to its JSON document form.
    pub fn export_serialized(&self) -> Result<String> {
        serde_json::to_string(&self.to_document())
            .map_err(|e| PlanError::document(e.to_string()))
    }

    /// Load a design from its JSON document form.
    pub fn load_serialized(
        &mut self,
        json: &str,
        source: &mut dyn MeshSource,
    ) -> Result<Vec<ItemId>> {
        let doc: DesignDocument =
            serde_json::from_str(json).map_err(|e| PlanError::document(e.to_string()))?;
        self.load_document(&doc, source)
    }

    /// Reset to an empty design.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.floorplan.clear();
    }
}

impl Default for Design {
    fn default() -> Self {
        Self::new(PlanConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_lite_scene::NullMeshSource;

    #[test]
    fn test_default_template_has_one_room() {
        let design = Design::default_template(PlanConfig::default());
        assert_eq!(design.floorplan().rooms().len(), 1);
        assert!((design.floorplan().rooms()[0].area() - 200_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_item_type_rejected_without_clearing() {
        let mut design = Design::default_template(PlanConfig::default());
        let mut doc = design.to_document();
        doc.items.push(SavedItem {
            item_name: "Mystery".to_string(),
            item_type: 4,
            model_url: "models/js/mystery.json".to_string(),
            xpos: 0.0,
            ypos: 0.0,
            zpos: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
            fixed: false,
            resizable: false,
        });

        let err = design
            .load_document(&doc, &mut NullMeshSource)
            .unwrap_err();
        assert!(matches!(err, PlanError::UnknownItemType(4)));
        // The failed load must not have wiped the current design.
        assert_eq!(design.floorplan().rooms().len(), 1);
    }

    #[test]
    fn test_malformed_floorplan_rejected_without_clearing() {
        use plan_lite_floorplan::SavedWall;

        let mut design = Design::default_template(PlanConfig::default());
        design.scene_mut().add_item(
            ItemType::FloorItem,
            "models/js/chair.json",
            ItemMetadata::default(),
            &mut NullMeshSource,
        );

        // A wall referencing a corner absent from the corners map.
        let mut doc = design.to_document();
        doc.floorplan.walls.push(SavedWall {
            corner1: "nowhere".to_string(),
            corner2: doc.floorplan.walls[0].corner2.clone(),
            front_texture: Default::default(),
            back_texture: Default::default(),
        });
        let err = design
            .load_document(&doc, &mut NullMeshSource)
            .unwrap_err();
        assert!(matches!(err, PlanError::MissingCorner(_)));
        assert_eq!(design.floorplan().rooms().len(), 1);
        assert_eq!(design.scene().item_count(), 1);

        // A wall with identical endpoints.
        let mut doc = design.to_document();
        let corner = doc.floorplan.walls[0].corner1.clone();
        doc.floorplan.walls.push(SavedWall {
            corner1: corner.clone(),
            corner2: corner,
            front_texture: Default::default(),
            back_texture: Default::default(),
        });
        let err = design
            .load_document(&doc, &mut NullMeshSource)
            .unwrap_err();
        assert!(matches!(err, PlanError::DegenerateWall));
        assert_eq!(design.floorplan().rooms().len(), 1);
        assert_eq!(design.scene().item_count(), 1);
    }
}
