// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Persisted form of the wall graph.
//!
//! Field names follow the established save format: corners are a map
//! of id to position, walls reference corners by id with camelCase
//! texture keys, and staged floor textures ride under
//! `newFloorTextures`. Derived state (rooms, half-edges) is never
//! saved.

use plan_lite_model::{FloorTexture, WallTexture};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The floorplan section of a saved design.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FloorplanDocument {
    pub corners: BTreeMap<String, SavedCorner>,
    pub walls: Vec<SavedWall>,
    #[serde(default, rename = "newFloorTextures")]
    pub floor_textures: BTreeMap<String, FloorTexture>,
}

/// A corner position in plan coordinates (centimeters).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SavedCorner {
    pub x: f64,
    pub y: f64,
}

/// A wall as a pair of corner-id references.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SavedWall {
    pub corner1: String,
    pub corner2: String,
    #[serde(default, rename = "frontTexture")]
    pub front_texture: WallTexture,
    #[serde(default, rename = "backTexture")]
    pub back_texture: WallTexture,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_round_trip() {
        let mut corners = BTreeMap::new();
        corners.insert("c1".to_string(), SavedCorner { x: 0.0, y: 0.0 });
        corners.insert("c2".to_string(), SavedCorner { x: 500.0, y: 0.0 });
        let doc = FloorplanDocument {
            corners,
            walls: vec![SavedWall {
                corner1: "c1".to_string(),
                corner2: "c2".to_string(),
                front_texture: WallTexture::default(),
                back_texture: WallTexture::default(),
            }],
            floor_textures: BTreeMap::new(),
        };

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("frontTexture"));
        assert!(json.contains("newFloorTextures"));
        let back: FloorplanDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_missing_texture_fields_default() {
        let json = r#"{
            "corners": {"c1": {"x": 0.0, "y": 0.0}, "c2": {"x": 10.0, "y": 0.0}},
            "walls": [{"corner1": "c1", "corner2": "c2"}]
        }"#;
        let doc: FloorplanDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.walls[0].front_texture, WallTexture::default());
        assert!(doc.floor_textures.is_empty());
    }
}
