// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed entity ids and the texture/item descriptors shared across the
//! workspace.
//!
//! Entities relate to each other by id lookup through their owning
//! arena (the floorplan or the scene), never by owning references, so
//! the cyclic corner/wall/half-edge/room structure stays cycle-free in
//! Rust terms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Create a session-unique opaque id string.
///
/// Uniqueness and stability for the lifetime of a session is all that
/// is required; the format is not part of any contract.
pub fn guid() -> String {
    uuid::Uuid::new_v4().to_string()
}

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Mint a fresh session-unique id.
            pub fn new() -> Self {
                Self(guid())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

id_type! {
    /// Identifier of a corner (vertex) in the wall graph.
    CornerId
}

id_type! {
    /// Identifier of a wall (edge between two corners).
    WallId
}

id_type! {
    /// Identifier of a placed furniture item.
    ItemId
}

/// Identifier of one directed side of a wall.
///
/// Half-edges are derived state owned by the floorplan; two exist per
/// wall, distinguished by the `front` flag.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct HalfEdgeId {
    /// The wall this half-edge belongs to.
    pub wall: WallId,
    /// True for the side running corner1 -> corner2.
    pub front: bool,
}

impl HalfEdgeId {
    pub fn new(wall: WallId, front: bool) -> Self {
        Self { wall, front }
    }

    /// The id of the opposite side of the same wall.
    pub fn opposite(&self) -> Self {
        Self {
            wall: self.wall.clone(),
            front: !self.front,
        }
    }
}

/// Texture applied to one face of a wall.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct WallTexture {
    /// Texture image URL.
    pub url: String,
    /// Stretch the texture across the whole face instead of tiling.
    pub stretch: bool,
    /// Tiling scale in centimeters (ignored when stretching).
    pub scale: f64,
}

impl Default for WallTexture {
    fn default() -> Self {
        Self {
            url: "rooms/textures/wallmap.png".to_string(),
            stretch: true,
            scale: 0.0,
        }
    }
}

/// Texture applied to a room's floor.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FloorTexture {
    /// Texture image URL.
    pub url: String,
    /// Tiling scale in centimeters.
    pub scale: f64,
    /// Rotation of the texture plane in radians.
    #[serde(default)]
    pub orientation: f64,
}

impl Default for FloorTexture {
    fn default() -> Self {
        Self {
            url: "rooms/textures/hardwood.png".to_string(),
            scale: 400.0,
            orientation: 0.0,
        }
    }
}

/// Item classification, dictating placement constraints.
///
/// The numeric codes are the persisted document values and must not
/// change.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ItemType {
    /// Free-standing furniture on the floor.
    FloorItem,
    /// Item mounted on a wall face (pictures, mirrors).
    WallItem,
    /// Item embedded in a wall (doors, windows).
    InWallItem,
    /// In-wall item that also reaches the floor (doorways).
    InWallFloorItem,
    /// Item resting on the floor but attached to nothing (rugs).
    OnFloorItem,
    /// Wall-mounted item that reaches the floor (cabinets).
    WallFloorItem,
}

impl ItemType {
    /// Decode a persisted numeric item type.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ItemType::FloorItem),
            2 => Some(ItemType::WallItem),
            3 => Some(ItemType::InWallItem),
            7 => Some(ItemType::InWallFloorItem),
            8 => Some(ItemType::OnFloorItem),
            9 => Some(ItemType::WallFloorItem),
            _ => None,
        }
    }

    /// The persisted numeric code.
    pub fn code(&self) -> u8 {
        match self {
            ItemType::FloorItem => 1,
            ItemType::WallItem => 2,
            ItemType::InWallItem => 3,
            ItemType::InWallFloorItem => 7,
            ItemType::OnFloorItem => 8,
            ItemType::WallFloorItem => 9,
        }
    }

    /// Whether this item attaches to a wall face.
    pub fn attached_to_wall(&self) -> bool {
        matches!(
            self,
            ItemType::WallItem
                | ItemType::InWallItem
                | ItemType::InWallFloorItem
                | ItemType::WallFloorItem
        )
    }

    /// Whether this item rests on the floor plane.
    pub fn on_floor(&self) -> bool {
        matches!(
            self,
            ItemType::FloorItem
                | ItemType::OnFloorItem
                | ItemType::InWallFloorItem
                | ItemType::WallFloorItem
        )
    }
}

/// Catalog metadata attached to a placed item.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Display name shown in the UI.
    pub item_name: String,
    /// URL of the 3D model this item renders with.
    pub model_url: String,
    /// Whether the user may resize the item.
    #[serde(default)]
    pub resizable: bool,
}
