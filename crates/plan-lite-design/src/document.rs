// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The persisted form of a whole design.
//!
//! Two top-level sections: the floorplan graph and the item list.
//! Field names and the numeric item-type codes follow the established
//! save format and must not change.

use plan_lite_floorplan::FloorplanDocument;
use serde::{Deserialize, Serialize};

/// A complete saved design.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DesignDocument {
    pub floorplan: FloorplanDocument,
    #[serde(default)]
    pub items: Vec<SavedItem>,
}

/// One item as persisted: catalog reference plus transform.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SavedItem {
    pub item_name: String,
    /// Numeric item-type code (see `ItemType::code`).
    pub item_type: u8,
    pub model_url: String,
    pub xpos: f64,
    pub ypos: f64,
    pub zpos: f64,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub scale_z: f64,
    pub fixed: bool,
    #[serde(default)]
    pub resizable: bool,
}
