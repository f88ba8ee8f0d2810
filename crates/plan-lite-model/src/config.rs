// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Engine configuration.
//!
//! An explicit value passed into `Floorplan::new` and threaded through
//! the code that needs it. There is no process-wide settings store;
//! settings UIs mutate their own copy and rebuild or update the
//! consumers that care.

use crate::units::DimUnit;
use serde::{Deserialize, Serialize};

/// Defaults and tolerances for a floorplan session.
///
/// All lengths are centimeters.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Default wall height used by the 3D view.
    pub wall_height: f64,
    /// Default wall thickness for newly drawn walls.
    pub wall_thickness: f64,
    /// Distance under which a dragged corner merges into another.
    pub corner_tolerance: f64,
    /// Unit used when formatting lengths for display.
    pub dim_unit: DimUnit,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            wall_height: 250.0,
            wall_thickness: 10.0,
            corner_tolerance: 10.0,
            dim_unit: DimUnit::Inch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlanConfig::default();
        assert_eq!(config.wall_height, 250.0);
        assert_eq!(config.wall_thickness, 10.0);
        assert_eq!(config.dim_unit, DimUnit::Inch);
    }
}
