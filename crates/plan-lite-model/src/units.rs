// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimension formatting for UI labels.
//!
//! Model coordinates are always centimeters; only display formatting
//! changes with the configured unit.

use serde::{Deserialize, Serialize};

/// Display unit for formatted lengths.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DimUnit {
    /// Feet and inches, e.g. `8'2"`.
    #[default]
    Inch,
    /// Millimeters, e.g. `2500 mm`.
    #[serde(rename = "mm")]
    Millimeter,
    /// Centimeters, e.g. `250 cm`.
    #[serde(rename = "cm")]
    Centimeter,
    /// Meters, e.g. `2.5 m`.
    #[serde(rename = "m")]
    Meter,
}

/// Format a centimeter length for display in the given unit.
pub fn format_cm(cm: f64, unit: DimUnit) -> String {
    match unit {
        DimUnit::Inch => {
            let real_feet = (cm * 0.3937) / 12.0;
            let feet = real_feet.floor();
            let inches = ((real_feet - feet) * 12.0).round();
            format!("{}'{}\"", feet as i64, inches as i64)
        }
        DimUnit::Millimeter => format!("{} mm", (10.0 * cm).round() as i64),
        DimUnit::Centimeter => format!("{} cm", (10.0 * cm).round() / 10.0),
        DimUnit::Meter => format!("{} m", (10.0 * cm).round() / 1000.0),
    }
}
