//! Typical soil unit weights (kN/m³)
//!
//! Reference ranges shown next to the input form to help pick moist and
//! submerged unit weights. They are guidance only and never feed the
//! calculation directly.

use serde::{Deserialize, Serialize};

use crate::parameters::DEFAULT_REFERENCE_PRESSURE;

/// Caption shown under the reference table
pub fn reference_pressure_note() -> String {
    format!(
        "Reference pressure for overburden correction is typically {} kN/m²",
        DEFAULT_REFERENCE_PRESSURE
    )
}

/// Broad soil classes with typical unit weight ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Sandy,
    Clayey,
    Silty,
    Gravel,
}

impl SoilType {
    /// All soil types in table order
    pub const ALL: [SoilType; 4] = [
        SoilType::Sandy,
        SoilType::Clayey,
        SoilType::Silty,
        SoilType::Gravel,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy Soil",
            SoilType::Clayey => "Clayey Soil",
            SoilType::Silty => "Silty Soil",
            SoilType::Gravel => "Gravel",
        }
    }

    /// Typical moist unit weight range (min, max) in kN/m³
    pub fn moist_range_kn_m3(&self) -> (f64, f64) {
        match self {
            SoilType::Sandy => (16.0, 20.0),
            SoilType::Clayey => (14.0, 18.0),
            SoilType::Silty => (15.0, 19.0),
            SoilType::Gravel => (19.0, 22.0),
        }
    }

    /// Typical submerged unit weight range (min, max) in kN/m³
    pub fn submerged_range_kn_m3(&self) -> (f64, f64) {
        match self {
            SoilType::Sandy => (9.0, 11.0),
            SoilType::Clayey => (6.0, 8.0),
            SoilType::Silty => (7.0, 9.0),
            SoilType::Gravel => (10.0, 12.0),
        }
    }

    /// Formatted range for table cells, e.g. "16–20"
    pub fn moist_range_label(&self) -> String {
        range_label(self.moist_range_kn_m3())
    }

    pub fn submerged_range_label(&self) -> String {
        range_label(self.submerged_range_kn_m3())
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn range_label((min, max): (f64, f64)) -> String {
    format!("{}–{}", min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{MOIST_UNIT_WEIGHT_BOUNDS, SUBMERGED_UNIT_WEIGHT_BOUNDS};

    #[test]
    fn test_ranges_fall_inside_input_bounds() {
        for soil in SoilType::ALL {
            let (lo, hi) = soil.moist_range_kn_m3();
            assert!(MOIST_UNIT_WEIGHT_BOUNDS.contains(lo) && MOIST_UNIT_WEIGHT_BOUNDS.contains(hi));
            let (lo, hi) = soil.submerged_range_kn_m3();
            assert!(SUBMERGED_UNIT_WEIGHT_BOUNDS.contains(lo) && SUBMERGED_UNIT_WEIGHT_BOUNDS.contains(hi));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(SoilType::Sandy.moist_range_label(), "16–20");
        assert_eq!(SoilType::Gravel.submerged_range_label(), "10–12");
        assert!(reference_pressure_note().contains("100 kN/m²"));
    }
}
