//! # Input Parameters
//!
//! Value types describing one bearing capacity request: the soil unit weights,
//! the site geometry and the SPT observation. Each type carries the accepted
//! range of its fields and a `validate()` that reports the first violation.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "soil": { "moist_unit_weight_kn_m3": 18.0, "submerged_unit_weight_kn_m3": 8.0 },
//!   "geometry": { "water_table_depth_m": 2.0, "test_depth_m": 3.0 },
//!   "observation": { "blow_count": 25, "reference_pressure_kn_m2": 100.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{KnPerM2, KnPerM3, Meters};

/// Inclusive range accepted for an input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const MOIST_UNIT_WEIGHT_BOUNDS: Bounds = Bounds::new(10.0, 25.0);
pub const SUBMERGED_UNIT_WEIGHT_BOUNDS: Bounds = Bounds::new(5.0, 15.0);
pub const REFERENCE_PRESSURE_BOUNDS: Bounds = Bounds::new(50.0, 200.0);
pub const BLOW_COUNT_MIN: u32 = 1;
pub const BLOW_COUNT_MAX: u32 = 100;

pub const DEFAULT_MOIST_UNIT_WEIGHT: f64 = 18.0;
pub const DEFAULT_SUBMERGED_UNIT_WEIGHT: f64 = 8.0;
pub const DEFAULT_REFERENCE_PRESSURE: f64 = 100.0;
pub const DEFAULT_WATER_TABLE_DEPTH: f64 = 2.0;
pub const DEFAULT_TEST_DEPTH: f64 = 3.0;
pub const DEFAULT_BLOW_COUNT: u32 = 25;

fn check_bounds(field: &str, value: f64, bounds: Bounds, unit: &str) -> CalcResult<()> {
    if !bounds.contains(value) {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Must be between {} and {} {}", bounds.min, bounds.max, unit),
        ));
    }
    Ok(())
}

/// Unit weights of the soil column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilParameters {
    /// Moist unit weight above the water table (kN/m³)
    pub moist_unit_weight_kn_m3: f64,

    /// Submerged (buoyant) unit weight below the water table (kN/m³)
    pub submerged_unit_weight_kn_m3: f64,
}

impl SoilParameters {
    pub fn new(moist_unit_weight_kn_m3: f64, submerged_unit_weight_kn_m3: f64) -> Self {
        Self {
            moist_unit_weight_kn_m3,
            submerged_unit_weight_kn_m3,
        }
    }

    pub fn moist(&self) -> KnPerM3 {
        KnPerM3(self.moist_unit_weight_kn_m3)
    }

    pub fn submerged(&self) -> KnPerM3 {
        KnPerM3(self.submerged_unit_weight_kn_m3)
    }

    pub fn validate(&self) -> CalcResult<()> {
        check_bounds(
            "moist_unit_weight_kn_m3",
            self.moist_unit_weight_kn_m3,
            MOIST_UNIT_WEIGHT_BOUNDS,
            KnPerM3::SYMBOL,
        )?;
        check_bounds(
            "submerged_unit_weight_kn_m3",
            self.submerged_unit_weight_kn_m3,
            SUBMERGED_UNIT_WEIGHT_BOUNDS,
            KnPerM3::SYMBOL,
        )
    }
}

impl Default for SoilParameters {
    fn default() -> Self {
        Self::new(DEFAULT_MOIST_UNIT_WEIGHT, DEFAULT_SUBMERGED_UNIT_WEIGHT)
    }
}

/// Water table and test depths, both measured from ground level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteGeometry {
    /// Depth to the water table (m)
    pub water_table_depth_m: f64,

    /// Depth of the SPT test point (m)
    pub test_depth_m: f64,
}

impl SiteGeometry {
    pub fn new(water_table_depth_m: f64, test_depth_m: f64) -> Self {
        Self {
            water_table_depth_m,
            test_depth_m,
        }
    }

    pub fn water_table(&self) -> Meters {
        Meters(self.water_table_depth_m)
    }

    pub fn test_depth(&self) -> Meters {
        Meters(self.test_depth_m)
    }

    /// True when the test point lies strictly below the water table.
    ///
    /// A test point exactly at the water table counts as above it.
    pub fn is_submerged(&self) -> bool {
        self.test_depth_m > self.water_table_depth_m
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !(self.water_table_depth_m >= 0.0) || !self.water_table_depth_m.is_finite() {
            return Err(CalcError::invalid_input(
                "water_table_depth_m",
                self.water_table_depth_m.to_string(),
                "Water table depth cannot be negative",
            ));
        }
        if !(self.test_depth_m > 0.0) || !self.test_depth_m.is_finite() {
            return Err(CalcError::invalid_input(
                "test_depth_m",
                self.test_depth_m.to_string(),
                "Test depth must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for SiteGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_WATER_TABLE_DEPTH, DEFAULT_TEST_DEPTH)
    }
}

/// Standard Penetration Test reading and the pressure it is normalised to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SptObservation {
    /// Blows per 30 cm (raw N-value)
    pub blow_count: u32,

    /// Reference pressure for the overburden correction (kN/m²)
    pub reference_pressure_kn_m2: f64,
}

impl SptObservation {
    pub fn new(blow_count: u32, reference_pressure_kn_m2: f64) -> Self {
        Self {
            blow_count,
            reference_pressure_kn_m2,
        }
    }

    pub fn reference_pressure(&self) -> KnPerM2 {
        KnPerM2(self.reference_pressure_kn_m2)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !(BLOW_COUNT_MIN..=BLOW_COUNT_MAX).contains(&self.blow_count) {
            return Err(CalcError::invalid_input(
                "blow_count",
                self.blow_count.to_string(),
                format!("Must be between {} and {} blows", BLOW_COUNT_MIN, BLOW_COUNT_MAX),
            ));
        }
        check_bounds(
            "reference_pressure_kn_m2",
            self.reference_pressure_kn_m2,
            REFERENCE_PRESSURE_BOUNDS,
            KnPerM2::SYMBOL,
        )
    }
}

impl Default for SptObservation {
    fn default() -> Self {
        Self::new(DEFAULT_BLOW_COUNT, DEFAULT_REFERENCE_PRESSURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SoilParameters::default().validate().is_ok());
        assert!(SiteGeometry::default().validate().is_ok());
        assert!(SptObservation::default().validate().is_ok());
    }

    #[test]
    fn test_boundary_values_are_valid() {
        assert!(SoilParameters::new(10.0, 5.0).validate().is_ok());
        assert!(SoilParameters::new(25.0, 15.0).validate().is_ok());
        assert!(SptObservation::new(1, 50.0).validate().is_ok());
        assert!(SptObservation::new(100, 200.0).validate().is_ok());
        assert!(SiteGeometry::new(0.0, 0.5).validate().is_ok());
    }

    #[test]
    fn test_moist_weight_out_of_range() {
        let err = SoilParameters::new(9.5, 8.0).validate().unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "moist_unit_weight_kn_m3"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_submerged_weight_out_of_range() {
        assert!(SoilParameters::new(18.0, 15.5).validate().is_err());
    }

    #[test]
    fn test_blow_count_out_of_range() {
        assert!(SptObservation::new(0, 100.0).validate().is_err());
        assert!(SptObservation::new(101, 100.0).validate().is_err());
    }

    #[test]
    fn test_reference_pressure_out_of_range() {
        assert!(SptObservation::new(25, 40.0).validate().is_err());
    }

    #[test]
    fn test_geometry_rejects_zero_test_depth() {
        assert!(SiteGeometry::new(2.0, 0.0).validate().is_err());
        assert!(SiteGeometry::new(-0.5, 3.0).validate().is_err());
        assert!(SiteGeometry::new(f64::NAN, 3.0).validate().is_err());
    }

    #[test]
    fn test_water_table_boundary_counts_as_above() {
        assert!(!SiteGeometry::new(2.0, 2.0).is_submerged());
        assert!(SiteGeometry::new(2.0, 2.01).is_submerged());
    }
}
