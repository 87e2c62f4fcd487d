//! # Effective Overburden Stress
//!
//! Vertical effective stress at the SPT test depth. Above the water table the
//! full moist unit weight acts; below it, the column is split into a moist
//! part down to the water table and a submerged part beneath.

use crate::equations::Equation;
use crate::parameters::{SiteGeometry, SoilParameters};
use crate::units::KnPerM2;

/// Effective stress as a typed quantity.
pub fn effective_stress(soil: &SoilParameters, geom: &SiteGeometry) -> KnPerM2 {
    if geom.is_submerged() {
        let submerged_depth = geom.test_depth() - geom.water_table();
        soil.moist() * geom.water_table() + soil.submerged() * submerged_depth
    } else {
        soil.moist() * geom.test_depth()
    }
}

/// Compute the effective overburden stress (kN/m²) at the test depth.
///
/// A test point exactly at the water table uses the moist branch.
///
/// # Example
///
/// ```rust
/// use sbc_core::calculations::stress::compute_effective_stress;
/// use sbc_core::parameters::{SiteGeometry, SoilParameters};
///
/// let soil = SoilParameters::new(18.0, 8.0);
/// let geom = SiteGeometry::new(2.0, 3.0);
/// assert_eq!(compute_effective_stress(&soil, &geom), 44.0);
/// ```
pub fn compute_effective_stress(soil: &SoilParameters, geom: &SiteGeometry) -> f64 {
    effective_stress(soil, geom).value()
}

/// The stress equation that applies to this geometry
pub fn stress_equation(geom: &SiteGeometry) -> Equation {
    if geom.is_submerged() {
        Equation::EffectiveStressBelowWaterTable
    } else {
        Equation::EffectiveStressAboveWaterTable
    }
}
