//! # N-Value Corrections
//!
//! Overburden correction followed by the dilatancy correction.
//!
//! The overburden factor normalises the raw blow count to the reference
//! pressure and is bounded to `[0.45, 2.0]`. The dilatancy correction halves
//! the excess over 15 blows, and only applies when the test point is strictly
//! below the water table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Lower bound of the overburden correction factor
pub const CORRECTION_FACTOR_MIN: f64 = 0.45;

/// Upper bound of the overburden correction factor
pub const CORRECTION_FACTOR_MAX: f64 = 2.0;

/// N-value above which saturated sands get the dilatancy correction
pub const DILATANCY_THRESHOLD: f64 = 15.0;

/// Fraction of the excess over the threshold that is kept
pub const DILATANCY_SLOPE: f64 = 0.5;

/// Output of the correction stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corrections {
    /// Overburden correction factor C_N, within [0.45, 2.0]
    pub correction_factor: f64,

    /// Overburden corrected N-value, N1 = N * C_N
    pub corrected_n1: f64,

    /// Final N-value after the dilatancy correction
    pub corrected_n2: f64,

    /// Whether the dilatancy correction changed N1
    pub dilatancy_applied: bool,
}

/// Overburden correction factor C_N = clamp(sqrt(p_ref / sigma'), 0.45, 2.0).
///
/// Fails with a division-by-zero domain error when the effective stress is
/// exactly zero.
///
/// ```rust
/// use sbc_core::calculations::corrections::correction_factor;
///
/// // sqrt(100 / 18) = 2.357, pinned to the upper bound
/// assert_eq!(correction_factor(18.0, 100.0).unwrap(), 2.0);
/// assert!(correction_factor(0.0, 100.0).is_err());
/// ```
pub fn correction_factor(effective_stress: f64, ref_pressure: f64) -> CalcResult<f64> {
    if effective_stress == 0.0 {
        return Err(CalcError::division_by_zero());
    }
    if !(effective_stress > 0.0) || !effective_stress.is_finite() {
        return Err(CalcError::invalid_input(
            "effective_stress",
            effective_stress.to_string(),
            "Effective stress must be a positive finite value",
        ));
    }
    if !(ref_pressure > 0.0) || !ref_pressure.is_finite() {
        return Err(CalcError::invalid_input(
            "reference_pressure_kn_m2",
            ref_pressure.to_string(),
            "Reference pressure must be positive",
        ));
    }

    let raw = (ref_pressure / effective_stress).sqrt();
    let clamped = raw.clamp(CORRECTION_FACTOR_MIN, CORRECTION_FACTOR_MAX);
    if clamped != raw {
        debug!(raw, clamped, "overburden correction factor clamped");
    }
    Ok(clamped)
}

/// N2 = 15 + 0.5 * (N1 - 15), without the applicability check.
pub fn dilatancy_correction(corrected_n1: f64) -> f64 {
    DILATANCY_THRESHOLD + DILATANCY_SLOPE * (corrected_n1 - DILATANCY_THRESHOLD)
}

/// Whether the dilatancy correction applies.
///
/// A test point exactly at the water table counts as above it.
pub fn dilatancy_applies(corrected_n1: f64, test_depth: f64, water_table_depth: f64) -> bool {
    test_depth > water_table_depth && corrected_n1 > DILATANCY_THRESHOLD
}

/// Apply the overburden and dilatancy corrections to a raw blow count.
///
/// # Arguments
///
/// * `effective_stress` - Effective overburden stress at the test depth (kN/m²)
/// * `ref_pressure` - Reference pressure (kN/m²)
/// * `blow_count` - Raw SPT N-value
/// * `test_depth` - Test depth (m)
/// * `water_table_depth` - Water table depth (m)
///
/// # Example
///
/// ```rust
/// use sbc_core::calculations::corrections::apply_corrections;
///
/// let c = apply_corrections(18.0, 100.0, 25.0, 1.0, 2.0).unwrap();
/// assert_eq!(c.correction_factor, 2.0);
/// assert_eq!(c.corrected_n1, 50.0);
/// assert_eq!(c.corrected_n2, 50.0); // above the water table
/// ```
pub fn apply_corrections(
    effective_stress: f64,
    ref_pressure: f64,
    blow_count: f64,
    test_depth: f64,
    water_table_depth: f64,
) -> CalcResult<Corrections> {
    let correction_factor = correction_factor(effective_stress, ref_pressure)?;
    let corrected_n1 = blow_count * correction_factor;

    let dilatancy_applied = dilatancy_applies(corrected_n1, test_depth, water_table_depth);
    let corrected_n2 = if dilatancy_applied {
        dilatancy_correction(corrected_n1)
    } else {
        corrected_n1
    };

    Ok(Corrections {
        correction_factor,
        corrected_n1,
        corrected_n2,
        dilatancy_applied,
    })
}
