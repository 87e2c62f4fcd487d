//! # Bearing Capacity Calculation
//!
//! The pipeline runs three pure stages in sequence:
//!
//! - [`stress`] - effective overburden stress at the test depth
//! - [`corrections`] - overburden correction factor, N1, dilatancy-corrected N2
//! - [`bearing`] - safe bearing capacity from N2
//!
//! Following the crate's `*Input` / `*Result` / `calculate` pattern:
//!
//! - [`SbcInput`] - soil, geometry and SPT observation (JSON-serializable)
//! - [`SbcResult`] - every derived quantity, produced all at once or not at all
//! - [`calculate`] - the pipeline itself
//! - [`evaluate`] - input range checks followed by [`calculate`]
//!
//! ## Example
//!
//! ```rust
//! use sbc_core::calculations::{calculate, SbcInput};
//!
//! let result = calculate(&SbcInput::default()).unwrap();
//! assert_eq!(result.effective_stress_kn_m2, 44.0);
//! assert!(result.dilatancy_applied);
//! ```

pub mod bearing;
pub mod corrections;
pub mod stress;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::{Equation, EquationTracker};
use crate::errors::CalcResult;
use crate::parameters::{SiteGeometry, SoilParameters, SptObservation};
use crate::units::KnPerM2;

pub use bearing::compute_sbc;
pub use corrections::{apply_corrections, Corrections};
pub use stress::compute_effective_stress;

/// One bearing capacity request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "soil": { "moist_unit_weight_kn_m3": 18.0, "submerged_unit_weight_kn_m3": 8.0 },
///   "geometry": { "water_table_depth_m": 2.0, "test_depth_m": 3.0 },
///   "observation": { "blow_count": 25, "reference_pressure_kn_m2": 100.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SbcInput {
    #[serde(default)]
    pub soil: SoilParameters,
    #[serde(default)]
    pub geometry: SiteGeometry,
    #[serde(default)]
    pub observation: SptObservation,
}

impl SbcInput {
    pub fn new(soil: SoilParameters, geometry: SiteGeometry, observation: SptObservation) -> Self {
        Self {
            soil,
            geometry,
            observation,
        }
    }

    /// Check every field against its accepted range.
    pub fn validate(&self) -> CalcResult<()> {
        self.soil.validate()?;
        self.geometry.validate()?;
        self.observation.validate()
    }
}

/// Results of one bearing capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "effective_stress_kn_m2": 44.0,
///   "correction_factor": 1.5076,
///   "corrected_n1": 37.69,
///   "corrected_n2": 26.34,
///   "sbc_kn_m2": 263.44,
///   "dilatancy_applied": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SbcResult {
    /// Effective overburden stress at the test depth (kN/m²)
    pub effective_stress_kn_m2: f64,

    /// Overburden correction factor C_N, within [0.45, 2.0]
    pub correction_factor: f64,

    /// Overburden corrected N-value
    pub corrected_n1: f64,

    /// Final N-value after the dilatancy correction
    pub corrected_n2: f64,

    /// Safe bearing capacity (kN/m²)
    pub sbc_kn_m2: f64,

    /// Whether the dilatancy correction reduced N1
    pub dilatancy_applied: bool,

    /// Equations applied, for the report appendix
    #[serde(default, skip_serializing_if = "EquationTracker::is_empty")]
    pub equations: EquationTracker,
}

impl SbcResult {
    pub fn effective_stress(&self) -> KnPerM2 {
        KnPerM2(self.effective_stress_kn_m2)
    }

    pub fn sbc(&self) -> KnPerM2 {
        KnPerM2(self.sbc_kn_m2)
    }
}

/// Run the bearing capacity pipeline.
///
/// Range checks are not applied here, so degenerate inputs reach the
/// effective stress guard and come back as a domain error.
///
/// # Returns
///
/// * `Ok(SbcResult)` - All derived quantities
/// * `Err(CalcError::Domain)` - The effective stress resolved to zero
pub fn calculate(input: &SbcInput) -> CalcResult<SbcResult> {
    let SbcInput { soil, geometry, observation } = input;
    let mut equations = EquationTracker::new();
    let context = format!("Test depth {:.2} m", geometry.test_depth_m);

    let effective_stress = compute_effective_stress(soil, geometry);
    equations.record(stress::stress_equation(geometry), context.clone());

    let corrections = apply_corrections(
        effective_stress,
        observation.reference_pressure().value(),
        f64::from(observation.blow_count),
        geometry.test_depth_m,
        geometry.water_table_depth_m,
    )
    .inspect_err(|e| warn!(effective_stress, error = %e, "correction stage failed"))?;
    equations.record(Equation::OverburdenCorrectionFactor, context.clone());
    equations.record(Equation::OverburdenCorrectedN, context.clone());
    if corrections.dilatancy_applied {
        equations.record(Equation::DilatancyCorrection, context.clone());
    }

    let sbc = compute_sbc(corrections.corrected_n2);
    equations.record(Equation::SafeBearingCapacity, context);

    debug!(
        effective_stress,
        correction_factor = corrections.correction_factor,
        corrected_n2 = corrections.corrected_n2,
        sbc,
        "bearing capacity computed"
    );

    Ok(SbcResult {
        effective_stress_kn_m2: effective_stress,
        correction_factor: corrections.correction_factor,
        corrected_n1: corrections.corrected_n1,
        corrected_n2: corrections.corrected_n2,
        sbc_kn_m2: sbc,
        dilatancy_applied: corrections.dilatancy_applied,
        equations,
    })
}

/// Validate the input ranges, then run [`calculate`].
pub fn evaluate(input: &SbcInput) -> CalcResult<SbcResult> {
    input.validate()?;
    calculate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{CalcError, DomainErrorKind};

    fn input(moist: f64, submerged: f64, water_table: f64, depth: f64, blows: u32, p_ref: f64) -> SbcInput {
        SbcInput::new(
            SoilParameters::new(moist, submerged),
            SiteGeometry::new(water_table, depth),
            SptObservation::new(blows, p_ref),
        )
    }

    #[test]
    fn test_default_scenario_below_water_table() {
        let result = calculate(&input(18.0, 8.0, 2.0, 3.0, 25, 100.0)).unwrap();

        assert_eq!(result.effective_stress_kn_m2, 44.0);
        assert!((result.correction_factor - 1.5076).abs() < 1e-4);
        assert!((result.corrected_n1 - 37.689).abs() < 1e-3);
        assert!(result.dilatancy_applied);
        assert!((result.corrected_n2 - 26.3445).abs() < 1e-3);
        assert!((result.sbc_kn_m2 - 263.445).abs() < 1e-2);
        assert_eq!(result.sbc_kn_m2, 10.0 * result.corrected_n2);
    }

    #[test]
    fn test_above_water_table_clamps_upper() {
        let result = calculate(&input(18.0, 8.0, 2.0, 1.0, 25, 100.0)).unwrap();

        assert_eq!(result.effective_stress_kn_m2, 18.0);
        assert_eq!(result.correction_factor, 2.0);
        assert_eq!(result.corrected_n1, 50.0);
        assert_eq!(result.corrected_n2, 50.0);
        assert_eq!(result.sbc_kn_m2, 500.0);
        assert!(!result.dilatancy_applied);
    }

    #[test]
    fn test_zero_moist_weight_is_domain_error() {
        let err = calculate(&input(0.0, 8.0, 2.0, 1.0, 25, 100.0)).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Domain { kind: DomainErrorKind::DivisionByZero, .. }
        ));
    }

    #[test]
    fn test_zero_depth_is_domain_error() {
        let err = calculate(&input(18.0, 8.0, 0.0, 0.0, 25, 100.0)).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_lower_clamp() {
        // 25 * 10 = 250 kN/m², sqrt(50 / 250) = 0.447 -> 0.45
        let result = calculate(&input(25.0, 15.0, 10.0, 10.0, 30, 50.0)).unwrap();
        assert_eq!(result.effective_stress_kn_m2, 250.0);
        assert_eq!(result.correction_factor, 0.45);
        assert_eq!(result.corrected_n1, 30.0 * 0.45);
    }

    #[test]
    fn test_equations_follow_branches() {
        let below = calculate(&input(18.0, 8.0, 2.0, 3.0, 25, 100.0)).unwrap();
        assert!(below.equations.contains(Equation::EffectiveStressBelowWaterTable));
        assert!(below.equations.contains(Equation::DilatancyCorrection));

        let above = calculate(&input(18.0, 8.0, 2.0, 1.0, 25, 100.0)).unwrap();
        assert!(above.equations.contains(Equation::EffectiveStressAboveWaterTable));
        assert!(!above.equations.contains(Equation::DilatancyCorrection));
        assert!(above.equations.contains(Equation::SafeBearingCapacity));
    }

    #[test]
    fn test_evaluate_rejects_out_of_range_input() {
        let err = evaluate(&input(30.0, 8.0, 2.0, 3.0, 25, 100.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_evaluate_accepts_defaults() {
        assert!(evaluate(&SbcInput::default()).is_ok());
    }

    #[test]
    fn test_input_json_with_missing_sections_uses_defaults() {
        let json = r#"{ "observation": { "blow_count": 12, "reference_pressure_kn_m2": 100.0 } }"#;
        let parsed: SbcInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.observation.blow_count, 12);
        assert_eq!(parsed.soil, SoilParameters::default());
        assert_eq!(parsed.geometry, SiteGeometry::default());
    }

    #[test]
    fn test_result_json_omits_nothing_numeric() {
        let result = calculate(&SbcInput::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "effective_stress_kn_m2",
            "correction_factor",
            "corrected_n1",
            "corrected_n2",
            "sbc_kn_m2",
        ] {
            assert!(json[key].is_number(), "missing {key}");
        }
    }
}
