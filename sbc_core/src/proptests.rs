//! Property-based tests for the bearing capacity pipeline.

use proptest::prelude::*;

use crate::calculations::corrections::{
    apply_corrections, correction_factor, CORRECTION_FACTOR_MAX, CORRECTION_FACTOR_MIN,
    DILATANCY_THRESHOLD,
};
use crate::calculations::stress::compute_effective_stress;
use crate::calculations::{calculate, compute_sbc, SbcInput};
use crate::errors::CalcError;
use crate::parameters::{SiteGeometry, SoilParameters, SptObservation};

fn soil() -> impl Strategy<Value = SoilParameters> {
    (10.0..=25.0f64, 5.0..=15.0f64).prop_map(|(m, s)| SoilParameters::new(m, s))
}

fn observation() -> impl Strategy<Value = SptObservation> {
    (1u32..=100, 50.0..=200.0f64).prop_map(|(n, p)| SptObservation::new(n, p))
}

proptest! {
    #[test]
    fn stress_above_water_table_is_moist_only(
        soil in soil(),
        water_table in 0.5..30.0f64,
        fraction in 0.01..=1.0f64,
    ) {
        let depth = water_table * fraction;
        let geom = SiteGeometry::new(water_table, depth);
        prop_assert_eq!(
            compute_effective_stress(&soil, &geom),
            soil.moist_unit_weight_kn_m3 * depth
        );
    }

    #[test]
    fn stress_below_water_table_splits_column(
        soil in soil(),
        water_table in 0.0..20.0f64,
        extra in 0.01..20.0f64,
    ) {
        let depth = water_table + extra;
        prop_assume!(depth > water_table);
        let geom = SiteGeometry::new(water_table, depth);
        let expected = soil.moist_unit_weight_kn_m3 * water_table
            + soil.submerged_unit_weight_kn_m3 * (depth - water_table);
        prop_assert_eq!(compute_effective_stress(&soil, &geom), expected);
    }

    #[test]
    fn stress_increases_with_depth_below_water_table(
        soil in soil(),
        water_table in 0.0..10.0f64,
        a in 0.01..10.0f64,
        step in 0.01..10.0f64,
    ) {
        let shallow = SiteGeometry::new(water_table, water_table + a);
        let deep = SiteGeometry::new(water_table, water_table + a + step);
        prop_assert!(compute_effective_stress(&soil, &deep) > compute_effective_stress(&soil, &shallow));
    }

    #[test]
    fn correction_factor_is_clamped(stress in 1e-6..1e6f64, p_ref in 1e-3..1e4f64) {
        let cn = correction_factor(stress, p_ref).unwrap();
        prop_assert!((CORRECTION_FACTOR_MIN..=CORRECTION_FACTOR_MAX).contains(&cn));
    }

    #[test]
    fn n1_is_blow_count_times_factor(
        stress in 1.0..500.0f64,
        obs in observation(),
        depth in 0.5..20.0f64,
        water_table in 0.0..20.0f64,
    ) {
        let blows = f64::from(obs.blow_count);
        let c = apply_corrections(stress, obs.reference_pressure_kn_m2, blows, depth, water_table).unwrap();
        prop_assert_eq!(c.corrected_n1, blows * c.correction_factor);
    }

    #[test]
    fn n2_rules(
        stress in 1.0..500.0f64,
        obs in observation(),
        depth in 0.5..20.0f64,
        water_table in 0.0..20.0f64,
    ) {
        let blows = f64::from(obs.blow_count);
        let c = apply_corrections(stress, obs.reference_pressure_kn_m2, blows, depth, water_table).unwrap();
        if depth <= water_table || c.corrected_n1 <= DILATANCY_THRESHOLD {
            prop_assert_eq!(c.corrected_n2, c.corrected_n1);
            prop_assert!(!c.dilatancy_applied);
        } else {
            prop_assert_eq!(c.corrected_n2, 15.0 + 0.5 * (c.corrected_n1 - 15.0));
            prop_assert!(c.corrected_n2 < c.corrected_n1);
            prop_assert!(c.dilatancy_applied);
        }
    }

    #[test]
    fn sbc_is_ten_times_n2(n2 in 0.0..500.0f64) {
        prop_assert_eq!(compute_sbc(n2), 10.0 * n2);
    }

    #[test]
    fn pipeline_is_all_or_nothing(
        soil in soil(),
        obs in observation(),
        water_table in 0.0..20.0f64,
        depth in 0.5..20.0f64,
    ) {
        let input = SbcInput::new(soil, SiteGeometry::new(water_table, depth), obs);
        let result = calculate(&input).unwrap();
        prop_assert_eq!(result.sbc_kn_m2, 10.0 * result.corrected_n2);
        prop_assert!(result.effective_stress_kn_m2 > 0.0);
        prop_assert_eq!(calculate(&input).unwrap(), result);
    }

    #[test]
    fn zero_moist_weight_above_water_table_is_domain_error(
        obs in observation(),
        water_table in 0.5..20.0f64,
        fraction in 0.01..=1.0f64,
    ) {
        let input = SbcInput::new(
            SoilParameters::new(0.0, 8.0),
            SiteGeometry::new(water_table, water_table * fraction),
            obs,
        );
        let is_domain_error = matches!(calculate(&input), Err(CalcError::Domain { .. }));
        prop_assert!(is_domain_error);
    }
}
