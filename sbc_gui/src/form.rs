//! Editable form state.
//!
//! Fields are kept as the raw text the user typed so half-finished edits
//! ("1.", "") survive re-rendering. Parsing happens on every change.

use sbc_core::calculations::SbcInput;
use sbc_core::errors::{CalcError, CalcResult};

/// The six input fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MoistUnitWeight,
    SubmergedUnitWeight,
    ReferencePressure,
    WaterTableDepth,
    TestDepth,
    BlowCount,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::MoistUnitWeight,
        Field::SubmergedUnitWeight,
        Field::ReferencePressure,
        Field::WaterTableDepth,
        Field::TestDepth,
        Field::BlowCount,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::MoistUnitWeight => "Moist Unit Weight (kN/m³)",
            Field::SubmergedUnitWeight => "Submerged Unit Weight (kN/m³)",
            Field::ReferencePressure => "Reference Pressure (kN/m²)",
            Field::WaterTableDepth => "Water Table Depth (m)",
            Field::TestDepth => "Test Depth (m)",
            Field::BlowCount => "Blows per 30 cm (N-value)",
        }
    }

    /// Field name used in error messages, matching `SbcInput::validate`
    fn key(&self) -> &'static str {
        match self {
            Field::MoistUnitWeight => "moist_unit_weight_kn_m3",
            Field::SubmergedUnitWeight => "submerged_unit_weight_kn_m3",
            Field::ReferencePressure => "reference_pressure_kn_m2",
            Field::WaterTableDepth => "water_table_depth_m",
            Field::TestDepth => "test_depth_m",
            Field::BlowCount => "blow_count",
        }
    }

    /// Sectioning used by the input panel
    pub fn section(&self) -> &'static str {
        match self {
            Field::MoistUnitWeight | Field::SubmergedUnitWeight | Field::ReferencePressure => "Soil Parameters",
            Field::WaterTableDepth | Field::TestDepth | Field::BlowCount => "Site & Test Data",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputForm {
    pub moist_unit_weight: String,
    pub submerged_unit_weight: String,
    pub reference_pressure: String,
    pub water_table_depth: String,
    pub test_depth: String,
    pub blow_count: String,
}

impl InputForm {
    pub fn from_input(input: &SbcInput) -> Self {
        InputForm {
            moist_unit_weight: input.soil.moist_unit_weight_kn_m3.to_string(),
            submerged_unit_weight: input.soil.submerged_unit_weight_kn_m3.to_string(),
            reference_pressure: input.observation.reference_pressure_kn_m2.to_string(),
            water_table_depth: input.geometry.water_table_depth_m.to_string(),
            test_depth: input.geometry.test_depth_m.to_string(),
            blow_count: input.observation.blow_count.to_string(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::MoistUnitWeight => &self.moist_unit_weight,
            Field::SubmergedUnitWeight => &self.submerged_unit_weight,
            Field::ReferencePressure => &self.reference_pressure,
            Field::WaterTableDepth => &self.water_table_depth,
            Field::TestDepth => &self.test_depth,
            Field::BlowCount => &self.blow_count,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::MoistUnitWeight => &mut self.moist_unit_weight,
            Field::SubmergedUnitWeight => &mut self.submerged_unit_weight,
            Field::ReferencePressure => &mut self.reference_pressure,
            Field::WaterTableDepth => &mut self.water_table_depth,
            Field::TestDepth => &mut self.test_depth,
            Field::BlowCount => &mut self.blow_count,
        };
        *slot = value;
    }

    /// Parse every field. Range checks are left to `SbcInput::validate`.
    pub fn parse(&self) -> CalcResult<SbcInput> {
        let mut input = SbcInput::default();
        input.soil.moist_unit_weight_kn_m3 = self.number(Field::MoistUnitWeight)?;
        input.soil.submerged_unit_weight_kn_m3 = self.number(Field::SubmergedUnitWeight)?;
        input.observation.reference_pressure_kn_m2 = self.number(Field::ReferencePressure)?;
        input.geometry.water_table_depth_m = self.number(Field::WaterTableDepth)?;
        input.geometry.test_depth_m = self.number(Field::TestDepth)?;

        let blows = self.value(Field::BlowCount).trim();
        input.observation.blow_count = blows.parse().map_err(|_| {
            CalcError::invalid_input(Field::BlowCount.key(), blows, "Must be a whole number")
        })?;

        Ok(input)
    }

    fn number(&self, field: Field) -> CalcResult<f64> {
        let raw = self.value(field).trim();
        raw.parse()
            .map_err(|_| CalcError::invalid_input(field.key(), raw, "Must be a number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_back() {
        let form = InputForm::from_input(&SbcInput::default());
        assert_eq!(form.parse().unwrap(), SbcInput::default());
    }

    #[test]
    fn test_set_and_parse() {
        let mut form = InputForm::from_input(&SbcInput::default());
        form.set(Field::TestDepth, " 4.5 ".to_string());
        form.set(Field::BlowCount, "30".to_string());

        let input = form.parse().unwrap();
        assert_eq!(input.geometry.test_depth_m, 4.5);
        assert_eq!(input.observation.blow_count, 30);
    }

    #[test]
    fn test_unparseable_field_names_the_field() {
        let mut form = InputForm::from_input(&SbcInput::default());
        form.set(Field::WaterTableDepth, "2.".to_string());
        assert!(form.parse().is_ok());

        form.set(Field::WaterTableDepth, "two".to_string());
        match form.parse().unwrap_err() {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "water_table_depth_m");
                assert_eq!(value, "two");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_fractional_blow_count_rejected() {
        let mut form = InputForm::from_input(&SbcInput::default());
        form.set(Field::BlowCount, "12.5".to_string());
        assert!(form.parse().is_err());
    }
}
