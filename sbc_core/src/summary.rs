//! On-screen summary formatting shared by the CLI and the GUI.
//!
//! Every number is shown with two decimals; the raw blow count is an integer.

use crate::calculations::bearing::SBC_PER_BLOW;
use crate::calculations::{SbcInput, SbcResult};
use crate::units::KnPerM2;

/// One labelled value in a summary or echo table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl SummaryLine {
    fn new(label: &'static str, value: String, unit: &'static str) -> Self {
        Self { label, value, unit }
    }

    /// "Label: value unit", unit omitted when empty
    pub fn to_text(&self) -> String {
        if self.unit.is_empty() {
            format!("{}: {}", self.label, self.value)
        } else {
            format!("{}: {} {}", self.label, self.value, self.unit)
        }
    }
}

/// Headline results: effective stress, correction factor, corrected N, SBC.
pub fn summary_lines(result: &SbcResult) -> Vec<SummaryLine> {
    vec![
        SummaryLine::new(
            "Effective Stress",
            format!("{:.2}", result.effective_stress().value()),
            KnPerM2::SYMBOL,
        ),
        SummaryLine::new("Correction Factor", format!("{:.2}", result.correction_factor), ""),
        SummaryLine::new("Corrected N-value", format!("{:.2}", result.corrected_n2), ""),
        SummaryLine::new("Safe Bearing Capacity (SBC)", format!("{:.2}", result.sbc().value()), KnPerM2::SYMBOL),
    ]
}

/// Echo of every input parameter, in form order.
pub fn input_lines(input: &SbcInput) -> Vec<SummaryLine> {
    vec![
        SummaryLine::new("Moist Unit Weight", format!("{}", input.soil.moist_unit_weight_kn_m3), "kN/m³"),
        SummaryLine::new(
            "Submerged Unit Weight",
            format!("{}", input.soil.submerged_unit_weight_kn_m3),
            "kN/m³",
        ),
        SummaryLine::new(
            "Reference Pressure",
            format!("{}", input.observation.reference_pressure_kn_m2),
            "kN/m²",
        ),
        SummaryLine::new("Water Table Depth", format!("{}", input.geometry.water_table_depth_m), "m"),
        SummaryLine::new("Test Depth", format!("{}", input.geometry.test_depth_m), "m"),
        SummaryLine::new("Raw N-value", input.observation.blow_count.to_string(), ""),
    ]
}

/// Step-by-step calculation details.
pub fn detail_lines(input: &SbcInput, result: &SbcResult) -> Vec<String> {
    vec![
        format!("Raw N-value: {}", input.observation.blow_count),
        format!("Overburden Corrected N-value: {:.2}", result.corrected_n1),
        format!("Final Corrected N-value: {:.2}", result.corrected_n2),
        format!(
            "SBC Formula: {} × N = {} × {:.2}",
            SBC_PER_BLOW, SBC_PER_BLOW, result.corrected_n2
        ),
    ]
}

/// Whether the dilatancy correction changed the N-value, as one line.
pub fn dilatancy_note(result: &SbcResult) -> &'static str {
    if result.dilatancy_applied {
        "Dilatancy correction applied (below water table, N1 > 15)"
    } else {
        "Dilatancy correction not applied"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;

    #[test]
    fn test_summary_uses_two_decimals() {
        let result = calculate(&SbcInput::default()).unwrap();
        let lines = summary_lines(&result);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].to_text(), "Effective Stress: 44.00 kN/m²");
        assert_eq!(lines[1].to_text(), "Correction Factor: 1.51");
        assert_eq!(lines[2].value, "26.34");
        assert_eq!(lines[3].value, "263.44");
    }

    #[test]
    fn test_input_echo_covers_all_fields() {
        let lines = input_lines(&SbcInput::default());
        let labels: Vec<_> = lines.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![
                "Moist Unit Weight",
                "Submerged Unit Weight",
                "Reference Pressure",
                "Water Table Depth",
                "Test Depth",
                "Raw N-value",
            ]
        );
        assert_eq!(lines[5].to_text(), "Raw N-value: 25");
    }

    #[test]
    fn test_detail_formula_line() {
        let input = SbcInput::default();
        let result = calculate(&input).unwrap();
        let details = detail_lines(&input, &result);
        assert_eq!(details[3], "SBC Formula: 10 × N = 10 × 26.34");
    }

    #[test]
    fn test_dilatancy_note_follows_result() {
        let below = calculate(&SbcInput::default()).unwrap();
        assert_eq!(dilatancy_note(&below), "Dilatancy correction applied (below water table, N1 > 15)");

        let mut input = SbcInput::default();
        input.geometry.test_depth_m = 1.0;
        let above = calculate(&input).unwrap();
        assert_eq!(dilatancy_note(&above), "Dilatancy correction not applied");
    }
}
