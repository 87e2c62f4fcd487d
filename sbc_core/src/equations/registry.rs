//! # Equation Registry
//!
//! Central registry of the equations applied by the bearing capacity pipeline.
//! Each equation carries its formula, reference and variable definitions so
//! the PDF report can list exactly what was used for a given calculation.
//!
//! ## Usage
//!
//! ```rust
//! use sbc_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::OverburdenCorrectionFactor, "Test depth 3.00 m");
//!
//! let meta = Equation::OverburdenCorrectionFactor.metadata();
//! assert!(meta.formula_plain.contains("sqrt"));
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::calculations::bearing::SBC_PER_BLOW;
use crate::calculations::corrections::{
    CORRECTION_FACTOR_MAX, CORRECTION_FACTOR_MIN, DILATANCY_THRESHOLD,
};

// ============================================================================
// Code References
// ============================================================================

/// Source of an equation, cited in the report appendix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// IS 2131 - Method for Standard Penetration Test for Soils
    Is2131 { year: u16 },
    /// Terzaghi & Peck correction for saturated fine/silty sands
    TerzaghiPeck { year: u16 },
    /// Liao & Whitman overburden normalisation
    LiaoWhitman { year: u16 },
    /// Soil mechanics fundamentals (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Is2131 { year } => format!("IS 2131:{}", year),
            CodeReference::TerzaghiPeck { year } => {
                format!("Terzaghi & Peck ({}), via IS 2131", year)
            }
            CodeReference::LiaoWhitman { year } => format!("Liao & Whitman ({})", year),
            CodeReference::Mechanics => "Fundamental Soil Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the report appendix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Vertical effective stress at the test depth
    OverburdenStress,
    /// Overburden and dilatancy corrections to the N-value
    NValueCorrections,
    /// Mapping from corrected N to allowable pressure
    BearingCapacity,
}

impl EquationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::OverburdenStress => "Overburden Stress",
            EquationCategory::NValueCorrections => "N-Value Corrections",
            EquationCategory::BearingCapacity => "Bearing Capacity",
        }
    }

    /// Sort order for the appendix, follows the pipeline order
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::OverburdenStress => 1,
            EquationCategory::NValueCorrections => 2,
            EquationCategory::BearingCapacity => 3,
        }
    }

    pub const ALL: [EquationCategory; 3] = [
        EquationCategory::OverburdenStress,
        EquationCategory::NValueCorrections,
        EquationCategory::BearingCapacity,
    ];
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol in Typst math notation (e.g., "sigma'_v", "N_1")
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    pub name: &'static str,
    pub description: String,
    /// The formula in Typst notation for PDF rendering
    pub formula_typst: String,
    /// The formula in plain text for terminal output and markdown
    pub formula_plain: String,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the bearing capacity pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// sigma' = gamma_m z, test point at or above the water table
    EffectiveStressAboveWaterTable,
    /// sigma' = gamma_m z_w + gamma' (z - z_w), test point below the water table
    EffectiveStressBelowWaterTable,
    /// C_N = clamp(sqrt(p_ref / sigma'), 0.45, 2.0)
    OverburdenCorrectionFactor,
    /// N_1 = N C_N
    OverburdenCorrectedN,
    /// N_2 = 15 + 0.5 (N_1 - 15)
    DilatancyCorrection,
    /// q_s = 10 N_2
    SafeBearingCapacity,
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::EffectiveStressAboveWaterTable,
    Equation::EffectiveStressBelowWaterTable,
    Equation::OverburdenCorrectionFactor,
    Equation::OverburdenCorrectedN,
    Equation::DilatancyCorrection,
    Equation::SafeBearingCapacity,
];

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::EffectiveStressAboveWaterTable => EquationMetadata {
                name: "Effective Stress Above Water Table",
                description: "Vertical effective stress when the test point is at or above the water table".to_string(),
                formula_typst: r#"$sigma'_v = gamma_m z$"#.to_string(),
                formula_plain: "sigma'v = gamma_m * z".to_string(),
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("sigma'_v", "Effective overburden stress", "kN/m²"),
                    Variable::new("gamma_m", "Moist unit weight", "kN/m³"),
                    Variable::new("z", "Test depth", "m"),
                ],
                assumptions: vec![
                    "Homogeneous soil column",
                    "Test point at the water table counts as above it",
                ],
                category: EquationCategory::OverburdenStress,
                source_module: "calculations/stress.rs",
                source_function: "compute_effective_stress",
            },

            Equation::EffectiveStressBelowWaterTable => EquationMetadata {
                name: "Effective Stress Below Water Table",
                description: "Moist weight above the water table plus submerged weight below it".to_string(),
                formula_typst: r#"$sigma'_v = gamma_m z_w + gamma' (z - z_w)$"#.to_string(),
                formula_plain: "sigma'v = gamma_m * z_w + gamma' * (z - z_w)".to_string(),
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("sigma'_v", "Effective overburden stress", "kN/m²"),
                    Variable::new("gamma_m", "Moist unit weight", "kN/m³"),
                    Variable::new("gamma'", "Submerged unit weight", "kN/m³"),
                    Variable::new("z", "Test depth", "m"),
                    Variable::new("z_w", "Water table depth", "m"),
                ],
                assumptions: vec!["Hydrostatic pore pressure below the water table"],
                category: EquationCategory::OverburdenStress,
                source_module: "calculations/stress.rs",
                source_function: "compute_effective_stress",
            },

            Equation::OverburdenCorrectionFactor => EquationMetadata {
                name: "Overburden Correction Factor",
                description: format!(
                    "Normalises the blow count to the reference pressure, bounded to [{}, {}]",
                    CORRECTION_FACTOR_MIN, CORRECTION_FACTOR_MAX
                ),
                formula_typst: format!(
                    r#"$C_N = min(max(sqrt(p_"ref" / sigma'_v), {}), {})$"#,
                    CORRECTION_FACTOR_MIN, CORRECTION_FACTOR_MAX
                ),
                formula_plain: format!(
                    "C_N = clamp(sqrt(p_ref / sigma'v), {}, {})",
                    CORRECTION_FACTOR_MIN, CORRECTION_FACTOR_MAX
                ),
                reference: CodeReference::LiaoWhitman { year: 1986 },
                variables: vec![
                    Variable::new("C_N", "Overburden correction factor", "-"),
                    Variable::new("p_\"ref\"", "Reference pressure", "kN/m²"),
                    Variable::new("sigma'_v", "Effective overburden stress", "kN/m²"),
                ],
                assumptions: vec!["Effective stress must be non-zero"],
                category: EquationCategory::NValueCorrections,
                source_module: "calculations/corrections.rs",
                source_function: "correction_factor",
            },

            Equation::OverburdenCorrectedN => EquationMetadata {
                name: "Overburden Corrected N-Value",
                description: "Raw blow count scaled by the overburden correction factor".to_string(),
                formula_typst: r#"$N_1 = N C_N$"#.to_string(),
                formula_plain: "N1 = N * C_N".to_string(),
                reference: CodeReference::Is2131 { year: 1981 },
                variables: vec![
                    Variable::new("N", "Blows per 30 cm", "-"),
                    Variable::new("N_1", "Overburden corrected N-value", "-"),
                ],
                assumptions: vec!["No intermediate rounding"],
                category: EquationCategory::NValueCorrections,
                source_module: "calculations/corrections.rs",
                source_function: "apply_corrections",
            },

            Equation::DilatancyCorrection => EquationMetadata {
                name: "Dilatancy Correction",
                description: format!(
                    "Reduces high N-values in saturated fine or silty sand, applied below the water table when N_1 > {}",
                    DILATANCY_THRESHOLD
                ),
                formula_typst: format!(
                    r#"$N_2 = {t} + 0.5 (N_1 - {t})$"#,
                    t = DILATANCY_THRESHOLD
                ),
                formula_plain: format!("N2 = {t} + 0.5 * (N1 - {t})", t = DILATANCY_THRESHOLD),
                reference: CodeReference::TerzaghiPeck { year: 1948 },
                variables: vec![
                    Variable::new("N_1", "Overburden corrected N-value", "-"),
                    Variable::new("N_2", "Dilatancy corrected N-value", "-"),
                ],
                assumptions: vec!["Test point strictly below the water table"],
                category: EquationCategory::NValueCorrections,
                source_module: "calculations/corrections.rs",
                source_function: "dilatancy_correction",
            },

            Equation::SafeBearingCapacity => EquationMetadata {
                name: "Safe Bearing Capacity",
                description: "Linear empirical relation between corrected N-value and allowable pressure".to_string(),
                formula_typst: format!(r#"$q_s = {} N_2$"#, SBC_PER_BLOW),
                formula_plain: format!("q_s = {} * N2", SBC_PER_BLOW),
                reference: CodeReference::Is2131 { year: 1981 },
                variables: vec![
                    Variable::new("q_s", "Safe bearing capacity", "kN/m²"),
                    Variable::new("N_2", "Final corrected N-value", "-"),
                ],
                assumptions: vec!["Shallow foundation on granular soil"],
                category: EquationCategory::BearingCapacity,
                source_module: "calculations/bearing.rs",
                source_function: "compute_sbc",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }
}

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being applied during a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// Context describing where it was applied (e.g., "Test depth 3.00 m")
    pub context: String,
}

impl EquationUsage {
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    pub fn contains(&self, equation: Equation) -> bool {
        self.usages.iter().any(|u| u.equation == equation)
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category, in pipeline order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Typst Appendix Generation
// ============================================================================

impl EquationTracker {
    /// Generate Typst markup for the "Calculation Basis" appendix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sbc_core::equations::registry::{Equation, EquationTracker};
    ///
    /// let mut tracker = EquationTracker::new();
    /// tracker.record(Equation::SafeBearingCapacity, "Final N-value");
    ///
    /// let typst = tracker.generate_appendix_typst();
    /// assert!(typst.contains("Safe Bearing Capacity"));
    /// ```
    pub fn generate_appendix_typst(&self) -> String {
        let mut output = String::new();

        output.push_str(r##"
#v(16pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

== Calculation Basis

#text(size: 10pt)[
  Equations applied in this calculation, in the order of the correction procedure.
]

#v(8pt)
"##);

        let by_category = self.by_category();
        if by_category.is_empty() {
            output.push_str("#text(style: \"italic\")[No equations recorded.]\n");
            return output;
        }

        for (category, equations) in by_category {
            output.push_str(&format!("\n=== {}\n\n", category.display_name()));

            for equation in equations {
                let meta = equation.metadata();

                output.push_str(&format!("*{}.* ", meta.name));
                output.push_str(&format!("#text(size: 10pt)[{}]\n\n", escape_typst_text(&meta.description)));
                output.push_str(&format!("{}\n\n", meta.formula_typst));
                output.push_str(&format!(
                    "#text(size: 9pt, fill: gray)[Reference: {}]\n\n",
                    escape_typst_text(&meta.reference.citation())
                ));

                if !meta.variables.is_empty() {
                    output.push_str("#table(\n");
                    output.push_str("  columns: (auto, 1fr, auto),\n");
                    output.push_str("  inset: 5pt,\n");
                    output.push_str("  stroke: 0.5pt,\n");
                    output.push_str("  table.header([*Symbol*], [*Description*], [*Units*]),\n");
                    for var in &meta.variables {
                        output.push_str(&format!(
                            "  [${}$], [{}], [{}],\n",
                            var.symbol, var.description, var.units
                        ));
                    }
                    output.push_str(")\n\n");
                }

                output.push_str("#v(6pt)\n");
            }
        }

        output
    }
}

/// Escape characters that start markup in Typst content mode
fn escape_typst_text(s: &str) -> String {
    s.replace('_', "\\_")
        .replace('*', "\\*")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate the EQUATIONS.md reference document.
///
/// ```rust
/// use sbc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Dilatancy Correction"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# SBC Calculator Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

All formulas used to derive Safe Bearing Capacity from an SPT N-value.
Units are fixed: metres, kN/m³ and kN/m².

---

"#);

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            output.push_str("| Symbol | Description | Units |\n");
            output.push_str("|--------|-------------|-------|\n");
            for var in &meta.variables {
                output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
            }
            output.push('\n');

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!("**Total Equations:** {}\n", ALL_EQUATIONS.len()));
    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 6);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_typst.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }

        let dilatancy = Equation::DilatancyCorrection.metadata();
        assert_eq!(dilatancy.formula_plain, "N2 = 15 + 0.5 * (N1 - 15)");

        let sbc = Equation::SafeBearingCapacity.metadata();
        assert_eq!(sbc.formula_plain, "q_s = 10 * N2");
    }

    #[test]
    fn test_code_reference_citation() {
        assert_eq!(CodeReference::Is2131 { year: 1981 }.citation(), "IS 2131:1981");
        assert_eq!(CodeReference::LiaoWhitman { year: 1986 }.citation(), "Liao & Whitman (1986)");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::OverburdenCorrectionFactor, "a");
        tracker.record(Equation::OverburdenCorrectedN, "a");
        tracker.record(Equation::OverburdenCorrectionFactor, "b");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations().len(), 2);
        assert!(tracker.contains(Equation::OverburdenCorrectedN));
        assert!(!tracker.contains(Equation::DilatancyCorrection));
    }

    #[test]
    fn test_by_category_follows_pipeline_order() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::SafeBearingCapacity, "test");
        tracker.record(Equation::OverburdenCorrectedN, "test");
        tracker.record(Equation::EffectiveStressAboveWaterTable, "test");

        let categories: Vec<_> = tracker.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            categories,
            vec![
                EquationCategory::OverburdenStress,
                EquationCategory::NValueCorrections,
                EquationCategory::BearingCapacity,
            ]
        );
    }

    #[test]
    fn test_appendix_lists_only_recorded_equations() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::EffectiveStressAboveWaterTable, "test");

        let typst = tracker.generate_appendix_typst();
        assert!(typst.contains("Effective Stress Above Water Table"));
        assert!(!typst.contains("Dilatancy Correction"));
    }

    #[test]
    fn test_empty_appendix() {
        let typst = EquationTracker::new().generate_appendix_typst();
        assert!(typst.contains("No equations recorded"));
    }

    #[test]
    fn test_markdown_covers_every_equation() {
        let markdown = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(markdown.contains(eq.metadata().name));
        }
    }
}
