//! # Bearing Capacity Equations
//!
//! Metadata for every formula the pipeline applies, kept in one place so the
//! report appendix and the generated EQUATIONS.md cite the same source.
//!
//! - [`registry`] - Equation metadata and per-calculation usage tracking
//!
//! ## References
//!
//! - IS 2131:1981 Method for Standard Penetration Test for Soils
//! - Terzaghi & Peck, Soil Mechanics in Engineering Practice
//! - Liao & Whitman (1986), Overburden correction factors for SPT in sand

pub mod registry;

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
