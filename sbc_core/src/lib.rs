//! # sbc_core - SPT Safe Bearing Capacity Engine
//!
//! `sbc_core` computes the Safe Bearing Capacity of soil from a Standard
//! Penetration Test N-value using the IS 2131 correction procedure:
//!
//! effective overburden stress → overburden correction factor →
//! dilatancy-corrected N-value → SBC
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from inputs to a complete result
//! - **JSON-First**: All inputs, results and errors implement Serialize/Deserialize
//! - **All or nothing**: A calculation returns every result field or an error
//! - **Presentation apart**: Summary text and the PDF report consume a finished result
//!
//! ## Quick Start
//!
//! ```rust
//! use sbc_core::{evaluate, SbcInput};
//!
//! let result = evaluate(&SbcInput::default()).unwrap();
//! println!("SBC = {:.2} kN/m²", result.sbc_kn_m2);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The stress, correction and bearing capacity pipeline
//! - [`parameters`] - Input value types, ranges and defaults
//! - [`equations`] - Equation metadata for the report appendix
//! - [`soil_types`] - Typical soil unit weight reference table
//! - [`summary`] - Two-decimal on-screen summary lines
//! - [`report`] - Report header data and file naming
//! - [`pdf`] - Typst PDF report rendering
//! - [`config`] - TOML configuration
//! - [`units`] - Metric unit newtypes
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod parameters;
pub mod pdf;
pub mod report;
pub mod soil_types;
pub mod summary;
pub mod units;

#[cfg(test)]
mod proptests;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, evaluate, SbcInput, SbcResult};
pub use config::SbcConfig;
pub use errors::{CalcError, CalcResult, DomainErrorKind};
pub use parameters::{SiteGeometry, SoilParameters, SptObservation};
pub use report::ReportMeta;
