//! UI module for the SBC GUI
//!
//! # Panel Structure
//! - `toolbar` - Title, Export PDF, Reset and theme toggle
//! - `input_panel` - Left panel: organization and the six input fields
//! - `results_panel` - Right panel: results, calculation details, or the error
//! - `soil_table` - Typical soil unit weight reference table
//! - `status_bar` - Bottom status messages

pub mod input_panel;
pub mod results_panel;
pub mod soil_table;
pub mod status_bar;
pub mod toolbar;
