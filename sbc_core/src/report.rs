//! # Report Metadata
//!
//! Header data and naming rules shared by every report output (terminal
//! summary, GUI, PDF).
//!
//! ## Example
//!
//! ```rust
//! use sbc_core::report::{report_file_name, ReportMeta};
//!
//! let meta = ReportMeta::new("NCC Co & Lab Pvt Ltd");
//! assert_eq!(meta.file_name(), "SBC_Report_NCC_Co_Lab_Pvt_Ltd.pdf");
//! assert_eq!(report_file_name(""), "SBC_Report.pdf");
//! ```

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Organization used when none is configured
pub const DEFAULT_ORGANIZATION: &str = "NCC Co & Lab Pvt Ltd";

/// Report title line
pub const REPORT_TITLE: &str = "SPT-Based Safe Bearing Capacity Report";

/// Fixed disclaimer printed at the end of every report
pub const DISCLAIMER: &str = "Note: Based on IS 2131 - Always verify with a geotechnical engineer.";

/// Timestamp format used in report headers
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Header data for one generated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Organization shown in the report header and file name
    pub organization: String,

    /// When the report was generated
    pub generated_at: DateTime<Local>,
}

impl ReportMeta {
    /// Metadata stamped with the current local time
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            generated_at: Local::now(),
        }
    }

    pub fn with_timestamp(organization: impl Into<String>, generated_at: DateTime<Local>) -> Self {
        Self {
            organization: organization.into(),
            generated_at,
        }
    }

    pub fn timestamp_label(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn file_name(&self) -> String {
        report_file_name(&self.organization)
    }
}

impl Default for ReportMeta {
    fn default() -> Self {
        Self::new(DEFAULT_ORGANIZATION)
    }
}

/// Deterministic report file name: `SBC_Report_<Org>.pdf`.
///
/// Runs of characters that are not ASCII alphanumeric collapse into one `_`.
pub fn report_file_name(organization: &str) -> String {
    let mut stem = String::with_capacity(organization.len());
    for c in organization.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c);
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
    }
    let stem = stem.trim_end_matches('_');

    if stem.is_empty() {
        "SBC_Report.pdf".to_string()
    } else {
        format!("SBC_Report_{}.pdf", stem)
    }
}
