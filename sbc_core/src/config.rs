//! # Configuration
//!
//! Optional TOML settings shared by the CLI and the GUI: the organization
//! printed on reports and the default values pre-filled in the input form.
//!
//! ```toml
//! organization = "Acme Geotechnical"
//!
//! [defaults.soil]
//! moist_unit_weight_kn_m3 = 19.0
//! submerged_unit_weight_kn_m3 = 9.0
//!
//! [defaults.observation]
//! blow_count = 30
//! reference_pressure_kn_m2 = 100.0
//! ```
//!
//! Missing keys fall back to the built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::SbcInput;
use crate::errors::{CalcError, CalcResult};
use crate::report::DEFAULT_ORGANIZATION;

/// File name looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "sbc.toml";

/// Environment variable overriding the organization name
pub const ORG_ENV_VAR: &str = "SBC_ORG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SbcConfig {
    /// Organization shown in report headers and file names
    pub organization: String,

    /// Initial input values
    pub defaults: SbcInput,
}

impl Default for SbcConfig {
    fn default() -> Self {
        SbcConfig {
            organization: DEFAULT_ORGANIZATION.to_string(),
            defaults: SbcInput::default(),
        }
    }
}

impl SbcConfig {
    /// Parse a configuration document.
    pub fn from_toml_str(contents: &str, origin: &str) -> CalcResult<Self> {
        toml::from_str(contents).map_err(|e| CalcError::Config {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read config", path.display().to_string(), e.to_string())
        })?;
        let config = Self::from_toml_str(&contents, &path.display().to_string())?;
        debug!(path = %path.display(), organization = %config.organization, "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else `sbc.toml` from the working directory if it
    /// exists, else the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(CONFIG_FILE_NAME);
                if local.is_file() {
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Replace the organization when an override is present and non-blank.
    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        if let Some(org) = organization.filter(|o| !o.trim().is_empty()) {
            self.organization = org.trim().to_string();
        }
        self
    }

    /// Render as TOML, e.g. for `--print-config`
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }
}
