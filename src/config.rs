// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use indexmap::IndexSet;
use serde::Deserialize;

use crate::error::LoadError;

/// Signals the original flow treats as driven from outside the top module.
pub const DEFAULT_EXTERNAL_INPUTS: &[&str] = &["clk", "rst_n"];

/// Policy knobs for connectivity analysis.
///
/// `allow_unrouted_as_external` lists signal names that may be shared by
/// several instances without any internal driver. Such a signal becomes a
/// single net named after the signal and is exposed as an input of the
/// emitted top module. The default is empty, so every driverless shared
/// signal is an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub allow_unrouted_as_external: IndexSet<String>,
}

impl AnalysisConfig {
    /// Configuration allowing the clock and reset signals to come from outside.
    pub fn with_default_externals() -> Self {
        Self::default().with_externals(DEFAULT_EXTERNAL_INPUTS.iter().copied())
    }

    /// Adds one signal name to the external-input allowance.
    pub fn with_external(mut self, signal: impl Into<String>) -> Self {
        self.allow_unrouted_as_external.insert(signal.into());
        self
    }

    /// Adds several signal names to the external-input allowance.
    pub fn with_externals<I, S>(mut self, signals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_unrouted_as_external
            .extend(signals.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if `signal` may be left without an internal driver.
    pub fn allows_external(&self, signal: &str) -> bool {
        self.allow_unrouted_as_external.contains(signal)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
