// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use autostitch::{AnalysisConfig, LoadError};
use clap::Parser;

/// Wire IP instances together by port name and emit a SystemVerilog top module
#[derive(Parser, Debug)]
#[command(name = "autostitch")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON design description
    pub design: PathBuf,

    /// Where to write the generated top module
    #[arg(short, long, default_value = "output/top_generated.sv")]
    pub output: PathBuf,

    /// Name of the generated top module (overrides the description)
    #[arg(long)]
    pub top: Option<String>,

    /// Signal allowed to be shared without an internal driver (repeatable)
    #[arg(short = 'x', long = "external", value_name = "SIGNAL")]
    pub externals: Vec<String>,

    /// TOML file with analysis settings
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not treat clk and rst_n as external inputs by default
    #[arg(long, default_value_t = false)]
    pub no_default_externals: bool,
}

impl Args {
    /// Combine the config file, the built-in defaults and `--external` flags
    /// into the analysis configuration.
    pub fn to_config(&self) -> Result<AnalysisConfig, LoadError> {
        let config = match &self.config {
            Some(path) => AnalysisConfig::from_toml_file(path)?,
            None => AnalysisConfig::default(),
        };
        let config = if self.no_default_externals {
            config
        } else {
            config.with_externals(autostitch::DEFAULT_EXTERNAL_INPUTS.iter().copied())
        };
        Ok(config.with_externals(self.externals.iter().cloned()))
    }
}
