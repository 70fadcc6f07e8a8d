// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use itertools::Itertools;
use thiserror::Error;

/// Wiring defects found while inferring connectivity. Each one aborts the
/// analysis; they must be fixed in the design description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectivityError {
    /// Ports sharing a signal name disagree on bit width.
    #[error(
        "Width mismatch detected on signal '{signal}' (widths: {})",
        .widths.iter().join(", ")
    )]
    WidthMismatch { signal: String, widths: Vec<usize> },

    /// A shared signal has no output port and is not an allowed external input.
    #[error("No driver found for shared signal '{signal}'")]
    MissingDriver { signal: String },

    /// A shared signal has more than one output port.
    #[error(
        "Multiple drivers detected on signal '{signal}' (driven by {})",
        .drivers.iter().join(", ")
    )]
    MultipleDrivers {
        signal: String,
        drivers: Vec<String>,
    },

    /// An instance declares the same port name more than once.
    #[error("Port '{port}' is declared more than once on instance '{instance}'")]
    DuplicatePort { instance: String, port: String },

    /// Two nets ended up with the same name.
    #[error("Net \"{net}\" is already declared")]
    NetNameCollision { net: String },
}

impl ConnectivityError {
    /// Returns the signal (or net) name the error is about.
    pub fn signal(&self) -> &str {
        match self {
            ConnectivityError::WidthMismatch { signal, .. }
            | ConnectivityError::MissingDriver { signal }
            | ConnectivityError::MultipleDrivers { signal, .. } => signal,
            ConnectivityError::DuplicatePort { port, .. } => port,
            ConnectivityError::NetNameCollision { net } => net,
        }
    }
}

/// Problems reading a design description or configuration file. These are
/// reported before any analysis runs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed design description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Port '{port}' on instance '{instance}' has unknown direction '{direction}'")]
    UnknownDirection {
        instance: String,
        port: String,
        direction: String,
    },

    #[error("Port '{port}' on instance '{instance}' has zero width")]
    ZeroWidth { instance: String, port: String },

    #[error("'{name}' is not a legal Verilog identifier")]
    InvalidName { name: String },

    #[error("Instance '{instance}' is declared more than once")]
    DuplicateInstance { instance: String },
}

/// Problems rendering the top module from analysis results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("{instance}.{port} is unconnected")]
    Unconnected { instance: String, port: String },

    /// An instance name is already used by a net or another instance.
    #[error("Name \"{name}\" is already declared in module {module}")]
    NameCollision { name: String, module: String },
}

/// Any failure of the load, analyze, emit flow.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
