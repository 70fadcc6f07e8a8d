// SPDX-License-Identifier: Apache-2.0

//! Infers how IP instances should be wired together by matching port names,
//! checks the result, and emits a SystemVerilog top module.
//!
//! ```
//! use autostitch::*;
//!
//! let mut producer = ModInst::new("producer");
//! producer.add_port("data", IO::Output(8));
//! let mut consumer = ModInst::new("consumer");
//! consumer.add_port("data", IO::Input(8));
//!
//! let connectivity = analyze(&[producer, consumer], &AnalysisConfig::default()).unwrap();
//! assert_eq!(connectivity.net_for("consumer", "data"), Some("data"));
//! ```

mod config;
mod connectivity;
mod design;
mod emit;
mod error;
mod io;
mod mod_inst;
mod port;
mod util;

pub use config::{AnalysisConfig, DEFAULT_EXTERNAL_INPUTS};
pub use connectivity::{
    ConnectionMap, Connectivity, Net, NetKind, PortKey, analyze, isolated_net_name,
};
pub use design::{DEFAULT_TOP_NAME, Design};
pub use emit::emit;
pub use error::{ConnectivityError, EmitError, Error, LoadError};
pub use io::IO;
pub use mod_inst::ModInst;
pub use port::Port;
pub use util::is_verilog_identifier;
