// SPDX-License-Identifier: Apache-2.0

//! Command-line front end: load a design description, infer and validate its
//! connectivity, and write the generated top module.

mod args;

use std::process::ExitCode;

use autostitch::{Design, Error, LoadError, is_verilog_identifier};
use clap::Parser;
use log::{error, info};

use args::Args;

fn run(args: &Args) -> Result<(), Error> {
    let config = args.to_config()?;

    info!("Loading design from {}", args.design.display());
    let mut design = Design::from_json_file(&args.design)?;
    if let Some(top) = &args.top {
        design.top = top.clone();
    }
    if !is_verilog_identifier(&design.top) {
        return Err(LoadError::InvalidName { name: design.top }.into());
    }

    design.emit_to_file(&args.output, &config)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
