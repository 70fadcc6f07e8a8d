// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use indexmap::IndexSet;
use log::info;

use crate::config::AnalysisConfig;
use crate::connectivity::{Connectivity, analyze};
use crate::design::Design;
use crate::error::{EmitError, Error};
use crate::mod_inst::ModInst;

/// Returns SystemVerilog for a top module named `top` that instantiates
/// `instances` and wires them according to `connectivity`.
///
/// External nets become input ports of the top module; every other net is
/// declared as a wire. Instances are emitted in the given order with their
/// ports bound in declaration order. Instance names share the module's
/// namespace with nets, so an instance named like a net, or two instances
/// with the same name, are rejected.
pub fn emit(
    top: &str,
    instances: &[ModInst],
    connectivity: &Connectivity,
) -> Result<String, EmitError> {
    let mut lines = Vec::new();

    let mut collision_detection = connectivity
        .nets()
        .iter()
        .map(|net| net.name())
        .collect::<IndexSet<_>>();

    let inputs = connectivity
        .external_inputs()
        .map(|net| format!("  input wire {}{}", range(net.width()), net.name()))
        .collect::<Vec<_>>();

    if inputs.is_empty() {
        lines.push(format!("module {top};"));
    } else {
        lines.push(format!("module {top}("));
        lines.push(inputs.join(",\n"));
        lines.push(");".to_string());
    }

    for net in connectivity.nets().iter().filter(|net| !net.is_external()) {
        lines.push(format!("  wire {}{};", range(net.width()), net.name()));
    }

    for inst in instances {
        if !collision_detection.insert(inst.name()) {
            return Err(EmitError::NameCollision {
                name: inst.name().to_string(),
                module: top.to_string(),
            });
        }

        let mut bindings = Vec::with_capacity(inst.ports().len());
        for port in inst.ports() {
            let net = connectivity
                .net_for(inst.name(), port.name())
                .ok_or_else(|| EmitError::Unconnected {
                    instance: inst.name().to_string(),
                    port: port.name().to_string(),
                })?;
            bindings.push(format!("    .{}({})", port.name(), net));
        }

        if bindings.is_empty() {
            lines.push(format!("  {} {} ();", inst.module_name(), inst.name()));
        } else {
            lines.push(format!("  {} {} (", inst.module_name(), inst.name()));
            lines.push(bindings.join(",\n"));
            lines.push("  );".to_string());
        }
    }

    lines.push("endmodule".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}

/// Packed range prefix for a vector of `width` bits; empty for single bits.
fn range(width: usize) -> String {
    if width == 1 {
        String::new()
    } else {
        format!("[{}:0] ", width - 1)
    }
}

impl Design {
    /// Infers and validates the connectivity of this design's instances.
    pub fn analyze(&self, config: &AnalysisConfig) -> Result<Connectivity, Error> {
        Ok(analyze(&self.instances, config)?)
    }

    /// Returns the generated top module as a string, after validating the
    /// design's connectivity.
    pub fn emit(&self, config: &AnalysisConfig) -> Result<String, Error> {
        let connectivity = self.analyze(config)?;
        Ok(emit(&self.top, &self.instances, &connectivity)?)
    }

    /// Writes the generated top module to the given file path, creating
    /// parent directories as needed.
    pub fn emit_to_file(&self, path: &Path, config: &AnalysisConfig) -> Result<(), Error> {
        let text = self.emit(config)?;
        let write_err = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, text).map_err(write_err)?;
        info!("Wrote module {} to {}", self.top, path.display());
        Ok(())
    }
}
