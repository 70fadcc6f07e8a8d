// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::LoadError;
use crate::io::IO;
use crate::mod_inst::ModInst;
use crate::util::is_verilog_identifier;

/// Module name used for the generated top when the description names none.
pub const DEFAULT_TOP_NAME: &str = "top";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDesign {
    #[serde(default)]
    top: Option<String>,
    ips: Vec<RawIp>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawIp {
    instance: String,
    #[serde(default)]
    module: Option<String>,
    ports: Vec<RawPort>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPort {
    name: String,
    dir: String,
    width: usize,
}

/// A design description: the name of the top module to generate and the IP
/// instances it contains, in description order.
///
/// The JSON form is:
///
/// ```json
/// {
///   "top": "soc_top",
///   "ips": [
///     {
///       "instance": "cpu0",
///       "module": "cpu",
///       "ports": [
///         { "name": "clk", "dir": "input", "width": 1 },
///         { "name": "data", "dir": "output", "width": 32 }
///       ]
///     }
///   ]
/// }
/// ```
///
/// `top` and `module` are optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Design {
    pub top: String,
    pub instances: Vec<ModInst>,
}

impl Design {
    /// Parses and checks a JSON design description.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let raw: RawDesign = serde_json::from_str(text)?;

        let top = raw.top.unwrap_or_else(|| DEFAULT_TOP_NAME.to_string());
        check_identifier(&top)?;

        let mut inst_names = HashSet::new();
        let mut instances = Vec::with_capacity(raw.ips.len());

        for ip in raw.ips {
            check_identifier(&ip.instance)?;
            if !inst_names.insert(ip.instance.clone()) {
                return Err(LoadError::DuplicateInstance {
                    instance: ip.instance,
                });
            }

            let mut inst = ModInst::new(ip.instance.as_str());
            if let Some(module) = ip.module {
                check_identifier(&module)?;
                inst = inst.with_module(module);
            }

            for port in ip.ports {
                check_identifier(&port.name)?;
                if port.width == 0 {
                    return Err(LoadError::ZeroWidth {
                        instance: ip.instance,
                        port: port.name,
                    });
                }
                let io = IO::from_direction(&port.dir, port.width).ok_or_else(|| {
                    LoadError::UnknownDirection {
                        instance: ip.instance.clone(),
                        port: port.name.clone(),
                        direction: port.dir.clone(),
                    }
                })?;
                inst.add_port(port.name, io);
            }

            debug!(
                "Loaded instance {} of {} with {} ports",
                inst.name(),
                inst.module_name(),
                inst.ports().len()
            );
            instances.push(inst);
        }

        Ok(Design { top, instances })
    }

    /// Reads and checks a JSON design description from a file.
    pub fn from_json_file(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

fn check_identifier(name: &str) -> Result<(), LoadError> {
    if is_verilog_identifier(name) {
        Ok(())
    } else {
        Err(LoadError::InvalidName {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_defaults() {
        let design = Design::from_json_str(r#"{"ips": []}"#).unwrap();
        assert_eq!(design.top, DEFAULT_TOP_NAME);
        assert!(design.instances.is_empty());
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(matches!(
            Design::from_json_str(r#"{"ips": [], "nets": []}"#),
            Err(LoadError::Json(_))
        ));
    }
}
