// SPDX-License-Identifier: Apache-2.0

use crate::io::IO;
use crate::port::Port;

/// Represents one occurrence of an IP block in the top-level design, like
/// `<module> <instance> ( ... );` in Verilog. Ports are kept in declaration
/// order, which is also the order they are bound in the emitted
/// instantiation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModInst {
    pub(crate) name: String,
    pub(crate) module: Option<String>,
    pub(crate) ports: Vec<Port>,
}

impl ModInst {
    /// Creates a new instance with the given name and no ports.
    pub fn new(name: impl Into<String>) -> Self {
        ModInst {
            name: name.into(),
            module: None,
            ports: Vec::new(),
        }
    }

    /// Sets the name of the module definition this instance instantiates.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Appends a port with the given name. The direction and width are
    /// specified via the `io` parameter.
    pub fn add_port(&mut self, name: impl Into<String>, io: IO) -> &mut Self {
        self.ports.push(Port::new(name, io));
        self
    }

    /// Returns the name of this instance.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the module definition name used when emitting this instance.
    /// Falls back to the instance name if no module was given.
    pub fn module_name(&self) -> &str {
        self.module.as_deref().unwrap_or(&self.name)
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Returns the first port on this instance with the given name.
    pub fn get_port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|port| port.name == name)
    }
}
