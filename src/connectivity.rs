// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use log::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::error::ConnectivityError;
use crate::mod_inst::ModInst;

mod net;
mod signal_group;

pub use net::{Net, NetKind};
pub use signal_group::isolated_net_name;

use signal_group::group_by_signal;

/// Identifies one port of one instance. Since port names double as signal
/// names, this is also the `(instance, signal)` pair a connection is keyed
/// on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortKey {
    pub inst_name: String,
    pub signal: String,
}

impl PortKey {
    pub fn new(inst_name: impl Into<String>, signal: impl Into<String>) -> Self {
        PortKey {
            inst_name: inst_name.into(),
            signal: signal.into(),
        }
    }

    pub(crate) fn debug_string(&self) -> String {
        format!("{}.{}", self.inst_name, self.signal)
    }
}

impl fmt::Display for PortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

/// Maps every `(instance, signal)` pair to the name of the net it is bound to.
pub type ConnectionMap = IndexMap<PortKey, String>;

/// Result of a successful analysis: the nets of the top module and the net
/// each instance port is bound to. Both are ordered by first appearance of
/// the signal name, and connections within a signal follow instance order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Connectivity {
    nets: Vec<Net>,
    connections: ConnectionMap,
}

impl Connectivity {
    pub fn nets(&self) -> &[Net] {
        &self.nets
    }

    pub fn connections(&self) -> &ConnectionMap {
        &self.connections
    }

    /// Returns the net with the given name, if any.
    pub fn get_net(&self, name: &str) -> Option<&Net> {
        self.nets.iter().find(|net| net.name == name)
    }

    /// Returns the name of the net that port `signal` of instance `inst_name`
    /// is connected to.
    pub fn net_for(&self, inst_name: &str, signal: &str) -> Option<&str> {
        self.connections
            .get(&PortKey::new(inst_name, signal))
            .map(String::as_str)
    }

    /// Nets that have no internal driver and become top-level inputs.
    pub fn external_inputs(&self) -> impl Iterator<Item = &Net> {
        self.nets.iter().filter(|net| net.is_external())
    }

    /// Ports connected to `net_name`, in connection order.
    pub fn ports_on_net<'a>(&'a self, net_name: &'a str) -> impl Iterator<Item = &'a PortKey> {
        self.connections
            .iter()
            .filter(move |(_, net)| net.as_str() == net_name)
            .map(|(key, _)| key)
    }
}

/// Infers the nets connecting `instances` by matching port names, and
/// validates them.
///
/// Every port name is treated as a signal. A signal that appears on a single
/// instance gets a private net called `<instance>__<signal>`. A signal shared
/// by several instances becomes one net named after the signal, which must be
/// driven by exactly one output port. If a shared signal has no driver and is
/// listed in `config.allow_unrouted_as_external`, it is assumed to come from
/// outside the top module instead.
///
/// Signals are processed in the order they first appear, and the first
/// violation in that order is returned. No partial result is produced on
/// failure.
pub fn analyze(
    instances: &[ModInst],
    config: &AnalysisConfig,
) -> Result<Connectivity, ConnectivityError> {
    let groups = group_by_signal(instances)?;

    let mut collision_detection = IndexSet::new();
    let mut connectivity = Connectivity::default();

    for group in groups.values() {
        let net = group.resolve(config)?;

        if !collision_detection.insert(net.name.clone()) {
            return Err(ConnectivityError::NetNameCollision { net: net.name });
        }

        match &net.kind {
            NetKind::Isolated { instance } if !group.members[0].io.is_driver() => {
                warn!(
                    "{}.{} has no driver; net {} is left floating",
                    instance, group.signal, net.name
                );
            }
            _ => debug!("net {net}"),
        }

        for member in &group.members {
            let key = PortKey::new(member.instance, group.signal);
            debug!("  {} -> {}", key.debug_string(), net.name);
            connectivity.connections.insert(key, net.name.clone());
        }

        connectivity.nets.push(net);
    }

    info!(
        "Inferred {} nets ({} external) for {} ports across {} instances",
        connectivity.nets.len(),
        connectivity.external_inputs().count(),
        connectivity.connections.len(),
        instances.len()
    );

    Ok(connectivity)
}
