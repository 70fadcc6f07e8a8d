// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::config::AnalysisConfig;
use crate::connectivity::net::{Net, NetKind};
use crate::error::ConnectivityError;
use crate::io::IO;
use crate::mod_inst::ModInst;

/// One port taking part in a signal group.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SignalMember<'a> {
    pub(crate) instance: &'a str,
    pub(crate) io: IO,
}

/// All ports, across all instances, that share a signal name. Members are
/// kept in the order they were encountered.
#[derive(Clone, Debug)]
pub(crate) struct SignalGroup<'a> {
    pub(crate) signal: &'a str,
    pub(crate) members: Vec<SignalMember<'a>>,
}

/// Groups every port by name. Groups are ordered by the first appearance of
/// their signal name, members by instance order and then port order.
pub(crate) fn group_by_signal(
    instances: &[ModInst],
) -> Result<IndexMap<&str, SignalGroup<'_>>, ConnectivityError> {
    let mut groups: IndexMap<&str, SignalGroup> = IndexMap::new();

    for inst in instances {
        let mut seen = HashSet::new();
        for port in inst.ports() {
            if !seen.insert(port.name()) {
                return Err(ConnectivityError::DuplicatePort {
                    instance: inst.name().to_string(),
                    port: port.name().to_string(),
                });
            }
            groups
                .entry(port.name())
                .or_insert_with(|| SignalGroup {
                    signal: port.name(),
                    members: Vec::new(),
                })
                .members
                .push(SignalMember {
                    instance: inst.name(),
                    io: port.io(),
                });
        }
    }

    Ok(groups)
}

impl SignalGroup<'_> {
    /// Returns the common width of all members, or a width mismatch listing
    /// the distinct widths in the order they were seen.
    pub(crate) fn common_width(&self) -> Result<usize, ConnectivityError> {
        let widths = self
            .members
            .iter()
            .map(|member| member.io.width())
            .unique()
            .collect::<Vec<_>>();

        if widths.len() == 1 {
            Ok(widths[0])
        } else {
            Err(ConnectivityError::WidthMismatch {
                signal: self.signal.to_string(),
                widths,
            })
        }
    }

    /// Decides which net this group becomes.
    pub(crate) fn resolve(&self, config: &AnalysisConfig) -> Result<Net, ConnectivityError> {
        let width = self.common_width()?;

        if let [member] = self.members.as_slice() {
            return Ok(Net {
                name: isolated_net_name(member.instance, self.signal),
                width,
                kind: NetKind::Isolated {
                    instance: member.instance.to_string(),
                },
            });
        }

        let drivers = self
            .members
            .iter()
            .filter(|member| member.io.is_driver())
            .collect::<Vec<_>>();

        let kind = match drivers.as_slice() {
            [] if config.allows_external(self.signal) => NetKind::External,
            [] => {
                return Err(ConnectivityError::MissingDriver {
                    signal: self.signal.to_string(),
                });
            }
            [driver] => NetKind::Driven {
                driver: driver.instance.to_string(),
            },
            _ => {
                return Err(ConnectivityError::MultipleDrivers {
                    signal: self.signal.to_string(),
                    drivers: drivers
                        .iter()
                        .map(|driver| driver.instance.to_string())
                        .collect(),
                });
            }
        };

        Ok(Net {
            name: self.signal.to_string(),
            width,
            kind,
        })
    }
}

/// Name of the private net for a signal that only one instance uses.
pub fn isolated_net_name(inst_name: &str, signal: &str) -> String {
    format!("{inst_name}__{signal}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inst(name: &str, ports: &[(&str, IO)]) -> ModInst {
        let mut inst = ModInst::new(name);
        for (port_name, io) in ports {
            inst.add_port(*port_name, *io);
        }
        inst
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let instances = vec![
            inst("a", &[("clk", IO::Input(1)), ("data", IO::Output(8))]),
            inst("b", &[("data", IO::Input(8)), ("irq", IO::Output(1))]),
            inst("c", &[("irq", IO::Input(1)), ("clk", IO::Input(1))]),
        ];
        let groups = group_by_signal(&instances).unwrap();

        assert_eq!(
            groups.keys().copied().collect::<Vec<_>>(),
            vec!["clk", "data", "irq"]
        );
        assert_eq!(
            groups["clk"]
                .members
                .iter()
                .map(|m| m.instance)
                .collect::<Vec<_>>(),
            vec!["a", "c"]
        );
    }

    #[test]
    fn duplicate_port_on_one_instance() {
        let instances = vec![inst("a", &[("x", IO::Input(1)), ("x", IO::Output(1))])];
        assert_eq!(
            group_by_signal(&instances).unwrap_err(),
            ConnectivityError::DuplicatePort {
                instance: "a".to_string(),
                port: "x".to_string(),
            }
        );
    }

    #[test]
    fn widths_reported_in_first_seen_order() {
        let instances = vec![
            inst("a", &[("bus", IO::Output(16))]),
            inst("b", &[("bus", IO::Input(8))]),
            inst("c", &[("bus", IO::Input(16))]),
        ];
        let groups = group_by_signal(&instances).unwrap();
        assert_eq!(
            groups["bus"].common_width().unwrap_err(),
            ConnectivityError::WidthMismatch {
                signal: "bus".to_string(),
                widths: vec![16, 8],
            }
        );
    }

    #[test]
    fn isolated_output_gets_private_net() {
        let instances = vec![inst("dma", &[("done", IO::Output(1))])];
        let groups = group_by_signal(&instances).unwrap();
        let net = groups["done"].resolve(&AnalysisConfig::default()).unwrap();
        assert_eq!(net.name(), "dma__done");
        assert_eq!(
            net.kind(),
            &NetKind::Isolated {
                instance: "dma".to_string()
            }
        );
    }

    #[test]
    fn allowance_does_not_hide_multiple_drivers() {
        let instances = vec![
            inst("a", &[("clk", IO::Output(1))]),
            inst("b", &[("clk", IO::Output(1))]),
        ];
        let groups = group_by_signal(&instances).unwrap();
        let config = AnalysisConfig::default().with_external("clk");
        assert_eq!(
            groups["clk"].resolve(&config).unwrap_err(),
            ConnectivityError::MultipleDrivers {
                signal: "clk".to_string(),
                drivers: vec!["a".to_string(), "b".to_string()],
            }
        );
    }
}
