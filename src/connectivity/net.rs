// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// How a net came to exist.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NetKind {
    /// The signal appears on a single instance only. The net is private to
    /// that instance and named `<instance>__<signal>`.
    Isolated { instance: String },

    /// The signal is shared and driven by the output port of `driver`.
    Driven { driver: String },

    /// The signal is shared, has no internal driver, and is allowed to come
    /// from outside the top module.
    External,
}

/// A single logical wire in the top module.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Net {
    pub(crate) name: String,
    pub(crate) width: usize,
    pub(crate) kind: NetKind,
}

impl Net {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the width of the net in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn kind(&self) -> &NetKind {
        &self.kind
    }

    /// Returns `true` if this net becomes an input port of the top module.
    pub fn is_external(&self) -> bool {
        self.kind == NetKind::External
    }
}

impl fmt::Display for Net {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NetKind::Isolated { instance } => {
                write!(f, "{}[{}] (isolated on {})", self.name, self.width, instance)
            }
            NetKind::Driven { driver } => {
                write!(f, "{}[{}] (driven by {})", self.name, self.width, driver)
            }
            NetKind::External => write!(f, "{}[{}] (external)", self.name, self.width),
        }
    }
}
