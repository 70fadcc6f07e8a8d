// SPDX-License-Identifier: Apache-2.0

use crate::io::IO;

/// Represents a named terminal on an IP instance. The direction and bit width
/// are carried together in `io`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Port {
    pub(crate) name: String,
    pub(crate) io: IO,
}

impl Port {
    pub fn new(name: impl Into<String>, io: IO) -> Self {
        Port {
            name: name.into(),
            io,
        }
    }

    /// Returns the name of this port, which is also the signal it is matched
    /// on across instances.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn io(&self) -> IO {
        self.io
    }

    pub fn width(&self) -> usize {
        self.io.width()
    }

    pub fn is_driver(&self) -> bool {
        self.io.is_driver()
    }
}
