// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Represents the direction (`Input` or `Output`) and bit width of a port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IO {
    Input(usize),
    Output(usize),
}

impl IO {
    /// Returns the width of the port in bits.
    pub fn width(&self) -> usize {
        match self {
            IO::Input(width) => *width,
            IO::Output(width) => *width,
        }
    }

    /// Returns `true` if a port with this direction drives its net.
    pub fn is_driver(&self) -> bool {
        matches!(self, IO::Output(_))
    }

    /// Direction keyword as it appears in descriptions and in Verilog.
    pub fn direction(&self) -> &'static str {
        match self {
            IO::Input(_) => "input",
            IO::Output(_) => "output",
        }
    }

    /// Builds an IO from a direction keyword (`"input"` or `"output"`).
    pub fn from_direction(direction: &str, width: usize) -> Option<IO> {
        match direction {
            "input" => Some(IO::Input(width)),
            "output" => Some(IO::Output(width)),
            _ => None,
        }
    }
}

impl fmt::Display for IO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.direction(), self.width())
    }
}
