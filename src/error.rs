//! Error related data structures.

use std::fmt::{self, Display, Formatter};

/// Top level enum for error handling within the core.
///
/// Most of the time you will want to use the `CustomError` variant
/// to provide a more detailed, free-form error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An opcode (or CB-prefixed opcode) with no matching entry in the
    /// instruction tables was fetched. Carries the PC it was fetched at
    /// and the raw opcode byte.
    DecodeError { pc: u16, opcode: u8, prefixed: bool },

    /// The cartridge header declares a mapper type this core does not
    /// implement (only MBC0 and MBC1 are supported).
    MapperUnsupported(u8),

    /// A ROM byte array failed basic size/shape validation.
    RomSize,

    /// Propagated unchanged from a host-provided ROM/RAM file operation.
    RomIo(String),

    /// The program counter did not move across a `step`, treated as an
    /// infinite loop rather than silently spinning forever.
    StateDrift(u16),

    CustomError(String),
}

impl Error {
    pub fn description(&self) -> String {
        match self {
            Error::DecodeError {
                pc,
                opcode,
                prefixed,
            } => {
                if *prefixed {
                    format!("Unknown CB-prefixed opcode 0x{opcode:02x} at 0x{pc:04x}")
                } else {
                    format!("Unknown opcode 0x{opcode:02x} at 0x{pc:04x}")
                }
            }
            Error::MapperUnsupported(kind) => format!("Unsupported cartridge type 0x{kind:02x}"),
            Error::RomSize => String::from("Invalid ROM size"),
            Error::RomIo(message) => message.clone(),
            Error::StateDrift(pc) => format!("PC did not advance past 0x{pc:04x}"),
            Error::CustomError(message) => message.clone(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
