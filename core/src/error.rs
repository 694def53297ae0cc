use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a ROM can be rejected before any of it reaches memory
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{path:?} is not a .ch8 file")]
    InvalidExtension { path: PathBuf },

    #[error("unable to read {path:?}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },
}

/// Conditions that stop the emulated program.
///
/// `pc` is the address of the instruction that faulted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("stack overflow: call at {pc:#06X} with all 16 stack slots in use")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("memory access out of range at address {address:#06X} (pc {pc:#06X})")]
    MemoryOutOfRange { address: usize, pc: u16 },
}
