pub use chip8::Chip8;
pub use error::{Fault, LoadError};
pub use state::{FrameBuffer, State};

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
mod rom;
pub mod state;
