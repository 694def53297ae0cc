use std::path::Path;

use log::{error, info, trace};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::constants::{LOAD_ADDRESS, NUM_KEYS};
use crate::error::{Fault, LoadError};
use crate::instruction::from_op;
use crate::rom::{check_size, read_rom};
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random source consumed by `Cxkk`
///  - the fault, if any, that halted the machine
///
/// Supplies interfaces for:
/// - loading roms
/// - writing the keypad
/// - advancing the CPU (and its timers) one cycle at a time
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8<R: RngCore = StdRng> {
    state: State,
    rng: R,
    halted: Option<Fault>,
}

impl Chip8 {
    /// A Chip8 whose random numbers are seeded from the OS
    pub fn new() -> Self {
        Chip8::with_rng(StdRng::from_entropy())
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Chip8<R> {
    /// A Chip8 drawing its random numbers from `rng`
    pub fn with_rng(rng: R) -> Self {
        Chip8 {
            state: State::new(),
            rng,
            halted: None,
        }
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `path` a `.ch8` file no larger than the program space
    pub fn load_rom(&mut self, path: &Path) -> Result<(), LoadError> {
        let program = read_rom(path)?;
        self.load_program(&program)?;
        info!("loaded {} bytes from {}", program.len(), path.display());
        Ok(())
    }

    /// Copy a program into memory at the load address.
    /// Memory is untouched if the program doesn't fit.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        check_size(program)?;
        let start = LOAD_ADDRESS as usize;
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        Ok(())
    }

    /// The pressed status of keys 0..F, for the input handler to overwrite
    pub fn keypad_mut(&mut self) -> &mut [bool; NUM_KEYS] {
        &mut self.state.keypad
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn, clearing the draw flag
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Read-only view of the whole machine
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The fault that stopped the machine, if it has stopped
    pub fn halted(&self) -> Option<Fault> {
        self.halted
    }

    /// Advances the CPU by a single cycle
    /// - fetches the opcode pointed at by the pc and moves the pc past it
    /// - executes the opcode
    /// - decrements any running timers
    ///
    /// A fault halts the machine: it's returned now and from every later call
    /// without anything else happening.
    pub fn cycle(&mut self) -> Result<(), Fault> {
        if let Some(fault) = self.halted {
            return Err(fault);
        }

        if let Err(fault) = self.step() {
            error!("halting: {}", fault);
            self.halted = Some(fault);
            return Err(fault);
        }

        self.state.tick_timers();
        Ok(())
    }

    fn step(&mut self) -> Result<(), Fault> {
        let op = self.state.fetch()?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        self.state.pc = self.state.pc.wrapping_add(0x2);
        from_op(op)(op, &mut self.state, &mut self.rng)
    }
}

#[cfg(test)]
impl<R: RngCore> Chip8<R> {
    pub(crate) fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}
