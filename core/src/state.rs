use std::ops::Range;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG_REGISTER, FONTSET, FONTSET_ADDRESS, LOAD_ADDRESS,
    MEMORY_SIZE, NUM_KEYS, NUM_REGISTERS, STACK_SIZE,
};
use crate::error::Fault;

/// The FrameBuffer is stored row-major: pixel (x, y) lives at `y * DISPLAY_WIDTH + x`.
/// Lit pixels hold `PIXEL_ON`, unlit pixels hold 0.
pub type FrameBuffer = [u32; DISPLAY_WIDTH * DISPLAY_HEIGHT];

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - all 16 are general purpose
///     - VF doubles as the carry/borrow/collision flag and is overwritten by those instructions
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, starting at the load address
///
/// Pointer
/// - (sp) the number of occupied stack slots (0..=16)
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented once per cycle while nonzero
///
/// ## Memory
/// - 16 slot stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x050..0x0A0 holds the font sprite sheet
///     - 0x200.. holds the loaded ROM
/// - 64x32 frame buffer
///
/// ## Input
/// - 16 flags tracking the pressed status of keys 0..F
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; NUM_REGISTERS],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keypad: [bool; NUM_KEYS],
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font_start = FONTSET_ADDRESS as usize;
        memory[font_start..font_start + FONTSET.len()].copy_from_slice(&FONTSET);

        State {
            v: [0; NUM_REGISTERS],
            i: 0,
            pc: LOAD_ADDRESS,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [0; DISPLAY_WIDTH * DISPLAY_HEIGHT],
            draw_flag: false,
            keypad: [false; NUM_KEYS],
        }
    }

    /// Address of the instruction being executed.
    /// The pc has already been bumped past it by the time a handler runs.
    pub fn current_instruction(&self) -> u16 {
        self.pc.wrapping_sub(0x2)
    }

    /// Writes the flag register; always the last register write of an instruction
    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG_REGISTER] = u8::from(flag);
    }

    /// Pushes a return address
    pub fn push(&mut self, address: u16) -> Result<(), Fault> {
        let pc = self.current_instruction();
        let slot = self
            .stack
            .get_mut(self.sp as usize)
            .ok_or(Fault::StackOverflow { pc })?;
        *slot = address;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address
    pub fn pop(&mut self) -> Result<u16, Fault> {
        if self.sp == 0 {
            return Err(Fault::StackUnderflow {
                pc: self.current_instruction(),
            });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp as usize])
    }

    /// Range of `len` bytes starting at the index register, if it fits in memory
    pub fn index_span(&self, len: usize) -> Result<Range<usize>, Fault> {
        let start = self.i as usize;
        let end = start + len;
        if end > MEMORY_SIZE {
            return Err(Fault::MemoryOutOfRange {
                address: end - 1,
                pc: self.current_instruction(),
            });
        }
        Ok(start..end)
    }

    /// Reads the big-endian instruction at the pc
    pub fn fetch(&self) -> Result<u16, Fault> {
        let pc = self.pc as usize;
        match (self.memory.get(pc), self.memory.get(pc + 1)) {
            (Some(&left), Some(&right)) => Ok(u16::from(left) << 8 | u16::from(right)),
            _ => Err(Fault::MemoryOutOfRange {
                address: pc.max(MEMORY_SIZE),
                pc: self.pc,
            }),
        }
    }

    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
