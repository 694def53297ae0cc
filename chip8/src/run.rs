use std::path::Path;
use std::time::{Duration, Instant};

use log::info;
use thiserror::Error;

use display::{Display, DisplayError};
use emu8_core::constants::FRAME_PITCH;
use emu8_core::{Chip8, LoadError};

use crate::input::process_input;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error("sdl error: {0}")]
    Sdl(String),
}

/// Runs `rom` until the user quits.
///
/// # Arguments
/// * `rom` path to a `.ch8` file
/// * `scale` the size multiplier for each pixel
/// * `cycle_delay` the minimum time between two CPU cycles
pub fn run(rom: &Path, scale: u32, cycle_delay: Duration) -> Result<(), RunError> {
    let mut chip8: Chip8 = Chip8::new();
    chip8.load_rom(rom)?;

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().map_err(RunError::Sdl)?;
    let mut display: Display = Display::new(&sdl, scale)?;
    let mut events = sdl.event_pump().map_err(RunError::Sdl)?;

    let mut last_cycle: Instant = Instant::now();

    loop {
        if process_input(&mut events, chip8.keypad_mut()) {
            info!("quitting");
            return Ok(());
        }

        // A halted machine keeps its last frame on screen until the user quits
        let current_time = Instant::now();
        if chip8.halted().is_none() && current_time - last_cycle > cycle_delay {
            last_cycle = current_time;
            if chip8.cycle().is_err() {
                info!("{} stopped; close the window to exit", rom.display());
            }
        }

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            display.update(frame, FRAME_PITCH)?;
        }

        // Don't spin while there's nothing left to run
        if chip8.halted().is_some() {
            std::thread::sleep(Duration::from_millis(16));
        }
    }
}
