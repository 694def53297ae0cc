use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::error;

mod input;
mod keymap;
mod run;

/// Chip-8 emulator
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Path to a .ch8 ROM
    rom: PathBuf,

    /// Size multiplier for each pixel [default: 10]
    #[arg(requires = "delay")]
    scale: Option<u32>,

    /// Minimum time between CPU cycles, in milliseconds [default: 1]
    delay: Option<u64>,
}

const DEFAULT_SCALE: u32 = 10;
const DEFAULT_CYCLE_DELAY_MS: u64 = 1;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let scale = args.scale.unwrap_or(DEFAULT_SCALE);
    let cycle_delay = Duration::from_millis(args.delay.unwrap_or(DEFAULT_CYCLE_DELAY_MS));

    match run::run(&args.rom, scale, cycle_delay) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
