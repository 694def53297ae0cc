use std::fs;
use std::io;
use std::path::Path;

use crate::constants::{MAX_ROM_SIZE, ROM_EXTENSION};
use crate::error::LoadError;

/// Reads a ROM from disk, checking that it could be loaded.
///
/// A ROM must:
/// - have a `.ch8` extension (in any case)
/// - be readable
/// - fit between the load address and the end of memory
pub fn read_rom(path: &Path) -> Result<Vec<u8>, LoadError> {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(ROM_EXTENSION));
    if !has_extension {
        return Err(LoadError::InvalidExtension {
            path: path.to_path_buf(),
        });
    }

    let unreadable = |source: io::Error| LoadError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };
    let size = fs::metadata(path).map_err(unreadable)?.len();
    if size > MAX_ROM_SIZE as u64 {
        return Err(LoadError::RomTooLarge {
            size: usize::try_from(size).unwrap_or(usize::MAX),
            max: MAX_ROM_SIZE,
        });
    }

    // The file may have grown since its metadata was read
    let bytes = fs::read(path).map_err(unreadable)?;
    check_size(&bytes)?;
    Ok(bytes)
}

/// Rejects programs that would run past the end of memory
pub fn check_size(program: &[u8]) -> Result<(), LoadError> {
    if program.len() > MAX_ROM_SIZE {
        return Err(LoadError::RomTooLarge {
            size: program.len(),
            max: MAX_ROM_SIZE,
        });
    }
    Ok(())
}
