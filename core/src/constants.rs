/// Total addressable memory in bytes
pub const MEMORY_SIZE: usize = 4096;

/// 0x200 is where ROMs are loaded into memory
pub const LOAD_ADDRESS: u16 = 0x200;

/// The largest ROM that fits between the load address and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - LOAD_ADDRESS as usize;

/// File extension a ROM must carry to be loaded
pub const ROM_EXTENSION: &str = "ch8";

pub const NUM_REGISTERS: usize = 16;
pub const STACK_SIZE: usize = 16;
pub const NUM_KEYS: usize = 16;

/// Index of VF, the carry/borrow/collision flag
pub const FLAG_REGISTER: usize = 0xF;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Value of a lit pixel in the FrameBuffer; unlit pixels are 0
pub const PIXEL_ON: u32 = 0xFFFF_FFFF;

/// Bytes per FrameBuffer row, as handed to the display
pub const FRAME_PITCH: usize = DISPLAY_WIDTH * std::mem::size_of::<u32>();

/// Address of the first byte of the sprite sheet
pub const FONTSET_ADDRESS: u16 = 0x50;

/// Each font sprite is 5 rows tall
pub const FONT_SPRITE_SIZE: u16 = 5;

/// # Sprite Sheet
/// Sprites for the hexadecimal digits 0..F, one byte per row.
///
/// The glyph for `0` looks like:
/// ```text
/// 11110000  0xF0
/// 10010000  0x90
/// 10010000  0x90
/// 10010000  0x90
/// 11110000  0xF0
/// ```
pub const FONTSET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
