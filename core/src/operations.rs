use rand::{Rng, RngCore};

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONTSET_ADDRESS, FONT_SPRITE_SIZE, PIXEL_ON,
};
use crate::error::Fault;
use crate::opcode::Opcode;
use crate::state::State;

// Every operation runs after the cycle has already bumped the pc past the
// current instruction, so "skip" is a single further += 2 and jumps are
// absolute.

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
}

/// Unimplemented encodings fall through to here
pub fn nop(_op: u16, _state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    Ok(())
}

/// clear
pub fn clr(_op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.frame_buffer = [0; DISPLAY_WIDTH * DISPLAY_HEIGHT];
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.pc = state.pop()?;
    Ok(())
}

/// PC = addr
pub fn jump(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.pc = op.addr();
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.push(state.pc)?;
    state.pc = op.addr();
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let condition = state.v[op.x()] == op.kk();
    skip_if(state, condition);
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let condition = state.v[op.x()] != op.kk();
    skip_if(state, condition);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let condition = state.v[op.x()] == state.v[op.y()];
    skip_if(state, condition);
    Ok(())
}

/// Vx = kk
pub fn load(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.v[op.x()] = op.kk();
    Ok(())
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.kk());
    Ok(())
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.v[op.x()] = state.v[op.y()];
    Ok(())
}

/// Vx |= Vy
pub fn or(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.v[op.x()] |= state.v[op.y()];
    Ok(())
}

/// Vx &= Vy
pub fn and(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.v[op.x()] &= state.v[op.y()];
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.v[op.x()] ^= state.v[op.y()];
    Ok(())
}

/// Vx += Vy; VF = overflow
pub fn addr(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.v[op.x()] = res;
    state.set_flag(over);
    Ok(())
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let (vx, vy) = (state.v[op.x()], state.v[op.y()]);
    state.v[op.x()] = vx.wrapping_sub(vy);
    state.set_flag(vx > vy);
    Ok(())
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let vx = state.v[op.x()];
    state.v[op.x()] = vx >> 1;
    state.set_flag(vx & 0x1 == 0x1);
    Ok(())
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let (vx, vy) = (state.v[op.x()], state.v[op.y()]);
    state.v[op.x()] = vy.wrapping_sub(vx);
    state.set_flag(vy > vx);
    Ok(())
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let vx = state.v[op.x()];
    state.v[op.x()] = vx << 1;
    state.set_flag(vx & 0x80 == 0x80);
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let condition = state.v[op.x()] != state.v[op.y()];
    skip_if(state, condition);
    Ok(())
}

/// I = addr
pub fn loadi(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.i = op.addr();
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.pc = u16::from(state.v[0x0]) + op.addr();
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rnd(op: u16, state: &mut State, rng: &mut dyn RngCore) -> Result<(), Fault> {
    let rand_byte: u8 = rng.gen();
    state.v[op.x()] = rand_byte & op.kk();
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let rows = state.index_span(op.n() as usize)?;
    let origin_x = state.v[op.x()] as usize % DISPLAY_WIDTH;
    let origin_y = state.v[op.y()] as usize % DISPLAY_HEIGHT;

    let mut collision = false;
    for (row, &sprite_byte) in state.memory[rows].iter().enumerate() {
        let y = (origin_y + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            if sprite_byte & (0x80 >> bit) == 0 {
                continue;
            }
            let x = (origin_x + bit) % DISPLAY_WIDTH;
            let pixel = &mut state.frame_buffer[y * DISPLAY_WIDTH + x];
            collision |= *pixel == PIXEL_ON;
            *pixel ^= PIXEL_ON;
        }
    }

    state.draw_flag = true;
    state.set_flag(collision);
    Ok(())
}

fn key_pressed(state: &State, key: u8) -> bool {
    // Keys past F don't exist and so are never pressed
    state.keypad.get(key as usize).copied().unwrap_or(false)
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let condition = key_pressed(state, state.v[op.x()]);
    skip_if(state, condition);
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let condition = !key_pressed(state, state.v[op.x()]);
    skip_if(state, condition);
    Ok(())
}

/// Vx = DT
pub fn moved(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.v[op.x()] = state.delay_timer;
    Ok(())
}

/// await keypress for Vx
/// Without a pressed key the pc is rewound so this instruction runs again next cycle
pub fn keyd(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    match state.keypad.iter().position(|&pressed| pressed) {
        Some(key) => state.v[op.x()] = key as u8,
        None => state.pc = state.current_instruction(),
    }
    Ok(())
}

/// DT = Vx
pub fn loads(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.delay_timer = state.v[op.x()];
    Ok(())
}

/// ST = Vx
pub fn ld(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.sound_timer = state.v[op.x()];
    Ok(())
}

/// I += Vx
pub fn addi(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()]));
    Ok(())
}

/// I = FONTSET_ADDRESS + Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::FONTSET for more details
pub fn ldspr(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    state.i = FONTSET_ADDRESS + u16::from(state.v[op.x()]) * FONT_SPRITE_SIZE;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let vx = state.v[op.x()];
    let span = state.index_span(3)?;
    state.memory[span].copy_from_slice(&[vx / 100, vx / 10 % 10, vx % 10]);
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let span = state.index_span(op.x() + 1)?;
    state.memory[span].copy_from_slice(&state.v[..=op.x()]);
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: u16, state: &mut State, _rng: &mut dyn RngCore) -> Result<(), Fault> {
    let span = state.index_span(op.x() + 1)?;
    state.v[..=op.x()].copy_from_slice(&state.memory[span]);
    Ok(())
}
