use rand::RngCore;

use crate::error::Fault;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A single instruction's state transition
pub type Operation = fn(op: u16, state: &mut State, rng: &mut dyn RngCore) -> Result<(), Fault>;

/// Indexed by the opcode's family (`[f___]`)
static PRIMARY: [Operation; 16] = [
    table_0, jump, call, ske, skne, skre, load, add, table_8, skrne, loadi, jumpi, rnd, draw,
    table_e, table_f,
];

/// Family 0x0, indexed by `[___n]`
static TABLE_0: [Operation; 16] = {
    let mut table = [nop as Operation; 16];
    table[0x0] = clr;
    table[0xE] = rts;
    table
};

/// Family 0x8, indexed by `[___n]`
static TABLE_8: [Operation; 16] = {
    let mut table = [nop as Operation; 16];
    table[0x0] = mv;
    table[0x1] = or;
    table[0x2] = and;
    table[0x3] = xor;
    table[0x4] = addr;
    table[0x5] = sub;
    table[0x6] = shr;
    table[0x7] = subn;
    table[0xE] = shl;
    table
};

/// Family 0xE, indexed by `[___n]`
static TABLE_E: [Operation; 16] = {
    let mut table = [nop as Operation; 16];
    table[0xE] = skpr;
    table[0x1] = skup;
    table
};

/// Family 0xF, indexed by `[__kk]`
static TABLE_F: [Operation; 256] = {
    let mut table = [nop as Operation; 256];
    table[0x07] = moved;
    table[0x0A] = keyd;
    table[0x15] = loads;
    table[0x18] = ld;
    table[0x1E] = addi;
    table[0x29] = ldspr;
    table[0x33] = bcd;
    table[0x55] = stor;
    table[0x65] = read;
    table
};

fn table_0(op: u16, state: &mut State, rng: &mut dyn RngCore) -> Result<(), Fault> {
    TABLE_0[op.n() as usize](op, state, rng)
}

fn table_8(op: u16, state: &mut State, rng: &mut dyn RngCore) -> Result<(), Fault> {
    TABLE_8[op.n() as usize](op, state, rng)
}

fn table_e(op: u16, state: &mut State, rng: &mut dyn RngCore) -> Result<(), Fault> {
    TABLE_E[op.n() as usize](op, state, rng)
}

fn table_f(op: u16, state: &mut State, rng: &mut dyn RngCore) -> Result<(), Fault> {
    TABLE_F[op.kk() as usize](op, state, rng)
}

/// Selects the correct Operation for a given Opcode.
/// Every 16-bit value selects something; unknown encodings select `nop`.
pub fn from_op(op: u16) -> Operation {
    PRIMARY[op.family() as usize]
}
