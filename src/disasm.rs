//! Pure disassembly: turns raw bytes into human-readable instruction text
//! without touching CPU or bus state. Shares the instruction name table
//! with the interpreter so the two can never drift out of sync.

use crate::{
    cpu::PREFIX,
    inst::{EXTENDED, INSTRUCTIONS},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    pub pc: u16,
    pub opcode: u8,
    pub prefixed: bool,
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
}

/// Operand width implied by the mnemonic text, since the tables only carry
/// a function pointer, a cycle count and a name.
fn operand_len(mnemonic: &str) -> u8 {
    if mnemonic.contains("u16") {
        2
    } else if mnemonic.contains("u8") || mnemonic.contains("i8") {
        1
    } else {
        0
    }
}

/// Decodes a single instruction starting at `bytes[0]`, which is assumed to
/// sit at address `pc`. Never executes anything or mutates `bytes`.
pub fn disassemble(bytes: &[u8], pc: u16) -> DecodedInstruction {
    let opcode = bytes.first().copied().unwrap_or(0x00);

    if opcode == PREFIX {
        let sub_opcode = bytes.get(1).copied().unwrap_or(0x00);
        let (_, cycles, mnemonic) = EXTENDED[sub_opcode as usize];
        return DecodedInstruction {
            pc,
            opcode: sub_opcode,
            prefixed: true,
            mnemonic,
            length: 2,
            cycles,
        };
    }

    let (_, cycles, mnemonic) = INSTRUCTIONS[opcode as usize];
    let length = 1 + operand_len(mnemonic);
    DecodedInstruction {
        pc,
        opcode,
        prefixed: false,
        mnemonic,
        length,
        cycles,
    }
}
