//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into the assembly text used by the
//! instruction trace, e.g. `adds  r1,r2,r3` or `btne  r1,r2,7ffe (= decimal -2)`.
//! Register numbers and immediates are printed in hexadecimal; branch
//! displacements outside `0..=9` also get their decimal value appended.
//!
//! # Usage
//!
//! ```
//! use i860sim_core::isa::disasm::disassemble;
//! let text = disassemble(0x9041_1800); // adds r3,r2,r1
//! assert_eq!(text, "adds  r3,r2,r1");
//! ```

use crate::isa::decode::{Opcode, decode};
use crate::isa::instruction::{InstructionBits, STORE_DISP_MASK, sext16, sext26};

/// Formats the decimal suffix printed after branch displacements.
fn decimal_suffix(disp: i32) -> String {
    if (0..=9).contains(&disp) {
        String::new()
    } else {
        format!(" (= decimal {disp})")
    }
}

/// Disassembles a 32-bit instruction into trace syntax.
///
/// Unrecognized opcodes render as `unknown instruction xxxxxxxx`.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let dec = decode(inst);
    let (d, s1, s2, genset) = (dec.d, dec.s1, dec.s2, dec.genset);
    let m = dec.opcode.mnemonic();

    match dec.opcode {
        Opcode::Halt => m.to_string(),
        Opcode::LoadIndexed => format!("{m:<5} r{s1:x}(r{s2:x}),r{d:x}"),
        Opcode::LoadImmediate => format!("{m:<5} {genset:x}(r{s2:x}),r{d:x}"),
        Opcode::StoreImmediate => {
            let disp = inst & STORE_DISP_MASK;
            format!("{m:<5} r{s1:x},{disp:x}(r{s2:x})")
        }
        Opcode::Btne | Opcode::Bte => {
            let raw = inst.split_disp();
            let suffix = decimal_suffix(sext16(raw));
            format!("{m:<5} r{s1:x},r{s2:x},{raw:x}{suffix}")
        }
        Opcode::BtneImmediate | Opcode::BteImmediate => {
            let raw = inst.split_disp();
            let suffix = decimal_suffix(sext16(raw));
            format!("{m:<5} {s1:x},r{s2:x},{raw:x}{suffix}")
        }
        Opcode::Br | Opcode::Bc | Opcode::Bnc => {
            let raw = inst.disp26();
            let suffix = decimal_suffix(sext26(raw));
            format!("{m:<5} {raw:x}{suffix}")
        }
        Opcode::Adds | Opcode::Subs | Opcode::Shl | Opcode::Shr | Opcode::Shra => {
            format!("{m:<5} r{s1:x},r{s2:x},r{d:x}")
        }
        Opcode::AddsImmediate
        | Opcode::SubsImmediate
        | Opcode::ShlImmediate
        | Opcode::ShrImmediate
        | Opcode::ShraImmediate => format!("{m:<5} {genset:x},r{s2:x},r{d:x}"),
        Opcode::Unknown(_) => format!("unknown instruction {inst:08x}"),
    }
}
