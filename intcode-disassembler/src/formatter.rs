//! Instruction formatting to assembly text
//!
//! Operand notation:
//! - position `[12]`
//! - immediate `12`
//! - relative `[rb+12]` / `[rb-12]`

use intcode_spec::{AddressingMode, Instruction, Parameter};

/// Format instruction as assembly text
pub fn format(instr: &Instruction) -> String {
    let operands: Vec<String> = instr.params().iter().map(format_param).collect();
    if operands.is_empty() {
        instr.opcode().mnemonic().to_string()
    } else {
        format!("{} {}", instr.opcode().mnemonic(), operands.join(", "))
    }
}

pub fn format_param(param: &Parameter) -> String {
    match param.mode {
        AddressingMode::Position => format!("[{}]", param.value),
        AddressingMode::Immediate => param.value.to_string(),
        AddressingMode::Relative if param.value < 0 => format!("[rb{}]", param.value),
        AddressingMode::Relative => format!("[rb+{}]", param.value),
    }
}
