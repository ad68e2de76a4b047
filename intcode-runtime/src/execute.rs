//! Instruction execution for Intcode
//!
//! Arithmetic results are native `i64` with no overflow handling of their
//! own: debug builds panic on overflow, release builds wrap. No known program
//! overflows. Address computation (relative offsets, the relative base and
//! the instruction pointer) always wraps, matching the decoder.
//!
//! Every operand and store address is resolved before anything is written,
//! so an instruction that fails leaves the machine untouched. This includes
//! INPUT through an immediate parameter, which fails even when the input
//! queue is empty.

use intcode_spec::{AddressingMode, Instruction, Opcode, Parameter, Word};

use crate::error::{Result, RuntimeError};
use crate::io::IOHandler;
use crate::memory::Memory;
use crate::state::MachineState;

/// Effective address of a position or relative parameter
#[inline]
fn address(param: &Parameter, state: &MachineState) -> Word {
    match param.mode {
        AddressingMode::Relative => param.value.wrapping_add(state.relative_base),
        AddressingMode::Position | AddressingMode::Immediate => param.value,
    }
}

/// Resolve a parameter to its operand value
#[inline]
fn read(param: &Parameter, state: &MachineState, memory: &Memory) -> Word {
    match param.mode {
        AddressingMode::Immediate => param.value,
        AddressingMode::Position | AddressingMode::Relative => memory.read(address(param, state)),
    }
}

/// Resolve the instruction's store target to the address it writes through
#[inline]
fn store_address(instr: &Instruction, state: &MachineState) -> Result<Word> {
    match instr.store_target() {
        Some(param) if param.mode.is_writable() => Ok(address(&param, state)),
        _ => Err(RuntimeError::InvalidStoreTarget {
            pointer: state.ip,
            opcode: instr.opcode(),
        }),
    }
}

/// Operands `a`, `b` and store address `c` of a three-parameter instruction
#[inline]
fn binary_operands(
    instr: &Instruction,
    state: &MachineState,
    memory: &Memory,
) -> Result<(Word, Word, Word)> {
    let p = instr.params();
    let a = read(&p[0], state, memory);
    let b = read(&p[1], state, memory);
    let c = store_address(instr, state)?;
    Ok((a, b, c))
}

/// Execute single instruction
///
/// On an empty input queue INPUT marks the state blocked and returns without
/// touching memory or the instruction pointer.
pub fn execute(
    instr: &Instruction,
    state: &mut MachineState,
    memory: &mut Memory,
    io: &mut IOHandler,
) -> Result<()> {
    let next = state.ip.wrapping_add(instr.width());
    let p = instr.params();

    match instr.opcode() {
        Opcode::Add => {
            let (a, b, c) = binary_operands(instr, state, memory)?;
            memory.write(c, a + b);
            state.ip = next;
        }

        Opcode::Mul => {
            let (a, b, c) = binary_operands(instr, state, memory)?;
            memory.write(c, a * b);
            state.ip = next;
        }

        Opcode::Input => {
            let target = store_address(instr, state)?;
            match io.read() {
                Some(value) => {
                    memory.write(target, value);
                    state.ip = next;
                }
                None => state.block(),
            }
        }

        Opcode::Output => {
            io.write(read(&p[0], state, memory));
            state.ip = next;
        }

        Opcode::JumpIfTrue => {
            let condition = read(&p[0], state, memory);
            let target = read(&p[1], state, memory);
            state.ip = if condition != 0 { target } else { next };
        }

        Opcode::JumpIfFalse => {
            let condition = read(&p[0], state, memory);
            let target = read(&p[1], state, memory);
            state.ip = if condition == 0 { target } else { next };
        }

        Opcode::LessThan => {
            let (a, b, c) = binary_operands(instr, state, memory)?;
            memory.write(c, Word::from(a < b));
            state.ip = next;
        }

        Opcode::Equals => {
            let (a, b, c) = binary_operands(instr, state, memory)?;
            memory.write(c, Word::from(a == b));
            state.ip = next;
        }

        Opcode::AdjustRelativeBase => {
            let offset = read(&p[0], state, memory);
            state.relative_base = state.relative_base.wrapping_add(offset);
            state.ip = next;
        }

        Opcode::Halt => {
            state.halt();
        }
    }

    Ok(())
}
