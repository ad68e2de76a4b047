//! Instruction decoder

use intcode_spec::{
    AddressingMode, Instruction, Opcode, Parameter, Word, WordSource, MAX_ARITY, MODE_RADIX,
    OPCODE_DIVISOR,
};

use crate::error::{DisassemblerError, Result};

/// Decode the instruction starting at `pointer`.
///
/// Parameter values are returned raw. Mode digits above the opcode's arity
/// are not inspected. Decoding never mutates memory.
pub fn decode<M: WordSource + ?Sized>(memory: &M, pointer: Word) -> Result<Instruction> {
    let word = memory.word_at(pointer);
    if word < 0 {
        return Err(DisassemblerError::UnknownOpcode { pointer, word });
    }

    let opcode = Opcode::from_code(word % OPCODE_DIVISOR)
        .ok_or(DisassemblerError::UnknownOpcode { pointer, word })?;

    let mut modes = word / OPCODE_DIVISOR;
    let mut params = [Parameter::default(); MAX_ARITY];

    for (i, slot) in params.iter_mut().take(opcode.arity()).enumerate() {
        let digit = modes % MODE_RADIX;
        let mode = AddressingMode::from_digit(digit).ok_or(
            DisassemblerError::UnknownAddressingMode { pointer, word, digit },
        )?;
        let value = memory.word_at(pointer.wrapping_add(1 + i as Word));
        *slot = Parameter::new(value, mode);
        modes /= MODE_RADIX;
    }

    Ok(Instruction::new(opcode, &params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_halt() {
        let memory: Vec<Word> = vec![99];
        let instr = decode(&memory, 0).unwrap();
        assert_eq!(instr.opcode(), Opcode::Halt);
        assert!(instr.params().is_empty());
    }

    #[test]
    fn test_decode_at_offset() {
        let memory: Vec<Word> = vec![99, 3, 50];
        let instr = decode(&memory, 1).unwrap();
        assert_eq!(instr, Instruction::new(Opcode::Input, &[Parameter::position(50)]));

        let memory: Vec<Word> = vec![99, 4, 50];
        let instr = decode(&memory, 1).unwrap();
        assert_eq!(instr, Instruction::new(Opcode::Output, &[Parameter::position(50)]));
    }

    #[test]
    fn test_decode_mixed_modes() {
        let memory: Vec<Word> = vec![1002, 4, 3, 4, 33];
        let instr = decode(&memory, 0).unwrap();
        assert_eq!(
            instr.params(),
            &[
                Parameter::position(4),
                Parameter::immediate(3),
                Parameter::position(4)
            ]
        );
    }

    #[test]
    fn test_decode_relative_mode() {
        let memory: Vec<Word> = vec![204, -1];
        let instr = decode(&memory, 0).unwrap();
        assert_eq!(instr.opcode(), Opcode::Output);
        assert_eq!(instr.params(), &[Parameter::relative(-1)]);
    }

    #[test]
    fn test_decode_single_digit_opcode() {
        let memory: Vec<Word> = vec![1, 0, 0, 0];
        assert_eq!(decode(&memory, 0).unwrap().opcode(), Opcode::Add);
    }

    #[test]
    fn test_decode_reads_past_end_as_zero() {
        let memory: Vec<Word> = vec![1101];
        let instr = decode(&memory, 0).unwrap();
        assert_eq!(
            instr.params(),
            &[
                Parameter::immediate(0),
                Parameter::immediate(0),
                Parameter::position(0)
            ]
        );
    }

    #[test]
    fn test_decode_unknown_opcode() {
        let memory: Vec<Word> = vec![1, 0, 0, 0, 42];
        assert_eq!(
            decode(&memory, 4),
            Err(DisassemblerError::UnknownOpcode { pointer: 4, word: 42 })
        );
    }

    #[test]
    fn test_decode_negative_word_is_unknown_opcode() {
        let memory: Vec<Word> = vec![-1];
        assert!(matches!(
            decode(&memory, 0),
            Err(DisassemblerError::UnknownOpcode { .. })
        ));
    }

    #[test]
    fn test_decode_unknown_mode() {
        let memory: Vec<Word> = vec![1301, 1, 2, 3];
        assert_eq!(
            decode(&memory, 0),
            Err(DisassemblerError::UnknownAddressingMode {
                pointer: 0,
                word: 1301,
                digit: 3
            })
        );
    }

    #[test]
    fn test_decode_ignores_modes_beyond_arity() {
        // HALT has no parameters, so the leading 5 is never a mode
        let memory: Vec<Word> = vec![599];
        assert_eq!(decode(&memory, 0).unwrap().opcode(), Opcode::Halt);
    }
}
