//! Main disassembler logic

use intcode_spec::{Program, Word};

use crate::decoder::decode;
use crate::formatter::format;

/// Disassemble a program into assembly text.
///
/// Linear sweep from address 0. Code and data share memory, so a word that
/// does not decode (or whose parameters would run past the end of the image)
/// is listed as data and the sweep moves on by one word.
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();

    output.push_str("; Intcode Disassembly\n");
    output.push_str(&format!("; Size: {} words\n", program.len()));
    output.push('\n');

    let len = program.len() as Word;
    let mut addr: Word = 0;

    while addr < len {
        let (width, text) = match decode(program, addr) {
            Ok(instr) if addr + instr.width() <= len => (instr.width(), format(&instr)),
            Ok(_) => (1, "; data (truncated instruction)".to_string()),
            Err(e) => (1, format!("; data ({})", e)),
        };

        let raw: Vec<String> = program.words()[addr as usize..(addr + width) as usize]
            .iter()
            .map(|w| w.to_string())
            .collect();

        output.push_str(&format!("{:>6}:  {:<32}  {}\n", addr, raw.join(","), text));
        addr += width;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disassemble_simple() {
        let program = Program::load("1002,4,3,4,33").unwrap();
        let asm = disassemble(&program);

        assert!(asm.contains("mul [4], 3, [4]"));
        assert!(asm.contains("; data"));
    }

    #[test]
    fn test_disassemble_truncated_tail() {
        let program = Program::new(vec![99, 1]);
        let asm = disassemble(&program);
        assert!(asm.contains("halt"));
        assert!(asm.contains("truncated"));
    }

    #[test]
    fn test_disassemble_empty() {
        let asm = disassemble(&Program::default());
        assert!(asm.contains("Size: 0 words"));
    }
}
