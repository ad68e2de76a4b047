//! ASCII conventions
//!
//! Some programs read commands as character codes terminated by a newline
//! and print text the same way, finishing with one value outside the ASCII
//! range as their actual answer.

use intcode_spec::Word;

/// Encode one line of text as input words, including the terminating newline
pub fn encode_line(line: &str) -> Vec<Word> {
    line.bytes()
        .map(Word::from)
        .chain(std::iter::once(Word::from(b'\n')))
        .collect()
}

pub fn encode_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Vec<Word> {
    lines.into_iter().flat_map(encode_line).collect()
}

/// Output split into readable text and a non-ASCII value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsciiOutput {
    pub text: String,
    /// Last value outside `0..=127`, if any
    pub value: Option<Word>,
}

pub fn decode(outputs: &[Word]) -> AsciiOutput {
    let mut decoded = AsciiOutput::default();
    for &word in outputs {
        match u8::try_from(word) {
            Ok(byte) if byte.is_ascii() => decoded.text.push(char::from(byte)),
            _ => decoded.value = Some(word),
        }
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_line() {
        assert_eq!(encode_line("A,B"), vec![65, 44, 66, 10]);
        assert_eq!(encode_line(""), vec![10]);
    }

    #[test]
    fn test_encode_lines() {
        assert_eq!(encode_lines(["n", "y"]), vec![110, 10, 121, 10]);
    }

    #[test]
    fn test_decode_text_and_value() {
        let decoded = decode(&[35, 46, 10, 880_360]);
        assert_eq!(decoded.text, "#.\n");
        assert_eq!(decoded.value, Some(880_360));
    }

    #[test]
    fn test_decode_negative_is_value() {
        let decoded = decode(&[-1]);
        assert!(decoded.text.is_empty());
        assert_eq!(decoded.value, Some(-1));
    }
}
