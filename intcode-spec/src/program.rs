//! # Program Structure for Intcode
//!
//! A program is the initial memory image: words stored from address 0 with
//! no gaps. The text form is comma-separated base-10 integers:
//!
//! ```text
//! 1,9,10,3,2,3,11,0,99,30,40,50
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpecError};
use crate::source::WordSource;
use crate::Word;

/// Initial memory image of an Intcode program
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    words: Vec<Word>,
}

impl Program {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Parse program text. Whitespace around tokens and a trailing newline
    /// are tolerated; empty tokens are not.
    pub fn load(text: &str) -> Result<Self> {
        let words = text
            .trim()
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                token.parse::<Word>().map_err(|_| SpecError::InvalidProgramText {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<Word>>>()?;

        Ok(Self { words })
    }

    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Overwrite one word of the initial image, growing it with zeros if needed.
    ///
    /// Used to "restore" programs before running them (e.g. setting the
    /// noun/verb cells at addresses 1 and 2, or address 0 to select a mode).
    pub fn patch(&mut self, address: usize, value: Word) -> &mut Self {
        if address >= self.words.len() {
            self.words.resize(address + 1, 0);
        }
        self.words[address] = value;
        self
    }

    /// Builder-style variant of [`Program::patch`]
    pub fn patched(mut self, address: usize, value: Word) -> Self {
        self.patch(address, value);
        self
    }
}

/// Parse program text into a [`Program`]
pub fn load(text: &str) -> Result<Program> {
    Program::load(text)
}

impl From<Vec<Word>> for Program {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl FromStr for Program {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self> {
        Program::load(s)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

impl WordSource for Program {
    fn word_at(&self, address: Word) -> Word {
        self.words.as_slice().word_at(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_simple() {
        let program = Program::load("1,0,0,3,99").unwrap();
        assert_eq!(program.words(), &[1, 0, 0, 3, 99]);
    }

    #[test]
    fn test_load_negative_and_wide() {
        let program = Program::load("109,-1,104,1125899906842624,99").unwrap();
        assert_eq!(program.words(), &[109, -1, 104, 1_125_899_906_842_624, 99]);
    }

    #[test]
    fn test_load_tolerates_trailing_newline() {
        let program = Program::load("3,0,4,0,99\n").unwrap();
        assert_eq!(program.len(), 5);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let err = Program::load("1,2,x,4").unwrap_err();
        assert_eq!(
            err,
            SpecError::InvalidProgramText {
                index: 2,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_load_rejects_empty() {
        assert!(Program::load("").is_err());
        assert!(Program::load("1,,2").is_err());
    }

    #[test]
    fn test_display_matches_source() {
        let text = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99";
        assert_eq!(Program::load(text).unwrap().to_string(), text);
    }

    #[test]
    fn test_patch() {
        let program = Program::load("1,0,0,0,99").unwrap().patched(1, 12).patched(2, 2);
        assert_eq!(program.words(), &[1, 12, 2, 0, 99]);
    }

    #[test]
    fn test_patch_grows() {
        let mut program = Program::new(vec![99]);
        program.patch(3, 7);
        assert_eq!(program.words(), &[99, 0, 0, 7]);
    }

    #[test]
    fn test_word_source() {
        let program = Program::new(vec![4, 5]);
        assert_eq!(program.word_at(1), 5);
        assert_eq!(program.word_at(2), 0);
    }

    #[test]
    fn test_from_str() {
        let program: Program = "99".parse().unwrap();
        assert_eq!(program.words(), &[99]);
    }
}
