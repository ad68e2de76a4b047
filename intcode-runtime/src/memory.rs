//! Memory subsystem
//!
//! Sparse word store. Absent cells read as zero and zero is never stored, so
//! two memories with the same visible contents compare equal.

use std::collections::HashMap;

use intcode_spec::{Program, Word, WordSource};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    data: HashMap<Word, Word>,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            data: HashMap::new(),
        }
    }

    pub fn from_program(program: &Program) -> Self {
        let mut memory = Memory::new();
        memory.load(program.words());
        memory
    }

    /// Copy words into memory starting at address 0
    pub fn load(&mut self, words: &[Word]) {
        for (i, &word) in words.iter().enumerate() {
            self.write(i as Word, word);
        }
    }

    #[inline]
    pub fn read(&self, address: Word) -> Word {
        self.data.get(&address).copied().unwrap_or(0)
    }

    #[inline]
    pub fn write(&mut self, address: Word, value: Word) {
        if value == 0 {
            self.data.remove(&address);
        } else {
            self.data.insert(address, value);
        }
    }

    /// Dense copy of addresses `0..len`
    pub fn to_vec(&self, len: usize) -> Vec<Word> {
        (0..len as Word).map(|address| self.read(address)).collect()
    }
}

impl WordSource for Memory {
    #[inline]
    fn word_at(&self, address: Word) -> Word {
        self.read(address)
    }
}
