//! Read-only word access used by the decoder

use crate::Word;

/// Anything the decoder can fetch instruction words from.
///
/// Addresses that hold nothing read as zero, including negative ones.
pub trait WordSource {
    fn word_at(&self, address: Word) -> Word;
}

impl WordSource for [Word] {
    fn word_at(&self, address: Word) -> Word {
        usize::try_from(address)
            .ok()
            .and_then(|index| self.get(index))
            .copied()
            .unwrap_or(0)
    }
}

impl WordSource for Vec<Word> {
    fn word_at(&self, address: Word) -> Word {
        self.as_slice().word_at(address)
    }
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn word_at(&self, address: Word) -> Word {
        (**self).word_at(address)
    }
}
