// This module defines the [Heap] handed to compiled programs. It is a single zero-initialized
// block of words that is allocated before the program runs and released once its result has
// been printed. Offsets into it are never owned or freed on their own, only the whole block.

use std::ops::Deref;

use tracing::debug;

use crate::value::Word;

/// Number of words the runtime reserves for a program when nothing else is asked for.
pub const HEAP_WORDS: usize = 100_000;

#[derive(Debug)]
pub struct Heap {
    words: Box<[Word]>,
}

impl Heap {
    /// Allocates `word_count` zeroed words. Allocation failure aborts the process, the size is
    /// a fixed constant so there is nothing to recover.
    pub fn acquire(word_count: usize) -> Heap {
        let words = vec![Word::default(); word_count].into_boxed_slice();
        debug!(words = word_count, "heap acquired");
        Heap { words }
    }

    /// Gives the memory back. Dropping the heap does the same thing, this only makes the end
    /// of its lifetime explicit at the call site.
    pub fn release(self) {
        drop(self)
    }

    pub fn read(&self, offset: u32) -> Option<Word> {
        self.words.get(offset as usize).copied()
    }

    /// Writes a word, returns `None` when `offset` is out of bounds.
    pub fn write(&mut self, offset: u32, word: Word) -> Option<()> {
        let slot = self.words.get_mut(offset as usize)?;
        *slot = word;
        Some(())
    }

    /// Writes the two elements of a pair at `offset` and returns the word that refers to it.
    /// Fails when `offset` is not 8 word aligned or the pair does not fit in the heap.
    pub fn alloc_pair(&mut self, offset: u32, first: Word, second: Word) -> Option<Word> {
        if offset as usize + 1 >= self.len() {
            return None;
        }

        let pair = Word::pair(offset)?;
        self.write(offset, first)?;
        self.write(offset + 1, second)?;
        Some(pair)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Base address handed to native code. [Word] is `repr(transparent)` over `u32`.
    pub fn as_mut_ptr(&mut self) -> *mut u32 {
        self.words.as_mut_ptr().cast()
    }
}

impl Deref for Heap {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl Drop for Heap {
    fn drop(&mut self) {
        debug!(words = self.words.len(), "heap released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_zeroed() {
        let heap = Heap::acquire(64);

        assert_eq!(heap.len(), 64);
        assert!(heap.words().iter().all(|word| *word == Word(0)));
    }

    #[test]
    fn test_bounds() {
        let mut heap = Heap::acquire(4);

        assert_eq!(heap.write(3, Word(42)), Some(()));
        assert_eq!(heap.read(3), Some(Word(42)));
        assert_eq!(heap.write(4, Word(42)), None);
        assert_eq!(heap.read(4), None);
    }

    #[test]
    fn test_alloc_pair() {
        let mut heap = Heap::acquire(16);

        let pair = heap.alloc_pair(8, Word::int(1), Word::int(2));

        assert_eq!(pair, Some(Word(9)));
        assert_eq!(heap.read(8), Some(Word::int(1)));
        assert_eq!(heap.read(9), Some(Word::int(2)));
        assert_eq!(heap.alloc_pair(15, Word::int(1), Word::int(2)), None);
    }

    #[test]
    fn test_alloc_misaligned_pair() {
        let mut heap = Heap::acquire(16);

        assert_eq!(heap.alloc_pair(4, Word::int(1), Word::int(2)), None);
        assert!(heap.words().iter().all(|word| *word == Word(0)));
    }

    #[test]
    fn test_empty() {
        let heap = Heap::acquire(0);

        assert!(heap.is_empty());
        heap.release();
    }
}
