//! This module describes the values that compiled programs hand back to the runtime. A
//! [Word] is a single 32 bit machine word whose low bits say how the remaining bits should be
//! read: as an inline integer, as a boolean constant, as an opaque closure or as the offset of
//! a pair stored in the [crate::allocator::Heap].

pub mod display;
pub mod tagged;

pub use display::{render, render_to_string, RenderOptions};
pub use tagged::FatWord;

pub const INT_MASK: u32 = 0b001;
pub const TAG_MASK: u32 = 0b111;

pub const INT: u32 = 0b000;
pub const PAIR: u32 = 0b001;
pub const CLOSURE: u32 = 0b101;

pub const TRUE: u32 = 0xFFFF_FFFF;
pub const FALSE: u32 = 0x7FFF_FFFF;

/// A tagged machine word. It is never mutated by the runtime, only read.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Word(pub u32);

impl Word {
    pub const TRUE: Word = Word(TRUE);
    pub const FALSE: Word = Word(FALSE);

    /// Encodes an integer, the payload is shifted left by one so the top bit of `value` is
    /// lost.
    pub const fn int(value: i32) -> Word {
        Word((value << 1) as u32)
    }

    /// Encodes a reference to the pair whose first element lives at word `offset` of the heap.
    /// The offset has to be a multiple of 8 so the tag bits stay free, `None` otherwise.
    pub const fn pair(offset: u32) -> Option<Word> {
        if offset & TAG_MASK != 0 {
            return None;
        }

        Some(Word(offset | PAIR))
    }

    /// Encodes an opaque closure, `bits` are placed above the tag.
    pub const fn closure(bits: u32) -> Word {
        Word((bits << 3) | CLOSURE)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn tag(self) -> u32 {
        self.0 & TAG_MASK
    }
}

impl From<u32> for Word {
    fn from(value: u32) -> Self {
        Word(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int() {
        assert_eq!(Word::int(4), Word(8));
        assert_eq!(Word::int(-1), Word(0xFFFF_FFFE));
        assert_eq!(Word::int(0).tag() & INT_MASK, INT);
    }

    #[test]
    fn test_pair() {
        assert_eq!(Word::pair(0), Some(Word(1)));
        assert_eq!(Word::pair(16).map(Word::tag), Some(PAIR));
    }

    #[test]
    fn test_closure() {
        assert_eq!(Word::closure(0).tag(), CLOSURE);
        assert_eq!(Word::closure(0xABC).tag(), CLOSURE);
    }

    #[test]
    fn test_misaligned_pair() {
        assert_eq!(Word::pair(3), None);
        assert_eq!(Word::pair(4), None);
    }
}
