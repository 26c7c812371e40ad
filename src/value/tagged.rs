use super::*;

/// "Fat" view of a [Word], easier to work with on the rust side.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FatWord {
    Int(i32),
    Closure,
    True,
    False,
    /// Heap offset of the first element, the second one follows it.
    Pair(u32),
    Invalid(u32),
}

impl Word {
    /// Classifies the word. The checks overlap in their higher bits so the order below is
    /// part of the encoding: integers, closures, the two booleans and then pairs.
    pub fn classify(self) -> FatWord {
        self.into()
    }
}

impl From<Word> for FatWord {
    fn from(word: Word) -> Self {
        let value = word.bits();

        if value & INT_MASK == INT {
            FatWord::Int((value as i32) >> 1)
        } else if value & TAG_MASK == CLOSURE {
            FatWord::Closure
        } else if value == TRUE {
            FatWord::True
        } else if value == FALSE {
            FatWord::False
        } else if value & TAG_MASK == PAIR {
            FatWord::Pair(value - 1)
        } else {
            FatWord::Invalid(value)
        }
    }
}
