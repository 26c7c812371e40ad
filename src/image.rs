//! Word images let the runtime print a result without linking compiled code. An image is a list
//! of whitespace separated words, `#` comments run until the end of the line:
//!
//! ```text
//! 0x1      # result: the pair at offset 0
//! 20 40    # heap words 0 and 1, the integers 10 and 20
//! ```
//!
//! The first word is the result of the program, the following ones fill the heap starting at
//! offset 0. Words are decimal, `0x` prefixed hexadecimal or negative decimal, the latter being
//! stored in two's complement.

use tracing::warn;

use crate::allocator::Heap;
use crate::error::{Result, RuntimeError};
use crate::runtime::Program;
use crate::value::Word;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub result: Word,
    pub heap: Vec<Word>,
}

impl Image {
    pub fn parse(source: &str) -> Result<Image> {
        let mut words = vec![];

        for (index, line) in source.lines().enumerate() {
            let code = line.split('#').next().unwrap_or_default();

            for token in code.split_whitespace() {
                let word = parse_word(token).ok_or_else(|| RuntimeError::InvalidToken {
                    token: token.to_string(),
                    line: index + 1,
                })?;

                words.push(word);
            }
        }

        let mut words = words.into_iter();
        let result = words.next().ok_or(RuntimeError::EmptyImage)?;

        Ok(Image {
            result,
            heap: words.collect(),
        })
    }

    /// Fails when the heap words of the image don't fit in a heap of `len` words.
    pub fn fits(&self, len: usize) -> Result<()> {
        if self.heap.len() > len {
            return Err(RuntimeError::ImageTooLarge {
                words: self.heap.len(),
                len,
            });
        }

        Ok(())
    }
}

impl Program for Image {
    fn run(self, heap: &mut Heap) -> Word {
        if let Err(err) = self.fits(heap.len()) {
            warn!(%err, "heap words past the end of the heap are dropped");
        }

        for (offset, word) in (0..).zip(self.heap) {
            if heap.write(offset, word).is_none() {
                break;
            }
        }

        self.result
    }
}

fn parse_word(token: &str) -> Option<Word> {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok().map(Word::from)
    } else if token.starts_with('-') {
        token.parse::<i32>().ok().map(|value| Word::from(value as u32))
    } else {
        token.parse::<u32>().ok().map(Word::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let image = Image::parse("0x1 # pair\n20 40\n").unwrap();

        assert_eq!(image.result, Word(1));
        assert_eq!(image.heap, vec![Word(20), Word(40)]);
    }

    #[test]
    fn test_parse_tokens() {
        let image = Image::parse("-2 0xFFFFFFFF 0x7fffffff 4294967295").unwrap();

        assert_eq!(image.result, Word(0xFFFF_FFFE));
        assert_eq!(
            image.heap,
            vec![Word(0xFFFF_FFFF), Word(0x7FFF_FFFF), Word(0xFFFF_FFFF)]
        );
    }

    #[test]
    fn test_invalid_token() {
        let result = Image::parse("1\n\n 2 true");

        assert!(matches!(
            result,
            Err(RuntimeError::InvalidToken { ref token, line: 3 }) if token == "true"
        ));
    }

    #[test]
    fn test_out_of_range() {
        assert!(Image::parse("4294967296").is_err());
        assert!(Image::parse("0x100000000").is_err());
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            Image::parse("# nothing here\n"),
            Err(RuntimeError::EmptyImage)
        ));
    }

    #[test]
    fn test_fits() {
        let image = Image::parse("1 2 3 4").unwrap();

        assert!(image.fits(3).is_ok());
        assert!(matches!(
            image.fits(2),
            Err(RuntimeError::ImageTooLarge { words: 3, len: 2 })
        ));
    }

    #[test]
    fn test_run() {
        let image = Image::parse("0x9 0 0 0 0 0 0 0 0 6 8").unwrap();
        let mut heap = Heap::acquire(16);

        let result = image.run(&mut heap);

        assert_eq!(result, Word(9));
        assert_eq!(heap.read(8), Some(Word::int(3)));
        assert_eq!(heap.read(9), Some(Word::int(4)));
    }

    #[test]
    fn test_run_on_small_heap() {
        let image = Image::parse("0x1 2 4 6 8").unwrap();
        let mut heap = Heap::acquire(2);

        let result = image.run(&mut heap);

        assert_eq!(result, Word(1));
        assert_eq!(heap.words(), &[Word::int(1), Word::int(2)]);
    }
}
