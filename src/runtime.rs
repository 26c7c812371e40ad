//! Ties the [Heap] and the printer together: a heap is acquired, the program runs against it,
//! its result is printed and the heap is released, whatever happened while printing.

use std::io::Write;

use tracing::{debug, warn};

use crate::allocator::Heap;
use crate::error::Result;
use crate::value::{render, RenderOptions, Word};

#[cfg(feature = "linked")]
pub mod primitives;

/// Something that computes the result of a program. It may store pairs in the heap before
/// returning the word that refers to them.
pub trait Program {
    fn run(self, heap: &mut Heap) -> Word;
}

impl<F> Program for F
where
    F: FnOnce(&mut Heap) -> Word,
{
    fn run(self, heap: &mut Heap) -> Word {
        self(heap)
    }
}

/// Renders `word` followed by a newline into `out` and gives the word back.
pub fn print<W: Write>(
    word: Word,
    heap: &[Word],
    options: &RenderOptions,
    out: &mut W,
) -> Result<Word> {
    let mut text = String::new();
    render(word, heap, options, &mut text)?;
    text.push('\n');

    out.write_all(text.as_bytes())?;
    out.flush()?;

    Ok(word)
}

/// Runs `program` over a fresh heap of `heap_words` words and prints its result into `out`.
pub fn run<P, W>(
    program: P,
    heap_words: usize,
    options: &RenderOptions,
    out: &mut W,
) -> Result<Word>
where
    P: Program,
    W: Write,
{
    let mut heap = Heap::acquire(heap_words);

    debug!("running program");
    let word = program.run(&mut heap);
    debug!(word = word.bits(), "program returned");

    let result = print(word, &heap, options, out);
    if let Err(err) = &result {
        warn!(%err, "cannot print the result");
    }

    heap.release();
    result
}
