use std::fmt::Write;

use tracing::trace;

use super::*;
use crate::error::{Result, RuntimeError};

/// Knobs for [render].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// How many pairs may enclose each other before rendering gives up. `None` derives the
    /// limit from the heap, see [RenderOptions::limit].
    pub max_depth: Option<usize>,
}

impl RenderOptions {
    /// Pairs start at 8 word aligned offsets, so a heap of `len` words holds at most
    /// `len / 8 + 1` of them. Any deeper nesting has to revisit a pair.
    pub fn limit(&self, heap: &[Word]) -> usize {
        self.max_depth.unwrap_or(heap.len() / 8 + 1)
    }
}

enum Task {
    Value { word: Word, depth: usize },
    Text(&'static str),
}

/// Writes the textual form of `word` into `out`, following pairs into `heap`, and gives the
/// word back. The traversal keeps its own stack, the output is the one of the plain recursive
/// descent: `(`, first element, `, `, second element, `)`.
pub fn render<W: Write>(
    word: Word,
    heap: &[Word],
    options: &RenderOptions,
    out: &mut W,
) -> Result<Word> {
    let limit = options.limit(heap);
    let mut stack = vec![Task::Value { word, depth: 0 }];

    while let Some(task) = stack.pop() {
        let (word, depth) = match task {
            Task::Text(text) => {
                out.write_str(text)?;
                continue;
            }
            Task::Value { word, depth } => (word, depth),
        };

        match word.classify() {
            FatWord::Int(value) => write!(out, "{value}")?,
            FatWord::Closure => out.write_str("<function>")?,
            FatWord::True => out.write_str("true")?,
            FatWord::False => out.write_str("false")?,
            FatWord::Pair(offset) => {
                if depth >= limit {
                    return Err(RuntimeError::DepthExceeded { limit });
                }

                let out_of_bounds = || RuntimeError::PairOutOfBounds {
                    word: word.bits(),
                    offset,
                    len: heap.len(),
                };

                let first = heap.get(offset as usize).ok_or_else(out_of_bounds)?;
                let second = heap.get(offset as usize + 1).ok_or_else(out_of_bounds)?;

                trace!(offset, depth, "pair");

                out.write_str("(")?;
                stack.push(Task::Text(")"));
                stack.push(Task::Value { word: *second, depth: depth + 1 });
                stack.push(Task::Text(", "));
                stack.push(Task::Value { word: *first, depth: depth + 1 });
            }
            FatWord::Invalid(bits) => write!(out, "Unknown value: {bits:#010x}")?,
        }
    }

    Ok(word)
}

/// Renders `word` with the default options into a fresh string, without the line terminator.
pub fn render_to_string(word: Word, heap: &[Word]) -> Result<String> {
    let mut out = String::new();
    render(word, heap, &RenderOptions::default(), &mut out)?;
    Ok(out)
}
