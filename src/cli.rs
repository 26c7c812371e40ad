use std::path::PathBuf;

use clap::Parser;

use crate::allocator::HEAP_WORDS;

/// Prints the result of a tagged-word program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Word image to run instead of the linked program, stdin when missing.
    pub image: Option<PathBuf>,

    /// Logs heap and printer activity to stderr.
    #[arg(short, long)]
    pub debug: bool,

    /// Size of the program heap, in words.
    #[arg(long, default_value_t = HEAP_WORDS)]
    pub heap_words: usize,

    /// Deepest pair nesting printed before giving up, derived from the heap size by default.
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl Options {
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "tagword=debug"
        } else {
            "tagword=warn"
        }
    }
}
