/// Definitions of errors that can occur while running and printing a program.
use thiserror::Error;

#[derive(Error, miette::Diagnostic, Debug)]
pub enum RuntimeError {
    #[error("pair {word:#010x} points at heap offset {offset}, outside of a heap of {len} words")]
    #[diagnostic(
        code(tagword::pair_out_of_bounds),
        help("the program returned a pair that was never allocated on the heap")
    )]
    PairOutOfBounds { word: u32, offset: u32, len: usize },

    #[error("pairs are nested deeper than {limit} levels")]
    #[diagnostic(
        code(tagword::depth_exceeded),
        help("a pair probably contains itself, either directly or through another pair")
    )]
    DepthExceeded { limit: usize },

    #[error("invalid word '{token}' at line {line}")]
    #[diagnostic(
        code(tagword::invalid_token),
        help("words are written in decimal, as 0x prefixed hexadecimal, or as negative decimal")
    )]
    InvalidToken { token: String, line: usize },

    #[error("the image has no result word")]
    #[diagnostic(code(tagword::empty_image))]
    EmptyImage,

    #[error("the image holds {words} heap words but the heap has {len}")]
    #[diagnostic(code(tagword::image_too_large), help("raise --heap-words"))]
    ImageTooLarge { words: usize, len: usize },

    #[error("i/o error: {0}")]
    #[diagnostic(code(tagword::io))]
    Io(#[from] std::io::Error),

    #[error("cannot format the value")]
    #[diagnostic(code(tagword::fmt))]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T, E = RuntimeError> = std::result::Result<T, E>;
