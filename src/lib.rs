//! Runtime support for programs compiled to tagged words. A program gets a zeroed [Heap] of
//! words, returns a single [Word], and the runtime prints that word (following any pairs it
//! refers to) before releasing the heap.

pub mod allocator;
pub mod cli;
pub mod error;
pub mod image;
pub mod runtime;
pub mod value;

pub use allocator::{Heap, HEAP_WORDS};
pub use error::{Result, RuntimeError};
pub use image::Image;
pub use runtime::{print, run, Program};
pub use value::{render, render_to_string, FatWord, RenderOptions, Word};
