//! Native boundary with linked compiled code. The program is entered through
//! `our_code_starts_here` with the heap base as its only argument, and it may call back into
//! [print] while it runs.

use std::cell::Cell;
use std::io::Write;

use crate::allocator::Heap;
use crate::runtime::{self, Program};
use crate::value::{RenderOptions, Word};

extern "C" {
    #[link_name = "our_code_starts_here"]
    fn our_code_starts_here(heap: *mut libc::c_int) -> libc::c_int;
}

thread_local! {
    /// Heap of the program that is currently running, as seen by [print].
    static ACTIVE_HEAP: Cell<Option<(*const Word, usize)>> = const { Cell::new(None) };
}

/// The compiled program. Running it hands the heap over to native code.
pub struct Linked;

impl Program for Linked {
    fn run(self, heap: &mut Heap) -> Word {
        let len = heap.len();
        let base = heap.as_mut_ptr();

        ACTIVE_HEAP.with(|active| active.set(Some((base as *const Word, len))));
        let result = unsafe { our_code_starts_here(base.cast()) };
        ACTIVE_HEAP.with(|active| active.set(None));

        Word::from(result as u32)
    }
}

/// Called by compiled code to print an intermediate value. Prints against the heap of the
/// running program and returns `val` unchanged.
#[no_mangle]
pub extern "C" fn print(val: libc::c_int) -> libc::c_int {
    let word = Word::from(val as u32);
    let Some((base, len)) = ACTIVE_HEAP.with(Cell::get) else {
        return val;
    };

    // The heap is alive for as long as the program runs, and it is only read here.
    let heap = unsafe { std::slice::from_raw_parts(base, len) };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = runtime::print(word, heap, &RenderOptions::default(), &mut out) {
        let _ = out.flush();
        eprintln!("{:?}", miette::Report::new(err));
    }

    val
}
