mod heap;
mod system;

pub use heap::*;
pub use system::{HEAP_ALIGN, alloc_memory, free_memory};
