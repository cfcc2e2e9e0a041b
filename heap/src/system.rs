use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// Alignment grain shared by every slab and oversize allocation.
pub const HEAP_ALIGN: usize = 16;

/// Allocate `size` bytes aligned to [`HEAP_ALIGN`].
///
/// Returns `None` when the system allocator refuses, so callers can turn
/// exhaustion into a script-visible error instead of aborting.
#[must_use]
pub fn alloc_memory(size: u32) -> Option<NonNull<u8>> {
    debug_assert!(size > 0);
    let layout = Layout::from_size_align(size as usize, HEAP_ALIGN).ok()?;
    // SAFETY: layout has a non-zero size
    let ptr = unsafe { alloc::alloc(layout) };
    NonNull::new(ptr)
}

/// Release memory obtained from [`alloc_memory`].
///
/// `size` must be the exact size the block was allocated with.
pub fn free_memory(ptr: NonNull<u8>, size: u32) {
    let layout = Layout::from_size_align(size as usize, HEAP_ALIGN)
        .expect("free_memory: bad layout");
    // SAFETY: ptr came out of alloc_memory with the same size and alignment
    unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
}
