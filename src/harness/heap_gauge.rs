//! Heap measurement primitives for the memory probe
//!
//! Rust frees memory eagerly, so there is no collection cycle to force.
//! Instead [`CountingAllocator`] wraps the system allocator and keeps a running
//! count of live heap bytes; [`AllocatorGauge`] reads that count. The binary
//! installs the allocator with `#[global_allocator]`; without it the gauge
//! always reads zero.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

static LIVE_BYTES: AtomicUsize = AtomicUsize::new(0);

/// Source of heap usage snapshots
pub trait HeapGauge {
    /// Request a full memory reclamation pass before a snapshot
    fn reclaim(&self);

    /// Bytes currently allocated on the heap
    fn allocated_bytes(&self) -> u64;
}

/// System allocator wrapper that tracks live heap bytes
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingAllocator;

// SAFETY: Every call is forwarded to `System` with unchanged arguments; the
// only addition is bookkeeping on an atomic counter.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: Delegates to the system allocator with unchanged `layout`.
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            LIVE_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: Delegates to the system allocator with unchanged arguments.
        unsafe { System.dealloc(ptr, layout) };
        LIVE_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: Delegates to the system allocator with unchanged `layout`.
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            LIVE_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: Delegates to the system allocator with unchanged arguments.
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            LIVE_BYTES.fetch_add(new_size, Ordering::Relaxed);
            LIVE_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
        }
        new_ptr
    }
}

/// [`HeapGauge`] reading the [`CountingAllocator`] counter
#[derive(Debug, Default, Clone, Copy)]
pub struct AllocatorGauge;

impl AllocatorGauge {
    /// Whether [`CountingAllocator`] is installed as the global allocator
    pub fn is_tracking(&self) -> bool {
        let before = LIVE_BYTES.load(Ordering::Relaxed);
        let probe = std::hint::black_box(vec![0u8; 4096]);
        let during = LIVE_BYTES.load(Ordering::Relaxed);
        drop(probe);
        during != before
    }
}

impl HeapGauge for AllocatorGauge {
    fn reclaim(&self) {
        // frees are eager; nothing is pending
    }

    fn allocated_bytes(&self) -> u64 {
        LIVE_BYTES.load(Ordering::Relaxed) as u64
    }
}
