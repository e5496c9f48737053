//! Heap address allocation.
//!
//! Addresses identify locations in the symbolic heap. The allocator is the only
//! structure in this subsystem mutated with high concurrent contention: every worker
//! creating a symbolic object goes through it. A single atomic fetch-and-increment
//! guarantees strict uniqueness and monotonic non-decrease with no lost or duplicated
//! addresses.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// An opaque address in the symbolic heap.
///
/// Unique per allocation within one engine run; never reused. Address `0` is reserved
/// for the null reference and is never issued by the allocator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u64);

impl Address {
    /// The reserved null address.
    pub const NULL: Self = Self(0);

    /// Returns the raw address value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns `true` if this is the reserved null address.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "addr:{}", self.0)
    }
}

/// Issues fresh heap addresses for symbolic objects.
///
/// Process-wide state for one engine run: created when the run starts, torn down when
/// it completes. Safe to call from any number of exploration workers concurrently.
/// Exhausting the 64-bit address space is treated as unreachable.
///
/// # Examples
///
/// ```rust
/// use symscope::heap::AddressAllocator;
///
/// let allocator = AddressAllocator::new();
/// let a = allocator.next_address();
/// let b = allocator.next_address();
/// assert!(a < b);
/// assert!(!a.is_null());
/// ```
#[derive(Debug)]
pub struct AddressAllocator {
    next: AtomicU64,
}

impl AddressAllocator {
    /// Creates an allocator whose first issued address follows the reserved null.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Issues a fresh, unique address.
    #[must_use]
    pub fn next_address(&self) -> Address {
        Address(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for AddressAllocator {
    fn default() -> Self {
        Self::new()
    }
}
