//! Error types for `ShiftBuffer` operations.

use thiserror::Error;

/// Errors that can occur while constructing or growing a [`crate::ShiftBuffer`].
///
/// Failures from element operations (a panicking `Clone::clone` during
/// [`write`](crate::ShiftBuffer::write), or a panicking `Drop::drop` during
/// [`read`](crate::ShiftBuffer::read)) are not represented here: in Rust
/// those propagate as ordinary unwinding panics, not `Result`s. This enum
/// only covers the failure modes that *are* naturally recoverable in Rust —
/// allocation and precondition checks.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShiftBufferError {
    /// The underlying allocator could not satisfy a request for storage.
    ///
    /// When this is returned from an append, the buffer is left exactly as
    /// it was before the call: allocation is always the first step of the
    /// reallocation path, before anything is moved or destroyed.
    #[error("allocation of {size} bytes (align {align}) failed")]
    AllocationFailure {
        /// Requested allocation size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },

    /// The requested capacity cannot be represented without overflowing
    /// `isize`, so no allocation was attempted.
    #[error("requested capacity of {requested} elements overflows addressable memory")]
    CapacityOverflow {
        /// The capacity, in elements, that was requested.
        requested: usize,
    },

    /// [`read`](crate::ShiftBuffer::read) was asked for more elements than
    /// are currently live in the buffer.
    #[error("read requested {requested} elements but only {available} are available")]
    PreconditionViolation {
        /// Number of elements requested.
        requested: usize,
        /// Number of elements actually live in the buffer.
        available: usize,
    },
}
