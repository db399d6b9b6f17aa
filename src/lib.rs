//! `shiftbuffer` — a contiguous, FIFO-ordered staging buffer.
//!
//! [`ShiftBuffer<T>`] holds its live elements in a single contiguous
//! allocation and tracks them as a sliding window `[head, head + count)`.
//! Appends land at the tail (by copy via [`ShiftBuffer::write`] or by move
//! via [`ShiftBuffer::shove`]); extraction retires elements from the head
//! via [`ShiftBuffer::read`]. The window is free to drift forward as reads
//! retire elements; the buffer reclaims that drifted-past space either by
//! shifting the live window back down (compaction) or by reallocating,
//! whichever the append algorithm judges cheaper for the request at hand.
//!
//! `ShiftBuffer` is explicitly single-owner: it carries no internal
//! synchronisation, so sharing one across threads requires an external
//! lock, exactly like a bare `Vec<T>` would.
//!
//! # Example
//!
//! ```
//! use shiftbuffer::ShiftBuffer;
//!
//! let mut buf: ShiftBuffer<u32> = ShiftBuffer::new();
//! buf.write(&[1, 2, 3]).unwrap();
//!
//! let mut out = [0u32; 2];
//! buf.read(&mut out).unwrap();
//! assert_eq!(out, [1, 2]);
//! assert_eq!(buf.len(), 1);
//! ```

mod buffer;
mod config;
mod error;
mod invariants;
mod metrics;

pub use buffer::ShiftBuffer;
pub use config::{ShiftBufferConfig, LARGE_CONFIG, SMALL_CONFIG};
pub use error::ShiftBufferError;
pub use metrics::Metrics;
