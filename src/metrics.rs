/// Point-in-time counters for a [`ShiftBuffer`](crate::ShiftBuffer).
///
/// These are plain counters rather than atomics: `ShiftBuffer` is explicitly
/// single-owner and not internally synchronised (see the crate's
/// concurrency notes), so there is never a concurrent writer for an atomic
/// to protect against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Total elements appended via [`write`](crate::ShiftBuffer::write) (copies).
    pub copy_appends: u64,
    /// Total elements appended via [`shove`](crate::ShiftBuffer::shove) (moves).
    pub move_appends: u64,
    /// Total elements extracted via [`read`](crate::ShiftBuffer::read).
    pub elements_read: u64,
    /// Number of in-place compactions performed.
    pub compactions: u64,
    /// Number of reallocations performed.
    pub reallocations: u64,
}

impl Metrics {
    /// Creates a zeroed metrics snapshot.
    pub fn new() -> Self {
        Self::default()
    }
}
