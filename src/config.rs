/// Tuning knobs for a [`ShiftBuffer`](crate::ShiftBuffer).
///
/// Mirrors the shape of a typical buffer configuration: a capacity hint plus
/// the two knobs that govern when a would-overflow append grows the buffer
/// versus compacts it in place (see `spec.md` §4 for the append algorithm
/// this tunes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftBufferConfig {
    /// Capacity reserved by a default-constructed buffer.
    pub initial_capacity: usize,
    /// Multiplier applied to capacity on reallocation. Must be at least 2
    /// to keep amortised append cost O(1).
    pub growth_factor: usize,
    /// Minimum fraction of capacity that must be free head space before an
    /// append that would otherwise overflow the tail is satisfied by
    /// in-place compaction rather than reallocation. Lower values compact
    /// more eagerly; higher values favour reallocating over shifting data.
    pub min_free_head_ratio: f64,
}

impl ShiftBufferConfig {
    /// Creates a configuration, validating the invariants compaction and
    /// growth rely on.
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity` is 0, if `growth_factor` is less than 2,
    /// or if `min_free_head_ratio` is not in `[0.0, 1.0]`.
    pub const fn new(initial_capacity: usize, growth_factor: usize, min_free_head_ratio: f64) -> Self {
        assert!(initial_capacity > 0, "initial_capacity must be at least 1");
        assert!(
            growth_factor >= 2,
            "growth_factor must be at least 2 to guarantee amortised O(1) append"
        );
        assert!(
            min_free_head_ratio >= 0.0 && min_free_head_ratio <= 1.0,
            "min_free_head_ratio must be between 0.0 and 1.0"
        );
        Self {
            initial_capacity,
            growth_factor,
            min_free_head_ratio,
        }
    }
}

impl Default for ShiftBufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 256,
            growth_factor: 2,
            min_free_head_ratio: 0.5,
        }
    }
}

/// Tuned for small, short-lived buffers, e.g. per-connection framing
/// scratch space where most buffers never grow past a few dozen elements.
pub const SMALL_CONFIG: ShiftBufferConfig = ShiftBufferConfig::new(16, 2, 0.5);

/// Tuned for high-throughput codec pipelines that rarely drain to empty:
/// favours reallocating over frequent small compactions.
pub const LARGE_CONFIG: ShiftBufferConfig = ShiftBufferConfig::new(64 * 1024, 2, 0.25);
