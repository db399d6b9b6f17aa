//! Debug-only invariant checks for [`crate::ShiftBuffer`].
//!
//! These assertions are compiled out entirely in release builds
//! (`#[cfg(debug_assertions)]` via `debug_assert!`), so they carry zero
//! runtime cost once a consumer ships.

/// The live window never extends past the end of allocated storage.
macro_rules! debug_assert_live_window_in_bounds {
    ($head:expr, $count:expr, $capacity:expr) => {
        debug_assert!(
            $head + $count <= $capacity,
            "live window [{}, {}) exceeds capacity {}",
            $head,
            $head + $count,
            $capacity
        )
    };
}

/// Capacity only ever grows, never shrinks.
macro_rules! debug_assert_capacity_monotonic {
    ($old:expr, $new:expr) => {
        debug_assert!(
            $new >= $old,
            "capacity shrank from {} to {}; ShiftBuffer never shrinks",
            $old,
            $new
        )
    };
}

/// A read never asks for more elements than are currently live.
macro_rules! debug_assert_read_in_window {
    ($requested:expr, $count:expr) => {
        debug_assert!(
            $requested <= $count,
            "attempted to read {} elements but only {} are live",
            $requested,
            $count
        )
    };
}

pub(crate) use debug_assert_capacity_monotonic;
pub(crate) use debug_assert_live_window_in_bounds;
pub(crate) use debug_assert_read_in_window;
