//! Introspection counters.
//!
//! The framework reports through counters and observer callbacks rather
//! than a logger; these are the queue's counters.  They exist for tuning
//! and for tests — in particular `fallback_scans`, which makes the known
//! cursor-vs-resize caveat observable: after some resize sequences the
//! "current year" cursor can sit past the true minimum, and the dequeue
//! only recovers it through the global fallback scan.

/// Cumulative operation counters for one queue instance.
#[derive(Default, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueStats {
    /// Bucket-count doublings triggered by the upper size threshold.
    pub grows: u64,
    /// Bucket-count halvings triggered by the lower size threshold.
    pub shrinks: u64,
    /// Same-size width recalibrations requested by the resize policy.
    pub recalibrations: u64,
    /// Explicit resizes via `set_size`.
    pub forced_resizes: u64,
    /// Dequeues that exhausted the local year scan and fell back to a full
    /// scan for the global minimum.
    pub fallback_scans: u64,
}
