//! Event-set construction parameters.

use crate::{CoreError, CoreResult};

/// Initial geometry of a calendar queue.
///
/// The defaults (2 buckets, width 1.0) match the classic algorithm's cold
/// start: the queue is expected to grow itself via threshold resizes as soon
/// as real load arrives, so the starting geometry only has to be valid, not
/// tuned.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueConfig {
    /// Number of buckets allocated at construction.  Must be ≥ 1.
    pub initial_buckets: usize,
    /// Time span covered by one bucket.  Must be finite and > 0.
    pub initial_width: f64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_buckets: 2,
            initial_width:   1.0,
        }
    }
}

impl QueueConfig {
    /// Reject structurally invalid geometry.
    ///
    /// A zero bucket count or a non-positive/non-finite width reflects a
    /// programming mistake, not a queue state, so it is the one place the
    /// event set reports an error instead of an absence.
    pub fn validate(&self) -> CoreResult<()> {
        if self.initial_buckets == 0 {
            return Err(CoreError::Config(
                "bucket count must be at least 1".into(),
            ));
        }
        if !(self.initial_width.is_finite() && self.initial_width > 0.0) {
            return Err(CoreError::Config(format!(
                "bucket width must be finite and positive, got {}",
                self.initial_width
            )));
        }
        Ok(())
    }
}
