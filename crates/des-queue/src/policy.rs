//! Pluggable resize policies.
//!
//! Calendar queues come in two classic flavors: one that resizes only on
//! the gross size thresholds, and a "dynamic" variant that additionally
//! watches where inserts land inside their bucket and re-tunes the width
//! when buckets get crowded.  Rather than two near-duplicate engines, the
//! engine is written once and the difference is this small trait seam.

/// Observes inserts and decides when the engine should recalibrate its
/// bucket width without changing the bucket count.
///
/// Threshold-driven grow/shrink is the engine's own job; a policy only adds
/// *proactive* recalibration on top.
pub trait ResizePolicy: Default {
    /// Called after an entry lands at `rank` within its bucket (`nbuckets`
    /// is the current bucket count).  Return `true` to request a same-size
    /// resize, which redistributes load under a freshly sampled width.
    fn note_insert(&mut self, rank: usize, nbuckets: usize) -> bool;

    /// Discard accumulated observations.  Invoked after every resize so the
    /// policy judges the new geometry on fresh data.
    fn reset(&mut self);
}

/// Baseline policy: size thresholds only, never recalibrates proactively.
#[derive(Default, Clone, Debug)]
pub struct ThresholdOnly;

impl ResizePolicy for ThresholdOnly {
    #[inline]
    fn note_insert(&mut self, _rank: usize, _nbuckets: usize) -> bool {
        false
    }

    fn reset(&mut self) {}
}

/// Adaptive policy: tracks the mean insertion rank over a window of
/// `nbuckets` inserts and requests recalibration when it exceeds
/// [`Self::MAX_MEAN_RANK`].
///
/// Catches skewed time distributions that pile entries into a few buckets
/// without ever breaching the gross size thresholds.
#[derive(Default, Clone, Debug)]
pub struct ContentionAware {
    rank_sum: u64,
    inserts:  u64,
}

impl ContentionAware {
    /// Mean in-bucket insertion rank above which the width is considered
    /// mistuned.
    pub const MAX_MEAN_RANK: f64 = 3.0;
}

impl ResizePolicy for ContentionAware {
    fn note_insert(&mut self, rank: usize, nbuckets: usize) -> bool {
        self.rank_sum += rank as u64;
        self.inserts += 1;
        if self.inserts <= nbuckets as u64 {
            return false;
        }
        let mean = self.rank_sum as f64 / self.inserts as f64;
        // Window complete: either way the counters start over.
        self.rank_sum = 0;
        self.inserts = 0;
        mean > Self::MAX_MEAN_RANK
    }

    fn reset(&mut self) {
        self.rank_sum = 0;
        self.inserts = 0;
    }
}
