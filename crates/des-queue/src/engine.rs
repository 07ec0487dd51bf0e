//! `CalendarQueue` — the bucket engine.
//!
//! # Why this structure
//!
//! A simulation loop drains its event set in non-decreasing time order, and
//! over a long run the *churn* dominates: millions of enqueue/extract-min
//! pairs against a population whose size wobbles but whose inter-arrival
//! times are roughly stationary.  A calendar queue exploits that: hash each
//! entry into `buckets[⌊t/width⌋ mod nbuckets]`, keep each bucket sorted,
//! and walk the calendar with a cursor.  When the width matches the arrival
//! density, both insert and extract-min are amortized O(1); a binary heap's
//! O(log n) never gets there.
//!
//! # The calendar metaphor
//!
//! One bucket covers `width` time units (a "day"); one lap over all buckets
//! covers `nbuckets × width` ("a year").  Extraction remembers where it
//! left off (`last_bucket`) and the end of the day it was examining
//! (`bucket_top`): the next minimum is usually in the same day or one of
//! the next few, so the scan rarely visits more than a couple of buckets.
//!
//! # Resizing
//!
//! Three triggers share one mechanism:
//!
//! - occupancy rises past `2 × nbuckets` → double the bucket count;
//! - occupancy falls below `nbuckets/2 − 2` → halve it;
//! - the [`ResizePolicy`] reports crowded buckets → keep the count, resample
//!   the width.
//!
//! Every resize resamples the width from up to 25 live entries, rebuilds
//! the bucket array, and re-inserts everything.  The re-insertion pass runs
//! with resizing disabled (`resize_enabled`) so it cannot recurse.
//!
//! # Known caveat (kept deliberately)
//!
//! Width sampling works by dequeuing entries and putting them straight
//! back, which advances `last_prio` past entries that remain queued.  After
//! such a resize the cursor's year can start beyond the true minimum, and a
//! later `dequeue` only finds that minimum through the phase-2 global scan.
//! The classic algorithm behaves this way; callers observe it only as an
//! occasional slow dequeue ([`QueueStats::fallback_scans`] counts them).
//! The same applies when a caller schedules work earlier than the last
//! extracted time, which the classic contract discourages but does not
//! forbid.

use std::collections::VecDeque;

use des_core::{EventKey, QueueConfig, SimTime};

use crate::{Bucket, Entry, QueueError, QueueResult, QueueStats, ResizePolicy, ThresholdOnly};

/// Calendar-queue event set, parameterized by resize policy.
///
/// `CalendarQueue<ThresholdOnly>` is the baseline engine;
/// `CalendarQueue<ContentionAware>` is the adaptive ("dynamic") variant.
/// Both expose the same operations.
pub struct CalendarQueue<P: ResizePolicy = ThresholdOnly> {
    buckets: Vec<Bucket>,
    /// Time span of one bucket.  Invariant: finite and > 0.
    width: f64,
    /// Count of finite-time entries across all buckets.
    qsize: usize,
    /// Never-due entries, FIFO.  They have no bucket and no finite key, so
    /// they sit outside the calendar entirely.
    never_entries: VecDeque<Entry>,
    /// Bucket the last extraction came from; where the next scan starts.
    last_bucket: usize,
    /// Priority of the last extracted entry; resizes rebuild the cursor
    /// from this.
    last_prio: f64,
    /// Upper time bound of the day currently under the cursor.
    bucket_top: f64,
    /// Reentrancy guard: a resize's internal re-insertions must not
    /// trigger nested resizes.
    resize_enabled: bool,
    policy: P,
    stats: QueueStats,
}

impl<P: ResizePolicy> Default for CalendarQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ResizePolicy> CalendarQueue<P> {
    /// Empty queue with the default geometry (2 buckets, width 1.0).
    pub fn new() -> Self {
        // Default config is valid by construction.
        Self::with_config(&QueueConfig::default())
            .unwrap_or_else(|_| unreachable!("default QueueConfig validates"))
    }

    /// Empty queue with explicit starting geometry.
    pub fn with_config(config: &QueueConfig) -> QueueResult<Self> {
        config.validate()?;
        let width = config.initial_width;
        Ok(Self {
            buckets: (0..config.initial_buckets).map(|_| Bucket::new()).collect(),
            width,
            qsize: 0,
            never_entries: VecDeque::new(),
            last_bucket: 0,
            last_prio: 0.0,
            // Day 0 runs [0, width); the half-width slack matches the
            // classic formulation: top = (k+1)·width + width/2.
            bucket_top: 1.5 * width,
            resize_enabled: true,
            policy: P::default(),
            stats: QueueStats::default(),
        })
    }

    // ── Introspection ─────────────────────────────────────────────────────────

    /// Total scheduled entries: finite-time plus never-due.
    pub fn len(&self) -> usize {
        self.qsize + self.never_entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qsize == 0 && self.never_entries.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Current bucket width (time units per calendar day).
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn stats(&self) -> QueueStats {
        self.stats
    }

    fn top_threshold(&self) -> usize {
        2 * self.buckets.len()
    }

    fn bot_threshold(&self) -> usize {
        // nbuckets/2 − 2, floored at 0 so small calendars never shrink.
        (self.buckets.len() / 2).saturating_sub(2)
    }

    /// Calendar slot for a finite timestamp: ⌊t/width⌋ mod nbuckets.
    ///
    /// `rem_euclid` on the day number keeps pre-epoch (negative) times in
    /// range instead of overflowing an integer cast.
    fn bucket_index(&self, t: f64) -> usize {
        let day = (t / self.width).floor();
        day.rem_euclid(self.buckets.len() as f64) as usize
    }

    // ── Scheduling ────────────────────────────────────────────────────────────

    /// Schedule `event` at `time`.
    ///
    /// Never-due entries go to the side table and do not count toward the
    /// resize thresholds.  For the cursor scan to stay fast, new work
    /// should not be scheduled earlier than the last extracted time; doing
    /// so is tolerated (the global fallback still finds it) but degrades to
    /// a full scan.
    pub fn enqueue(&mut self, event: EventKey, time: SimTime) {
        if time.is_never() {
            self.never_entries.push_back(Entry::new(event, time));
            return;
        }
        let slot = self.bucket_index(time.as_f64());
        let rank = self.buckets[slot].push(Entry::new(event, time));
        self.qsize += 1;

        if self.policy.note_insert(rank, self.buckets.len()) && self.resize_enabled {
            self.stats.recalibrations += 1;
            let keep = self.buckets.len();
            self.resize(keep);
        }
        if self.qsize > self.top_threshold() && self.resize_enabled {
            self.stats.grows += 1;
            let doubled = self.buckets.len() * 2;
            self.resize(doubled);
        }
    }

    // ── Extraction ────────────────────────────────────────────────────────────

    /// Remove and return the earliest entry.
    ///
    /// Finite-time entries always come first; never-due entries surface
    /// (in FIFO order) only once the calendar is empty.  Returns `None`
    /// when nothing is scheduled at all.
    pub fn dequeue(&mut self) -> Option<Entry> {
        if self.qsize == 0 {
            return self.never_entries.pop_front();
        }

        // Phase 1: walk the calendar from the cursor, one day per bucket.
        let nbuckets = self.buckets.len();
        let mut slot = self.last_bucket;
        let mut top = self.bucket_top;
        for _ in 0..nbuckets {
            if let Some(entry) = self.buckets[slot].pop_first_before(top) {
                self.last_bucket = slot;
                self.last_prio = entry.time.as_f64();
                self.bucket_top = top;
                self.qsize -= 1;
                if self.qsize < self.bot_threshold() && self.resize_enabled {
                    self.stats.shrinks += 1;
                    let halved = (self.buckets.len() / 2).max(1);
                    self.resize(halved);
                }
                return Some(entry);
            }
            slot = (slot + 1) % nbuckets;
            top += self.width;
        }

        // Phase 2: a full year passed with nothing due — the minimum lives
        // in some later year (or behind the cursor).  Find it directly,
        // point the cursor at its year, and redo phase 1, which is now
        // guaranteed to succeed at that bucket.
        self.stats.fallback_scans += 1;
        let (min_slot, min_time) = self.global_min_slot()?;
        self.last_bucket = min_slot;
        self.last_prio = min_time;
        let day = (min_time / self.width).floor();
        self.bucket_top = (day + 1.0) * self.width + 0.5 * self.width;
        self.dequeue()
    }

    /// Slot and time of the globally minimal bucket head.  `None` only when
    /// every bucket is empty.
    fn global_min_slot(&self) -> Option<(usize, f64)> {
        self.buckets
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.first().map(|e| (i, e.time)))
            .min_by(|a, b| a.1.cmp(&b.1))
            .map(|(i, t)| (i, t.as_f64()))
    }

    /// Remove and return every event sharing the minimum timestamp, in
    /// extraction order.
    ///
    /// If only never-due entries remain they are all drained (they share
    /// the `NEVER` timestamp).  Empty queue yields an empty vec.
    pub fn dequeue_all(&mut self) -> Vec<EventKey> {
        let Some(first) = self.dequeue() else {
            return Vec::new();
        };
        let min_time = first.time;
        let mut events = vec![first.event];
        while let Some(next) = self.dequeue() {
            if next.time == min_time {
                events.push(next.event);
            } else {
                // Went one entry too far; put it back.
                self.enqueue(next.event, next.time);
                break;
            }
        }
        events
    }

    /// Remove and return every event stored at exactly `time`.
    ///
    /// `NEVER` drains the whole never-due table.  A time with no entries
    /// yields an empty vec — absence is not an error.
    pub fn dequeue_all_at(&mut self, time: SimTime) -> Vec<EventKey> {
        if time.is_never() {
            return self.never_entries.drain(..).map(|e| e.event).collect();
        }
        let slot = self.bucket_index(time.as_f64());
        let events = self.buckets[slot].drain_at(time);
        self.qsize -= events.len();
        events
    }

    /// Best-effort cancellation: remove `event` wherever it is queued and
    /// return its stored time.  Missing events are a silent `None`.
    ///
    /// Identity lookup with no index, so this scans — the never-due table
    /// first, then every bucket.
    pub fn dequeue_event(&mut self, event: EventKey) -> Option<SimTime> {
        if let Some(pos) = self.never_entries.iter().position(|e| e.event == event) {
            return self.never_entries.remove(pos).map(|e| e.time);
        }
        for bucket in &mut self.buckets {
            if let Some(time) = bucket.remove_key(event) {
                self.qsize -= 1;
                return Some(time);
            }
        }
        None
    }

    /// Non-destructive minimum: the earliest finite time, or `NEVER` if
    /// only never-due entries remain, or `None` if the queue is empty.
    ///
    /// Scans all bucket heads rather than trusting the cursor, so it is
    /// exact even when the cursor is stale.
    pub fn min_time(&self) -> Option<SimTime> {
        match self.buckets.iter().filter_map(Bucket::first).map(|e| e.time).min() {
            Some(t) => Some(t),
            None if !self.never_entries.is_empty() => Some(SimTime::NEVER),
            None => None,
        }
    }

    /// Stored time of `event`, or `None` if it is not queued.  O(total
    /// entries); the indexed overlay turns this into a map lookup.
    pub fn get_time(&self, event: EventKey) -> Option<SimTime> {
        if let Some(e) = self.never_entries.iter().find(|e| e.event == event) {
            return Some(e.time);
        }
        self.buckets
            .iter()
            .flat_map(|b| b.entries())
            .find(|e| e.event == event)
            .map(|e| e.time)
    }

    // ── Rescheduling ──────────────────────────────────────────────────────────

    /// Move `event` to `new_time`, scanning the whole queue for its current
    /// entry.  If it is not queued, this degrades to a plain enqueue.
    pub fn requeue(&mut self, event: EventKey, new_time: SimTime) {
        self.dequeue_event(event);
        self.enqueue(event, new_time);
    }

    /// Move `event` from a *known* `old_time` to `new_time`.
    ///
    /// Knowing the old time pins the bucket, so removal scans one bucket
    /// instead of the whole calendar — the operation DEVS-style models hit
    /// on every transition.  A stale `old_time` (event not found there)
    /// silently degrades to a plain enqueue.
    pub fn requeue_from(&mut self, event: EventKey, old_time: SimTime, new_time: SimTime) {
        self.remove_known(event, old_time);
        self.enqueue(event, new_time);
    }

    /// Removal half of [`requeue_from`](Self::requeue_from): drop `event`
    /// from the slot `old_time` maps to.
    pub(crate) fn remove_known(&mut self, event: EventKey, old_time: SimTime) -> Option<SimTime> {
        if old_time.is_never() {
            let pos = self.never_entries.iter().position(|e| e.event == event)?;
            return self.never_entries.remove(pos).map(|e| e.time);
        }
        let slot = self.bucket_index(old_time.as_f64());
        let time = self.buckets[slot].remove_key(event)?;
        self.qsize -= 1;
        Some(time)
    }

    // ── Resizing ──────────────────────────────────────────────────────────────

    /// Force the calendar to exactly `nbuckets` buckets, resampling the
    /// width.  Rejects a zero bucket count; a resize already in progress
    /// makes this a no-op.
    pub fn set_size(&mut self, nbuckets: usize) -> QueueResult<()> {
        if nbuckets == 0 {
            return Err(QueueError::Config(
                "bucket count must be at least 1".into(),
            ));
        }
        self.stats.forced_resizes += 1;
        self.resize(nbuckets);
        Ok(())
    }

    /// Rebuild the calendar with `new_nbuckets` buckets and a freshly
    /// sampled width, preserving the exact multiset of entries.
    ///
    /// Guarded: while one resize runs, the threshold checks inside the
    /// enqueues and dequeues it performs are inert.
    fn resize(&mut self, new_nbuckets: usize) {
        if !self.resize_enabled {
            return;
        }
        self.resize_enabled = false;

        self.width = self.sample_width();
        let old_buckets = std::mem::replace(
            &mut self.buckets,
            (0..new_nbuckets.max(1)).map(|_| Bucket::new()).collect(),
        );

        // Rebuild the cursor in the new geometry from the last extracted
        // priority.  Note the caveat in the module docs: `last_prio` may
        // have been advanced by the sampling pass above.
        let day = (self.last_prio / self.width).floor();
        self.last_bucket = day.rem_euclid(self.buckets.len() as f64) as usize;
        self.bucket_top = (day + 1.0) * self.width + 0.5 * self.width;

        self.qsize = 0;
        for bucket in old_buckets {
            for entry in bucket.into_entries() {
                self.enqueue(entry.event, entry.time);
            }
        }

        self.policy.reset();
        self.resize_enabled = true;
    }

    /// Estimate a bucket width for the current population: dequeue up to 25
    /// entries, put them straight back, and take 3 × the mean of their
    /// timestamps.
    ///
    /// Degenerate cases fall back to 1.0: fewer than two entries tell us
    /// nothing, and a zero or negative mean (pre-epoch timestamps) would
    /// produce a bucket with zero or negative span, which the `[width > 0]`
    /// invariant forbids.
    fn sample_width(&mut self) -> f64 {
        if self.qsize < 2 {
            return 1.0;
        }
        let n = self.qsize.min(25);
        let mut sampled = Vec::with_capacity(n);
        for _ in 0..n {
            match self.dequeue() {
                Some(entry) => sampled.push(entry),
                None => break,
            }
        }
        let sum: f64 = sampled.iter().map(|e| e.time.as_f64()).sum();
        let count = sampled.len();
        for entry in &sampled {
            self.enqueue(entry.event, entry.time);
        }
        let mean = sum / count as f64;
        if mean <= 0.0 { 1.0 } else { 3.0 * mean }
    }
}
