//! `IndexedQueue` — the requeue-indexed overlay.
//!
//! Formalisms that reschedule on every state transition (DEVS-style
//! models) spend their time in `requeue` and `get_time`.  On the bare
//! engine both are whole-queue scans, because the calendar is keyed by
//! time, not by event.  The overlay mirrors the engine's contents in an
//! `event → time` map so `get_time` is a lookup and `requeue` can hand the
//! engine a known old time, shrinking the search to one bucket.
//!
//! The index and the engine must agree after every operation — that
//! agreement is this type's whole correctness obligation, so every
//! mutating method updates both before returning.
//!
//! One restriction the bare engine does not have: the index holds one time
//! per key, so a key should be scheduled at most once at a time here.
//! Enqueueing a key that is already indexed replaces its index slot (the
//! engine-side duplicate is removed first, keeping the two in agreement).

use des_core::{EventKey, QueueConfig, SimTime};
use rustc_hash::FxHashMap;

use crate::{CalendarQueue, Entry, QueueResult, QueueStats, ResizePolicy, ThresholdOnly};

/// Calendar queue plus an `event → time` index for O(1) time lookup and
/// O(bucket) rescheduling.
pub struct IndexedQueue<P: ResizePolicy = ThresholdOnly> {
    engine: CalendarQueue<P>,
    index:  FxHashMap<EventKey, SimTime>,
}

impl<P: ResizePolicy> Default for IndexedQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ResizePolicy> IndexedQueue<P> {
    pub fn new() -> Self {
        Self {
            engine: CalendarQueue::new(),
            index:  FxHashMap::default(),
        }
    }

    pub fn with_config(config: &QueueConfig) -> QueueResult<Self> {
        Ok(Self {
            engine: CalendarQueue::with_config(config)?,
            index:  FxHashMap::default(),
        })
    }

    // ── Delegated surface ─────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.engine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    pub fn min_time(&self) -> Option<SimTime> {
        self.engine.min_time()
    }

    pub fn stats(&self) -> QueueStats {
        self.engine.stats()
    }

    pub fn set_size(&mut self, nbuckets: usize) -> QueueResult<()> {
        // A resize reshuffles buckets but moves no entry across times, so
        // the index needs no update.
        self.engine.set_size(nbuckets)
    }

    // ── Indexed operations ────────────────────────────────────────────────────

    /// Stored time of `event` — a map lookup, not a scan.
    pub fn get_time(&self, event: EventKey) -> Option<SimTime> {
        self.index.get(&event).copied()
    }

    pub fn enqueue(&mut self, event: EventKey, time: SimTime) {
        if let Some(old) = self.index.insert(event, time) {
            // Key was already scheduled: drop the stale engine entry so the
            // index's one-time-per-key view stays truthful.
            self.engine.remove_known(event, old);
        }
        self.engine.enqueue(event, time);
    }

    pub fn dequeue(&mut self) -> Option<Entry> {
        let entry = self.engine.dequeue()?;
        self.index.remove(&entry.event);
        Some(entry)
    }

    pub fn dequeue_event(&mut self, event: EventKey) -> Option<SimTime> {
        let time = self.index.remove(&event)?;
        self.engine.remove_known(event, time)
    }

    pub fn dequeue_all(&mut self) -> Vec<EventKey> {
        let events = self.engine.dequeue_all();
        for event in &events {
            self.index.remove(event);
        }
        events
    }

    pub fn dequeue_all_at(&mut self, time: SimTime) -> Vec<EventKey> {
        let events = self.engine.dequeue_all_at(time);
        for event in &events {
            self.index.remove(event);
        }
        events
    }

    /// Reschedule `event` to `new_time`.
    ///
    /// The index supplies the current time, so the engine's one-bucket
    /// `requeue_from` path runs instead of a whole-queue scan.  An
    /// unindexed event degrades to a plain enqueue.
    pub fn requeue(&mut self, event: EventKey, new_time: SimTime) {
        match self.index.insert(event, new_time) {
            Some(old) => self.engine.requeue_from(event, old, new_time),
            None => self.engine.enqueue(event, new_time),
        }
    }

    /// Three-argument requeue kept for interface parity.
    ///
    /// The index already knows the event's real current time, so the
    /// engine-side removal uses that; a stale caller-supplied `old_time`
    /// must not leave the old entry stranded in a bucket the index no
    /// longer agrees with.  `old_time` is only trusted for keys the
    /// overlay has never indexed.
    pub fn requeue_from(&mut self, event: EventKey, old_time: SimTime, new_time: SimTime) {
        match self.index.insert(event, new_time) {
            Some(actual) => self.engine.requeue_from(event, actual, new_time),
            None => self.engine.requeue_from(event, old_time, new_time),
        }
    }
}
