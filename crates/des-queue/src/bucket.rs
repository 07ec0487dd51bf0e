//! One calendar slot: a time-sorted run of entries.
//!
//! A bucket covers one "day" (`width` time units) of a calendar year.  It
//! stays sorted ascending by time so its minimum is always `entries[0]`,
//! which is what makes the engine's bucket-hopping scan cheap.  Ties among
//! equal timestamps break FIFO by insertion: a new entry lands *after*
//! existing equals, so drain order within a timestamp is the order the
//! caller scheduled in.  Downstream reproducibility depends on this, so it
//! is pinned by tests.

use des_core::{EventKey, SimTime};

use crate::Entry;

#[derive(Default, Clone, Debug)]
pub struct Bucket {
    entries: Vec<Entry>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keeping sort order; returns the rank (0-based position) at
    /// which the entry landed.
    ///
    /// The rank doubles as a contention signal: a bucket that keeps
    /// reporting high ranks is absorbing more than its share of the time
    /// distribution.
    pub fn push(&mut self, entry: Entry) -> usize {
        // `<=` places the new entry after existing equals (FIFO ties).
        let rank = self.entries.partition_point(|e| e.time <= entry.time);
        self.entries.insert(rank, entry);
        rank
    }

    /// The earliest entry, if any.
    #[inline]
    pub fn first(&self) -> Option<&Entry> {
        self.entries.first()
    }

    /// Remove and return the earliest entry if its time is strictly below
    /// `limit` — the engine's "is this due within the current day" probe.
    pub fn pop_first_before(&mut self, limit: f64) -> Option<Entry> {
        if self.entries.first()?.time.as_f64() < limit {
            Some(self.entries.remove(0))
        } else {
            None
        }
    }

    /// Remove the first entry carrying `event`, returning its time.
    ///
    /// Identity lookup, so this must scan; a bucket is small by design.
    pub fn remove_key(&mut self, event: EventKey) -> Option<SimTime> {
        let pos = self.entries.iter().position(|e| e.event == event)?;
        Some(self.entries.remove(pos).time)
    }

    /// Remove every entry whose time equals `time` exactly, in stored
    /// (FIFO-within-timestamp) order.
    pub fn drain_at(&mut self, time: SimTime) -> Vec<EventKey> {
        // The bucket is sorted, so equal times form one contiguous run.
        let start = self.entries.partition_point(|e| e.time < time);
        let end = self.entries.partition_point(|e| e.time <= time);
        self.entries.drain(start..end).map(|e| e.event).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the bucket, yielding its entries for re-insertion elsewhere.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Read-only view, for scans that must visit every member.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
