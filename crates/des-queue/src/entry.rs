//! The unit of queue membership: one scheduled occurrence.

use des_core::{EventKey, SimTime};

/// An immutable pairing of an event handle and its due time.
///
/// Entries compare by time only where ordering matters (inside buckets);
/// the key carries identity, not order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub event: EventKey,
    pub time:  SimTime,
}

impl Entry {
    #[inline]
    pub fn new(event: EventKey, time: SimTime) -> Self {
        Self { event, time }
    }
}
