//! Named queue implementations and their construction.
//!
//! The surrounding framework selects an event-set implementation by name or
//! by workload criteria.  Instead of discovering classes reflectively at
//! runtime, the choices live in one compile-time table: each variant is a
//! [`QueueInfo`] carrying declarative metadata and a constructor function.
//! Adding a variant means adding a row; nothing is loaded dynamically.

use des_core::{EventKey, QueueConfig, SimTime};

use crate::{
    CalendarQueue, ContentionAware, Entry, IndexedQueue, QueueError, QueueResult, ResizePolicy,
    ThresholdOnly,
};

// ── The common surface ────────────────────────────────────────────────────────

/// Object-safe surface shared by every event-set implementation, so the
/// simulation loop can drive a `Box<dyn EventQueue>` chosen at startup.
///
/// Semantics are those of [`CalendarQueue`]; see the engine docs for the
/// two-phase extraction and resize behavior behind them.
pub trait EventQueue {
    fn enqueue(&mut self, event: EventKey, time: SimTime);
    fn dequeue(&mut self) -> Option<Entry>;
    /// Cancel `event`, returning its stored time if it was queued.
    fn dequeue_event(&mut self, event: EventKey) -> Option<SimTime>;
    /// Remove and return all events sharing the minimum timestamp.
    fn dequeue_all(&mut self) -> Vec<EventKey>;
    /// Remove and return all events stored at exactly `time`.
    fn dequeue_all_at(&mut self, time: SimTime) -> Vec<EventKey>;
    fn min_time(&self) -> Option<SimTime>;
    fn requeue(&mut self, event: EventKey, new_time: SimTime);
    fn requeue_from(&mut self, event: EventKey, old_time: SimTime, new_time: SimTime);
    fn get_time(&self, event: EventKey) -> Option<SimTime>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Force the calendar to exactly `nbuckets` buckets.
    fn set_size(&mut self, nbuckets: usize) -> QueueResult<()>;
}

impl<P: ResizePolicy> EventQueue for CalendarQueue<P> {
    fn enqueue(&mut self, event: EventKey, time: SimTime) {
        CalendarQueue::enqueue(self, event, time);
    }
    fn dequeue(&mut self) -> Option<Entry> {
        CalendarQueue::dequeue(self)
    }
    fn dequeue_event(&mut self, event: EventKey) -> Option<SimTime> {
        CalendarQueue::dequeue_event(self, event)
    }
    fn dequeue_all(&mut self) -> Vec<EventKey> {
        CalendarQueue::dequeue_all(self)
    }
    fn dequeue_all_at(&mut self, time: SimTime) -> Vec<EventKey> {
        CalendarQueue::dequeue_all_at(self, time)
    }
    fn min_time(&self) -> Option<SimTime> {
        CalendarQueue::min_time(self)
    }
    fn requeue(&mut self, event: EventKey, new_time: SimTime) {
        CalendarQueue::requeue(self, event, new_time);
    }
    fn requeue_from(&mut self, event: EventKey, old_time: SimTime, new_time: SimTime) {
        CalendarQueue::requeue_from(self, event, old_time, new_time);
    }
    fn get_time(&self, event: EventKey) -> Option<SimTime> {
        CalendarQueue::get_time(self, event)
    }
    fn len(&self) -> usize {
        CalendarQueue::len(self)
    }
    fn set_size(&mut self, nbuckets: usize) -> QueueResult<()> {
        CalendarQueue::set_size(self, nbuckets)
    }
}

impl<P: ResizePolicy> EventQueue for IndexedQueue<P> {
    fn enqueue(&mut self, event: EventKey, time: SimTime) {
        IndexedQueue::enqueue(self, event, time);
    }
    fn dequeue(&mut self) -> Option<Entry> {
        IndexedQueue::dequeue(self)
    }
    fn dequeue_event(&mut self, event: EventKey) -> Option<SimTime> {
        IndexedQueue::dequeue_event(self, event)
    }
    fn dequeue_all(&mut self) -> Vec<EventKey> {
        IndexedQueue::dequeue_all(self)
    }
    fn dequeue_all_at(&mut self, time: SimTime) -> Vec<EventKey> {
        IndexedQueue::dequeue_all_at(self, time)
    }
    fn min_time(&self) -> Option<SimTime> {
        IndexedQueue::min_time(self)
    }
    fn requeue(&mut self, event: EventKey, new_time: SimTime) {
        IndexedQueue::requeue(self, event, new_time);
    }
    fn requeue_from(&mut self, event: EventKey, old_time: SimTime, new_time: SimTime) {
        IndexedQueue::requeue_from(self, event, old_time, new_time);
    }
    fn get_time(&self, event: EventKey) -> Option<SimTime> {
        IndexedQueue::get_time(self, event)
    }
    fn len(&self) -> usize {
        IndexedQueue::len(self)
    }
    fn set_size(&mut self, nbuckets: usize) -> QueueResult<()> {
        IndexedQueue::set_size(self, nbuckets)
    }
}

// ── Metadata and registry ─────────────────────────────────────────────────────

/// How equal-priority entries come out of a given implementation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TieOrder {
    /// Ties drain in a deterministic order (here: FIFO by insertion).
    Reproducible,
    /// Ties may drain in any order between runs.
    Unspecified,
}

/// Workload hint for [`best_for`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RescheduleProfile {
    /// Events are almost always dequeued, rarely cancelled or moved.
    MostlyDequeue,
    /// Events are frequently rescheduled before they fire.
    RescheduleHeavy,
}

/// One selectable implementation: metadata plus a constructor.
pub struct QueueInfo {
    pub name: &'static str,
    /// Relative efficiency score used when selecting by criteria.  These
    /// are declarative rankings, not measurements.
    pub efficiency: f64,
    pub tie_order: TieOrder,
    /// `true` if the implementation carries an event index that makes
    /// rescheduling cheap.
    pub indexed_requeue: bool,
    ctor: fn(&QueueConfig) -> QueueResult<Box<dyn EventQueue>>,
}

impl QueueInfo {
    pub fn create(&self, config: &QueueConfig) -> QueueResult<Box<dyn EventQueue>> {
        (self.ctor)(config)
    }
}

fn new_baseline(config: &QueueConfig) -> QueueResult<Box<dyn EventQueue>> {
    Ok(Box::new(CalendarQueue::<ThresholdOnly>::with_config(config)?))
}

fn new_adaptive(config: &QueueConfig) -> QueueResult<Box<dyn EventQueue>> {
    Ok(Box::new(CalendarQueue::<ContentionAware>::with_config(config)?))
}

fn new_requeue(config: &QueueConfig) -> QueueResult<Box<dyn EventQueue>> {
    Ok(Box::new(IndexedQueue::<ContentionAware>::with_config(config)?))
}

/// Every registered implementation.
pub const REGISTRY: &[QueueInfo] = &[
    QueueInfo {
        name: "calendar",
        efficiency: 0.80,
        tie_order: TieOrder::Reproducible,
        indexed_requeue: false,
        ctor: new_baseline,
    },
    QueueInfo {
        name: "calendar-dynamic",
        efficiency: 0.85,
        tie_order: TieOrder::Reproducible,
        indexed_requeue: false,
        ctor: new_adaptive,
    },
    QueueInfo {
        name: "calendar-requeue",
        efficiency: 0.90,
        tie_order: TieOrder::Reproducible,
        indexed_requeue: true,
        ctor: new_requeue,
    },
];

/// Construct the implementation registered under `name`.
pub fn create(name: &str, config: &QueueConfig) -> QueueResult<Box<dyn EventQueue>> {
    REGISTRY
        .iter()
        .find(|info| info.name == name)
        .ok_or_else(|| QueueError::UnknownImplementation(name.to_string()))?
        .create(config)
}

/// All registered implementations, for selection UIs and tests.
pub fn available() -> &'static [QueueInfo] {
    REGISTRY
}

/// Highest-efficiency implementation matching the workload hint.
pub fn best_for(profile: RescheduleProfile) -> &'static QueueInfo {
    // Index maintenance is pure overhead for workloads that never
    // reschedule, so each profile only considers one side of the split.
    let candidates = REGISTRY.iter().filter(|info| match profile {
        RescheduleProfile::RescheduleHeavy => info.indexed_requeue,
        RescheduleProfile::MostlyDequeue => !info.indexed_requeue,
    });
    // The registry is never empty and every profile matches at least one
    // row, so the fold has a result.
    candidates
        .reduce(|best, info| if info.efficiency > best.efficiency { info } else { best })
        .unwrap_or(&REGISTRY[0])
}
