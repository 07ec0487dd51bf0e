//! `des-queue` — calendar-queue event sets for discrete-event simulation.
//!
//! The event set is the priority queue a simulation loop drains in
//! non-decreasing time order.  This crate implements the calendar-queue
//! family: a bucket array hashed by timestamp with a year-walking cursor,
//! giving amortized O(1) enqueue and extract-min under roughly uniform
//! inter-arrival times, plus cheap rescheduling — the operation heaps
//! can't do well and DEVS-style formalisms live on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`entry`]    | `Entry` (event key + due time)                              |
//! | [`bucket`]   | `Bucket` (one sorted calendar slot)                         |
//! | [`engine`]   | `CalendarQueue<P>` (the bucket engine)                      |
//! | [`policy`]   | `ResizePolicy`, `ThresholdOnly`, `ContentionAware`          |
//! | [`indexed`]  | `IndexedQueue<P>` (event→time index overlay)                |
//! | [`registry`] | `EventQueue` trait, named constructors, selection helpers   |
//! | [`stats`]    | `QueueStats` counters                                       |
//! | [`error`]    | `QueueError`, `QueueResult<T>`                              |
//!
//! # Picking an implementation
//!
//! ```rust,ignore
//! use des_core::{KeyMint, QueueConfig, SimTime};
//! use des_queue::registry;
//!
//! let mut queue = registry::create("calendar-requeue", &QueueConfig::default())?;
//! let mut mint = KeyMint::new();
//! let job = mint.mint();
//! queue.enqueue(job, SimTime::new(4.2).unwrap());
//! queue.requeue(job, SimTime::new(1.0).unwrap());
//! assert_eq!(queue.dequeue().map(|e| e.event), Some(job));
//! ```
//!
//! Single-threaded by design: one simulation loop owns one queue; there is
//! no internal synchronization and no operation blocks.

pub mod bucket;
pub mod engine;
pub mod entry;
pub mod error;
pub mod indexed;
pub mod policy;
pub mod registry;
pub mod stats;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bucket::Bucket;
pub use engine::CalendarQueue;
pub use entry::Entry;
pub use error::{QueueError, QueueResult};
pub use indexed::IndexedQueue;
pub use policy::{ContentionAware, ResizePolicy, ThresholdOnly};
pub use registry::{EventQueue, QueueInfo, RescheduleProfile, TieOrder};
pub use stats::QueueStats;
