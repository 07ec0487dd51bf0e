//! Simulation time model.
//!
//! # Design
//!
//! Event-scheduling formalisms need continuous time, so the canonical unit
//! is a `f64` wrapped in [`SimTime`].  Two things make the raw float safe to
//! use as a priority key:
//!
//! - NaN is unrepresentable: [`SimTime::new`] returns `None` for NaN instead
//!   of letting it poison every later comparison.  Absence is the signal,
//!   not a panic or an error — a scheduler hits malformed input constantly
//!   and must shrug it off.
//! - Ordering is total (`f64::total_cmp`), so `SimTime` implements `Ord`
//!   and can key sorted containers directly.
//!
//! `+inf` is a *meaningful* value: [`SimTime::NEVER`] marks an event that is
//! scheduled but not currently due at any finite time.  Queues must keep
//! never-due entries out of their finite bookkeeping (they have no bucket).

use std::cmp::Ordering;
use std::fmt;

/// A point in simulation time.
///
/// Total order, `NEVER == +inf`, NaN excluded by construction.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    /// The origin of simulation time.
    pub const ZERO: SimTime = SimTime(0.0);

    /// Sentinel meaning "scheduled, but never due" — positive infinity.
    pub const NEVER: SimTime = SimTime(f64::INFINITY);

    /// Wrap a raw timestamp.  Returns `None` for NaN.
    #[inline]
    pub fn new(t: f64) -> Option<SimTime> {
        if t.is_nan() { None } else { Some(SimTime(t)) }
    }

    /// The raw timestamp value.
    #[inline(always)]
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// `true` for the `NEVER` sentinel.
    #[inline]
    pub fn is_never(self) -> bool {
        self.0 == f64::INFINITY
    }
}

// NaN is excluded by `new`, so the partial order is in fact total.  Equality
// follows `total_cmp` so it never disagrees with `Ord` (the one observable
// difference from IEEE `==` is that -0.0 sorts just below +0.0).
impl PartialEq for SimTime {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl Ord for SimTime {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for SimTime {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_never() {
            write!(f, "t=never")
        } else {
            write!(f, "t={}", self.0)
        }
    }
}
