//! Strongly typed, zero-cost identifier wrappers.
//!
//! Queue membership is keyed by *identity*, not by payload equality: the
//! same logical event scheduled twice must be two independent members.
//! Rather than leaning on pointer identity, an [`EventKey`] is an opaque
//! integer token — `Copy + Ord + Hash`, usable as a map key without
//! ceremony — and [`KeyMint`] guarantees freshness.  The inner integer is
//! `pub` so callers can index side tables via `key.0 as usize`, but the
//! `.index()` helper reads better.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Opaque handle for one schedulable event occurrence.
    ///
    /// Keys compare by token value only; the queue never sees the payload
    /// the caller associates with a key.  Mint keys with [`KeyMint`] to keep
    /// occurrences distinct even when their payloads are equal.
    pub struct EventKey(u64);
}

// ── KeyMint ───────────────────────────────────────────────────────────────────

/// Monotonic allocator of fresh [`EventKey`]s.
///
/// Single-threaded on purpose — the whole event set is driven by one
/// simulation loop, so a plain counter suffices.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyMint {
    next: u64,
}

impl KeyMint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused key.
    #[inline]
    pub fn mint(&mut self) -> EventKey {
        let key = EventKey(self.next);
        self.next += 1;
        key
    }

    /// Number of keys minted so far.
    pub fn minted(&self) -> u64 {
        self.next
    }
}
