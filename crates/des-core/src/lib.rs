//! `des-core` — foundational types for the `rust_des` event-set crates.
//!
//! This crate is a dependency of every other `des-*` crate.  It has no
//! intra-workspace dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`time`]   | `SimTime` (total-ordered, `NEVER` = +inf) |
//! | [`ids`]    | `EventKey`, `KeyMint`                     |
//! | [`config`] | `QueueConfig`                             |
//! | [`error`]  | `CoreError`, `CoreResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::QueueConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{EventKey, KeyMint};
pub use time::SimTime;
