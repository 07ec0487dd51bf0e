//! Framework error type.
//!
//! Normal queue operation never errors: empty queues, missing events, and
//! NaN timestamps are all signaled through `Option` returns.  Errors are
//! reserved for structurally invalid configuration — programming mistakes,
//! not data-dependent queue states.

use thiserror::Error;

/// The top-level error type for `des-core`, wrapped by sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `des-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
