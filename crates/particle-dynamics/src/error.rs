use std::collections::TryReserveError;
use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Failure modes surfaced by the simulation core.
///
/// Configuration and precondition failures are caller errors and surface at
/// the violating call; nothing on the per-tick path produces an error.
#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected at startup: bad parameter values or mismatched array lengths.
    #[error("configuration error: {0}")]
    Config(String),

    /// An operation was called outside its contract (wrong lifecycle state,
    /// negative `dt`).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// The velocity buffer could not be allocated; the simulation does not
    /// start.
    #[error("failed to allocate velocity buffer for {count} particles")]
    Allocation {
        count: usize,
        #[source]
        source: TryReserveError,
    },
}
