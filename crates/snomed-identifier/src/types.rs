//! Error types for identifier allocation.

use thiserror::Error;

/// Errors that can occur while allocating identifiers.
#[derive(Error, Debug)]
pub enum IdentifierError {
    /// The partition code has no entry in the partition table.
    ///
    /// This is a configuration defect, not a runtime condition: every
    /// partition the deployment mints identifiers for must be registered
    /// before the generator is used. Raised before any lock is taken and
    /// before any store query runs.
    #[error("partition '{partition}' is not handled by the configured identifier generator")]
    UnknownPartition {
        /// The unrecognized partition code.
        partition: String,
    },

    /// The backing store query failed.
    ///
    /// Propagated verbatim; this layer performs no retry.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An identifier does not match the expected positional SCTID scheme.
    ///
    /// For a stored identifier this is an internal-invariant violation: the
    /// record matched the highest-sequence query but its sequence portion
    /// does not parse. We surface it rather than skip to a lower-ranked
    /// candidate, since silently skipping could hide the true maximum.
    #[error("identifier '{value}' does not match the expected SCTID layout")]
    MalformedIdentifier {
        /// The identifier that failed to parse.
        value: String,
    },

    /// The identifier-shape pattern failed to compile.
    ///
    /// Cannot happen for patterns built from a validated partition code and
    /// a decimal namespace; kept as an error rather than a panic.
    #[error("invalid identifier pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors raised by a [`ComponentStore`](crate::ComponentStore)
/// implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not execute the query.
    #[error("store query failed: {message}")]
    QueryFailed {
        /// Backend-reported failure detail.
        message: String,
    },

    /// The store did not answer within its deadline.
    #[error("store query timed out after {millis}ms")]
    Timeout {
        /// The elapsed deadline in milliseconds.
        millis: u64,
    },
}

/// Result type for identifier allocation operations.
pub type IdentifierResult<T> = Result<T, IdentifierError>;
