//! # snomed-identifier
//!
//! Local sequential SCTID allocation for SNOMED CT authoring.
//!
//! Minting a new component identifier means finding the highest sequence
//! already in use for a (namespace, partition) key, incrementing it, and
//! appending the namespace digits, partition code, and a Verhoeff check
//! digit. The content store is the source of truth for the highest existing
//! identifier, but it may lag reservations made moments earlier and not yet
//! persisted; a process-local cache of the highest issued sequence per key,
//! consulted under a mutex, closes that window.
//!
//! ## Usage
//!
//! ```rust
//! use snomed_identifier::{
//!     IdentifierSource, InMemoryComponentStore, LocalSequentialIdentifierSource, PartitionId,
//! };
//!
//! let source = LocalSequentialIdentifierSource::new(InMemoryComponentStore::new());
//!
//! let ids = source.reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 2).unwrap();
//! assert_eq!(ids, vec![1003, 2005]);
//! ```
//!
//! ## Operating assumption
//!
//! Exactly one `LocalSequentialIdentifierSource` may be active against a
//! given (namespace, partition) key space. Independent allocator instances,
//! for example in separate processes, can produce colliding identifiers.

#![warn(missing_docs)]

mod allocator;
mod finder;
mod partition;
mod source;
mod store;
mod types;
pub mod verhoeff;

pub use partition::{Partition, PartitionId, PartitionTable};
pub use source::{IdentifierSource, LocalSequentialIdentifierSource};
pub use store::{ComponentStore, IdField, InMemoryComponentStore};
pub use types::{IdentifierError, IdentifierResult, StoreError};

// Re-export snomed-types for convenience
pub use snomed_types;
