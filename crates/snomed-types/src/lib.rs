//! # snomed-types
//!
//! Type definitions for SNOMED CT clinical terminology components.
//!
//! This crate provides the component record types a terminology content
//! store holds (concepts, descriptions, relationships, reference set
//! members), the [`SctId`] identifier type, and well-known metadata
//! concept constants.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via
//!   serde. Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use snomed_types::{well_known, Concept, ComponentKind, SctId};
//!
//! let concept = Concept {
//!     id: 73211009,
//!     effective_time: Some(20020131),
//!     active: true,
//!     module_id: well_known::CORE_MODULE,
//!     definition_status_id: well_known::PRIMITIVE,
//! };
//!
//! assert!(concept.is_primitive());
//! assert_eq!(ComponentKind::Concept.as_str(), "concept");
//! ```
//!
//! ## Without Serde
//!
//! To use this crate without serde (zero dependencies):
//!
//! ```toml
//! [dependencies]
//! snomed-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod component;
mod concept;
mod description;
mod refset;
mod relationship;
mod sctid;
pub mod well_known;

// Re-export all public types at crate root
pub use component::ComponentKind;
pub use concept::Concept;
pub use description::Description;
pub use refset::RefsetMember;
pub use relationship::Relationship;
pub use sctid::SctId;
