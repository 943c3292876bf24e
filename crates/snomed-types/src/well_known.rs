//! Well-known SNOMED CT concept IDs.
//!
//! Constants for the metadata concepts this workspace touches: modules,
//! definition statuses, description types, and characteristic types.
//!
//! # Examples
//!
//! ```
//! use snomed_types::well_known;
//!
//! let type_id: u64 = 116680003;
//! assert_eq!(type_id, well_known::IS_A);
//! ```

use crate::SctId;

/// SNOMED CT core module - 900000000000207008.
///
/// The module containing International Edition content.
pub const CORE_MODULE: SctId = 900000000000207008;

/// SNOMED CT model component module - 900000000000012004.
///
/// The module containing the metadata model itself.
pub const MODEL_MODULE: SctId = 900000000000012004;

/// IS_A relationship type - 116680003.
///
/// Defines the subtype hierarchy.
pub const IS_A: SctId = 116680003;

/// Primitive definition status - 900000000000074008.
pub const PRIMITIVE: SctId = 900000000000074008;

/// Fully defined definition status - 900000000000073002.
pub const FULLY_DEFINED: SctId = 900000000000073002;

/// Fully specified name description type - 900000000000003001.
pub const FSN: SctId = 900000000000003001;

/// Synonym description type - 900000000000013009.
pub const SYNONYM: SctId = 900000000000013009;

/// Inferred relationship characteristic type - 900000000000011006.
pub const INFERRED_RELATIONSHIP: SctId = 900000000000011006;

/// Stated relationship characteristic type - 900000000000010007.
pub const STATED_RELATIONSHIP: SctId = 900000000000010007;

/// Existential restriction modifier - 900000000000451002.
pub const EXISTENTIAL_MODIFIER: SctId = 900000000000451002;

/// Entire term case insensitive - 900000000000448009.
pub const CASE_INSENSITIVE: SctId = 900000000000448009;
