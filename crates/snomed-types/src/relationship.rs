//! SNOMED CT Relationship type.

use crate::{well_known, SctId};

/// A SNOMED CT relationship as held by the content store.
///
/// # Examples
///
/// ```
/// use snomed_types::{well_known, Relationship};
///
/// let relationship = Relationship {
///     id: 100000028,
///     effective_time: Some(20020131),
///     active: true,
///     module_id: well_known::CORE_MODULE,
///     source_id: 73211009,        // Diabetes mellitus
///     destination_id: 362969004,  // Disorder of endocrine system
///     relationship_group: 0,
///     type_id: well_known::IS_A,
///     characteristic_type_id: well_known::INFERRED_RELATIONSHIP,
///     modifier_id: well_known::EXISTENTIAL_MODIFIER,
/// };
///
/// assert!(relationship.is_is_a());
/// assert!(relationship.is_inferred());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    /// Unique identifier for this relationship (SCTID).
    pub id: SctId,
    /// Effective date in YYYYMMDD format; `None` for unversioned content.
    pub effective_time: Option<u32>,
    /// Whether this relationship is active.
    pub active: bool,
    /// The module containing this relationship.
    pub module_id: SctId,
    /// Source concept (subject).
    pub source_id: SctId,
    /// Destination concept (object/value).
    pub destination_id: SctId,
    /// Role group number (0 = ungrouped).
    pub relationship_group: u16,
    /// Relationship type (e.g., IS_A, Finding site).
    pub type_id: SctId,
    /// Whether this is stated or inferred.
    pub characteristic_type_id: SctId,
    /// Modifier (existential or universal).
    pub modifier_id: SctId,
}

impl Relationship {
    /// Returns true if this is an IS_A (subtype) relationship.
    pub fn is_is_a(&self) -> bool {
        self.type_id == well_known::IS_A
    }

    /// Returns true if this is a stated relationship.
    pub fn is_stated(&self) -> bool {
        self.characteristic_type_id == well_known::STATED_RELATIONSHIP
    }

    /// Returns true if this is an inferred relationship.
    pub fn is_inferred(&self) -> bool {
        self.characteristic_type_id == well_known::INFERRED_RELATIONSHIP
    }
}
