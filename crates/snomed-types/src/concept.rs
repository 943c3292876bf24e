//! SNOMED CT Concept type.

use crate::{well_known, SctId};

/// A SNOMED CT concept as held by the content store.
///
/// Authoring-side shape: `effective_time` is `None` while the concept is
/// unversioned (created or changed since the last release).
///
/// # Examples
///
/// ```
/// use snomed_types::{well_known, Concept};
///
/// let concept = Concept {
///     id: 73211009,
///     effective_time: Some(20020131),
///     active: true,
///     module_id: well_known::CORE_MODULE,
///     definition_status_id: well_known::PRIMITIVE,
/// };
///
/// assert!(concept.is_primitive());
/// assert!(concept.is_released());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concept {
    /// Unique identifier for this concept (SCTID).
    pub id: SctId,
    /// Effective date in YYYYMMDD format; `None` for unversioned content.
    pub effective_time: Option<u32>,
    /// Whether this concept is active (true) or inactive (false).
    pub active: bool,
    /// The module containing this concept.
    pub module_id: SctId,
    /// Whether this concept is primitive or fully defined.
    pub definition_status_id: SctId,
}

impl Concept {
    /// Returns true if this concept has appeared in a release.
    pub fn is_released(&self) -> bool {
        self.effective_time.is_some()
    }

    /// Returns true if this concept is primitively defined.
    pub fn is_primitive(&self) -> bool {
        self.definition_status_id == well_known::PRIMITIVE
    }

    /// Returns true if this concept is fully defined.
    pub fn is_fully_defined(&self) -> bool {
        self.definition_status_id == well_known::FULLY_DEFINED
    }
}
